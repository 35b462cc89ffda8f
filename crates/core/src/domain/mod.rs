pub mod analyze;
pub mod backtest;
pub mod request;
