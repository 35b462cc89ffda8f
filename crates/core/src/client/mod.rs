use crate::domain::analyze::BackendAnalyzeRequest;
use crate::domain::request::{BacktestRequest, HedgeFundRequest};
use serde_json::Value;

pub mod error;
pub mod http;
pub mod relay;

pub use http::BackendClient;
pub use relay::RelayClient;

// One HTTP request per call; bodies come back parsed but untouched.
#[async_trait::async_trait]
pub trait HedgeFundBackend: Send + Sync {
    async fn health_check(&self) -> anyhow::Result<Value>;

    async fn run_hedge_fund(&self, request: &HedgeFundRequest) -> anyhow::Result<Value>;

    async fn run_backtest(&self, request: &BacktestRequest) -> anyhow::Result<Value>;

    async fn analyze(&self, request: &BackendAnalyzeRequest) -> anyhow::Result<Value>;
}
