use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    pub final_value: f64,
    pub net_profit: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
    pub equity_curve: Vec<EquityPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: String,
    pub value: f64,
}

impl BacktestResult {
    pub fn from_value(value: &serde_json::Value) -> anyhow::Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn total_return(&self) -> Option<f64> {
        let first = self.equity_curve.first()?.value;
        if first == 0.0 {
            return None;
        }
        Some(self.final_value / first - 1.0)
    }
}
