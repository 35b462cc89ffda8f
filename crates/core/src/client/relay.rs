use crate::client::http::BackendClient;
use crate::domain::analyze::AnalyzeRequest;
use anyhow::Result;
use serde_json::Value;

pub const DEFAULT_RELAY_URL: &str = "http://localhost:3000";
const RELAY_ANALYZE_PATH: &str = "/api/analyze";

#[derive(Debug, Clone)]
pub struct RelayClient {
    inner: BackendClient,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            inner: BackendClient::new(base_url)?,
        })
    }

    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<Value> {
        tracing::info!(ticker = %request.ticker, relay = self.inner.base_url(), "posting analysis to relay");
        self.inner.post_json(RELAY_ANALYZE_PATH, request).await
    }
}
