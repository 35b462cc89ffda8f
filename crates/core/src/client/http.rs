use crate::client::error::BackendError;
use crate::client::HedgeFundBackend;
use crate::config::Settings;
use crate::domain::analyze::BackendAnalyzeRequest;
use crate::domain::request::{BacktestRequest, HedgeFundRequest};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

const HEALTH_PATH: &str = "/api/health";
const RUN_HEDGE_FUND_PATH: &str = "/api/run-hedge-fund";
const RUN_BACKTEST_PATH: &str = "/api/run-backtest";
const ANALYZE_PATH: &str = "/analyze";

// No timeout, retry or caching on top of the transport.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(settings.backend_base_url())
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to build backend http client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let req = self.http.get(self.url(path));
        self.send(path, req).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let req = self.http.post(self.url(path)).json(body);
        self.send(path, req).await
    }

    async fn send(&self, path: &str, req: reqwest::RequestBuilder) -> Result<Value> {
        let res = req.send().await.map_err(|e| BackendError::Network {
            detail: e.to_string(),
        })?;

        let status = res.status();
        let text = res.text().await.map_err(|e| BackendError::Network {
            detail: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            tracing::warn!(path, %status, "backend returned an error status");
            return Err(BackendError::http(status, text).into());
        }

        let body = serde_json::from_str::<Value>(&text).map_err(|e| BackendError::Decode {
            detail: e.to_string(),
            raw_body: text.clone(),
        })?;

        tracing::debug!(path, %status, "backend call succeeded");
        Ok(body)
    }
}

#[async_trait::async_trait]
impl HedgeFundBackend for BackendClient {
    async fn health_check(&self) -> Result<Value> {
        self.get_json(HEALTH_PATH).await
    }

    async fn run_hedge_fund(&self, request: &HedgeFundRequest) -> Result<Value> {
        tracing::info!(ticker = %request.ticker, "running hedge fund");
        self.post_json(RUN_HEDGE_FUND_PATH, request).await
    }

    async fn run_backtest(&self, request: &BacktestRequest) -> Result<Value> {
        tracing::info!(
            ticker = %request.ticker,
            start_date = %request.start_date,
            end_date = %request.end_date,
            "running backtest"
        );
        self.post_json(RUN_BACKTEST_PATH, request).await
    }

    async fn analyze(&self, request: &BackendAnalyzeRequest) -> Result<Value> {
        tracing::info!(ticker = %request.ticker, "forwarding analysis request");
        self.post_json(ANALYZE_PATH, request).await
    }
}
