use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use hedgefund_core::client::HedgeFundBackend;
use hedgefund_core::domain::analyze::{AnalyzeRequest, BackendAnalyzeRequest};

use crate::AppState;

pub(crate) const FAILURE_MESSAGE: &str = "Failed to process request";

// Every failure collapses into one opaque 500; the cause only goes to logs and Sentry.
pub(crate) async fn analyze(State(state): State<AppState>, body: Bytes) -> Response {
    match forward(state.backend.as_ref(), &body).await {
        Ok(value) => Json(value).into_response(),
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(error = %format!("{err:#}"), "analyze relay failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": FAILURE_MESSAGE })),
            )
                .into_response()
        }
    }
}

async fn forward(backend: &dyn HedgeFundBackend, body: &[u8]) -> anyhow::Result<Value> {
    let request = serde_json::from_slice::<AnalyzeRequest>(body)
        .context("failed to parse analyze request body")?;
    let request = BackendAnalyzeRequest::from(request);

    tracing::info!(
        ticker = %request.ticker,
        start_date = %request.start_date,
        end_date = %request.end_date,
        "relaying analyze request"
    );

    backend
        .analyze(&request)
        .await
        .context("backend analyze call failed")
}
