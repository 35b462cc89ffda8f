use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone)]
pub enum BackendError {
    // Connect refused, reset, body read.
    Network { detail: String },

    Http {
        status: StatusCode,
        detail: Option<String>,
        raw_body: String,
    },

    // 2xx with a body that is not JSON.
    Decode { detail: String, raw_body: String },
}

impl BackendError {
    pub(crate) fn http(status: StatusCode, raw_body: String) -> Self {
        let detail = serde_json::from_str::<Value>(&raw_body)
            .ok()
            .as_ref()
            .and_then(detail_field);
        Self::Http {
            status,
            detail,
            raw_body,
        }
    }

    pub fn relay_message(&self) -> Option<String> {
        match self {
            Self::Http { raw_body, .. } => serde_json::from_str::<Value>(raw_body)
                .ok()?
                .get("error")?
                .as_str()
                .map(str::to_string),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { detail } => write!(f, "backend unreachable: {detail}"),
            Self::Http {
                status,
                detail: Some(detail),
                ..
            } => write!(f, "backend HTTP {status}: {detail}"),
            Self::Http { status, .. } => write!(f, "backend HTTP {status}"),
            Self::Decode { detail, .. } => write!(f, "backend response is not JSON: {detail}"),
        }
    }
}

impl std::error::Error for BackendError {}

// FastAPI puts `HTTPException(detail=...)` at the top level. Validation
// errors carry a list instead of a string; those are not a display message.
fn detail_field(body: &Value) -> Option<String> {
    body.get("detail")?.as_str().map(str::to_string)
}

fn backend_error(err: &anyhow::Error) -> Option<&BackendError> {
    err.chain().find_map(|e| e.downcast_ref::<BackendError>())
}

/// Walks an error chain looking for a backend-supplied `detail`.
pub fn error_detail(err: &anyhow::Error) -> Option<&str> {
    backend_error(err).and_then(BackendError::detail)
}

pub fn relay_message(err: &anyhow::Error) -> Option<String> {
    backend_error(err).and_then(BackendError::relay_message)
}
