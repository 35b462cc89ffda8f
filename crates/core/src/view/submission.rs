use crate::client::error::{error_detail, relay_message};

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

// Last submission started wins; earlier completions are dropped.
#[derive(Debug, Clone)]
pub struct Submission<T> {
    loading: bool,
    result: Option<T>,
    error: Option<String>,
    latest: u64,
}

impl<T> Default for Submission<T> {
    fn default() -> Self {
        Self {
            loading: false,
            result: None,
            error: None,
            latest: 0,
        }
    }
}

impl<T> Submission<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.loading = true;
        self.result = None;
        self.error = None;
        Ticket(self.latest)
    }

    pub fn complete(&mut self, ticket: Ticket, outcome: anyhow::Result<T>) -> bool {
        if ticket.0 != self.latest {
            tracing::debug!(ticket = ticket.0, latest = self.latest, "dropping stale submission");
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(value) => self.result = Some(value),
            Err(err) => self.error = Some(failure_message(&err)),
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn into_outcome(self) -> Option<Result<T, String>> {
        match (self.result, self.error) {
            (Some(value), _) => Some(Ok(value)),
            (None, Some(err)) => Some(Err(err)),
            (None, None) => None,
        }
    }
}

pub fn failure_message(err: &anyhow::Error) -> String {
    if let Some(detail) = error_detail(err) {
        return detail.to_string();
    }
    relay_message(err).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}
