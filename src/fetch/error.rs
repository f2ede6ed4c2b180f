use thiserror::Error;

/// Failure to obtain a page body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] wreq::Error),

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Giving up on {url} after {attempts} attempts: {reason}")]
    Exhausted { url: String, attempts: u32, reason: String },
}

impl FetchError {
    /// HTTP status behind the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
