use thiserror::Error;

#[derive(Error, Debug)]
pub enum RvarError {
    #[error("Unable to load {endpoint}: {reason}")]
    FetchFailed { endpoint: String, reason: String },

    #[error("Stale response: generation {received}, latest is {latest}")]
    StaleResponse { received: u64, latest: u64 },

    #[error("Invalid page: {0}")]
    InvalidPage(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl RvarError {
    pub fn fetch_failed(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        RvarError::FetchFailed {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RvarError>;
