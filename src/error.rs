use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrideError {
    /// Writing the report to the console failed.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StrideError>;
