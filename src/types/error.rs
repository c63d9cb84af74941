use thiserror::Error;

/// kpidash error types
#[derive(Error, Debug)]
pub enum KpidashError {
    /// Failed to parse the dataset JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad CLI input or dataset configuration
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for kpidash
pub type Result<T> = std::result::Result<T, KpidashError>;
