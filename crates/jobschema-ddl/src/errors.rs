use thiserror::Error;

/// Errors emitted while rendering or writing DDL.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("unsupported dialect: {0}")]
    UnsupportedDialect(String),
    #[error("invalid destination: {0}")]
    InvalidDestination(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for DDL emission.
pub type Result<T> = std::result::Result<T, EmitError>;
