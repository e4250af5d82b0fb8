use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request rejected: {message}")]
    Rejected { message: String },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Missing required field: {field}")]
    Validation { field: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FormError>;
