//! Application-level errors

use thiserror::Error;

/// Failures of an optimize session plus application-level concerns.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    InputValidation(String),

    #[error("optimizer request failed: {}", describe_transport(.status, .message))]
    Transport {
        /// HTTP status when the server answered, None for network failures
        status: Option<u16>,
        message: String,
    },

    #[error("invalid response format from server: {0}")]
    MalformedResponse(String),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn describe_transport(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("HTTP status {}", code),
        None => message.to_string(),
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
