//! Custom error types for the MCP server.

use athletics_client::{AthleticsError, MeasurementError};
use thiserror::Error;

/// MCP server errors.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("API error: {0}")]
    Api(#[from] AthleticsError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Measurement(#[from] MeasurementError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl From<McpError> for String {
    fn from(err: McpError) -> Self {
        err.to_string()
    }
}

/// Result type alias for MCP operations.
pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_errors_keep_their_message() {
        let err: McpError = MeasurementError::InvalidMeasurement("bad".into()).into();
        let s: String = err.into();
        assert_eq!(s, "invalid measurement: bad");
    }

    #[test]
    fn store_errors_are_prefixed() {
        let err: McpError = AthleticsError::NotFound("participant 3".into()).into();
        assert_eq!(String::from(err), "API error: not found: participant 3");
    }

    #[test]
    fn session_errors_name_the_cause() {
        let err = McpError::Unauthorized("session expired, log in again".into());
        assert_eq!(String::from(err), "Unauthorized: session expired, log in again");
    }
}
