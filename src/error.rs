use serde::Deserialize;
use thiserror::Error;

/// Error code the backend reports when a single-object fetch matched no
/// rows. Callers treat it as "absent", not as a failure.
pub const NO_ROWS_CODE: &str = "PGRST116";

/// Main error type for fittrack-data
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Backend error: {message}")]
    Backend { message: String },

    #[error("Row not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error from a message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error from a message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Error document returned by the backend's REST layer.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    message: Option<String>,
    code: Option<String>,
}

/// Convert a failed backend response into a single normalized error.
///
/// The raw failure is logged here; callers only ever see the shaped
/// [`Error::Backend`]. If the body is a recognized backend error document
/// its message is carried through, otherwise a generic fallback is used.
pub(crate) fn normalize(status: reqwest::StatusCode, body: &str) -> Error {
    tracing::error!(%status, body, "backend request failed");

    let message = serde_json::from_str::<BackendErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| "An unknown error occurred while accessing the backend".to_string());

    Error::Backend { message }
}

/// Whether a failed response body is the backend's "no rows" condition.
pub(crate) fn is_no_rows(body: &str) -> bool {
    serde_json::from_str::<BackendErrorBody>(body)
        .map(|parsed| parsed.code.as_deref() == Some(NO_ROWS_CODE))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_display() {
        let err = Error::Backend {
            message: "duplicate key value violates unique constraint".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Backend error: duplicate key value violates unique constraint"
        );
    }

    #[test]
    fn test_normalize_carries_backend_message() {
        let body = r#"{"message":"permission denied for table workouts","code":"42501","details":null,"hint":null}"#;
        let err = normalize(StatusCode::FORBIDDEN, body);
        assert!(matches!(
            err,
            Error::Backend { ref message } if message == "permission denied for table workouts"
        ));
    }

    #[test]
    fn test_normalize_falls_back_on_unrecognized_body() {
        let err = normalize(StatusCode::BAD_GATEWAY, "<html>gateway timeout</html>");
        assert!(matches!(
            err,
            Error::Backend { ref message } if message.contains("unknown error")
        ));
    }

    #[test]
    fn test_no_rows_detection() {
        let body = r#"{"message":"JSON object requested, multiple (or no) rows returned","code":"PGRST116"}"#;
        assert!(is_no_rows(body));
        assert!(!is_no_rows(r#"{"message":"boom","code":"42501"}"#));
        assert!(!is_no_rows("not json"));
    }

    #[test]
    fn test_error_constructors() {
        let config_err = Error::config("missing endpoint");
        assert!(matches!(config_err, Error::Config(_)));

        let input_err = Error::invalid_input("bad photo url");
        assert!(matches!(input_err, Error::InvalidInput(_)));
    }
}
