//! Error handling for doc-cookies

use thiserror::Error;

/// Main error type for doc-cookies operations
///
/// Rejected cookie names and missing cookies are not errors: the cookie
/// operations report those as `Ok(false)` or `Ok(None)`. This type only
/// covers failures of the ambient store and of configuration.
#[derive(Error, Debug)]
pub enum CookieError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid cookie attribute: {0}")]
    InvalidAttribute(String),
}

/// Result type alias for doc-cookies operations
pub type Result<T> = std::result::Result<T, CookieError>;
