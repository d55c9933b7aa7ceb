//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Client configuration errors. Always fatal at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Bad label given: '{label}'. Supported labels: {supported}")]
    BadLabel { label: String, supported: String },

    #[error("Bad url: {0}")]
    BadUrl(String),

    #[error("Unsupported api version: '{version}'. Supported versions: {supported}")]
    UnsupportedApiVersion { version: String, supported: String },
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid HTTP method: '{0}'")]
    BadMethod(String),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },
}

/// Authentication errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No registered strategy had its parameters satisfied.
    #[error("Missing auth configuration: {0}")]
    MissingAuthConf(String),

    #[error("Auth strategy already registered: {0}")]
    DuplicateStrategy(String),
}
