use thiserror::Error;

use crate::models::Table;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed backend payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No authenticated session")]
    NotAuthenticated,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Row {id} not found in {table}")]
    NotFound { table: Table, id: String },

    #[error("Upload to {bucket}/{path} failed: {reason}")]
    Upload {
        bucket: String,
        path: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("{0} is required")]
    Validation(&'static str),

    #[error("{0} must be an http(s) URL")]
    InvalidUrl(&'static str),

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}
