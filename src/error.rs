//! Error types for building and sending the observation request.

use reqwest::StatusCode;
use thiserror::Error;

/// Bad or missing query parameters, detected before any network activity
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("query field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("invalid help flag {0:?}: expected 0 or 1")]
    InvalidHelpFlag(String),

    #[error("unknown URL style {0:?}: expected `verbatim` or `well-formed`")]
    UnknownUrlStyle(String),

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Failure of the single GET request
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(StatusCode),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}
