//! Application error types.

use thiserror::Error;

/// Application-level errors for Neoviz.
#[derive(Error, Debug)]
pub enum AppError {
    // Transport and parse errors from the graph API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}
