//! Error types for vsac-client

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Client errors across the ticket exchange, retrieval, and cache paths
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("no ticket-granting ticket in the authentication response")]
    GrantNotFound,

    #[error("ticket endpoint returned an empty body")]
    EmptyTicket,

    #[error("SVS response error: {0}")]
    Svs(#[from] terbium_svs_format::SvsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
