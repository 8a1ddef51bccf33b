//! Error types for Harbor API operations

use reqwest::{Method, StatusCode};
use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the client.
///
/// Every failure propagates directly to the caller; the only automatic
/// recovery anywhere in the crate is the login-on-401 behavior of the
/// authentication probe.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A relative path could not be resolved against the base URL.
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The request produced no response (connection, DNS, TLS, ...).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a status outside [200, 299].
    /// The response body is discarded.
    #[error("{method} {url} returned {status}")]
    Status {
        method: Method,
        url: Url,
        status: StatusCode,
    },

    /// A 2xx response body could not be decoded into the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl Error {
    /// The HTTP status code carried by a [`Error::Status`], if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the error is a 404 response, the service's way of
    /// answering "no such project" on existence checks.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
