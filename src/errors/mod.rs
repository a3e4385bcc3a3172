//! Error types shared by the token manager and every service call.

pub mod response;

pub use response::{ErrorResponse, Violation};

use thiserror::Error;

/// Errors returned by the client.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid credentials/settings, detected before any network activity.
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failure (status 0), non-success response, or undecodable success body.
    #[error(transparent)]
    Api(#[from] ErrorResponse),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// HTTP status of the failed exchange; `None` for configuration errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(resp) => Some(resp.status),
            Error::Config(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Api(resp) if resp.is_transport())
    }

    pub fn as_response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::Api(resp) => Some(resp),
            Error::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(ErrorResponse::from_transport(&err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
