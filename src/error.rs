use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("download of {url} failed with status: {status}")]
    Transfer { url: String, status: StatusCode },

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response body from {url} was interrupted")]
    Body {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),

    #[error("failed to print completion notice")]
    Notice(#[source] io::Error),

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
}

impl FetchError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FetchError::Storage {
            path: path.into(),
            source,
        }
    }

    /// Remote endpoint answered with a non-success status.
    pub fn is_transfer(&self) -> bool {
        matches!(self, FetchError::Transfer { .. })
    }

    /// The destination could not be written.
    pub fn is_storage(&self) -> bool {
        matches!(self, FetchError::Storage { .. })
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Transfer { status, .. } => Some(*status),
            _ => None,
        }
    }
}
