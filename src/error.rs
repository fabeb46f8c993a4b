//! Error types for icon resolution and download.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::icon::{Family, Style};

/// Everything that can go wrong while resolving, building or fetching an icon.
#[derive(Error, Debug)]
pub enum IconError {
    /// Transport-level failure (DNS, refused connection, timeout, broken body).
    #[error("request to {url} failed: {source}")]
    Network {
        /// The URL that failed
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be configured.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    /// The homepage was fetched but carried no release stylesheet link.
    #[error("version link not found in the response from {url}")]
    VersionNotFound { url: String },

    #[error("Invalid icon family '{value}'. Valid options are: {valid}.", valid = Family::names())]
    InvalidFamily { value: String },

    #[error("Invalid icon style '{value}'. Valid options are: {valid}.", valid = Style::names())]
    InvalidStyle { value: String },

    #[error("Invalid icon name '{value}': {reason}")]
    InvalidName { value: String, reason: &'static str },

    /// Creating the icon directory or writing the SVG failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Interactive input was cancelled or the terminal went away.
    #[error("prompt aborted: {0}")]
    Prompt(#[from] inquire::InquireError),
}

impl IconError {
    /// Whether this is an input validation failure (recoverable while prompting).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidFamily { .. } | Self::InvalidStyle { .. } | Self::InvalidName { .. }
        )
    }

    pub(crate) fn network(url: &str, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.to_owned(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
