use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while archiving a single page
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The supplied string is not an absolute URL with a scheme and a host
    #[error("{0} is not a valid URL")]
    InvalidUrl(String),

    /// The HTTP request could not be completed
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// A filesystem operation failed
    #[error("filesystem error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The asset reference cannot be mapped to a file inside the archive directory
    #[error("asset reference {0} does not map to a path inside the archive")]
    UnsafeAssetPath(String),

    /// The configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl ArchiveError {
    /// Wraps an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
