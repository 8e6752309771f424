use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SfindError {
    // Config
    #[error("{0}")]
    Usage(String),

    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("failed to stat reference file {}", .path.display())]
    Reference {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot resolve current directory")]
    CurrentDir(#[source] std::io::Error),

    // Traversal
    #[error("cannot walk {}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stat file {}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Output
    #[error("failed to write results")]
    Output(#[source] std::io::Error),
}

impl SfindError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Reference { path, .. }
            | Self::Walk { path, .. }
            | Self::Resolve { path, .. } => Some(path),
            _ => None,
        }
    }
}
