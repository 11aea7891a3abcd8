//! Error types for input collection.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while acquiring the stylesheet text.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Failed to read from stdin.
    #[error("Failed to read stdin")]
    StdinFailed(#[source] io::Error),

    /// Failed to read the stylesheet file given on the command line.
    #[error("Failed to read '{}'", path.display())]
    FileFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No input was provided and no default is available.
    #[error("No input provided and no default available.")]
    NoInput,
}

impl InputError {
    /// Create a file read error.
    pub fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileFailed {
            path: path.into(),
            source,
        }
    }
}
