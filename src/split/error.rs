//! Errors surfaced by the session, clipboard and export layers
//!
//! Extraction and composition are total and never fail; everything here is
//! a recoverable, user-facing condition.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    /// Extraction was requested on blank input
    #[error("Please enter some code first!")]
    EmptyInput,

    /// An artifact or preview could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The clipboard backend rejected the text
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    /// A batch export task panicked or was cancelled
    #[error("export task failed: {0}")]
    Task(String),
}

impl SplitError {
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SplitError::Write {
            path: path.into(),
            source,
        }
    }
}
