//! Error type for harness embedding.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can abort a run.
///
/// Each variant keeps the underlying `io::Error` so the OS reason
/// (permission denied, no such file, ...) reaches the user.
#[derive(Debug)]
pub enum EmbedError {
    /// The input could not be opened or read.
    Read { path: PathBuf, source: io::Error },
    /// The output could not be opened or written.
    Write { path: PathBuf, source: io::Error },
    /// The running executable's own directory could not be determined.
    ToolDir(io::Error),
}

impl EmbedError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        EmbedError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        EmbedError::Write {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbedError::Read { path, source } => {
                write!(f, "Error reading '{}': {source}", path.display())
            }
            EmbedError::Write { path, source } => {
                write!(f, "Error writing '{}': {source}", path.display())
            }
            EmbedError::ToolDir(source) => {
                write!(f, "Error locating the tool directory: {source}")
            }
        }
    }
}

impl std::error::Error for EmbedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmbedError::Read { source, .. }
            | EmbedError::Write { source, .. }
            | EmbedError::ToolDir(source) => Some(source),
        }
    }
}
