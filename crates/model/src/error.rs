use std::path::{Path, PathBuf};

use crate::Sequence;

/// A file could not be read to the end.
///
/// Carries the lines read before the failure, which may be none.
#[derive(Debug, thiserror::Error)]
#[error("failed to read lines from {}", .path.display())]
pub struct LoadError {
    path: PathBuf,
    partial: Sequence,
    #[source]
    source: std::io::Error,
}

impl LoadError {
    pub fn new(path: PathBuf, partial: Sequence, source: std::io::Error) -> Self {
        Self {
            path,
            partial,
            source,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn partial(&self) -> &Sequence {
        &self.partial
    }

    pub fn io_error(&self) -> &std::io::Error {
        &self.source
    }

    pub fn into_partial(self) -> Sequence {
        self.partial
    }
}
