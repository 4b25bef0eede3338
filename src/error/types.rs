use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StashError {
    #[error("Failed to create storage directory {path}: {source}")]
    CreateDirFailed { path: PathBuf, source: io::Error },

    #[error("Failed to read from {path}: {source}")]
    ReadFailed { path: PathBuf, source: io::Error },

    #[error("Failed to write to {path}: {source}")]
    WriteFailed { path: PathBuf, source: io::Error },

    #[error("Invalid lock file path '{}': no file name", .0.display())]
    InvalidLockPath(PathBuf),

    #[error("Invalid storage layout segment '{0}'")]
    InvalidLayoutSegment(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl StashError {
    pub fn exit_code(&self) -> i32 {
        match self {
            StashError::InvalidLockPath(_) | StashError::InvalidLayoutSegment(_) => 2,
            StashError::CreateDirFailed { source, .. }
            | StashError::ReadFailed { source, .. }
            | StashError::WriteFailed { source, .. }
            | StashError::Io(source)
                if source.kind() == io::ErrorKind::Interrupted =>
            {
                3
            }
            _ => 1,
        }
    }

    /// The underlying I/O error, if any
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            StashError::CreateDirFailed { source, .. }
            | StashError::ReadFailed { source, .. }
            | StashError::WriteFailed { source, .. }
            | StashError::Io(source) => Some(source),
            StashError::InvalidLockPath(_) | StashError::InvalidLayoutSegment(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StashError>;
