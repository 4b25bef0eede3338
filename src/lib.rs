//! Back up, mock and restore a dependency lock file from package-manager hooks

pub mod error;
pub mod paths;
pub mod restore;
pub mod stash;
pub mod status;
pub mod write;

pub use error::{Result, StashError};
pub use paths::{resolve, ArtifactKind, LockPaths, StorageLayout, DEFAULT_LOCK_FILE};
pub use restore::{restore, restore_with};
pub use stash::{backup, mock, stash, stash_with};
pub use status::{status, status_with, ArtifactInfo, FileInfo, LockStatus};
pub use write::{copy_atomically, AtomicWriter};
