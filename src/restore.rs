use crate::error::Result;
use crate::paths::{ArtifactKind, StorageLayout, DEFAULT_LOCK_FILE};
use crate::write::copy_atomically;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Put an artifact back in place of the lock file.
///
/// The artifact is left where it is. Returns the restored lock file path, or
/// `None` when no artifact of `kind` exists.
pub fn restore(lock_path: Option<&Path>, kind: ArtifactKind) -> Result<Option<PathBuf>> {
    restore_with(&StorageLayout::default(), lock_path, kind)
}

pub fn restore_with(
    layout: &StorageLayout,
    lock_path: Option<&Path>,
    kind: ArtifactKind,
) -> Result<Option<PathBuf>> {
    let target = lock_path.unwrap_or_else(|| Path::new(DEFAULT_LOCK_FILE));
    let paths = layout.resolve(target)?;
    let artifact = paths.artifact(kind);

    if !artifact.is_file() {
        debug!("No {} at {}, nothing to restore", kind, artifact.display());
        return Ok(None);
    }

    let bytes = copy_atomically(artifact, target)?;

    info!(
        "Restored {} from {} ({} bytes)",
        target.display(),
        artifact.display(),
        bytes
    );
    Ok(Some(target.to_path_buf()))
}
