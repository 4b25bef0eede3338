use crate::error::{Result, StashError};
use crate::paths::{ArtifactKind, StorageLayout, DEFAULT_LOCK_FILE};
use crate::write::copy_atomically;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Copy the lock file to its backup artifact.
///
/// `None` means the default `composer.lock`. Returns the artifact path, or
/// `None` when there was no lock file to copy.
pub fn backup(lock_path: Option<&Path>) -> Result<Option<PathBuf>> {
    stash(lock_path, ArtifactKind::Backup)
}

/// Copy the lock file to its mock artifact. Same contract as [`backup`].
pub fn mock(lock_path: Option<&Path>) -> Result<Option<PathBuf>> {
    stash(lock_path, ArtifactKind::Mock)
}

pub fn stash(lock_path: Option<&Path>, kind: ArtifactKind) -> Result<Option<PathBuf>> {
    stash_with(&StorageLayout::default(), lock_path, kind)
}

/// Copy the lock file into the artifact of `kind` under `layout`
pub fn stash_with(
    layout: &StorageLayout,
    lock_path: Option<&Path>,
    kind: ArtifactKind,
) -> Result<Option<PathBuf>> {
    let source = lock_path.unwrap_or_else(|| Path::new(DEFAULT_LOCK_FILE));

    // First runs have no lock file yet
    if !source.is_file() {
        debug!("No lock file at {}, skipping {}", source.display(), kind);
        return Ok(None);
    }

    let paths = layout.resolve(source)?;
    let artifact = paths.artifact(kind);

    fs::create_dir_all(&paths.storage_root).map_err(|e| StashError::CreateDirFailed {
        path: paths.storage_root.clone(),
        source: e,
    })?;

    debug!(
        "Creating {}: {} -> {}",
        kind,
        source.display(),
        artifact.display()
    );

    let bytes = copy_atomically(source, artifact)?;

    info!("Stored {} ({} bytes): {}", kind, bytes, artifact.display());
    Ok(Some(artifact.to_path_buf()))
}
