use lockstage::{restore_with, ArtifactKind, Result, StorageLayout};
use std::path::Path;

pub fn execute_restore(
    layout: &StorageLayout,
    lock_file: &Path,
    kind: ArtifactKind,
    verbose: bool,
) -> Result<()> {
    let restored = restore_with(layout, Some(lock_file), kind)?;

    if verbose {
        match restored {
            Some(path) => eprintln!("Restored {} from {}", path.display(), kind),
            None => eprintln!("No {} of {}, nothing to restore", kind, lock_file.display()),
        }
    }

    Ok(())
}
