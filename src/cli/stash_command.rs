use lockstage::{stash_with, ArtifactKind, Result, StorageLayout};
use std::path::Path;

pub fn execute_stash(
    layout: &StorageLayout,
    lock_file: &Path,
    kind: ArtifactKind,
    verbose: bool,
) -> Result<()> {
    let created = stash_with(layout, Some(lock_file), kind)?;

    if verbose {
        match created {
            Some(artifact) => eprintln!(
                "Created {}: {} -> {}",
                kind,
                lock_file.display(),
                artifact.display()
            ),
            None => eprintln!("No lock file at {}, nothing to do", lock_file.display()),
        }
    }

    Ok(())
}
