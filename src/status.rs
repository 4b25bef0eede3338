use crate::error::{Result, StashError};
use crate::paths::{ArtifactKind, LockPaths, StorageLayout, DEFAULT_LOCK_FILE};
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    pub len: u64,
    pub modified: Option<DateTime<Local>>,
}

#[derive(Debug, Clone)]
pub struct ArtifactInfo {
    pub file: FileInfo,
    /// Byte-identical to the current lock file
    pub matches_source: bool,
}

/// Snapshot of a lock file and its artifacts
#[derive(Debug, Clone)]
pub struct LockStatus {
    pub paths: LockPaths,
    pub source: Option<FileInfo>,
    pub backup: Option<ArtifactInfo>,
    pub mock: Option<ArtifactInfo>,
}

impl LockStatus {
    pub fn artifact(&self, kind: ArtifactKind) -> Option<&ArtifactInfo> {
        match kind {
            ArtifactKind::Backup => self.backup.as_ref(),
            ArtifactKind::Mock => self.mock.as_ref(),
        }
    }
}

pub fn status(lock_path: Option<&Path>) -> Result<LockStatus> {
    status_with(&StorageLayout::default(), lock_path)
}

/// Inspect the lock file and both artifacts. Read-only.
pub fn status_with(layout: &StorageLayout, lock_path: Option<&Path>) -> Result<LockStatus> {
    let lock_path = lock_path.unwrap_or_else(|| Path::new(DEFAULT_LOCK_FILE));
    let paths = layout.resolve(lock_path)?;

    let source = file_info(&paths.source)?;
    let source_bytes = match &source {
        Some(_) => Some(read(&paths.source)?),
        None => None,
    };

    let artifact_info = |path: &Path| -> Result<Option<ArtifactInfo>> {
        let Some(file) = file_info(path)? else {
            return Ok(None);
        };
        let matches_source = match &source_bytes {
            Some(bytes) => file.len == bytes.len() as u64 && read(path)? == *bytes,
            None => false,
        };
        Ok(Some(ArtifactInfo {
            file,
            matches_source,
        }))
    };

    let backup = artifact_info(&paths.backup)?;
    let mock = artifact_info(&paths.mock)?;

    Ok(LockStatus {
        paths,
        source,
        backup,
        mock,
    })
}

fn file_info(path: &Path) -> Result<Option<FileInfo>> {
    let metadata = match fs::metadata(path) {
        Ok(m) if m.is_file() => m,
        Ok(_) => return Ok(None),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StashError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    Ok(Some(FileInfo {
        path: path.to_path_buf(),
        len: metadata.len(),
        modified: metadata.modified().ok().map(DateTime::<Local>::from),
    }))
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| StashError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
