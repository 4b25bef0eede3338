use crate::error::{Result, StashError};
use std::ffi::OsString;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Lock file used when the caller does not name one
pub const DEFAULT_LOCK_FILE: &str = "composer.lock";

const STORAGE_DIR: &str = "storage";
const DEFAULT_NAMESPACE: &str = "statamic";
const UPDATER_DIR: &str = "updater";

/// The two kinds of copy kept next to a lock file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Backup,
    Mock,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Backup, ArtifactKind::Mock];

    /// Suffix appended to the lock file name
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Backup => "bak",
            ArtifactKind::Mock => "mock",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Backup => f.write_str("backup"),
            ArtifactKind::Mock => f.write_str("mock"),
        }
    }
}

/// Directory segments placed between a lock file's directory and its artifacts.
///
/// The default is `storage/statamic/updater`. Only the namespace segment is
/// configurable; the storage root is always derived from the lock file's
/// own directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    namespace: String,
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl StorageLayout {
    pub fn with_namespace(namespace: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        validate_segment(&namespace)?;
        Ok(Self { namespace })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Storage root for the given lock file: `dirname(lock)/storage/<ns>/updater`
    pub fn storage_root(&self, lock_path: &Path) -> PathBuf {
        let root = lock_path.parent().unwrap_or_else(|| Path::new(""));
        root.join(STORAGE_DIR)
            .join(&self.namespace)
            .join(UPDATER_DIR)
    }

    /// Resolve every path derived from `lock_path`
    pub fn resolve(&self, lock_path: &Path) -> Result<LockPaths> {
        let file_name = lock_path
            .file_name()
            .ok_or_else(|| StashError::InvalidLockPath(lock_path.to_path_buf()))?;

        let storage_root = self.storage_root(lock_path);
        let artifact = |kind: ArtifactKind| {
            let mut name = OsString::from(file_name);
            name.push(".");
            name.push(kind.extension());
            storage_root.join(name)
        };

        Ok(LockPaths {
            source: lock_path.to_path_buf(),
            backup: artifact(ArtifactKind::Backup),
            mock: artifact(ArtifactKind::Mock),
            storage_root,
        })
    }
}

/// A lock file together with the locations of its artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockPaths {
    pub source: PathBuf,
    pub storage_root: PathBuf,
    pub backup: PathBuf,
    pub mock: PathBuf,
}

impl LockPaths {
    pub fn artifact(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Backup => &self.backup,
            ArtifactKind::Mock => &self.mock,
        }
    }
}

/// Resolve paths for `lock_path` under the default layout
pub fn resolve(lock_path: &Path) -> Result<LockPaths> {
    StorageLayout::default().resolve(lock_path)
}

fn validate_segment(segment: &str) -> Result<()> {
    let mut components = Path::new(segment).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == segment => Ok(()),
        _ => Err(StashError::InvalidLayoutSegment(segment.to_string())),
    }
}
