use crate::error::{Result, StashError};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes a file through a temporary sibling and renames it into place on commit.
///
/// Dropping the writer without committing leaves the target untouched.
pub struct AtomicWriter {
    target: PathBuf,
    temp_file: AtomicWriteFile,
    written: u64,
}

impl AtomicWriter {
    /// Open a temporary file next to `target`. The parent directory must exist.
    pub fn new(target: &Path) -> Result<Self> {
        // Bare file names have an empty parent
        let target = match target.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Path::new(".").join(target),
            _ => target.to_path_buf(),
        };

        let temp_file = AtomicWriteFile::open(&target).map_err(|e| StashError::WriteFailed {
            path: target.clone(),
            source: e,
        })?;

        Ok(AtomicWriter {
            target,
            temp_file,
            written: 0,
        })
    }

    pub fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.temp_file
            .write_all(buf)
            .map_err(|e| StashError::WriteFailed {
                path: self.target.clone(),
                source: e,
            })?;
        self.written += buf.len() as u64;
        Ok(())
    }

    /// Stream the whole of `source` into the temporary file
    pub fn copy_from(&mut self, source: &Path) -> Result<u64> {
        let mut input = File::open(source).map_err(|e| StashError::ReadFailed {
            path: source.to_path_buf(),
            source: e,
        })?;

        let mut buffer = [0u8; 8192];
        loop {
            let n = match input.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(StashError::ReadFailed {
                        path: source.to_path_buf(),
                        source: e,
                    })
                }
            };
            self.write_all(&buffer[..n])?;
        }

        Ok(self.written)
    }

    /// Atomically replace the target with what has been written so far
    pub fn commit(self) -> Result<u64> {
        let AtomicWriter {
            target,
            temp_file,
            written,
        } = self;

        temp_file.commit().map_err(|e| StashError::WriteFailed {
            path: target.clone(),
            source: e,
        })?;

        debug!("Committed {} bytes to {}", written, target.display());
        Ok(written)
    }
}

/// Copy `source` over `target` byte for byte, atomically
pub fn copy_atomically(source: &Path, target: &Path) -> Result<u64> {
    let mut writer = AtomicWriter::new(target)?;
    writer.copy_from(source)?;
    writer.commit()
}
