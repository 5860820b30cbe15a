//! Destination directory handling.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::ExtractionError;
use crate::Result;

/// The canonical destination directory of one extraction.
///
/// Construction creates the directory if it is missing and canonicalizes
/// it, so every containment check compares against the same absolute,
/// symlink-free path.
///
/// # Examples
///
/// ```no_run
/// use unarc_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp/extraction")?;
/// println!("Extracting to: {}", dest.as_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Creates (if needed) and canonicalizes the destination directory.
    ///
    /// # Errors
    ///
    /// Returns `CreateDirectory` if the directory cannot be created, or
    /// `Io` if it exists but is not a directory or cannot be canonicalized.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        fs::create_dir_all(&path).map_err(|source| ExtractionError::CreateDirectory {
            path: path.clone(),
            source,
        })?;

        let canonical = path.canonicalize().map_err(|e| {
            ExtractionError::Io(io::Error::new(
                e.kind(),
                format!("failed to canonicalize path {}: {e}", path.display()),
            ))
        })?;

        if !canonical.is_dir() {
            return Err(ExtractionError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path is not a directory: {}", canonical.display()),
            )));
        }

        Ok(Self(canonical))
    }

    /// Returns the canonical path.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Ensures the parent of `target` exists and, for files, is writable.
    ///
    /// Missing ancestors are created. A directory target only needs its
    /// parent to exist; a file target additionally needs write permission
    /// on the parent, checked before anything is opened for writing.
    ///
    /// # Errors
    ///
    /// - `CreateDirectory` naming the parent if it cannot be created
    /// - `PermissionDenied` naming the parent if a file cannot be written there
    pub fn prepare(&self, target: &Path, is_directory: bool) -> Result<()> {
        let Some(parent) = target.parent() else {
            return Ok(());
        };

        if !parent.is_dir() {
            fs::create_dir_all(parent).map_err(|source| ExtractionError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        if !is_directory && !is_writable(parent) {
            return Err(ExtractionError::PermissionDenied {
                path: parent.to_path_buf(),
            });
        }

        Ok(())
    }
}

/// Checks effective write permission on a directory.
#[cfg(unix)]
fn is_writable(dir: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(path) = CString::new(dir.as_os_str().as_bytes()) else {
        return false;
    };

    // SAFETY: `path` is a valid NUL-terminated string that outlives the call,
    // and access() neither retains nor modifies it.
    #[allow(unsafe_code)]
    let result = unsafe { libc::access(path.as_ptr(), libc::W_OK) };
    result == 0
}

/// Checks write permission on a directory.
#[cfg(not(unix))]
fn is_writable(dir: &Path) -> bool {
    fs::metadata(dir).is_ok_and(|m| !m.permissions().readonly())
}
