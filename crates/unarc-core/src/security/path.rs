//! Path traversal validation.

use crate::Result;
use crate::types::ContainedPath;
use crate::types::DestDir;

/// Validates that an entry name stays inside the destination directory.
///
/// Delegates to [`ContainedPath::resolve`], which walks the name component
/// by component from the canonical destination, canonicalizing whatever
/// already exists on disk. The check is pure: it never creates directories,
/// so a rejected entry leaves no trace outside the destination.
///
/// Both decoders call this for every entry, directories included, before
/// preparing the destination.
///
/// # Errors
///
/// Returns `ExtractionError::PathTraversal` naming the entry when the
/// resolved path escapes `dest`.
///
/// # Examples
///
/// ```no_run
/// use unarc_core::security::validate_path;
/// use unarc_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp/out")?;
///
/// let target = validate_path("src/main.py", &dest)?;
/// assert!(target.as_path().starts_with(dest.as_path()));
///
/// assert!(validate_path("../../etc/passwd", &dest).is_err());
/// # Ok(())
/// # }
/// ```
pub fn validate_path(entry: &str, dest: &DestDir) -> Result<ContainedPath> {
    ContainedPath::resolve(dest, entry)
}
