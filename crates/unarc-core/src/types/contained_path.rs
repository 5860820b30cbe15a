//! Output path proven to lie inside the destination directory.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::ExtractionError;
use crate::Result;

use super::DestDir;

/// An absolute output path that resolves inside a [`DestDir`].
///
/// Can only be obtained through [`ContainedPath::resolve`]; there is no
/// `From<PathBuf>` conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainedPath(PathBuf);

impl ContainedPath {
    /// Resolves an archive entry name against the destination and checks
    /// containment.
    ///
    /// The name is split on `/` and applied component by component, starting
    /// from the canonical destination. Components that already exist on disk
    /// are canonicalized, so symlinks are followed the way the OS would follow
    /// them; components that do not exist yet are applied lexically. An
    /// absolute name replaces the destination, as `Path::join` would.
    ///
    /// Nothing is created or modified. This lets the check run before any
    /// directory for the entry is made.
    ///
    /// # Errors
    ///
    /// Returns `PathTraversal` naming `entry` if the resolved path is not
    /// prefixed (component-wise) by the destination.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use unarc_core::types::ContainedPath;
    /// use unarc_core::types::DestDir;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let dest = DestDir::new("/tmp/out")?;
    /// assert!(ContainedPath::resolve(&dest, "src/main.py").is_ok());
    /// assert!(ContainedPath::resolve(&dest, "../../etc/passwd").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn resolve(dest: &DestDir, entry: &str) -> Result<Self> {
        let mut resolved = dest.as_path().to_path_buf();

        for component in Path::new(entry).components() {
            match component {
                Component::Normal(name) => {
                    resolved.push(name);
                    if let Ok(real) = resolved.canonicalize() {
                        resolved = real;
                    }
                }
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::CurDir => {}
                Component::RootDir | Component::Prefix(_) => {
                    resolved.push(component);
                }
            }
        }

        if !resolved.starts_with(dest.as_path()) {
            return Err(ExtractionError::PathTraversal {
                entry: entry.to_string(),
                dest: dest.as_path().to_path_buf(),
            });
        }

        Ok(Self(resolved))
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}
