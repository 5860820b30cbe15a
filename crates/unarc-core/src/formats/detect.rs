//! Archive format detection.

use std::path::Path;

use log::debug;

use crate::ExtractionError;
use crate::Result;

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveType {
    /// ZIP archive.
    Zip,
    /// Gzip-compressed tar archive.
    TarGz,
}

impl ArchiveType {
    /// Short format name used in logs and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar.gz",
        }
    }
}

impl std::fmt::Display for ArchiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Detects the archive type from a file path.
///
/// Only the file name is inspected, case-insensitively. `gz` and `tgz` both
/// select the tar decoder: a `.gz` file that is not a tar stream fails later
/// with a malformed archive error, not here.
///
/// # Errors
///
/// Returns `UnsupportedFormat` for any other extension, or none.
pub fn detect_format(path: &Path) -> Result<ArchiveType> {
    let unsupported = || ExtractionError::UnsupportedFormat {
        path: path.to_path_buf(),
    };

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(unsupported)?;

    let ext_lower = extension.to_ascii_lowercase();
    match ext_lower.as_str() {
        "zip" => Ok(ArchiveType::Zip),
        "gz" => {
            let tar_segment = path.file_stem().is_some_and(|stem| {
                stem.to_string_lossy()
                    .to_ascii_lowercase()
                    .ends_with(".tar")
            });
            debug!(
                "{}: gz archive, tar segment present: {tar_segment}",
                path.display()
            );
            Ok(ArchiveType::TarGz)
        }
        "tgz" => Ok(ArchiveType::TarGz),
        _ => Err(unsupported()),
    }
}
