//! Extraction operation reporting.

use std::time::Duration;

use crate::formats::detect::ArchiveType;

/// Report of an archive extraction operation.
///
/// Contains statistics about what was written to the destination.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Format the archive was decoded as.
    pub format: Option<ArchiveType>,

    /// Number of files written.
    pub files_extracted: usize,

    /// Number of directory entries materialized.
    pub directories_created: usize,

    /// Number of files written with the owner-executable bit set.
    pub executables: usize,

    /// Entries of kinds other than file or directory that were not
    /// materialized (links, devices, metadata records).
    pub entries_skipped: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the extraction operation.
    pub duration: Duration,

    /// Non-fatal problems, such as a staging file that could not be removed.
    pub warnings: Vec<String>,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
