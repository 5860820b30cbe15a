//! Common traits for archive format handlers.

use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::types::DestDir;

/// Trait for archive format handlers.
pub trait ArchiveFormat {
    /// Extracts every entry of the archive into `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails, an entry escapes `dest`, or the
    /// destination cannot be written. Entries written before the failure
    /// are left in place.
    fn extract(&mut self, dest: &DestDir, config: &ExtractionConfig) -> Result<ExtractionReport>;

    /// Returns the archive format name.
    fn format_name(&self) -> &str;
}
