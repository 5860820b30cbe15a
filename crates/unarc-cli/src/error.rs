//! Error conversion utilities for CLI.
//!
//! Converts unarc-core's typed errors (thiserror) into user-facing
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use unarc_core::ArchiveError;
use unarc_core::ExtractionError;

/// Converts an `ArchiveError` into an anyhow error naming the archive, with
/// a hint for the error kinds a user can act on.
pub fn convert_extraction_error(err: ArchiveError) -> anyhow::Error {
    let archive = err.archive().display().to_string();
    match err.into_error() {
        ExtractionError::PathTraversal { entry, dest } => anyhow!(
            "Security violation: archive '{archive}' entry '{entry}' would be written outside of '{}'\n\
             HINT: This archive may be malicious. Do not extract from untrusted sources.",
            dest.display()
        ),
        ExtractionError::UnsupportedFormat { .. } => anyhow!(
            "Archive format not supported: {archive}\n\
             HINT: Supported formats: zip, tar.gz, tgz"
        ),
        ExtractionError::InvalidArchive(reason) => anyhow!(
            "Invalid archive '{archive}': {reason}\n\
             HINT: The archive may be corrupted, truncated or not match its extension."
        ),
        ExtractionError::PermissionDenied { path } => anyhow!(
            "Cannot write into '{}' while extracting '{archive}'\n\
             HINT: Check the permissions of the output directory.",
            path.display()
        ),
        ExtractionError::CreateDirectory { path, source } => anyhow!(
            "Cannot create directory '{}' while extracting '{archive}': {source}",
            path.display()
        ),
        ExtractionError::Io(io_err) => {
            anyhow!("I/O error while processing '{archive}': {io_err}")
        }
    }
}
