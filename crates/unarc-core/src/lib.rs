//! Archive extraction into a destination directory.
//!
//! `unarc-core` unpacks ZIP and gzip-compressed tar archives. Every entry is
//! resolved against the destination before anything is written for it, and
//! an entry that would land outside the destination aborts the extraction.
//!
//! tar.gz archives have their conventional top-level directory (`pkg-1.0/`)
//! stripped and keep the owner-execute bit of their entries. ZIP archives are
//! laid out exactly as stored.
//!
//! # Examples
//!
//! ```no_run
//! use unarc_core::extract;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = extract("docs.tgz", "/tmp/docs")?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod copy;
pub mod error;
pub mod formats;
pub mod report;
pub mod security;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use api::extract;
pub use api::extract_with_config;
pub use config::ExtractionConfig;
pub use config::Platform;
pub use error::ArchiveError;
pub use error::ErrorKind;
pub use error::ExtractionError;
pub use error::Result;
pub use formats::detect::ArchiveType;
pub use report::ExtractionReport;

pub use types::DestDir;
