//! Gzip-compressed tar archive format handler.
//!
//! Entries are read straight off a `GzDecoder` in stream order; nothing is
//! buffered beyond the current entry, so memory stays bounded regardless of
//! archive size.

use std::borrow::Cow;
use std::io::Read;
use std::sync::LazyLock;
use std::time::Instant;

use flate2::read::GzDecoder;
use log::debug;
use log::info;
use regex::Regex;

use crate::ExtractionConfig;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::formats::detect::ArchiveType;
use crate::security::validate_path;
use crate::types::DestDir;
use crate::types::EntryKind;

use super::common;
use super::common::OWNER_EXECUTE;
use super::traits::ArchiveFormat;

/// Conventional top-level directory of source tarballs (`pkg-1.0/`).
#[allow(clippy::expect_used)]
static LEADING_COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-A-Za-z0-9_.]+/").expect("leading component pattern is valid"));

/// Strips one leading `word/hyphen/dot` directory component from an entry
/// name. Names without such a component are returned unchanged.
///
/// ```
/// use unarc_core::formats::tar::strip_leading_component;
///
/// assert_eq!(strip_leading_component("pkg-1.0/src/main.py"), "src/main.py");
/// assert_eq!(strip_leading_component("loose_file.txt"), "loose_file.txt");
/// ```
pub fn strip_leading_component(name: &str) -> Cow<'_, str> {
    LEADING_COMPONENT.replace(name, "")
}

/// Gzip-compressed tar archive handler.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use unarc_core::ExtractionConfig;
/// use unarc_core::formats::TarGzArchive;
/// use unarc_core::formats::traits::ArchiveFormat;
/// use unarc_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp/out")?;
/// let mut archive = TarGzArchive::new(File::open("docs.tgz")?);
/// let report = archive.extract(&dest, &ExtractionConfig::default())?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub struct TarGzArchive<R: Read> {
    inner: tar::Archive<GzDecoder<R>>,
}

impl<R: Read> TarGzArchive<R> {
    /// Wraps a gzip-compressed byte source in a tar reader.
    #[must_use]
    pub fn new(source: R) -> Self {
        Self {
            inner: tar::Archive::new(GzDecoder::new(source)),
        }
    }
}

impl<R: Read> ArchiveFormat for TarGzArchive<R> {
    fn extract(&mut self, dest: &DestDir, config: &ExtractionConfig) -> Result<ExtractionReport> {
        let start = Instant::now();
        let mut report = ExtractionReport::new();
        report.format = Some(ArchiveType::TarGz);
        let mut buffer = CopyBuffer::new();

        let entries = self
            .inner
            .entries()
            .map_err(ExtractionError::from_archive_read)?;

        for entry in entries {
            let mut entry = entry.map_err(ExtractionError::from_archive_read)?;
            let raw_name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
            let name = strip_leading_component(&raw_name);
            let kind = EntryKind::from(entry.header().entry_type());

            if kind == EntryKind::Other {
                validate_path(&name, dest)?;
                debug!(
                    "skipping {raw_name}: unsupported entry type {:?}",
                    entry.header().entry_type()
                );
                report.entries_skipped += 1;
                continue;
            }

            let target = common::prepare_entry(dest, &name, kind)?;
            debug!("extracting {name} to {}", target.as_path().display());

            if kind.is_directory() {
                common::create_directory(&target, &mut report)?;
                continue;
            }

            let mode = entry
                .header()
                .mode()
                .map_err(ExtractionError::from_archive_read)?;
            let executable = mode & OWNER_EXECUTE != 0;

            common::write_file(
                &mut entry,
                &target,
                Some(executable),
                config.platform,
                &mut buffer,
                &mut report,
            )?;
        }

        report.duration = start.elapsed();
        info!(
            "extracted {} files, {} directories from {} archive into {}",
            report.files_extracted,
            report.directories_created,
            self.format_name(),
            dest.as_path().display()
        );
        Ok(report)
    }

    fn format_name(&self) -> &str {
        ArchiveType::TarGz.name()
    }
}
