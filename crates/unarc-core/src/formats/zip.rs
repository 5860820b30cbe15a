//! ZIP archive format handler.
//!
//! The central directory of a ZIP file sits at its end, so the decoder needs
//! random access. The input is first copied into a staging file, which is
//! then opened as a seekable container. The staging file lives for exactly
//! one `extract` call and is removed on every exit path.

use std::fs::File;
use std::io;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::time::Instant;

use log::debug;
use log::info;
use log::warn;
use tempfile::NamedTempFile;

use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::formats::detect::ArchiveType;
use crate::security::validate_path;
use crate::types::DestDir;
use crate::types::EntryKind;

use super::common;
use super::traits::ArchiveFormat;

/// Unix file-type bits and the symlink type, as stored in ZIP external
/// attributes.
const S_IFMT: u32 = 0o170_000;
const S_IFLNK: u32 = 0o120_000;

/// Scratch copy of the archive bytes.
///
/// Removed by [`StagingFile::remove`]; if extraction unwinds instead, the
/// inner `NamedTempFile` deletes it on drop.
struct StagingFile {
    file: NamedTempFile,
}

impl StagingFile {
    fn create(dir: &Path) -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix("unarc-staging-")
            .suffix(".zip")
            .tempfile_in(dir)?;
        debug!("staging zip archive in {}", file.path().display());
        Ok(Self { file })
    }

    fn as_file(&self) -> &File {
        self.file.as_file()
    }

    /// Deletes the staging file, returning a warning message on failure.
    fn remove(self) -> Option<String> {
        let path = self.file.path().to_path_buf();
        let err = self.file.close().err()?;
        let message = format!("failed to delete temporary file {}: {err}", path.display());
        warn!("{message}");
        Some(message)
    }
}

/// ZIP archive handler.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use unarc_core::ExtractionConfig;
/// use unarc_core::formats::ZipArchive;
/// use unarc_core::formats::traits::ArchiveFormat;
/// use unarc_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp/out")?;
/// let mut archive = ZipArchive::new(File::open("bundle.zip")?);
/// let report = archive.extract(&dest, &ExtractionConfig::default())?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ZipArchive<R: Read> {
    source: R,
}

impl<R: Read> ZipArchive<R> {
    /// Creates a ZIP handler over a forward-only byte source.
    #[must_use]
    pub const fn new(source: R) -> Self {
        Self { source }
    }

    fn extract_staged(
        &mut self,
        staging: &StagingFile,
        dest: &DestDir,
        config: &ExtractionConfig,
        report: &mut ExtractionReport,
    ) -> Result<()> {
        let mut file = staging.as_file();
        io::copy(&mut self.source, &mut file)?;
        file.rewind()?;

        let mut archive = zip::ZipArchive::new(file)?;
        let mut buffer = CopyBuffer::new();

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let name = entry.name().to_owned();
            let kind = if entry.is_dir() {
                EntryKind::Directory
            } else if entry.unix_mode().is_some_and(|mode| mode & S_IFMT == S_IFLNK) {
                EntryKind::Other
            } else {
                EntryKind::File
            };

            if kind == EntryKind::Other {
                validate_path(&name, dest)?;
                debug!("skipping {name}: symbolic link");
                report.entries_skipped += 1;
                continue;
            }

            let target = common::prepare_entry(dest, &name, kind)?;
            debug!("extracting {name} to {}", target.as_path().display());

            if kind.is_directory() {
                common::create_directory(&target, report)?;
            } else {
                common::write_file(
                    &mut entry,
                    &target,
                    None,
                    config.platform,
                    &mut buffer,
                    report,
                )?;
            }
        }

        Ok(())
    }
}

impl<R: Read> ArchiveFormat for ZipArchive<R> {
    fn extract(&mut self, dest: &DestDir, config: &ExtractionConfig) -> Result<ExtractionReport> {
        let start = Instant::now();
        let mut report = ExtractionReport::new();
        report.format = Some(ArchiveType::Zip);

        let staging = StagingFile::create(&config.staging_location())?;
        let result = self.extract_staged(&staging, dest, config, &mut report);
        if let Some(warning) = staging.remove() {
            report.add_warning(warning);
        }
        result?;

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
        ArchiveType::Zip.name()
    }
}
