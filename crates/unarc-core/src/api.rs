//! High-level public API for archive extraction.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

use crate::ArchiveError;
use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::formats::ArchiveFormat;
use crate::formats::TarGzArchive;
use crate::formats::ZipArchive;
use crate::formats::detect::ArchiveType;
use crate::formats::detect::detect_format;
use crate::types::DestDir;

/// Extracts an archive into `dest` with the host platform defaults.
///
/// The format is chosen from the archive's extension: `zip` for ZIP, `gz`
/// or `tgz` for gzip-compressed tar. The destination is created if missing.
/// Existing files are overwritten.
///
/// # Errors
///
/// Returns an [`ArchiveError`] naming `archive` if:
/// - the extension is not supported (nothing is opened or created)
/// - the archive cannot be read or is malformed
/// - an entry would land outside `dest`
/// - a destination directory cannot be created or written to
///
/// Entries written before the failing one are left in place.
///
/// # Examples
///
/// ```no_run
/// use unarc_core::ErrorKind;
/// use unarc_core::extract;
///
/// match extract("bundle.zip", "/tmp/out") {
///     Ok(report) => println!("{} files", report.files_extracted),
///     Err(e) if e.kind() == ErrorKind::PathTraversal => eprintln!("refused: {e}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    dest: Q,
) -> std::result::Result<ExtractionReport, ArchiveError> {
    extract_with_config(archive, dest, &ExtractionConfig::default())
}

/// Extracts an archive into `dest` using an explicit configuration.
///
/// # Errors
///
/// Same as [`extract`].
pub fn extract_with_config<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    dest: Q,
    config: &ExtractionConfig,
) -> std::result::Result<ExtractionReport, ArchiveError> {
    let archive = archive.as_ref();
    run(archive, dest.as_ref(), config).map_err(|source| ArchiveError::new(archive, source))
}

fn run(archive: &Path, dest: &Path, config: &ExtractionConfig) -> Result<ExtractionReport> {
    let format = detect_format(archive)?;
    let source = BufReader::new(File::open(archive)?);
    let dest = DestDir::new(dest)?;

    info!(
        "extracting {} archive {} into {}",
        format,
        archive.display(),
        dest.as_path().display()
    );

    match format {
        ArchiveType::Zip => ZipArchive::new(source).extract(&dest, config),
        ArchiveType::TarGz => TarGzArchive::new(source).extract(&dest, config),
    }
}
