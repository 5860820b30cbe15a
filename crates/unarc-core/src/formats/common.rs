//! Entry materialization shared between the ZIP and tar.gz decoders.
//!
//! Both decoders resolve an entry to a [`ContainedPath`], prepare its parent
//! through [`DestDir::prepare`], then hand it to one of the helpers below.

use std::fs::File;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::ExtractionError;
use crate::ExtractionReport;
use crate::Platform;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_entry;
use crate::types::ContainedPath;
use crate::types::DestDir;
use crate::types::EntryKind;

/// Owner-execute bit of a Unix mode.
pub const OWNER_EXECUTE: u32 = 0o100;

/// Resolves, checks and prepares the output location of one entry.
///
/// The containment check runs first, so an escaping entry is rejected
/// before any directory is created for it.
pub fn prepare_entry(dest: &DestDir, name: &str, kind: EntryKind) -> Result<ContainedPath> {
    let target = crate::security::validate_path(name, dest)?;
    dest.prepare(target.as_path(), kind.is_directory())?;
    Ok(target)
}

/// Writes one file entry, truncating any existing file.
///
/// `executable` is the owner-execute bit to apply, or `None` to keep the
/// platform default. It is applied right after the file is created, before
/// the contents are streamed, and only when `platform` has permission bits.
pub fn write_file<R: Read + ?Sized>(
    reader: &mut R,
    target: &ContainedPath,
    executable: Option<bool>,
    platform: Platform,
    buffer: &mut CopyBuffer,
    report: &mut ExtractionReport,
) -> Result<()> {
    let path = target.as_path();
    let file = File::create(path)?;

    if let Some(executable) = executable
        && platform.executable_bit
    {
        set_owner_executable(path, executable)?;
        if executable {
            report.executables += 1;
        }
    }

    debug!(
        "writing file: {}, executable: {}",
        path.display(),
        executable.unwrap_or(false)
    );

    let mut writer = BufWriter::with_capacity(buffer.size(), file);
    let bytes_written = copy_entry(reader, &mut writer, buffer)?;
    writer.flush().map_err(ExtractionError::Io)?;

    report.files_extracted += 1;
    report.bytes_written += bytes_written;

    Ok(())
}

/// Creates a directory entry. Existing directories are accepted.
pub fn create_directory(target: &ContainedPath, report: &mut ExtractionReport) -> Result<()> {
    let path = target.as_path();
    create_dir_all(path).map_err(|source| ExtractionError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    report.directories_created += 1;
    Ok(())
}

/// Sets or clears the owner-execute bit, leaving the other bits untouched.
#[cfg(unix)]
fn set_owner_executable(path: &Path, executable: bool) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)?.permissions();
    let mode = permissions.mode();
    let mode = if executable {
        mode | OWNER_EXECUTE
    } else {
        mode & !OWNER_EXECUTE
    };
    permissions.set_mode(mode);
    std::fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn set_owner_executable(_path: &Path, _executable: bool) -> Result<()> {
    Ok(())
}
