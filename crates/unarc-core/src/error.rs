//! Error types for archive extraction operations.

use std::io;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Broad classification of an extraction failure.
///
/// Every [`ExtractionError`] maps onto exactly one kind, which lets callers
/// decide on retry or reporting policy without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The archive name has no recognized extension.
    UnsupportedFormat,
    /// Read, write or seek failure against the archive, the staging file or
    /// the destination tree.
    Io,
    /// The container or entry structure could not be decoded.
    MalformedArchive,
    /// An entry would be written outside the destination directory.
    PathTraversal,
    /// A destination directory could not be created or is not writable.
    PermissionDenied,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::UnsupportedFormat => "unsupported format",
            Self::Io => "I/O failure",
            Self::MalformedArchive => "malformed archive",
            Self::PathTraversal => "path traversal",
            Self::PermissionDenied => "permission denied",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during archive extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Archive extension is not one of `zip`, `gz` or `tgz`.
    #[error("unsupported archive format for: {path}")]
    UnsupportedFormat {
        /// The archive path that was rejected.
        path: PathBuf,
    },

    /// Archive is corrupted or invalid.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// A parent directory could not be created.
    #[error("failed to create directory: {path}")]
    CreateDirectory {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Entry would land outside the destination directory.
    #[error("expanding {entry} would create file outside of {dest}")]
    PathTraversal {
        /// The entry name as stored in the archive (after stripping).
        entry: String,
        /// The destination directory that was escaped.
        dest: PathBuf,
    },

    /// Parent directory of a file entry is not writable.
    #[error("could not get write permissions for '{path}'")]
    PermissionDenied {
        /// The directory lacking write permission.
        path: PathBuf,
    },
}

impl ExtractionError {
    /// Returns the taxonomy kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use unarc_core::ErrorKind;
    /// use unarc_core::ExtractionError;
    /// use std::path::PathBuf;
    ///
    /// let err = ExtractionError::PathTraversal {
    ///     entry: "../etc/passwd".into(),
    ///     dest: PathBuf::from("/out"),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::PathTraversal);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::InvalidArchive(_) => ErrorKind::MalformedArchive,
            Self::CreateDirectory { source, .. } => {
                if source.kind() == io::ErrorKind::PermissionDenied {
                    ErrorKind::PermissionDenied
                } else {
                    ErrorKind::Io
                }
            }
            Self::PathTraversal { .. } => ErrorKind::PathTraversal,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
        }
    }

    /// Returns `true` if this error represents a security violation.
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::PathTraversal { .. })
    }

    /// Classifies an error raised while reading the archive stream.
    ///
    /// gzip and tar framing problems surface as `io::Error`; kinds that
    /// describe bad input are reported as a malformed archive, the rest
    /// stay plain I/O failures.
    pub(crate) fn from_archive_read(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::InvalidData
            | io::ErrorKind::InvalidInput
            | io::ErrorKind::UnexpectedEof
            | io::ErrorKind::Other => Self::InvalidArchive(err.to_string()),
            _ => Self::Io(err),
        }
    }
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Self::from_archive_read(e),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}

/// Failure of one `extract` call, tied to the archive it concerned.
#[derive(Error, Debug)]
#[error("could not extract archive '{}'", archive.display())]
pub struct ArchiveError {
    archive: PathBuf,
    #[source]
    source: ExtractionError,
}

impl ArchiveError {
    pub(crate) fn new(archive: &Path, source: ExtractionError) -> Self {
        Self {
            archive: archive.to_path_buf(),
            source,
        }
    }

    /// The archive that failed to extract.
    #[must_use]
    pub fn archive(&self) -> &Path {
        &self.archive
    }

    /// The taxonomy kind of the underlying failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// The underlying extraction error.
    #[must_use]
    pub const fn error(&self) -> &ExtractionError {
        &self.source
    }

    /// Consumes the wrapper and returns the underlying extraction error.
    #[must_use]
    pub fn into_error(self) -> ExtractionError {
        self.source
    }
}
