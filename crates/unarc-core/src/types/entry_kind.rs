//! Archive entry kind.

/// Kind of an entry inside an archive, as far as extraction cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file; its contents are written.
    File,

    /// Directory; created under the destination.
    Directory,

    /// Anything else (links, devices, FIFOs, format metadata records).
    /// Skipped during extraction.
    Other,
}

impl EntryKind {
    /// Returns `true` if this is a directory.
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl From<tar::EntryType> for EntryKind {
    fn from(kind: tar::EntryType) -> Self {
        if kind.is_file() || kind.is_contiguous() {
            Self::File
        } else if kind.is_dir() {
            Self::Directory
        } else {
            Self::Other
        }
    }
}
