//! Entry copy loop with a reusable buffer.
//!
//! A single buffer is allocated per extraction and reused for every entry,
//! which keeps memory bounded no matter how large the archive is. Read and
//! write failures are reported differently: a failed read means the archive
//! stream is broken, a failed write means the destination is.

use std::io::Read;
use std::io::Write;
use std::io::{self};

use crate::ExtractionError;

/// Buffer size for entry copies (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Heap buffer reused across entry copies.
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies an entry body from `reader` into `writer`.
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Read errors are classified with
/// [`ExtractionError::from_archive_read`](crate::ExtractionError), so a
/// truncated or corrupt stream becomes `InvalidArchive`. Write errors are
/// returned as `Io`.
pub fn copy_entry<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> Result<u64, ExtractionError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ExtractionError::from_archive_read(e)),
        };

        writer
            .write_all(&buffer.buf[..bytes_read])
            .map_err(ExtractionError::Io)?;

        total += bytes_read as u64;
    }

    Ok(total)
}
