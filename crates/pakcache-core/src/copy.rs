//! Buffered copy used for every resource written into the cache.
//!
//! A single fixed-size buffer is allocated per extraction task and reused for
//! each file, so copying many paks does not allocate per file.

use std::io::Read;
use std::io::Write;
use std::io::{self};

use crate::ExtractionError;

/// Copy buffer size (16KB).
const COPY_BUFFER_SIZE: usize = 16 * 1024;

/// Reusable fixed-size buffer for streaming resource bytes.
///
/// # Examples
///
/// ```no_run
/// # use pakcache_core::copy::{CopyBuffer, copy_with_buffer};
/// # use pakcache_core::ExtractionError;
/// # fn example() -> Result<(), ExtractionError> {
/// let mut buffer = CopyBuffer::new();
/// let mut input = std::fs::File::open("resources.pak")?;
/// let mut output = std::fs::File::create("paks/resources.pak")?;
///
/// let bytes_copied = copy_with_buffer(&mut input, &mut output, &mut buffer)?;
/// println!("Copied {} bytes", bytes_copied);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new zero-initialized copy buffer.
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

/// Copies data from reader to writer using the provided reusable buffer.
///
/// Interrupted reads are retried. Returns the total number of bytes copied.
///
/// # Errors
///
/// Returns an error if reading from the source or writing to the destination
/// fails.
#[inline]
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
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
            Err(e) => return Err(ExtractionError::Io(e)),
        };

        writer
            .write_all(&buffer.buf[..bytes_read])
            .map_err(ExtractionError::Io)?;

        total = total.saturating_add(bytes_read as u64);
    }

    Ok(total)
}
