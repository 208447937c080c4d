//! `OutputBuffer`: Single-syscall output buffer for encoded frames.

use crate::buffer::Buffer;
use crate::error::{Error, Result};
use crossterm::{cursor, queue};
use std::io::{self, Write};

/// Pre-allocated buffer for a positioned frame.
///
/// The cursor escape and the encoded cells are accumulated here, then flushed
/// in a single `write()` so the terminal never shows a half-drawn frame.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical colour frame (64KB).
    pub fn new() -> Self {
        Self::with_capacity(65536)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Move cursor to (x, y), 0-indexed.
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.data, cursor::MoveTo(x, y))
    }

    /// Append the encoded frame of `buffer`.
    #[inline]
    pub fn write_frame(&mut self, buffer: &Buffer) {
        buffer.encode_into(&mut self.data);
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Position the cursor at `row` (1-based, column 1) and write the frame to `writer`.
    ///
    /// A `row` of 0 is treated as 1.
    pub fn render<W: Write + ?Sized>(&self, writer: &mut W, row: u16) -> Result<()> {
        if !self.is_allocated() {
            return Err(Error::NotAllocated);
        }

        let mut output = OutputBuffer::with_capacity(self.encoded_len() + 16);
        output.cursor_move(0, row.saturating_sub(1))?;
        output.write_frame(self);
        output.flush_to(writer)?;
        Ok(())
    }

    /// [`Buffer::render`] to standard output.
    pub fn print(&self, row: u16) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.render(&mut lock, row)
    }
}
