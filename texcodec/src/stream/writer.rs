//! Little-endian writer over any `io::Write` sink.

use std::io::Write;

use crate::error::TexResult;

/// Little-endian writer.
///
/// Wraps a `Vec<u8>`, a `File`, or any other [`Write`] implementation.
pub struct ByteWriter<W: Write> {
    inner: W,
    written: usize,
}

impl<W: Write> ByteWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Total bytes written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> TexResult<()> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> TexResult<()> {
        self.write_bytes(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> TexResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> TexResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Write a boolean as a single `0` or `1` byte.
    pub fn write_bool(&mut self, value: bool) -> TexResult<()> {
        self.write_u8(u8::from(value))
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(mut self) -> TexResult<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
