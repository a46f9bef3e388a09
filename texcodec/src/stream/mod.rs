//! Little-endian primitive reads and writes.
//!
//! Everything the container parser touches goes through [`ByteReader`] and
//! [`ByteWriter`]. Reads are all-or-nothing: a read that needs more bytes
//! than remain fails with [`TexError::UnexpectedEndOfData`](crate::TexError)
//! and leaves the cursor where it was.

mod reader;
mod writer;

pub use reader::ByteReader;
pub use writer::ByteWriter;
