//! Cursor over an in-memory byte slice.

use crate::error::{TexError, TexResult};

/// Little-endian reader over a borrowed byte buffer.
///
/// # Example
///
/// ```
/// use texcodec::stream::ByteReader;
///
/// let mut reader = ByteReader::new(&[0x54, 0x45, 0x58, 0x00, 0x01]);
/// assert_eq!(reader.read_u32().unwrap(), 0x0058_4554);
/// assert!(reader.read_bool().unwrap());
/// assert!(reader.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Read exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> TexResult<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(TexError::UnexpectedEndOfData {
                needed: len,
                available,
            });
        }

        let start = self.position;
        self.position += len;
        Ok(&self.data[start..self.position])
    }

    /// Read every byte left in the buffer, possibly none.
    pub fn read_to_end(&mut self) -> &'a [u8] {
        let rest = &self.data[self.position..];
        self.position = self.data.len();
        rest
    }

    fn read_array<const N: usize>(&mut self) -> TexResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> TexResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> TexResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> TexResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read a one-byte boolean; any nonzero value is `true`.
    pub fn read_bool(&mut self) -> TexResult<bool> {
        Ok(self.read_u8()? != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_little_endian() {
        let data = [0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut reader = ByteReader::new(&data);

        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_read_bool_nonzero_is_true() {
        let mut reader = ByteReader::new(&[0, 1, 2, 255]);
        assert!(!reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
    }

    #[test]
    fn test_short_read_fails_without_consuming() {
        let mut reader = ByteReader::new(&[0xAA, 0xBB, 0xCC]);
        reader.read_u8().unwrap();

        match reader.read_u32() {
            Err(TexError::UnexpectedEndOfData { needed, available }) => {
                assert_eq!(needed, 4);
                assert_eq!(available, 2);
            }
            other => panic!("Expected UnexpectedEndOfData, got {:?}", other),
        }

        // Cursor untouched; the two bytes are still readable
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_u16().unwrap(), 0xCCBB);
    }

    #[test]
    fn test_read_bytes_exact() {
        let data = [1, 2, 3, 4, 5];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_bytes(2).unwrap(), &[1, 2]);
        assert_eq!(reader.read_bytes(3).unwrap(), &[3, 4, 5]);
        assert!(reader.read_bytes(1).is_err());
        assert_eq!(reader.read_bytes(0).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn test_read_to_end() {
        let data = [9, 8, 7];
        let mut reader = ByteReader::new(&data);
        reader.read_u8().unwrap();
        assert_eq!(reader.read_to_end(), &[8, 7]);
        assert_eq!(reader.read_to_end(), &[] as &[u8]);
    }
}
