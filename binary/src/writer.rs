//! Byte-level writer for encoding wire primitives.

use crate::error::{BinaryError, BinaryResult};
use crate::{padding_for, BOOL_FALSE, BOOL_TRUE, LONG_LENGTH_MARKER, MAX_BYTES_LEN};

/// A growable writer for encoding wire primitives.
///
/// Fixed-width writes are infallible; length-prefixed writes fail when the
/// payload exceeds what the prefix can carry. Every complete operation
/// appends a multiple of four bytes, so the output stays 32-bit aligned
/// between fields. Call [`into_bytes`](Self::into_bytes) to get the final
/// buffer.
#[derive(Debug, Default)]
pub struct BinaryWriter {
    bytes: Vec<u8>,
}

impl BinaryWriter {
    /// Creates a new empty `BinaryWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `BinaryWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Writes a little-endian `i32`.
    pub fn write_i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian `u32`.
    pub fn write_u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian `i64`.
    pub fn write_i64(&mut self, value: i64) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian `i128`.
    pub fn write_i128(&mut self, value: i128) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a 256-bit integer as 32 little-endian bytes.
    pub fn write_int256(&mut self, value: [u8; 32]) {
        self.bytes.extend_from_slice(&value);
    }

    /// Writes a little-endian IEEE 754 `f64`.
    pub fn write_f64(&mut self, value: f64) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a boolean as one of the two sentinel words.
    pub fn write_bool(&mut self, value: bool) {
        self.write_u32(if value { BOOL_TRUE } else { BOOL_FALSE });
    }

    /// Writes a length-prefixed byte string, padded to a four-byte boundary.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::LengthOverflow`] if the payload is longer than
    /// the 3-byte length field can carry.
    pub fn write_bytes(&mut self, payload: &[u8]) -> BinaryResult<()> {
        let len = payload.len();
        if len > MAX_BYTES_LEN {
            return Err(BinaryError::LengthOverflow {
                length: len,
                max: MAX_BYTES_LEN,
            });
        }
        let prefix_len = if len < usize::from(LONG_LENGTH_MARKER) {
            self.bytes.push(len as u8);
            1
        } else {
            self.bytes.push(LONG_LENGTH_MARKER);
            let raw = (len as u32).to_le_bytes();
            self.bytes.extend_from_slice(&raw[..3]);
            4
        };
        self.bytes.extend_from_slice(payload);
        let padding = padding_for(prefix_len + len);
        self.bytes.resize(self.bytes.len() + padding, 0);
        Ok(())
    }

    /// Writes a length-prefixed UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::LengthOverflow`] if the encoded string is
    /// longer than the 3-byte length field can carry.
    pub fn write_string(&mut self, value: &str) -> BinaryResult<()> {
        self.write_bytes(value.as_bytes())
    }

    /// Writes a counted vector: a signed 32-bit count, then each element
    /// via `write_element`.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::LengthOverflow`] if the element count does
    /// not fit in an `i32`, or any error from `write_element`.
    pub fn write_vector<T>(
        &mut self,
        items: &[T],
        mut write_element: impl FnMut(&mut Self, &T) -> BinaryResult<()>,
    ) -> BinaryResult<()> {
        if items.len() > i32::MAX as usize {
            return Err(BinaryError::LengthOverflow {
                length: items.len(),
                max: i32::MAX as usize,
            });
        }
        self.write_i32(items.len() as i32);
        for item in items {
            write_element(self, item)?;
        }
        Ok(())
    }

    /// Consumes the writer and returns the byte buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let writer = BinaryWriter::new();
        assert_eq!(writer.len(), 0);
        assert!(writer.is_empty());
        assert!(writer.into_bytes().is_empty());
    }

    #[test]
    fn write_i32_little_endian() {
        let mut writer = BinaryWriter::new();
        writer.write_i32(0x1234_5678);
        assert_eq!(writer.into_bytes(), vec![0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn write_i32_negative() {
        let mut writer = BinaryWriter::new();
        writer.write_i32(-1);
        assert_eq!(writer.into_bytes(), vec![0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn write_i64_little_endian() {
        let mut writer = BinaryWriter::new();
        writer.write_i64(42);
        assert_eq!(writer.into_bytes(), vec![0x2A, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn write_i128_little_endian() {
        let mut writer = BinaryWriter::new();
        writer.write_i128(42);
        let mut expected = vec![0u8; 16];
        expected[0] = 0x2A;
        assert_eq!(writer.into_bytes(), expected);
    }

    #[test]
    fn write_int256_raw_bytes() {
        let value: Vec<u8> = (0..32).collect();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&value);
        let mut writer = BinaryWriter::new();
        writer.write_int256(bytes);
        assert_eq!(writer.into_bytes(), value);
    }

    #[test]
    fn write_f64_little_endian() {
        let mut writer = BinaryWriter::new();
        writer.write_f64(1.5);
        assert_eq!(writer.into_bytes(), 1.5f64.to_le_bytes().to_vec());
    }

    #[test]
    fn write_bool_sentinels() {
        let mut writer = BinaryWriter::new();
        writer.write_bool(true);
        writer.write_bool(false);
        assert_eq!(
            writer.into_bytes(),
            vec![0xB5, 0x72, 0x75, 0x99, 0x37, 0x97, 0x79, 0xBC]
        );
    }

    #[test]
    fn write_bytes_empty() {
        let mut writer = BinaryWriter::new();
        writer.write_bytes(&[]).unwrap();
        assert_eq!(writer.into_bytes(), vec![0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn write_bytes_short_form_no_padding() {
        let mut writer = BinaryWriter::new();
        writer.write_bytes(&[1, 2, 3]).unwrap();
        assert_eq!(writer.into_bytes(), vec![0x03, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn write_bytes_short_form_with_padding() {
        let mut writer = BinaryWriter::new();
        writer.write_bytes(&[1, 2, 3, 4]).unwrap();
        assert_eq!(
            writer.into_bytes(),
            vec![0x04, 0x01, 0x02, 0x03, 0x04, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn write_bytes_long_form_at_boundary() {
        let payload = vec![0x5Au8; 254];
        let mut writer = BinaryWriter::new();
        writer.write_bytes(&payload).unwrap();
        let bytes = writer.into_bytes();
        assert_eq!(&bytes[..4], &[0xFE, 0xFE, 0x00, 0x00]);
        assert_eq!(&bytes[4..258], payload.as_slice());
        assert_eq!(&bytes[258..], &[0x00, 0x00]);
        assert_eq!(bytes.len() % 4, 0);
    }

    #[test]
    fn write_bytes_253_stays_short_form() {
        let payload = vec![0x5Au8; 253];
        let mut writer = BinaryWriter::new();
        writer.write_bytes(&payload).unwrap();
        let bytes = writer.into_bytes();
        assert_eq!(bytes[0], 253);
        // 1 + 253 = 254 bytes, padded up to 256.
        assert_eq!(bytes.len(), 256);
    }

    #[test]
    fn write_bytes_rejects_oversized_payload() {
        let payload = vec![0u8; MAX_BYTES_LEN + 1];
        let mut writer = BinaryWriter::new();
        let err = writer.write_bytes(&payload).unwrap_err();
        assert_eq!(
            err,
            BinaryError::LengthOverflow {
                length: MAX_BYTES_LEN + 1,
                max: MAX_BYTES_LEN,
            }
        );
    }

    #[test]
    fn write_string_utf8() {
        let mut writer = BinaryWriter::new();
        writer.write_string("hi").unwrap();
        assert_eq!(writer.into_bytes(), vec![0x02, 0x68, 0x69, 0x00]);
    }

    #[test]
    fn write_vector_of_i32() {
        let mut writer = BinaryWriter::new();
        writer
            .write_vector(&[42i32, 43], |w, v| {
                w.write_i32(*v);
                Ok(())
            })
            .unwrap();
        assert_eq!(
            writer.into_bytes(),
            vec![0x02, 0x00, 0x00, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x2B, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn write_vector_empty() {
        let mut writer = BinaryWriter::new();
        writer
            .write_vector(&[] as &[i32], |w, v| {
                w.write_i32(*v);
                Ok(())
            })
            .unwrap();
        assert_eq!(writer.into_bytes(), vec![0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn output_stays_aligned() {
        let mut writer = BinaryWriter::new();
        writer.write_i32(7);
        assert_eq!(writer.len() % 4, 0);
        writer.write_bytes(&[1]).unwrap();
        assert_eq!(writer.len() % 4, 0);
        writer.write_string("hello").unwrap();
        assert_eq!(writer.len() % 4, 0);
        writer.write_i64(-9);
        assert_eq!(writer.len() % 4, 0);
    }

    #[test]
    fn with_capacity() {
        let writer = BinaryWriter::with_capacity(128);
        assert_eq!(writer.len(), 0);
    }

    #[test]
    fn as_bytes_matches_into_bytes() {
        let mut writer = BinaryWriter::new();
        writer.write_i32(1);
        assert_eq!(writer.as_bytes(), &[0x01, 0x00, 0x00, 0x00]);
        assert_eq!(writer.into_bytes(), vec![0x01, 0x00, 0x00, 0x00]);
    }
}
