//! Byte-level reader with bounded operations.

use crate::error::{BinaryError, BinaryResult};
use crate::{padding_for, BOOL_FALSE, BOOL_TRUE, LONG_LENGTH_MARKER};

/// A cursor-based reader for decoding wire primitives from a byte slice.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input. Every complete operation
/// consumes a multiple of four bytes, so the cursor stays 32-bit aligned
/// between fields.
#[derive(Debug)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    /// Creates a new `BinaryReader` over a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32(&mut self) -> BinaryResult<i32> {
        Ok(i32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self) -> BinaryResult<u32> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Reads a little-endian `i64`.
    pub fn read_i64(&mut self) -> BinaryResult<i64> {
        Ok(i64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Reads a little-endian `i128`.
    pub fn read_i128(&mut self) -> BinaryResult<i128> {
        Ok(i128::from_le_bytes(self.read_array::<16>()?))
    }

    /// Reads a 256-bit integer as 32 little-endian bytes.
    pub fn read_int256(&mut self) -> BinaryResult<[u8; 32]> {
        self.read_array::<32>()
    }

    /// Reads a little-endian IEEE 754 `f64`.
    pub fn read_f64(&mut self) -> BinaryResult<f64> {
        Ok(f64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Reads a boolean encoded as one of the two sentinel words.
    pub fn read_bool(&mut self) -> BinaryResult<bool> {
        match self.read_u32()? {
            BOOL_TRUE => Ok(true),
            BOOL_FALSE => Ok(false),
            found => Err(BinaryError::InvalidBoolMarker { found }),
        }
    }

    /// Reads a length-prefixed byte string, borrowing the payload.
    ///
    /// Lengths below 254 use a one-byte prefix; longer strings use the
    /// marker byte 254 followed by a 3-byte little-endian length. The
    /// whole field is padded to a four-byte boundary; padding bytes are
    /// skipped, not inspected.
    pub fn read_bytes(&mut self) -> BinaryResult<&'a [u8]> {
        let marker = self.read_byte()?;
        let (len, prefix_len) = if marker < LONG_LENGTH_MARKER {
            (usize::from(marker), 1)
        } else if marker == LONG_LENGTH_MARKER {
            let raw = self.read_array::<3>()?;
            (u32::from_le_bytes([raw[0], raw[1], raw[2], 0]) as usize, 4)
        } else {
            return Err(BinaryError::InvalidLengthMarker { found: marker });
        };
        let padding = padding_for(prefix_len + len);
        let field = self.take(len + padding)?;
        Ok(&field[..len])
    }

    /// Reads a length-prefixed UTF-8 string, borrowing the payload.
    pub fn read_string(&mut self) -> BinaryResult<&'a str> {
        let bytes = self.read_bytes()?;
        std::str::from_utf8(bytes).map_err(|err| BinaryError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        })
    }

    /// Reads a counted vector: a signed 32-bit count, then that many
    /// elements via `read_element`.
    pub fn read_vector<T>(
        &mut self,
        mut read_element: impl FnMut(&mut Self) -> BinaryResult<T>,
    ) -> BinaryResult<Vec<T>> {
        let raw = self.read_i32()?;
        if raw < 0 {
            return Err(BinaryError::InvalidVectorLength { raw });
        }
        let count = raw as usize;
        // Cap the allocation hint at what the buffer could still hold;
        // every element occupies at least four bytes.
        let mut items = Vec::with_capacity(count.min(self.remaining() / 4));
        for _ in 0..count {
            items.push(read_element(self)?);
        }
        Ok(items)
    }

    fn read_byte(&mut self) -> BinaryResult<u8> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    fn read_array<const N: usize>(&mut self) -> BinaryResult<[u8; N]> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn take(&mut self, n: usize) -> BinaryResult<&'a [u8]> {
        let available = self.remaining();
        if n > available {
            return Err(BinaryError::Truncated {
                requested: n,
                available,
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.data[start..self.pos])
    }
}
