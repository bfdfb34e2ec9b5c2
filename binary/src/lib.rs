//! Byte-level reader/writer primitives for the tlcodec wire format.
//!
//! This crate provides [`BinaryWriter`] and [`BinaryReader`] for the wire
//! primitives every encoded object is built from: little-endian fixed-width
//! integers, doubles, length-prefixed padded byte strings, sentinel-encoded
//! booleans, and counted vectors.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No schema knowledge** - This crate knows nothing about constructors,
//!   fields, or flag bits.
//! - **Explicit errors** - All failures return structured errors, never panic.
//! - **Aligned by construction** - Every complete operation moves the cursor
//!   by a multiple of four bytes.
//!
//! # Example
//!
//! ```
//! use binary::{BinaryWriter, BinaryReader};
//!
//! let mut writer = BinaryWriter::new();
//! writer.write_i32(-7);
//! writer.write_string("ping").unwrap();
//!
//! let bytes = writer.into_bytes();
//!
//! let mut reader = BinaryReader::new(&bytes);
//! assert_eq!(reader.read_i32().unwrap(), -7);
//! assert_eq!(reader.read_string().unwrap(), "ping");
//! ```

mod error;
mod reader;
mod writer;

pub use error::{BinaryError, BinaryResult};
pub use reader::BinaryReader;
pub use writer::BinaryWriter;

/// Sentinel word encoding boolean `true`.
pub const BOOL_TRUE: u32 = 0x9972_75B5;

/// Sentinel word encoding boolean `false`.
pub const BOOL_FALSE: u32 = 0xBC79_9737;

/// Marker byte selecting the 4-byte length prefix for byte strings.
pub const LONG_LENGTH_MARKER: u8 = 254;

/// Maximum payload length of a byte string (3-byte length field).
pub const MAX_BYTES_LEN: usize = 0x00FF_FFFF;

/// Number of zero bytes needed after `len` bytes to reach a four-byte
/// boundary.
pub(crate) const fn padding_for(len: usize) -> usize {
    (4 - len % 4) % 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = BinaryWriter::new();
        let bytes = writer.into_bytes();
        assert!(bytes.is_empty());

        let reader = BinaryReader::new(&bytes);
        assert!(reader.is_empty());
    }

    #[test]
    fn padding_for_all_offsets() {
        assert_eq!(padding_for(0), 0);
        assert_eq!(padding_for(1), 3);
        assert_eq!(padding_for(2), 2);
        assert_eq!(padding_for(3), 1);
        assert_eq!(padding_for(4), 0);
        assert_eq!(padding_for(257), 3);
    }

    #[test]
    fn mixed_roundtrip() {
        let mut writer = BinaryWriter::new();
        writer.write_i32(-7);
        writer.write_i64(1 << 40);
        writer.write_bool(true);
        writer.write_bytes(&[9, 8, 7, 6, 5]).unwrap();
        writer.write_f64(-2.25);
        let bytes = writer.into_bytes();

        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(reader.read_i32().unwrap(), -7);
        assert_eq!(reader.read_i64().unwrap(), 1 << 40);
        assert!(reader.read_bool().unwrap());
        assert_eq!(reader.read_bytes().unwrap(), &[9, 8, 7, 6, 5]);
        assert!((reader.read_f64().unwrap() + 2.25).abs() < f64::EPSILON);
        assert!(reader.is_empty());
    }

    #[test]
    fn doctest_example() {
        let mut writer = BinaryWriter::new();
        writer.write_i32(-7);
        writer.write_string("ping").unwrap();

        let bytes = writer.into_bytes();

        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(reader.read_i32().unwrap(), -7);
        assert_eq!(reader.read_string().unwrap(), "ping");
    }
}
