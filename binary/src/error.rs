//! Error types for binary reader/writer operations.

use std::fmt;

/// Result type for binary reader/writer operations.
pub type BinaryResult<T> = Result<T, BinaryError>;

/// Errors that can occur while reading or writing wire primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryError {
    /// Attempted to read past the end of the buffer.
    Truncated {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A byte-string or vector length exceeds what the wire format can carry.
    LengthOverflow {
        /// The offending length.
        length: usize,
        /// Maximum length the encoding supports.
        max: usize,
    },

    /// The leading byte of a byte-string length prefix is not a valid marker.
    InvalidLengthMarker {
        /// The byte that was read.
        found: u8,
    },

    /// A boolean word was neither of the two sentinel values.
    InvalidBoolMarker {
        /// The 32-bit word that was read.
        found: u32,
    },

    /// A vector count was negative.
    InvalidVectorLength {
        /// The raw signed count read from the wire.
        raw: i32,
    },

    /// A byte-string declared as text is not valid UTF-8.
    InvalidUtf8 {
        /// Length of the valid prefix, in bytes.
        valid_up_to: usize,
    },
}

impl fmt::Display for BinaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::LengthOverflow { length, max } => {
                write!(f, "length {length} exceeds wire format maximum {max}")
            }
            Self::InvalidLengthMarker { found } => {
                write!(f, "invalid byte-string length marker {found:#04x}")
            }
            Self::InvalidBoolMarker { found } => {
                write!(f, "invalid boolean word {found:#010x}")
            }
            Self::InvalidVectorLength { raw } => {
                write!(f, "vector count {raw} is negative")
            }
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "string is not valid UTF-8 past byte {valid_up_to}")
            }
        }
    }
}

impl std::error::Error for BinaryError {}
