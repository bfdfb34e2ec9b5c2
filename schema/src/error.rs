//! Schema registration and lookup errors.

use std::fmt;

use crate::ConstructorId;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur when building or querying a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A constructor ID was registered twice.
    DuplicateConstructorId { id: ConstructorId },

    /// A constructor ID is not present in the registry.
    UnknownConstructor { id: ConstructorId },

    /// A constructor was registered with an empty name.
    EmptyConstructorName { id: ConstructorId },

    /// A field was declared with an empty name.
    EmptyFieldName { constructor: ConstructorId },

    /// Two fields of one constructor share a name.
    DuplicateFieldName {
        constructor: ConstructorId,
        name: String,
    },

    /// A constructor declares more than one flags field.
    DuplicateFlagsField { constructor: ConstructorId },

    /// The flags field itself was declared with a flag bit.
    ConditionalFlagsField { constructor: ConstructorId },

    /// A field declares a flag bit but no flags field precedes it.
    FlagBitWithoutFlags {
        constructor: ConstructorId,
        field: String,
    },

    /// A flag bit does not fit in the 32-bit mask.
    FlagBitOutOfRange {
        constructor: ConstructorId,
        field: String,
        bit: u8,
    },

    /// Two fields of one constructor are gated by the same bit.
    DuplicateFlagBit { constructor: ConstructorId, bit: u8 },

    /// A flags field appears inside a vector element type.
    NestedFlags {
        constructor: ConstructorId,
        field: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateConstructorId { id } => {
                write!(f, "constructor {id} is already registered")
            }
            Self::UnknownConstructor { id } => {
                write!(f, "unknown constructor {id}")
            }
            Self::EmptyConstructorName { id } => {
                write!(f, "constructor {id} has an empty name")
            }
            Self::EmptyFieldName { constructor } => {
                write!(f, "constructor {constructor} declares a field with an empty name")
            }
            Self::DuplicateFieldName { constructor, name } => {
                write!(f, "constructor {constructor} declares field {name:?} twice")
            }
            Self::DuplicateFlagsField { constructor } => {
                write!(f, "constructor {constructor} declares more than one flags field")
            }
            Self::ConditionalFlagsField { constructor } => {
                write!(f, "constructor {constructor} gates its flags field behind a flag bit")
            }
            Self::FlagBitWithoutFlags { constructor, field } => {
                write!(
                    f,
                    "field {field:?} of constructor {constructor} declares a flag bit \
                     but no flags field precedes it"
                )
            }
            Self::FlagBitOutOfRange {
                constructor,
                field,
                bit,
            } => {
                write!(
                    f,
                    "field {field:?} of constructor {constructor} uses flag bit {bit}, \
                     maximum is 31"
                )
            }
            Self::DuplicateFlagBit { constructor, bit } => {
                write!(
                    f,
                    "constructor {constructor} gates two fields behind flag bit {bit}"
                )
            }
            Self::NestedFlags { constructor, field } => {
                write!(
                    f,
                    "field {field:?} of constructor {constructor} nests a flags field \
                     inside a vector"
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {}
