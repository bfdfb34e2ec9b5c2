//! Error types for codec operations.

use std::fmt;

use schema::ConstructorId;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during object encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Wire primitive error.
    Binary(binary::BinaryError),

    /// Registry error.
    Schema(schema::SchemaError),

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// The object's field set does not match its descriptor.
    FieldMismatch {
        constructor: ConstructorId,
        reason: FieldMismatchReason,
    },

    /// A supplied value's variant does not match the declared wire type.
    TypeMismatch {
        constructor: ConstructorId,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A vector count read from the wire was negative.
    InvalidVectorLength { raw: i32 },

    /// Bytes remained after the decoded value.
    TrailingData { remaining: usize },

    /// No result type is registered for this request constructor.
    UnregisteredRequest { request: ConstructorId },

    /// A result type is already registered for this request constructor.
    DuplicateRequest { request: ConstructorId },
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    VectorLen,
    BytesLen,
    Depth,
}

/// Details for field set mismatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMismatchReason {
    MissingRequired { field: String },
    UnknownField { field: String },
    DuplicateField { field: String },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary(e) => write!(f, "binary error: {e}"),
            Self::Schema(e) => write!(f, "schema error: {e}"),
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::FieldMismatch {
                constructor,
                reason,
            } => {
                write!(f, "field mismatch for constructor {constructor}: {reason}")
            }
            Self::TypeMismatch {
                constructor,
                field,
                expected,
                found,
            } => {
                write!(
                    f,
                    "field {field:?} of constructor {constructor}: expected {expected} \
                     but got {found}"
                )
            }
            Self::InvalidVectorLength { raw } => {
                write!(f, "vector count {raw} is negative")
            }
            Self::TrailingData { remaining } => {
                write!(f, "{remaining} trailing bytes after decoded value")
            }
            Self::UnregisteredRequest { request } => {
                write!(f, "no result type registered for request {request}")
            }
            Self::DuplicateRequest { request } => {
                write!(
                    f,
                    "a result type is already registered for request {request}"
                )
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::VectorLen => "vector length",
            Self::BytesLen => "byte-string length",
            Self::Depth => "nesting depth",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for FieldMismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "required field {field:?} is missing")
            }
            Self::UnknownField { field } => {
                write!(f, "field {field:?} is not an encodable field of this constructor")
            }
            Self::DuplicateField { field } => {
                write!(f, "field {field:?} appears twice")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Binary(e) => Some(e),
            Self::Schema(e) => Some(e),
            _ => None,
        }
    }
}

impl From<binary::BinaryError> for CodecError {
    fn from(err: binary::BinaryError) -> Self {
        Self::Binary(err)
    }
}

impl From<schema::SchemaError> for CodecError {
    fn from(err: schema::SchemaError) -> Self {
        Self::Schema(err)
    }
}
