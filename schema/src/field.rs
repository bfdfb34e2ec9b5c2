//! Wire types and field/constructor definitions.

use crate::ConstructorId;

/// The wire encoding of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WireType {
    /// 32-bit signed integer, little-endian.
    Int32,

    /// 64-bit signed integer, little-endian.
    Int64,

    /// 128-bit signed integer, little-endian.
    Int128,

    /// 256-bit integer as 32 little-endian bytes.
    Int256,

    /// IEEE 754 double, little-endian.
    Double,

    /// Length-prefixed byte string, padded to a four-byte boundary.
    Bytes,

    /// Length-prefixed UTF-8 string, padded to a four-byte boundary.
    String,

    /// Boolean encoded as one of two sentinel words.
    Bool,

    /// The bitmask word that gates this constructor's optional fields.
    ///
    /// A flags field is derived during encoding and never surfaced as a
    /// value; at most one may appear per constructor, before any gated
    /// field.
    Flags,

    /// A nested boxed object carrying its own constructor ID.
    Object,

    /// A counted vector of elements of one wire type.
    Vector(Box<WireType>),
}

impl WireType {
    /// Creates a vector of the given element type.
    #[must_use]
    pub fn vector(element: Self) -> Self {
        Self::Vector(Box::new(element))
    }

    /// Returns `true` if this type is or contains a [`WireType::Flags`].
    #[must_use]
    pub fn contains_flags(&self) -> bool {
        match self {
            Self::Flags => true,
            Self::Vector(element) => element.contains_flags(),
            _ => false,
        }
    }
}

/// A field definition within a constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDef {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: WireType,
    /// Bit in the flags mask that gates this field, if it is optional.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub flag_bit: Option<u8>,
}

impl FieldDef {
    /// Creates a required field.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: WireType) -> Self {
        Self {
            name: name.into(),
            ty,
            flag_bit: None,
        }
    }

    /// Creates an optional field gated by `bit` in the flags mask.
    #[must_use]
    pub fn optional(name: impl Into<String>, ty: WireType, bit: u8) -> Self {
        Self {
            name: name.into(),
            ty,
            flag_bit: Some(bit),
        }
    }

    /// Creates the flags bitmask field.
    #[must_use]
    pub fn flags(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: WireType::Flags,
            flag_bit: None,
        }
    }
}

/// A constructor definition: an ID, a name, and an ordered field list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructorDef {
    pub id: ConstructorId,
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl ConstructorDef {
    /// Creates a new constructor with no fields.
    #[must_use]
    pub fn new(id: ConstructorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a constructor with the provided fields.
    #[must_use]
    pub fn with_fields(id: ConstructorId, name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            id,
            name: name.into(),
            fields,
        }
    }

    /// Adds a field to the constructor.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field with the given name, if any.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the flags field position, if this constructor has one.
    #[must_use]
    pub fn flags_position(&self) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.ty == WireType::Flags)
    }
}
