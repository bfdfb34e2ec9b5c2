//! Constructor identifiers.

use std::fmt;

/// A 32-bit constructor identifier.
///
/// Constructor IDs are assigned by the schema author and select the field
/// layout of an encoded object. They appear on the wire as the first four
/// little-endian bytes of every boxed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructorId(u32);

impl ConstructorId {
    /// Creates a new constructor ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw 32-bit value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ConstructorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ConstructorId> for u32 {
    fn from(id: ConstructorId) -> Self {
        id.0
    }
}

impl fmt::Display for ConstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
