//! Dynamic values and objects.

use schema::ConstructorId;

/// A decoded wire value.
///
/// Each variant corresponds to one [`schema::WireType`]. Flags fields
/// never appear as values: their mask is derived from field presence on
/// encode and consumed silently on decode.
#[derive(Debug, Clone, PartialEq)]
pub enum TlValue {
    Int32(i32),
    Int64(i64),
    Int128(i128),
    Int256([u8; 32]),
    Double(f64),
    Bytes(Vec<u8>),
    String(String),
    Bool(bool),
    Object(TlObject),
    Vector(Vec<TlValue>),
}

/// A constructor instance: an identifier plus named field values.
///
/// Field order is preserved as inserted but carries no meaning; encoding
/// always walks the descriptor's declared order, and equality compares
/// field sets rather than insertion order. Optional fields are simply
/// absent from the mapping when unset.
#[derive(Debug, Clone)]
pub struct TlObject {
    pub constructor: ConstructorId,
    pub fields: Vec<(String, TlValue)>,
}

impl PartialEq for TlObject {
    fn eq(&self, other: &Self) -> bool {
        let covers = |a: &Self, b: &Self| {
            a.fields
                .iter()
                .all(|(name, value)| b.get(name) == Some(value))
        };
        self.constructor == other.constructor
            && self.fields.len() == other.fields.len()
            && covers(self, other)
            && covers(other, self)
    }
}

impl TlObject {
    /// Creates an empty object for the given constructor.
    #[must_use]
    pub const fn new(constructor: ConstructorId) -> Self {
        Self {
            constructor,
            fields: Vec::new(),
        }
    }

    /// Adds a field value, builder style.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: TlValue) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    /// Looks up a field value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TlValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Returns true if a field with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
