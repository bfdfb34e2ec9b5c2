//! The constructor registry and its validation rules.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::error::{SchemaError, SchemaResult};
use crate::{ConstructorDef, ConstructorId, WireType};

/// A table of constructor definitions keyed by 32-bit ID.
///
/// Definitions are validated as they are registered, so a `Registry` never
/// holds a malformed descriptor. Registration order is preserved and feeds
/// [`registry_hash`](crate::registry_hash). Lookups take `&self`, so a
/// loaded registry can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    defs: Vec<ConstructorDef>,
    index: HashMap<ConstructorId, usize>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from definitions, validating each in order.
    pub fn from_defs(defs: Vec<ConstructorDef>) -> SchemaResult<Self> {
        let mut registry = Self::default();
        for def in defs {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Creates a registry builder.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registers a constructor definition.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateConstructorId`] if the ID is already
    /// present, or a validation error if the definition is malformed. The
    /// registry is unchanged on error.
    pub fn register(&mut self, def: ConstructorDef) -> SchemaResult<()> {
        validate_def(&def)?;
        match self.index.entry(def.id) {
            Entry::Occupied(_) => Err(SchemaError::DuplicateConstructorId { id: def.id }),
            Entry::Vacant(slot) => {
                slot.insert(self.defs.len());
                self.defs.push(def);
                Ok(())
            }
        }
    }

    /// Returns the definition for `id`, or [`SchemaError::UnknownConstructor`].
    pub fn lookup(&self, id: ConstructorId) -> SchemaResult<&ConstructorDef> {
        self.get(id).ok_or(SchemaError::UnknownConstructor { id })
    }

    /// Returns the definition for `id`, if registered.
    #[must_use]
    pub fn get(&self, id: ConstructorId) -> Option<&ConstructorDef> {
        self.index.get(&id).map(|&pos| &self.defs[pos])
    }

    /// Returns the definition with the given name, if any.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&ConstructorDef> {
        self.defs.iter().find(|def| def.name == name)
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: ConstructorId) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns the number of registered constructors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns `true` if no constructors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterates over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ConstructorDef> {
        self.defs.iter()
    }
}

/// Builder for [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    defs: Vec<ConstructorDef>,
}

impl RegistryBuilder {
    /// Adds a constructor definition.
    #[must_use]
    pub fn constructor(mut self, def: ConstructorDef) -> Self {
        self.defs.push(def);
        self
    }

    /// Builds the registry, validating every definition.
    pub fn build(self) -> SchemaResult<Registry> {
        Registry::from_defs(self.defs)
    }
}

fn validate_def(def: &ConstructorDef) -> SchemaResult<()> {
    if def.name.is_empty() {
        return Err(SchemaError::EmptyConstructorName { id: def.id });
    }

    let mut names = HashSet::new();
    let mut bits = HashSet::new();
    let mut flags_seen = false;
    for field in &def.fields {
        if field.name.is_empty() {
            return Err(SchemaError::EmptyFieldName { constructor: def.id });
        }
        if !names.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateFieldName {
                constructor: def.id,
                name: field.name.clone(),
            });
        }

        if field.ty == WireType::Flags {
            if flags_seen {
                return Err(SchemaError::DuplicateFlagsField { constructor: def.id });
            }
            if field.flag_bit.is_some() {
                return Err(SchemaError::ConditionalFlagsField { constructor: def.id });
            }
            flags_seen = true;
        } else if field.ty.contains_flags() {
            return Err(SchemaError::NestedFlags {
                constructor: def.id,
                field: field.name.clone(),
            });
        }

        if let Some(bit) = field.flag_bit {
            if !flags_seen {
                return Err(SchemaError::FlagBitWithoutFlags {
                    constructor: def.id,
                    field: field.name.clone(),
                });
            }
            if bit >= 32 {
                return Err(SchemaError::FlagBitOutOfRange {
                    constructor: def.id,
                    field: field.name.clone(),
                    bit,
                });
            }
            if !bits.insert(bit) {
                return Err(SchemaError::DuplicateFlagBit {
                    constructor: def.id,
                    bit,
                });
            }
        }
    }
    Ok(())
}
