//! Constructor descriptors and the schema registry for the tlcodec codec.
//!
//! This crate defines how wire objects are described:
//! - Wire types for every field encoding
//! - Constructor definitions with flag-gated optional fields
//! - A registry mapping 32-bit constructor IDs to layouts
//! - Deterministic registry hashing
//!
//! # Design Principles
//!
//! - **Runtime-first** - Descriptors are built or loaded at runtime; no
//!   per-type code generation.
//! - **Validated at load** - Structural rules are enforced at registration,
//!   so encode/decode never see a malformed descriptor.
//! - **Immutable after load** - Lookups are plain reads; a loaded registry
//!   is safe to share across threads.
//! - **Deterministic hashing** - The registry hash is stable given the same
//!   definitions in the same order.

mod error;
mod field;
mod hash;
mod id;
mod registry;

pub use error::{SchemaError, SchemaResult};
pub use field::{ConstructorDef, FieldDef, WireType};
pub use hash::registry_hash;
pub use id::ConstructorId;
pub use registry::{Registry, RegistryBuilder};
