//! Descriptor-driven object codec for the tlcodec wire format.
//!
//! This crate turns registered constructor descriptors into working
//! encode/decode logic at runtime: no code generation, no derive macros.
//! [`decode_object_bytes`] reads a constructor ID off the wire, finds its
//! [`schema::ConstructorDef`], and materializes a dynamic [`TlObject`];
//! [`encode_object_bytes`] runs the same walk in reverse. A [`Dispatcher`]
//! handles function-style constructors whose responses do not name their
//! own type.
//!
//! # Design Principles
//!
//! - **Descriptor-driven** - Field layout comes from the registry at
//!   runtime, never from generated code.
//! - **Flags are wire-only** - Presence masks are derived on encode and
//!   consumed on decode; callers only ever see the gated fields.
//! - **Limits before allocation** - Counts and lengths are validated
//!   against [`CodecLimits`] before any buffer is sized from them.
//! - **Strict framing** - Byte-slice entry points reject both truncated
//!   and trailing input.
//!
//! # Example
//!
//! ```
//! use codec::{decode_object_bytes, encode_object_bytes, CodecLimits, TlObject, TlValue};
//! use schema::{ConstructorDef, ConstructorId, FieldDef, Registry, WireType};
//!
//! let ping_id = ConstructorId::new(0x7abe_77ec);
//! let registry = Registry::from_defs(vec![
//!     ConstructorDef::new(ping_id, "ping").field(FieldDef::new("id", WireType::Int64)),
//! ])?;
//!
//! let ping = TlObject::new(ping_id).set("id", TlValue::Int64(42));
//! let bytes = encode_object_bytes(&registry, &ping, &CodecLimits::default())?;
//! assert_eq!(bytes.len(), 12);
//!
//! let decoded = decode_object_bytes(&registry, &bytes, &CodecLimits::default())?;
//! assert_eq!(decoded.get("id"), Some(&TlValue::Int64(42)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod dispatch;
mod error;
mod limits;
mod object;
mod value;

pub use dispatch::Dispatcher;
pub use error::{CodecError, CodecResult, FieldMismatchReason, LimitKind};
pub use limits::CodecLimits;
pub use object::{decode_object, decode_object_bytes, encode_object, encode_object_bytes};
pub use value::{TlObject, TlValue};
