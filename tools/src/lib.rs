//! Introspection and debugging tools for the tlcodec object codec.
//!
//! This crate provides utilities for inspecting and understanding encoded
//! objects:
//!
//! - Decode an object and report its structure and field sizes
//! - Convert decoded objects into JSON for scripting
//! - Render decoded objects as an indented human-readable tree
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not
//!   afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec
//!   is doing.

use codec::{decode_object_bytes, CodecLimits, CodecResult, TlObject, TlValue};
use schema::{ConstructorId, Registry, WireType};
use serde_json::{Map, Value};

/// Structure report for one encoded object.
#[derive(Debug)]
pub struct InspectReport {
    pub constructor: String,
    pub id: ConstructorId,
    pub byte_len: usize,
    pub fields: Vec<FieldReport>,
}

/// One decoded field within an [`InspectReport`].
#[derive(Debug)]
pub struct FieldReport {
    pub name: String,
    pub type_name: String,
    pub summary: String,
}

/// Decodes `bytes` and summarizes the object for human consumption.
///
/// # Errors
///
/// Fails with any decode error; the report only covers objects that
/// decode cleanly.
pub fn inspect_object(
    bytes: &[u8],
    registry: &Registry,
    limits: &CodecLimits,
) -> CodecResult<InspectReport> {
    let object = decode_object_bytes(registry, bytes, limits)?;
    let def = registry.lookup(object.constructor)?;

    let fields = object
        .fields
        .iter()
        .map(|(name, value)| FieldReport {
            name: name.clone(),
            type_name: def
                .field_by_name(name)
                .map_or_else(|| "unknown".to_owned(), |field| wire_type_label(&field.ty)),
            summary: value_summary(value),
        })
        .collect();

    Ok(InspectReport {
        constructor: def.name.clone(),
        id: def.id,
        byte_len: bytes.len(),
        fields,
    })
}

/// Decodes `bytes` into a JSON value tree.
///
/// # Errors
///
/// Fails with any decode error.
pub fn decode_object_json(
    bytes: &[u8],
    registry: &Registry,
    limits: &CodecLimits,
) -> CodecResult<Value> {
    let object = decode_object_bytes(registry, bytes, limits)?;
    Ok(object_to_json(&object, registry))
}

/// Converts a decoded object into JSON.
///
/// The constructor is recorded under the `_constructor` key, by name when
/// the registry knows it. Values that JSON cannot represent natively are
/// rendered as strings: `int128` in decimal, `int256` and `bytes` as
/// lowercase hex.
#[must_use]
pub fn object_to_json(object: &TlObject, registry: &Registry) -> Value {
    let mut map = Map::new();
    let constructor = registry
        .get(object.constructor)
        .map_or_else(|| object.constructor.to_string(), |def| def.name.clone());
    map.insert("_constructor".to_owned(), Value::String(constructor));
    for (name, value) in &object.fields {
        map.insert(name.clone(), value_to_json(value, registry));
    }
    Value::Object(map)
}

/// Renders a decoded JSON tree as indented `key: value` lines.
#[must_use]
pub fn format_decode_pretty(value: &Value) -> String {
    let mut out = String::new();
    if is_leaf(value) {
        out.push_str(&value.to_string());
        out.push('\n');
    } else {
        write_pretty(value, 0, &mut out);
    }
    out
}

/// Human label for a wire type, e.g. `vector<int64>`.
#[must_use]
pub fn wire_type_label(ty: &WireType) -> String {
    match ty {
        WireType::Int32 => "int32".to_owned(),
        WireType::Int64 => "int64".to_owned(),
        WireType::Int128 => "int128".to_owned(),
        WireType::Int256 => "int256".to_owned(),
        WireType::Double => "double".to_owned(),
        WireType::Bytes => "bytes".to_owned(),
        WireType::String => "string".to_owned(),
        WireType::Bool => "bool".to_owned(),
        WireType::Flags => "flags".to_owned(),
        WireType::Object => "object".to_owned(),
        WireType::Vector(element) => format!("vector<{}>", wire_type_label(element)),
    }
}

fn value_to_json(value: &TlValue, registry: &Registry) -> Value {
    match value {
        TlValue::Int32(v) => Value::from(*v),
        TlValue::Int64(v) => Value::from(*v),
        TlValue::Int128(v) => Value::String(v.to_string()),
        TlValue::Int256(v) => Value::String(hex_string(v)),
        TlValue::Double(v) => Value::from(*v),
        TlValue::Bytes(v) => Value::String(hex_string(v)),
        TlValue::String(v) => Value::String(v.clone()),
        TlValue::Bool(v) => Value::Bool(*v),
        TlValue::Object(inner) => object_to_json(inner, registry),
        TlValue::Vector(items) => Value::Array(
            items
                .iter()
                .map(|item| value_to_json(item, registry))
                .collect(),
        ),
    }
}

fn value_summary(value: &TlValue) -> String {
    match value {
        TlValue::Int32(v) => v.to_string(),
        TlValue::Int64(v) => v.to_string(),
        TlValue::Int128(v) => v.to_string(),
        TlValue::Int256(v) => format!("0x{}", hex_string(v)),
        TlValue::Double(v) => v.to_string(),
        TlValue::Bool(v) => v.to_string(),
        TlValue::Bytes(v) => format!("{} bytes", v.len()),
        TlValue::String(v) => {
            if v.chars().count() > 32 {
                let head: String = v.chars().take(32).collect();
                format!("{head:?}…")
            } else {
                format!("{v:?}")
            }
        }
        TlValue::Object(inner) => {
            format!("object {} ({} fields)", inner.constructor, inner.fields.len())
        }
        TlValue::Vector(items) => format!("vector of {}", items.len()),
    }
}

fn write_pretty(value: &Value, indent: usize, out: &mut String) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                push_indent(out, indent);
                out.push_str(key);
                out.push(':');
                if is_leaf(val) {
                    out.push(' ');
                    out.push_str(&val.to_string());
                    out.push('\n');
                } else {
                    out.push('\n');
                    write_pretty(val, indent + 1, out);
                }
            }
        }
        Value::Array(items) => {
            for val in items {
                push_indent(out, indent);
                if is_leaf(val) {
                    out.push_str("- ");
                    out.push_str(&val.to_string());
                    out.push('\n');
                } else {
                    out.push_str("-\n");
                    write_pretty(val, indent + 1, out);
                }
            }
        }
        leaf => {
            push_indent(out, indent);
            out.push_str(&leaf.to_string());
            out.push('\n');
        }
    }
}

fn is_leaf(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => true,
    }
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}

fn hex_string(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(HEX[usize::from(byte >> 4)] as char);
        out.push(HEX[usize::from(byte & 0x0F)] as char);
    }
    out
}
