//! Descriptor-driven object encoding and decoding.
//!
//! Objects carry no self-description beyond the leading constructor ID.
//! The decoder looks the ID up in a [`Registry`] and walks the declared
//! fields in order; the encoder walks the same declaration to lay fields
//! out. Flags masks are wire-only: they are derived from field presence
//! on encode and consumed silently on decode, so callers never see them
//! as values.

use std::collections::HashSet;

use binary::{BinaryReader, BinaryWriter};
use schema::{ConstructorDef, ConstructorId, Registry, WireType};

use crate::error::{CodecError, CodecResult, FieldMismatchReason, LimitKind};
use crate::limits::CodecLimits;
use crate::value::{TlObject, TlValue};

/// Decodes a single object from `bytes`, requiring that every byte is
/// consumed.
///
/// # Errors
///
/// Fails on unknown constructors, truncated or trailing input, invalid
/// wire data, or exceeded limits.
pub fn decode_object_bytes(
    registry: &Registry,
    bytes: &[u8],
    limits: &CodecLimits,
) -> CodecResult<TlObject> {
    let mut reader = BinaryReader::new(bytes);
    let object = decode_object(registry, &mut reader, limits)?;
    ensure_consumed(&reader)?;
    Ok(object)
}

/// Decodes a single object from the reader's current position.
///
/// Bytes after the object are left unread, so callers can decode several
/// objects from one buffer.
///
/// # Errors
///
/// Fails on unknown constructors, truncated input, invalid wire data, or
/// exceeded limits.
pub fn decode_object(
    registry: &Registry,
    reader: &mut BinaryReader<'_>,
    limits: &CodecLimits,
) -> CodecResult<TlObject> {
    Decoder {
        registry,
        limits,
        reader,
    }
    .object(0)
}

/// Encodes `object` onto the end of `writer`.
///
/// # Errors
///
/// Fails if the object's constructor is unregistered, its field set does
/// not match the descriptor, a value's variant does not match its
/// declared type, or a limit is exceeded. The writer may hold a partial
/// encoding after an error.
pub fn encode_object(
    registry: &Registry,
    object: &TlObject,
    limits: &CodecLimits,
    writer: &mut BinaryWriter,
) -> CodecResult<()> {
    Encoder {
        registry,
        limits,
        writer,
    }
    .object(object, 0)
}

/// Encodes `object` into a fresh byte vector.
///
/// # Errors
///
/// Same failure modes as [`encode_object`].
pub fn encode_object_bytes(
    registry: &Registry,
    object: &TlObject,
    limits: &CodecLimits,
) -> CodecResult<Vec<u8>> {
    let mut writer = BinaryWriter::new();
    encode_object(registry, object, limits, &mut writer)?;
    Ok(writer.into_bytes())
}

pub(crate) fn ensure_consumed(reader: &BinaryReader<'_>) -> CodecResult<()> {
    if reader.is_empty() {
        Ok(())
    } else {
        Err(CodecError::TrailingData {
            remaining: reader.remaining(),
        })
    }
}

pub(crate) struct Decoder<'a, 'b> {
    pub(crate) registry: &'a Registry,
    pub(crate) limits: &'a CodecLimits,
    pub(crate) reader: &'a mut BinaryReader<'b>,
}

impl Decoder<'_, '_> {
    fn object(&mut self, depth: usize) -> CodecResult<TlObject> {
        self.check_depth(depth)?;
        let id = ConstructorId::new(self.reader.read_u32()?);
        let registry = self.registry;
        let def = registry.lookup(id)?;

        let mut fields = Vec::with_capacity(def.fields.len());
        let mut flags_mask = 0u32;
        for field in &def.fields {
            if field.ty == WireType::Flags {
                flags_mask = self.reader.read_u32()?;
                continue;
            }
            if let Some(bit) = field.flag_bit {
                if flags_mask & (1 << bit) == 0 {
                    // Absent optional field: zero wire bytes.
                    continue;
                }
            }
            let value = self.value(id, &field.name, &field.ty, depth + 1)?;
            fields.push((field.name.clone(), value));
        }
        Ok(TlObject {
            constructor: id,
            fields,
        })
    }

    pub(crate) fn value(
        &mut self,
        constructor: ConstructorId,
        field: &str,
        ty: &WireType,
        depth: usize,
    ) -> CodecResult<TlValue> {
        Ok(match ty {
            WireType::Int32 => TlValue::Int32(self.reader.read_i32()?),
            WireType::Int64 => TlValue::Int64(self.reader.read_i64()?),
            WireType::Int128 => TlValue::Int128(self.reader.read_i128()?),
            WireType::Int256 => TlValue::Int256(self.reader.read_int256()?),
            WireType::Double => TlValue::Double(self.reader.read_f64()?),
            WireType::Bool => TlValue::Bool(self.reader.read_bool()?),
            WireType::Bytes => {
                let payload = self.reader.read_bytes()?;
                self.check_bytes_len(payload.len())?;
                TlValue::Bytes(payload.to_vec())
            }
            WireType::String => {
                let text = self.reader.read_string()?;
                self.check_bytes_len(text.len())?;
                TlValue::String(text.to_owned())
            }
            WireType::Object => TlValue::Object(self.object(depth)?),
            WireType::Vector(element) => {
                let raw = self.reader.read_i32()?;
                if raw < 0 {
                    return Err(CodecError::InvalidVectorLength { raw });
                }
                let count = raw as usize;
                if count > self.limits.max_vector_len {
                    return Err(CodecError::LimitsExceeded {
                        kind: LimitKind::VectorLen,
                        limit: self.limits.max_vector_len,
                        actual: count,
                    });
                }
                self.check_depth(depth)?;
                // Cap the allocation hint at what the buffer could still
                // hold; every element occupies at least four bytes.
                let mut items = Vec::with_capacity(count.min(self.reader.remaining() / 4));
                for _ in 0..count {
                    items.push(self.value(constructor, field, element, depth + 1)?);
                }
                TlValue::Vector(items)
            }
            WireType::Flags => {
                // Registry validation keeps flags out of value positions.
                return Err(CodecError::TypeMismatch {
                    constructor,
                    field: field.to_owned(),
                    expected: "a concrete wire type",
                    found: "flags",
                });
            }
        })
    }

    fn check_depth(&self, depth: usize) -> CodecResult<()> {
        if depth > self.limits.max_depth {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::Depth,
                limit: self.limits.max_depth,
                actual: depth,
            });
        }
        Ok(())
    }

    fn check_bytes_len(&self, len: usize) -> CodecResult<()> {
        if len > self.limits.max_bytes_len {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::BytesLen,
                limit: self.limits.max_bytes_len,
                actual: len,
            });
        }
        Ok(())
    }
}

struct Encoder<'a> {
    registry: &'a Registry,
    limits: &'a CodecLimits,
    writer: &'a mut BinaryWriter,
}

impl Encoder<'_> {
    fn object(&mut self, object: &TlObject, depth: usize) -> CodecResult<()> {
        self.check_depth(depth)?;
        let registry = self.registry;
        let def = registry.lookup(object.constructor)?;
        validate_field_set(def, object)?;
        let mask = derive_flags_mask(def, object);

        self.writer.write_u32(def.id.raw());
        for field in &def.fields {
            if field.ty == WireType::Flags {
                self.writer.write_u32(mask);
                continue;
            }
            if let Some(value) = object.get(&field.name) {
                self.value(def.id, &field.name, &field.ty, value, depth + 1)?;
            }
        }
        Ok(())
    }

    fn value(
        &mut self,
        constructor: ConstructorId,
        field: &str,
        ty: &WireType,
        value: &TlValue,
        depth: usize,
    ) -> CodecResult<()> {
        match (ty, value) {
            (WireType::Int32, TlValue::Int32(v)) => self.writer.write_i32(*v),
            (WireType::Int64, TlValue::Int64(v)) => self.writer.write_i64(*v),
            (WireType::Int128, TlValue::Int128(v)) => self.writer.write_i128(*v),
            (WireType::Int256, TlValue::Int256(v)) => self.writer.write_int256(*v),
            (WireType::Double, TlValue::Double(v)) => self.writer.write_f64(*v),
            (WireType::Bool, TlValue::Bool(v)) => self.writer.write_bool(*v),
            (WireType::Bytes, TlValue::Bytes(payload)) => {
                self.check_bytes_len(payload.len())?;
                self.writer.write_bytes(payload)?;
            }
            (WireType::String, TlValue::String(text)) => {
                self.check_bytes_len(text.len())?;
                self.writer.write_string(text)?;
            }
            (WireType::Object, TlValue::Object(inner)) => self.object(inner, depth)?,
            (WireType::Vector(element), TlValue::Vector(items)) => {
                if items.len() > self.limits.max_vector_len {
                    return Err(CodecError::LimitsExceeded {
                        kind: LimitKind::VectorLen,
                        limit: self.limits.max_vector_len,
                        actual: items.len(),
                    });
                }
                self.check_depth(depth)?;
                let count = i32::try_from(items.len()).map_err(|_| {
                    CodecError::Binary(binary::BinaryError::LengthOverflow {
                        length: items.len(),
                        max: i32::MAX as usize,
                    })
                })?;
                self.writer.write_i32(count);
                for item in items {
                    self.value(constructor, field, element, item, depth + 1)?;
                }
            }
            (ty, value) => {
                return Err(CodecError::TypeMismatch {
                    constructor,
                    field: field.to_owned(),
                    expected: type_name(ty),
                    found: value_name(value),
                });
            }
        }
        Ok(())
    }

    fn check_depth(&self, depth: usize) -> CodecResult<()> {
        if depth > self.limits.max_depth {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::Depth,
                limit: self.limits.max_depth,
                actual: depth,
            });
        }
        Ok(())
    }

    fn check_bytes_len(&self, len: usize) -> CodecResult<()> {
        if len > self.limits.max_bytes_len {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::BytesLen,
                limit: self.limits.max_bytes_len,
                actual: len,
            });
        }
        Ok(())
    }
}

fn validate_field_set(def: &ConstructorDef, object: &TlObject) -> CodecResult<()> {
    let mut seen = HashSet::with_capacity(object.fields.len());
    for (name, _) in &object.fields {
        if !seen.insert(name.as_str()) {
            return Err(CodecError::FieldMismatch {
                constructor: def.id,
                reason: FieldMismatchReason::DuplicateField {
                    field: name.clone(),
                },
            });
        }
        // The flags mask is derived, so supplying it by name is as wrong
        // as supplying a field the descriptor never declared.
        match def.field_by_name(name) {
            Some(field) if field.ty != WireType::Flags => {}
            _ => {
                return Err(CodecError::FieldMismatch {
                    constructor: def.id,
                    reason: FieldMismatchReason::UnknownField {
                        field: name.clone(),
                    },
                });
            }
        }
    }
    for field in &def.fields {
        if field.ty == WireType::Flags || field.flag_bit.is_some() {
            continue;
        }
        if !object.contains(&field.name) {
            return Err(CodecError::FieldMismatch {
                constructor: def.id,
                reason: FieldMismatchReason::MissingRequired {
                    field: field.name.clone(),
                },
            });
        }
    }
    Ok(())
}

fn derive_flags_mask(def: &ConstructorDef, object: &TlObject) -> u32 {
    let mut mask = 0u32;
    for field in &def.fields {
        if let Some(bit) = field.flag_bit {
            if object.contains(&field.name) {
                mask |= 1 << bit;
            }
        }
    }
    mask
}

fn type_name(ty: &WireType) -> &'static str {
    match ty {
        WireType::Int32 => "int32",
        WireType::Int64 => "int64",
        WireType::Int128 => "int128",
        WireType::Int256 => "int256",
        WireType::Double => "double",
        WireType::Bytes => "bytes",
        WireType::String => "string",
        WireType::Bool => "bool",
        WireType::Flags => "flags",
        WireType::Object => "object",
        WireType::Vector(_) => "vector",
    }
}

fn value_name(value: &TlValue) -> &'static str {
    match value {
        TlValue::Int32(_) => "int32",
        TlValue::Int64(_) => "int64",
        TlValue::Int128(_) => "int128",
        TlValue::Int256(_) => "int256",
        TlValue::Double(_) => "double",
        TlValue::Bytes(_) => "bytes",
        TlValue::String(_) => "string",
        TlValue::Bool(_) => "bool",
        TlValue::Object(_) => "object",
        TlValue::Vector(_) => "vector",
    }
}
