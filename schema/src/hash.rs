//! Deterministic registry hashing.

use blake3::Hasher;

use crate::{FieldDef, Registry, WireType};

/// Computes a deterministic digest of every definition in a registry.
///
/// Two endpoints that agree on this value agree on every constructor ID,
/// name, field encoding, and flag bit, in registration order. The digest
/// is stable across processes and platforms.
#[must_use]
pub fn registry_hash(registry: &Registry) -> u64 {
    let mut hasher = Hasher::new();
    write_u32(&mut hasher, registry.len() as u32);

    for def in registry.iter() {
        write_u32(&mut hasher, def.id.raw());
        write_str(&mut hasher, &def.name);
        write_u32(&mut hasher, def.fields.len() as u32);

        for field in &def.fields {
            write_field(&mut hasher, field);
        }
    }

    let hash = hasher.finalize();
    let bytes = hash.as_bytes();
    u64::from_le_bytes(bytes[0..8].try_into().unwrap())
}

fn write_field(hasher: &mut Hasher, field: &FieldDef) {
    write_str(hasher, &field.name);
    write_type(hasher, &field.ty);
    match field.flag_bit {
        None => write_u8(hasher, 0),
        Some(bit) => {
            write_u8(hasher, 1);
            write_u8(hasher, bit);
        }
    }
}

fn write_type(hasher: &mut Hasher, ty: &WireType) {
    match ty {
        WireType::Int32 => write_u8(hasher, 0),
        WireType::Int64 => write_u8(hasher, 1),
        WireType::Int128 => write_u8(hasher, 2),
        WireType::Int256 => write_u8(hasher, 3),
        WireType::Double => write_u8(hasher, 4),
        WireType::Bytes => write_u8(hasher, 5),
        WireType::String => write_u8(hasher, 6),
        WireType::Bool => write_u8(hasher, 7),
        WireType::Flags => write_u8(hasher, 8),
        WireType::Object => write_u8(hasher, 9),
        WireType::Vector(element) => {
            write_u8(hasher, 10);
            write_type(hasher, element);
        }
    }
}

fn write_str(hasher: &mut Hasher, value: &str) {
    write_u32(hasher, value.len() as u32);
    hasher.update(value.as_bytes());
}

fn write_u8(hasher: &mut Hasher, value: u8) {
    hasher.update(&[value]);
}

fn write_u32(hasher: &mut Hasher, value: u32) {
    hasher.update(&value.to_le_bytes());
}
