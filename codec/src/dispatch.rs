//! Request/result dispatch for function-style constructors.
//!
//! A response on the wire does not name the request it answers; the
//! caller knows the request constructor and must supply it. The
//! dispatcher maps each request constructor to the wire type of its
//! result, so responses can be decoded without guessing.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use binary::BinaryReader;
use schema::{ConstructorId, Registry, WireType};

use crate::error::{CodecError, CodecResult};
use crate::limits::CodecLimits;
use crate::object::{ensure_consumed, Decoder};
use crate::value::TlValue;

/// Maps request constructors to their result wire types.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    results: HashMap<ConstructorId, WireType>,
}

impl Dispatcher {
    /// Creates an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the result wire type for a request constructor.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DuplicateRequest`] if the request already
    /// has a result type, or [`CodecError::TypeMismatch`] if `result`
    /// is or contains a flags type.
    pub fn register(&mut self, request: ConstructorId, result: WireType) -> CodecResult<()> {
        if result.contains_flags() {
            return Err(CodecError::TypeMismatch {
                constructor: request,
                field: "result".to_owned(),
                expected: "a concrete wire type",
                found: "flags",
            });
        }
        match self.results.entry(request) {
            Entry::Occupied(_) => Err(CodecError::DuplicateRequest { request }),
            Entry::Vacant(slot) => {
                slot.insert(result);
                Ok(())
            }
        }
    }

    /// Returns the result wire type registered for `request`, if any.
    #[must_use]
    pub fn result_type(&self, request: ConstructorId) -> Option<&WireType> {
        self.results.get(&request)
    }

    /// Returns `true` if `request` has a registered result type.
    #[must_use]
    pub fn contains(&self, request: ConstructorId) -> bool {
        self.results.contains_key(&request)
    }

    /// Returns the number of registered requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if no requests are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Decodes a response body for `request`, requiring that every byte
    /// is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnregisteredRequest`] if no result type is
    /// registered for `request`, or any decode error from the result
    /// payload itself.
    pub fn decode_response(
        &self,
        request: ConstructorId,
        registry: &Registry,
        bytes: &[u8],
        limits: &CodecLimits,
    ) -> CodecResult<TlValue> {
        let result_ty = self
            .results
            .get(&request)
            .ok_or(CodecError::UnregisteredRequest { request })?;
        let mut reader = BinaryReader::new(bytes);
        let value = Decoder {
            registry,
            limits,
            reader: &mut reader,
        }
        .value(request, "result", result_ty, 0)?;
        ensure_consumed(&reader)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use binary::BinaryWriter;
    use schema::{ConstructorDef, FieldDef};

    use super::*;
    use crate::object::encode_object_bytes;
    use crate::value::TlObject;

    const PING: ConstructorId = ConstructorId::new(0x7ABE_77EC);
    const PONG: ConstructorId = ConstructorId::new(0x0347_4657);
    const GET_USERS: ConstructorId = ConstructorId::new(0x99);

    fn registry() -> Registry {
        Registry::from_defs(vec![
            ConstructorDef::new(PONG, "pong")
                .field(FieldDef::new("ping_id", WireType::Int64)),
        ])
        .unwrap()
    }

    fn pong(ping_id: i64) -> TlObject {
        TlObject::new(PONG).set("ping_id", TlValue::Int64(ping_id))
    }

    #[test]
    fn registers_and_reports_result_types() {
        let mut dispatcher = Dispatcher::new();
        assert!(dispatcher.is_empty());
        dispatcher.register(PING, WireType::Object).unwrap();
        dispatcher
            .register(GET_USERS, WireType::vector(WireType::Object))
            .unwrap();

        assert_eq!(dispatcher.len(), 2);
        assert!(dispatcher.contains(PING));
        assert_eq!(dispatcher.result_type(PING), Some(&WireType::Object));
        assert!(dispatcher.result_type(ConstructorId::new(0xBAD)).is_none());
    }

    #[test]
    fn rejects_duplicate_registration() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(PING, WireType::Object).unwrap();
        let err = dispatcher.register(PING, WireType::Int64).unwrap_err();
        assert_eq!(err, CodecError::DuplicateRequest { request: PING });
        // The original mapping survives.
        assert_eq!(dispatcher.result_type(PING), Some(&WireType::Object));
    }

    #[test]
    fn rejects_flags_result_type() {
        let mut dispatcher = Dispatcher::new();
        let err = dispatcher.register(PING, WireType::Flags).unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { .. }));
        let err = dispatcher
            .register(PING, WireType::vector(WireType::Flags))
            .unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { .. }));
    }

    #[test]
    fn decode_response_without_registration_fails() {
        let dispatcher = Dispatcher::new();
        let err = dispatcher
            .decode_response(PING, &registry(), &[], &CodecLimits::default())
            .unwrap_err();
        assert_eq!(err, CodecError::UnregisteredRequest { request: PING });
    }

    #[test]
    fn decodes_scalar_response() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(PING, WireType::Int64).unwrap();

        let mut writer = BinaryWriter::new();
        writer.write_i64(42);
        let value = dispatcher
            .decode_response(PING, &registry(), writer.as_bytes(), &CodecLimits::default())
            .unwrap();
        assert_eq!(value, TlValue::Int64(42));
    }

    #[test]
    fn decodes_object_response() {
        let registry = registry();
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(PING, WireType::Object).unwrap();

        let bytes = encode_object_bytes(&registry, &pong(7), &CodecLimits::default()).unwrap();
        let value = dispatcher
            .decode_response(PING, &registry, &bytes, &CodecLimits::default())
            .unwrap();
        assert_eq!(value, TlValue::Object(pong(7)));
    }

    #[test]
    fn decodes_vector_of_objects_response() {
        let registry = registry();
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .register(GET_USERS, WireType::vector(WireType::Object))
            .unwrap();

        let mut payload = Vec::new();
        payload.extend_from_slice(&2i32.to_le_bytes());
        for id in [1, 2] {
            payload.extend_from_slice(
                &encode_object_bytes(&registry, &pong(id), &CodecLimits::default()).unwrap(),
            );
        }

        let value = dispatcher
            .decode_response(GET_USERS, &registry, &payload, &CodecLimits::default())
            .unwrap();
        assert_eq!(
            value,
            TlValue::Vector(vec![
                TlValue::Object(pong(1)),
                TlValue::Object(pong(2)),
            ])
        );
    }

    #[test]
    fn decode_response_rejects_trailing_bytes() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(PING, WireType::Int32).unwrap();

        let mut writer = BinaryWriter::new();
        writer.write_i32(1);
        writer.write_i32(2);
        let err = dispatcher
            .decode_response(PING, &registry(), writer.as_bytes(), &CodecLimits::default())
            .unwrap_err();
        assert_eq!(err, CodecError::TrailingData { remaining: 4 });
    }

    #[test]
    fn decode_response_rejects_truncated_payload() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(PING, WireType::Int64).unwrap();
        let err = dispatcher
            .decode_response(PING, &registry(), &[0x2A, 0, 0, 0], &CodecLimits::default())
            .unwrap_err();
        assert!(matches!(err, CodecError::Binary(_)));
    }

    #[test]
    fn decode_response_applies_limits() {
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .register(GET_USERS, WireType::vector(WireType::Int32))
            .unwrap();
        let limits = CodecLimits::for_testing();
        let mut payload = Vec::new();
        payload.extend_from_slice(&1_000_000i32.to_le_bytes());
        let err = dispatcher
            .decode_response(GET_USERS, &registry(), &payload, &limits)
            .unwrap_err();
        assert!(matches!(err, CodecError::LimitsExceeded { .. }));
    }
}
