#![no_main]

use codec::{decode_object_bytes, encode_object_bytes, CodecLimits, Dispatcher};
use libfuzzer_sys::fuzz_target;
use schema::{ConstructorDef, ConstructorId, FieldDef, Registry, WireType};

const PING: ConstructorId = ConstructorId::new(0x7ABE_77EC);

fn chat_registry() -> Registry {
    Registry::from_defs(vec![
        ConstructorDef::new(PING, "ping").field(FieldDef::new("id", WireType::Int64)),
        ConstructorDef::new(ConstructorId::new(0x11), "user")
            .field(FieldDef::new("id", WireType::Int64))
            .field(FieldDef::flags("flags"))
            .field(FieldDef::optional("bio", WireType::String, 0))
            .field(FieldDef::optional("age", WireType::Int32, 1))
            .field(FieldDef::new("tags", WireType::vector(WireType::String))),
        ConstructorDef::new(ConstructorId::new(0x22), "pair")
            .field(FieldDef::new("left", WireType::Object))
            .field(FieldDef::new("right", WireType::Object)),
    ])
    .unwrap()
}

fuzz_target!(|data: &[u8]| {
    let registry = chat_registry();
    let limits = CodecLimits::for_testing();

    if let Ok(object) = decode_object_bytes(&registry, data, &limits) {
        // A decoded object is well-formed, so it must re-encode, and its
        // canonical encoding must be a decode/encode fixed point. The raw
        // input itself need not match: padding bytes and undeclared mask
        // bits are dropped during decoding.
        let canonical =
            encode_object_bytes(&registry, &object, &limits).expect("decoded object re-encodes");
        let again =
            decode_object_bytes(&registry, &canonical, &limits).expect("canonical bytes decode");
        let stable =
            encode_object_bytes(&registry, &again, &limits).expect("canonical bytes re-encode");
        assert_eq!(canonical, stable);
    }

    let mut dispatcher = Dispatcher::new();
    let _ = dispatcher.register(PING, WireType::Object);
    let _ = dispatcher.register(
        ConstructorId::new(0x99),
        WireType::vector(WireType::Object),
    );
    let _ = dispatcher.decode_response(PING, &registry, data, &limits);
    let _ = dispatcher.decode_response(ConstructorId::new(0x99), &registry, data, &limits);
});
