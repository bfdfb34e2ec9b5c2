use binary::{BinaryReader, BinaryWriter};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    I32(i32),
    U32(u32),
    I64(i64),
    I128(i128),
    Int256([u8; 32]),
    F64(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Str(String),
    VecI64(Vec<i64>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::I32),
        any::<u32>().prop_map(Op::U32),
        any::<i64>().prop_map(Op::I64),
        any::<i128>().prop_map(Op::I128),
        prop::array::uniform32(any::<u8>()).prop_map(Op::Int256),
        (-1.0e300f64..1.0e300).prop_map(Op::F64),
        any::<bool>().prop_map(Op::Bool),
        prop::collection::vec(any::<u8>(), 0..600).prop_map(Op::Bytes),
        ".{0,120}".prop_map(Op::Str),
        prop::collection::vec(any::<i64>(), 0..32).prop_map(Op::VecI64),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..32)) {
        let mut writer = BinaryWriter::new();

        for op in &ops {
            match op {
                Op::I32(v) => writer.write_i32(*v),
                Op::U32(v) => writer.write_u32(*v),
                Op::I64(v) => writer.write_i64(*v),
                Op::I128(v) => writer.write_i128(*v),
                Op::Int256(v) => writer.write_int256(*v),
                Op::F64(v) => writer.write_f64(*v),
                Op::Bool(v) => writer.write_bool(*v),
                Op::Bytes(v) => writer.write_bytes(v).unwrap(),
                Op::Str(v) => writer.write_string(v).unwrap(),
                Op::VecI64(v) => writer
                    .write_vector(v, |w, item| {
                        w.write_i64(*item);
                        Ok(())
                    })
                    .unwrap(),
            }
            prop_assert_eq!(writer.len() % 4, 0);
        }

        let bytes = writer.into_bytes();
        let mut reader = BinaryReader::new(&bytes);

        for op in &ops {
            match op {
                Op::I32(v) => prop_assert_eq!(reader.read_i32().unwrap(), *v),
                Op::U32(v) => prop_assert_eq!(reader.read_u32().unwrap(), *v),
                Op::I64(v) => prop_assert_eq!(reader.read_i64().unwrap(), *v),
                Op::I128(v) => prop_assert_eq!(reader.read_i128().unwrap(), *v),
                Op::Int256(v) => prop_assert_eq!(reader.read_int256().unwrap(), *v),
                Op::F64(v) => {
                    prop_assert_eq!(reader.read_f64().unwrap().to_bits(), v.to_bits());
                }
                Op::Bool(v) => prop_assert_eq!(reader.read_bool().unwrap(), *v),
                Op::Bytes(v) => prop_assert_eq!(reader.read_bytes().unwrap(), v.as_slice()),
                Op::Str(v) => prop_assert_eq!(reader.read_string().unwrap(), v.as_str()),
                Op::VecI64(v) => {
                    let decoded = reader.read_vector(BinaryReader::read_i64).unwrap();
                    prop_assert_eq!(&decoded, v);
                }
            }
        }
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_bytes_wire_size(payload in prop::collection::vec(any::<u8>(), 0..700)) {
        let mut writer = BinaryWriter::new();
        writer.write_bytes(&payload).unwrap();
        let bytes = writer.into_bytes();

        let prefix = if payload.len() < 254 { 1 } else { 4 };
        let expected = (prefix + payload.len()).div_ceil(4) * 4;
        prop_assert_eq!(bytes.len(), expected);

        let mut reader = BinaryReader::new(&bytes);
        prop_assert_eq!(reader.read_bytes().unwrap(), payload.as_slice());
        prop_assert!(reader.is_empty());
    }
}
