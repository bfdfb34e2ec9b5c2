#![no_main]

use binary::BinaryReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = BinaryReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 10;
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_i32();
            }
            1 => {
                let _ = reader.read_u32();
            }
            2 => {
                let _ = reader.read_i64();
            }
            3 => {
                let _ = reader.read_i128();
            }
            4 => {
                let _ = reader.read_int256();
            }
            5 => {
                let _ = reader.read_f64();
            }
            6 => {
                let _ = reader.read_bool();
            }
            7 => {
                let _ = reader.read_bytes();
            }
            8 => {
                let _ = reader.read_string();
            }
            _ => {
                let _ = reader.read_vector(BinaryReader::read_i32);
            }
        }

        assert!(reader.position() <= data.len());
    }
});
