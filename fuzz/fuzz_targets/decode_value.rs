#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

/// Fuzz input pairing a raw type code with column bytes.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    type_id: u8,
    data: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    // Decoding must be total, whatever the buffer length
    let value = sybdb_types::decode_value(input.type_id, &input.data);
    let _ = sybdb_protocol::bind_type(input.type_id);

    // A decoded value always has the shape its tag encodes from
    if let Some(tag) = sybdb_protocol::TypeTag::from_u8(input.type_id) {
        assert_eq!(tag.kind(), value.kind());
        assert!(sybdb_types::encode_value(input.type_id, &value).is_ok());
    }
});
