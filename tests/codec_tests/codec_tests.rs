//! Tests for the record codec
//!
//! These tests verify:
//! - Binary and text round trips
//! - Protobuf field-presence semantics (missing → zero, unknown → skipped)
//! - Decode errors for truncated/corrupt binary and malformed text
//! - Record validation for the text encoding

use staffdb::codec::{binary, text, Format};
use staffdb::{Employee, StaffError};

fn ada() -> Employee {
    Employee::new(7, "Ada", "Lovelace", 18151210)
}

// =============================================================================
// Binary Codec Tests
// =============================================================================

#[test]
fn test_binary_round_trip() {
    let employee = ada();

    let bytes = binary::encode(&employee);
    let decoded = binary::decode(&bytes).unwrap();

    assert_eq!(decoded, employee);
}

#[test]
fn test_binary_round_trip_negative_and_unicode() {
    let employee = Employee::new(-42, "Zoë", "Ørsted", -1);

    let decoded = binary::decode(&binary::encode(&employee)).unwrap();

    assert_eq!(decoded, employee);
}

#[test]
fn test_binary_known_wire_bytes() {
    let employee = Employee::new(1, "A", "B", 2);

    let bytes = binary::encode(&employee);

    // tag 1 varint, tag 2 len, tag 3 len, tag 4 varint
    assert_eq!(
        bytes.as_ref(),
        &[0x08, 0x01, 0x12, 0x01, b'A', 0x1a, 0x01, b'B', 0x20, 0x02]
    );
}

#[test]
fn test_binary_default_encodes_empty() {
    let bytes = binary::encode(&Employee::default());
    assert!(bytes.is_empty());
}

#[test]
fn test_binary_empty_input_decodes_to_zero_values() {
    let decoded = binary::decode(&[]).unwrap();
    assert_eq!(decoded, Employee::default());
}

#[test]
fn test_binary_missing_fields_decode_to_zero() {
    // Only id (tag 1) and last_name (tag 3)
    let bytes = [0x08, 0x05, 0x1a, 0x03, b'D', b'o', b'e'];

    let decoded = binary::decode(&bytes).unwrap();

    assert_eq!(decoded.id, 5);
    assert_eq!(decoded.first_name, "");
    assert_eq!(decoded.last_name, "Doe");
    assert_eq!(decoded.hire_date, 0);
}

#[test]
fn test_binary_unknown_field_is_skipped() {
    let employee = ada();
    let mut bytes = binary::encode(&employee).to_vec();
    // field 5, varint, value 1
    bytes.extend_from_slice(&[0x28, 0x01]);

    let decoded = binary::decode(&bytes).unwrap();

    assert_eq!(decoded, employee);
}

#[test]
fn test_binary_truncated_varint_fails() {
    let bytes = binary::encode(&ada());
    // hire_date is a multi-byte varint at the end; cut its last byte
    let truncated = &bytes[..bytes.len() - 1];

    let result = binary::decode(truncated);

    assert!(matches!(result, Err(StaffError::Decode(_))));
}

#[test]
fn test_binary_length_overrun_fails() {
    // first_name claims 10 bytes, only 2 present
    let bytes = [0x08, 0x01, 0x12, 0x0a, b'A', b'd'];

    let result = binary::decode(&bytes);

    assert!(matches!(result, Err(StaffError::Decode(_))));
}

#[test]
fn test_binary_invalid_wire_type_fails() {
    // field 1 with wire type 7
    let result = binary::decode(&[0x0f, 0x00]);
    assert!(matches!(result, Err(StaffError::Decode(_))));
}

#[test]
fn test_binary_invalid_utf8_fails() {
    let bytes = [0x12, 0x02, 0xff, 0xfe];
    let result = binary::decode(&bytes);
    assert!(matches!(result, Err(StaffError::Decode(_))));
}

// =============================================================================
// Text Codec Tests
// =============================================================================

#[test]
fn test_text_format() {
    assert_eq!(text::format(&ada()), "7, Ada, Lovelace, 18151210");
}

#[test]
fn test_text_round_trip() {
    let employee = ada();
    let parsed = text::parse(&text::format(&employee)).unwrap();
    assert_eq!(parsed, employee);
}

#[test]
fn test_text_parse_trims_surrounding_whitespace() {
    let parsed = text::parse("  7, Ada, Lovelace, 18151210\r\n").unwrap();
    assert_eq!(parsed, ada());
}

#[test]
fn test_text_parse_wrong_field_count() {
    let too_few = text::parse("7, Ada, 18151210");
    let too_many = text::parse("7, Ada, King, Lovelace, 18151210");

    assert!(matches!(too_few, Err(StaffError::Decode(_))));
    assert!(matches!(too_many, Err(StaffError::Decode(_))));
}

#[test]
fn test_text_parse_non_numeric_id() {
    let result = text::parse("seven, Ada, Lovelace, 18151210");
    assert!(matches!(result, Err(StaffError::Decode(_))));
}

#[test]
fn test_text_parse_non_numeric_hire_date() {
    let result = text::parse("7, Ada, Lovelace, 1815-12-10");
    assert!(matches!(result, Err(StaffError::Decode(_))));
}

#[test]
fn test_text_parse_requires_comma_space() {
    let result = text::parse("7,Ada,Lovelace,18151210");
    assert!(matches!(result, Err(StaffError::Decode(_))));
}

#[test]
fn test_text_parse_bytes_rejects_invalid_utf8() {
    let result = text::parse_bytes(&[0xff, 0xfe, b',', b' ']);
    assert!(matches!(result, Err(StaffError::Decode(_))));
}

// =============================================================================
// Format Dispatch Tests
// =============================================================================

#[test]
fn test_format_extensions() {
    assert_eq!(Format::Text.extension(), "txt");
    assert_eq!(Format::Binary.extension(), "ser");
}

#[test]
fn test_format_text_encode_ends_with_newline() {
    let bytes = Format::Text.encode(&ada());
    assert_eq!(bytes.as_ref(), b"7, Ada, Lovelace, 18151210\n");
    assert_eq!(Format::Text.decode(&bytes).unwrap(), ada());
}

#[test]
fn test_format_binary_dispatch() {
    let bytes = Format::Binary.encode(&ada());
    assert_eq!(bytes, binary::encode(&ada()));
    assert_eq!(Format::Binary.decode(&bytes).unwrap(), ada());
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_validate_accepts_plain_record() {
    assert!(ada().validate().is_ok());
}

#[test]
fn test_validate_rejects_separator_in_name() {
    let employee = Employee::new(1, "Ada, Countess", "Lovelace", 1);
    assert!(matches!(employee.validate(), Err(StaffError::InvalidRecord(_))));
}

#[test]
fn test_validate_rejects_empty_and_padded_names() {
    let empty = Employee::new(1, "", "Lovelace", 1);
    let padded = Employee::new(1, "Ada", " Lovelace", 1);
    let newline = Employee::new(1, "Ada", "Love\nlace", 1);

    assert!(matches!(empty.validate(), Err(StaffError::InvalidRecord(_))));
    assert!(matches!(padded.validate(), Err(StaffError::InvalidRecord(_))));
    assert!(matches!(newline.validate(), Err(StaffError::InvalidRecord(_))));
}
