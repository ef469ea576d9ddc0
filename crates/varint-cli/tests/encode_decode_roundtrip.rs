// crates/varint-cli/tests/encode_decode_roundtrip.rs

use varint_cli::cmd::decode::decode_bytes;
use varint_cli::cmd::encode::encode_values;
use varint_cli::cmd::inspect::inspect_lines;
use varint_cli::io::hex::{parse_hex, to_hex};
use varint_core::{DecoderConfig, SizeWidth, Width, WidthSpec};

fn strings(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

#[test]
fn unsigned_values_roundtrip_through_hex() {
    let values = strings(&["0", "1", "150", "300", "18446744073709551615"]);
    let bytes = encode_values(&values, Width::W64, false).expect("encode");

    let text = to_hex(&bytes);
    assert!(text.starts_with("00019601ac02"), "{text}");

    let back = decode_bytes(&parse_hex(&text).unwrap(), Width::W64, false, true).expect("decode");
    assert_eq!(back, values);
}

#[test]
fn signed_values_roundtrip() {
    let values = strings(&["-1", "1", "-64", "63", "-2147483648"]);
    let bytes = encode_values(&values, Width::W32, true).expect("encode");
    let back = decode_bytes(&bytes, Width::W32, true, true).expect("decode");
    assert_eq!(back, values);
}

#[test]
fn decode_without_all_stops_after_one() {
    let bytes = parse_hex("96 01 02").unwrap();
    assert_eq!(decode_bytes(&bytes, Width::W16, false, false).unwrap(), vec!["150"]);
    assert_eq!(decode_bytes(&bytes, Width::W16, false, true).unwrap(), vec!["150", "2"]);
}

#[test]
fn decode_errors_name_the_offset() {
    let bytes = parse_hex("01 ff 03").unwrap();
    let err = decode_bytes(&bytes, Width::W8, false, true).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("offset 1"), "{msg}");
    assert!(msg.contains("overflow"), "{msg}");

    let err = decode_bytes(&[], Width::W8, false, false).unwrap_err();
    assert!(format!("{err:#}").contains("unexpected end of input"));
}

#[test]
fn encode_rejects_values_outside_width() {
    assert!(encode_values(&strings(&["256"]), Width::W8, false).is_err());
    assert!(encode_values(&strings(&["-129"]), Width::W8, true).is_err());
    assert!(encode_values(&strings(&["-1"]), Width::W8, false).is_err());
    assert!(encode_values(&strings(&["abc"]), Width::W8, false).is_err());
}

#[test]
fn hex_input_forms() {
    assert_eq!(parse_hex("9601").unwrap(), vec![0x96, 0x01]);
    assert_eq!(parse_hex("0x96 0x01").unwrap(), vec![0x96, 0x01]);
    assert_eq!(parse_hex("96:01").unwrap(), vec![0x96, 0x01]);
    assert!(parse_hex("9").is_err());
    assert!(parse_hex("zz").is_err());
}

#[test]
fn inspect_lists_every_varint() {
    let lines = inspect_lines(&[0x96, 0x01, 0x01], Width::W32).unwrap();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("96 01"));
    assert!(lines[1].contains("150"));
    assert!(lines[1].trim_end().ends_with("75"));
    assert!(lines[2].trim_end().ends_with("-1"));
}

#[test]
fn size_token_follows_config() {
    let cfg32 = DecoderConfig::new(SizeWidth::Bits32).resolve().unwrap();
    let cfg64 = DecoderConfig::new(SizeWidth::Bits64).resolve().unwrap();

    let big = strings(&["4294967296"]);
    assert!(encode_values(&big, cfg32.width(WidthSpec::Size), false).is_err());
    let bytes = encode_values(&big, cfg64.width(WidthSpec::Size), false).unwrap();

    assert!(decode_bytes(&bytes, cfg32.width(WidthSpec::Size), false, false).is_err());
    assert_eq!(
        decode_bytes(&bytes, cfg64.width(WidthSpec::Size), false, false).unwrap(),
        vec!["4294967296"]
    );
}
