// crates/varint-core/tests/decode_vectors.rs

use test_case::test_case;
use varint_core::decode::{read_signed_varint_len, read_unsigned_varint_len};
use varint_core::{read_signed_varint, read_unsigned_varint, SliceSource, VarintError, Width};

const U64_MAX_BYTES: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
const U64_BIT64_BYTES: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x02];

fn unsigned(bytes: &[u8], width: Width) -> Result<u128, VarintError> {
    let mut src = bytes;
    read_unsigned_varint(&mut src, width)
}

#[test_case(&[0x00], Width::W8 => 0; "zero w8")]
#[test_case(&[0x00], Width::W128 => 0; "zero w128")]
#[test_case(&[0x01], Width::W32 => 1; "one")]
#[test_case(&[0x7F], Width::W8 => 127; "largest single byte")]
#[test_case(&[0x96, 0x01], Width::W16 => 150; "one fifty")]
#[test_case(&[0xFF, 0x01], Width::W8 => 255; "u8 max")]
#[test_case(&[0xFF, 0xFF, 0x03], Width::W16 => 65535; "u16 max")]
#[test_case(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F], Width::W32 => u32::MAX as u128; "u32 max")]
#[test_case(U64_MAX_BYTES, Width::W64 => u64::MAX as u128; "u64 max")]
#[test_case(&[0x80, 0x00], Width::W8 => 0; "padded zero within cap")]
fn decodes_unsigned(bytes: &[u8], width: Width) -> u128 {
    unsigned(bytes, width).unwrap()
}

#[test]
fn decodes_u128_max() {
    let mut bytes = vec![0xFF; 18];
    bytes.push(0x03);
    assert_eq!(unsigned(&bytes, Width::W128).unwrap(), u128::MAX);

    *bytes.last_mut().unwrap() = 0x04;
    assert!(matches!(
        unsigned(&bytes, Width::W128),
        Err(VarintError::VarintOverflow(Width::W128))
    ));
}

#[test_case(&[0x00] => 0; "zero")]
#[test_case(&[0x01] => -1; "minus one")]
#[test_case(&[0x02] => 1; "one")]
#[test_case(&[0x03] => -2; "minus two")]
#[test_case(&[0xFE, 0x01] => 127; "i8 max")]
#[test_case(&[0xFF, 0x01] => -128; "i8 min")]
fn decodes_signed_w8(bytes: &[u8]) -> i128 {
    let mut src = bytes;
    read_signed_varint(&mut src, Width::W8).unwrap()
}

#[test]
fn signed_extremes_at_every_width() {
    for w in Width::ALL {
        let (min, max) = w.signed_range();

        let mut out = Vec::new();
        varint_core::encode::write_signed_varint(min, w, &mut out).unwrap();
        varint_core::encode::write_signed_varint(max, w, &mut out).unwrap();

        let mut src = out.as_slice();
        assert_eq!(read_signed_varint(&mut src, w).unwrap(), min, "{w}");
        assert_eq!(read_signed_varint(&mut src, w).unwrap(), max, "{w}");
        assert!(src.is_empty());
    }
}

#[test_case(Width::W8; "w8")]
#[test_case(Width::W16; "w16")]
fn rejects_wide_payload(width: Width) {
    let err = unsigned(&[0xFF, 0xFF, 0xFF, 0xFF, 0x10], width).unwrap_err();
    assert!(matches!(err, VarintError::VarintOverflow(w) if w == width));
}

#[test_case(&[0xFF, 0x03], Width::W8; "u8 plus high bit")]
#[test_case(&[0x80, 0x80, 0x04], Width::W16; "bit 16 set")]
#[test_case(&[0xFF, 0xFF, 0xFF, 0xFF, 0x10], Width::W32; "bit 32 set")]
#[test_case(U64_BIT64_BYTES, Width::W64; "bit 64 set")]
fn rejects_bits_above_width(bytes: &[u8], width: Width) {
    assert!(matches!(
        unsigned(bytes, width),
        Err(VarintError::VarintOverflow(w)) if w == width
    ));
}

#[test]
fn overflow_message_names_width() {
    let err = unsigned(&[0xFF, 0x03], Width::W8).unwrap_err();
    assert!(err.to_string().contains("8-bit"), "{err}");
}

#[test_case(&[]; "empty")]
#[test_case(&[0x80]; "lone continuation")]
#[test_case(&[0xFF, 0xFF, 0xFF]; "continuations only")]
fn truncated_input_is_eof(bytes: &[u8]) {
    assert!(matches!(
        unsigned(bytes, Width::W64),
        Err(VarintError::UnexpectedEndOfInput)
    ));
    assert!(matches!(
        {
            let mut src = bytes;
            read_signed_varint(&mut src, Width::W64)
        },
        Err(VarintError::UnexpectedEndOfInput)
    ));
}

#[test]
fn byte_cap_rejects_zero_padding() {
    for w in Width::ALL {
        let cap = w.max_encoded_len();
        let mut bytes = vec![0x80; cap + 1];
        bytes.push(0x00);

        let mut src = SliceSource::new(&bytes);
        let err = read_unsigned_varint(&mut src, w).unwrap_err();
        assert!(matches!(err, VarintError::VarintOverflow(got) if got == w), "{w}");
        // Nothing past the cap is touched.
        assert_eq!(src.position(), cap, "{w}");
    }
}

#[test]
fn max_encoded_len_is_ceil_bits_over_seven() {
    let lens: Vec<usize> = Width::ALL.iter().map(|w| w.max_encoded_len()).collect();
    assert_eq!(lens, vec![2, 3, 5, 10, 19]);
}

#[test]
fn consumes_exactly_one_varint() {
    let bytes = [0x96, 0x01, 0x7F, 0x05];
    let mut src = SliceSource::new(&bytes);

    assert_eq!(read_unsigned_varint_len(&mut src, Width::W32).unwrap(), (150, 2));
    assert_eq!(src.position(), 2);
    assert_eq!(read_signed_varint_len(&mut src, Width::W32).unwrap(), (-64, 1));
    assert_eq!(src.remaining(), &[0x05]);
}

#[test]
fn position_after_failure_reflects_consumed_bytes() {
    let bytes = [0xFF, 0x03, 0x00];
    let mut src = SliceSource::new(&bytes);
    assert!(read_unsigned_varint(&mut src, Width::W8).is_err());
    assert_eq!(src.position(), 2);
}
