//! Round-trip the encoder against the reference decoder in `foliant-test`
//! for the page shapes named in spec.md's testable properties.

use foliant_ccitt::encode_g4;
use foliant_core::packed::row_bytes;
use foliant_test::{all_black, all_white, checkerboard_8x1, decode_g4, single_vertical_line};

#[test]
fn all_white_page_round_trips() {
    let buf = all_white(16, 16);
    let encoded = encode_g4(&buf, 16, 16).unwrap();
    let decoded = decode_g4(&encoded, 16, 16).unwrap();
    assert_eq!(decoded, buf);
}

#[test]
fn all_black_page_round_trips() {
    let buf = all_black(16, 16);
    let encoded = encode_g4(&buf, 16, 16).unwrap();
    let decoded = decode_g4(&encoded, 16, 16).unwrap();
    assert_eq!(decoded, buf);
}

#[test]
fn checkerboard_row_round_trips() {
    let buf = checkerboard_8x1();
    let encoded = encode_g4(&buf, 8, 1).unwrap();
    let decoded = decode_g4(&encoded, 8, 1).unwrap();
    assert_eq!(decoded, buf);
}

#[test]
fn single_vertical_line_round_trips() {
    let buf = single_vertical_line(16, 16);
    let encoded = encode_g4(&buf, 16, 16).unwrap();
    let decoded = decode_g4(&encoded, 16, 16).unwrap();
    assert_eq!(decoded, buf);
}

#[test]
fn encoded_stream_is_at_least_one_row_and_an_eofb_long() {
    let buf = all_white(16, 16);
    let encoded = encode_g4(&buf, 16, 16).unwrap();
    // One 5-bit white-16 run per row plus a 13-bit EOFB, rounded up to bytes.
    assert!(encoded.len() >= row_bytes(16));
}
