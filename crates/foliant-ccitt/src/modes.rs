//! Mode codeword emission for pass, vertical and horizontal modes (§4.3)

use foliant_bitio::BitWriter;

/// Pass mode codeword: `0001`
pub fn write_pass(bw: &mut BitWriter) {
    bw.write_bits(0b0001, 4);
}

/// Horizontal mode codeword: `001`
pub fn write_horizontal_prefix(bw: &mut BitWriter) {
    bw.write_bits(0b001, 3);
}

/// Vertical mode codeword for `d = a1 - b1` in `-3..=3`
///
/// Panics if `d` is outside that range; callers must only reach vertical
/// mode when `|d| <= 3`.
pub fn write_vertical(bw: &mut BitWriter, d: i32) {
    let (code, len) = match d {
        0 => (0b1, 1),
        1 => (0b011, 3),
        -1 => (0b010, 3),
        2 => (0b000011, 6),
        -2 => (0b000010, 6),
        3 => (0b0000011, 7),
        -3 => (0b0000010, 7),
        other => panic!("vertical mode delta {other} out of range"),
    };
    bw.write_bits(code, len);
}
