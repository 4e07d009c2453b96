//! Packed-pixel builders for the scenarios named in spec.md's testable
//! properties: an all-white page, an all-black page, an 8x1 checkerboard, a
//! single vertical line, and the page sizes used by the three-page folder
//! scenario.

use foliant_core::packed::{row_bytes, set_bit};

/// A `width` x `height` page, every pixel white (bit 0)
pub fn all_white(width: u32, height: u32) -> Vec<u8> {
    vec![0u8; row_bytes(width) * height as usize]
}

/// A `width` x `height` page, every pixel black (bit 1)
pub fn all_black(width: u32, height: u32) -> Vec<u8> {
    vec![0xFFu8; row_bytes(width) * height as usize]
}

/// An 8x1 checkerboard: `[255, 0, 255, 0, 255, 0, 255, 0]` packed to `0x55`
pub fn checkerboard_8x1() -> Vec<u8> {
    vec![0b0101_0101]
}

/// A `width` x `height` page with a single black vertical line at column
/// `width / 2`
pub fn single_vertical_line(width: u32, height: u32) -> Vec<u8> {
    let rb = row_bytes(width);
    let mut buf = vec![0u8; rb * height as usize];
    let x = width / 2;
    for y in 0..height {
        set_bit(&mut buf, rb, x, y, 1);
    }
    buf
}

/// Page dimensions for the three-page folder scenario
pub fn three_page_folder_dims() -> [(u32, u32); 3] {
    [(100, 80), (200, 160), (300, 240)]
}
