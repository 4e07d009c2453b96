//! 3×3 morphological closing on packed bilevel rows (§4.2b step 3)
//!
//! Closing is dilation followed by erosion, both over a 4-connected
//! neighborhood (the pixel itself plus its up/down/left/right neighbors).
//! Border pixels (row 0, last row, column 0, last column) are left exactly
//! as they were binarised — neither dilation nor erosion touches them. This
//! avoids inventing foreground/background at the frame edge.

use foliant_core::packed::{get_bit, row_bytes, set_bit};

/// Apply 3×3 morphological closing to a packed bilevel image
///
/// `packed` must be `row_bytes(width) * height` bytes, MSB-first, bit 1 is
/// black (foreground). Returns a newly allocated closed buffer.
pub fn close_3x3(packed: &[u8], width: u32, height: u32) -> Vec<u8> {
    let dilated = dilate_4connected(packed, width, height);
    erode_4connected(&dilated, width, height)
}

fn dilate_4connected(packed: &[u8], width: u32, height: u32) -> Vec<u8> {
    transform_interior(packed, width, height, |get, x, y| {
        get(x, y) | get(x - 1, y) | get(x + 1, y) | get(x, y - 1) | get(x, y + 1)
    })
}

fn erode_4connected(packed: &[u8], width: u32, height: u32) -> Vec<u8> {
    transform_interior(packed, width, height, |get, x, y| {
        get(x, y) & get(x - 1, y) & get(x + 1, y) & get(x, y - 1) & get(x, y + 1)
    })
}

/// Apply `f` to every interior pixel (border pixels copied unchanged)
fn transform_interior(
    packed: &[u8],
    width: u32,
    height: u32,
    f: impl Fn(&dyn Fn(u32, u32) -> u8, u32, u32) -> u8,
) -> Vec<u8> {
    let rb = row_bytes(width);
    let mut out = packed.to_vec();
    if width < 3 || height < 3 {
        return out;
    }
    let get = |x: u32, y: u32| get_bit(packed, rb, x, y);
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let v = f(&get, x, y);
            set_bit(&mut out, rb, x, y, v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use foliant_core::packed::get_bit;

    fn make(rows: &[&[u8]]) -> (Vec<u8>, u32, u32) {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let rb = row_bytes(width);
        let mut buf = vec![0u8; rb * height as usize];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                set_bit(&mut buf, rb, x as u32, y as u32, v);
            }
        }
        (buf, width, height)
    }

    #[test]
    fn fills_single_pixel_pinhole() {
        let (buf, w, h) = make(&[
            &[1, 1, 1, 1, 1],
            &[1, 1, 1, 1, 1],
            &[1, 1, 0, 1, 1],
            &[1, 1, 1, 1, 1],
            &[1, 1, 1, 1, 1],
        ]);
        let closed = close_3x3(&buf, w, h);
        let rb = row_bytes(w);
        assert_eq!(get_bit(&closed, rb, 2, 2), 1, "pinhole should be filled");
    }

    #[test]
    fn border_pixels_are_never_touched() {
        let (buf, w, h) = make(&[
            &[0, 0, 0, 0],
            &[0, 1, 1, 0],
            &[0, 1, 1, 0],
            &[0, 0, 0, 0],
        ]);
        let closed = close_3x3(&buf, w, h);
        let rb = row_bytes(w);
        for x in 0..w {
            assert_eq!(get_bit(&closed, rb, x, 0), get_bit(&buf, rb, x, 0));
            assert_eq!(get_bit(&closed, rb, x, h - 1), get_bit(&buf, rb, x, h - 1));
        }
        for y in 0..h {
            assert_eq!(get_bit(&closed, rb, 0, y), get_bit(&buf, rb, 0, y));
            assert_eq!(get_bit(&closed, rb, w - 1, y), get_bit(&buf, rb, w - 1, y));
        }
    }

    #[test]
    fn tiny_image_is_unchanged() {
        let (buf, w, h) = make(&[&[1, 0], &[0, 1]]);
        let closed = close_3x3(&buf, w, h);
        assert_eq!(closed, buf);
    }
}
