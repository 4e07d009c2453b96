//! Reference T.6 (Group 4) decoder
//!
//! The encoder (`foliant_ccitt::encode_g4`) ends every line with a raw
//! residual run and no mode prefix whenever the coding line has no further
//! transition before the right edge (including the all-white fast path).
//! Because a complete mode codeword can be a strict bit prefix of a residual
//! run code (`V0` is `1`, and the 16-run white code is `101010`), a decoder
//! that commits to the first alphabet it matches can misdecode. The fix used
//! here is the same one real combined-alphabet Huffman decoders use: don't
//! commit to a match while some longer codeword in the same decision set
//! still has the bits read so far as its prefix. Since the ITU-T tables are
//! prefix-free as a whole (not merely within one sub-table), this always
//! converges on the intended codeword.

use crate::bitreader::BitReader;
use crate::error::{TestError, TestResult};
use crate::huffman::{RunTable, RunToken};
use foliant_ccitt::changing::{find_b1, find_b2};
use foliant_core::packed::{get_bit, row_bytes, set_bit};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug)]
enum Entry {
    Pass,
    Horizontal,
    Vertical(i32),
    Run(RunToken),
}

/// The combined mode-or-run decision set active for one colour.
struct DecisionTable {
    map: HashMap<(u16, u8), Entry>,
    max_len: u8,
    runs: RunTable,
}

impl DecisionTable {
    fn build(color: u8) -> Self {
        let mut map = HashMap::new();
        let modes: [((u16, u8), Entry); 9] = [
            ((0b1, 1), Entry::Vertical(0)),
            ((0b011, 3), Entry::Vertical(1)),
            ((0b010, 3), Entry::Vertical(-1)),
            ((0b001, 3), Entry::Horizontal),
            ((0b0001, 4), Entry::Pass),
            ((0b000011, 6), Entry::Vertical(2)),
            ((0b000010, 6), Entry::Vertical(-2)),
            ((0b0000011, 7), Entry::Vertical(3)),
            ((0b0000010, 7), Entry::Vertical(-3)),
        ];
        let mut max_len = 0u8;
        for (key, entry) in modes {
            map.insert(key, entry);
            max_len = max_len.max(key.1);
        }
        let runs = RunTable::build(color);
        for run in 0..=63u16 {
            let (code, len) = foliant_ccitt::tables::terminating_code(color, run);
            map.insert((code, len), Entry::Run(RunToken::Terminating(run)));
            max_len = max_len.max(len);
        }
        let mut run = 64u16;
        while run <= 2560 {
            let (code, len) = foliant_ccitt::tables::makeup_code(color, run);
            map.insert((code, len), Entry::Run(RunToken::Makeup(run)));
            max_len = max_len.max(len);
            run += 64;
        }
        Self { map, max_len, runs }
    }

    /// True if some entry longer than `len` has `code` as its leading bits.
    fn has_longer_prefix(&self, code: u16, len: u8) -> bool {
        self.map.keys().any(|&(c, l)| l > len && (c >> (l - len)) == code)
    }

    /// Read the next codeword, resolving mode/run ambiguity by reading
    /// further bits until exactly one candidate remains reachable.
    fn decode_one(&self, reader: &mut BitReader, row: usize) -> TestResult<Entry> {
        let mut code = 0u16;
        let mut len = 0u8;
        loop {
            let bit = reader
                .read_bit()
                .ok_or(TestError::UnterminatedCode { row, bits_read: len as u32 })?;
            code = (code << 1) | bit as u16;
            len += 1;
            if let Some(&entry) = self.map.get(&(code, len)) {
                if !self.has_longer_prefix(code, len) {
                    return Ok(entry);
                }
            }
            if len > self.max_len {
                return Err(TestError::UnknownMode { row });
            }
        }
    }
}

fn fill(pixels: &mut [u8], from: i32, to: i32, color: u8) {
    let from = from.max(0);
    for x in from..to {
        pixels[x as usize] = color;
    }
}

/// Decode one coded line against a known reference line, returning packed
/// pixel bytes for the coding line.
fn decode_row(
    reader: &mut BitReader,
    reference: &[u8],
    row_bytes: usize,
    width: u32,
    row_idx: usize,
) -> TestResult<Vec<u8>> {
    let w = width as i32;
    let mut pixels = vec![0u8; width as usize];
    let mut a0: i32 = -1;
    let mut color: u8 = 0;

    loop {
        if a0 >= w {
            break;
        }
        let table = DecisionTable::build(color);
        match table.decode_one(reader, row_idx)? {
            Entry::Pass => {
                let b1 = find_b1(reference, row_bytes, width, a0, color);
                let b2 = find_b2(reference, row_bytes, width, b1);
                fill(&mut pixels, a0 + 1, b2, color);
                a0 = b2;
            }
            Entry::Vertical(d) => {
                let b1 = find_b1(reference, row_bytes, width, a0, color);
                let a1 = b1 + d;
                fill(&mut pixels, a0 + 1, a1, color);
                a0 = a1;
                color = 1 - color;
            }
            Entry::Horizontal => {
                let run1 = table.runs.read_run(reader, row_idx)?;
                let other = RunTable::build(1 - color);
                let run2 = other.read_run(reader, row_idx)?;
                let a1 = a0 + 1 + run1 as i32;
                let a2 = a1 + run2 as i32;
                fill(&mut pixels, a0 + 1, a1, color);
                fill(&mut pixels, a1, a2, 1 - color);
                a0 = a2;
                if a0 < w {
                    color = 1 - color;
                }
            }
            Entry::Run(RunToken::Terminating(run)) => {
                fill(&mut pixels, a0 + 1, a0 + 1 + run as i32, color);
                a0 += run as i32;
                break;
            }
            Entry::Run(RunToken::Makeup(run)) => {
                let total = table.runs.continue_run(run, reader, row_idx)?;
                fill(&mut pixels, a0 + 1, a0 + 1 + total as i32, color);
                a0 += total as i32;
                break;
            }
        }
    }

    if a0 < w - 1 {
        return Err(TestError::RowWidthMismatch {
            row: row_idx,
            width,
            got: (a0 + 1) as u32,
        });
    }

    let rb = row_bytes(width);
    let mut packed = vec![0u8; rb];
    for (x, &p) in pixels.iter().enumerate() {
        set_bit(&mut packed, rb, x as u32, 0, p);
    }
    Ok(packed)
}

/// Decode a full CCITT Group 4 page. `height` and `width` must be known
/// up front, the same way a PDF `CCITTFaxDecode` filter supplies `/Rows`
/// and `/Columns`; the trailing EOFB is not consulted.
pub fn decode_g4(data: &[u8], width: u32, height: u32) -> TestResult<Vec<u8>> {
    let rb = row_bytes(width);
    let mut reader = BitReader::new(data);
    let mut ref_line = vec![0u8; rb];
    let mut out = vec![0u8; rb * height as usize];

    for y in 0..height as usize {
        let cur = decode_row(&mut reader, &ref_line, rb, width, y)?;
        out[y * rb..(y + 1) * rb].copy_from_slice(&cur);
        ref_line = cur;
    }
    Ok(out)
}

/// Read a single pixel back out of a decoded packed buffer; a small
/// convenience for fixture assertions.
pub fn pixel_at(packed: &[u8], width: u32, x: u32, y: u32) -> u8 {
    get_bit(packed, row_bytes(width), x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foliant_ccitt::encode_g4;
    use foliant_core::packed::set_bit;

    fn make_packed(rows: &[&[u8]]) -> (Vec<u8>, u32, u32) {
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
    fn round_trips_all_white_rows() {
        let (buf, w, h) = make_packed(&[&[0; 16], &[0; 16]]);
        let encoded = encode_g4(&buf, w, h).unwrap();
        let decoded = decode_g4(&encoded, w, h).unwrap();
        assert_eq!(decoded, buf);
    }

    #[test]
    fn round_trips_all_black_rows() {
        let (buf, w, h) = make_packed(&[&[1; 16], &[1; 16]]);
        let encoded = encode_g4(&buf, w, h).unwrap();
        let decoded = decode_g4(&encoded, w, h).unwrap();
        assert_eq!(decoded, buf);
    }

    #[test]
    fn round_trips_checkerboard_row() {
        let (buf, w, h) = make_packed(&[&[1, 0, 1, 0, 1, 0, 1, 0]]);
        let encoded = encode_g4(&buf, w, h).unwrap();
        let decoded = decode_g4(&encoded, w, h).unwrap();
        assert_eq!(decoded, buf);
    }

    #[test]
    fn round_trips_a_single_vertical_line() {
        let rows: Vec<[u8; 16]> = (0..16)
            .map(|_| {
                let mut r = [0u8; 16];
                r[8] = 1;
                r
            })
            .collect();
        let row_refs: Vec<&[u8]> = rows.iter().map(|r| r.as_slice()).collect();
        let (buf, w, h) = make_packed(&row_refs);
        let encoded = encode_g4(&buf, w, h).unwrap();
        let decoded = decode_g4(&encoded, w, h).unwrap();
        assert_eq!(decoded, buf);
    }

    #[test]
    fn round_trips_mixed_rows_needing_horizontal_and_vertical_modes() {
        let (buf, w, h) = make_packed(&[
            &[0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
            &[0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0],
            &[1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        ]);
        let encoded = encode_g4(&buf, w, h).unwrap();
        let decoded = decode_g4(&encoded, w, h).unwrap();
        assert_eq!(decoded, buf);
    }
}
