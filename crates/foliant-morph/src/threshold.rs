//! Binarization: simple fixed threshold and Otsu's method (§4.2)

use crate::error::{MorphError, MorphResult};
use foliant_core::packed::{row_bytes, set_bit};

/// Pack 8-bit gray to 1-bpp using the simple fixed threshold of §4.2a
///
/// A pixel is black (bit 1) iff `gray[i] < 128`.
pub fn pack_simple_threshold(gray: &[u8], width: u32, height: u32) -> MorphResult<Vec<u8>> {
    pack_with_threshold(gray, width, height, 128)
}

/// Pack 8-bit gray to 1-bpp using an explicit threshold
///
/// A pixel is black (bit 1) iff `gray[i] < threshold`.
pub fn pack_with_threshold(
    gray: &[u8],
    width: u32,
    height: u32,
    threshold: u8,
) -> MorphResult<Vec<u8>> {
    check_dims(gray, width, height)?;
    let rb = row_bytes(width);
    let mut packed = vec![0u8; rb * height as usize];
    for y in 0..height {
        for x in 0..width {
            let v = gray[(y * width + x) as usize];
            if v < threshold {
                set_bit(&mut packed, rb, x, y, 1);
            }
        }
    }
    Ok(packed)
}

/// Compute Otsu's threshold over an 8-bit gray buffer
///
/// Returns the intensity `t` that maximises inter-class variance between
/// `[0, t]` and `[t+1, 255]`. Pixels with `gray[i] <= t` are the darker
/// (candidate-black) class.
pub fn otsu_threshold(gray: &[u8]) -> u8 {
    let mut histogram = [0u32; 256];
    for &v in gray {
        histogram[v as usize] += 1;
    }

    let total = gray.len() as f64;
    if total == 0.0 {
        return 127;
    }

    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut weight_bg = 0f64;
    let mut sum_bg = 0f64;
    let mut best_variance = -1f64;
    let mut best_threshold = 0u8;

    for t in 0..256 {
        let count = histogram[t] as f64;
        weight_bg += count;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += t as f64 * count;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let diff = mean_bg - mean_fg;
        let between_variance = weight_bg * weight_fg * diff * diff;
        if between_variance > best_variance {
            best_variance = between_variance;
            best_threshold = t as u8;
        }
    }

    best_threshold
}

/// Pack 8-bit gray to 1-bpp using Otsu's threshold (no closing applied)
pub fn pack_otsu(gray: &[u8], width: u32, height: u32) -> MorphResult<Vec<u8>> {
    let t = otsu_threshold(gray);
    // Otsu's t separates classes at gray<=t vs gray>t; the black predicate
    // used by pack_with_threshold is gray < threshold, so bias by one.
    pack_with_threshold(gray, width, height, t.saturating_add(1))
}

fn check_dims(gray: &[u8], width: u32, height: u32) -> MorphResult<()> {
    if width == 0 || height == 0 {
        return Err(MorphError::InvalidDimensions { width, height });
    }
    let expected = width as usize * height as usize;
    if gray.len() != expected {
        return Err(MorphError::BufferLengthMismatch {
            expected,
            actual: gray.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_threshold_checkerboard() {
        // 8x1 row: 255,0,255,0,255,0,255,0 -> packed 0x55 (MIN-IS-WHITE, bit1=black)
        let gray = vec![255, 0, 255, 0, 255, 0, 255, 0];
        let packed = pack_simple_threshold(&gray, 8, 1).unwrap();
        assert_eq!(packed, vec![0x55]);
    }

    #[test]
    fn all_white_page_packs_to_zero() {
        let gray = vec![255u8; 16 * 16];
        let packed = pack_simple_threshold(&gray, 16, 16).unwrap();
        assert!(packed.iter().all(|&b| b == 0));
    }

    #[test]
    fn all_black_page_packs_to_all_ones() {
        let gray = vec![0u8; 16 * 16];
        let packed = pack_simple_threshold(&gray, 16, 16).unwrap();
        assert!(packed.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn otsu_separates_bimodal_distribution() {
        let mut gray = vec![10u8; 50];
        gray.extend(vec![240u8; 50]);
        let t = otsu_threshold(&gray);
        assert!(t > 10 && t < 240, "threshold {t} should split the two modes");
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let err = pack_simple_threshold(&[0u8; 4], 3, 3).unwrap_err();
        assert!(matches!(err, MorphError::BufferLengthMismatch { .. }));
    }
}
