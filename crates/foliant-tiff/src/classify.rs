//! Gray-page bilevel heuristics (§4.4)
//!
//! The decoder, not the page encoder, decides whether an 8-bit gray page is
//! continuous-tone, merely CCITT-suitable, or so close to two-tone that it
//! should skip Otsu entirely. This mirrors the original pipeline's `gray`
//! flag, which was set once at decode time rather than re-derived per page
//! encode.

/// Fraction of pixels within 16 levels of either extreme above which a page
/// is considered effectively two-tone
const BILEVEL_FROM_GRAY_THRESHOLD: f64 = 0.999;

/// Fraction above which a page is merely flagged `bilevel_suitable` for the
/// `Auto` CCITT policy, without skipping Otsu
const BILEVEL_SUITABLE_THRESHOLD: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrayClassification {
    /// Pack with the simple fixed threshold; skip Otsu
    EffectivelyBilevel,
    /// Continuous-tone gray, but a good CCITT candidate under `Auto`
    BilevelSuitable,
    /// Continuous-tone gray with no bilevel hint
    ContinuousTone,
}

pub fn classify_gray(pixels: &[u8]) -> GrayClassification {
    if pixels.is_empty() {
        return GrayClassification::ContinuousTone;
    }
    let extreme = pixels.iter().filter(|&&v| v < 16 || v > 239).count();
    let frac = extreme as f64 / pixels.len() as f64;
    if frac > BILEVEL_FROM_GRAY_THRESHOLD {
        GrayClassification::EffectivelyBilevel
    } else if frac > BILEVEL_SUITABLE_THRESHOLD {
        GrayClassification::BilevelSuitable
    } else {
        GrayClassification::ContinuousTone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_bilevel_histogram_is_effectively_bilevel() {
        let mut pixels = vec![255u8; 900];
        pixels.extend(vec![0u8; 100]);
        assert_eq!(
            classify_gray(&pixels),
            GrayClassification::EffectivelyBilevel
        );
    }

    #[test]
    fn mostly_extreme_but_noisy_is_bilevel_suitable() {
        let mut pixels = vec![255u8; 920];
        pixels.extend(vec![128u8; 80]);
        assert_eq!(classify_gray(&pixels), GrayClassification::BilevelSuitable);
    }

    #[test]
    fn smooth_gradient_is_continuous_tone() {
        let pixels: Vec<u8> = (0..=255).collect();
        assert_eq!(classify_gray(&pixels), GrayClassification::ContinuousTone);
    }
}
