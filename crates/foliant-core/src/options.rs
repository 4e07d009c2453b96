//! Encode-time and pipeline-time configuration, derived from CLI flags (§6)

use crate::error::{Error, Result};

/// Policy governing when a gray page is converted to bilevel CCITT (§4.5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CcittPolicy {
    /// Never convert; gray pages always become `JPEG_GRAY`
    Off,
    /// Always convert any `GRAY8`-classified page to CCITT
    On,
    /// Defer to the decoder's `bilevel_suitable` hint
    #[default]
    Auto,
}

/// Per-page encoding configuration (C5 `EncodeOptions`)
#[derive(Debug, Clone, Copy)]
pub struct EncodeOptions {
    /// Bilevel conversion policy
    pub ccitt_policy: CcittPolicy,
    /// JPEG quality for RGB pages, `1..=100`
    pub rgb_jpeg_quality: u8,
    /// JPEG quality for grayscale pages, `1..=100`
    pub gray_jpeg_quality: u8,
    /// Density written into RGB JPEG streams, dots per inch
    pub rgb_target_dpi: u32,
    /// Density written into grayscale JPEG streams, dots per inch
    pub gray_target_dpi: u32,
}

impl EncodeOptions {
    /// Construct options, validating quality and DPI ranges
    pub fn new(
        ccitt_policy: CcittPolicy,
        rgb_jpeg_quality: u8,
        gray_jpeg_quality: u8,
        rgb_target_dpi: u32,
        gray_target_dpi: u32,
    ) -> Result<Self> {
        for q in [rgb_jpeg_quality, gray_jpeg_quality] {
            if q == 0 || q > 100 {
                return Err(Error::InvalidQuality(q));
            }
        }
        for dpi in [rgb_target_dpi, gray_target_dpi] {
            if dpi == 0 {
                return Err(Error::InvalidDpi(dpi));
            }
        }
        Ok(Self {
            ccitt_policy,
            rgb_jpeg_quality,
            gray_jpeg_quality,
            rgb_target_dpi,
            gray_target_dpi,
        })
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ccitt_policy: CcittPolicy::default(),
            rgb_jpeg_quality: 100,
            gray_jpeg_quality: 100,
            rgb_target_dpi: 300,
            gray_target_dpi: 300,
        }
    }
}
