//! `PageImage` — the boundary type between the TIFF decoder and the page encoder
//!
//! A `PageImage` carries already-classified pixels: the decoder has already
//! decided colour space and, for bilevel sources, whether the pixels are
//! packed 1-bpp or still 8-bit gray awaiting packing. The page encoder never
//! inspects raw TIFF tags; it only branches on [`PageKind`].

use crate::error::{Error, Result};

/// Classification tag produced by the decoder for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// 8 bits per channel, 3 channels, row-major RGB
    Rgb8,
    /// 8 bits per channel, 1 channel, row-major gray
    Gray8,
    /// Already packed 1-bpp, MSB-first, row-padded; bit 1 is black
    ///
    /// Used when the source TIFF was itself CCITT-compressed (or otherwise
    /// already bilevel) and the decoder unpacked it straight to packed form.
    BilevelPacked,
    /// 8-bit gray that the decoder has flagged as effectively two-tone
    ///
    /// Distinct from [`PageKind::Gray8`] in that the page encoder will pack
    /// it with the simple 128-threshold rule (§4.2a) rather than routing it
    /// through JPEG or Otsu.
    BilevelFromGray,
}

/// Hint describing whether the page's source was already CCITT-compressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceCompression {
    /// Source TIFF strip was CCITT Group 3 or Group 4 encoded
    Ccitt,
}

/// One decoded, classified page, ready for encoding
#[derive(Debug, Clone)]
pub struct PageImage {
    kind: PageKind,
    width: u32,
    height: u32,
    dpi: u32,
    pixels: Vec<u8>,
    source_compression: Option<SourceCompression>,
    /// Decoder's opinion on whether this gray page should become CCITT under
    /// `EncodeOptions::ccitt_policy == Auto` (§4.5)
    bilevel_suitable: bool,
}

impl PageImage {
    /// Expected pixel-buffer length for a given kind/size, per §3's invariant
    pub fn expected_pixel_len(kind: PageKind, width: u32, height: u32) -> usize {
        let (w, h) = (width as usize, height as usize);
        match kind {
            PageKind::Rgb8 => w * h * 3,
            PageKind::Gray8 | PageKind::BilevelFromGray => w * h,
            PageKind::BilevelPacked => w.div_ceil(8) * h,
        }
    }

    /// Construct a `PageImage`, validating dimensions and buffer length
    pub fn new(
        kind: PageKind,
        width: u32,
        height: u32,
        dpi: u32,
        pixels: Vec<u8>,
        source_compression: Option<SourceCompression>,
        bilevel_suitable: bool,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = Self::expected_pixel_len(kind, width, height);
        if pixels.len() != expected {
            return Err(Error::PixelLengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            kind,
            width,
            height,
            dpi,
            pixels,
            source_compression,
            bilevel_suitable,
        })
    }

    /// Page classification
    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resolution in dots per inch, identical for X and Y
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Row-major pixel data, per [`PageKind`]'s layout
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether the decoder found this page already CCITT-compressed
    pub fn source_compression(&self) -> Option<SourceCompression> {
        self.source_compression
    }

    /// Decoder's suitability hint, consulted only under `CcittPolicy::Auto`
    pub fn bilevel_suitable(&self) -> bool {
        self.bilevel_suitable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        let err = PageImage::new(PageKind::Gray8, 0, 10, 300, vec![], None, false).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let err =
            PageImage::new(PageKind::Rgb8, 4, 4, 300, vec![0u8; 10], None, false).unwrap_err();
        assert!(matches!(err, Error::PixelLengthMismatch { .. }));
    }

    #[test]
    fn accepts_packed_bilevel_with_row_padding() {
        // width=10 -> 2 bytes/row (10 bits rounded up to 16), height=3
        let pixels = vec![0u8; 2 * 3];
        let img = PageImage::new(
            PageKind::BilevelPacked,
            10,
            3,
            200,
            pixels,
            None,
            false,
        )
        .unwrap();
        assert_eq!(img.width(), 10);
        assert_eq!(img.pixels().len(), 6);
    }
}
