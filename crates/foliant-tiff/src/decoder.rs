//! Top-level multi-page TIFF decode entry point (C9)

use crate::classify::{classify_gray, GrayClassification};
use crate::dpi::read_dpi;
use crate::error::{TiffError, TiffResult};
use foliant_core::packed::{row_bytes, set_bit};
use foliant_core::{PageImage, PageKind, SourceCompression};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::{CompressionMethod, Tag};
use tiff::{ColorType, Value};

const DEFAULT_DPI: u32 = 300;

/// Decode every page of a (possibly multi-page) TIFF file into `PageImage`s
///
/// Pages are returned in on-disk order. A TIFF whose compression tag names
/// Group 3 or Group 4 is tagged [`SourceCompression::Ccitt`] on its page.
pub fn decode_pages(path: &Path) -> TiffResult<Vec<PageImage>> {
    let file = File::open(path).map_err(|source| TiffError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut decoder = Decoder::new(BufReader::new(file)).map_err(|source| TiffError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let mut pages = Vec::new();
    loop {
        pages.push(decode_one_page(&mut decoder, path)?);
        if decoder.more_images() {
            decoder
                .next_image()
                .map_err(|source| TiffError::Decode {
                    path: path.to_path_buf(),
                    source,
                })?;
        } else {
            break;
        }
    }
    Ok(pages)
}

fn decode_one_page<R: std::io::Read + std::io::Seek>(
    decoder: &mut Decoder<R>,
    path: &Path,
) -> TiffResult<PageImage> {
    let decode_err = |source| TiffError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let (width, height) = decoder.dimensions().map_err(decode_err)?;
    let color_type = decoder.colortype().map_err(decode_err)?;
    let compression = tag_u32(decoder, Tag::Compression);
    let photometric_white_is_zero = tag_u32(decoder, Tag::PhotometricInterpretation) == Some(0);
    let dpi = read_dpi(decoder, DEFAULT_DPI);
    let source_compression = is_ccitt(compression).then_some(SourceCompression::Ccitt);

    let result = decoder.read_image().map_err(decode_err)?;

    let image = match (color_type, result) {
        (ColorType::RGB(8), DecodingResult::U8(pixels)) => PageImage::new(
            PageKind::Rgb8,
            width,
            height,
            dpi,
            pixels,
            source_compression,
            false,
        )?,
        (ColorType::Gray(8), DecodingResult::U8(pixels)) => {
            match classify_gray(&pixels) {
                GrayClassification::EffectivelyBilevel => PageImage::new(
                    PageKind::BilevelFromGray,
                    width,
                    height,
                    dpi,
                    pixels,
                    source_compression,
                    true,
                )?,
                GrayClassification::BilevelSuitable => PageImage::new(
                    PageKind::Gray8,
                    width,
                    height,
                    dpi,
                    pixels,
                    source_compression,
                    true,
                )?,
                GrayClassification::ContinuousTone => PageImage::new(
                    PageKind::Gray8,
                    width,
                    height,
                    dpi,
                    pixels,
                    source_compression,
                    false,
                )?,
            }
        }
        (ColorType::Gray(1), DecodingResult::U8(samples)) => {
            let packed = pack_bilevel_samples(&samples, width, height, photometric_white_is_zero);
            PageImage::new(
                PageKind::BilevelPacked,
                width,
                height,
                dpi,
                packed,
                source_compression,
                true,
            )?
        }
        (ct, _) => return Err(TiffError::UnsupportedColorType(ct)),
    };
    Ok(image)
}

/// Re-pack one-sample-per-byte bilevel samples into our MSB-first, bit-1-is-black convention
fn pack_bilevel_samples(samples: &[u8], width: u32, height: u32, white_is_zero: bool) -> Vec<u8> {
    let rb = row_bytes(width);
    let mut out = vec![0u8; rb * height as usize];
    for y in 0..height {
        for x in 0..width {
            let sample = samples[(y * width + x) as usize];
            let is_black = if white_is_zero {
                sample != 0
            } else {
                sample == 0
            };
            if is_black {
                set_bit(&mut out, rb, x, y, 1);
            }
        }
    }
    out
}

fn is_ccitt(compression: Option<u32>) -> bool {
    matches!(
        compression,
        Some(c) if c == CompressionMethod::Fax3 as u32 || c == CompressionMethod::Fax4 as u32
    )
}

fn tag_u32<R: std::io::Read + std::io::Seek>(decoder: &mut Decoder<R>, tag: Tag) -> Option<u32> {
    match decoder.get_tag(tag).ok()? {
        Value::Short(v) => Some(v as u32),
        Value::Unsigned(v) => Some(v),
        _ => None,
    }
}

/// Allow callers that only have a borrowed path-like value
pub fn decode_pages_owned(path: impl Into<PathBuf>) -> TiffResult<Vec<PageImage>> {
    decode_pages(&path.into())
}
