//! Baseline JPEG encoding via `jpeg-encoder` (§4.5's JPEG_RGB/JPEG_GRAY branches)

use crate::error::{EncodeError, EncodeResult};
use jpeg_encoder::{ColorType, Density, Encoder, SamplingFactor};

/// Encode interleaved RGB8 pixels as a baseline JPEG with 4:2:0 subsampling
pub fn encode_rgb_jpeg(rgb: &[u8], width: u32, height: u32, quality: u8, dpi: u32) -> EncodeResult<Vec<u8>> {
    encode(rgb, width, height, quality, dpi, ColorType::Rgb, SamplingFactor::F_2_2)
}

/// Encode 8-bit gray pixels as a baseline, single-component JPEG
pub fn encode_gray_jpeg(gray: &[u8], width: u32, height: u32, quality: u8, dpi: u32) -> EncodeResult<Vec<u8>> {
    encode(gray, width, height, quality, dpi, ColorType::Luma, SamplingFactor::F_1_1)
}

fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
    dpi: u32,
    color_type: ColorType,
    sampling_factor: SamplingFactor,
) -> EncodeResult<Vec<u8>> {
    let mut out = Vec::new();
    let mut encoder = Encoder::new(&mut out, quality);
    encoder.set_density(Density::Inch {
        x: dpi as u16,
        y: dpi as u16,
    });
    encoder.set_sampling_factor(sampling_factor);
    encoder
        .encode(pixels, width as u16, height as u16, color_type)
        .map_err(|e| EncodeError::Jpeg(e.to_string()))?;
    Ok(out)
}
