//! Resolution-tag extraction, falling back to a caller-supplied default
//!
//! Mirrors the EXIF-based resolution lookup of the original converter: read
//! `XResolution`/`YResolution` and `ResolutionUnit`, converting pixels-per-
//! centimeter to DPI when the unit tag says centimeters.

use std::io::{Read, Seek};
use tiff::decoder::Decoder;
use tiff::tags::Tag;
use tiff::Value;

const CM_PER_INCH: f64 = 2.54;

/// Read the page's DPI, defaulting to `fallback` when the tag is absent,
/// malformed, or the two axes disagree enough to be suspicious
pub fn read_dpi<R: Read + Seek>(decoder: &mut Decoder<R>, fallback: u32) -> u32 {
    let x = read_rational_tag(decoder, Tag::XResolution);
    let is_cm = matches!(read_tag_u32(decoder, Tag::ResolutionUnit), Some(3));

    match x {
        Some(mut dpi) => {
            if is_cm {
                dpi *= CM_PER_INCH;
            }
            if dpi.is_finite() && dpi >= 1.0 {
                dpi.round() as u32
            } else {
                fallback
            }
        }
        None => fallback,
    }
}

fn read_rational_tag<R: Read + Seek>(decoder: &mut Decoder<R>, tag: Tag) -> Option<f64> {
    match decoder.get_tag(tag).ok()? {
        Value::Rational(n, d) if d != 0 => Some(n as f64 / d as f64),
        Value::Unsigned(n) => Some(n as f64),
        _ => None,
    }
}

fn read_tag_u32<R: Read + Seek>(decoder: &mut Decoder<R>, tag: Tag) -> Option<u32> {
    match decoder.get_tag(tag).ok()? {
        Value::Short(v) => Some(v as u32),
        Value::Unsigned(v) => Some(v),
        _ => None,
    }
}
