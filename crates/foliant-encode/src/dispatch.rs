//! Dispatch from `PageImage` + `EncodeOptions` to `PageArtifact` (§4.5)

use crate::error::EncodeResult;
use crate::jpeg::{encode_gray_jpeg, encode_rgb_jpeg};
use foliant_ccitt::encode_g4;
use foliant_core::{CcittPolicy, EncodeOptions, Encoding, PageArtifact, PageImage, PageKind};
use foliant_morph::{pack_otsu_closed, pack_simple_threshold};

/// Encode one page, routing it to JPEG or CCITT per [`PageKind`] and policy
///
/// This is a pure function: it never touches the filesystem and has no
/// state beyond its arguments. Callers own retry/logging decisions for a
/// failed page (§4.5: "the page is dropped and logged by the orchestrator").
pub fn encode_page(image: &PageImage, options: &EncodeOptions) -> EncodeResult<PageArtifact> {
    let width = image.width();
    let height = image.height();

    match image.kind() {
        PageKind::Rgb8 => {
            let bytes = encode_rgb_jpeg(
                image.pixels(),
                width,
                height,
                options.rgb_jpeg_quality,
                options.rgb_target_dpi,
            )?;
            Ok(PageArtifact::new(Encoding::JpegRgb, width, height, bytes))
        }
        PageKind::Gray8 if !wants_ccitt(image, options) => {
            let bytes = encode_gray_jpeg(
                image.pixels(),
                width,
                height,
                options.gray_jpeg_quality,
                options.gray_target_dpi,
            )?;
            Ok(PageArtifact::new(Encoding::JpegGray, width, height, bytes))
        }
        PageKind::Gray8 => {
            let packed = pack_otsu_closed(image.pixels(), width, height)?;
            let bytes = encode_g4(&packed, width, height)?;
            Ok(PageArtifact::new(Encoding::CcittG4, width, height, bytes))
        }
        PageKind::BilevelPacked => {
            // Source was already CCITT; re-encode rather than pass the raw
            // decoded bytes through, since PDF's BlackIs1/Columns must match
            // this encoder's own convention, not the source's.
            let bytes = encode_g4(image.pixels(), width, height)?;
            Ok(PageArtifact::new(Encoding::CcittG4, width, height, bytes))
        }
        PageKind::BilevelFromGray => {
            let packed = pack_simple_threshold(image.pixels(), width, height)?;
            let bytes = encode_g4(&packed, width, height)?;
            Ok(PageArtifact::new(Encoding::CcittG4, width, height, bytes))
        }
    }
}

fn wants_ccitt(image: &PageImage, options: &EncodeOptions) -> bool {
    match options.ccitt_policy {
        CcittPolicy::Off => false,
        CcittPolicy::On => true,
        CcittPolicy::Auto => image.bilevel_suitable(),
    }
}
