//! Bilevel packing, Otsu thresholding, and morphological closing (C2)
//!
//! Two entry points correspond to §4.2's two packing modes:
//! [`pack_simple_threshold`] for already-near-binary sources, and
//! [`pack_otsu_closed`] for continuous-tone gray converted under CCITT
//! policy.

mod closing;
mod error;
mod threshold;

pub use closing::close_3x3;
pub use error::{MorphError, MorphResult};
pub use threshold::{otsu_threshold, pack_otsu, pack_simple_threshold, pack_with_threshold};

/// Full §4.2b pipeline: Otsu threshold, binarise, then 3×3 closing
///
/// This is the packer the page encoder calls for continuous-tone gray pages
/// routed to CCITT (§4.5). The closing pass fills pinhole artifacts and
/// bridges near-touching strokes that would otherwise fragment into many
/// short runs under G4 and hurt both compression and readability.
pub fn pack_otsu_closed(gray: &[u8], width: u32, height: u32) -> MorphResult<Vec<u8>> {
    let packed = pack_otsu(gray, width, height)?;
    Ok(close_3x3(&packed, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otsu_closed_pipeline_runs_end_to_end() {
        let mut gray = vec![255u8; 16 * 16];
        // A single dark pixel that would otherwise become an isolated speck.
        gray[8 * 16 + 8] = 0;
        let packed = pack_otsu_closed(&gray, 16, 16).unwrap();
        assert_eq!(packed.len(), foliant_core::packed::row_bytes(16) * 16);
    }
}
