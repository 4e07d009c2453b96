//! `PageArtifact` — the boundary type between the page encoder and the PDF writer

/// Compressed representation chosen for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Baseline JPEG, 3-component, 4:2:0 chroma subsampling
    JpegRgb,
    /// Baseline JPEG, 1-component
    JpegGray,
    /// Raw CCITT T.6 (Group 4) payload, byte-aligned, EOFB-terminated
    CcittG4,
}

/// A self-contained, immutable compressed page, ready for the PDF writer
///
/// The PDF writer only appends these bytes into an image XObject stream; it
/// never reinterprets or recompresses them.
#[derive(Debug, Clone)]
pub struct PageArtifact {
    encoding: Encoding,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PageArtifact {
    /// Construct a new artifact
    ///
    /// Callers (the page encoder) are responsible for the format invariants
    /// in §3: JPEG bytes start with SOI/end with EOI, CCITT bytes are
    /// byte-aligned and EOFB-terminated.
    pub fn new(encoding: Encoding, width: u32, height: u32, bytes: Vec<u8>) -> Self {
        Self {
            encoding,
            width,
            height,
            bytes,
        }
    }

    /// Which compressed representation this artifact holds
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The compressed bytes, in the format named by [`Encoding`]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
