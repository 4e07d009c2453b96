//! Streaming PDF 1.7 writer (§4.6)
//!
//! Objects are written strictly forward-only, as they become available.
//! The one exception is the Pages node: a placeholder is written up front
//! so its object id can be referenced by every Page object, then a second
//! instance of the *same* object id is written later, once every page is
//! known, with its offset-table entry updated to point at the new bytes.
//! The earlier placeholder bytes are left in the file, unreferenced.

use crate::counting::CountingWriter;
use crate::error::PdfResult;
use foliant_core::{Encoding, PageArtifact};
use std::io::Write;

struct PageEntry {
    image_id: u32,
    width: u32,
    height: u32,
}

/// Forward-only PDF writer bound to a single sink
///
/// Call [`Self::write_image`] once per page, in page order, then
/// [`Self::finish`] exactly once to emit the Pages tree, Catalog, xref and
/// trailer.
pub struct PdfWriter<W: Write> {
    sink: CountingWriter<W>,
    object_offsets: Vec<u64>,
    next_obj: u32,
    pages_obj_id: u32,
    pages_obj_index: usize,
    pages: Vec<PageEntry>,
}

impl<W: Write> PdfWriter<W> {
    /// Create a writer, emitting the PDF header and a placeholder Pages object
    pub fn new(sink: W) -> PdfResult<Self> {
        let mut writer = Self {
            sink: CountingWriter::new(sink),
            object_offsets: Vec::new(),
            next_obj: 0,
            pages_obj_id: 0,
            pages_obj_index: 0,
            pages: Vec::new(),
        };
        writer.sink.write_all(b"%PDF-1.7\n%\xFF\xFF\xFF\xFF\n")?;
        let pages_obj_id = writer.new_object()?;
        writer.pages_obj_id = pages_obj_id;
        writer.pages_obj_index = (pages_obj_id - 1) as usize;
        writer
            .sink
            .write_all(b"<<\n/Type /Pages\n/Count 0\n/Kids []\n>>\nendobj\n")?;
        Ok(writer)
    }

    /// Write one page's compressed image as an XObject
    ///
    /// Must be called in page order; the image's id is recorded for the
    /// deferred Pages/Content/Page emission in [`Self::finish`].
    pub fn write_image(&mut self, artifact: &PageArtifact) -> PdfResult<()> {
        let width = artifact.width();
        let height = artifact.height();
        let image_id = self.new_object()?;

        match artifact.encoding() {
            Encoding::CcittG4 => {
                write!(
                    self.sink,
                    "<<\n/Type /XObject\n/Subtype /Image\n/Width {width}\n/Height {height}\n\
                     /ColorSpace /DeviceGray\n/BitsPerComponent 1\n/Filter /CCITTFaxDecode\n\
                     /DecodeParms <<\n/K -1\n/Columns {width}\n/Rows {height}\n/BlackIs1 false\n>>\n\
                     /Length {}\n>>\nstream\n",
                    artifact.bytes().len()
                )?;
            }
            Encoding::JpegRgb => {
                write!(
                    self.sink,
                    "<<\n/Type /XObject\n/Subtype /Image\n/Width {width}\n/Height {height}\n\
                     /ColorSpace /DeviceRGB\n/BitsPerComponent 8\n/Filter /DCTDecode\n\
                     /Length {}\n>>\nstream\n",
                    artifact.bytes().len()
                )?;
            }
            Encoding::JpegGray => {
                write!(
                    self.sink,
                    "<<\n/Type /XObject\n/Subtype /Image\n/Width {width}\n/Height {height}\n\
                     /ColorSpace /DeviceGray\n/BitsPerComponent 8\n/Filter /DCTDecode\n\
                     /Length {}\n>>\nstream\n",
                    artifact.bytes().len()
                )?;
            }
        }
        self.sink.write_all(artifact.bytes())?;
        self.sink.write_all(b"\nendstream\nendobj\n")?;

        self.pages.push(PageEntry {
            image_id,
            width,
            height,
        });
        Ok(())
    }

    /// Emit the Pages tree, Content/Page objects, Catalog, xref and trailer
    ///
    /// Consumes the writer; no further writes are possible afterward.
    pub fn finish(mut self) -> PdfResult<()> {
        let mut page_ids = Vec::with_capacity(self.pages.len());

        for (i, entry) in self.pages.iter().enumerate() {
            let img_name = format!("img_{i}");
            let content = format!(
                "q\n{} 0 0 {} 0 0 cm\n/{img_name} Do\nQ\n",
                entry.width, entry.height
            );

            let content_id = self.new_object()?;
            write!(self.sink, "<<\n/Length {}\n>>\nstream\n", content.len())?;
            self.sink.write_all(content.as_bytes())?;
            self.sink.write_all(b"endstream\nendobj\n")?;

            let page_id = self.new_object()?;
            write!(
                self.sink,
                "<<\n/Type /Page\n/Parent {} 0 R\n/MediaBox [0 0 {} {}]\n\
                 /Resources << /XObject << /{img_name} {} 0 R >> >>\n/Contents {} 0 R\n>>\nendobj\n",
                self.pages_obj_id, entry.width, entry.height, entry.image_id, content_id
            )?;
            page_ids.push(page_id);
        }

        // Rewrite the Pages object: same object number, new offset, real Kids.
        self.object_offsets[self.pages_obj_index] = self.sink.offset();
        write!(self.sink, "{} 0 obj\n", self.pages_obj_id)?;
        write!(
            self.sink,
            "<<\n/Type /Pages\n/Count {}\n/Kids [\n",
            page_ids.len()
        )?;
        for id in &page_ids {
            write!(self.sink, "{id} 0 R ")?;
        }
        self.sink.write_all(b"]\n>>\nendobj\n")?;

        let catalog_id = self.new_object()?;
        write!(
            self.sink,
            "<<\n/Type /Catalog\n/Pages {} 0 R\n>>\nendobj\n",
            self.pages_obj_id
        )?;

        let startxref = self.sink.offset();
        let total = self.object_offsets.len() as u64 + 1;
        write!(self.sink, "xref\n0 {total}\n")?;
        write!(self.sink, "{:010} 65535 f \n", 0)?;
        for off in &self.object_offsets {
            write!(self.sink, "{off:010} 00000 n \n")?;
        }
        write!(
            self.sink,
            "trailer\n<< /Size {total} /Root {catalog_id} 0 R >>\nstartxref\n{startxref}\n%%EOF"
        )?;
        self.sink.flush()?;
        Ok(())
    }

    /// Allocate a fresh object id, record its offset, and write its header line
    fn new_object(&mut self) -> PdfResult<u32> {
        self.object_offsets.push(self.sink.offset());
        self.next_obj += 1;
        write!(self.sink, "{} 0 obj\n", self.next_obj)?;
        Ok(self.next_obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(encoding: Encoding, bytes: Vec<u8>) -> PageArtifact {
        PageArtifact::new(encoding, 100, 200, bytes)
    }

    #[test]
    fn header_is_exact_bytes() {
        let mut buf = Vec::new();
        {
            let writer = PdfWriter::new(&mut buf).unwrap();
            writer.finish().unwrap();
        }
        assert!(buf.starts_with(b"%PDF-1.7\n%\xFF\xFF\xFF\xFF\n"));
    }

    #[test]
    fn empty_document_has_well_formed_trailer() {
        let mut buf = Vec::new();
        let writer = PdfWriter::new(&mut buf).unwrap();
        writer.finish().unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("trailer"));
        assert!(text.contains("%%EOF"));
        assert!(text.contains("/Type /Catalog"));
    }

    #[test]
    fn single_ccitt_page_references_its_image_object() {
        let mut buf = Vec::new();
        let mut writer = PdfWriter::new(&mut buf).unwrap();
        writer
            .write_image(&artifact(Encoding::CcittG4, vec![0xFF; 4]))
            .unwrap();
        writer.finish().unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("/Filter /CCITTFaxDecode"));
        assert!(text.contains("/BlackIs1 false"));
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn jpeg_rgb_page_uses_dct_decode_and_devicergb() {
        let mut buf = Vec::new();
        let mut writer = PdfWriter::new(&mut buf).unwrap();
        writer
            .write_image(&artifact(Encoding::JpegRgb, vec![0xD8, 0xFF]))
            .unwrap();
        writer.finish().unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("/Filter /DCTDecode"));
        assert!(text.contains("/ColorSpace /DeviceRGB"));
    }

    #[test]
    fn xref_offsets_are_ten_digits_zero_padded() {
        let mut buf = Vec::new();
        let mut writer = PdfWriter::new(&mut buf).unwrap();
        writer
            .write_image(&artifact(Encoding::JpegGray, vec![1, 2, 3]))
            .unwrap();
        writer.finish().unwrap();
        let text = String::from_utf8_lossy(&buf);
        let xref_line = text
            .lines()
            .find(|l| l.ends_with(" n "))
            .expect("at least one object xref entry");
        let offset_field = &xref_line[..10];
        assert_eq!(offset_field.len(), 10);
        assert!(offset_field.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn multi_page_order_matches_write_order() {
        let mut buf = Vec::new();
        let mut writer = PdfWriter::new(&mut buf).unwrap();
        writer
            .write_image(&artifact(Encoding::CcittG4, vec![0xAA]))
            .unwrap();
        writer
            .write_image(&artifact(Encoding::CcittG4, vec![0xBB]))
            .unwrap();
        writer.finish().unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("img_0"));
        assert!(text.contains("img_1"));
        assert!(text.contains("/Count 2"));
    }
}
