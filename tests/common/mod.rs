#![allow(dead_code)]

use lopdf::{Document as LopdfDocument, Object};
use metallo_pdf::{Document, Page};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A rendered document reloaded through lopdf, next to the page layouts that
/// produced it
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn render(document: Document) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(document.to_bytes()?)
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Raw content stream of a 1-based page
    pub fn page_content(&self, page_number: u32) -> String {
        let pages = self.doc.get_pages();
        let id = pages[&page_number];
        let content = self.doc.get_page_content(id).unwrap_or_default();
        String::from_utf8_lossy(&content).into_owned()
    }

    /// Number of image XObjects in the file, masks included
    pub fn image_count(&self) -> usize {
        self.doc
            .objects
            .values()
            .filter(|object| match object {
                Object::Stream(stream) => stream
                    .dict
                    .get(b"Subtype")
                    .and_then(|subtype| subtype.as_name())
                    .map(|name| name == b"Image")
                    .unwrap_or(false),
                _ => false,
            })
            .count()
    }

    /// Text of a string in the info dictionary
    pub fn info_string(&self, key: &[u8]) -> Option<String> {
        let info = self.doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
        let dict = self.doc.get_object(info).ok()?.as_dict().ok()?;
        let value = dict.get(key).ok()?.as_str().ok()?;
        Some(String::from_utf8_lossy(value).into_owned())
    }
}

/// Hex form of a WinAnsi string as it appears in a `Tj` operator
pub fn hex_text(text: &str) -> String {
    let hex: String = text.bytes().map(|b| format!("{b:02x}")).collect();
    format!("<{hex}> Tj")
}

/// x positions of every span on a page with the given text
pub fn span_xs(page: &Page, text: &str) -> Vec<f32> {
    page.spans()
        .filter(|span| span.text == text)
        .map(|span| span.coords.0 .0)
        .collect()
}
