//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for the page access text extraction
//! needs, isolating the concrete PDF library (lopdf) from the
//! concatenation and failure logic.

use lopdf::content::Operation;
use lopdf::{Dictionary, Document as LopdfDocument, Object};

use crate::error::{Error, Result};

/// Negative `TJ` adjustment (thousandths of an em) treated as a word gap.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Abstract interface for page-wise text access.
pub trait PdfBackend {
    /// Page numbers in document order (1-based).
    fn page_numbers(&self) -> Vec<u32>;

    /// Extracted text of a single page.
    fn page_text(&self, page: u32) -> Result<String>;
}

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self { doc })
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Get PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Decode a shown string through the font's encoding.
    fn decode_text(&self, font: Option<&Dictionary>, bytes: &[u8]) -> String {
        if let Some(font) = font {
            if let Ok(enc) = font.get_font_encoding(&self.doc) {
                if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                    return text;
                }
            }
        }
        decode_text_simple(bytes)
    }
}

impl PdfBackend for LopdfBackend {
    fn page_numbers(&self) -> Vec<u32> {
        // BTreeMap keys iterate in ascending page order
        self.doc.get_pages().into_keys().collect()
    }

    /// Walk the page's text operators.
    ///
    /// Every operator that starts a new line (`Td`/`TD` with a vertical move,
    /// `T*`, `Tm`, `'`, `"`) and the end of each text block emit a line break,
    /// so words on adjacent lines never fuse into one token.
    fn page_text(&self, page: u32) -> Result<String> {
        let page_error = |e: lopdf::Error| Error::TextExtract(format!("Page {}: {}", page, e));

        let pages = self.doc.get_pages();
        let page_id = *pages
            .get(&page)
            .ok_or_else(|| Error::TextExtract(format!("Page {}: not found", page)))?;
        let content = self
            .doc
            .get_and_decode_page_content(page_id)
            .map_err(page_error)?;
        let fonts = self.doc.get_page_fonts(page_id).unwrap_or_default();

        let mut text = String::new();
        let mut font: Option<&Dictionary> = None;

        for op in &content.operations {
            match op.operator.as_str() {
                "Tf" => {
                    font = op
                        .operands
                        .first()
                        .and_then(|o| o.as_name().ok())
                        .and_then(|name| fonts.get(name).copied());
                }
                "Td" | "TD" => {
                    let tx = operand_number(op, 0).unwrap_or(0.0);
                    let ty = operand_number(op, 1).unwrap_or(0.0);
                    if ty != 0.0 {
                        push_break(&mut text, '\n');
                    } else if tx != 0.0 {
                        push_break(&mut text, ' ');
                    }
                }
                "T*" | "Tm" | "ET" => push_break(&mut text, '\n'),
                "Tj" => {
                    if let Some(Object::String(bytes, _)) = op.operands.first() {
                        text.push_str(&self.decode_text(font, bytes));
                    }
                }
                "'" => {
                    push_break(&mut text, '\n');
                    if let Some(Object::String(bytes, _)) = op.operands.first() {
                        text.push_str(&self.decode_text(font, bytes));
                    }
                }
                "\"" => {
                    push_break(&mut text, '\n');
                    if let Some(Object::String(bytes, _)) = op.operands.get(2) {
                        text.push_str(&self.decode_text(font, bytes));
                    }
                }
                "TJ" => {
                    let Some(Object::Array(items)) = op.operands.first() else {
                        continue;
                    };
                    for item in items {
                        match item {
                            Object::String(bytes, _) => {
                                text.push_str(&self.decode_text(font, bytes));
                            }
                            other => {
                                if number(other).is_some_and(|n| -n > TJ_SPACE_THRESHOLD) {
                                    push_break(&mut text, ' ');
                                }
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(text)
    }
}

/// Append a separator unless the text is empty or already ends in whitespace.
fn push_break(text: &mut String, separator: char) {
    if text.chars().last().is_some_and(|c| !c.is_whitespace()) {
        text.push(separator);
    }
}

fn operand_number(op: &Operation, index: usize) -> Option<f32> {
    op.operands.get(index).and_then(number)
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Fallback decoding for strings whose font encoding is unavailable.
fn decode_text_simple(bytes: &[u8]) -> String {
    // UTF-16BE with byte order mark
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        // Latin-1
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
