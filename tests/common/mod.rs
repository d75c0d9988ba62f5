//! Shared fixtures: small PDFs built in memory with lopdf.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use resumerank::ResumeDocument;

/// Build a PDF with one page per entry; `None` makes a page without text.
pub fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
    let pages: Vec<Vec<Operation>> = pages
        .iter()
        .map(|text| match text {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => vec![],
        })
        .collect();
    build_pdf_from_operations(pages)
}

/// Build a PDF with one page per operation list, using font `F1` (Courier).
pub fn build_pdf_from_operations(pages: Vec<Vec<Operation>>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content encodes"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("PDF serializes");
    buffer
}

/// Words shown by [`multiline_pdf`], in reading order.
pub const MULTILINE_WORDS: &str =
    "Senior backend engineer Distributed systems Kafka Rust Go Postgres Kubernetes";

/// Single page whose lines all sit in one text block, moved by `Td`, `T*`,
/// `'` and `Tm`, with a kerned `TJ` array.
pub fn multiline_pdf() -> Vec<u8> {
    let text = |s: &str| Object::string_literal(s);
    build_pdf_from_operations(vec![vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("TL", vec![14.into()]),
        Operation::new("Td", vec![72.into(), 720.into()]),
        Operation::new("Tj", vec![text("Senior backend engineer")]),
        Operation::new("Td", vec![0.into(), (-14).into()]),
        Operation::new("Tj", vec![text("Distributed systems")]),
        Operation::new("T*", vec![]),
        Operation::new("Tj", vec![text("Kafka")]),
        Operation::new("T*", vec![]),
        Operation::new(
            "TJ",
            vec![Object::Array(vec![
                text("Ru"),
                (-20).into(),
                text("st"),
                (-400).into(),
                text("Go"),
            ])],
        ),
        Operation::new("'", vec![text("Postgres")]),
        Operation::new(
            "Tm",
            vec![1.into(), 0.into(), 0.into(), 1.into(), 72.into(), 600.into()],
        ),
        Operation::new("Tj", vec![text("Kubernetes")]),
        Operation::new("ET", vec![]),
    ]])
}

/// Single-page PDF containing `text`.
pub fn text_pdf(text: &str) -> Vec<u8> {
    build_pdf(&[Some(text)])
}

/// Resume document wrapping a single-page PDF.
pub fn resume(name: &str, text: &str) -> ResumeDocument {
    ResumeDocument::new(name, text_pdf(text))
}

/// Resume document whose only page has no text layer.
pub fn blank_resume(name: &str) -> ResumeDocument {
    ResumeDocument::new(name, build_pdf(&[None]))
}

/// Resume document that is not parseable as a PDF.
pub fn corrupt_resume(name: &str) -> ResumeDocument {
    ResumeDocument::new(name, b"%PDF-1.4\n1 0 obj << /Broken".to_vec())
}

/// Collapse whitespace so assertions don't depend on line breaks.
pub fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
