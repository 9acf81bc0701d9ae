//! DOCX reading: paragraphs and tables in document order

use crate::ExtractError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

/// Rough paragraphs-per-page used for the page estimate. The estimate never
/// drops below one page, even for documents shorter than this.
const PARAGRAPHS_PER_PAGE: usize = 20;

pub const TABLE_START: &str = "[TABLE]";
pub const TABLE_END: &str = "[/TABLE]";

#[derive(Debug, Clone)]
pub struct DocxText {
    pub text: String,
    pub pages: u32,
    /// Top-level body paragraphs, including empty ones
    pub paragraph_count: usize,
}

/// Read the main document part of a DOCX container.
///
/// Paragraphs are separated by blank lines; each table becomes
/// tab-delimited rows between `[TABLE]` and `[/TABLE]` lines.
pub fn read_docx(bytes: &[u8]) -> Result<DocxText, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::InvalidDocument(format!("not a DOCX container: {}", e)))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::InvalidDocument(format!("missing word/document.xml: {}", e)))?
        .read_to_string(&mut xml)?;

    let (text, paragraph_count) = flatten_document_xml(&xml)?;
    let pages = (paragraph_count / PARAGRAPHS_PER_PAGE).max(1) as u32;

    Ok(DocxText {
        text,
        pages,
        paragraph_count,
    })
}

/// Walk WordprocessingML and produce flat text
pub fn flatten_document_xml(xml: &str) -> Result<(String, usize), ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut out = String::new();
    let mut paragraph = String::new();
    let mut cell = String::new();
    let mut row: Vec<String> = Vec::new();
    let mut table_depth = 0usize;
    let mut in_text_run = false;
    let mut paragraph_count = 0usize;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractError::InvalidDocument(format!("malformed document XML: {}", e)))?;
        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => {
                    if table_depth == 0 {
                        out.push('\n');
                        out.push_str(TABLE_START);
                        out.push('\n');
                    }
                    table_depth += 1;
                }
                b"w:tr" if table_depth == 1 => row.clear(),
                b"w:tc" if table_depth == 1 => cell.clear(),
                b"w:p" => paragraph.clear(),
                b"w:t" => in_text_run = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => {
                    table_depth = table_depth.saturating_sub(1);
                    if table_depth == 0 {
                        out.push_str(TABLE_END);
                        out.push_str("\n\n");
                    }
                }
                b"w:tr" if table_depth == 1 => {
                    out.push_str(&row.join("\t"));
                    out.push('\n');
                }
                b"w:tc" if table_depth == 1 => row.push(cell.trim().to_string()),
                b"w:p" => {
                    if table_depth > 0 {
                        if !cell.is_empty() {
                            cell.push('\n');
                        }
                        cell.push_str(&paragraph);
                    } else {
                        paragraph_count += 1;
                        if !paragraph.trim().is_empty() {
                            out.push_str(&paragraph);
                            out.push_str("\n\n");
                        }
                    }
                    paragraph.clear();
                }
                b"w:t" => in_text_run = false,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => paragraph.push('\t'),
                b"w:br" | b"w:cr" => paragraph.push('\n'),
                b"w:p" if table_depth == 0 => paragraph_count += 1,
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                let unescaped = t.unescape().map_err(|e| {
                    ExtractError::InvalidDocument(format!("bad text escape: {}", e))
                })?;
                paragraph.push_str(&unescaped);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok((out, paragraph_count))
}
