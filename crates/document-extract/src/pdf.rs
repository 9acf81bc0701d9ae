//! Direct text-layer extraction for PDF files

use lopdf::Document;
use pdf_extract::extract_text_from_mem;

/// Text pulled straight from a PDF's text layer
#[derive(Debug, Clone)]
pub struct DirectPdf {
    pub text: String,
    pub pages: u32,
}

/// Marker written before each page's text so page boundaries survive
/// into segmentation
pub fn page_marker(page_number: usize) -> String {
    format!("\n--- Page {} ---\n", page_number)
}

/// Extract the embedded text of every page.
///
/// Pages without text get no marker, so a scanned document produces an
/// (almost) empty string rather than a column of page headers.
pub fn extract_direct(pdf_bytes: &[u8]) -> Result<DirectPdf, lopdf::Error> {
    let document = Document::load_mem(pdf_bytes)?;
    let pages = document.get_pages();
    let page_count = pages.len() as u32;

    let mut text = String::new();
    for (idx, page_number) in pages.keys().enumerate() {
        match document.extract_text(&[*page_number]) {
            Ok(page_text) if !page_text.trim().is_empty() => {
                text.push_str(&page_marker(idx + 1));
                text.push_str(&page_text);
                text.push('\n');
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(page = page_number, error = %e, "No text layer on page");
            }
        }
    }

    if text.trim().is_empty() {
        // lopdf can miss text drawn with embedded CID fonts
        if let Some(fallback) = extract_with_pdf_extract(pdf_bytes) {
            text = fallback;
        }
    }

    Ok(DirectPdf {
        text,
        pages: page_count,
    })
}

/// Second direct backend. pdf-extract separates pages with form feeds.
fn extract_with_pdf_extract(pdf_bytes: &[u8]) -> Option<String> {
    let raw = match extract_text_from_mem(pdf_bytes) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = %e, "pdf-extract found no text");
            return None;
        }
    };

    let mut text = String::new();
    for (idx, page_text) in raw.split('\x0C').enumerate() {
        if !page_text.trim().is_empty() {
            text.push_str(&page_marker(idx + 1));
            text.push_str(page_text);
            text.push('\n');
        }
    }

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bytes_fail() {
        assert!(extract_direct(b"").is_err());
        assert!(extract_direct(b"plain text, not a pdf").is_err());
    }

    #[test]
    fn test_page_marker_format() {
        assert_eq!(page_marker(3), "\n--- Page 3 ---\n");
    }
}
