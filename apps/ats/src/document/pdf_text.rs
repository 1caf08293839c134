//! PDF text extraction for uploaded resumes.
//!
//! A document that cannot be loaded at all is an error. Inside a loaded
//! document each page is extracted on its own; a page that fails contributes
//! an empty string instead of failing the whole upload.

use lopdf::Document;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Uploaded file is empty")]
    Empty,

    #[error("Invalid PDF: {0}")]
    InvalidPdf(#[from] lopdf::Error),
}

/// Text pulled from a PDF, with per-page bookkeeping for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
    /// Page numbers (1-based) that yielded no text, either through an
    /// extraction error or an empty result (e.g. a dangling content stream).
    pub unreadable_pages: Vec<u32>,
}

/// Extracts the concatenated text of every page, in page order.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<ExtractedText, ExtractError> {
    if bytes.is_empty() {
        return Err(ExtractError::Empty);
    }

    let doc = Document::load_mem(bytes)?;
    // BTreeMap keyed by page number, so iteration is already in page order.
    let pages = doc.get_pages();

    let mut text = String::new();
    let mut unreadable_pages = Vec::new();

    for page_number in pages.keys().copied() {
        match doc.extract_text(&[page_number]) {
            Ok(page_text) if !page_text.trim().is_empty() => text.push_str(&page_text),
            Ok(_) => {
                warn!("Page {page_number} yielded no text");
                unreadable_pages.push(page_number);
            }
            Err(e) => {
                warn!("Page {page_number} yielded no text: {e}");
                unreadable_pages.push(page_number);
            }
        }
    }

    debug!(
        "Extracted {} chars from {} page(s), {} unreadable",
        text.len(),
        pages.len(),
        unreadable_pages.len()
    );

    Ok(ExtractedText {
        text,
        page_count: pages.len(),
        unreadable_pages,
    })
}
