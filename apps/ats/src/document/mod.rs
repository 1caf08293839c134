// Resume document handling. Only PDF uploads are accepted.

pub mod pdf_text;

#[cfg(test)]
pub(crate) mod fixtures;

pub use pdf_text::{extract_pdf_text, ExtractError};
