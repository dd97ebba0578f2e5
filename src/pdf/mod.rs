//! The document extraction collaborator backed by a PDF parser.
use anyhow::{Error, Result, anyhow};

/// Plain text extraction from an uploaded document. Failure modes are
/// opaque parse errors from the underlying parser.
pub trait ExtractText: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, Error>;
}

/// Extracts text from PDF bytes page by page, concatenated in page
/// order with no separator. No layout or structure awareness, plain
/// text only.
pub struct PdfExtractor;

impl ExtractText for PdfExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, Error> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| anyhow!("failed to parse PDF: {}", e))?;
        Ok(pages.concat())
    }
}
