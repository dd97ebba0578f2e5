use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::pdf::{ExtractText, PdfExtractor};

pub fn run(file: &Path) -> Result<()> {
    let bytes = fs::read(file)?;
    let text = PdfExtractor.extract_text(&bytes)?;
    println!("{}", text);
    Ok(())
}
