//! Document extraction adapters

mod docx;

pub use docx::DocxTextExtractor;
