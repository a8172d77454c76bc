//! DOCX text extractor.
//!
//! A DOCX file is a zip archive; the body lives in `word/document.xml`.
//! We pull the text nodes out with a small tag-stripping scanner instead of
//! a full XML parse: `w:p` boundaries become paragraph breaks, `w:br` and
//! `w:tab` become their whitespace equivalents, everything else is dropped.

use std::io::{Cursor, Read};

use tracing::debug;

use lzdw_application::ports::extraction::{ExtractedText, ExtractionError, TextExtractor};

/// Extracts plain text from DOCX bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxTextExtractor;

impl DocxTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for DocxTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractionError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ExtractionError::InvalidDocument(format!("not a DOCX archive: {e}")))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|_| {
                ExtractionError::InvalidDocument("missing word/document.xml".to_string())
            })?
            .read_to_string(&mut xml)
            .map_err(|e| ExtractionError::InvalidDocument(e.to_string()))?;

        let mut warnings = Vec::new();
        if xml.contains("<w:drawing") || xml.contains("<w:pic") {
            warnings.push("embedded images were ignored".to_string());
        }
        if xml.contains("<w:tbl") {
            warnings.push("tables were flattened to plain text".to_string());
        }

        let text = document_text(&xml);
        debug!(bytes = text.len(), warnings = warnings.len(), "DOCX extracted");
        Ok(ExtractedText { text, warnings })
    }
}

/// Strip WordprocessingML tags, keeping paragraph structure.
fn document_text(xml: &str) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut tag = String::new();
    let mut in_tag = false;

    for c in xml.chars() {
        if in_tag {
            if c == '>' {
                in_tag = false;
                match tag_name(&tag) {
                    "/w:p" => {
                        let paragraph = decode_entities(current.trim());
                        if !paragraph.is_empty() {
                            paragraphs.push(paragraph);
                        }
                        current.clear();
                    }
                    "w:br" => current.push('\n'),
                    "w:tab" => current.push('\t'),
                    _ => {}
                }
                tag.clear();
            } else {
                tag.push(c);
            }
        } else if c == '<' {
            in_tag = true;
        } else {
            current.push(c);
        }
    }

    // trailing run outside a closed paragraph
    let tail = decode_entities(current.trim());
    if !tail.is_empty() {
        paragraphs.push(tail);
    }

    paragraphs.join("\n\n")
}

/// First token of a tag body, without attributes or the self-closing slash.
fn tag_name(tag: &str) -> &str {
    let tag = tag.trim_end_matches('/');
    tag.split_whitespace().next().unwrap_or(tag)
}

fn decode_entities(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx_with(document_xml: &str) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("word/document.xml", options).unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf.into_inner()
    }

    const SIMPLE_DOC: &str = concat!(
        r#"<?xml version="1.0"?><w:document><w:body>"#,
        r#"<w:p><w:r><w:t>Acme Corp Landing Zone</w:t></w:r></w:p>"#,
        r#"<w:p><w:r><w:t>Client: Acme Corp</w:t></w:r></w:p>"#,
        r#"</w:body></w:document>"#,
    );

    #[test]
    fn paragraphs_become_blank_line_breaks() {
        let extracted = DocxTextExtractor::new().extract(&docx_with(SIMPLE_DOC)).unwrap();
        assert_eq!(
            extracted.text,
            "Acme Corp Landing Zone\n\nClient: Acme Corp"
        );
        assert!(extracted.warnings.is_empty());
    }

    #[test]
    fn entities_are_decoded() {
        let doc = r#"<w:p><w:t>R&amp;D &quot;cloud&quot; &lt;team&gt;</w:t></w:p>"#;
        let extracted = DocxTextExtractor::new().extract(&docx_with(doc)).unwrap();
        assert_eq!(extracted.text, r#"R&D "cloud" <team>"#);
    }

    #[test]
    fn breaks_and_tabs_survive() {
        let doc = r#"<w:p><w:t>line one</w:t><w:br/><w:t>line two</w:t><w:tab/><w:t>cell</w:t></w:p>"#;
        let extracted = DocxTextExtractor::new().extract(&docx_with(doc)).unwrap();
        assert_eq!(extracted.text, "line one\nline two\tcell");
    }

    #[test]
    fn images_produce_a_warning() {
        let doc = r#"<w:p><w:drawing><a:blip/></w:drawing><w:t>text</w:t></w:p>"#;
        let extracted = DocxTextExtractor::new().extract(&docx_with(doc)).unwrap();
        assert_eq!(extracted.warnings, vec!["embedded images were ignored"]);
        assert_eq!(extracted.text, "text");
    }

    #[test]
    fn not_a_zip_is_invalid() {
        let err = DocxTextExtractor::new().extract(b"plain text").unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidDocument(_)));
    }

    #[test]
    fn zip_without_document_xml_is_invalid() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("other.txt", options).unwrap();
            writer.write_all(b"nope").unwrap();
            writer.finish().unwrap();
        }
        let err = DocxTextExtractor::new().extract(&buf.into_inner()).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidDocument(m) if m.contains("document.xml")));
    }
}
