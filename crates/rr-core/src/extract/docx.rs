use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::ExtractError;

/// Pull raw text out of a DOCX byte stream by walking the text nodes of
/// `word/document.xml`. Paragraph and line-break boundaries become
/// newlines, tabs become spaces.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|err| ExtractError::Extraction(format!("docx: {err}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|err| ExtractError::Extraction(format!("docx: no document body: {err}")))?
        .read_to_string(&mut xml)
        .map_err(|err| ExtractError::Extraction(format!("docx: {err}")))?;

    document_xml_to_text(&xml)
}

fn document_xml_to_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(text)) => {
                let text = text
                    .unescape()
                    .map_err(|err| ExtractError::Extraction(format!("docx: bad text node: {err}")))?;
                out.push_str(&text);
            }
            Ok(Event::End(el)) if el.name().as_ref() == b"w:p" => out.push('\n'),
            Ok(Event::Empty(el)) if el.name().as_ref() == b"w:br" => out.push('\n'),
            Ok(Event::Empty(el)) if el.name().as_ref() == b"w:tab" => out.push(' '),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(ExtractError::Extraction(format!("docx: malformed xml: {err}")));
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn docx_with_body(body_xml: &str) -> Vec<u8> {
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body_xml}</w:body></w:document>"#
        );

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn paragraphs_become_lines() {
        let bytes = docx_with_body(
            "<w:p><w:r><w:t>Experience</w:t></w:r></w:p><w:p><w:r><w:t>Acme Corp</w:t></w:r></w:p>",
        );
        assert_eq!(extract(&bytes).unwrap(), "Experience\nAcme Corp\n");
    }

    #[test]
    fn explicit_breaks_and_tabs_are_preserved() {
        let bytes =
            docx_with_body("<w:p><w:r><w:t>a</w:t><w:br/><w:t>b</w:t><w:tab/><w:t>c</w:t></w:r></w:p>");
        assert_eq!(extract(&bytes).unwrap(), "a\nb c\n");
    }

    #[test]
    fn corrupt_archive_is_an_extraction_error() {
        let err = extract(b"definitely not a zip").unwrap_err();
        assert!(matches!(err, ExtractError::Extraction(_)));
    }

    #[test]
    fn archive_without_document_body_is_an_extraction_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.txt", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(b"hello").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract(&bytes).unwrap_err();
        assert!(matches!(err, ExtractError::Extraction(ref msg) if msg.contains("no document body")));
    }
}
