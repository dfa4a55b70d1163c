/*!
 * Integration tests for the written .docx package
 */

use std::io::Cursor;
use anyhow::Result;
use regex::Regex;
use archdocx::app_config::ProjectInfo;
use archdocx::content::build_document;
use archdocx::docx::writer::{
    APP_PROPS_PART, CONTENT_TYPES_PART, CORE_PROPS_PART, DOCUMENT_PART, DOCUMENT_RELS_PART,
    PACKAGE_RELS_PART, STYLES_PART,
};
use archdocx::docx::Document;
use crate::common;

/// Test that every required part is present and well-formed
#[test]
fn test_save_shouldWriteAllPartsAsWellFormedXml() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("arquitectura.docx");

    let doc = build_document(&ProjectInfo::default(), common::test_date())?;
    doc.save(&path)?;

    let parts = common::read_package(&path)?;
    for part in [
        CONTENT_TYPES_PART,
        PACKAGE_RELS_PART,
        DOCUMENT_PART,
        DOCUMENT_RELS_PART,
        STYLES_PART,
        CORE_PROPS_PART,
        APP_PROPS_PART,
    ] {
        let xml = parts.get(part).unwrap_or_else(|| panic!("missing part {}", part));
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
        common::assert_well_formed(xml)?;
    }
    assert_eq!(parts.len(), 7);
    Ok(())
}

/// Test that the literal content survives serialization, including escaping
#[test]
fn test_save_documentPart_shouldContainLiteralContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("arquitectura.docx");

    build_document(&ProjectInfo::default(), common::test_date())?.save(&path)?;

    let parts = common::read_package(&path)?;
    let texts = common::document_texts(&parts[DOCUMENT_PART])?;

    assert_eq!(texts[0], "📱 CHATBOT RAG FLUTTER");
    assert!(texts.iter().any(|t| t == "23 de enero de 2025"));
    assert!(texts.iter().any(|t| t == "  List<Message> get messages => List.unmodifiable(_messages);"));
    assert!(texts.iter().any(|t| t == "  \"message\": \"¿Qué es RAG?\","));
    assert!(texts.iter().any(|t| t == "• URLs HTTPS en producción"));

    let document = &parts[DOCUMENT_PART];
    assert_eq!(document.matches("<w:br w:type=\"page\"/>").count(), 2);
    assert_eq!(document.matches("<w:tbl>").count(), 1);
    assert!(document.contains("<w:pStyle w:val=\"CodeBlock\"/>"));
    Ok(())
}

/// Test that the style sheet contains the custom styles with their formatting
#[test]
fn test_save_stylesPart_shouldDefineCustomStyles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("arquitectura.docx");

    build_document(&ProjectInfo::default(), common::test_date())?.save(&path)?;

    let parts = common::read_package(&path)?;
    let styles = &parts[STYLES_PART];
    for id in ["CustomTitle", "CustomSubtitle", "CodeBlock", "Heading3", "Heading4", "TableGrid"] {
        assert!(styles.contains(&format!("w:styleId=\"{}\"", id)), "missing style {}", id);
    }
    assert!(styles.contains("<w:rFonts w:ascii=\"Courier New\""));
    assert!(styles.contains("<w:color w:val=\"D32F2F\"/>"));
    assert!(styles.contains("<w:sz w:val=\"48\"/>"));
    Ok(())
}

/// Test that the core properties carry the title and a W3CDTF timestamp
#[test]
fn test_save_coreProperties_shouldHaveTitleAndTimestamp() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("arquitectura.docx");

    build_document(&ProjectInfo::default(), common::test_date())?.save(&path)?;

    let parts = common::read_package(&path)?;
    let core = &parts[CORE_PROPS_PART];
    assert!(core.contains("<dc:title>ChatBot RAG Flutter - Arquitectura</dc:title>"));
    assert!(core.contains("<dc:creator>Equipo de Desarrollo</dc:creator>"));

    let timestamp = Regex::new(r#"<dcterms:created xsi:type="dcterms:W3CDTF">\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z</dcterms:created>"#)?;
    assert!(timestamp.is_match(core));
    Ok(())
}

/// Test that saving over an existing file replaces it
#[test]
fn test_save_twice_shouldOverwriteWithoutError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("arquitectura.docx");
    std::fs::write(&path, b"not a zip")?;

    let mut doc = Document::new();
    doc.add_paragraph("primera", None)?;
    doc.save(&path)?;

    let mut doc = Document::new();
    doc.add_paragraph("segunda", None)?;
    doc.save(&path)?;

    let texts = common::document_texts(&common::read_package(&path)?[DOCUMENT_PART])?;
    assert_eq!(texts, vec!["segunda"]);

    // Only the output file remains, no temporary leftovers
    assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 1);
    Ok(())
}

/// Test writing to an in-memory sink
#[test]
fn test_writeTo_withCursor_shouldProduceZipArchive() -> Result<()> {
    let mut doc = Document::new();
    doc.add_paragraph("en memoria", None)?;

    let cursor = doc.write_to(Cursor::new(Vec::new()))?;
    let bytes = cursor.into_inner();

    // Local file header signature
    assert_eq!(&bytes[..4], b"PK\x03\x04");
    let archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    assert_eq!(archive.len(), 7);
    Ok(())
}

/// Test that saving into a missing directory fails instead of creating it
#[test]
fn test_save_withMissingDirectory_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("missing").join("arquitectura.docx");

    assert!(Document::new().save(&path).is_err());
    assert!(!path.exists());
    Ok(())
}
