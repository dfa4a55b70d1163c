/*!
 * Serialization of a [`Document`] into an OPC (zip) package.
 *
 * Each package part is rendered with a `quick_xml::Writer` into memory and then
 * stored in the zip container. Saving goes through a temporary file in the
 * destination directory which is renamed over the target, so an existing file
 * is replaced in one step.
 */

use std::io::{Seek, Write};
use std::path::Path;

use chrono::SecondsFormat;
use log::debug;
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;
use tempfile::NamedTempFile;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::model::{Block, Document, Font, Paragraph, ParagraphFormat, Run, Style, StyleKind, Table, NORMAL_STYLE};
use crate::errors::DocxError;

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOC_RELS_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const CORE_PROPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
const EXT_PROPS_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";

const REL_OFFICE_DOCUMENT: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPS: &str = "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXT_PROPS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

/// Part names, in the order they are stored in the archive
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const PACKAGE_RELS_PART: &str = "_rels/.rels";
pub const DOCUMENT_PART: &str = "word/document.xml";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
pub const STYLES_PART: &str = "word/styles.xml";
pub const CORE_PROPS_PART: &str = "docProps/core.xml";
pub const APP_PROPS_PART: &str = "docProps/app.xml";

// US Letter with 1" margins, in twips
const PAGE_WIDTH: i32 = 12240;
const PAGE_HEIGHT: i32 = 15840;
const PAGE_MARGIN: i32 = 1440;
const TEXT_WIDTH: i32 = PAGE_WIDTH - 2 * PAGE_MARGIN;

type XmlWriter = Writer<Vec<u8>>;
type XmlResult = quick_xml::Result<()>;

impl Document {
    /// Write the complete package into `sink` and hand the sink back
    pub fn write_to<W: Write + Seek>(&self, sink: W) -> Result<W, DocxError> {
        let parts: [(&str, Vec<u8>); 7] = [
            (CONTENT_TYPES_PART, content_types_xml()?),
            (PACKAGE_RELS_PART, package_rels_xml()?),
            (DOCUMENT_PART, document_xml(self)?),
            (DOCUMENT_RELS_PART, document_rels_xml()?),
            (STYLES_PART, styles_xml(self)?),
            (CORE_PROPS_PART, core_props_xml(self)?),
            (APP_PROPS_PART, app_props_xml()?),
        ];

        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(sink);
        for (name, bytes) in parts.iter() {
            debug!("Writing part {} ({} bytes)", name, bytes.len());
            zip.start_file(*name, options)?;
            zip.write_all(bytes)?;
        }

        Ok(zip.finish()?)
    }

    /// Save the package to `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DocxError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        self.write_to(tmp.as_file_mut())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| DocxError::Io(e.error))?;

        Ok(())
    }
}

fn new_writer() -> Result<XmlWriter, DocxError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(writer)
}

// @writes: <name w:val="val"/>
fn val_element(w: &mut XmlWriter, name: &str, val: &str) -> XmlResult {
    w.create_element(name).with_attribute(("w:val", val)).write_empty()?;
    Ok(())
}

// @writes: On/off property; absent value means "on"
fn toggle_element(w: &mut XmlWriter, name: &str, on: bool) -> XmlResult {
    if on {
        w.create_element(name).write_empty()?;
    } else {
        val_element(w, name, "0")?;
    }
    Ok(())
}

fn content_types_xml() -> Result<Vec<u8>, DocxError> {
    let overrides = [
        ("/word/document.xml", "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"),
        ("/word/styles.xml", "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"),
        ("/docProps/core.xml", "application/vnd.openxmlformats-package.core-properties+xml"),
        ("/docProps/app.xml", "application/vnd.openxmlformats-officedocument.extended-properties+xml"),
    ];

    let mut writer = new_writer()?;
    writer
        .create_element("Types")
        .with_attribute(("xmlns", CONTENT_TYPES_NS))
        .write_inner_content(|w| -> XmlResult {
            w.create_element("Default")
                .with_attribute(("Extension", "rels"))
                .with_attribute(("ContentType", "application/vnd.openxmlformats-package.relationships+xml"))
                .write_empty()?;
            w.create_element("Default")
                .with_attribute(("Extension", "xml"))
                .with_attribute(("ContentType", "application/xml"))
                .write_empty()?;
            for (part, content_type) in overrides {
                w.create_element("Override")
                    .with_attribute(("PartName", part))
                    .with_attribute(("ContentType", content_type))
                    .write_empty()?;
            }
            Ok(())
        })?;
    Ok(writer.into_inner())
}

fn relationships_xml(relationships: &[(&str, &str)]) -> Result<Vec<u8>, DocxError> {
    let mut writer = new_writer()?;
    writer
        .create_element("Relationships")
        .with_attribute(("xmlns", PKG_RELS_NS))
        .write_inner_content(|w| -> XmlResult {
            for (index, (rel_type, target)) in relationships.iter().enumerate() {
                let id = format!("rId{}", index + 1);
                w.create_element("Relationship")
                    .with_attribute(("Id", id.as_str()))
                    .with_attribute(("Type", *rel_type))
                    .with_attribute(("Target", *target))
                    .write_empty()?;
            }
            Ok(())
        })?;
    Ok(writer.into_inner())
}

fn package_rels_xml() -> Result<Vec<u8>, DocxError> {
    relationships_xml(&[
        (REL_OFFICE_DOCUMENT, DOCUMENT_PART),
        (REL_CORE_PROPS, CORE_PROPS_PART),
        (REL_EXT_PROPS, APP_PROPS_PART),
    ])
}

fn document_rels_xml() -> Result<Vec<u8>, DocxError> {
    relationships_xml(&[(REL_STYLES, "styles.xml")])
}

fn document_xml(doc: &Document) -> Result<Vec<u8>, DocxError> {
    let mut writer = new_writer()?;
    writer
        .create_element("w:document")
        .with_attribute(("xmlns:w", WORDML_NS))
        .with_attribute(("xmlns:r", DOC_RELS_NS))
        .write_inner_content(|w| -> XmlResult {
            w.create_element("w:body").write_inner_content(|w| -> XmlResult {
                for block in doc.blocks() {
                    match block {
                        Block::Paragraph(p) => write_paragraph(w, p)?,
                        Block::Table(t) => write_table(w, t)?,
                        Block::PageBreak => write_page_break(w)?,
                    }
                }
                write_section_properties(w)
            })?;
            Ok(())
        })?;
    Ok(writer.into_inner())
}

// @writes: spacing, ind and jc in schema order
fn write_paragraph_format(w: &mut XmlWriter, format: &ParagraphFormat) -> XmlResult {
    if format.space_before.is_some() || format.space_after.is_some() {
        let before = format.space_before.map(|l| l.twips().to_string());
        let after = format.space_after.map(|l| l.twips().to_string());
        let mut spacing = w.create_element("w:spacing");
        if let Some(before) = &before {
            spacing = spacing.with_attribute(("w:before", before.as_str()));
        }
        if let Some(after) = &after {
            spacing = spacing.with_attribute(("w:after", after.as_str()));
        }
        spacing.write_empty()?;
    }

    if let Some(indent) = format.left_indent {
        let left = indent.twips().to_string();
        w.create_element("w:ind").with_attribute(("w:left", left.as_str())).write_empty()?;
    }

    if let Some(alignment) = format.alignment {
        val_element(w, "w:jc", alignment.as_ooxml())?;
    }

    Ok(())
}

fn write_font(w: &mut XmlWriter, font: &Font) -> XmlResult {
    if let Some(name) = &font.name {
        w.create_element("w:rFonts")
            .with_attribute(("w:ascii", name.as_str()))
            .with_attribute(("w:hAnsi", name.as_str()))
            .with_attribute(("w:eastAsia", name.as_str()))
            .with_attribute(("w:cs", name.as_str()))
            .write_empty()?;
    }
    if let Some(bold) = font.bold {
        toggle_element(w, "w:b", bold)?;
    }
    if let Some(italic) = font.italic {
        toggle_element(w, "w:i", italic)?;
    }
    if let Some(color) = font.color {
        val_element(w, "w:color", &color.hex())?;
    }
    if let Some(size) = font.size {
        let half_points = size.half_points().to_string();
        val_element(w, "w:sz", &half_points)?;
        val_element(w, "w:szCs", &half_points)?;
    }
    Ok(())
}

fn write_run(w: &mut XmlWriter, run: &Run) -> XmlResult {
    w.create_element("w:r").write_inner_content(|w| -> XmlResult {
        if run.bold.is_some() || run.color.is_some() {
            w.create_element("w:rPr").write_inner_content(|w| -> XmlResult {
                if let Some(bold) = run.bold {
                    toggle_element(w, "w:b", bold)?;
                }
                if let Some(color) = run.color {
                    val_element(w, "w:color", &color.hex())?;
                }
                Ok(())
            })?;
        }
        w.create_element("w:t")
            .with_attribute(("xml:space", "preserve"))
            .write_text_content(BytesText::new(&run.text))?;
        Ok(())
    })?;
    Ok(())
}

fn write_paragraph(w: &mut XmlWriter, paragraph: &Paragraph) -> XmlResult {
    w.create_element("w:p").write_inner_content(|w| -> XmlResult {
        if paragraph.style.is_some() || !paragraph.format.is_empty() {
            w.create_element("w:pPr").write_inner_content(|w| -> XmlResult {
                if let Some(style) = &paragraph.style {
                    val_element(w, "w:pStyle", style)?;
                }
                write_paragraph_format(w, &paragraph.format)
            })?;
        }
        for run in &paragraph.runs {
            write_run(w, run)?;
        }
        Ok(())
    })?;
    Ok(())
}

fn write_page_break(w: &mut XmlWriter) -> XmlResult {
    w.create_element("w:p").write_inner_content(|w| -> XmlResult {
        w.create_element("w:r").write_inner_content(|w| -> XmlResult {
            w.create_element("w:br").with_attribute(("w:type", "page")).write_empty()?;
            Ok(())
        })?;
        Ok(())
    })?;
    Ok(())
}

fn write_table(w: &mut XmlWriter, table: &Table) -> XmlResult {
    let column_width = (TEXT_WIDTH / table.cols().max(1) as i32).to_string();

    w.create_element("w:tbl").write_inner_content(|w| -> XmlResult {
        w.create_element("w:tblPr").write_inner_content(|w| -> XmlResult {
            if let Some(style) = &table.style {
                val_element(w, "w:tblStyle", style)?;
            }
            w.create_element("w:tblW")
                .with_attribute(("w:w", "0"))
                .with_attribute(("w:type", "auto"))
                .write_empty()?;
            Ok(())
        })?;

        w.create_element("w:tblGrid").write_inner_content(|w| -> XmlResult {
            for _ in 0..table.cols() {
                w.create_element("w:gridCol")
                    .with_attribute(("w:w", column_width.as_str()))
                    .write_empty()?;
            }
            Ok(())
        })?;

        for row in 0..table.rows() {
            w.create_element("w:tr").write_inner_content(|w| -> XmlResult {
                for text in table.row(row) {
                    w.create_element("w:tc").write_inner_content(|w| -> XmlResult {
                        w.create_element("w:tcPr").write_inner_content(|w| -> XmlResult {
                            w.create_element("w:tcW")
                                .with_attribute(("w:w", column_width.as_str()))
                                .with_attribute(("w:type", "dxa"))
                                .write_empty()?;
                            Ok(())
                        })?;
                        // A cell must always hold at least one paragraph
                        let mut paragraph = Paragraph::default();
                        if !text.is_empty() {
                            paragraph.add_run(text);
                        }
                        write_paragraph(w, &paragraph)
                    })?;
                }
                Ok(())
            })?;
        }
        Ok(())
    })?;
    Ok(())
}

fn write_section_properties(w: &mut XmlWriter) -> XmlResult {
    let width = PAGE_WIDTH.to_string();
    let height = PAGE_HEIGHT.to_string();
    let margin = PAGE_MARGIN.to_string();

    w.create_element("w:sectPr").write_inner_content(|w| -> XmlResult {
        w.create_element("w:pgSz")
            .with_attribute(("w:w", width.as_str()))
            .with_attribute(("w:h", height.as_str()))
            .write_empty()?;
        w.create_element("w:pgMar")
            .with_attribute(("w:top", margin.as_str()))
            .with_attribute(("w:right", margin.as_str()))
            .with_attribute(("w:bottom", margin.as_str()))
            .with_attribute(("w:left", margin.as_str()))
            .with_attribute(("w:header", "720"))
            .with_attribute(("w:footer", "720"))
            .with_attribute(("w:gutter", "0"))
            .write_empty()?;
        Ok(())
    })?;
    Ok(())
}

fn styles_xml(doc: &Document) -> Result<Vec<u8>, DocxError> {
    let mut writer = new_writer()?;
    writer
        .create_element("w:styles")
        .with_attribute(("xmlns:w", WORDML_NS))
        .write_inner_content(|w| -> XmlResult {
            write_doc_defaults(w)?;
            for style in doc.styles().iter() {
                write_style(w, style)?;
            }
            Ok(())
        })?;
    Ok(writer.into_inner())
}

fn write_doc_defaults(w: &mut XmlWriter) -> XmlResult {
    w.create_element("w:docDefaults").write_inner_content(|w| -> XmlResult {
        w.create_element("w:rPrDefault").write_inner_content(|w| -> XmlResult {
            w.create_element("w:rPr").write_inner_content(|w| -> XmlResult {
                w.create_element("w:rFonts")
                    .with_attribute(("w:ascii", "Calibri"))
                    .with_attribute(("w:hAnsi", "Calibri"))
                    .with_attribute(("w:eastAsia", "Calibri"))
                    .with_attribute(("w:cs", "Calibri"))
                    .write_empty()?;
                val_element(w, "w:sz", "22")?;
                val_element(w, "w:szCs", "22")?;
                val_element(w, "w:lang", "es-ES")?;
                Ok(())
            })?;
            Ok(())
        })?;
        w.create_element("w:pPrDefault").write_inner_content(|w| -> XmlResult {
            w.create_element("w:pPr").write_inner_content(|w| -> XmlResult {
                w.create_element("w:spacing")
                    .with_attribute(("w:after", "160"))
                    .with_attribute(("w:line", "259"))
                    .with_attribute(("w:lineRule", "auto"))
                    .write_empty()?;
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })?;
    Ok(())
}

fn write_style(w: &mut XmlWriter, style: &Style) -> XmlResult {
    let mut element = w
        .create_element("w:style")
        .with_attribute(("w:type", style.kind.as_ooxml()));
    if style.id == NORMAL_STYLE {
        element = element.with_attribute(("w:default", "1"));
    }
    if style.custom {
        element = element.with_attribute(("w:customStyle", "1"));
    }

    element
        .with_attribute(("w:styleId", style.id.as_str()))
        .write_inner_content(|w| -> XmlResult {
            val_element(w, "w:name", &style.name)?;
            if let Some(based_on) = &style.based_on {
                val_element(w, "w:basedOn", based_on)?;
            }
            if let Some(next) = &style.next {
                val_element(w, "w:next", next)?;
            }
            w.create_element("w:qFormat").write_empty()?;

            match style.kind {
                StyleKind::Paragraph => {
                    if style.outline_level.is_some() || !style.paragraph_format.is_empty() {
                        w.create_element("w:pPr").write_inner_content(|w| -> XmlResult {
                            if style.outline_level.is_some() {
                                w.create_element("w:keepNext").write_empty()?;
                            }
                            write_paragraph_format(w, &style.paragraph_format)?;
                            if let Some(level) = style.outline_level {
                                val_element(w, "w:outlineLvl", &level.to_string())?;
                            }
                            Ok(())
                        })?;
                    }
                    if !style.font.is_empty() {
                        w.create_element("w:rPr").write_inner_content(|w| write_font(w, &style.font))?;
                    }
                }
                StyleKind::Table => {
                    if style.table_borders {
                        w.create_element("w:tblPr").write_inner_content(|w| -> XmlResult {
                            w.create_element("w:tblBorders").write_inner_content(|w| -> XmlResult {
                                for edge in ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"] {
                                    w.create_element(edge)
                                        .with_attribute(("w:val", "single"))
                                        .with_attribute(("w:sz", "4"))
                                        .with_attribute(("w:space", "0"))
                                        .with_attribute(("w:color", "auto"))
                                        .write_empty()?;
                                }
                                Ok(())
                            })?;
                            Ok(())
                        })?;
                    }
                }
            }
            Ok(())
        })?;
    Ok(())
}

fn core_props_xml(doc: &Document) -> Result<Vec<u8>, DocxError> {
    let props = doc.properties();
    let timestamp = props.created.to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut writer = new_writer()?;
    writer
        .create_element("cp:coreProperties")
        .with_attribute(("xmlns:cp", CORE_PROPS_NS))
        .with_attribute(("xmlns:dc", "http://purl.org/dc/elements/1.1/"))
        .with_attribute(("xmlns:dcterms", "http://purl.org/dc/terms/"))
        .with_attribute(("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"))
        .with_attribute(("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"))
        .write_inner_content(|w| -> XmlResult {
            w.create_element("dc:title").write_text_content(BytesText::new(&props.title))?;
            w.create_element("dc:subject").write_text_content(BytesText::new(&props.subject))?;
            w.create_element("dc:creator").write_text_content(BytesText::new(&props.creator))?;
            for name in ["dcterms:created", "dcterms:modified"] {
                w.create_element(name)
                    .with_attribute(("xsi:type", "dcterms:W3CDTF"))
                    .write_text_content(BytesText::new(&timestamp))?;
            }
            Ok(())
        })?;
    Ok(writer.into_inner())
}

fn app_props_xml() -> Result<Vec<u8>, DocxError> {
    let mut writer = new_writer()?;
    writer
        .create_element("Properties")
        .with_attribute(("xmlns", EXT_PROPS_NS))
        .write_inner_content(|w| -> XmlResult {
            w.create_element("Application")
                .write_text_content(BytesText::new(env!("CARGO_PKG_NAME")))?;
            Ok(())
        })?;
    Ok(writer.into_inner())
}
