/*!
 * Content of the ChatBot RAG Flutter architecture document.
 *
 * The document is assembled in a single pass:
 * - `styles`: custom paragraph styles
 * - `cover`: cover page and table of contents
 * - `body`: the main sections
 * - `blocks`: helpers shared by the sections
 */

pub mod blocks;
pub mod body;
pub mod cover;
pub mod styles;

use chrono::{NaiveDate, Utc};
use log::debug;

use crate::app_config::ProjectInfo;
use crate::docx::Document;
use crate::errors::DocxError;

/// Title stored in the document properties
pub const DOCUMENT_TITLE: &str = "ChatBot RAG Flutter - Arquitectura";

/// Build the complete architecture document, dated `date`
pub fn build_document(project: &ProjectInfo, date: NaiveDate) -> Result<Document, DocxError> {
    let mut doc = Document::new();

    let properties = doc.properties_mut();
    properties.title = DOCUMENT_TITLE.to_string();
    properties.subject = "Documentación Técnica de Arquitectura".to_string();
    properties.creator = project.author.clone();
    properties.created = Utc::now();

    styles::register_styles(&mut doc)?;
    debug!("Styles registered");

    cover::create_cover_page(&mut doc, project, date)?;
    debug!("Cover page written");

    cover::create_table_of_contents(&mut doc)?;
    debug!("Table of contents written");

    body::create_main_content(&mut doc)?;

    Ok(doc)
}
