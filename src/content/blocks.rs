/*!
 * Reusable content blocks: section headers, lists, code and text diagrams.
 *
 * Each helper appends paragraphs to the document in the visual style used by
 * the rest of the architecture document.
 */

use super::styles::{CODE_STYLE, PRIMARY_BLUE, SUBTITLE_STYLE};
use crate::docx::{Document, Length, HEADING_3_STYLE, HEADING_4_STYLE};
use crate::errors::DocxError;

/// Layer diagram of the application, one line per paragraph
pub const ARCHITECTURE_DIAGRAM: [&str; 13] = [
    "┌─────────────────────────────────────────┐",
    "│              PRESENTATION               │",
    "│         (UI Components & Screens)       │",
    "├─────────────────────────────────────────┤",
    "│               BUSINESS                  │",
    "│         (Controllers & Logic)           │",
    "├─────────────────────────────────────────┤",
    "│                 DATA                    │",
    "│      (Repositories & Data Sources)      │",
    "├─────────────────────────────────────────┤",
    "│              EXTERNAL                   │",
    "│         (APIs & Local Storage)          │",
    "└─────────────────────────────────────────┘",
];

/// Message round trip from the input bar to the history store
pub const FLOW_STEPS: [&str; 9] = [
    "1. Usuario escribe → InputBar",
    "2. InputBar → ChatController.send()",
    "3. ChatController → ChatRepository.ask()",
    "4. ChatRepository → ApiClient.sendMessage()",
    "5. ApiClient → HTTP Request → Backend",
    "6. Backend → Response → ApiClient",
    "7. ApiClient → StreamingService (opcional)",
    "8. StreamingService → UI Update",
    "9. UI Update → HistoryService.save()",
];

/// Section heading, optional description and a spacer paragraph
pub fn create_section(doc: &mut Document, title: &str, description: &str) -> Result<(), DocxError> {
    doc.add_paragraph(title, Some(SUBTITLE_STYLE))?;
    if !description.is_empty() {
        doc.add_paragraph(description, None)?;
    }
    doc.add_paragraph("", None)?;
    Ok(())
}

/// One indented paragraph per item
pub fn create_bullet_list(doc: &mut Document, items: &[&str]) -> Result<(), DocxError> {
    for item in items {
        let paragraph = doc.add_paragraph(item, None)?;
        paragraph.format.left_indent = Some(Length::inches(0.25));
    }
    Ok(())
}

/// Trimmed text, one CodeBlock paragraph per line
pub fn create_code_block(doc: &mut Document, code: &str) -> Result<(), DocxError> {
    for line in code.trim().split('\n') {
        doc.add_paragraph(line, Some(CODE_STYLE))?;
    }
    Ok(())
}

pub fn create_architecture_diagram(doc: &mut Document) -> Result<(), DocxError> {
    for line in ARCHITECTURE_DIAGRAM {
        doc.add_paragraph(line, Some(CODE_STYLE))?;
    }
    Ok(())
}

pub fn create_flow_diagram(doc: &mut Document) -> Result<(), DocxError> {
    for step in FLOW_STEPS {
        let paragraph = doc.add_paragraph(step, Some(CODE_STYLE))?;
        paragraph.format.left_indent = Some(Length::inches(0.25));
    }
    Ok(())
}

/// Heading plus one "name: description" line per component, name in bold blue
pub fn create_component_section(
    doc: &mut Document,
    section_title: &str,
    components: &[(&str, &str)],
) -> Result<(), DocxError> {
    doc.add_paragraph(&format!("📦 {}", section_title), Some(HEADING_3_STYLE))?;

    for (name, description) in components {
        let paragraph = doc.add_paragraph("", None)?;
        paragraph
            .add_run(&format!("{}: ", name))
            .set_bold(true)
            .set_color(PRIMARY_BLUE);
        paragraph.add_run(description);
    }
    Ok(())
}

/// Small heading used for sub-topics inside a section
pub fn create_topic(doc: &mut Document, title: &str) -> Result<(), DocxError> {
    doc.add_paragraph(title, Some(HEADING_4_STYLE))?;
    Ok(())
}
