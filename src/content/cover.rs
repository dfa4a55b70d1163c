/*!
 * Cover page and table of contents.
 */

use chrono::{Datelike, NaiveDate};

use super::styles::{SUBTITLE_STYLE, TITLE_STYLE};
use crate::app_config::ProjectInfo;
use crate::docx::{Alignment, Document, Length, TABLE_GRID_STYLE};
use crate::errors::DocxError;

const SPANISH_MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

/// Entries of the table of contents, in reading order
pub const TOC_ITEMS: [&str; 14] = [
    "1. Resumen Ejecutivo",
    "2. Arquitectura General",
    "3. Componentes del Sistema",
    "4. Flujo de Datos",
    "5. Estructura de Archivos",
    "6. Patrones de Diseño",
    "7. Gestión de Estado",
    "8. Configuración y Entornos",
    "9. Interfaz de Usuario",
    "10. Servicios y APIs",
    "11. Consideraciones Técnicas",
    "12. Dependencias",
    "13. Deployment",
    "14. Conclusiones",
];

/// Long Spanish date, e.g. "05 de marzo de 2025"
pub fn format_spanish_date(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {}",
        date.day(),
        SPANISH_MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Title, subtitle and the project facts table, followed by a page break
pub fn create_cover_page(doc: &mut Document, project: &ProjectInfo, date: NaiveDate) -> Result<(), DocxError> {
    let title = doc.add_paragraph("📱 CHATBOT RAG FLUTTER", Some(TITLE_STYLE))?;
    title.format.space_after = Some(Length::pt(24.0));

    let subtitle = doc.add_paragraph("Documentación Técnica de Arquitectura", Some(SUBTITLE_STYLE))?;
    subtitle.format.alignment = Some(Alignment::Center);
    subtitle.format.space_after = Some(Length::pt(36.0));

    let date = format_spanish_date(date);
    let info = [
        ("📊 Proyecto:", project.name.as_str()),
        ("🏗️ Arquitectura:", project.architecture.as_str()),
        ("🎯 Tecnología:", project.technology.as_str()),
        ("📅 Fecha:", date.as_str()),
        ("🔧 Versión:", project.version.as_str()),
        ("👨‍💻 Autor:", project.author.as_str()),
    ];

    let table = doc.add_table(info.len(), 2, Some(TABLE_GRID_STYLE))?;
    for (row, (label, value)) in info.iter().enumerate() {
        *table.cell_mut(row, 0)? = label.to_string();
        *table.cell_mut(row, 1)? = value.to_string();
    }

    doc.add_page_break();
    Ok(())
}

/// Static index page, followed by a page break
pub fn create_table_of_contents(doc: &mut Document) -> Result<(), DocxError> {
    doc.add_paragraph("📋 ÍNDICE", Some(TITLE_STYLE))?;

    for item in TOC_ITEMS {
        let entry = doc.add_paragraph(item, None)?;
        entry.format.left_indent = Some(Length::inches(0.25));
        entry.format.space_after = Some(Length::pt(6.0));
    }

    doc.add_page_break();
    Ok(())
}
