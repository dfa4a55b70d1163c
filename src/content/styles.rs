//! Custom paragraph styles used throughout the architecture document.

use crate::docx::{Alignment, Document, Length, RgbColor, StyleKind};
use crate::errors::DocxError;

/// Large centered blue title
pub const TITLE_STYLE: &str = "CustomTitle";

/// Red section heading
pub const SUBTITLE_STYLE: &str = "CustomSubtitle";

/// Monospaced, indented line of code or diagram
pub const CODE_STYLE: &str = "CodeBlock";

/// Primary blue
pub const PRIMARY_BLUE: RgbColor = RgbColor(21, 101, 192);

/// Primary red
pub const PRIMARY_RED: RgbColor = RgbColor(211, 47, 47);

/// Register the custom styles on a fresh document
pub fn register_styles(doc: &mut Document) -> Result<(), DocxError> {
    let styles = doc.styles_mut();

    let title = styles.add_style(TITLE_STYLE, StyleKind::Paragraph)?;
    title.font.name = Some("Arial".to_string());
    title.font.size = Some(Length::pt(24.0));
    title.font.bold = Some(true);
    title.font.color = Some(PRIMARY_BLUE);
    title.paragraph_format.alignment = Some(Alignment::Center);
    title.paragraph_format.space_after = Some(Length::pt(12.0));

    let subtitle = styles.add_style(SUBTITLE_STYLE, StyleKind::Paragraph)?;
    subtitle.font.name = Some("Arial".to_string());
    subtitle.font.size = Some(Length::pt(18.0));
    subtitle.font.bold = Some(true);
    subtitle.font.color = Some(PRIMARY_RED);
    subtitle.paragraph_format.space_before = Some(Length::pt(12.0));
    subtitle.paragraph_format.space_after = Some(Length::pt(6.0));

    let code = styles.add_style(CODE_STYLE, StyleKind::Paragraph)?;
    code.font.name = Some("Courier New".to_string());
    code.font.size = Some(Length::pt(10.0));
    code.paragraph_format.left_indent = Some(Length::inches(0.5));

    Ok(())
}
