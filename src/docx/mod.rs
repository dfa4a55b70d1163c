/*!
 * Minimal WordprocessingML (.docx) authoring.
 *
 * - `model`: styles, paragraphs, runs, tables and the `Document` container
 * - `writer`: OPC packaging of a `Document` (zip + XML parts)
 */

pub mod model;
pub mod writer;

pub use model::{
    Alignment, Block, CoreProperties, Document, Font, Length, Paragraph, ParagraphFormat, RgbColor, Run, Style,
    StyleKind, Styles, Table, HEADING_3_STYLE, HEADING_4_STYLE, NORMAL_STYLE, TABLE_GRID_STYLE,
};
