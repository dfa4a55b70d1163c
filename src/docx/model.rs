/*!
 * In-memory model of a WordprocessingML document.
 *
 * The model only covers what the generator needs: paragraph and table styles,
 * paragraphs made of runs, simple grid tables and page breaks. Measurements are
 * stored in the units Word itself uses so that serialization is a direct copy.
 */

use chrono::{DateTime, Utc};

use crate::errors::DocxError;

/// Style id of the default paragraph style
pub const NORMAL_STYLE: &str = "Normal";

/// Style id of the built-in third level heading
pub const HEADING_3_STYLE: &str = "Heading3";

/// Style id of the built-in fourth level heading
pub const HEADING_4_STYLE: &str = "Heading4";

/// Style id of the built-in bordered table style
pub const TABLE_GRID_STYLE: &str = "TableGrid";

/// A distance, stored in twentieths of a point (twips)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Length(i32);

impl Length {
    /// Twips per typographic point
    const TWIPS_PER_PT: f32 = 20.0;

    /// Twips per inch
    const TWIPS_PER_INCH: f32 = 1440.0;

    /// Length from points
    pub fn pt(points: f32) -> Self {
        Self((points * Self::TWIPS_PER_PT).round() as i32)
    }

    /// Length from inches
    pub fn inches(inches: f32) -> Self {
        Self((inches * Self::TWIPS_PER_INCH).round() as i32)
    }

    /// Value in twips, used for spacing and indentation
    pub fn twips(&self) -> i32 {
        self.0
    }

    /// Value in half-points, used for font sizes
    pub fn half_points(&self) -> i32 {
        self.0 / 10
    }
}

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    /// Hex form without leading '#', as written in `w:color`
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

impl Alignment {
    // @returns: Value of the `w:jc` element
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

/// Character formatting; unset fields inherit from the style chain
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    pub name: Option<String>,
    pub size: Option<Length>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub color: Option<RgbColor>,
}

impl Font {
    /// Whether any property is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.color.is_none()
    }
}

/// Paragraph formatting; unset fields inherit from the style chain
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParagraphFormat {
    pub alignment: Option<Alignment>,
    pub space_before: Option<Length>,
    pub space_after: Option<Length>,
    pub left_indent: Option<Length>,
}

impl ParagraphFormat {
    /// Whether any property is set
    pub fn is_empty(&self) -> bool {
        self.alignment.is_none()
            && self.space_before.is_none()
            && self.space_after.is_none()
            && self.left_indent.is_none()
    }
}

/// Kind of style, as stored in `w:style/@w:type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    Paragraph,
    Table,
}

impl StyleKind {
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Table => "table",
        }
    }
}

/// A named style definition
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Identifier referenced from paragraphs and tables
    pub id: String,

    /// Name shown in the Word style gallery
    pub name: String,

    pub kind: StyleKind,

    /// Parent style id
    pub based_on: Option<String>,

    /// Style applied to the paragraph that follows
    pub next: Option<String>,

    pub font: Font,

    pub paragraph_format: ParagraphFormat,

    /// Outline level (0-based) for headings, used by Word's navigation pane
    pub outline_level: Option<u8>,

    /// Whether the style is user-defined rather than a built-in
    pub custom: bool,

    /// Draw single borders around every cell (table styles only)
    pub table_borders: bool,
}

impl Style {
    fn new(id: &str, kind: StyleKind) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            kind,
            based_on: None,
            next: None,
            font: Font::default(),
            paragraph_format: ParagraphFormat::default(),
            outline_level: None,
            custom: true,
            table_borders: false,
        }
    }
}

/// Ordered collection of styles, keyed by style id
#[derive(Debug, Clone, Default)]
pub struct Styles {
    styles: Vec<Style>,
}

impl Styles {
    /// Style sheet with the built-in styles every document starts with
    pub fn with_builtins() -> Self {
        let mut normal = Style::new(NORMAL_STYLE, StyleKind::Paragraph);
        normal.custom = false;

        let mut heading_3 = Style::new(HEADING_3_STYLE, StyleKind::Paragraph);
        heading_3.name = "heading 3".to_string();
        heading_3.custom = false;
        heading_3.based_on = Some(NORMAL_STYLE.to_string());
        heading_3.next = Some(NORMAL_STYLE.to_string());
        heading_3.outline_level = Some(2);
        heading_3.font.bold = Some(true);
        heading_3.font.color = Some(RgbColor(79, 129, 189));
        heading_3.paragraph_format.space_before = Some(Length::pt(10.0));

        let mut heading_4 = heading_3.clone();
        heading_4.id = HEADING_4_STYLE.to_string();
        heading_4.name = "heading 4".to_string();
        heading_4.outline_level = Some(3);
        heading_4.font.italic = Some(true);

        let mut table_grid = Style::new(TABLE_GRID_STYLE, StyleKind::Table);
        table_grid.name = "Table Grid".to_string();
        table_grid.custom = false;
        table_grid.table_borders = true;

        Self {
            styles: vec![normal, heading_3, heading_4, table_grid],
        }
    }

    /// Register a new style and return it for configuration
    pub fn add_style(&mut self, id: &str, kind: StyleKind) -> Result<&mut Style, DocxError> {
        if self.contains(id) {
            return Err(DocxError::DuplicateStyle(id.to_string()));
        }

        let mut style = Style::new(id, kind);
        if kind == StyleKind::Paragraph {
            style.based_on = Some(NORMAL_STYLE.to_string());
        }
        self.styles.push(style);

        let last = self.styles.len() - 1;
        Ok(&mut self.styles[last])
    }

    pub fn get(&self, id: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Fail unless `id` names a style of the given kind
    fn require(&self, id: &str, kind: StyleKind) -> Result<(), DocxError> {
        match self.get(id) {
            Some(style) if style.kind == kind => Ok(()),
            _ => Err(DocxError::UnknownStyle(id.to_string())),
        }
    }
}

/// A span of text with uniform character formatting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: Option<bool>,
    pub color: Option<RgbColor>,
}

impl Run {
    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.bold = Some(bold);
        self
    }

    pub fn set_color(&mut self, color: RgbColor) -> &mut Self {
        self.color = Some(color);
        self
    }
}

/// A block of runs sharing one paragraph style
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Append a run and return it for formatting
    pub fn add_run(&mut self, text: &str) -> &mut Run {
        self.runs.push(Run {
            text: text.to_string(),
            ..Run::default()
        });
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn format_mut(&mut self) -> &mut ParagraphFormat {
        &mut self.format
    }
}

/// Fixed-size grid of plain-text cells
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub style: Option<String>,
    rows: usize,
    cols: usize,
    cells: Vec<String>,
}

impl Table {
    fn new(rows: usize, cols: usize, style: Option<String>) -> Self {
        Self {
            style,
            rows,
            cols,
            cells: vec![String::new(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&str, DocxError> {
        let index = self.index(row, col)?;
        Ok(&self.cells[index])
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut String, DocxError> {
        let index = self.index(row, col)?;
        Ok(&mut self.cells[index])
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[String] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, DocxError> {
        if row >= self.rows || col >= self.cols {
            return Err(DocxError::CellOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

/// Top-level body content
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    PageBreak,
}

/// Package metadata written to `docProps/core.xml`
#[derive(Debug, Clone)]
pub struct CoreProperties {
    pub title: String,
    pub subject: String,
    pub creator: String,
    pub created: DateTime<Utc>,
}

impl Default for CoreProperties {
    fn default() -> Self {
        Self {
            title: String::new(),
            subject: String::new(),
            creator: String::new(),
            created: Utc::now(),
        }
    }
}

/// A Word document under construction
#[derive(Debug, Clone)]
pub struct Document {
    styles: Styles,
    body: Vec<Block>,
    properties: CoreProperties,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document with the built-in styles
    pub fn new() -> Self {
        Self {
            styles: Styles::with_builtins(),
            body: Vec::new(),
            properties: CoreProperties::default(),
        }
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut Styles {
        &mut self.styles
    }

    pub fn properties(&self) -> &CoreProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut CoreProperties {
        &mut self.properties
    }

    /// Append a paragraph; empty text gives a paragraph with no runs
    pub fn add_paragraph(&mut self, text: &str, style: Option<&str>) -> Result<&mut Paragraph, DocxError> {
        if let Some(id) = style {
            self.styles.require(id, StyleKind::Paragraph)?;
        }

        let mut paragraph = Paragraph {
            style: style.map(str::to_string),
            ..Paragraph::default()
        };
        if !text.is_empty() {
            paragraph.add_run(text);
        }

        self.body.push(Block::Paragraph(paragraph));
        match self.body.last_mut() {
            Some(Block::Paragraph(p)) => Ok(p),
            _ => unreachable!("paragraph was just pushed"),
        }
    }

    /// Append an empty `rows` x `cols` table
    pub fn add_table(&mut self, rows: usize, cols: usize, style: Option<&str>) -> Result<&mut Table, DocxError> {
        if let Some(id) = style {
            self.styles.require(id, StyleKind::Table)?;
        }

        self.body.push(Block::Table(Table::new(rows, cols, style.map(str::to_string))));
        match self.body.last_mut() {
            Some(Block::Table(t)) => Ok(t),
            _ => unreachable!("table was just pushed"),
        }
    }

    pub fn add_page_break(&mut self) {
        self.body.push(Block::PageBreak);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.body
    }

    /// Body paragraphs in document order, skipping tables and breaks
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }
}
