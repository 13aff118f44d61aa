//! Table frames.
//!
//! Besides the grid markup this module owns two pieces of per-table state:
//! the effective border of each cell edge ([`resolve_cell_borders`]) and the
//! horizontal/vertical merge counters ([`SpanTracker`]).

use crate::common::unit::px_to_emu;
use crate::common::xml::XmlWriter;
use crate::ooxml::error::{Result, SlideError};
use crate::ooxml::opc::constants::graphic_data;
use crate::ooxml::pptx::model::{Border, Table, TableCell};
use crate::ooxml::pptx::writer::options::WriterOptions;
use crate::ooxml::pptx::writer::paragraph::write_text_body_paragraphs;
use crate::ooxml::pptx::writer::shape::{write_non_visual_props, write_transform};
use crate::ooxml::pptx::writer::style::{write_border, write_fill};

/// Borders to draw for one cell, after neighbour resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBorders<'a> {
    pub left: &'a Border,
    pub right: &'a Border,
    pub top: &'a Border,
    pub bottom: &'a Border,
    pub diagonal_down: &'a Border,
    pub diagonal_up: &'a Border,
}

impl<'a> ResolvedBorders<'a> {
    /// Edges in `a:tcPr` order, with their element suffix.
    pub fn edges(&self) -> [(&'static str, &'a Border); 6] {
        [
            ("L", self.left),
            ("R", self.right),
            ("T", self.top),
            ("B", self.bottom),
            ("TlToBr", self.diagonal_down),
            ("BlToTr", self.diagonal_up),
        ]
    }
}

/// Effective borders of the cell at (`row`, `column`).
///
/// `Border::default()` marks an edge as not explicitly set. When the cell to
/// the right has a right edge that differs from it, the right edge is taken
/// from that neighbour's left edge. The bottom edge is taken from the top edge
/// of the cell below under the same rule, keyed on that cell's bottom edge.
/// Left, top and both diagonals always come from the cell itself.
pub fn resolve_cell_borders(table: &Table, row: usize, column: usize) -> Option<ResolvedBorders<'_>> {
    let sentinel = Border::default();
    let cell = table.cell(row, column)?;
    let borders = &cell.borders;

    let right = match table.cell(row, column + 1) {
        Some(next) if next.borders.right != sentinel => &next.borders.left,
        _ => &borders.right,
    };
    let bottom = match table.cell(row + 1, column) {
        Some(below) if below.borders.bottom != sentinel => &below.borders.top,
        _ => &borders.bottom,
    };

    Some(ResolvedBorders {
        left: &borders.left,
        right,
        top: &borders.top,
        bottom,
        diagonal_down: &borders.diagonal_down,
        diagonal_up: &borders.diagonal_up,
    })
}

/// Merge state of one cell along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanState {
    /// Not part of a merge on this axis
    Single,
    /// First cell of a merge covering this many cells
    Start(u32),
    /// Covered by an earlier cell's span
    Merged,
}

impl SpanState {
    #[inline]
    pub fn is_merged(self) -> bool {
        self == Self::Merged
    }
}

/// Pending horizontal merges per row and vertical merges per column.
#[derive(Debug, Clone)]
pub struct SpanTracker {
    col_spans: Vec<u32>,
    row_spans: Vec<u32>,
}

impl SpanTracker {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            col_spans: vec![0; rows],
            row_spans: vec![0; columns],
        }
    }

    /// Horizontal state of `cell` in `row`. Cells must be visited left to right.
    pub fn horizontal(&mut self, row: usize, cell: &TableCell) -> SpanState {
        Self::advance(&mut self.col_spans[row], cell.col_span)
    }

    /// Vertical state of `cell` in `column`. Rows must be visited top to bottom.
    pub fn vertical(&mut self, column: usize, cell: &TableCell) -> SpanState {
        Self::advance(&mut self.row_spans[column], cell.row_span)
    }

    fn advance(pending: &mut u32, span: u32) -> SpanState {
        if span > 1 {
            *pending = span - 1;
            SpanState::Start(span)
        } else if *pending > 0 {
            *pending -= 1;
            SpanState::Merged
        } else {
            SpanState::Single
        }
    }
}

/// Check the grid shape and spans. Returns the column count.
pub fn validate_table(table: &Table) -> Result<usize> {
    let columns = table.column_count();
    if table.rows.is_empty() || columns == 0 {
        return Err(SlideError::EmptyTable);
    }

    let rows = table.rows.len();
    for (r, row) in table.rows.iter().enumerate() {
        if row.cells.len() != columns {
            return Err(SlideError::MalformedTable {
                row: r,
                expected: columns,
                found: row.cells.len(),
            });
        }
        for (c, cell) in row.cells.iter().enumerate() {
            let invalid = |reason: String| SlideError::InvalidSpan {
                row: r,
                column: c,
                reason,
            };
            if cell.col_span == 0 || cell.row_span == 0 {
                return Err(invalid("spans must be at least 1".to_string()));
            }
            if c + cell.col_span as usize > columns {
                return Err(invalid(format!(
                    "column span {} exceeds the {columns} column grid",
                    cell.col_span
                )));
            }
            if r + cell.row_span as usize > rows {
                return Err(invalid(format!(
                    "row span {} exceeds the {rows} row grid",
                    cell.row_span
                )));
            }
        }
    }

    Ok(columns)
}

/// Grid column widths in pixels. Zero-width columns share the table width.
pub fn column_widths(table: &Table) -> Vec<f64> {
    let Some(first) = table.rows.first() else {
        return Vec::new();
    };
    let even = table.props.width / first.cells.len() as f64;
    first
        .cells
        .iter()
        .map(|cell| if cell.width == 0.0 { even } else { cell.width })
        .collect()
}

/// Write a table as a `p:graphicFrame`.
pub fn write_table(xml: &mut XmlWriter, table: &Table, id: u32, options: &WriterOptions) -> Result<()> {
    let columns = validate_table(table)?;
    let props = &table.props;

    xml.start_element("p:graphicFrame")?;

    xml.start_element("p:nvGraphicFramePr")?;
    write_non_visual_props(xml, id, &props.name, Some(&props.description), props.hyperlink.as_ref())?;
    xml.start_element("p:cNvGraphicFramePr")?;
    xml.start_element("a:graphicFrameLocks")?;
    xml.write_attribute("noGrp", "1")?;
    xml.end_element()?;
    xml.end_element()?;
    xml.write_element("p:nvPr")?;
    xml.end_element()?;

    write_transform(xml, "p:xfrm", props, false)?;

    xml.start_element("a:graphic")?;
    xml.start_element("a:graphicData")?;
    xml.write_attribute("uri", graphic_data::TABLE)?;
    xml.start_element("a:tbl")?;

    xml.start_element("a:tblPr")?;
    xml.write_attribute("firstRow", "1")?;
    xml.write_attribute("bandRow", "1")?;
    xml.end_element()?;

    xml.start_element("a:tblGrid")?;
    for width in column_widths(table) {
        xml.start_element("a:gridCol")?;
        xml.write_int_attribute("w", px_to_emu(width))?;
        xml.end_element()?;
    }
    xml.end_element()?;

    let mut spans = SpanTracker::new(table.rows.len(), columns);
    for (r, row) in table.rows.iter().enumerate() {
        xml.start_element("a:tr")?;
        xml.write_int_attribute("h", px_to_emu(row.height))?;
        for (c, cell) in row.cells.iter().enumerate() {
            let horizontal = spans.horizontal(r, cell);
            let vertical = spans.vertical(c, cell);
            write_cell(xml, table, r, c, horizontal, vertical, options)?;
        }
        xml.end_element()?;
    }

    xml.end_element()?; // a:tbl
    xml.end_element()?; // a:graphicData
    xml.end_element()?; // a:graphic
    xml.end_element()
}

fn write_cell(
    xml: &mut XmlWriter,
    table: &Table,
    row: usize,
    column: usize,
    horizontal: SpanState,
    vertical: SpanState,
    options: &WriterOptions,
) -> Result<()> {
    let Some(cell) = table.cell(row, column) else {
        return Err(SlideError::MalformedModel(format!(
            "table cell ({row}, {column}) does not exist"
        )));
    };

    xml.start_element("a:tc")?;
    match horizontal {
        SpanState::Start(span) => xml.write_int_attribute("gridSpan", span)?,
        SpanState::Merged => xml.write_attribute("hMerge", "1")?,
        SpanState::Single => {},
    }
    match vertical {
        SpanState::Start(span) => xml.write_int_attribute("rowSpan", span)?,
        SpanState::Merged => xml.write_attribute("vMerge", "1")?,
        SpanState::Single => {},
    }

    // Covered cells keep a minimal body; the spanning cell draws the content.
    if horizontal.is_merged() || vertical.is_merged() {
        xml.start_element("a:txBody")?;
        xml.write_element("a:bodyPr")?;
        xml.write_element("a:lstStyle")?;
        xml.write_element("a:p")?;
        xml.end_element()?;
        xml.write_element("a:tcPr")?;
        return xml.end_element();
    }

    xml.start_element("a:txBody")?;
    xml.start_element("a:bodyPr")?;
    xml.write_attribute("wrap", "square")?;
    xml.write_attribute("rtlCol", "0")?;
    xml.write_element("a:spAutoFit")?;
    xml.end_element()?;
    xml.write_element("a:lstStyle")?;
    write_text_body_paragraphs(xml, &cell.paragraphs, options)?;
    xml.end_element()?;

    xml.start_element("a:tcPr")?;
    if let Some(anchor) = cell.anchor() {
        xml.write_attribute("anchor", anchor.as_str())?;
    }
    let borders = resolve_cell_borders(table, row, column).ok_or_else(|| {
        SlideError::MalformedModel(format!("table cell ({row}, {column}) does not exist"))
    })?;
    for (suffix, border) in borders.edges() {
        write_border(xml, border, suffix)?;
    }
    write_fill(xml, &cell.fill)?;
    xml.end_element()?;

    xml.end_element()
}
