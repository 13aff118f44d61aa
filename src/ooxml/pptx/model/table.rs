//! Table shape.

use super::shape::ShapeProps;
use super::style::{Border, Fill};
use super::text::{Hyperlink, Paragraph, VerticalAlignment};

/// The six edges of a table cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellBorders {
    pub left: Border,
    pub right: Border,
    pub top: Border,
    pub bottom: Border,
    pub diagonal_down: Border,
    pub diagonal_up: Border,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    /// Width in pixels; 0 lets the grid share the table width evenly
    pub width: f64,
    pub col_span: u32,
    pub row_span: u32,
    pub borders: CellBorders,
    pub fill: Fill,
    pub paragraphs: Vec<Paragraph>,
}

impl Default for TableCell {
    fn default() -> Self {
        Self {
            width: 0.0,
            col_span: 1,
            row_span: 1,
            borders: CellBorders::default(),
            fill: Fill::None,
            paragraphs: vec![Paragraph::new()],
        }
    }
}

impl TableCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell holding a single run of text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::from_text(text)],
            ..Self::default()
        }
    }

    pub fn with_col_span(mut self, col_span: u32) -> Self {
        self.col_span = col_span;
        self
    }

    pub fn with_row_span(mut self, row_span: u32) -> Self {
        self.row_span = row_span;
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_borders(mut self, borders: CellBorders) -> Self {
        self.borders = borders;
        self
    }

    /// Anchor of the cell's text, taken from the first paragraph.
    pub fn anchor(&self) -> Option<VerticalAlignment> {
        self.paragraphs
            .first()
            .map(|p| p.alignment.vertical)
            .filter(|v| v.is_anchor())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Height in pixels
    pub height: f64,
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(height: f64, cells: Vec<TableCell>) -> Self {
        Self { height, cells }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub props: ShapeProps,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(props: ShapeProps) -> Self {
        Self {
            props,
            rows: Vec::new(),
        }
    }

    /// Table with a `rows` x `columns` grid of empty cells.
    pub fn with_grid(props: ShapeProps, rows: usize, columns: usize) -> Self {
        let row_height = if rows == 0 { 0.0 } else { props.height / rows as f64 };
        let rows = (0..rows)
            .map(|_| TableRow::new(row_height, vec![TableCell::new(); columns]))
            .collect();
        Self { props, rows }
    }

    pub fn with_row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Column count, taken from the first row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.rows.get(row)?.cells.get(column)
    }

    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row)?.cells.get_mut(column)
    }

    /// Run hyperlinks in every cell, row-major.
    pub fn hyperlinks_mut(&mut self) -> impl Iterator<Item = &mut Hyperlink> {
        self.rows
            .iter_mut()
            .flat_map(|row| row.cells.iter_mut())
            .flat_map(|cell| cell.paragraphs.iter_mut())
            .flat_map(|paragraph| paragraph.hyperlinks_mut())
    }
}
