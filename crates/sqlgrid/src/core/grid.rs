//! Grid container: column headers plus positionally aligned rows.
//!
//! Grids are built through a [`GridBuilder`] using the streaming protocol a
//! result cursor drives (add headers, start a row, add values left to right)
//! and then frozen into a read-only [`Grid`].

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

use super::value::SqlValue;
use super::value_type::ValueType;

/// Metadata for one grid column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridHeader {
    /// Display label.
    pub label: String,

    /// Programmatic column name.
    pub name: String,

    /// Logical kind of the column's values.
    pub value_type: ValueType,

    /// Excluded from default rendering.
    #[serde(default)]
    pub hidden: bool,

    /// Metadata column, excluded from analysis.
    #[serde(default)]
    pub meta: bool,
}

impl GridHeader {
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        value_type: ValueType,
        hidden: bool,
        meta: bool,
    ) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            value_type,
            hidden,
            meta,
        }
    }

    /// A header that is neither hidden nor meta.
    pub fn visible(label: impl Into<String>, name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(label, name, value_type, false, false)
    }

    /// Check if the header participates in default rendering.
    pub fn is_visible(&self) -> bool {
        !self.hidden && !self.meta
    }
}

/// A row of cells aligned with the grid headers.
pub type GridRow = Vec<SqlValue<'static>>;

/// Mutable grid under construction.
#[derive(Debug, Clone, Default)]
pub struct GridBuilder {
    headers: Vec<GridHeader>,
    rows: Vec<GridRow>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column header.
    pub fn add_header(&mut self, header: GridHeader) -> &mut Self {
        self.headers.push(header);
        self
    }

    /// Start a new, empty row. Subsequent values go into this row.
    pub fn add_row(&mut self) -> &mut Self {
        self.rows.push(Vec::with_capacity(self.headers.len()));
        self
    }

    /// Append a value as the next cell of the current row.
    pub fn add_value(&mut self, value: impl Into<SqlValue<'static>>) -> Result<()> {
        let row = self.rows.last_mut().ok_or(GridError::NoCurrentRow)?;
        row.push(value.into());
        Ok(())
    }

    /// Start a row and fill it with the given values.
    pub fn add_row_values<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue<'static>>,
    {
        self.rows.push(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Freeze into a read-only grid.
    ///
    /// When the grid has headers, every row must hold exactly one value per
    /// header.
    pub fn finish(self) -> Result<Grid> {
        let expected = self.headers.len();
        if expected > 0 {
            if let Some((row, cells)) = self
                .rows
                .iter()
                .enumerate()
                .find(|(_, cells)| cells.len() != expected)
            {
                return Err(GridError::Shape {
                    row,
                    expected,
                    actual: cells.len(),
                });
            }
        }

        Ok(Grid {
            headers: self.headers,
            rows: self.rows,
        })
    }
}

/// Read-only table of typed columns and row values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    headers: Vec<GridHeader>,
    rows: Vec<GridRow>,
}

impl Grid {
    /// Start building a grid.
    pub fn builder() -> GridBuilder {
        GridBuilder::new()
    }

    pub fn headers(&self) -> &[GridHeader] {
        &self.headers
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Check if the grid has neither headers nor rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    pub fn header(&self, col: usize) -> Option<&GridHeader> {
        self.headers.get(col)
    }

    /// Position of the first header with the given programmatic name.
    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.name == name)
    }

    /// Headers that are neither hidden nor meta.
    pub fn visible_headers(&self) -> impl Iterator<Item = &GridHeader> {
        self.headers.iter().filter(|h| h.is_visible())
    }

    pub fn row(&self, row: usize) -> Option<&[SqlValue<'static>]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn value(&self, row: usize, col: usize) -> Option<&SqlValue<'static>> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    /// Values of one column, in row order.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &SqlValue<'static>> {
        self.rows.iter().filter_map(move |cells| cells.get(col))
    }
}
