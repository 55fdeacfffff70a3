//! Building grids from relational result sets.
//!
//! The [`ResultCursor`] trait is the capability a relational driver has to
//! offer: column metadata plus forward-only row iteration. [`grid_from_cursor`]
//! drains a cursor into a [`Grid`], classifying each column through the
//! type-code table.

mod memory;
mod types;

pub use memory::{CursorError, MemoryCursor};
pub use types::*;

use tracing::{debug, trace};

use crate::core::{Grid, GridBuilder, SqlValue};
use crate::error::{GridError, Result};

/// Forward-only reader over a relational query result.
///
/// Column indices are zero-based. A freshly opened cursor is positioned
/// before the first row; [`advance`](ResultCursor::advance) must return
/// `true` before [`value_at`](ResultCursor::value_at) is valid.
pub trait ResultCursor {
    /// Driver error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Number of columns in the result.
    fn column_count(&mut self) -> std::result::Result<usize, Self::Error>;

    /// Display label of a column.
    fn column_label(&mut self, index: usize) -> std::result::Result<String, Self::Error>;

    /// Programmatic name of a column.
    fn column_name(&mut self, index: usize) -> std::result::Result<String, Self::Error>;

    /// Relational type code of a column.
    fn column_type(&mut self, index: usize) -> std::result::Result<i32, Self::Error>;

    /// Move to the next row. Returns `false` once the result is exhausted.
    fn advance(&mut self) -> std::result::Result<bool, Self::Error>;

    /// Value of a column in the current row.
    fn value_at(&mut self, index: usize) -> std::result::Result<SqlValue<'static>, Self::Error>;

    /// Read all column metadata.
    ///
    /// This is a template method with a default implementation that calls
    /// the individual metadata accessors once per column.
    fn columns(&mut self) -> Result<Vec<ColumnMeta>> {
        let count = self
            .column_count()
            .map_err(|e| GridError::data_access("reading column count", e))?;

        let mut columns = Vec::with_capacity(count);
        for i in 0..count {
            let label = self
                .column_label(i)
                .map_err(|e| GridError::data_access(format!("reading label of column {}", i), e))?;
            let name = self
                .column_name(i)
                .map_err(|e| GridError::data_access(format!("reading name of column {}", i), e))?;
            let sql_type = self
                .column_type(i)
                .map_err(|e| GridError::data_access(format!("reading type of column {}", i), e))?;
            columns.push(ColumnMeta::new(label, name, sql_type));
        }

        Ok(columns)
    }
}

/// Build a grid from a result cursor.
///
/// Reads the column metadata once, adds one visible header per column, then
/// copies every remaining row value by value. The cursor is consumed and not
/// rewound. On failure the partially built grid is dropped.
pub fn grid_from_cursor<C>(cursor: &mut C) -> Result<Grid>
where
    C: ResultCursor + ?Sized,
{
    let columns = cursor.columns()?;

    let mut builder = GridBuilder::new();
    for column in &columns {
        let header = column.to_header();
        trace!(
            "Column {} ({}): type code {} -> {}",
            header.label,
            header.name,
            column.sql_type,
            header.value_type
        );
        builder.add_header(header);
    }
    debug!("Reading result set with {} columns", columns.len());

    let width = columns.len();
    let mut row_no = 0usize;
    while cursor
        .advance()
        .map_err(|e| GridError::data_access(format!("advancing to row {}", row_no), e))?
    {
        builder.add_row();
        for i in 0..width {
            let value = cursor.value_at(i).map_err(|e| {
                GridError::data_access(format!("reading column {} of row {}", i, row_no), e)
            })?;
            builder.add_value(value)?;
        }
        row_no += 1;
    }

    debug!("Built grid with {} columns and {} rows", width, row_no);
    builder.finish()
}

impl Grid {
    /// Build a grid from a result cursor. See [`grid_from_cursor`].
    pub fn from_cursor<C>(cursor: &mut C) -> Result<Grid>
    where
        C: ResultCursor + ?Sized,
    {
        grid_from_cursor(cursor)
    }
}
