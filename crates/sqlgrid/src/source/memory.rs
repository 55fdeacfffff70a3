//! In-memory result cursor.

use std::collections::VecDeque;

use thiserror::Error;

use crate::core::SqlValue;

use super::{ColumnMeta, ResultCursor};

/// Errors raised by [`MemoryCursor`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("column index {index} out of range ({count} columns)")]
    ColumnOutOfRange { index: usize, count: usize },

    #[error("cursor is not positioned on a row")]
    NoCurrentRow,
}

/// A [`ResultCursor`] over rows already held in memory.
///
/// Rows are handed out in insertion order. Short rows read as NULL past
/// their end.
#[derive(Debug, Clone, Default)]
pub struct MemoryCursor {
    columns: Vec<ColumnMeta>,
    pending: VecDeque<Vec<SqlValue<'static>>>,
    current: Option<Vec<SqlValue<'static>>>,
}

impl MemoryCursor {
    pub fn new(columns: Vec<ColumnMeta>) -> Self {
        Self {
            columns,
            pending: VecDeque::new(),
            current: None,
        }
    }

    /// Append a row to the end of the result.
    pub fn push_row(&mut self, row: Vec<SqlValue<'static>>) {
        self.pending.push_back(row);
    }

    /// Builder-style [`push_row`](Self::push_row).
    #[must_use]
    pub fn with_row(mut self, row: Vec<SqlValue<'static>>) -> Self {
        self.push_row(row);
        self
    }

    /// Rows not yet reached by [`advance`](ResultCursor::advance).
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    fn meta(&self, index: usize) -> Result<&ColumnMeta, CursorError> {
        self.columns.get(index).ok_or(CursorError::ColumnOutOfRange {
            index,
            count: self.columns.len(),
        })
    }
}

impl ResultCursor for MemoryCursor {
    type Error = CursorError;

    fn column_count(&mut self) -> Result<usize, CursorError> {
        Ok(self.columns.len())
    }

    fn column_label(&mut self, index: usize) -> Result<String, CursorError> {
        self.meta(index).map(|c| c.label.clone())
    }

    fn column_name(&mut self, index: usize) -> Result<String, CursorError> {
        self.meta(index).map(|c| c.name.clone())
    }

    fn column_type(&mut self, index: usize) -> Result<i32, CursorError> {
        self.meta(index).map(|c| c.sql_type)
    }

    fn advance(&mut self) -> Result<bool, CursorError> {
        self.current = self.pending.pop_front();
        Ok(self.current.is_some())
    }

    fn value_at(&mut self, index: usize) -> Result<SqlValue<'static>, CursorError> {
        self.meta(index)?;
        let row = self.current.as_ref().ok_or(CursorError::NoCurrentRow)?;
        Ok(row.get(index).cloned().unwrap_or(SqlValue::Null))
    }
}
