//! # sqlgrid
//!
//! Typed in-memory grids built from relational result sets, exported as CSV.
//!
//! - **Type inference**: each column gets a [`ValueType`] from its relational
//!   type code
//! - **Grid building**: any [`ResultCursor`] can be drained into a [`Grid`]
//! - **CSV export**: configurable delimiter and quoting via [`CsvWriteOptions`]
//!
//! ## Example
//!
//! ```rust
//! use sqlgrid::core::sql_types;
//! use sqlgrid::{grid_from_cursor, to_csv_string, ColumnMeta, CsvWriteOptions, MemoryCursor, SqlValue};
//!
//! fn main() -> sqlgrid::Result<()> {
//!     let mut cursor = MemoryCursor::new(vec![
//!         ColumnMeta::named("id", sql_types::INTEGER),
//!         ColumnMeta::named("name", sql_types::VARCHAR),
//!     ])
//!     .with_row(vec![SqlValue::I32(1), "Ann".to_string().into()])
//!     .with_row(vec![SqlValue::I32(2), SqlValue::Null]);
//!
//!     let grid = grid_from_cursor(&mut cursor)?;
//!     let csv = to_csv_string(&grid, &CsvWriteOptions::default())?;
//!     assert_eq!(csv, "id,name\n1,Ann\n2,\n");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod source;
pub mod target;
pub mod util;

// Re-exports for convenient access
pub use config::CsvWriteOptions;
pub use crate::core::{classify, Grid, GridBuilder, GridHeader, SqlValue, ValueType};
pub use error::{GridError, Result};
pub use source::{grid_from_cursor, ColumnMeta, CursorError, MemoryCursor, ResultCursor};
pub use target::{to_csv_string, write_csv, write_csv_default, write_csv_to_path};
