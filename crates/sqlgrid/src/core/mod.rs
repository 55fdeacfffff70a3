//! Core types shared by the grid builder and the CSV exporter.
//!
//! - [`value_type`]: logical column kinds and the relational type-code table
//! - [`value`]: cell values as read from a cursor
//! - [`grid`]: grid headers, the streaming builder and the frozen grid

pub mod grid;
pub mod value;
pub mod value_type;

pub use grid::{Grid, GridBuilder, GridHeader, GridRow};
pub use value::SqlValue;
pub use value_type::{classify, sql_types, ValueType, SQL_VALUE_TYPES};
