//! Result set metadata types.

use serde::{Deserialize, Serialize};

use crate::core::{classify, GridHeader, ValueType};

/// Metadata for one result set column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Column label (the `AS` alias, or the name when there is none).
    pub label: String,

    /// Underlying column name.
    pub name: String,

    /// Relational type code, see [`crate::core::sql_types`].
    pub sql_type: i32,
}

impl ColumnMeta {
    pub fn new(label: impl Into<String>, name: impl Into<String>, sql_type: i32) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            sql_type,
        }
    }

    /// Column whose label equals its name.
    pub fn named(name: impl Into<String>, sql_type: i32) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            sql_type,
        }
    }

    /// Logical value type for this column.
    pub fn value_type(&self) -> ValueType {
        classify(self.sql_type)
    }

    /// Grid header for this column. Result set columns are never hidden or meta.
    pub fn to_header(&self) -> GridHeader {
        GridHeader::new(
            self.label.clone(),
            self.name.clone(),
            self.value_type(),
            false,
            false,
        )
    }
}
