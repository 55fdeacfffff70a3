//! Logical value types and the relational type-code mapping.
//!
//! A [`ValueType`] names the kind of values a grid column holds so that
//! consumers can decide how to render or aggregate it without looking at
//! driver-specific type codes. It is a classification only; cell values are
//! never coerced to match it.

use serde::{Deserialize, Serialize};

/// Standard SQL type codes as reported by relational drivers (the JDBC
/// `java.sql.Types` numbering, which ODBC shares for the core types).
pub mod sql_types {
    pub const BIT: i32 = -7;
    pub const TINYINT: i32 = -6;
    pub const SMALLINT: i32 = 5;
    pub const INTEGER: i32 = 4;
    pub const BIGINT: i32 = -5;
    pub const FLOAT: i32 = 6;
    pub const REAL: i32 = 7;
    pub const DOUBLE: i32 = 8;
    pub const NUMERIC: i32 = 2;
    pub const DECIMAL: i32 = 3;
    pub const CHAR: i32 = 1;
    pub const VARCHAR: i32 = 12;
    pub const LONGVARCHAR: i32 = -1;
    pub const DATE: i32 = 91;
    pub const TIME: i32 = 92;
    pub const TIMESTAMP: i32 = 93;
    pub const BINARY: i32 = -2;
    pub const VARBINARY: i32 = -3;
    pub const LONGVARBINARY: i32 = -4;
    pub const NULL: i32 = 0;
    pub const OTHER: i32 = 1111;
    pub const JAVA_OBJECT: i32 = 2000;
    pub const DISTINCT: i32 = 2001;
    pub const STRUCT: i32 = 2002;
    pub const ARRAY: i32 = 2003;
    pub const BLOB: i32 = 2004;
    pub const CLOB: i32 = 2005;
    pub const REF: i32 = 2006;
    pub const DATALINK: i32 = 70;
    pub const BOOLEAN: i32 = 16;
    pub const ROWID: i32 = -8;
    pub const NCHAR: i32 = -15;
    pub const NVARCHAR: i32 = -9;
    pub const LONGNVARCHAR: i32 = -16;
    pub const NCLOB: i32 = 2011;
    pub const SQLXML: i32 = 2009;
    pub const REF_CURSOR: i32 = 2012;
    pub const TIME_WITH_TIMEZONE: i32 = 2013;
    pub const TIMESTAMP_WITH_TIMEZONE: i32 = 2014;
}

/// Logical kind of a grid column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueType {
    Boolean,
    Smallint,
    Integer,
    Bigint,
    Real,
    Double,
    Numeric,
    Char,
    Text,
    Date,
    Timestamp,
    Timestamptz,
}

/// Relational type code to value type. Codes not listed classify as
/// [`ValueType::Text`].
///
/// Binary kinds map to BOOLEAN and TIME maps to TIMESTAMP; downstream
/// consumers rely on both.
pub const SQL_VALUE_TYPES: &[(i32, ValueType)] = &[
    (sql_types::BIT, ValueType::Boolean),
    (sql_types::TINYINT, ValueType::Smallint),
    (sql_types::SMALLINT, ValueType::Smallint),
    (sql_types::INTEGER, ValueType::Integer),
    (sql_types::BIGINT, ValueType::Bigint),
    (sql_types::FLOAT, ValueType::Double),
    (sql_types::REAL, ValueType::Real),
    (sql_types::DOUBLE, ValueType::Double),
    (sql_types::NUMERIC, ValueType::Numeric),
    (sql_types::DECIMAL, ValueType::Double),
    (sql_types::CHAR, ValueType::Char),
    (sql_types::VARCHAR, ValueType::Text),
    (sql_types::LONGVARCHAR, ValueType::Text),
    (sql_types::DATE, ValueType::Date),
    (sql_types::TIME, ValueType::Timestamp),
    (sql_types::TIMESTAMP, ValueType::Timestamp),
    (sql_types::BINARY, ValueType::Boolean),
    (sql_types::VARBINARY, ValueType::Boolean),
    (sql_types::LONGVARBINARY, ValueType::Boolean),
    (sql_types::BOOLEAN, ValueType::Boolean),
    (sql_types::TIME_WITH_TIMEZONE, ValueType::Timestamptz),
    (sql_types::TIMESTAMP_WITH_TIMEZONE, ValueType::Timestamptz),
];

/// Classify a relational type code.
pub fn classify(sql_type: i32) -> ValueType {
    SQL_VALUE_TYPES
        .iter()
        .find(|(code, _)| *code == sql_type)
        .map_or(ValueType::Text, |(_, value_type)| *value_type)
}

impl ValueType {
    /// Classify a relational type code. See [`classify`].
    pub fn from_sql_type(sql_type: i32) -> Self {
        classify(sql_type)
    }

    /// Upper-case name, e.g. `"TIMESTAMPTZ"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Boolean => "BOOLEAN",
            ValueType::Smallint => "SMALLINT",
            ValueType::Integer => "INTEGER",
            ValueType::Bigint => "BIGINT",
            ValueType::Real => "REAL",
            ValueType::Double => "DOUBLE",
            ValueType::Numeric => "NUMERIC",
            ValueType::Char => "CHAR",
            ValueType::Text => "TEXT",
            ValueType::Date => "DATE",
            ValueType::Timestamp => "TIMESTAMP",
            ValueType::Timestamptz => "TIMESTAMPTZ",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ValueType::Smallint | ValueType::Integer | ValueType::Bigint
        )
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer()
            || matches!(
                self,
                ValueType::Real | ValueType::Double | ValueType::Numeric
            )
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ValueType::Char | ValueType::Text)
    }

    pub fn is_date(&self) -> bool {
        matches!(
            self,
            ValueType::Date | ValueType::Timestamp | ValueType::Timestamptz
        )
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, ValueType::Boolean)
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
