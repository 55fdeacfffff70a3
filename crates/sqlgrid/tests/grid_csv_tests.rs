//! End-to-end tests: result cursor -> grid -> CSV text.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io;
use sqlgrid::core::sql_types;
use sqlgrid::{
    grid_from_cursor, to_csv_string, write_csv, ColumnMeta, CsvWriteOptions, Grid, GridError,
    GridHeader, MemoryCursor, ResultCursor, SqlValue, ValueType,
};

fn people() -> MemoryCursor {
    MemoryCursor::new(vec![
        ColumnMeta::named("id", sql_types::INTEGER),
        ColumnMeta::named("name", sql_types::VARCHAR),
    ])
    .with_row(vec![SqlValue::I32(1), SqlValue::text_owned("Ann".to_string())])
    .with_row(vec![SqlValue::I32(2), SqlValue::Null])
}

// =============================================================================
// Result set to CSV
// =============================================================================

#[test]
fn test_people_scenario() {
    let grid = grid_from_cursor(&mut people()).unwrap();

    assert_eq!(
        grid.headers(),
        &[
            GridHeader::new("id", "id", ValueType::Integer, false, false),
            GridHeader::new("name", "name", ValueType::Text, false, false),
        ]
    );
    assert_eq!(grid.value(0, 0), Some(&SqlValue::I32(1)));
    assert_eq!(
        grid.value(0, 1),
        Some(&SqlValue::text_owned("Ann".to_string()))
    );
    assert_eq!(grid.value(1, 1), Some(&SqlValue::Null));

    let csv = to_csv_string(&grid, &CsvWriteOptions::default()).unwrap();
    assert_eq!(csv, "id,name\n1,Ann\n2,\n");
}

#[test]
fn test_every_row_matches_header_count() {
    let mut cursor = MemoryCursor::new(vec![
        ColumnMeta::named("a", sql_types::SMALLINT),
        ColumnMeta::named("b", sql_types::DATE),
        ColumnMeta::named("c", sql_types::DECIMAL),
    ]);
    for i in 0..25i16 {
        // Short rows read as NULL past their end.
        let row = if i % 5 == 0 {
            vec![SqlValue::I16(i)]
        } else {
            vec![
                SqlValue::I16(i),
                NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap().into(),
                SqlValue::F64(f64::from(i) / 2.0),
            ]
        };
        cursor.push_row(row);
    }

    let grid = grid_from_cursor(&mut cursor).unwrap();
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 25);
    assert!(grid.rows().iter().all(|row| row.len() == grid.width()));
    assert_eq!(grid.value(5, 1), Some(&SqlValue::Null));
}

#[test]
fn test_empty_cursor_yields_header_line_only() {
    let mut cursor = MemoryCursor::new(vec![
        ColumnMeta::new("Order no", "order_no", sql_types::BIGINT),
        ColumnMeta::new("Placed", "placed", sql_types::TIMESTAMP_WITH_TIMEZONE),
    ]);
    let grid = grid_from_cursor(&mut cursor).unwrap();

    assert_eq!(grid.height(), 0);
    assert_eq!(grid.header(1).unwrap().value_type, ValueType::Timestamptz);

    let csv = to_csv_string(&grid, &CsvWriteOptions::default()).unwrap();
    assert_eq!(csv, "Order no,Placed\n");
}

#[test]
fn test_no_columns_yields_empty_output() {
    let grid = grid_from_cursor(&mut MemoryCursor::default()).unwrap();
    assert!(grid.is_empty());

    let csv = to_csv_string(&grid, &CsvWriteOptions::default()).unwrap();
    assert!(csv.is_empty());
}

#[test]
fn test_native_values_render_as_text() {
    let mut cursor = MemoryCursor::new(vec![
        ColumnMeta::named("flag", sql_types::BIT),
        ColumnMeta::named("amount", sql_types::NUMERIC),
        ColumnMeta::named("day", sql_types::DATE),
        ColumnMeta::named("blob", sql_types::VARBINARY),
    ])
    .with_row(vec![
        SqlValue::Bool(false),
        Decimal::new(-12345, 2).into(),
        NaiveDate::from_ymd_opt(1999, 12, 31).unwrap().into(),
        vec![0x00u8, 0xff].into(),
    ]);

    let grid = grid_from_cursor(&mut cursor).unwrap();
    let kinds: Vec<ValueType> = grid.headers().iter().map(|h| h.value_type).collect();
    assert_eq!(
        kinds,
        vec![
            ValueType::Boolean,
            ValueType::Numeric,
            ValueType::Date,
            ValueType::Boolean
        ]
    );

    let csv = to_csv_string(&grid, &CsvWriteOptions::default()).unwrap();
    assert_eq!(csv, "flag,amount,day,blob\nfalse,-123.45,1999-12-31,00ff\n");
}

// =============================================================================
// Formatting options
// =============================================================================

#[test]
fn test_delimiter_in_value_is_quoted() {
    let mut cursor = MemoryCursor::new(vec![
        ColumnMeta::named("city", sql_types::VARCHAR),
        ColumnMeta::named("code", sql_types::CHAR),
    ])
    .with_row(vec![
        SqlValue::text_owned("Oslo, Norway".to_string()),
        SqlValue::text_owned("NO".to_string()),
    ]);
    let grid = grid_from_cursor(&mut cursor).unwrap();

    let csv = to_csv_string(&grid, &CsvWriteOptions::default()).unwrap();
    assert_eq!(csv, "city,code\n\"Oslo, Norway\",NO\n");
}

#[test]
fn test_force_qualifier_with_tab_delimiter() {
    let grid = grid_from_cursor(&mut people()).unwrap();
    let options = CsvWriteOptions::from_yaml("delimiter: \"\\t\"\nforce_qualifier: true").unwrap();

    let csv = to_csv_string(&grid, &options).unwrap();
    assert_eq!(
        csv,
        "\"id\"\t\"name\"\n\"1\"\t\"Ann\"\n\"2\"\t\"\"\n"
    );
}

#[test]
fn test_write_to_borrowed_writer() {
    let grid = grid_from_cursor(&mut people()).unwrap();
    let mut out: Vec<u8> = b"# export\n".to_vec();

    write_csv(&grid, &mut out, &CsvWriteOptions::default()).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "# export\nid,name\n1,Ann\n2,\n"
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_value_before_row_is_rejected() {
    let mut builder = Grid::builder();
    builder.add_header(GridHeader::visible("a", "a", ValueType::Text));

    assert!(matches!(
        builder.add_value("x"),
        Err(GridError::NoCurrentRow)
    ));
}

/// Cursor whose connection drops after the first row.
struct DroppedConnection {
    served: bool,
}

impl ResultCursor for DroppedConnection {
    type Error = io::Error;

    fn column_count(&mut self) -> io::Result<usize> {
        Ok(1)
    }

    fn column_label(&mut self, _index: usize) -> io::Result<String> {
        Ok("id".to_string())
    }

    fn column_name(&mut self, _index: usize) -> io::Result<String> {
        Ok("id".to_string())
    }

    fn column_type(&mut self, _index: usize) -> io::Result<i32> {
        Ok(sql_types::INTEGER)
    }

    fn advance(&mut self) -> io::Result<bool> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::ConnectionAborted, "server went away"));
        }
        self.served = true;
        Ok(true)
    }

    fn value_at(&mut self, _index: usize) -> io::Result<SqlValue<'static>> {
        Ok(SqlValue::I32(1))
    }
}

#[test]
fn test_cursor_failure_mid_stream() {
    let err = grid_from_cursor(&mut DroppedConnection { served: false }).unwrap_err();

    assert!(err.is_data_access());
    assert_eq!(
        err.format_detailed(),
        "Error: Data access error while advancing to row 1\n\nCaused by:\n  1: server went away"
    );
}
