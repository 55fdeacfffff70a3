//! CSV export of grids.
//!
//! One record of header labels (omitted when the grid has no headers), then
//! one record per row. NULL cells are written as empty fields; every other
//! value is written in its canonical text form.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};
use tracing::debug;

use crate::config::{delimiter_byte, CsvWriteOptions};
use crate::core::Grid;
use crate::error::{GridError, Result};

const EMPTY: &str = "";

/// Write a grid as CSV to the given writer.
///
/// The writer is flushed on success. Output is not atomic: if the writer
/// fails partway, whatever it already accepted stays written.
pub fn write_csv<W: Write>(grid: &Grid, writer: W, options: &CsvWriteOptions) -> Result<()> {
    let mut csv_writer = csv_writer(writer, options)?;
    let mut records = 0usize;

    if !grid.headers().is_empty() {
        for header in grid.headers() {
            csv_writer.write_field(&header.label)?;
        }
        end_record(&mut csv_writer)?;
        records += 1;
    }

    for row in grid.rows() {
        for value in row {
            if value.is_null() {
                csv_writer.write_field(EMPTY)?;
            } else {
                let text = value.to_text();
                csv_writer.write_field(text.as_bytes())?;
            }
        }
        end_record(&mut csv_writer)?;
        records += 1;
    }

    csv_writer.flush()?;
    debug!("Wrote {} CSV records ({} data rows)", records, grid.height());
    Ok(())
}

/// Write a grid as CSV using the default options.
pub fn write_csv_default<W: Write>(grid: &Grid, writer: W) -> Result<()> {
    write_csv(grid, writer, &CsvWriteOptions::default())
}

/// Render a grid as a CSV string.
pub fn to_csv_string(grid: &Grid, options: &CsvWriteOptions) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(grid, &mut buf, options)?;
    String::from_utf8(buf).map_err(|e| GridError::Io(std::io::Error::other(e)))
}

/// Write a grid as CSV to a new file at `path`, replacing any existing file.
pub fn write_csv_to_path<P: AsRef<Path>>(
    grid: &Grid,
    path: P,
    options: &CsvWriteOptions,
) -> Result<()> {
    options.validate()?;
    let file = File::create(path.as_ref())?;
    debug!("Exporting grid to {}", path.as_ref().display());
    write_csv(grid, BufWriter::new(file), options)
}

fn csv_writer<W: Write>(writer: W, options: &CsvWriteOptions) -> Result<Writer<W>> {
    let delimiter = delimiter_byte(options.delimiter)?;
    let quote_style = if options.force_qualifier {
        QuoteStyle::Always
    } else {
        QuoteStyle::Necessary
    };

    // Row width is already enforced by the grid.
    Ok(WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(quote_style)
        .flexible(true)
        .from_writer(writer))
}

fn end_record<W: Write>(csv_writer: &mut Writer<W>) -> Result<()> {
    csv_writer.write_record(None::<&[u8]>)?;
    Ok(())
}
