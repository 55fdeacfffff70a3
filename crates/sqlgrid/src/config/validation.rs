//! Configuration validation.

use super::CsvWriteOptions;
use crate::error::{GridError, Result};

/// Validate CSV write options.
pub fn validate(options: &CsvWriteOptions) -> Result<()> {
    delimiter_byte(options.delimiter).map(|_| ())
}

/// The delimiter as the single byte the CSV writer needs.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        return Err(GridError::Config(format!(
            "delimiter must be a single ASCII character, got '{}'",
            delimiter
        )));
    }
    if matches!(delimiter, '"' | '\r' | '\n') {
        return Err(GridError::Config(format!(
            "delimiter cannot be {:?}",
            delimiter
        )));
    }

    Ok(delimiter as u8)
}
