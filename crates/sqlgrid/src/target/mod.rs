//! Grid export targets.

mod csv;

pub use self::csv::{to_csv_string, write_csv, write_csv_default, write_csv_to_path};
