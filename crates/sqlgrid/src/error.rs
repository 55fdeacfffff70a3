//! Error types for grid construction and export.

use thiserror::Error;

/// Boxed cause carried by [`GridError::DataAccess`].
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for grid operations.
#[derive(Error, Debug)]
pub enum GridError {
    /// The result cursor failed to report metadata, advance, or read a value.
    #[error("Data access error while {operation}")]
    DataAccess {
        operation: String,
        #[source]
        source: BoxedCause,
    },

    /// The output sink rejected a write or flush.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CSV write options.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML deserialization error for an options file.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A row does not have one cell per header.
    #[error("Row {row} has {actual} values but the grid has {expected} headers")]
    Shape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A value was added before any row was started.
    #[error("Cannot add a value before a row has been started")]
    NoCurrentRow,
}

impl GridError {
    /// Create a DataAccess error for the given cursor operation.
    pub fn data_access(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        GridError::DataAccess {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Check whether this error came from the result cursor.
    pub fn is_data_access(&self) -> bool {
        matches!(self, GridError::DataAccess { .. })
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

impl From<csv::Error> for GridError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(io) => GridError::Io(io),
            other => GridError::Io(std::io::Error::other(format!("{:?}", other))),
        }
    }
}

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_format_detailed_includes_cause() {
        let err = GridError::data_access(
            "reading column 2",
            io::Error::new(io::ErrorKind::BrokenPipe, "connection reset"),
        );
        let detailed = err.format_detailed();

        assert!(detailed.starts_with("Error: Data access error while reading column 2"));
        assert!(detailed.contains("Caused by:\n  1: connection reset"));
        assert!(err.is_data_access());
    }

    #[test]
    fn test_csv_io_error_unwraps_to_io() {
        let csv_err = csv::Error::from(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
        let err = GridError::from(csv_err);

        match err {
            GridError::Io(io) => assert_eq!(io.kind(), io::ErrorKind::WriteZero),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_shape_message() {
        let err = GridError::Shape {
            row: 3,
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Row 3 has 1 values but the grid has 2 headers"
        );
    }
}
