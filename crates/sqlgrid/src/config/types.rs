//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Options controlling CSV output.
///
/// ```yaml
/// delimiter: ";"
/// force_qualifier: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvWriteOptions {
    /// Character separating fields (default: ',').
    pub delimiter: char,

    /// Quote every field, not only those containing the delimiter, a quote
    /// or a line break (default: false).
    #[serde(alias = "forceQualifier")]
    pub force_qualifier: bool,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            force_qualifier: false,
        }
    }
}

impl CsvWriteOptions {
    pub fn new(delimiter: char, force_qualifier: bool) -> Self {
        Self {
            delimiter,
            force_qualifier,
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_force_qualifier(mut self, force_qualifier: bool) -> Self {
        self.force_qualifier = force_qualifier;
        self
    }
}
