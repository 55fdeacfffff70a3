//! CSV option loading and validation.

mod types;
mod validation;

pub use types::*;
pub(crate) use validation::delimiter_byte;

use crate::error::Result;
use std::path::Path;

impl CsvWriteOptions {
    /// Load options from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse options from a YAML string. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let options: CsvWriteOptions = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Validate the options.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}
