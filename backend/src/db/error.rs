//! Error types for loading the launch dataset.

use std::path::PathBuf;

/// Result type for dataset loading.
pub type DataLoadResult<T> = Result<T, DataLoadError>;

/// Why the launch table could not be loaded.
///
/// Every variant is fatal at startup: the dashboard has nothing to show
/// without its dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The source file could not be opened or read.
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed CSV.
    #[error("Malformed CSV in {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row.
    #[error("Dataset {source_name} is missing required column '{column}'")]
    MissingColumn { source_name: String, column: String },

    /// A cell could not be interpreted as its column's type.
    #[error("Invalid value '{value}' in column '{column}' at data row {row}: {reason}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    /// The header parsed but there are no data rows.
    #[error("Dataset {source_name} contains no launch records")]
    Empty { source_name: String },
}

impl DataLoadError {
    pub(crate) fn invalid_value(
        row: usize,
        column: &str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            row,
            column: column.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
