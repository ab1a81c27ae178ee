use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading the activity CSV. Always fatal for the report.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    /// `row` is the 1-based data row, not counting the header.
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    NotNumeric {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// A field name outside the three known sector columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sector field '{field}' (expected Primaria, Secundaria or Terciaria)")]
pub struct FieldError {
    pub field: String,
}
