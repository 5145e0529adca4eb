//! Error types for typing a raw table into a [`GameDataset`].
//!
//! Only structural problems are errors. Row-level defects such as an
//! unparseable date or a non-numeric score are nulled and the row is dropped,
//! never reported here.
//!
//! [`GameDataset`]: super::model::GameDataset

use thiserror::Error;

/// The raw table cannot be typed at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// One or more required columns are absent from the header.
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A row does not have one cell per header column.
    #[error("Row {row} has {found} cells but the header has {expected} columns")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}
