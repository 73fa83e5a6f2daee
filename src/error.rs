//! Error taxonomy for the export pipeline.

use std::path::PathBuf;

/// Failures that abort the whole run.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(
        "{} not found. Move the tool to the folder with the export or adjust the input path.",
        .path.display()
    )]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Export is not well-formed XML: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures confined to one record; the record is skipped and the run goes on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("missing attribute '{0}'")]
    MissingAttribute(&'static str),

    #[error("Unrecognised datetime: {0}")]
    UnrecognizedDatetime(String),
}
