//! Extract sleep-analysis records from a health `export.xml` into a small CSV.

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;

pub use config::Config;
pub use error::{ExportError, RecordError};
pub use pipeline::{convert, run, Summary};
