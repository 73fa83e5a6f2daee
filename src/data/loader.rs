use std::path::Path;

use log::debug;
use roxmltree::{Document, ParsingOptions};

use crate::error::ExportError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read the whole export into memory.
///
/// A missing file is reported as [`ExportError::FileNotFound`] rather than a
/// bare I/O error so the caller can tell the user where to put it.
pub fn read_export(path: &Path) -> Result<String, ExportError> {
    if !path.exists() {
        return Err(ExportError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Parse the export into a tree. The whole document must be well-formed
/// before any record is looked at.
///
/// Health exports carry an internal DTD in their prologue, so DTDs are
/// allowed here.
pub fn parse_export(text: &str) -> Result<Document<'_>, ExportError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)?;
    Ok(doc)
}
