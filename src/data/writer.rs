use std::io::Write;

use csv::{Terminator, WriterBuilder};

use super::model::{SleepRecord, CSV_HEADER};
use crate::error::ExportError;

/// CSV sink for sleep records.
///
/// The header row goes out on construction, so an export without any sleep
/// records still yields a valid, header-only file. Rows end with `\r\n`.
pub struct SleepCsvWriter<W: Write> {
    inner: csv::Writer<W>,
    written: usize,
}

impl<W: Write> SleepCsvWriter<W> {
    pub fn new(sink: W) -> Result<Self, ExportError> {
        let mut inner = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(sink);
        inner.write_record(CSV_HEADER)?;
        Ok(Self { inner, written: 0 })
    }

    pub fn write(&mut self, record: &SleepRecord) -> Result<(), ExportError> {
        self.inner.serialize(record.to_row())?;
        self.written += 1;
        Ok(())
    }

    /// Rows written so far, header excluded.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the sink.
    pub fn finish(self) -> Result<W, ExportError> {
        self.inner
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}
