use std::fs::File;
use std::io::{BufWriter, Write};

use log::{debug, info, warn};

use crate::config::Config;
use crate::data::filter::sleep_records;
use crate::data::loader::{parse_export, read_export};
use crate::data::transform::transform;
use crate::data::writer::SleepCsvWriter;
use crate::error::ExportError;

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Outcome of a run: rows written and sleep records skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub skipped: usize,
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Convert an in-memory export into CSV written to `sink`.
///
/// Only malformed markup or a failing sink aborts; a sleep record with a
/// missing or unreadable timestamp is logged, counted as skipped and passed
/// over.
pub fn convert<W: Write>(xml: &str, sink: W, config: &Config) -> Result<Summary, ExportError> {
    let doc = parse_export(xml)?;
    write_records(&doc, sink, config)
}

/// Read `config.input`, write `config.output`.
///
/// The input is fully read and parsed before the output is created, so a
/// missing or malformed export leaves any previous output untouched.
pub fn run(config: &Config) -> Result<Summary, ExportError> {
    info!("Parsing {} …", config.input.display());
    let text = read_export(&config.input)?;
    let doc = parse_export(&text)?;

    let file = File::create(&config.output).map_err(|source| ExportError::Create {
        path: config.output.clone(),
        source,
    })?;
    let summary = write_records(&doc, BufWriter::new(file), config)?;

    info!(
        "Finished. {} records written to {}",
        summary.written,
        config.output.display()
    );
    if summary.skipped > 0 {
        warn!("{} records skipped due to parsing issues.", summary.skipped);
    }
    Ok(summary)
}

fn write_records<W: Write>(
    doc: &roxmltree::Document<'_>,
    sink: W,
    config: &Config,
) -> Result<Summary, ExportError> {
    let mut writer = SleepCsvWriter::new(sink)?;
    let mut skipped = 0;

    for raw in sleep_records(doc, &config.type_suffix) {
        match transform(&raw, &config.value_prefix) {
            Ok(record) => writer.write(&record)?,
            Err(e) => {
                skipped += 1;
                warn!("Skipping record: {e}");
            }
        }
    }

    let summary = Summary {
        written: writer.written(),
        skipped,
    };
    let mut sink = writer.finish()?;
    sink.flush()?;
    debug!("{summary:?}");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_to_string(xml: &str) -> (Summary, String) {
        let mut out = Vec::new();
        let summary = convert(xml, &mut out, &Config::default()).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn two_written_one_skipped() {
        let xml = r#"<HealthData>
  <Record type="HKCategoryTypeIdentifierSleepAnalysis" startDate="2023-01-01 23:00:00 -0800" endDate="2023-01-02 07:00:00 -0800" value="HKCategoryValueSleepAnalysisInBed"/>
  <Record type="HKQuantityTypeIdentifierHeartRate" startDate="2023-01-01 23:00:00 -0800" endDate="2023-01-01 23:01:00 -0800" value="62"/>
  <Record type="HKCategoryTypeIdentifierSleepAnalysis" startDate="not-a-date" endDate="2023-01-02 07:00:00 -0800" value="HKCategoryValueSleepAnalysisAsleep"/>
  <Record type="HKQuantityTypeIdentifierStepCount" startDate="2023-01-02 08:00:00 -0800" endDate="2023-01-02 08:10:00 -0800" value="120"/>
  <Record type="HKCategoryTypeIdentifierSleepAnalysis" startDate="2023-01-01T23:30:00-08:00" endDate="2023-01-02T06:45:30-08:00" value="HKCategoryValueSleepAnalysisAsleep"/>
</HealthData>"#;

        let (summary, csv) = convert_to_string(xml);
        assert_eq!(summary, Summary { written: 2, skipped: 1 });
        assert_eq!(
            csv,
            "StartDate,EndDate,DurationMinutes,Value\r\n\
             2023-01-01T23:00:00-08:00,2023-01-02T07:00:00-08:00,480.0,InBed\r\n\
             2023-01-01T23:30:00-08:00,2023-01-02T06:45:30-08:00,435.5,Asleep\r\n"
        );
    }

    #[test]
    fn missing_end_date_is_skipped_not_fatal() {
        let xml = r#"<HealthData>
  <Record type="HKCategoryTypeIdentifierSleepAnalysis" startDate="2023-01-01 23:00:00 -0800"/>
</HealthData>"#;
        let (summary, csv) = convert_to_string(xml);
        assert_eq!(summary, Summary { written: 0, skipped: 1 });
        assert_eq!(csv, "StartDate,EndDate,DurationMinutes,Value\r\n");
    }

    #[test]
    fn loosely_spaced_timestamps_are_skipped() {
        let xml = r#"<HealthData>
  <Record type="HKCategoryTypeIdentifierSleepAnalysis" startDate="2023-01-01 23:00:00-0800" endDate="2023-01-02 07:00:00 -0800"/>
  <Record type="HKCategoryTypeIdentifierSleepAnalysis" startDate=" 2023-01-01 23:00:00 -0800" endDate="2023-01-02 07:00:00 -0800"/>
  <Record type="HKCategoryTypeIdentifierSleepAnalysis" startDate="2023-01-01 23:00:00 -0800" endDate="2023-01-02 07:00:00 -0800"/>
</HealthData>"#;
        let (summary, csv) = convert_to_string(xml);
        assert_eq!(summary, Summary { written: 1, skipped: 2 });
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn malformed_document_aborts() {
        let mut out = Vec::new();
        let err = convert("<HealthData><Record>", &mut out, &Config::default()).unwrap_err();
        assert!(matches!(err, ExportError::Parse(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn custom_markers_are_honoured() {
        let config = Config {
            type_suffix: "Nap".into(),
            value_prefix: "Kind:".into(),
            ..Config::default()
        };
        let xml = r#"<Root>
  <Record type="Nap" startDate="2023-01-01 13:00:00 +0000" endDate="2023-01-01 13:20:00 +0000" value="Kind:Short"/>
  <Record type="HKCategoryTypeIdentifierSleepAnalysis" startDate="2023-01-01 23:00:00 +0000" endDate="2023-01-02 07:00:00 +0000"/>
</Root>"#;
        let mut out = Vec::new();
        let summary = convert(xml, &mut out, &config).unwrap();
        assert_eq!(summary, Summary { written: 1, skipped: 0 });
        assert!(String::from_utf8(out).unwrap().ends_with(",20.0,Short\r\n"));
    }
}
