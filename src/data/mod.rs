/// Data layer: record types and the per-stage functions of the pipeline.
///
/// Architecture:
/// ```text
///      export.xml
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read + parse → roxmltree::Document
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  <Record type="…SleepAnalysis"> → RawRecord (lazy)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform │  timestamps (datetime), duration, label → SleepRecord
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  SleepRecord → CSV row
///   └──────────┘
/// ```

pub mod datetime;
pub mod filter;
pub mod loader;
pub mod model;
pub mod transform;
pub mod writer;
