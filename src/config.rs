use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Fixed defaults (edit before running if your export lives elsewhere)
// ---------------------------------------------------------------------------

/// Default input document, relative to the working directory.
pub const INPUT_FILE: &str = "export.xml";

/// Default CSV destination, relative to the working directory.
pub const OUTPUT_FILE: &str = "sleep_data.csv";

/// `Record` elements are kept when their `type` attribute ends with this.
pub const SLEEP_TYPE_SUFFIX: &str = "SleepAnalysis";

/// Marker removed from every category value.
pub const VALUE_PREFIX: &str = "HKCategoryValueSleepAnalysis";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Everything the pipeline needs to know, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub type_suffix: String,
    pub value_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_FILE),
            output: PathBuf::from(OUTPUT_FILE),
            type_suffix: SLEEP_TYPE_SUFFIX.to_string(),
            value_prefix: VALUE_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Same markers as the default, different files.
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }
}
