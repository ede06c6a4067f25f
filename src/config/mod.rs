//! Configuration for diagnosis data correction.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::schema::ColumnPrefix;

/// Default name of the subject identifier column
pub const DEFAULT_IDENTIFIER_COLUMN: &str = "Identifiers";

/// Cell texts read as missing, matching the NA set of common dataframe exports
pub const DEFAULT_NULL_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Default suffix appended to the input file stem for the corrected output
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_corrected";

/// Configuration for loading, correcting and writing diagnosis data
#[derive(Debug, Clone)]
pub struct CorrectionConfig {
    /// Force a column naming convention instead of detecting it
    pub column_prefix: Option<ColumnPrefix>,
    /// Name of the subject identifier column
    pub identifier_column: String,
    /// Trimmed cell values treated as missing
    pub null_tokens: Vec<String>,
    /// Canonical replacements for near-duplicate diagnosis labels
    pub label_aliases: FxHashMap<String, String>,
    /// Apply each pass across rows in parallel
    pub parallel: bool,
    /// Clear the time period of by-history slots after the core passes
    pub clear_by_history_time: bool,
    /// Omit the retired per-slot columns from the output
    pub drop_deprecated: bool,
    /// Suffix for the derived output path
    pub output_suffix: String,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            column_prefix: None,
            identifier_column: DEFAULT_IDENTIFIER_COLUMN.to_string(),
            null_tokens: DEFAULT_NULL_TOKENS.iter().map(ToString::to_string).collect(),
            label_aliases: FxHashMap::default(),
            parallel: true,
            clear_by_history_time: false,
            drop_deprecated: true,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl CorrectionConfig {
    /// Create a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed column naming convention
    #[must_use]
    pub const fn with_prefix(mut self, prefix: ColumnPrefix) -> Self {
        self.column_prefix = Some(prefix);
        self
    }

    #[must_use]
    pub fn with_identifier_column(mut self, column: &str) -> Self {
        self.identifier_column = column.to_string();
        self
    }

    /// Run every pass on a single thread
    #[must_use]
    pub const fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable the by-history time clearing step
    #[must_use]
    pub const fn with_by_history_time_clearing(mut self) -> Self {
        self.clear_by_history_time = true;
        self
    }

    /// Keep deprecated columns in the output
    #[must_use]
    pub const fn keep_deprecated(mut self) -> Self {
        self.drop_deprecated = false;
        self
    }

    /// Add or override a label alias
    pub fn add_label_alias(&mut self, from: &str, to: &str) {
        self.label_aliases.insert(from.to_string(), to.to_string());
    }

    /// Check if a trimmed cell should be read as missing
    #[must_use]
    pub fn is_null_token(&self, value: &str) -> bool {
        self.null_tokens.iter().any(|token| token == value)
    }

    /// Output path derived from the input path
    ///
    /// `data/hbn.csv` becomes `data/hbn_corrected.csv`. Inputs without a
    /// `.csv` extension get the suffix and the extension appended.
    #[must_use]
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = match input.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => {
                format!("{stem}{}.{ext}", self.output_suffix)
            }
            _ => format!(
                "{}{}.csv",
                input
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                self.output_suffix
            ),
        };
        input.with_file_name(file_name)
    }
}
