//! File-to-file correction
//!
//! Loads a table, runs the configured passes and writes the corrected
//! table next to the input (or to an explicit path).

use std::path::{Path, PathBuf};

use log::info;

use crate::algorithm::{CorrectionSummary, run_dataset};
use crate::config::CorrectionConfig;
use crate::error::Result;
use crate::models::Dataset;
use crate::reader::read_dataset;
use crate::writer::write_dataset;

/// Result of correcting one file
#[derive(Debug, Clone)]
pub struct CorrectionOutcome {
    /// The corrected table
    pub dataset: Dataset,
    pub summary: CorrectionSummary,
    /// Where the corrected table was written
    pub output_path: PathBuf,
}

/// Correct a diagnosis table file
///
/// Without an explicit `output`, the corrected table is written to the
/// input path with the configured suffix (`_corrected` by default).
pub fn correct_file(
    input: &Path,
    output: Option<&Path>,
    config: &CorrectionConfig,
) -> Result<CorrectionOutcome> {
    let mut dataset = read_dataset(input, config)?;
    let summary = run_dataset(&mut dataset, config);
    info!("Data corrections completed.");

    let output_path = output.map_or_else(|| config.output_path_for(input), Path::to_path_buf);
    write_dataset(&dataset, &output_path, config)?;
    info!("Corrected data was saved to {}", output_path.display());

    Ok(CorrectionOutcome {
        dataset,
        summary,
        output_path,
    })
}
