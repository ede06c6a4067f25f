use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use dx_correction::utils::logging::{log_violations, with_spinner};
use dx_correction::{
    ColumnPrefix, CorrectionConfig, check_invariants, correct_file, write_long_format,
    write_summary_json,
};
use log::info;

/// Fix missing and inconsistent certainty values in clinician consensus diagnosis data
#[derive(Parser, Debug)]
#[command(name = "dx-correct", version)]
struct Opt {
    /// Wide diagnosis table to correct
    input: PathBuf,

    /// Output path (default: input path with `_corrected` appended)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Column naming convention: `clinician` or `short` (default: detect)
    #[arg(long)]
    prefix: Option<ColumnPrefix>,

    /// Also clear the time period of by-history diagnoses
    #[arg(long)]
    clear_by_history_time: bool,

    /// Keep the retired New/Rem/PRem columns
    #[arg(long)]
    keep_deprecated: bool,

    /// Run every pass on a single thread
    #[arg(long)]
    sequential: bool,

    /// Also write a long-format export (one row per diagnosis slot)
    #[arg(long)]
    long: Option<PathBuf>,

    /// Write the correction counts as JSON
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// Check the corrected rows for remaining inconsistencies
    #[arg(long)]
    check: bool,
}

impl Opt {
    fn config(&self) -> CorrectionConfig {
        let mut config = CorrectionConfig::new();
        config.column_prefix = self.prefix;
        config.clear_by_history_time = self.clear_by_history_time;
        config.drop_deprecated = !self.keep_deprecated;
        config.parallel = !self.sequential;
        config
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Opt::parse();
    let config = opt.config();
    let start = Instant::now();

    let outcome = with_spinner("Correcting diagnosis data", "Corrected data written", || {
        correct_file(&opt.input, opt.output.as_deref(), &config)
    })
    .with_context(|| format!("Failed to correct {}", opt.input.display()))?;
    let dataset = &outcome.dataset;
    info!(
        "Corrected {} rows with {} diagnoses ({} distinct labels)",
        dataset.len(),
        dataset.diagnosis_count(),
        dataset.distinct_diagnoses().len()
    );

    if opt.check {
        let violations = check_invariants(&dataset.rows, config.clear_by_history_time);
        log_violations(&violations, 20);
    }

    if let Some(long_path) = &opt.long {
        write_long_format(&dataset.rows, long_path)
            .with_context(|| format!("Failed to write {}", long_path.display()))?;
        info!("Long-format export was saved to {}", long_path.display());
    }

    if let Some(summary_path) = &opt.summary_json {
        write_summary_json(&outcome.summary, summary_path)
            .with_context(|| format!("Failed to write {}", summary_path.display()))?;
    }

    info!("Finished in {:?}", start.elapsed());
    Ok(())
}
