//! Rule-based reconciliation of diagnosis certainty fields
//!
//! Five passes run in a fixed order over the full row set, each visiting
//! every slot of every row:
//!
//! 1. Null propagation: clear certainty for slots without a diagnosis.
//! 2. By-history backfill: answer a blank by-history when another flag is set.
//! 3. Confirmed/presumptive resolution: infer both when both are missing.
//! 4. Past-documentation scrub: clear past documentation on current diagnoses.
//! 5. Past certainty: reconstruct certainty of historical slots from their
//!    documentation code.
//!
//! Later passes read fields earlier passes normalise, so a pass completes
//! over all rows before the next starts. Rows are independent, so a single
//! pass may run across rows in parallel.

pub mod by_history;
pub mod by_history_time;
pub mod confirmed_presumptive;
pub mod null_propagation;
pub mod past_certainty;
pub mod past_documentation;
pub mod summary;

pub use summary::CorrectionSummary;

use std::fmt;

use log::debug;
use rayon::prelude::*;

use crate::config::CorrectionConfig;
use crate::models::{Dataset, DiagnosisSlot, SubjectRow};

/// A single correction pass over diagnosis slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrectionPass {
    NullPropagation,
    ByHistoryBackfill,
    ConfirmedPresumptive,
    PastDocumentationScrub,
    PastCertainty,
    /// Opt-in step, runs after the five core passes
    ByHistoryTimeClear,
}

impl CorrectionPass {
    /// The core passes in application order
    pub const CORE: [Self; 5] = [
        Self::NullPropagation,
        Self::ByHistoryBackfill,
        Self::ConfirmedPresumptive,
        Self::PastDocumentationScrub,
        Self::PastCertainty,
    ];

    /// Passes enabled by a configuration, in application order
    #[must_use]
    pub fn sequence(config: &CorrectionConfig) -> Vec<Self> {
        let mut passes = Self::CORE.to_vec();
        if config.clear_by_history_time {
            passes.push(Self::ByHistoryTimeClear);
        }
        passes
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NullPropagation => "null propagation",
            Self::ByHistoryBackfill => "by-history backfill",
            Self::ConfirmedPresumptive => "confirmed/presumptive resolution",
            Self::PastDocumentationScrub => "past documentation scrub",
            Self::PastCertainty => "past certainty",
            Self::ByHistoryTimeClear => "by-history time clearing",
        }
    }

    /// Apply the pass to one slot
    pub fn apply(self, slot: &mut DiagnosisSlot, summary: &mut CorrectionSummary) {
        match self {
            Self::NullPropagation => null_propagation::apply(slot, summary),
            Self::ByHistoryBackfill => by_history::apply(slot, summary),
            Self::ConfirmedPresumptive => confirmed_presumptive::apply(slot, summary),
            Self::PastDocumentationScrub => past_documentation::apply(slot, summary),
            Self::PastCertainty => past_certainty::apply(slot, summary),
            Self::ByHistoryTimeClear => by_history_time::apply(slot, summary),
        }
    }

    /// Apply the pass to every slot of a row
    pub fn apply_row(self, row: &mut SubjectRow, summary: &mut CorrectionSummary) {
        for slot in &mut row.slots {
            self.apply(slot, summary);
        }
    }
}

impl fmt::Display for CorrectionPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply one pass to all rows
pub fn apply_pass(
    rows: &mut [SubjectRow],
    pass: CorrectionPass,
    parallel: bool,
) -> CorrectionSummary {
    let summary = if parallel {
        rows.par_iter_mut()
            .map(|row| {
                let mut summary = CorrectionSummary::default();
                pass.apply_row(row, &mut summary);
                summary
            })
            .reduce(CorrectionSummary::default, |a, b| a + b)
    } else {
        let mut summary = CorrectionSummary::default();
        for row in rows.iter_mut() {
            pass.apply_row(row, &mut summary);
        }
        summary
    };
    debug!("{pass}: {} field changes", summary.total_changes());
    summary
}

/// Run the configured passes over all rows, in place
pub fn run(rows: &mut [SubjectRow], config: &CorrectionConfig) -> CorrectionSummary {
    let mut summary = CorrectionSummary {
        rows: rows.len(),
        ..CorrectionSummary::default()
    };
    for pass in CorrectionPass::sequence(config) {
        summary += apply_pass(rows, pass, config.parallel);
    }
    summary
}

/// Run the five core passes with default settings
pub fn correct(rows: &mut [SubjectRow]) -> CorrectionSummary {
    run(rows, &CorrectionConfig::default())
}

/// Run the configured passes over a loaded dataset
pub fn run_dataset(dataset: &mut Dataset, config: &CorrectionConfig) -> CorrectionSummary {
    let summary = run(&mut dataset.rows, config);
    summary.log();
    summary
}
