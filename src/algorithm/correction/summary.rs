//! Tally of field changes made by a correction run

use std::ops::{Add, AddAssign};

use log::info;
use serde::Serialize;

/// Counts of corrections, one field per kind of change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorrectionSummary {
    /// Rows processed
    pub rows: usize,
    /// Slots without a diagnosis that still carried certainty data
    pub slots_nulled: usize,
    /// Certainty and metadata fields cleared on those slots
    pub fields_nulled: usize,
    /// By-history flags filled with false
    pub by_history_filled: usize,
    /// Slots missing confirmed and presumptive resolved as confirmed
    pub inferred_confirmed: usize,
    /// Slots missing confirmed and presumptive resolved as not confirmed
    pub inferred_not_confirmed: usize,
    /// Past documentation values removed from current diagnoses
    pub past_documentation_removed: usize,
    /// Historical slots set to confirmed from a structured instrument report
    pub past_confirmed_set: usize,
    /// Historical slots set to by-history from documentation
    pub past_by_history_set: usize,
    /// Time periods removed from by-history diagnoses
    pub by_history_time_removed: usize,
}

impl CorrectionSummary {
    /// Slots that were missing both confirmed and presumptive
    #[must_use]
    pub const fn missing_confirmed_presumptive(&self) -> usize {
        self.inferred_confirmed + self.inferred_not_confirmed
    }

    /// Total individual field writes
    #[must_use]
    pub const fn total_changes(&self) -> usize {
        self.fields_nulled
            + self.by_history_filled
            + 2 * self.missing_confirmed_presumptive()
            + self.past_documentation_removed
            + self.past_confirmed_set
            + self.past_by_history_set
            + self.by_history_time_removed
    }

    /// Write the summary to the log
    pub fn log(&self) {
        info!(
            "Cleared certainty data for {} slots without a diagnosis ({} fields)",
            self.slots_nulled, self.fields_nulled
        );
        info!(
            "Filled missing ByHx with False for {} current diagnoses",
            self.by_history_filled
        );
        info!(
            "There were {} diagnoses missing confirmed and presumptive values. \
             Of these, {} were confirmed and {} were not confirmed.",
            self.missing_confirmed_presumptive(),
            self.inferred_confirmed,
            self.inferred_not_confirmed
        );
        info!(
            "Removed unnecessary past documentation for {} current diagnoses",
            self.past_documentation_removed
        );
        info!(
            "Set past certainty for {} diagnoses ({} confirmed, {} by history)",
            self.past_confirmed_set + self.past_by_history_set,
            self.past_confirmed_set,
            self.past_by_history_set
        );
        if self.by_history_time_removed > 0 {
            info!(
                "Removed unnecessary time value for {} diagnoses by history",
                self.by_history_time_removed
            );
        }
    }
}

impl Add for CorrectionSummary {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for CorrectionSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.rows += rhs.rows;
        self.slots_nulled += rhs.slots_nulled;
        self.fields_nulled += rhs.fields_nulled;
        self.by_history_filled += rhs.by_history_filled;
        self.inferred_confirmed += rhs.inferred_confirmed;
        self.inferred_not_confirmed += rhs.inferred_not_confirmed;
        self.past_documentation_removed += rhs.past_documentation_removed;
        self.past_confirmed_set += rhs.past_confirmed_set;
        self.past_by_history_set += rhs.past_by_history_set;
        self.by_history_time_removed += rhs.by_history_time_removed;
    }
}
