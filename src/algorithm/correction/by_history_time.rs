//! By-history time clearing
//!
//! By-history diagnoses carry no explicit time period. This step is off by
//! default and enabled through `CorrectionConfig::clear_by_history_time`.

use crate::algorithm::correction::CorrectionSummary;
use crate::models::{DiagnosisSlot, TimePeriod};

/// Clear the time period of a by-history slot
pub fn apply(slot: &mut DiagnosisSlot, summary: &mut CorrectionSummary) {
    if slot.by_history.is_true() && !slot.time_period.is_unknown() {
        slot.time_period = TimePeriod::Unknown;
        summary.by_history_time_removed += 1;
    }
}
