//! Past-Documentation Scrubber
//!
//! Past documentation describes how a historical diagnosis was
//! substantiated. It is meaningless on a current diagnosis.

use crate::algorithm::correction::CorrectionSummary;
use crate::models::{DiagnosisSlot, PastDocumentation};

/// Clear past documentation unless the slot is by-history or historical
pub fn apply(slot: &mut DiagnosisSlot, summary: &mut CorrectionSummary) {
    if slot.by_history.is_true() || slot.is_historical() {
        return;
    }
    if !slot.past_documentation.is_unknown() {
        slot.past_documentation = PastDocumentation::Unknown;
        summary.past_documentation_removed += 1;
    }
}
