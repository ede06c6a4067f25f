//! Past-Certainty Setter
//!
//! A historical slot with no certainty flag set can have its certainty
//! reconstructed from its documentation code: a structured instrument
//! report means confirmed, prior documentation means by history.

use crate::algorithm::correction::{CorrectionSummary, by_history};
use crate::models::{DiagnosisSlot, Flag, PastDocumentation};

/// Backfill certainty for historical slots from past documentation
pub fn apply(slot: &mut DiagnosisSlot, summary: &mut CorrectionSummary) {
    if !slot.is_historical() || slot.any_certainty_true() {
        return;
    }
    match slot.past_documentation {
        PastDocumentation::StructuredInstrument => {
            slot.confirmed = Flag::True;
            summary.past_confirmed_set += 1;
            by_history::backfill(slot, summary);
        }
        PastDocumentation::Documented => {
            slot.by_history = Flag::True;
            summary.past_by_history_set += 1;
        }
        PastDocumentation::Unknown | PastDocumentation::Other(_) => {}
    }
}
