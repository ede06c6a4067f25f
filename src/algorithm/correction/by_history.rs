//! By-History Backfiller
//!
//! Older templates left the by-history question blank when another
//! certainty box was ticked. A positive certainty answer implies "not by
//! history".

use crate::algorithm::correction::CorrectionSummary;
use crate::models::{DiagnosisSlot, Flag};

/// Fill an unknown by-history flag with false when confirmed, presumptive,
/// requires-confirmation or rule-out is set
pub fn apply(slot: &mut DiagnosisSlot, summary: &mut CorrectionSummary) {
    let positive = slot.confirmed.is_true()
        || slot.presumptive.is_true()
        || slot.requires_confirmation.is_true()
        || slot.rule_out.is_true();
    if positive {
        backfill(slot, summary);
    }
}

/// Set an unknown by-history flag to false; no-op when it holds a value
pub(crate) fn backfill(slot: &mut DiagnosisSlot, summary: &mut CorrectionSummary) {
    if slot.by_history.is_unknown() {
        slot.by_history = Flag::False;
        summary.by_history_filled += 1;
    }
}
