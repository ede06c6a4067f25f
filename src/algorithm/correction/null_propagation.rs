//! Null Propagator
//!
//! A slot without a real diagnosis cannot carry certainty data. Whatever a
//! form left behind in those fields is cleared.

use crate::algorithm::correction::CorrectionSummary;
use crate::models::DiagnosisSlot;

/// Clear certainty and metadata fields of a slot whose diagnosis is absent
/// or one of the "no diagnosis" sentinels
pub fn apply(slot: &mut DiagnosisSlot, summary: &mut CorrectionSummary) {
    if slot.has_real_diagnosis() {
        return;
    }
    let cleared = slot.clear_certainty();
    if cleared > 0 {
        summary.slots_nulled += 1;
        summary.fields_nulled += cleared;
    }
}
