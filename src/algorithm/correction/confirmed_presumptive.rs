//! Confirmed/Presumptive Resolver
//!
//! The oldest template had no explicit "confirmed" checkbox. When both
//! confirmed and presumptive are missing for a real diagnosis, the other
//! certainty flags decide: any alternative certainty means not confirmed,
//! none means confirmed.

use crate::algorithm::correction::{CorrectionSummary, by_history};
use crate::models::{DiagnosisSlot, Flag};

/// Resolve confirmed and presumptive when both are unknown
///
/// Slots where either flag holds a value are left alone. Inferring
/// `confirmed = true` also answers an unknown by-history flag with false.
pub fn apply(slot: &mut DiagnosisSlot, summary: &mut CorrectionSummary) {
    if !slot.has_real_diagnosis() || slot.confirmed.is_known() || slot.presumptive.is_known() {
        return;
    }

    let other_certainty = slot.requires_confirmation.is_true()
        || slot.rule_out.is_true()
        || slot.by_history.is_true();

    slot.presumptive = Flag::False;
    if other_certainty {
        slot.confirmed = Flag::False;
        summary.inferred_not_confirmed += 1;
    } else {
        slot.confirmed = Flag::True;
        summary.inferred_confirmed += 1;
        by_history::backfill(slot, summary);
    }
}
