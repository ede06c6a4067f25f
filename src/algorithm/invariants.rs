//! Post-correction invariant checks
//!
//! Verifies that corrected rows are internally consistent. Used by the CLI
//! `--check` flag and by the test suite.

use std::fmt;

use crate::models::{DiagnosisSlot, SubjectRow};

/// Consistency rule a corrected slot must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invariant {
    /// No certainty data on a slot without a real diagnosis
    NullPropagation,
    /// A positive confirmed, presumptive or requires-confirmation flag has a by-history answer
    ByHistoryAnswered,
    /// A real diagnosis never has both confirmed and presumptive unknown
    ConfirmedPresumptiveResolved,
    /// A by-history diagnosis has no time period
    ByHistoryWithoutTime,
    /// Past documentation only on by-history or historical slots
    PastDocumentationGated,
}

impl Invariant {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NullPropagation => "certainty data on a slot without a diagnosis",
            Self::ByHistoryAnswered => "positive certainty with unknown by-history",
            Self::ConfirmedPresumptiveResolved => "confirmed and presumptive both unknown",
            Self::ByHistoryWithoutTime => "time period on a by-history diagnosis",
            Self::PastDocumentationGated => "past documentation on a current diagnosis",
        }
    }

    /// Whether the slot satisfies this invariant
    #[must_use]
    pub fn holds(self, slot: &DiagnosisSlot) -> bool {
        match self {
            Self::NullPropagation => slot.has_real_diagnosis() || slot.certainty_is_blank(),
            Self::ByHistoryAnswered => {
                !(slot.confirmed.is_true()
                    || slot.presumptive.is_true()
                    || slot.requires_confirmation.is_true())
                    || slot.by_history.is_known()
            }
            Self::ConfirmedPresumptiveResolved => {
                !slot.has_real_diagnosis()
                    || slot.confirmed.is_known()
                    || slot.presumptive.is_known()
            }
            Self::ByHistoryWithoutTime => {
                !slot.by_history.is_true() || slot.time_period.is_unknown()
            }
            Self::PastDocumentationGated => {
                slot.past_documentation.is_unknown()
                    || slot.by_history.is_true()
                    || slot.is_historical()
            }
        }
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A slot that breaks an invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Zero-based row index
    pub row: usize,
    pub identifier: Option<String>,
    /// 1-based slot number
    pub slot: usize,
    pub invariant: Invariant,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} ({}), slot {:02}: {}",
            self.row,
            self.identifier.as_deref().unwrap_or("no identifier"),
            self.slot,
            self.invariant
        )
    }
}

/// Invariants the core passes guarantee
pub const CORE_INVARIANTS: [Invariant; 4] = [
    Invariant::NullPropagation,
    Invariant::ByHistoryAnswered,
    Invariant::ConfirmedPresumptiveResolved,
    Invariant::PastDocumentationGated,
];

/// Check every slot against the core invariants
///
/// `include_time_exclusivity` adds the by-history/time check, which only
/// holds when by-history time clearing is enabled.
#[must_use]
pub fn check_invariants(
    rows: &[SubjectRow],
    include_time_exclusivity: bool,
) -> Vec<InvariantViolation> {
    let mut invariants = CORE_INVARIANTS.to_vec();
    if include_time_exclusivity {
        invariants.push(Invariant::ByHistoryWithoutTime);
    }

    let invariants = invariants.as_slice();
    rows.iter()
        .enumerate()
        .flat_map(move |(row_index, row)| {
            row.numbered_slots().flat_map(move |(number, slot)| {
                invariants
                    .iter()
                    .filter(move |invariant| !invariant.holds(slot))
                    .map(move |&invariant| InvariantViolation {
                        row: row_index,
                        identifier: row.identifier.clone(),
                        slot: number,
                        invariant,
                    })
            })
        })
        .collect()
}
