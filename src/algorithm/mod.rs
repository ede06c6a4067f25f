//! Correction algorithms for clinician consensus diagnosis data
//!
//! `correction` holds the ordered rule passes; `invariants` checks that a
//! corrected row set is internally consistent.

pub mod correction;
pub mod invariants;

pub use correction::{CorrectionPass, CorrectionSummary, apply_pass, correct, run, run_dataset};
pub use invariants::{Invariant, InvariantViolation, check_invariants};
