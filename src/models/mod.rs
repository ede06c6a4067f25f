//! Domain models for the wide diagnosis table
//!
//! A `Dataset` owns `SubjectRow`s; each row owns ten `DiagnosisSlot`s whose
//! certainty fields use the explicit value types from `certainty`.

pub mod certainty;
pub mod dataset;
pub mod row;
pub mod slot;

// Re-export commonly used types
pub use certainty::{Flag, PastDocumentation, TimePeriod};
pub use dataset::Dataset;
pub use row::SubjectRow;
pub use slot::{
    DiagnosisLabel, DiagnosisSlot, NO_DIAGNOSIS_GIVEN, NO_DIAGNOSIS_INCOMPLETE_EVAL, SLOT_COUNT,
};
