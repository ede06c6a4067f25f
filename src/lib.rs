//! Rule-based reconciliation of clinician consensus diagnosis data.
//!
//! A wide diagnosis table holds up to ten diagnosis slots per subject, each
//! with a cluster of certainty fields. Because the data entry template
//! changed over the years, many slots have missing or inconsistent
//! certainty values. This crate loads such a table, repairs it with a fixed
//! sequence of deterministic rules and writes it back.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod processor;
pub mod reader;
pub mod schema;
pub mod utils;
pub mod writer;

// Re-export the most common types for easier use
// Core types
pub use config::CorrectionConfig;
pub use error::{DxCorrectionError, Result};
pub use models::{
    Dataset, DiagnosisLabel, DiagnosisSlot, Flag, PastDocumentation, SubjectRow, TimePeriod,
};
pub use schema::{ColumnLayout, ColumnPrefix, SlotField};

// Correction engine
pub use algorithm::{
    CorrectionPass, CorrectionSummary, Invariant, InvariantViolation, check_invariants, correct,
    run, run_dataset,
};

// File handling
pub use processor::{CorrectionOutcome, correct_file};
pub use reader::{read_dataset, read_dataset_from_reader};
pub use writer::{write_dataset, write_dataset_to_writer, write_long_format, write_summary_json};
