//! Utility modules
//!
//! Cell normalization used by the loader, synthetic data generation and
//! logging helpers.

pub mod logging;
pub mod normalize;
pub mod test_data;

pub use normalize::{canonical_label, clean_cell, identifier_token};
pub use test_data::{generate_test_dataset, generate_test_rows};
