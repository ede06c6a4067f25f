//! Synthetic wide diagnosis data
//!
//! Draws every field independently, so most generated slots are
//! inconsistent in exactly the ways the correction passes repair. Output is
//! deterministic for a given seed.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::config::DEFAULT_IDENTIFIER_COLUMN;
use crate::models::{
    Dataset, DiagnosisSlot, Flag, NO_DIAGNOSIS_GIVEN, NO_DIAGNOSIS_INCOMPLETE_EVAL,
    PastDocumentation, SubjectRow, TimePeriod,
};
use crate::schema::{ColumnLayout, ColumnPrefix};

/// Labels drawn for generated slots; `None` is an empty cell
pub const TEST_DIAGNOSES: [Option<&str>; 8] = [
    Some("ADHD-Combined Type"),
    Some("Bipolar I Disorder"),
    Some("Conduct Disorder-Unspecified onset"),
    Some("Generalized Anxiety Disorder"),
    Some("Major Depressive Disorder"),
    Some(NO_DIAGNOSIS_GIVEN),
    Some(NO_DIAGNOSIS_INCOMPLETE_EVAL),
    None,
];

const FLAGS: [Flag; 3] = [Flag::True, Flag::False, Flag::Unknown];
const TIME_CODES: [Option<i64>; 3] = [Some(1), Some(2), None];
const PAST_DOC_CODES: [Option<i64>; 3] = [Some(1), Some(3), None];

/// Generate `n_rows` rows with every slot filled at random
#[must_use]
pub fn generate_test_rows(seed: u64, n_rows: usize) -> Vec<SubjectRow> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_rows)
        .map(|i| {
            let mut row = SubjectRow::new(Some(format!("NDAR{i:06}")));
            for slot in &mut row.slots {
                *slot = random_slot(&mut rng);
            }
            row
        })
        .collect()
}

/// Generate a dataset with the canonical column layout
#[must_use]
pub fn generate_test_dataset(seed: u64, n_rows: usize, prefix: ColumnPrefix) -> Dataset {
    Dataset::new(
        ColumnLayout::canonical(prefix, DEFAULT_IDENTIFIER_COLUMN),
        generate_test_rows(seed, n_rows),
    )
}

fn random_slot(rng: &mut StdRng) -> DiagnosisSlot {
    let mut flag = || FLAGS.choose(rng).copied().unwrap_or_default();
    let (c, p, rc, ro, bh) = (flag(), flag(), flag(), flag(), flag());
    let diagnosis = TEST_DIAGNOSES.choose(rng).copied().flatten();
    let time_period = TIME_CODES
        .choose(rng)
        .copied()
        .flatten()
        .map_or(TimePeriod::Unknown, TimePeriod::from);
    let past_documentation = PAST_DOC_CODES
        .choose(rng)
        .copied()
        .flatten()
        .map_or(PastDocumentation::Unknown, PastDocumentation::from);

    DiagnosisSlot {
        diagnosis: diagnosis.map(ToString::to_string),
        ..DiagnosisSlot::default()
    }
    .with_flags(c, p, rc, ro, bh)
    .with_time_period(time_period)
    .with_past_documentation(past_documentation)
}
