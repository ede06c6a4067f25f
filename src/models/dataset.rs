//! In-memory wide diagnosis table

use itertools::Itertools;

use crate::models::row::SubjectRow;
use crate::models::slot::DiagnosisLabel;
use crate::schema::{ColumnLayout, ColumnPrefix};

/// Loaded table: the resolved header layout plus the typed rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub layout: ColumnLayout,
    pub rows: Vec<SubjectRow>,
}

impl Dataset {
    #[must_use]
    pub const fn new(layout: ColumnLayout, rows: Vec<SubjectRow>) -> Self {
        Self { layout, rows }
    }

    #[must_use]
    pub const fn prefix(&self) -> ColumnPrefix {
        self.layout.prefix()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted distinct real diagnosis labels across all slots
    #[must_use]
    pub fn distinct_diagnoses(&self) -> Vec<&str> {
        self.rows
            .iter()
            .flat_map(|row| row.slots.iter())
            .filter_map(|slot| match slot.label() {
                DiagnosisLabel::Real(label) => Some(label),
                _ => None,
            })
            .sorted_unstable()
            .dedup()
            .collect()
    }

    /// Total number of slots holding a real diagnosis
    #[must_use]
    pub fn diagnosis_count(&self) -> usize {
        self.rows.iter().map(SubjectRow::diagnosis_count).sum()
    }
}
