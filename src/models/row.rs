//! Subject row model

use crate::models::slot::{DiagnosisSlot, SLOT_COUNT};

/// One subject record of the wide diagnosis table
///
/// The slot array has a fixed length: correction passes mutate slots in
/// place but never add or remove them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRow {
    /// Subject identifier, first comma-separated token of the source cell
    pub identifier: Option<String>,
    /// Diagnosis slots 1..=10, stored at indices 0..10
    pub slots: [DiagnosisSlot; SLOT_COUNT],
    /// Raw cells of passthrough and deprecated columns, indexed by layout cell
    pub extra: Vec<Option<String>>,
}

impl SubjectRow {
    /// Create a row with empty slots
    #[must_use]
    pub fn new(identifier: Option<String>) -> Self {
        Self {
            identifier,
            slots: std::array::from_fn(|_| DiagnosisSlot::default()),
            extra: Vec::new(),
        }
    }

    /// Replace the slot with the given 1-based number
    ///
    /// # Panics
    /// Panics when `number` is outside `1..=10`.
    #[must_use]
    pub fn with_slot(mut self, number: usize, slot: DiagnosisSlot) -> Self {
        assert!(
            (1..=SLOT_COUNT).contains(&number),
            "slot number {number} out of range"
        );
        self.slots[number - 1] = slot;
        self
    }

    /// Slot by 1-based number
    #[must_use]
    pub fn slot(&self, number: usize) -> Option<&DiagnosisSlot> {
        number.checked_sub(1).and_then(|index| self.slots.get(index))
    }

    /// Slots paired with their 1-based numbers
    pub fn numbered_slots(&self) -> impl Iterator<Item = (usize, &DiagnosisSlot)> {
        self.slots.iter().enumerate().map(|(index, slot)| (index + 1, slot))
    }

    /// Number of slots holding a real diagnosis
    #[must_use]
    pub fn diagnosis_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.has_real_diagnosis()).count()
    }
}

impl Default for SubjectRow {
    fn default() -> Self {
        Self::new(None)
    }
}
