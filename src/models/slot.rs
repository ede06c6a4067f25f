//! Diagnosis slot model
//!
//! A subject row carries up to ten parallel diagnosis entries. Each entry is
//! a `DiagnosisSlot`: a label plus the certainty fields the correction passes
//! reconcile, and a few descriptive fields the passes never touch.

use crate::models::certainty::{Flag, PastDocumentation, TimePeriod};

/// Number of diagnosis slots per subject row
pub const SLOT_COUNT: usize = 10;

/// Sentinel label for a completed evaluation without a diagnosis
pub const NO_DIAGNOSIS_GIVEN: &str = "No Diagnosis Given";

/// Sentinel label for an evaluation that was not completed
pub const NO_DIAGNOSIS_INCOMPLETE_EVAL: &str = "No Diagnosis Given: Incomplete Eval";

/// Classification of a slot's diagnosis label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosisLabel<'a> {
    /// No label recorded
    Absent,
    /// One of the two "no diagnosis" sentinels
    NoDiagnosis,
    /// A real diagnosis
    Real(&'a str),
}

impl<'a> DiagnosisLabel<'a> {
    #[must_use]
    pub fn classify(label: Option<&'a str>) -> Self {
        match label {
            None => Self::Absent,
            Some(NO_DIAGNOSIS_GIVEN | NO_DIAGNOSIS_INCOMPLETE_EVAL) => Self::NoDiagnosis,
            Some(text) => Self::Real(text),
        }
    }

    #[must_use]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Real(_))
    }
}

/// One diagnosis entry of a subject row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosisSlot {
    /// Diagnosis label, `None` when the cell was empty
    pub diagnosis: Option<String>,
    pub confirmed: Flag,
    pub presumptive: Flag,
    pub requires_confirmation: Flag,
    pub rule_out: Flag,
    pub by_history: Flag,
    pub time_period: TimePeriod,
    pub past_documentation: PastDocumentation,
    /// Diagnostic category, opaque
    pub category: Option<String>,
    /// Diagnostic subcategory, opaque
    pub subcategory: Option<String>,
    /// Specifier text, opaque
    pub specifier: Option<String>,
    /// Diagnosis code, opaque
    pub code: Option<String>,
}

impl DiagnosisSlot {
    /// Create a slot holding a diagnosis label and no certainty data
    #[must_use]
    pub fn new(diagnosis: impl Into<String>) -> Self {
        Self {
            diagnosis: Some(diagnosis.into()),
            ..Self::default()
        }
    }

    /// Set the five certainty flags in form order
    #[must_use]
    pub fn with_flags(
        mut self,
        confirmed: Flag,
        presumptive: Flag,
        requires_confirmation: Flag,
        rule_out: Flag,
        by_history: Flag,
    ) -> Self {
        self.confirmed = confirmed;
        self.presumptive = presumptive;
        self.requires_confirmation = requires_confirmation;
        self.rule_out = rule_out;
        self.by_history = by_history;
        self
    }

    #[must_use]
    pub fn with_time_period(mut self, time_period: TimePeriod) -> Self {
        self.time_period = time_period;
        self
    }

    #[must_use]
    pub fn with_past_documentation(mut self, past_documentation: PastDocumentation) -> Self {
        self.past_documentation = past_documentation;
        self
    }

    #[must_use]
    pub fn label(&self) -> DiagnosisLabel<'_> {
        DiagnosisLabel::classify(self.diagnosis.as_deref())
    }

    /// Whether the slot holds a real, non-sentinel diagnosis
    #[must_use]
    pub fn has_real_diagnosis(&self) -> bool {
        self.label().is_real()
    }

    /// Whether any of the five certainty flags is set
    #[must_use]
    pub const fn any_certainty_true(&self) -> bool {
        self.confirmed.is_true()
            || self.presumptive.is_true()
            || self.requires_confirmation.is_true()
            || self.rule_out.is_true()
            || self.by_history.is_true()
    }

    #[must_use]
    pub const fn is_historical(&self) -> bool {
        self.time_period.is_historical()
    }

    /// Whether every certainty and metadata field is unknown
    #[must_use]
    pub const fn certainty_is_blank(&self) -> bool {
        self.confirmed.is_unknown()
            && self.presumptive.is_unknown()
            && self.requires_confirmation.is_unknown()
            && self.rule_out.is_unknown()
            && self.by_history.is_unknown()
            && self.time_period.is_unknown()
            && self.past_documentation.is_unknown()
    }

    /// Reset all certainty and metadata fields, returning how many held a value
    pub fn clear_certainty(&mut self) -> usize {
        let mut cleared = 0;
        for flag in [
            &mut self.confirmed,
            &mut self.presumptive,
            &mut self.requires_confirmation,
            &mut self.rule_out,
            &mut self.by_history,
        ] {
            if flag.is_known() {
                *flag = Flag::Unknown;
                cleared += 1;
            }
        }
        if !self.time_period.is_unknown() {
            self.time_period = TimePeriod::Unknown;
            cleared += 1;
        }
        if !self.past_documentation.is_unknown() {
            self.past_documentation = PastDocumentation::Unknown;
            cleared += 1;
        }
        cleared
    }
}
