//! Column naming conventions for the wide diagnosis table
//!
//! Diagnosis columns are named `<prefix><NN><suffix>` where `NN` is the
//! zero-padded slot number. Two prefixes exist in released exports. Columns
//! are resolved to typed slot fields once, when the header is read, so no
//! correction rule ever rebuilds a column name.

pub mod layout;

pub use layout::{ColumnLayout, ColumnRole};

use std::fmt;
use std::str::FromStr;

use crate::error::{DxCorrectionError, Result};
use crate::models::slot::SLOT_COUNT;

/// Diagnosis column naming convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnPrefix {
    /// `Diagnosis_ClinicianConsensus,DX_`, used by full data releases
    ClinicianConsensus,
    /// `DX_`, used by trimmed exports
    Short,
}

impl ColumnPrefix {
    /// Detection order; the first convention whose `01` column exists wins
    pub const ALL: [Self; 2] = [Self::ClinicianConsensus, Self::Short];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClinicianConsensus => "Diagnosis_ClinicianConsensus,DX_",
            Self::Short => "DX_",
        }
    }

    /// Detect the convention used by a header
    pub fn detect<S: AsRef<str>>(header: &[S]) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|prefix| {
                let first = prefix.diagnosis_column(1);
                header.iter().any(|column| column.as_ref() == first)
            })
            .ok_or_else(|| {
                DxCorrectionError::UnrecognizedSchema(format!(
                    "expected a {:?} or {:?} column",
                    Self::ClinicianConsensus.diagnosis_column(1),
                    Self::Short.diagnosis_column(1)
                ))
            })
    }

    /// Diagnosis label column for a 1-based slot number
    #[must_use]
    pub fn diagnosis_column(self, slot_number: usize) -> String {
        format!("{}{slot_number:02}", self.as_str())
    }

    /// Column holding `field` for a 1-based slot number
    #[must_use]
    pub fn field_column(self, slot_number: usize, field: SlotField) -> String {
        format!("{}{}", self.diagnosis_column(slot_number), field.suffix())
    }

    #[must_use]
    pub fn deprecated_column(self, slot_number: usize, field: DeprecatedField) -> String {
        format!("{}{}", self.diagnosis_column(slot_number), field.suffix())
    }
}

impl fmt::Display for ColumnPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnPrefix {
    type Err = DxCorrectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "clinician" | "clinician-consensus" | "Diagnosis_ClinicianConsensus,DX_" => {
                Ok(Self::ClinicianConsensus)
            }
            "short" | "DX_" => Ok(Self::Short),
            other => Err(DxCorrectionError::UnrecognizedSchema(format!(
                "unknown column prefix {other:?}"
            ))),
        }
    }
}

/// Typed per-slot field and its column suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotField {
    Diagnosis,
    Confirmed,
    Presumptive,
    RequiresConfirmation,
    RuleOut,
    ByHistory,
    TimePeriod,
    PastDocumentation,
    Category,
    Subcategory,
    Specifier,
    Code,
}

impl SlotField {
    /// Fields that must be present for every slot
    pub const REQUIRED: [Self; 8] = [
        Self::Diagnosis,
        Self::Confirmed,
        Self::Presumptive,
        Self::RequiresConfirmation,
        Self::RuleOut,
        Self::ByHistory,
        Self::TimePeriod,
        Self::PastDocumentation,
    ];

    /// Descriptive fields loaded when present
    pub const OPTIONAL: [Self; 4] =
        [Self::Category, Self::Subcategory, Self::Specifier, Self::Code];

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Diagnosis => "",
            Self::Confirmed => "_Confirmed",
            Self::Presumptive => "_Presum",
            Self::RequiresConfirmation => "_RC",
            Self::RuleOut => "_RuleOut",
            Self::ByHistory => "_ByHx",
            Self::TimePeriod => "_Time",
            Self::PastDocumentation => "_Past_Doc",
            Self::Category => "_Cat",
            Self::Subcategory => "_Sub",
            Self::Specifier => "_Spec",
            Self::Code => "_Code",
        }
    }

    /// Whether the field is parsed as a tri-state flag
    #[must_use]
    pub const fn is_flag(self) -> bool {
        matches!(
            self,
            Self::Confirmed
                | Self::Presumptive
                | Self::RequiresConfirmation
                | Self::RuleOut
                | Self::ByHistory
        )
    }
}

/// Per-slot fields from retired template versions, removed on output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeprecatedField {
    New,
    Remission,
    PartialRemission,
}

impl DeprecatedField {
    pub const ALL: [Self; 3] = [Self::New, Self::Remission, Self::PartialRemission];

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::New => "_New",
            Self::Remission => "_Rem",
            Self::PartialRemission => "_PRem",
        }
    }
}

/// 1-based slot numbers in column order
pub fn slot_numbers() -> impl Iterator<Item = usize> {
    1..=SLOT_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        let prefix = ColumnPrefix::ClinicianConsensus;
        assert_eq!(prefix.diagnosis_column(1), "Diagnosis_ClinicianConsensus,DX_01");
        assert_eq!(
            prefix.field_column(10, SlotField::PastDocumentation),
            "Diagnosis_ClinicianConsensus,DX_10_Past_Doc"
        );
        assert_eq!(
            ColumnPrefix::Short.deprecated_column(3, DeprecatedField::PartialRemission),
            "DX_03_PRem"
        );
    }

    #[test]
    fn test_detect_prefers_clinician_consensus() {
        let header = ["Identifiers", "DX_01", "Diagnosis_ClinicianConsensus,DX_01"];
        assert_eq!(
            ColumnPrefix::detect(&header).unwrap(),
            ColumnPrefix::ClinicianConsensus
        );
        assert_eq!(
            ColumnPrefix::detect(&["Identifiers", "DX_01"]).unwrap(),
            ColumnPrefix::Short
        );
    }

    #[test]
    fn test_detect_unrecognized() {
        let err = ColumnPrefix::detect(&["Identifiers", "Diagnosis_01"]).unwrap_err();
        assert!(matches!(err, DxCorrectionError::UnrecognizedSchema(_)));
    }

    #[test]
    fn test_prefix_from_str() {
        assert_eq!("short".parse::<ColumnPrefix>().unwrap(), ColumnPrefix::Short);
        assert_eq!(
            "clinician".parse::<ColumnPrefix>().unwrap(),
            ColumnPrefix::ClinicianConsensus
        );
        assert!("dx".parse::<ColumnPrefix>().is_err());
    }
}
