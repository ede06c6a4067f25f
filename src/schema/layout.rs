//! Header layout resolution
//!
//! Maps every input column to the role it plays: the subject identifier,
//! a typed slot field, a deprecated slot field, or an untouched passthrough
//! column.

use rustc_hash::FxHashMap;

use crate::error::{DxCorrectionError, Result};
use crate::schema::{ColumnPrefix, DeprecatedField, SlotField, slot_numbers};

/// Role of a single column in the wide table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// Subject identifier column
    Identifier,
    /// Typed field of the slot at a 0-based index
    Slot { index: usize, field: SlotField },
    /// Retired slot field; the raw text is kept in the row's extra cells
    Deprecated {
        index: usize,
        field: DeprecatedField,
        cell: usize,
    },
    /// Any other column, kept verbatim in the row's extra cells
    Passthrough { cell: usize },
}

/// Resolved header of a wide diagnosis table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    prefix: ColumnPrefix,
    header: Vec<String>,
    roles: Vec<ColumnRole>,
    extra_cells: usize,
    identifier_column: Option<usize>,
}

impl ColumnLayout {
    /// Resolve a header against a naming convention
    ///
    /// Every required slot field must exist for all ten slots. Descriptive
    /// and deprecated fields are mapped when present.
    pub fn from_header(
        header: Vec<String>,
        prefix: ColumnPrefix,
        identifier_column: &str,
    ) -> Result<Self> {
        let mut roles: Vec<Option<ColumnRole>> = vec![None; header.len()];
        let identifier_position;
        {
            let positions: FxHashMap<&str, usize> = header
                .iter()
                .enumerate()
                .map(|(position, column)| (column.as_str(), position))
                .collect();

            identifier_position = positions.get(identifier_column).copied();
            if let Some(position) = identifier_position {
                roles[position] = Some(ColumnRole::Identifier);
            }

            for number in slot_numbers() {
                let index = number - 1;
                for field in SlotField::REQUIRED {
                    let column = prefix.field_column(number, field);
                    let position = *positions
                        .get(column.as_str())
                        .ok_or(DxCorrectionError::MissingColumn { column })?;
                    roles[position] = Some(ColumnRole::Slot { index, field });
                }
                for field in SlotField::OPTIONAL {
                    let column = prefix.field_column(number, field);
                    if let Some(&position) = positions.get(column.as_str()) {
                        roles[position] = Some(ColumnRole::Slot { index, field });
                    }
                }
                for field in DeprecatedField::ALL {
                    let column = prefix.deprecated_column(number, field);
                    if let Some(&position) = positions.get(column.as_str()) {
                        roles[position] = Some(ColumnRole::Deprecated {
                            index,
                            field,
                            cell: 0,
                        });
                    }
                }
            }
        }

        let mut extra_cells = 0;
        let roles = roles
            .into_iter()
            .map(|role| match role {
                Some(ColumnRole::Deprecated { index, field, .. }) => {
                    let cell = extra_cells;
                    extra_cells += 1;
                    ColumnRole::Deprecated { index, field, cell }
                }
                Some(role) => role,
                None => {
                    let cell = extra_cells;
                    extra_cells += 1;
                    ColumnRole::Passthrough { cell }
                }
            })
            .collect();

        Ok(Self {
            prefix,
            header,
            roles,
            extra_cells,
            identifier_column: identifier_position,
        })
    }

    /// Layout with an identifier column and every typed slot field, in slot order
    #[must_use]
    pub fn canonical(prefix: ColumnPrefix, identifier_column: &str) -> Self {
        let mut header = vec![identifier_column.to_string()];
        let mut roles = vec![ColumnRole::Identifier];
        for number in slot_numbers() {
            for field in SlotField::REQUIRED.into_iter().chain(SlotField::OPTIONAL) {
                header.push(prefix.field_column(number, field));
                roles.push(ColumnRole::Slot {
                    index: number - 1,
                    field,
                });
            }
        }
        Self {
            prefix,
            header,
            roles,
            extra_cells: 0,
            identifier_column: Some(0),
        }
    }

    #[must_use]
    pub const fn prefix(&self) -> ColumnPrefix {
        self.prefix
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[must_use]
    pub fn roles(&self) -> &[ColumnRole] {
        &self.roles
    }

    /// Number of raw cells each row keeps for passthrough and deprecated columns
    #[must_use]
    pub const fn extra_cell_count(&self) -> usize {
        self.extra_cells
    }

    #[must_use]
    pub const fn has_identifier(&self) -> bool {
        self.identifier_column.is_some()
    }

    /// Number of deprecated columns found in the input header
    #[must_use]
    pub fn deprecated_count(&self) -> usize {
        self.roles
            .iter()
            .filter(|role| matches!(role, ColumnRole::Deprecated { .. }))
            .count()
    }

    /// Output columns with their roles, optionally without deprecated fields
    pub fn output_columns(
        &self,
        drop_deprecated: bool,
    ) -> impl Iterator<Item = (&str, ColumnRole)> + '_ {
        self.header
            .iter()
            .zip(self.roles.iter().copied())
            .filter(move |(_, role)| {
                !(drop_deprecated && matches!(role, ColumnRole::Deprecated { .. }))
            })
            .map(|(column, role)| (column.as_str(), role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_header(extra: &[&str]) -> Vec<String> {
        let mut header = vec!["Identifiers".to_string(), "Age".to_string()];
        for number in slot_numbers() {
            for field in SlotField::REQUIRED {
                header.push(ColumnPrefix::Short.field_column(number, field));
            }
        }
        header.extend(extra.iter().map(ToString::to_string));
        header
    }

    #[test]
    fn test_layout_roles() {
        let header = short_header(&["DX_01_New", "DX_02_Code"]);
        let layout = ColumnLayout::from_header(header, ColumnPrefix::Short, "Identifiers").unwrap();

        assert!(layout.has_identifier());
        assert_eq!(layout.roles()[0], ColumnRole::Identifier);
        assert_eq!(layout.roles()[1], ColumnRole::Passthrough { cell: 0 });
        assert_eq!(
            layout.roles()[2],
            ColumnRole::Slot {
                index: 0,
                field: SlotField::Diagnosis
            }
        );
        let n = layout.roles().len();
        assert_eq!(
            layout.roles()[n - 2],
            ColumnRole::Deprecated {
                index: 0,
                field: DeprecatedField::New,
                cell: 1
            }
        );
        assert_eq!(
            layout.roles()[n - 1],
            ColumnRole::Slot {
                index: 1,
                field: SlotField::Code
            }
        );
        assert_eq!(layout.extra_cell_count(), 2);
        assert_eq!(layout.deprecated_count(), 1);
    }

    #[test]
    fn test_output_columns_drop_deprecated() {
        let header = short_header(&["DX_01_New", "DX_01_Rem", "DX_01_PRem"]);
        let layout = ColumnLayout::from_header(header, ColumnPrefix::Short, "Identifiers").unwrap();
        let kept: Vec<&str> = layout.output_columns(true).map(|(c, _)| c).collect();
        assert_eq!(kept.len(), layout.header().len() - 3);
        assert!(!kept.contains(&"DX_01_Rem"));
        assert_eq!(layout.output_columns(false).count(), layout.header().len());
    }

    #[test]
    fn test_missing_required_column() {
        let mut header = short_header(&[]);
        header.retain(|c| c != "DX_07_Past_Doc");
        let err =
            ColumnLayout::from_header(header, ColumnPrefix::Short, "Identifiers").unwrap_err();
        match err {
            DxCorrectionError::MissingColumn { column } => assert_eq!(column, "DX_07_Past_Doc"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_canonical_layout() {
        let layout = ColumnLayout::canonical(ColumnPrefix::ClinicianConsensus, "Identifiers");
        assert_eq!(layout.header().len(), 1 + 10 * 12);
        assert_eq!(layout.extra_cell_count(), 0);
        assert_eq!(layout.header()[1], "Diagnosis_ClinicianConsensus,DX_01");
    }
}
