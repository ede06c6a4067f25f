//! Writers for corrected diagnosis tables
//!
//! The wide writer keeps the input header order and drops the retired
//! per-slot columns. The long writer emits one record per slot for data
//! checks.

pub mod long_format;

pub use long_format::{LongDiagnosisRecord, long_records, write_long_format};

use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Instant;

use crate::algorithm::CorrectionSummary;
use crate::config::CorrectionConfig;
use crate::error::Result;
use crate::error::util::ensure_parent_dir;
use crate::models::{Dataset, DiagnosisSlot, SubjectRow};
use crate::schema::{ColumnRole, SlotField};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Write a corrected table to a file
pub fn write_dataset(dataset: &Dataset, path: &Path, config: &CorrectionConfig) -> Result<()> {
    log_operation_start("Writing corrected data to", path);
    let start = Instant::now();

    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    write_dataset_to_writer(dataset, file, config.drop_deprecated)?;

    log_operation_complete("wrote", path, dataset.len(), Some(start.elapsed()));
    Ok(())
}

/// Write a corrected table to any byte sink
pub fn write_dataset_to_writer<W: io::Write>(
    dataset: &Dataset,
    writer: W,
    drop_deprecated: bool,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let columns: Vec<(&str, ColumnRole)> =
        dataset.layout.output_columns(drop_deprecated).collect();

    csv_writer.write_record(columns.iter().map(|(column, _)| *column))?;
    for row in &dataset.rows {
        csv_writer.write_record(columns.iter().map(|(_, role)| row_cell(row, *role)))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a correction summary as pretty-printed JSON
pub fn write_summary_json(summary: &CorrectionSummary, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(())
}

fn row_cell(row: &SubjectRow, role: ColumnRole) -> &str {
    let cell = match role {
        ColumnRole::Identifier => row.identifier.as_deref(),
        ColumnRole::Passthrough { cell } | ColumnRole::Deprecated { cell, .. } => {
            row.extra.get(cell).and_then(Option::as_deref)
        }
        ColumnRole::Slot { index, field } => slot_cell(&row.slots[index], field),
    };
    cell.unwrap_or("")
}

/// Output text of a typed slot field, `None` for an empty cell
#[must_use]
pub fn slot_cell(slot: &DiagnosisSlot, field: SlotField) -> Option<&str> {
    match field {
        SlotField::Diagnosis => slot.diagnosis.as_deref(),
        SlotField::Confirmed => slot.confirmed.as_cell(),
        SlotField::Presumptive => slot.presumptive.as_cell(),
        SlotField::RequiresConfirmation => slot.requires_confirmation.as_cell(),
        SlotField::RuleOut => slot.rule_out.as_cell(),
        SlotField::ByHistory => slot.by_history.as_cell(),
        SlotField::TimePeriod => slot.time_period.as_cell(),
        SlotField::PastDocumentation => slot.past_documentation.as_cell(),
        SlotField::Category => slot.category.as_deref(),
        SlotField::Subcategory => slot.subcategory.as_deref(),
        SlotField::Specifier => slot.specifier.as_deref(),
        SlotField::Code => slot.code.as_deref(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Flag, TimePeriod};
    use crate::schema::ColumnPrefix;
    use crate::utils::generate_test_dataset;

    #[test]
    fn test_slot_cells() {
        let slot = DiagnosisSlot::new("Enuresis")
            .with_flags(Flag::True, Flag::False, Flag::Unknown, Flag::Unknown, Flag::False)
            .with_time_period(TimePeriod::Historical);
        assert_eq!(slot_cell(&slot, SlotField::Diagnosis), Some("Enuresis"));
        assert_eq!(slot_cell(&slot, SlotField::Confirmed), Some("1"));
        assert_eq!(slot_cell(&slot, SlotField::Presumptive), Some("0"));
        assert_eq!(slot_cell(&slot, SlotField::RuleOut), None);
        assert_eq!(slot_cell(&slot, SlotField::TimePeriod), Some("2"));
        assert_eq!(slot_cell(&slot, SlotField::Code), None);
    }

    #[test]
    fn test_writes_header_and_rows() {
        let dataset = generate_test_dataset(3, 4, ColumnPrefix::Short);
        let mut buffer = Vec::new();
        write_dataset_to_writer(&dataset, &mut buffer, true).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("Identifiers,DX_01,DX_01_Confirmed,DX_01_Presum"));
        assert_eq!(lines.count(), 4);
    }
}
