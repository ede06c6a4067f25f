//! Loader for wide diagnosis tables in delimited text form
//!
//! Reads the header, detects the column naming convention, resolves the
//! column layout and parses every row into typed diagnosis slots. All
//! schema and value errors surface here, before any correction runs.

use std::io;
use std::path::Path;
use std::time::Instant;

use log::debug;

use crate::config::CorrectionConfig;
use crate::error::util::safe_open_file;
use crate::error::{DxCorrectionError, Result};
use crate::models::{Dataset, DiagnosisSlot, Flag, PastDocumentation, SubjectRow, TimePeriod};
use crate::schema::{ColumnLayout, ColumnPrefix, ColumnRole, SlotField};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};
use crate::utils::normalize::{canonical_label, clean_cell, identifier_token};

/// Read a diagnosis table from a file
pub fn read_dataset(path: &Path, config: &CorrectionConfig) -> Result<Dataset> {
    log_operation_start("Reading diagnosis data from", path);
    let start = Instant::now();

    let file = safe_open_file(path)?;
    let dataset = read_dataset_from_reader(file, config)?;
    if !dataset.layout.has_identifier() {
        log_warning(
            &format!("No {:?} column found", config.identifier_column),
            Some(path),
        );
    }

    log_operation_complete("read", path, dataset.len(), Some(start.elapsed()));
    Ok(dataset)
}

/// Read a diagnosis table from any byte source
pub fn read_dataset_from_reader<R: io::Read>(
    reader: R,
    config: &CorrectionConfig,
) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let header: Vec<String> = csv_reader.headers()?.iter().map(ToString::to_string).collect();
    let prefix = resolve_prefix(&header, config)?;
    let layout = ColumnLayout::from_header(header, prefix, &config.identifier_column)?;
    debug!(
        "Using column prefix {:?}: {} passthrough/deprecated cells, {} deprecated columns",
        prefix.as_str(),
        layout.extra_cell_count(),
        layout.deprecated_count()
    );

    let rows = csv_reader
        .records()
        .enumerate()
        .map(|(row_index, record)| parse_row(&layout, &record?, row_index, config))
        .collect::<Result<Vec<_>>>()?;

    Ok(Dataset::new(layout, rows))
}

/// Use the configured prefix if any, otherwise detect it from the header
fn resolve_prefix(header: &[String], config: &CorrectionConfig) -> Result<ColumnPrefix> {
    match config.column_prefix {
        None => ColumnPrefix::detect(header),
        Some(prefix) => {
            let first = prefix.diagnosis_column(1);
            if header.iter().any(|column| *column == first) {
                Ok(prefix)
            } else {
                Err(DxCorrectionError::UnrecognizedSchema(format!(
                    "configured prefix {:?} has no {first:?} column",
                    prefix.as_str()
                )))
            }
        }
    }
}

fn parse_row(
    layout: &ColumnLayout,
    record: &csv::StringRecord,
    row_index: usize,
    config: &CorrectionConfig,
) -> Result<SubjectRow> {
    let mut row = SubjectRow::new(None);
    row.extra = vec![None; layout.extra_cell_count()];

    for ((column, role), raw) in layout.header().iter().zip(layout.roles()).zip(record.iter()) {
        let value = clean_cell(raw, config);
        match *role {
            ColumnRole::Identifier => {
                row.identifier = value.as_deref().and_then(identifier_token);
            }
            ColumnRole::Passthrough { cell } | ColumnRole::Deprecated { cell, .. } => {
                row.extra[cell] = value;
            }
            ColumnRole::Slot { index, field } => {
                set_slot_field(&mut row.slots[index], field, value, column, row_index, config)?;
            }
        }
    }

    Ok(row)
}

fn set_slot_field(
    slot: &mut DiagnosisSlot,
    field: SlotField,
    value: Option<String>,
    column: &str,
    row_index: usize,
    config: &CorrectionConfig,
) -> Result<()> {
    if field.is_flag() {
        let flag = parse_flag(value, column, row_index)?;
        if let Some(target) = flag_field(slot, field) {
            *target = flag;
        }
        return Ok(());
    }
    match field {
        SlotField::Diagnosis => {
            slot.diagnosis = value.map(|label| canonical_label(label, &config.label_aliases));
        }
        SlotField::TimePeriod => slot.time_period = TimePeriod::parse(value.as_deref()),
        SlotField::PastDocumentation => {
            slot.past_documentation = PastDocumentation::parse(value.as_deref());
        }
        SlotField::Category => slot.category = value,
        SlotField::Subcategory => slot.subcategory = value,
        SlotField::Specifier => slot.specifier = value,
        SlotField::Code => slot.code = value,
        _ => {}
    }
    Ok(())
}

/// The tri-state flag a slot field maps to, `None` for non-flag fields
fn flag_field(slot: &mut DiagnosisSlot, field: SlotField) -> Option<&mut Flag> {
    match field {
        SlotField::Confirmed => Some(&mut slot.confirmed),
        SlotField::Presumptive => Some(&mut slot.presumptive),
        SlotField::RequiresConfirmation => Some(&mut slot.requires_confirmation),
        SlotField::RuleOut => Some(&mut slot.rule_out),
        SlotField::ByHistory => Some(&mut slot.by_history),
        _ => None,
    }
}

fn parse_flag(value: Option<String>, column: &str, row_index: usize) -> Result<Flag> {
    Flag::parse(value.as_deref()).ok_or_else(|| DxCorrectionError::InvalidValue {
        column: column.to_string(),
        row: row_index,
        value: value.unwrap_or_default(),
    })
}
