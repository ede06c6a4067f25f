#![allow(dead_code)]

use std::path::{Path, PathBuf};

use dx_correction::{ColumnPrefix, DiagnosisSlot, Result, SlotField, SubjectRow};

/// Seeds used for randomized property checks
pub const SEEDS: [u64; 4] = [11, 42, 2024, 7_777];

/// Deprecated suffixes present in full exports
pub const DEPRECATED_SUFFIXES: [&str; 3] = ["_New", "_Rem", "_PRem"];

/// Header of a full export: identifiers, one passthrough column, every slot
/// field and the deprecated columns
#[must_use]
pub fn wide_header(prefix: ColumnPrefix) -> Vec<String> {
    let mut header = vec!["Identifiers".to_string(), "Age".to_string()];
    for number in 1..=10 {
        for field in SlotField::REQUIRED.into_iter().chain(SlotField::OPTIONAL) {
            header.push(prefix.field_column(number, field));
        }
        for suffix in DEPRECATED_SUFFIXES {
            header.push(format!("{}{suffix}", prefix.diagnosis_column(number)));
        }
    }
    header
}

/// Build one data line for `wide_header`, filling the listed cells by column name
#[must_use]
pub fn wide_record(header: &[String], cells: &[(&str, &str)]) -> Vec<String> {
    header
        .iter()
        .map(|column| {
            cells
                .iter()
                .find(|(name, _)| name == column)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Write a table with the csv writer so that quoting matches real exports
pub fn write_csv(
    dir: &Path,
    name: &str,
    header: &[String],
    records: &[Vec<String>],
) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(header)?;
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(path)
}

/// A single-row, single-slot table for scenario checks
#[must_use]
pub fn single_slot_rows(slot: DiagnosisSlot) -> Vec<SubjectRow> {
    vec![SubjectRow::new(Some("NDAR000001".to_string())).with_slot(1, slot)]
}
