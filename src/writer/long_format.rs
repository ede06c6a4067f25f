//! Long-format export
//!
//! Melts the wide table into one record per subject and slot number, the
//! shape used when checking corrections diagnosis by diagnosis.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::error::util::ensure_parent_dir;
use crate::models::SubjectRow;
use crate::schema::SlotField;
use crate::writer::slot_cell;

/// One diagnosis slot of one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongDiagnosisRecord<'a> {
    #[serde(rename = "Identifiers")]
    pub identifier: Option<&'a str>,
    #[serde(rename = "Diagnosis Number")]
    pub number: usize,
    #[serde(rename = "Diagnosis")]
    pub diagnosis: Option<&'a str>,
    #[serde(rename = "Category")]
    pub category: Option<&'a str>,
    #[serde(rename = "Subcategory")]
    pub subcategory: Option<&'a str>,
    #[serde(rename = "Spec")]
    pub specifier: Option<&'a str>,
    #[serde(rename = "Code")]
    pub code: Option<&'a str>,
    #[serde(rename = "Confirmed")]
    pub confirmed: Option<&'a str>,
    #[serde(rename = "Presum")]
    pub presumptive: Option<&'a str>,
    #[serde(rename = "RC")]
    pub requires_confirmation: Option<&'a str>,
    #[serde(rename = "RuleOut")]
    pub rule_out: Option<&'a str>,
    #[serde(rename = "ByHx")]
    pub by_history: Option<&'a str>,
    #[serde(rename = "Time")]
    pub time_period: Option<&'a str>,
    #[serde(rename = "Past_Doc")]
    pub past_documentation: Option<&'a str>,
}

/// Melt rows into long records, ordered by row then slot number
#[must_use]
pub fn long_records(rows: &[SubjectRow]) -> Vec<LongDiagnosisRecord<'_>> {
    rows.iter()
        .flat_map(|row| {
            row.numbered_slots().map(move |(number, slot)| LongDiagnosisRecord {
                identifier: row.identifier.as_deref(),
                number,
                diagnosis: slot_cell(slot, SlotField::Diagnosis),
                category: slot_cell(slot, SlotField::Category),
                subcategory: slot_cell(slot, SlotField::Subcategory),
                specifier: slot_cell(slot, SlotField::Specifier),
                code: slot_cell(slot, SlotField::Code),
                confirmed: slot_cell(slot, SlotField::Confirmed),
                presumptive: slot_cell(slot, SlotField::Presumptive),
                requires_confirmation: slot_cell(slot, SlotField::RequiresConfirmation),
                rule_out: slot_cell(slot, SlotField::RuleOut),
                by_history: slot_cell(slot, SlotField::ByHistory),
                time_period: slot_cell(slot, SlotField::TimePeriod),
                past_documentation: slot_cell(slot, SlotField::PastDocumentation),
            })
        })
        .collect()
}

/// Write the long-format export to a file
pub fn write_long_format(rows: &[SubjectRow], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    write_long_format_to_writer(rows, file)
}

/// Write the long-format export to any byte sink
pub fn write_long_format_to_writer<W: io::Write>(rows: &[SubjectRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in long_records(rows) {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
