mod utils;

#[cfg(test)]
mod tests {
    use super::utils::{DEPRECATED_SUFFIXES, wide_header, wide_record, write_csv};
    use dx_correction::{
        ColumnPrefix, CorrectionConfig, DxCorrectionError, Flag, TimePeriod, correct_file,
        read_dataset, run_dataset, write_long_format, write_summary_json,
    };
    use tempfile::TempDir;

    const PREFIX: &str = "Diagnosis_ClinicianConsensus,DX_";

    fn clinician_table(dir: &TempDir) -> std::path::PathBuf {
        let header = wide_header(ColumnPrefix::ClinicianConsensus);
        let records = vec![
            wide_record(
                &header,
                &[
                    ("Identifiers", "NDAR000001,visit1"),
                    ("Age", "9.5"),
                    (format!("{PREFIX}01").as_str(), "Major Depressive Disorder"),
                    (format!("{PREFIX}01_RC").as_str(), "0"),
                    (format!("{PREFIX}01_RuleOut").as_str(), "0"),
                    (format!("{PREFIX}01_ByHx").as_str(), "0"),
                    (format!("{PREFIX}01_New").as_str(), "1"),
                    (format!("{PREFIX}02").as_str(), "No Diagnosis Given"),
                    (format!("{PREFIX}02_Confirmed").as_str(), "1"),
                ],
            ),
            wide_record(
                &header,
                &[
                    ("Identifiers", "NDAR000002"),
                    ("Age", "12"),
                    (format!("{PREFIX}01").as_str(), "Separation Anxiety"),
                    (format!("{PREFIX}01_Confirmed").as_str(), "0.0"),
                    (format!("{PREFIX}01_Presum").as_str(), "0.0"),
                    (format!("{PREFIX}01_Time").as_str(), "2.0"),
                    (format!("{PREFIX}01_Past_Doc").as_str(), "1"),
                ],
            ),
        ];
        write_csv(dir.path(), "HBN_data.csv", &header, &records).unwrap()
    }

    #[test]
    fn test_correct_file_writes_next_to_input() {
        let dir = TempDir::new().unwrap();
        let input = clinician_table(&dir);
        let outcome = correct_file(&input, None, &CorrectionConfig::default()).unwrap();

        assert_eq!(outcome.output_path, dir.path().join("HBN_data_corrected.csv"));
        assert!(outcome.output_path.exists());
        assert_eq!(outcome.summary.rows, 2);
        assert_eq!(outcome.summary.inferred_confirmed, 1);
        assert_eq!(outcome.summary.slots_nulled, 1);
        assert_eq!(outcome.summary.past_by_history_set, 1);

        let mut reader = csv::Reader::from_path(&outcome.output_path).unwrap();
        let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(header[0], "Identifiers");
        assert_eq!(header[1], "Age");
        assert!(
            header
                .iter()
                .all(|column| DEPRECATED_SUFFIXES.iter().all(|suffix| !column.ends_with(suffix)))
        );

        let column = |name: &str| header.iter().position(|c| c == name).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(&records[0][column("Identifiers")], "NDAR000001");
        assert_eq!(&records[0][column("Age")], "9.5");
        assert_eq!(&records[0][column(format!("{PREFIX}01_Confirmed").as_str())], "1");
        assert_eq!(&records[0][column(format!("{PREFIX}01_Presum").as_str())], "0");
        assert_eq!(&records[0][column(format!("{PREFIX}02_Confirmed").as_str())], "");
        assert_eq!(&records[1][column(format!("{PREFIX}01_ByHx").as_str())], "1");
        assert_eq!(&records[1][column(format!("{PREFIX}01_Past_Doc").as_str())], "1");
    }

    #[test]
    fn test_corrected_output_is_stable() {
        let dir = TempDir::new().unwrap();
        let input = clinician_table(&dir);
        let config = CorrectionConfig::default();
        let first = correct_file(&input, None, &config).unwrap();

        let again = dir.path().join("again.csv");
        let second = correct_file(&first.output_path, Some(&again), &config).unwrap();
        assert_eq!(second.summary.total_changes(), 0);
        for (before, after) in first.dataset.rows.iter().zip(&second.dataset.rows) {
            assert_eq!(before.identifier, after.identifier);
            assert_eq!(before.slots, after.slots);
        }
    }

    #[test]
    fn test_keep_deprecated_columns() {
        let dir = TempDir::new().unwrap();
        let input = clinician_table(&dir);
        let config = CorrectionConfig::default().keep_deprecated();
        let outcome = correct_file(&input, None, &config).unwrap();

        let mut reader = csv::Reader::from_path(&outcome.output_path).unwrap();
        let header = reader.headers().unwrap().clone();
        let position = header
            .iter()
            .position(|c| c == format!("{PREFIX}01_New"))
            .unwrap();
        let first = reader.records().next().unwrap().unwrap();
        assert_eq!(&first[position], "1");
    }

    #[test]
    fn test_short_prefix_is_detected() {
        let dir = TempDir::new().unwrap();
        let header = wide_header(ColumnPrefix::Short);
        let records = vec![wide_record(
            &header,
            &[("Identifiers", "NDAR000003"), ("DX_03", "Enuresis"), ("DX_03_Time", "2")],
        )];
        let path = write_csv(dir.path(), "short.csv", &header, &records).unwrap();

        let dataset = read_dataset(&path, &CorrectionConfig::default()).unwrap();
        assert_eq!(dataset.prefix(), ColumnPrefix::Short);
        assert_eq!(dataset.rows[0].slots[2].time_period, TimePeriod::Historical);
        assert_eq!(dataset.rows[0].slots[2].confirmed, Flag::Unknown);
    }

    #[test]
    fn test_missing_input_file() {
        let dir = TempDir::new().unwrap();
        let err = read_dataset(&dir.path().join("absent.csv"), &CorrectionConfig::default())
            .unwrap_err();
        assert!(matches!(err, DxCorrectionError::InputNotFound(_)));
    }

    #[test]
    fn test_unrecognized_schema() {
        let dir = TempDir::new().unwrap();
        let header = vec!["Identifiers".to_string(), "Age".to_string()];
        let path = write_csv(dir.path(), "other.csv", &header, &[]).unwrap();

        let err = read_dataset(&path, &CorrectionConfig::default()).unwrap_err();
        assert!(matches!(err, DxCorrectionError::UnrecognizedSchema(_)));
    }

    #[test]
    fn test_missing_required_column() {
        let dir = TempDir::new().unwrap();
        let header: Vec<String> = wide_header(ColumnPrefix::Short)
            .into_iter()
            .filter(|column| column != "DX_04_Past_Doc")
            .collect();
        let path = write_csv(dir.path(), "partial.csv", &header, &[]).unwrap();

        match read_dataset(&path, &CorrectionConfig::default()).unwrap_err() {
            DxCorrectionError::MissingColumn { column } => assert_eq!(column, "DX_04_Past_Doc"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_flag_value() {
        let dir = TempDir::new().unwrap();
        let header = wide_header(ColumnPrefix::Short);
        let records = vec![
            wide_record(&header, &[("DX_01", "Enuresis")]),
            wide_record(&header, &[("DX_01", "Enuresis"), ("DX_01_ByHx", "maybe")]),
        ];
        let path = write_csv(dir.path(), "bad.csv", &header, &records).unwrap();

        match read_dataset(&path, &CorrectionConfig::default()).unwrap_err() {
            DxCorrectionError::InvalidValue { column, row, value } => {
                assert_eq!(column, "DX_01_ByHx");
                assert_eq!(row, 1);
                assert_eq!(value, "maybe");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_na_cells_are_read_as_missing() {
        let dir = TempDir::new().unwrap();
        let header = wide_header(ColumnPrefix::Short);
        let records = vec![wide_record(
            &header,
            &[
                ("Identifiers", "NDAR000004"),
                ("DX_01", "NA"),
                ("DX_01_Confirmed", "NA"),
                ("DX_02", "Enuresis"),
                ("DX_02_RC", "NA"),
                ("DX_02_ByHx", "N/A"),
            ],
        )];
        let path = write_csv(dir.path(), "na.csv", &header, &records).unwrap();

        let outcome = correct_file(&path, None, &CorrectionConfig::default()).unwrap();
        let row = &outcome.dataset.rows[0];
        assert!(row.slots[0].diagnosis.is_none());
        assert!(row.slots[0].certainty_is_blank());
        assert_eq!(row.slots[1].requires_confirmation, Flag::Unknown);
        assert_eq!(row.slots[1].confirmed, Flag::True);
        assert_eq!(outcome.summary.inferred_confirmed, 1);
    }

    #[test]
    fn test_long_format_and_summary_exports() {
        let dir = TempDir::new().unwrap();
        let input = clinician_table(&dir);
        let config = CorrectionConfig::default();
        let mut dataset = read_dataset(&input, &config).unwrap();
        let summary = run_dataset(&mut dataset, &config);

        let long_path = dir.path().join("exports").join("long.csv");
        write_long_format(&dataset.rows, &long_path).unwrap();
        let mut reader = csv::Reader::from_path(&long_path).unwrap();
        let header = reader.headers().unwrap().clone();
        assert_eq!(&header[0], "Identifiers");
        assert_eq!(&header[1], "Diagnosis Number");
        let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(records.len(), 20);
        assert_eq!(&records[0][1], "1");
        assert_eq!(&records[0][2], "Major Depressive Disorder");
        assert_eq!(&records[9][1], "10");

        let summary_path = dir.path().join("summary.json");
        write_summary_json(&summary, &summary_path).unwrap();
        let text = std::fs::read_to_string(&summary_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["rows"], 2);
        assert_eq!(value["inferred_confirmed"], 1);
    }
}
