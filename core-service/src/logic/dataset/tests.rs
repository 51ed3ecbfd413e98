use super::reader::{DatasetError, ReferenceDataset};
use crate::logic::input::ProductType;
use std::io::Write;
use tempfile::tempdir;

const SAMPLE: &str = "\
UDI,Product ID,Type,Air temperature [K],Process temperature [K],Rotational speed [rpm],Torque [Nm],Tool wear [min],Target,Failure Type
1,M14860,M,298.1,308.6,1551,42.8,0,0,No Failure
2,L47181,L,298.2,308.7,1408,46.3,3,0,No Failure
3,L47182,L,298.1,308.5,1498,49.4,5,1,Power Failure
4,H29424,H,298.9,309.1,2861,4.6,143,1,Power Failure
";

#[test]
fn test_parse_reference_csv() {
    let dataset = ReferenceDataset::from_reader(SAMPLE.as_bytes(), "sample").unwrap();
    assert_eq!(dataset.len(), 4);

    let first = &dataset.records()[0];
    assert_eq!(first.product_type, ProductType::M);
    assert_eq!(first.air_temperature, 298.1);
    assert_eq!(first.process_temperature, 308.6);
    assert_eq!(first.rotational_speed, 1551);
    assert_eq!(first.torque, 42.8);
    assert_eq!(first.tool_wear, 0);
    assert_eq!(first.machine_failure, 0);
}

#[test]
fn test_filter_by_label() {
    let dataset = ReferenceDataset::from_reader(SAMPLE.as_bytes(), "sample").unwrap();

    let failures = dataset.filter_by_label(1);
    assert_eq!(failures.len(), 2);
    assert!(failures.iter().all(|r| r.machine_failure == 1));

    let ok = dataset.filter_by_label(0);
    assert_eq!(ok.len(), 2);
    assert_eq!(dataset.label_counts(), [2, 2]);
}

#[test]
fn test_filter_eighty_of_hundred() {
    let mut csv = String::from("UDI,Product ID,Type,Air,Process,Speed,Torque,Wear,Target,Failure Type\n");
    for i in 0..100 {
        let failure = if i < 80 { 1 } else { 0 };
        csv.push_str(&format!(
            "{},L{},L,300.0,310.0,1500,40.0,{},{},x\n",
            i + 1,
            i,
            i % 200,
            failure
        ));
    }

    let dataset = ReferenceDataset::from_reader(csv.as_bytes(), "generated").unwrap();
    assert_eq!(dataset.len(), 100);
    assert_eq!(dataset.filter_by_label(1).len(), 80);
    assert_eq!(dataset.filter_by_label(0).len(), 20);
}

#[test]
fn test_invalid_failure_flag_reports_line() {
    let csv = "\
UDI,Product ID,Type,Air,Process,Speed,Torque,Wear,Target,Failure Type
1,M1,M,298.1,308.6,1551,42.8,0,0,No Failure
2,M2,M,298.1,308.6,1551,42.8,0,7,No Failure
";
    match ReferenceDataset::from_reader(csv.as_bytes(), "bad") {
        Err(DatasetError::InvalidRow { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected InvalidRow, got {:?}", other),
    }
}

#[test]
fn test_unparsable_number_rejected() {
    let csv = "\
UDI,Product ID,Type,Air,Process,Speed,Torque,Wear,Target,Failure Type
1,M1,M,hot,308.6,1551,42.8,0,0,No Failure
";
    assert!(matches!(
        ReferenceDataset::from_reader(csv.as_bytes(), "bad"),
        Err(DatasetError::InvalidRow { line: 2, .. })
    ));
}

#[test]
fn test_wrong_column_count_rejected() {
    let csv = "\
UDI,Product ID,Type,Air,Process,Speed,Torque,Wear,Target,Failure Type
1,M1,M,298.1,308.6,1551,42.8,0,0
";
    assert!(matches!(
        ReferenceDataset::from_reader(csv.as_bytes(), "bad"),
        Err(DatasetError::InvalidRow { .. })
    ));
}

#[test]
fn test_header_only_is_empty() {
    let csv = "UDI,Product ID,Type,Air,Process,Speed,Torque,Wear,Target,Failure Type\n";
    let dataset = ReferenceDataset::from_reader(csv.as_bytes(), "empty").unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.label_counts(), [0, 0]);
}

#[test]
fn test_from_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("predictive_maintenance.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let dataset = ReferenceDataset::from_path(&path).unwrap();
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.source(), path.display().to_string());
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = ReferenceDataset::from_path(&dir.path().join("missing.csv"));
    assert!(matches!(result, Err(DatasetError::Io { .. })));
}
