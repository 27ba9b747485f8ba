use cablekit_core::{Connection, Device, Point};
use cablekit_routing::{CableEngine, ReportExport};

#[test]
fn test_export_written_to_file() {
    let engine = CableEngine::standard();
    let devices = vec![
        Device::new("a", Point::new(0.0, 0.0)),
        Device::new("b", Point::new(10.0, 0.0)),
    ];
    let connections = vec![Connection::new("c1", "a", "b", "utp-cat6")];
    let report = engine.generate_cable_report(&connections, &devices);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    ReportExport::new(report.clone()).write_to_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let loaded = ReportExport::from_json(&content).unwrap();
    assert_eq!(loaded.report.routed_connections, 1);
    assert_eq!(loaded.report.cable_lengths.len(), report.cable_lengths.len());
    assert_eq!(loaded.engine_version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.json");
    let export = ReportExport::new(Default::default());
    assert!(export.write_to_file(&path).is_err());
}
