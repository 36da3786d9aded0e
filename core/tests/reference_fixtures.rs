//! Reference fixtures loaded from disk and checked end to end.

use ntmstats::{ReferenceCase, StatsError, Transform, VectorStatistics};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Once;
use tempfile::NamedTempFile;

static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init()
            .ok();
    });
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn checked_in_fixture_matches_builtin_baseline() {
    init_logger();
    let case = ReferenceCase::load(fixture("ntm_baseline.json")).unwrap();
    let baseline = ReferenceCase::ntm_baseline();
    assert_eq!(case.name, baseline.name);
    for (loaded, builtin) in case.input.iter().zip(&baseline.input) {
        assert!((loaded - builtin).abs() < 1e-15);
    }
    let report = case.verify().unwrap();
    assert_eq!(report.input, case.input);
}

#[test]
fn fixture_written_from_report_verifies() {
    init_logger();
    let stats = VectorStatistics::new(&[-2.5, 0.0, 0.75, 12.0]);
    let report = stats.report();
    let body = serde_json::json!({
        "name": "from-report",
        "input": report.input,
        "mean": report.mean,
        "deviation": report.deviation,
    });

    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(body.to_string().as_bytes()).unwrap();
    let path = temp.into_temp_path();

    let case = ReferenceCase::load(&path).unwrap();
    assert_eq!(case.name, "from-report");
    assert!(case.verify().is_ok());
}

#[test]
fn perturbed_fixture_reports_mean_mismatch() {
    init_logger();
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(
        br#"{"input": [0.0, 1.0], "mean": [0.5, 0.75], "deviation": [1.6931471805599453, 2.3132616875182226]}"#,
    )
    .unwrap();
    let path = temp.into_temp_path();

    let err = ReferenceCase::load(&path).unwrap().verify().unwrap_err();
    match err {
        StatsError::ValueMismatch {
            transform,
            index,
            expected,
            ..
        } => {
            assert_eq!(transform, Transform::Mean);
            assert_eq!(index, 1);
            assert_eq!(expected, 0.75);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn missing_fixture_is_io_error() {
    let err = ReferenceCase::load(fixture("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, StatsError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.json"));
}

#[test]
fn malformed_fixture_is_parse_error() {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(b"{\"input\": [1.0, ").unwrap();
    let path = temp.into_temp_path();
    assert!(matches!(
        ReferenceCase::load(&path),
        Err(StatsError::Parse { .. })
    ));
}
