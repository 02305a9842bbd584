use std::io::Write;

use pretty_assertions::assert_eq;

use wellrisk::dataset::{DatasetError, DatasetStore};
use wellrisk::stress::StressLevel;
use wellrisk::testdata;

const HEADER: &str = "employee_id,work_hours_per_week,sleep_hours_per_day,meetings_per_week,\
emails_per_day,deadline_pressure,task_complexity,team_support,work_life_balance,\
stress_level,burnout_score,outcome";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn csv_load_skips_malformed_rows_and_keeps_the_rest() {
    init_logging();
    let csv = format!(
        "{HEADER}\n\
         EMP0001,55,6,22,110,8,7,4,3,High,68.5,\"Intervention: Workload reduced, improved after 3 months\"\n\
         EMP0002,not-a-number,7,15,75,5,5,5,5,Medium,50,Monitoring\n\
         EMP0003,45,7,15,75,5,5,0,5,Medium,50,Monitoring\n\
         EMP0001,40,8,10,40,3,3,8,8,Low,20,Healthy\n\
         EMP0004,48,7,18,90,6,6,5,4,Medium,55.2,Monitoring: Regular check-ins scheduled\n"
    );

    let store = DatasetStore::from_csv(&csv).unwrap();
    assert_eq!(store.summary().loaded, 2);
    assert_eq!(store.summary().skipped, 3);
    assert_eq!(store.len(), 2);

    let first = &store.records()[0];
    assert_eq!(first.employee_id, "EMP0001");
    assert_eq!(first.stress_level, StressLevel::High);
    assert_eq!(
        first.outcome,
        "Intervention: Workload reduced, improved after 3 months"
    );
    assert_eq!(store.records()[1].employee_id, "EMP0004");
}

#[test]
fn csv_columns_may_come_in_any_order_with_extras_ignored() {
    let csv = "outcome,employee_id,burnout_score,stress_level,work_hours_per_week,\
               sleep_hours_per_day,meetings_per_week,emails_per_day,deadline_pressure,\
               task_complexity,team_support,work_life_balance,department\n\
               Healthy,EMP0001,20,Low,40,8,10,40,3,3,8,8,Engineering\n";
    let store = DatasetStore::from_csv(csv).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].burnout_score, 20.0);
    assert_eq!(store.records()[0].outcome, "Healthy");
}

#[test]
fn zero_valid_rows_is_fatal() {
    init_logging();
    let csv = format!(
        "{HEADER}\n\
         EMP0001,bad,7,15,75,5,5,5,5,Medium,50,Monitoring\n\
         EMP0002,45,7,15,75,5,5,5,5,Unknown,50,Monitoring\n"
    );
    match DatasetStore::from_csv(&csv) {
        Err(DatasetError::Empty { skipped }) => assert_eq!(skipped, 2),
        other => panic!("expected Empty error, got {other:?}"),
    }
}

#[test]
fn json_load_skips_malformed_rows_and_keeps_the_rest() {
    init_logging();
    let good = serde_json::to_value(testdata::record("EMP0001", StressLevel::Low, 20.0)).unwrap();
    let mut truncated = serde_json::to_value(testdata::record(
        "EMP0002",
        StressLevel::Medium,
        50.0,
    ))
    .unwrap();
    truncated.as_object_mut().unwrap().remove("outcome");
    let mut bad_number = serde_json::to_value(testdata::record(
        "EMP0003",
        StressLevel::High,
        70.0,
    ))
    .unwrap();
    bad_number["work_hours_per_week"] = serde_json::Value::String("forty".to_string());

    let json = serde_json::to_string(&vec![good, truncated, bad_number]).unwrap();
    let store = DatasetStore::from_json(&json).unwrap();
    assert_eq!(store.summary().loaded, 1);
    assert_eq!(store.summary().skipped, 2);
    assert_eq!(store.records()[0].employee_id, "EMP0001");
}

#[test]
fn json_document_that_is_not_an_array_is_a_hard_error() {
    match DatasetStore::from_json("{\"employee_id\": \"EMP0001\"}") {
        Err(DatasetError::Json(_)) => {}
        other => panic!("expected Json error, got {other:?}"),
    }
}

#[test]
fn json_array_round_trips_through_the_store() {
    let records = testdata::synthetic_workforce(5);
    let json = serde_json::to_string(&records).unwrap();
    let store = DatasetStore::from_json(&json).unwrap();
    assert_eq!(store.len(), 5);
    assert_eq!(store.records(), records.as_slice());
}

#[test]
fn load_dispatches_on_extension() {
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("workforce.csv");
    let mut csv_file = std::fs::File::create(&csv_path).unwrap();
    writeln!(csv_file, "{HEADER}").unwrap();
    writeln!(
        csv_file,
        "EMP0001,55,6,22,110,8,7,4,3,High,68.5,Monitoring"
    )
    .unwrap();
    let store = DatasetStore::load(&csv_path).unwrap();
    assert_eq!(store.len(), 1);

    let json_path = dir.path().join("workforce.json");
    let records = testdata::synthetic_workforce(3);
    std::fs::write(&json_path, serde_json::to_vec(&records).unwrap()).unwrap();
    let store = DatasetStore::load(&json_path).unwrap();
    assert_eq!(store.len(), 3);

    let txt_path = dir.path().join("workforce.txt");
    std::fs::write(&txt_path, "whatever").unwrap();
    match DatasetStore::load(&txt_path) {
        Err(DatasetError::UnsupportedFormat(ext)) => assert_eq!(ext, "txt"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn missing_file_surfaces_an_io_error() {
    match DatasetStore::load("does/not/exist.csv") {
        Err(DatasetError::Io(_)) => {}
        other => panic!("expected Io error, got {other:?}"),
    }
}
