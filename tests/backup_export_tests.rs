use predicates::str::contains;
use std::fs;

mod common;
use common::{add_log, add_worker, setup_home, setup_test_data, temp_out, wb};

fn populate(home: &str, data: &str) -> String {
    let id = add_worker(home, data, "Ahmed", 300.0, 25.0);
    add_log(home, data, &id, "2026-08-01", &["--ot", "2", "--advance", "100"]);
    add_log(home, data, &id, "2026-08-02", &["--absent", "--advance", "50"]);
    id
}

#[test]
fn backup_then_restore_round_trips_the_whole_state() {
    let home = setup_home("backup_roundtrip");
    let data = setup_test_data("backup_roundtrip");
    let backup = temp_out("backup_roundtrip", "json");

    let id = populate(&home, &data);

    wb(&home)
        .args(["--data", &data, "backup", "--file", &backup])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let before = fs::read_to_string(&data).expect("data before");

    // Mutate, then restore the backup over the changes.
    wb(&home)
        .args(["--data", &data, "worker", "del", &id, "-y"])
        .assert()
        .success();

    wb(&home)
        .args(["--data", &data, "restore", "--file", &backup, "-y"])
        .assert()
        .success()
        .stdout(contains("Backup restored"));

    let after = fs::read_to_string(&data).expect("data after");
    assert_eq!(before, after);
}

#[test]
fn backup_force_overwrites_without_a_prompt() {
    let home = setup_home("backup_force");
    let data = setup_test_data("backup_force");
    let backup = temp_out("backup_force", "json");

    populate(&home, &data);

    wb(&home)
        .args(["--data", &data, "backup", "--file", &backup])
        .assert()
        .success();

    // Second run over the existing file: stdin is closed, so without -f
    // the overwrite prompt would read EOF and cancel.
    wb(&home)
        .args(["--data", &data, "backup", "--file", &backup, "-f"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    wb(&home)
        .args(["--data", &data, "restore", "--file", &backup, "-y"])
        .assert()
        .success()
        .stdout(contains("Backup restored"));
}

#[test]
fn compressed_backup_restores_too() {
    let home = setup_home("backup_zip");
    let data = setup_test_data("backup_zip");
    let backup = temp_out("backup_zip", "json");
    let zipped = backup.replace(".json", ".zip");
    fs::remove_file(&zipped).ok();

    populate(&home, &data);

    wb(&home)
        .args(["--data", &data, "backup", "--file", &backup, "--compress"])
        .assert()
        .success()
        .stdout(contains(".zip"));

    // Plain copy is removed once the archive exists.
    assert!(!std::path::Path::new(&backup).exists());

    wb(&home)
        .args(["--data", &data, "restore", "--file", &zipped, "-y"])
        .assert()
        .success()
        .stdout(contains("Backup restored"));
}

#[test]
fn backup_missing_an_array_is_rejected_whole() {
    let home = setup_home("backup_invalid");
    let data = setup_test_data("backup_invalid");
    let bad = temp_out("backup_invalid", "json");
    fs::write(&bad, r#"{"workers": [], "exportDate": "2026-08-28"}"#).unwrap();

    populate(&home, &data);
    let before = fs::read_to_string(&data).expect("data before");

    wb(&home)
        .args(["--data", &data, "restore", "--file", &bad, "-y"])
        .assert()
        .failure()
        .stderr(contains("Invalid backup file"));

    // Current state untouched.
    assert_eq!(fs::read_to_string(&data).expect("data after"), before);
}

#[test]
fn export_csv_writes_flat_rows() {
    let home = setup_home("export_csv");
    let data = setup_test_data("export_csv");
    let out = temp_out("export_csv", "csv");

    populate(&home, &data);

    wb(&home)
        .args(["--data", &data, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv content");
    assert!(content.contains("task_name"));
    assert!(content.contains("2026-08-01"));
    assert!(content.contains("Ahmed"));
}

#[test]
fn export_json_respects_the_range_filter() {
    let home = setup_home("export_json");
    let data = setup_test_data("export_json");
    let out = temp_out("export_json", "json");

    populate(&home, &data);

    wb(&home)
        .args([
            "--data", &data, "export", "--format", "json", "--file", &out,
            "--range", "2026-08-01",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("json content");
    assert!(content.contains("2026-08-01"));
    assert!(!content.contains("2026-08-02"));
}

#[test]
fn export_requires_an_absolute_path() {
    let home = setup_home("export_relative");
    let data = setup_test_data("export_relative");

    populate(&home, &data);

    wb(&home)
        .args(["--data", &data, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}
