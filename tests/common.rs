#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Build a wagebook command with HOME/APPDATA pointed at an isolated
/// directory, so a developer's real config file never leaks into tests.
pub fn wb(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("wagebook");
    cmd.env("HOME", home);
    cmd.env("APPDATA", home);
    cmd
}

/// Create a unique isolated home directory for one test.
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_wagebook_home"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Create a unique test data file path inside the system temp dir
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_wagebook.json"));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Register a worker and return the id printed by the CLI.
pub fn add_worker(home: &str, data: &str, name: &str, daily: f64, hourly: f64) -> String {
    let out = wb(home)
        .args([
            "--data",
            data,
            "worker",
            "add",
            "--name",
            name,
            "--role",
            "mason",
            "--daily-rate",
            &daily.to_string(),
            "--hourly-rate",
            &hourly.to_string(),
        ])
        .output()
        .expect("run worker add");

    assert!(out.status.success(), "worker add failed: {out:?}");

    let stdout = String::from_utf8_lossy(&out.stdout);
    stdout
        .lines()
        .find(|l| l.contains("added with id"))
        .and_then(|l| l.split_whitespace().last())
        .expect("worker id in output")
        .to_string()
}

/// Add one daily log entry via the CLI.
pub fn add_log(home: &str, data: &str, worker_id: &str, date: &str, args: &[&str]) {
    let mut full = vec!["--data", data, "log", "add", worker_id, "--date", date];
    full.extend_from_slice(args);
    wb(home).args(&full).assert().success();
}
