use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::TestEnv;

/// Alice works one shift on 2025-09-01 (at the office) and clocks in with
/// no GPS fix on 2025-09-02.
fn env_with_events(name: &str) -> TestEnv {
    let env = TestEnv::with_alice(name);
    env.clock_at_office("in", "Alice", "1234", "2025-09-01 09:00");
    env.clock_at_office("out", "Alice", "1234", "2025-09-01 17:00");

    env.cmd()
        .args([
            "clock", "in", "--employee", "Alice", "--pin", "1234", "--at", "2025-09-02 09:00",
        ])
        .assert()
        .success();

    env
}

#[test]
fn test_export_csv_all() {
    let env = env_with_events("export_csv_all");
    let out = env.out("events.csv");

    env.cmd()
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();

    assert_eq!(
        lines.next(),
        Some("Timestamp,Employee Name,Action,GPS Status,Latitude,Longitude")
    );

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("2025-09-01 09:00:00,Alice,IN,OK,40.7128,"));
    assert!(rows[1].starts_with("2025-09-01 17:00:00,Alice,OUT,OK,"));
    assert_eq!(rows[2], "2025-09-02 09:00:00,Alice,IN,SEARCHING,,");
}

#[test]
fn test_export_json_range() {
    let env = env_with_events("export_json_range");
    let out = env.out("events.json");

    env.cmd()
        .args([
            "export", "--format", "json", "--file", &out, "--range", "2025-09-01",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = value.as_array().expect("json array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Employee Name"], "Alice");
    assert_eq!(rows[0]["Action"], "IN");
    assert_eq!(rows[1]["Action"], "OUT");
    assert_eq!(rows[1]["GPS Status"], "OK");
}

#[test]
fn test_export_employee_filter() {
    let env = env_with_events("export_employee_filter");
    env.add_employee("Bob", "4321");
    env.clock_at_office("in", "Bob", "4321", "2025-09-01 08:00");

    let out = env.out("bob.csv");

    env.cmd()
        .args(["export", "--file", &out, "--employee", "Bob"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Bob"));
    assert!(!content.contains("Alice"));
}

#[test]
fn test_export_relative_path_rejected() {
    let env = env_with_events("export_relative_path");

    env.cmd()
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let env = env_with_events("export_empty_range");
    let out = env.out("empty.csv");

    env.cmd()
        .args(["export", "--file", &out, "--range", "2024"])
        .assert()
        .success()
        .stderr(contains("No events found"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_needs_force() {
    let env = env_with_events("export_needs_force");
    let out = env.out("existing.csv");
    fs::write(&out, "old").expect("seed file");

    env.cmd()
        .args(["export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("--force"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "old");

    env.cmd()
        .args(["export", "--file", &out, "--force"])
        .assert()
        .success();

    assert!(
        fs::read_to_string(&out)
            .expect("read")
            .starts_with("Timestamp,")
    );
}
