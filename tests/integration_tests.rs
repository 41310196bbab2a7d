use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::{OFFICE_LAT, TestEnv};

#[test]
fn test_init_creates_database() {
    let env = TestEnv::new("init_creates_database");

    env.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(Path::new(&env.db).exists());

    env.cmd()
        .args(["db", "--info"])
        .assert()
        .success();
}

#[test]
fn test_employee_add_and_list() {
    let env = TestEnv::with_alice("employee_add_list");
    env.add_employee("Bob", "987654");

    env.cmd()
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(contains("Alice").and(contains("Bob")));
}

#[test]
fn test_employee_duplicate_rejected() {
    let env = TestEnv::with_alice("employee_duplicate");

    env.cmd()
        .args(["employee", "add", "alice", "--pin", "5555"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_employee_malformed_pin_rejected() {
    let env = TestEnv::new("employee_malformed_pin");
    env.init();

    env.cmd()
        .args(["employee", "add", "Carol", "--pin", "12a4"])
        .assert()
        .failure()
        .stderr(contains("PIN must be 4 to 12 digits"));
}

#[test]
fn test_clock_wrong_pin_fails() {
    let env = TestEnv::with_alice("clock_wrong_pin");

    env.cmd()
        .args(["clock", "in", "--employee", "Alice", "--pin", "0000"])
        .assert()
        .failure()
        .stderr(contains("Invalid PIN"));

    env.cmd()
        .args(["events"])
        .assert()
        .success()
        .stdout(contains("No events found"));
}

#[test]
fn test_clock_unknown_employee_fails() {
    let env = TestEnv::with_alice("clock_unknown_employee");

    env.cmd()
        .args(["clock", "in", "--employee", "Mallory", "--pin", "1234"])
        .assert()
        .failure()
        .stderr(contains("Unknown employee"));
}

#[test]
fn test_deactivated_employee_cannot_clock() {
    let env = TestEnv::with_alice("deactivated_employee");

    env.cmd()
        .args(["employee", "deactivate", "Alice"])
        .assert()
        .success();

    env.cmd()
        .args(["clock", "in", "--employee", "Alice", "--pin", "1234"])
        .assert()
        .failure()
        .stderr(contains("inactive"));

    env.cmd()
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(contains("Alice").not());

    env.cmd()
        .args(["employee", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Alice").and(contains("inactive")));
}

#[test]
fn test_gps_status_is_stored_with_event() {
    let env = TestEnv::with_alice("gps_status_stored");

    env.clock_at_office("in", "Alice", "1234", "2025-09-01 09:00");

    // ~1.1 km north of the office
    env.cmd()
        .args([
            "clock", "out", "--employee", "Alice", "--pin", "1234", "--at", "2025-09-01 12:00",
        ])
        .arg(format!("--lat={}", OFFICE_LAT + 0.01))
        .arg("--lon=-74.0060")
        .assert()
        .success()
        .stdout(contains("OUT_OF_RANGE"));

    // no fix
    env.cmd()
        .args([
            "clock", "in", "--employee", "Alice", "--pin", "1234", "--at", "2025-09-01 13:00",
        ])
        .assert()
        .success()
        .stdout(contains("SEARCHING"));

    env.cmd()
        .args(["events"])
        .assert()
        .success()
        .stdout(
            contains("OK")
                .and(contains("OUT_OF_RANGE"))
                .and(contains("SEARCHING"))
                .and(contains("3 event(s)")),
        );
}

#[test]
fn test_clock_with_only_latitude_fails() {
    let env = TestEnv::with_alice("clock_only_latitude");

    env.cmd()
        .args(["clock", "in", "--employee", "Alice", "--pin", "1234", "--lat=40.7"])
        .assert()
        .failure();
}

#[test]
fn test_shift_with_overtime() {
    let env = TestEnv::with_alice("shift_overtime");

    env.clock_at_office("in", "Alice", "1234", "2025-09-01 09:00");
    env.clock_at_office("out", "Alice", "1234", "2025-09-01 17:30");

    env.cmd()
        .args(["shifts"])
        .assert()
        .success()
        .stdout(
            contains("2025-09-01 09:00:00")
                .and(contains("2025-09-01 17:30:00"))
                .and(contains("08h 30m"))
                .and(contains("8.50"))
                .and(contains("YES")),
        );
}

#[test]
fn test_exactly_eight_hours_is_not_overtime() {
    let env = TestEnv::with_alice("shift_exactly_eight");

    env.clock_at_office("in", "Alice", "1234", "2025-09-01 09:00");
    env.clock_at_office("out", "Alice", "1234", "2025-09-01 17:00");

    env.cmd()
        .args(["shifts"])
        .assert()
        .success()
        .stdout(contains("8.00").and(contains("YES").not()));
}

#[test]
fn test_shifts_most_recent_first() {
    let env = TestEnv::with_alice("shifts_most_recent_first");

    env.clock_at_office("in", "Alice", "1234", "2025-09-01 09:00");
    env.clock_at_office("out", "Alice", "1234", "2025-09-01 17:00");
    env.clock_at_office("in", "Alice", "1234", "2025-09-02 09:00");
    env.clock_at_office("out", "Alice", "1234", "2025-09-02 17:00");

    let output = env.cmd().args(["shifts"]).output().expect("run shifts");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let newer = stdout.find("2025-09-02 09:00:00").expect("newer shift listed");
    let older = stdout.find("2025-09-01 09:00:00").expect("older shift listed");
    assert!(newer < older);
}

#[test]
fn test_shifts_range_filter() {
    let env = TestEnv::with_alice("shifts_range_filter");

    env.clock_at_office("in", "Alice", "1234", "2025-08-29 09:00");
    env.clock_at_office("out", "Alice", "1234", "2025-08-29 17:00");
    env.clock_at_office("in", "Alice", "1234", "2025-09-01 09:00");
    env.clock_at_office("out", "Alice", "1234", "2025-09-01 17:00");

    env.cmd()
        .args(["shifts", "--range", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01 09:00:00").and(contains("2025-08-29").not()));
}

#[test]
fn test_orphan_out_and_superseded_in_reported() {
    let env = TestEnv::with_alice("pairing_issues");

    env.clock_at_office("out", "Alice", "1234", "2025-09-01 08:00");
    env.clock_at_office("in", "Alice", "1234", "2025-09-01 09:00");
    env.clock_at_office("in", "Alice", "1234", "2025-09-01 10:00");
    env.clock_at_office("out", "Alice", "1234", "2025-09-01 18:00");

    // The second IN wins: 8 hours, not overtime.
    env.cmd()
        .args(["shifts", "--issues"])
        .assert()
        .success()
        .stdout(
            contains("2025-09-01 10:00:00")
                .and(contains("8.00"))
                .and(contains("has no matching IN"))
                .and(contains("superseded by IN at 2025-09-01 10:00:00")),
        );

    env.cmd()
        .args(["shifts"])
        .assert()
        .success()
        .stderr(contains("2 unpaired event(s) ignored"));
}

#[test]
fn test_status_lists_open_shift() {
    let env = TestEnv::with_alice("status_open_shift");
    env.add_employee("Bob", "4321");

    env.clock_at_office("in", "Alice", "1234", "2025-09-01 09:00");
    env.clock_at_office("in", "Bob", "4321", "2025-09-01 09:00");
    env.clock_at_office("out", "Bob", "4321", "2025-09-01 12:00");

    env.cmd()
        .args(["status"])
        .assert()
        .success()
        .stdout(contains("Alice").and(contains("Bob").not()));
}

#[test]
fn test_status_nobody_clocked_in() {
    let env = TestEnv::with_alice("status_nobody");

    env.cmd()
        .args(["status"])
        .assert()
        .success()
        .stdout(contains("Nobody is clocked in"));
}

#[test]
fn test_log_records_operations() {
    let env = TestEnv::with_alice("log_operations");

    env.clock_at_office("in", "Alice", "1234", "2025-09-01 09:00");

    env.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("employee_add")
                .and(contains("clock_in"))
                .and(contains("migration_applied")),
        );
}

#[test]
fn test_backup_compressed() {
    let env = TestEnv::with_alice("backup_compressed");
    let dest = env.out("backup.sqlite");

    env.cmd()
        .args(["backup", "--file", &dest, "--compress"])
        .assert()
        .success();

    assert!(Path::new(&format!("{dest}.zip")).exists());
    assert!(!Path::new(&dest).exists());
}

#[test]
fn test_config_check_complete() {
    let env = TestEnv::new("config_check");

    env.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let env = TestEnv::new("config_invalid");
    std::fs::write(
        &env.config,
        format!("database: '{}'\noffice_latitude: 123.0\n", env.db),
    )
    .expect("write config");

    env.cmd()
        .args(["status"])
        .assert()
        .failure()
        .stderr(contains("office coordinate out of range"));
}

#[test]
fn test_config_check_warns_when_office_missing() {
    let env = TestEnv::new("config_check_no_office");
    std::fs::write(
        &env.config,
        format!(
            "database: '{}'\ngeofence_radius_meters: 100.0\novertime_threshold_hours: 8.0\nseparator_char: '-'\n",
            env.db
        ),
    )
    .expect("write config");

    env.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stderr(contains("Office location is not set"))
        .stderr(contains("office_latitude").and(contains("office_longitude")));
}

#[test]
fn test_clock_out_of_range_with_unset_office_warns() {
    let env = TestEnv::new("clock_no_office");
    std::fs::write(&env.config, format!("database: '{}'\n", env.db)).expect("write config");
    env.init();
    env.add_employee("Alice", "1234");

    env.cmd()
        .args(["clock", "in", "--employee", "Alice", "--pin", "1234"])
        .arg(format!("--lat={}", OFFICE_LAT))
        .arg("--lon=-74.006")
        .assert()
        .success()
        .stderr(contains("outside the office geofence"))
        .stderr(contains("Office location is not set"));
}

#[test]
fn test_db_check_reports_append_only() {
    let env = TestEnv::with_alice("db_check_append_only");

    env.cmd()
        .args(["db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed").and(contains("append-only")));
}

#[test]
fn test_db_check_detects_dropped_trigger() {
    let env = TestEnv::with_alice("db_check_dropped_trigger");

    let conn = rusqlite::Connection::open(&env.db).expect("open db");
    conn.execute_batch("DROP TRIGGER events_no_update;").expect("drop trigger");
    drop(conn);

    env.cmd()
        .args(["db", "--check"])
        .assert()
        .success()
        .stderr(contains("Append-only triggers missing").and(contains("events_no_update")));

    env.cmd()
        .args(["status"])
        .assert()
        .failure()
        .stderr(contains("not append-only"));
}

#[test]
fn test_db_migrate_up_to_date() {
    let env = TestEnv::with_alice("db_migrate_up_to_date");

    env.cmd()
        .args(["db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("nothing to migrate"));
}
