use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_2024, init_db_with_data, setup_test_db, temp_out, wl};

#[test]
fn test_init_is_idempotent() {
    let db_path = setup_test_db("init_twice");

    init_db_2024(&db_path);

    wl().args([
        "--db",
        &db_path,
        "--test",
        "init",
        "--start-year",
        "2024",
        "--years",
        "1",
    ])
    .assert()
    .success()
    .stdout(contains("0 new location(s), 0 new week(s)"));
}

#[test]
fn test_add_and_show_day() {
    let db_path = setup_test_db("add_show");
    init_db_2024(&db_path);

    wl().args(["--db", &db_path, "add", "2024-11-25", "office"])
        .assert()
        .success()
        .stdout(contains("2024-48"));

    wl().args(["--db", &db_path, "show", "2024-11-25"])
        .assert()
        .success()
        .stdout(contains("2024-48").and(contains("office")));
}

#[test]
fn test_add_twice_is_rejected() {
    let db_path = setup_test_db("add_twice");
    init_db_with_data(&db_path);

    let out = wl()
        .args(["--db", &db_path, "add", "2024-11-25", "remote"])
        .output()
        .expect("failed to run add");
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("already recorded"));
    assert_eq!(stderr.matches("Error:").count(), 1);
    assert!(!stderr.contains("❌"));

    wl().args(["--db", &db_path, "show", "2024-11-25"])
        .assert()
        .success()
        .stdout(contains("office"));
}

#[test]
fn test_add_unknown_location_fails() {
    let db_path = setup_test_db("add_unknown_loc");
    init_db_2024(&db_path);

    wl().args(["--db", &db_path, "add", "2024-11-25", "beach"])
        .assert()
        .failure()
        .stderr(contains("Invalid location").and(contains("office, remote")));
}

#[test]
fn test_add_outside_seeded_weeks_fails() {
    let db_path = setup_test_db("add_unseeded");
    init_db_2024(&db_path);

    wl().args(["--db", &db_path, "add", "2023-06-01", "office"])
        .assert()
        .failure()
        .stderr(contains("not in the database"));
}

#[test]
fn test_invalid_date_is_rejected() {
    let db_path = setup_test_db("bad_date");
    init_db_2024(&db_path);

    wl().args(["--db", &db_path, "add", "2024-13-01", "office"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_set_location() {
    let db_path = setup_test_db("set_loc");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "set", "2024-11-25", "remote"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "show", "2024-11-25"])
        .assert()
        .success()
        .stdout(contains("remote"));
}

#[test]
fn test_set_unrecorded_date_is_noop() {
    let db_path = setup_test_db("set_noop");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "set", "2024-11-23", "office"])
        .assert()
        .success()
        .stderr(contains("nothing changed"));

    wl().args(["--db", &db_path, "show", "2024-11-23"])
        .assert()
        .success()
        .stdout(contains("No work day recorded"));
}

#[test]
fn test_recent_newest_first() {
    let db_path = setup_test_db("recent");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "add", "2024-11-26", "remote"])
        .assert()
        .success();

    let out = wl()
        .args(["--db", &db_path, "recent", "--limit", "5"])
        .output()
        .expect("failed to run recent");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let newer = stdout.find("2024-11-26").expect("missing 2024-11-26");
    let older = stdout.find("2024-11-25").expect("missing 2024-11-25");
    assert!(newer < older);
}

#[test]
fn test_summary_range() {
    let db_path = setup_test_db("summary");
    init_db_with_data(&db_path);

    wl().args([
        "--db", &db_path, "summary", "--from", "2024-47", "--to", "2024-48",
    ])
    .assert()
    .success()
    .stdout(
        contains("2024-47")
            .and(contains("2024-48"))
            .and(contains("2024-11-25"))
            .and(contains("2024-46").not()),
    );
}

#[test]
fn test_summary_rejects_bad_week_id() {
    let db_path = setup_test_db("summary_bad");
    init_db_2024(&db_path);

    wl().args(["--db", &db_path, "summary", "--from", "2024-99"])
        .assert()
        .failure()
        .stderr(contains("Invalid week id"));
}

#[test]
fn test_ytd_average() {
    let db_path = setup_test_db("ytd");
    init_db_with_data(&db_path);

    // one office day over 48 weeks
    wl().args(["--db", &db_path, "ytd", "--year", "2024", "--week", "2024-48"])
        .assert()
        .success()
        .stdout(contains("0.02").and(contains("2024-48")));

    wl().args(["--db", &db_path, "ytd", "--week", "2030-10"])
        .assert()
        .success()
        .stdout(contains("no data"));
}

#[test]
fn test_locations_add() {
    let db_path = setup_test_db("locations");
    init_db_2024(&db_path);

    wl().args(["--db", &db_path, "locations", "--add", "client"])
        .assert()
        .success()
        .stdout(contains("client").and(contains("office")).and(contains("remote")));

    wl().args(["--db", &db_path, "add", "2024-11-25", "client"])
        .assert()
        .success();
}

#[test]
fn test_import_csv() {
    let db_path = setup_test_db("import");
    init_db_with_data(&db_path);

    let csv_path = temp_out("import", "csv");
    fs::write(
        &csv_path,
        "Year,Month,Day,Location\n2024,11,25,remote\n2024,11,26,remote\n2024,11,27,office\n",
    )
    .unwrap();

    wl().args(["--db", &db_path, "import", &csv_path])
        .assert()
        .success()
        .stdout(contains("Imported 2").and(contains("skipped 1")));

    wl().args(["--db", &db_path, "show", "2024-11-25"])
        .assert()
        .success()
        .stdout(contains("office"));
}

#[test]
fn test_report_html() {
    let db_path = setup_test_db("report_html");
    init_db_with_data(&db_path);
    let out = temp_out("report_html", "html");

    wl().args([
        "--db", &db_path, "report", "--format", "html", "--file", &out, "--year", "2024",
        "--week", "2024-48", "--force",
    ])
    .assert()
    .success();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("YTD Attendance Report"));
    assert!(html.contains("Current week count: 1"));
    assert!(html.contains("<td>2024-48</td>"));
    assert!(html.contains("<td>2024-01</td>"));
}

#[test]
fn test_report_json_and_csv() {
    let db_path = setup_test_db("report_json_csv");
    init_db_with_data(&db_path);

    let json_out = temp_out("report_json", "json");
    wl().args([
        "--db", &db_path, "report", "--format", "json", "--file", &json_out, "--week", "2024-48",
        "--force",
    ])
    .assert()
    .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(json["year"], 2024);
    assert_eq!(json["current_week_count"], 1);
    assert_eq!(json["weeks"].as_array().unwrap().len(), 48);

    let csv_out = temp_out("report_csv", "csv");
    wl().args([
        "--db", &db_path, "report", "--format", "csv", "--file", &csv_out, "--week", "2024-48",
        "--force",
    ])
    .assert()
    .success();

    let csv = fs::read_to_string(&csv_out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("week,start_date,end_date,office_count"));
    assert!(csv.contains("2024-48,2024-11-25,2024-12-01,1"));
    assert_eq!(csv.lines().count(), 49);
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(
            contains("Integrity check passed")
                .and(contains("Foreign key check passed"))
                .and(contains("2024-11-25")),
        );
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "add", "2024-11-25", "office"])
        .assert()
        .failure();

    wl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("init")
                .and(contains("add"))
                .and(contains("integrity_violation")),
        );
}

#[test]
fn test_init_rejects_years_past_9999() {
    let db_path = setup_test_db("init_year_range");

    wl().args([
        "--db",
        &db_path,
        "--test",
        "init",
        "--start-year",
        "9999",
        "--years",
        "2",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid week id"));

    wl().args([
        "--db",
        &db_path,
        "--test",
        "init",
        "--start-year",
        "2024",
        "--years",
        "3000000000",
    ])
    .assert()
    .failure()
    .stderr(contains("Configuration error"));
}
