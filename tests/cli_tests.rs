use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{rts, temp_home, temp_out, write_config};

/// Blank 2025 workbook at `path`.
fn template(home: &Path, path: &str) {
    rts(home)
        .args(["template", "--file", path, "--year", "2025", "--force"])
        .assert()
        .success()
        .stdout(contains("template for 2025"));
}

#[test]
fn init_writes_default_config() {
    let home = temp_home("cli_init");

    rts(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Default configuration written"));

    let conf = home.join(".rtimesheet").join("rtimesheet.conf");
    let text = fs::read_to_string(&conf).expect("config written");
    assert!(text.contains("start_row: 6"));
    assert!(text.contains("Projektnummern"));

    rts(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("left unchanged"));
}

#[test]
fn config_print_shows_overrides() {
    let home = temp_home("cli_config_print");
    let cfg = write_config(&home, "/data/zeiten.xlsx");

    rts(&home)
        .args(["--config", &cfg, "--output", "/data/out.xlsx", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("/data/zeiten.xlsx").and(contains("/data/out.xlsx")));
}

#[test]
fn missing_explicit_config_fails() {
    let home = temp_home("cli_config_missing");

    rts(&home)
        .args(["--config", "/nonexistent/rtimesheet.conf", "list"])
        .assert()
        .failure()
        .stderr(contains("configuration file not found"));
}

#[test]
fn add_list_delete_round_trip() {
    let home = temp_home("cli_round_trip");
    let wb = temp_out("cli_round_trip", "xlsx");
    template(&home, &wb);

    rts(&home)
        .args([
            "--workbook", &wb, "add", "2025-03-04", "--in", "08:00", "--out", "16:30", "--pause",
            "30m", "--desc", "Rollout",
        ])
        .assert()
        .success()
        .stdout(contains("Added entry #1 on 2025-03-04"));

    // start defaults to the end of the previous entry
    rts(&home)
        .args(["--workbook", &wb, "add", "2025-03-04", "--out", "18:00"])
        .assert()
        .success()
        .stdout(contains("Added entry #2").and(contains("16:30")));

    rts(&home)
        .args(["--workbook", &wb, "list", "--day", "2025-03-04"])
        .assert()
        .success()
        .stdout(
            contains("08:00")
                .and(contains("18:00"))
                .and(contains("Rollout"))
                .and(contains("09:30")),
        );

    rts(&home)
        .args(["--workbook", &wb, "del", "2025-03-04", "--pair", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("1 entry for 2025-03-04 deleted"));

    rts(&home)
        .args(["--workbook", &wb, "list", "--day", "2025-03-04"])
        .assert()
        .success()
        .stdout(contains("18:00").and(contains("08:00").not()));

    rts(&home)
        .args(["--workbook", &wb, "del", "2025-03-04", "--yes"])
        .assert()
        .success();

    rts(&home)
        .args(["--workbook", &wb, "list", "--month", "3"])
        .assert()
        .success()
        .stdout(contains("No entries found"));
}

#[test]
fn edit_updates_an_entry() {
    let home = temp_home("cli_edit");
    let wb = temp_out("cli_edit", "xlsx");
    template(&home, &wb);

    rts(&home)
        .args(["--workbook", &wb, "add", "2025-06-02", "--in", "09:00", "--out", "17:00"])
        .assert()
        .success();

    rts(&home)
        .args([
            "--workbook", &wb, "add", "2025-06-02", "--edit", "--pair", "1", "--out", "17:45",
        ])
        .assert()
        .success()
        .stdout(contains("Updated entry #1"));

    rts(&home)
        .args(["--workbook", &wb, "list", "--month", "06"])
        .assert()
        .success()
        .stdout(contains("17:45").and(contains("17:00").not()));

    rts(&home)
        .args([
            "--workbook", &wb, "add", "2025-06-02", "--edit", "--pair", "4", "--out", "18:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid pair index: 4"));
}

#[test]
fn output_flag_leaves_the_input_untouched() {
    let home = temp_home("cli_output");
    let wb = temp_out("cli_output_in", "xlsx");
    let out = temp_out("cli_output_out", "xlsx");
    template(&home, &wb);

    rts(&home)
        .args([
            "--workbook", &wb, "--output", &out, "add", "2025-01-02", "--in", "08:00", "--out",
            "12:00",
        ])
        .assert()
        .success();

    rts(&home)
        .args(["--workbook", &wb, "list"])
        .assert()
        .success()
        .stdout(contains("No entries found"));

    rts(&home)
        .args(["--workbook", &out, "list", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(contains("2025-01-02"));
}

#[test]
fn export_csv_and_json() {
    let home = temp_home("cli_export");
    let wb = temp_out("cli_export", "xlsx");
    let csv = temp_out("cli_export", "csv");
    let json = temp_out("cli_export", "json");
    template(&home, &wb);

    for (date, start, end) in [("2025-02-03", "08:00", "16:00"), ("2025-04-01", "07:30", "15:45")] {
        rts(&home)
            .args(["--workbook", &wb, "add", date, "--in", start, "--out", end])
            .assert()
            .success();
    }

    rts(&home)
        .args(["--workbook", &wb, "export", "--format", "csv", "--file", &csv, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let text = fs::read_to_string(&csv).expect("csv written");
    assert!(text.starts_with("sheet,date,day,start,end,pause,net"));
    assert!(text.contains("2025-02-03"));
    assert!(text.contains("2025-04-01"));

    rts(&home)
        .args([
            "--workbook", &wb, "export", "--format", "json", "--file", &json, "--month", "4",
            "--force",
        ])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).expect("json written")).expect("valid json");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["start"], "07:30");
    assert_eq!(rows[0]["net"], "08:15");
}

#[test]
fn check_reports_clean_round_trip() {
    let home = temp_home("cli_check");
    let wb = temp_out("cli_check", "xlsx");
    template(&home, &wb);

    rts(&home)
        .args(["--workbook", &wb, "add", "2025-05-05", "--in", "08:00", "--out", "12:00"])
        .assert()
        .success();
    rts(&home)
        .args(["--workbook", &wb, "add", "2025-05-05", "--in", "13:00", "--out", "17:00"])
        .assert()
        .success();

    rts(&home)
        .args(["--workbook", &wb, "check"])
        .assert()
        .success()
        .stdout(contains("Round trip clean"));
}

#[test]
fn projects_on_a_blank_template() {
    let home = temp_home("cli_projects");
    let wb = temp_out("cli_projects", "xlsx");
    template(&home, &wb);

    rts(&home)
        .args(["--workbook", &wb, "projects"])
        .assert()
        .success()
        .stdout(contains("No projects found"));
}

#[test]
fn invalid_arguments_are_reported() {
    let home = temp_home("cli_invalid");
    let wb = temp_out("cli_invalid", "xlsx");
    template(&home, &wb);

    rts(&home)
        .args(["--workbook", &wb, "add", "2025-13-01", "--in", "08:00", "--out", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rts(&home)
        .args(["--workbook", &wb, "add", "2025-03-04", "--in", "8 Uhr", "--out", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    rts(&home)
        .args([
            "--workbook", &wb, "add", "2025-03-04", "--in", "08:00", "--out", "09:00", "--pause",
            "lang",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));

    rts(&home)
        .args(["--workbook", &wb, "add", "2025-03-08", "--in", "08:00", "--out", "09:00"])
        .assert()
        .failure()
        .stderr(contains("weekend"));

    rts(&home)
        .args(["--workbook", &wb, "del", "2025-03-05", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entries found for date"));
}

#[test]
fn missing_workbook_is_fatal() {
    let home = temp_home("cli_missing_wb");

    rts(&home)
        .args(["--workbook", "/nonexistent/zeiten.xlsx", "list"])
        .assert()
        .failure()
        .stderr(contains("Workbook error"));
}
