use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn plan_centers_on_full_hd() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("window-placer");
    cmd.args(["plan", "--screen-width", "1920", "--screen-height", "1080"]);

    cmd.assert().success().stdout(
        predicate::str::contains("WindowPlacer: Planned Placement")
            .and(predicate::str::contains("1920x1080"))
            .and(predicate::str::contains("400x200"))
            .and(predicate::str::contains("(760, 440)")),
    );
}

#[test]
fn plan_substitutes_default_resolution_for_zero_metrics() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("window-placer");
    cmd.args(["plan", "--screen-width", "0", "--screen-height", "720"]);

    cmd.assert().success().stdout(
        predicate::str::contains("1920x1080").and(predicate::str::contains("(760, 440)")),
    );
}

#[test]
fn plan_json_clamps_small_screens_to_origin() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("window-placer");
    cmd.args([
        "plan",
        "--screen-width",
        "300",
        "--screen-height",
        "150",
        "--json",
    ]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("json output");
    assert_eq!(value["x"], 0);
    assert_eq!(value["y"], 0);
    assert_eq!(value["screen_width"], 300);
    assert_eq!(value["window_width"], 400);
    assert_eq!(value["window_height"], 200);
}

#[test]
fn plan_rejects_negative_dimensions() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("window-placer");
    cmd.args(["plan", "--screen-width=-5", "--screen-height", "1080"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must not be negative"));
}

#[test]
fn debug_flag_writes_log_file() {
    let dir = tempdir().expect("tempdir");
    let log_path = dir.path().join("logs").join("placer.log");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("window-placer");
    cmd.args([
        "--debug",
        "--debug-log",
        log_path.to_str().expect("log path"),
        "plan",
        "--screen-width",
        "2560",
        "--screen-height",
        "1440",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WindowPlacer: Debug log enabled at"));

    let contents = fs::read_to_string(&log_path).expect("read debug log");
    assert!(contents.contains("debug logging initialized"));
    assert!(contents.contains("plan input 2560x1440"));
}

#[cfg(not(target_os = "windows"))]
#[test]
fn place_without_console_api_is_a_successful_no_op() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("window-placer");

    cmd.assert().success().stdout(
        predicate::str::contains("WindowPlacer: Centering console window...").and(
            predicate::str::contains("No console window API on this platform"),
        ),
    );
}

#[test]
fn debug_log_path_is_taken_from_environment() {
    let dir = tempdir().expect("tempdir");
    let log_path = dir.path().join("env.log");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("window-placer");
    cmd.env("WINDOW_PLACER_DEBUG_LOG", &log_path).args([
        "--debug",
        "plan",
        "--screen-width",
        "1920",
        "--screen-height",
        "1080",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(log_path.to_str().expect("log path")));

    let contents = fs::read_to_string(&log_path).expect("read debug log");
    assert!(contents.contains("plan input 1920x1080"));
}
