use predicates::prelude::*;
use tempfile::tempdir;

mod test_helpers;
use test_helpers::base_diarybot_command;

#[test]
fn test_json_logs_carry_correlation_id() {
    let dir = tempdir().unwrap();

    let output = base_diarybot_command(dir.path())
        .args(["--log-format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let first_line = stderr.lines().next().expect("at least one log line");
    let record: serde_json::Value = serde_json::from_str(first_line).unwrap();

    assert_eq!(record["level"], "INFO");
    assert_eq!(record["span"]["name"], "app_invocation");
    assert_eq!(record["span"]["service_name"], "diarybot");
    let correlation_id = record["span"]["correlation_id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(correlation_id).is_ok());
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = tempdir().unwrap();

    base_diarybot_command(dir.path())
        .args(["--log-format", "json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::diff("No entries yet.\n"));
}

#[test]
fn test_rust_log_overrides_default_level() {
    let dir = tempdir().unwrap();

    base_diarybot_command(dir.path())
        .env("RUST_LOG", "error")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_enables_debug_logs() {
    let dir = tempdir().unwrap();

    base_diarybot_command(dir.path())
        .args(["-v", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}
