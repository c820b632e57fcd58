use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

mod test_helpers;
use test_helpers::base_diarybot_command;

#[test]
fn test_cli_requires_subcommand() {
    let dir = tempdir().unwrap();
    base_diarybot_command(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_new_then_list() {
    let dir = tempdir().unwrap();

    base_diarybot_command(dir.path())
        .args(["new", "--title", "Good day", "--content", "I am so happy and excited today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotion detected: positive"));

    base_diarybot_command(dir.path())
        .args(["new", "--title", "Bad day", "--content", "I feel terrible and sad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotion detected: negative"));

    base_diarybot_command(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good day"))
        .stdout(predicate::str::contains("Bad day"));

    let records = fs::read_dir(dir.path().join("entries")).unwrap().count();
    assert_eq!(records, 2);
}

#[test]
fn test_cli_new_reads_content_from_stdin() {
    let dir = tempdir().unwrap();

    base_diarybot_command(dir.path())
        .args(["new", "--title", "Piped"])
        .write_stdin("A quiet afternoon with tea\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotion detected"));

    base_diarybot_command(dir.path())
        .args(["search", "quiet afternoon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Piped"));
}

#[test]
fn test_cli_new_rejects_blank_content() {
    let dir = tempdir().unwrap();

    base_diarybot_command(dir.path())
        .args(["new", "--title", "Empty", "--content", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("content"));

    assert_eq!(fs::read_dir(dir.path().join("entries")).unwrap().count(), 0);
}

#[test]
fn test_cli_show_entry() {
    let dir = tempdir().unwrap();

    let output = base_diarybot_command(dir.path())
        .args([
            "new", "--title", "Beach", "--content", "Swam in the sea", "--attach", "photos/sea.jpg",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .lines()
        .find_map(|line| line.strip_prefix("Id: "))
        .expect("id printed")
        .to_string();

    base_diarybot_command(dir.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beach"))
        .stdout(predicate::str::contains("Swam in the sea"))
        .stdout(predicate::str::contains("photos/sea.jpg"));

    base_diarybot_command(dir.path())
        .args(["show", "20000101_000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry found"));
}

#[test]
fn test_cli_search_no_match_and_empty_query() {
    let dir = tempdir().unwrap();

    base_diarybot_command(dir.path())
        .args(["new", "--title", "Work", "--content", "Long meeting"])
        .assert()
        .success();

    base_diarybot_command(dir.path())
        .args(["search", "volcano"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching entries found."));

    base_diarybot_command(dir.path())
        .args(["search", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("search term"));
}

#[test]
fn test_cli_stats() {
    let dir = tempdir().unwrap();

    base_diarybot_command(dir.path())
        .args(["new", "--title", "Good day", "--content", "I am so happy and excited today"])
        .assert()
        .success();

    base_diarybot_command(dir.path())
        .args(["stats", "--buckets", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries: 1"))
        .stdout(predicate::str::contains("Positive: 1"))
        .stdout(predicate::str::contains("Negative: 0"));
}

#[test]
fn test_cli_export_writes_pdf() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("pdfs");

    base_diarybot_command(dir.path())
        .args(["new", "--title", "Good day", "--content", "I am so happy and excited today"])
        .assert()
        .success();

    base_diarybot_command(dir.path())
        .args(["export", "--output-dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("PDF exported successfully as DiaryExport_alice_"));

    let files: Vec<_> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("DiaryExport_alice_"));
    assert!(files[0].ends_with(".pdf"));

    let bytes = fs::read(out.join(&files[0])).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
}

#[test]
fn test_cli_missing_owner_is_config_error() {
    let dir = tempdir().unwrap();

    base_diarybot_command(dir.path())
        .env_remove("DIARYBOT_USER")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No diary owner given"));
}

#[test]
fn test_cli_user_flag_overrides_environment() {
    let dir = tempdir().unwrap();

    base_diarybot_command(dir.path())
        .args(["--user", "bob", "new", "--title", "Bob's day", "--content", "Fine"])
        .assert()
        .success();

    base_diarybot_command(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."));

    base_diarybot_command(dir.path())
        .args(["list", "--user", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob's day"));
}

#[test]
fn test_cli_rejects_path_like_owner() {
    let dir = tempdir().unwrap();

    base_diarybot_command(dir.path())
        .args(["--user", "../eve", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("owner"));
}
