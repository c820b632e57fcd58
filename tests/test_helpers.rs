//! Shared setup for integration tests.

use assert_cmd::Command;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::path::Path;

pub const TEST_USER: &str = "alice";

/// Creates a `Command` for the `diarybot` binary with a clean environment
/// rooted at `data_dir`.
#[allow(dead_code)]
pub fn base_diarybot_command(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("diarybot").expect("diarybot binary not built");
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    if let Ok(tmpdir) = std::env::var("TMPDIR") {
        cmd.env("TMPDIR", tmpdir);
    }
    cmd.env("HOME", data_dir)
        .env("DIARYBOT_DIR", data_dir)
        .env("DIARYBOT_USER", TEST_USER);
    cmd
}

/// A fixed local instant on 2024-01-`day` at `hour`:00:00.
#[allow(dead_code)]
pub fn local_time(day: u32, hour: u32) -> DateTime<Local> {
    let naive = NaiveDate::from_ymd_opt(2024, 1, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time");
    Local
        .from_local_datetime(&naive)
        .earliest()
        .expect("representable local time")
}
