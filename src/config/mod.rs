//! Configuration management for the diarybot application.
//!
//! Settings are loaded from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! - `DIARYBOT_DIR`: Path to the data directory (defaults to ~/Documents/diarybot)
//! - `DIARYBOT_EXPORT_DIR`: Directory exported documents are written to
//!   (defaults to `{DIARYBOT_DIR}/exports`)
//! - `DIARYBOT_USER`: Default diary owner
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, ENTRIES_SUBDIR, ENV_VAR_DIARYBOT_DIR, ENV_VAR_DIARYBOT_EXPORT_DIR,
    ENV_VAR_DIARYBOT_USER, ENV_VAR_HOME, EXPORTS_SUBDIR, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the diarybot application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use diarybot::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/diary"),
///     export_dir: PathBuf::from("/path/to/diary/exports"),
///     default_owner: Some("alice".to_string()),
/// };
/// assert_eq!(config.entries_dir(), PathBuf::from("/path/to/diary/entries"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directory for diary data. Entry records live in its `entries`
    /// sub-directory.
    pub data_dir: PathBuf,

    /// Directory exported documents are written to.
    pub export_dir: PathBuf,

    /// Owner used when none is given on the command line.
    pub default_owner: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &REDACTED_PLACEHOLDER)
            .field("export_dir", &REDACTED_PLACEHOLDER)
            .field(
                "default_owner",
                &self.default_owner.as_ref().map(|_| REDACTED_PLACEHOLDER),
            )
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Both directories are expanded with `shellexpand`, so `~` and `$VAR`
    /// references work. Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or a resulting
    /// path is empty.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use diarybot::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Entries live in {}", config.entries_dir().display()),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let data_dir_str = non_blank_var(ENV_VAR_DIARYBOT_DIR).unwrap_or_else(|| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });
        let data_dir = expand_path(&data_dir_str)?;

        let export_dir = match non_blank_var(ENV_VAR_DIARYBOT_EXPORT_DIR) {
            Some(raw) => expand_path(&raw)?,
            None => data_dir.join(EXPORTS_SUBDIR),
        };

        let default_owner = non_blank_var(ENV_VAR_DIARYBOT_USER).map(|u| u.trim().to_string());

        Ok(Config {
            data_dir,
            export_dir,
            default_owner,
        })
    }

    /// Directory holding entry records.
    pub fn entries_dir(&self) -> PathBuf {
        self.data_dir.join(ENTRIES_SUBDIR)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if either directory is empty or relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use diarybot::Config;
    /// use std::path::PathBuf;
    ///
    /// let config = Config {
    ///     data_dir: PathBuf::from("relative/diary"),
    ///     export_dir: PathBuf::from("/tmp/exports"),
    ///     default_owner: None,
    /// };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        for (name, dir) in [("Data", &self.data_dir), ("Export", &self.export_dir)] {
            if dir.as_os_str().is_empty() {
                return Err(AppError::Config(format!("{} directory path is empty", name)));
            }
            if !dir.is_absolute() {
                return Err(AppError::Config(format!(
                    "{} directory must be an absolute path",
                    name
                )));
            }
        }
        Ok(())
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    let path = PathBuf::from(expanded.into_owned());
    if path.as_os_str().is_empty() {
        return Err(AppError::Config("Directory path is empty".to_string()));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    const VARS: [&str; 3] = [
        ENV_VAR_DIARYBOT_DIR,
        ENV_VAR_DIARYBOT_EXPORT_DIR,
        ENV_VAR_DIARYBOT_USER,
    ];

    /// Runs `f` with the diarybot variables cleared, restoring them afterwards.
    fn with_clean_env<F: FnOnce()>(f: F) {
        let saved: Vec<_> = VARS.iter().map(|k| (*k, env::var(k).ok())).collect();
        for key in VARS {
            env::remove_var(key);
        }
        f();
        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }

    fn config(data: &str, export: &str) -> Config {
        Config {
            data_dir: PathBuf::from(data),
            export_dir: PathBuf::from(export),
            default_owner: Some("alice".to_string()),
        }
    }

    #[test]
    fn test_debug_impl_redacts_sensitive_info() {
        let debug_output = format!("{:?}", config("/secret/diary", "/secret/exports"));
        assert!(!debug_output.contains("/secret"));
        assert!(!debug_output.contains("alice"));
        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
    }

    #[test]
    #[serial]
    fn test_load_with_custom_dir() {
        with_clean_env(|| {
            let temp_dir = tempdir().unwrap();
            env::set_var(ENV_VAR_DIARYBOT_DIR, temp_dir.path());

            let config = Config::load().unwrap();
            assert_eq!(config.data_dir, temp_dir.path());
            assert_eq!(config.entries_dir(), temp_dir.path().join("entries"));
            assert_eq!(config.export_dir, temp_dir.path().join("exports"));
            assert_eq!(config.default_owner, None);
        });
    }

    #[test]
    #[serial]
    fn test_load_with_export_dir_and_user() {
        with_clean_env(|| {
            env::set_var(ENV_VAR_DIARYBOT_DIR, "/data/diary");
            env::set_var(ENV_VAR_DIARYBOT_EXPORT_DIR, "/data/pdfs");
            env::set_var(ENV_VAR_DIARYBOT_USER, "  bob ");

            let config = Config::load().unwrap();
            assert_eq!(config.export_dir, PathBuf::from("/data/pdfs"));
            assert_eq!(config.default_owner.as_deref(), Some("bob"));
        });
    }

    #[test]
    #[serial]
    fn test_load_expands_variables() {
        with_clean_env(|| {
            env::set_var("DIARYBOT_TEST_ROOT", "/srv");
            env::set_var(ENV_VAR_DIARYBOT_DIR, "$DIARYBOT_TEST_ROOT/diary");

            let config = Config::load().unwrap();
            assert_eq!(config.data_dir, PathBuf::from("/srv/diary"));
            env::remove_var("DIARYBOT_TEST_ROOT");
        });
    }

    #[test]
    #[serial]
    fn test_load_rejects_unknown_variable() {
        with_clean_env(|| {
            env::remove_var("DIARYBOT_TEST_MISSING");
            env::set_var(ENV_VAR_DIARYBOT_DIR, "$DIARYBOT_TEST_MISSING/diary");

            match Config::load() {
                Err(AppError::Config(msg)) => assert!(msg.contains("Failed to expand path")),
                other => panic!("Expected Config error, got {:?}", other),
            }
        });
    }

    #[test]
    #[serial]
    fn test_blank_user_is_unset() {
        with_clean_env(|| {
            env::set_var(ENV_VAR_DIARYBOT_DIR, "/data/diary");
            env::set_var(ENV_VAR_DIARYBOT_USER, "   ");
            assert_eq!(Config::load().unwrap().default_owner, None);
        });
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(config("/diary", "/diary/exports").validate().is_ok());
    }

    #[test]
    fn test_validate_empty_data_dir() {
        match config("", "/exports").validate() {
            Err(AppError::Config(msg)) => assert_eq!(msg, "Data directory path is empty"),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_relative_export_dir() {
        match config("/diary", "exports").validate() {
            Err(AppError::Config(msg)) => {
                assert_eq!(msg, "Export directory must be an absolute path")
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
