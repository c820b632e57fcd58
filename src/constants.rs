//! Constants used throughout the application.
//!
//! This module contains all constants used in the DiaryBot application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "diarybot";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A personal diary with sentiment tracking and PDF export";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for the DiaryBot data directory.
pub const ENV_VAR_DIARYBOT_DIR: &str = "DIARYBOT_DIR";
/// Environment variable for the directory exported documents are written to.
pub const ENV_VAR_DIARYBOT_EXPORT_DIR: &str = "DIARYBOT_EXPORT_DIR";
/// Environment variable naming the already-authenticated diary owner.
pub const ENV_VAR_DIARYBOT_USER: &str = "DIARYBOT_USER";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for diary data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = "Documents/diarybot";
/// Sub-directory of the data directory holding entry records.
pub const ENTRIES_SUBDIR: &str = "entries";
/// Sub-directory of the data directory holding exported documents.
pub const EXPORTS_SUBDIR: &str = "exports";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// File System Parameters
/// File extension for entry records.
pub const RECORD_FILE_EXTENSION: &str = "json";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;
/// Highest numeric suffix tried when two entries share the same second.
pub const MAX_ID_COLLISION_SUFFIX: u32 = 99;

// Date/Time Logic
/// Format of entry ids, derived from the creation instant.
pub const ENTRY_ID_FORMAT: &str = "%Y%m%d_%H%M%S";
/// Date and minute format used in listings and export titles.
pub const DISPLAY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Full timestamp format used when showing a single entry.
pub const DISPLAY_DATETIME_SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Date format used in search results.
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";
/// Date format used in export file names.
pub const EXPORT_DATE_FORMAT: &str = "%Y%m%d";
/// Naive timestamp format written by legacy records without an offset.
pub const LEGACY_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// Sentiment
/// Scores strictly above this value are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Scores strictly below this value are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;
/// Lower bound of the polarity domain.
pub const MIN_SCORE: f64 = -1.0;
/// Upper bound of the polarity domain.
pub const MAX_SCORE: f64 = 1.0;
/// Default number of histogram bins over the polarity domain.
pub const DEFAULT_HISTOGRAM_BUCKETS: u16 = 10;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "diarybot";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
