//! Error handling utilities for the diarybot application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Errors name the operation that failed and the record key or file name
//! involved. They never carry absolute filesystem paths.

use std::io;
use thiserror::Error;

/// Caller-correctable input problems.
///
/// Validation happens before any state is touched, so a `ValidationError`
/// always means nothing was written.
///
/// # Examples
///
/// ```
/// use diarybot::errors::ValidationError;
///
/// let error = ValidationError::EmptyQuery;
/// assert!(format!("{}", error).contains("search term"));
///
/// let error = ValidationError::InvalidOwner {
///     owner: "../etc".to_string(),
///     reason: "must not contain path separators",
/// };
/// assert!(format!("{}", error).contains("../etc"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The entry title is empty or whitespace only.
    #[error("Entry title cannot be empty. Please fill in a title.")]
    EmptyTitle,

    /// The entry content is empty or whitespace only.
    #[error("Entry content cannot be empty. Please write something before saving.")]
    EmptyContent,

    /// A search was requested without a search term.
    #[error("Please enter a search term.")]
    EmptyQuery,

    /// The owner identifier cannot be used as part of a storage key.
    #[error("Invalid owner '{owner}': {reason}")]
    InvalidOwner {
        /// The rejected owner identifier
        owner: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// An entry id does not have the `YYYYMMDD_HHMMSS[-N]` shape.
    #[error("Entry id '{0}' is not of the form YYYYMMDD_HHMMSS")]
    InvalidId(String),

    /// A histogram was requested with zero buckets.
    #[error("Histogram bucket count must be at least 1")]
    InvalidBucketCount,

    /// A sentiment score is not a finite number inside [-1.0, 1.0].
    #[error("Sentiment score {0} is outside the range [-1.0, 1.0]")]
    InvalidScore(f64),
}

/// Failure of the text analysis backing sentiment classification.
///
/// When classification fails the save pipeline stops before anything is
/// written; there is no fallback label.
///
/// # Examples
///
/// ```
/// use diarybot::errors::AnalysisError;
///
/// let error = AnalysisError::NonFinite {
///     analyzer: "lexicon".to_string(),
/// };
/// assert!(format!("{}", error).contains("lexicon"));
/// ```
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The analyzer reported a failure of its own.
    #[error("Sentiment analyzer '{analyzer}' failed: {message}")]
    Failed {
        /// Name of the analyzer
        analyzer: String,
        /// What went wrong
        message: String,
    },

    /// The analyzer produced NaN or an infinite polarity.
    #[error("Sentiment analyzer '{analyzer}' produced a non-finite polarity")]
    NonFinite {
        /// Name of the analyzer
        analyzer: String,
    },
}

/// Write-path failures of the entry store.
///
/// A `PersistenceError` always means the save was aborted and no partial
/// record is visible to readers.
///
/// # Examples
///
/// ```
/// use diarybot::errors::PersistenceError;
/// use std::io::{self, ErrorKind};
///
/// let error = PersistenceError::WriteFailed {
///     record: "alice_20240115_143000".to_string(),
///     source: io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
/// };
/// let message = format!("{}", error);
/// assert!(message.contains("alice_20240115_143000"));
/// assert!(message.contains("permission denied"));
/// ```
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The entry could not be serialized into a record.
    #[error("Failed to serialize entry: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The record could not be written, synced or linked into place.
    #[error("Failed to write record {record}: {source}. Please check disk space and permissions of the data directory.")]
    WriteFailed {
        /// The storage key of the record
        record: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Every collision suffix for this second is already taken.
    #[error("Too many entries saved within the same second for record {record}")]
    CollisionLimit {
        /// The storage key that kept colliding
        record: String,
    },
}

/// The reason a single stored record could not be turned back into an entry.
#[derive(Debug, Error)]
pub enum RecordFault {
    /// The file could not be read.
    #[error("unreadable: {0}")]
    Read(#[source] io::Error),

    /// The file is not a valid entry document.
    #[error("malformed: {0}")]
    Decode(#[source] serde_json::Error),

    /// The document decoded but breaks an entry invariant.
    #[error("invalid: {0}")]
    Invalid(#[source] ValidationError),
}

/// A per-record parse failure.
///
/// `EntryStore::list` reports these as skip notices and keeps going; only
/// single-record lookups surface them as errors.
///
/// # Examples
///
/// ```
/// use diarybot::errors::{RecordFault, RecordParseError, ValidationError};
///
/// let error = RecordParseError {
///     record: "alice_20240115_143000.json".to_string(),
///     fault: RecordFault::Invalid(ValidationError::EmptyTitle),
/// };
/// assert!(format!("{}", error).contains("alice_20240115_143000.json"));
/// ```
#[derive(Debug, Error)]
#[error("Skipping record {record}: {fault}")]
pub struct RecordParseError {
    /// File name of the record
    pub record: String,
    /// What was wrong with it
    #[source]
    pub fault: RecordFault,
}

/// Failures while generating an exported document.
///
/// A failed export never leaves a final document behind.
///
/// # Examples
///
/// ```
/// use diarybot::errors::ExportError;
/// use std::io::{self, ErrorKind};
///
/// let error = ExportError::Finalize {
///     file_name: "DiaryExport_alice_20240115.pdf".to_string(),
///     source: io::Error::new(ErrorKind::Other, "rename failed"),
/// };
/// assert!(format!("{}", error).contains("DiaryExport_alice_20240115.pdf"));
/// ```
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the in-progress document failed.
    #[error("Failed to write export {file_name}: {source}. Please check disk space and permissions of the export directory.")]
    WriteFailed {
        /// The final document name
        file_name: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Moving the finished document into place failed.
    #[error("Failed to finalize export {file_name}: {source}")]
    Finalize {
        /// The final document name
        file_name: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the diarybot application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use diarybot::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use diarybot::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input supplied by the caller.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Sentiment classification failed while saving an entry.
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Saving an entry failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// A single requested record is corrupt.
    #[error("Record error: {0}")]
    Record(#[from] RecordParseError),

    /// Generating an exported document failed.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use diarybot::errors::{AppResult, AppError, ValidationError};
///
/// fn might_fail(title: &str) -> AppResult<String> {
///     if title.is_empty() {
///         return Err(ValidationError::EmptyTitle.into());
///     }
///     Ok(title.to_string())
/// }
///
/// assert!(might_fail("Good day").is_ok());
/// assert!(matches!(might_fail(""), Err(AppError::Validation(_))));
/// ```
pub type AppResult<T> = Result<T, AppError>;
