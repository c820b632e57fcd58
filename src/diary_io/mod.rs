//! Diary record storage.
//!
//! This module owns the on-disk layout of entries: one pretty-printed JSON
//! record per entry, named `{owner}_{id}.json`, inside a single entries
//! directory. The naming scheme stays private to [`EntryStore`]; callers
//! address entries by `(owner, id)` only.
//!
//! Writes go through a temporary file in the same directory that is linked
//! into place without clobbering, so a record is either fully present or not
//! present at all. Reads tolerate corrupt records: they are reported and
//! skipped.

use crate::constants::{MAX_ID_COLLISION_SUFFIX, RECORD_FILE_EXTENSION};
use crate::diary_core::{id_sequence, is_entry_id, suffixed_id, Entry, Owner};
use crate::errors::{AppError, AppResult, PersistenceError, RecordFault, RecordParseError};
use std::fs::{self, Permissions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};
use walkdir::WalkDir;


/// Ensures the entries directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Config` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails due to permission issues,
///   invalid paths, or other filesystem errors
pub fn ensure_data_directory_exists(dir: &Path) -> AppResult<()> {
    if !dir.is_absolute() {
        return Err(AppError::Config(format!(
            "Data directory path must be absolute: {}",
            dir.display()
        )));
    }

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        // Set secure permissions (0o700 - read/write/execute only for owner)
        #[cfg(unix)]
        {
            let permissions = Permissions::from_mode(crate::constants::DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(dir, permissions).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to set secure permissions on data directory: {}", e),
                ))
            })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

/// The outcome of scanning one owner's records.
///
/// `entries` holds everything that loaded, newest first; `skipped` holds one
/// notice per record that could not be loaded.
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<Entry>,
    pub skipped: Vec<RecordParseError>,
}

/// Durable map from `(owner, id)` to [`Entry`].
///
/// # Examples
///
/// ```no_run
/// use diarybot::diary_io::EntryStore;
/// use diarybot::diary_core::Owner;
/// use std::path::Path;
///
/// let store = EntryStore::open(Path::new("/home/alice/Documents/diarybot/entries"))?;
/// let owner = Owner::new("alice")?;
/// for entry in store.list(&owner).entries {
///     println!("{} - {}", entry.display_date(), entry.title);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct EntryStore {
    entries_dir: PathBuf,
}

impl EntryStore {
    /// Opens the store rooted at `entries_dir`, creating the directory if
    /// needed.
    pub fn open(entries_dir: &Path) -> AppResult<Self> {
        ensure_data_directory_exists(entries_dir)?;
        Ok(EntryStore {
            entries_dir: entries_dir.to_path_buf(),
        })
    }

    /// Persists a new entry for `owner` and returns it as stored.
    ///
    /// If a record with the same id already exists (two saves within one
    /// second) the id gets a numeric suffix (`-2`, `-3`, ...) instead of
    /// overwriting the earlier entry. The returned entry carries the final
    /// id.
    ///
    /// # Errors
    ///
    /// - `AppError::Validation` if the entry breaks an entry invariant
    /// - `AppError::Persistence` if the record cannot be serialized or
    ///   written, or every collision suffix is taken
    pub fn save(&self, owner: &Owner, entry: Entry) -> AppResult<Entry> {
        entry.validate()?;

        let base_id = entry.id.clone();
        let mut entry = entry;

        for attempt in 1..=MAX_ID_COLLISION_SUFFIX {
            entry.id = suffixed_id(&base_id, attempt);
            let record = record_key(owner, &entry.id);
            let json = serde_json::to_vec_pretty(&entry).map_err(PersistenceError::Serialize)?;

            match self.write_record(&record, &json) {
                Ok(()) => {
                    info!(record = %record, emotion = %entry.emotion, "Saved entry");
                    return Ok(entry);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(record = %record, "Record exists, trying next id suffix");
                }
                Err(source) => {
                    return Err(PersistenceError::WriteFailed { record, source }.into());
                }
            }
        }

        Err(PersistenceError::CollisionLimit {
            record: record_key(owner, &base_id),
        }
        .into())
    }

    /// Loads every readable entry of `owner`, newest first.
    ///
    /// Records that cannot be read, parsed or validated are skipped and
    /// reported in [`Listing::skipped`]. This never fails: an unreadable
    /// directory produces an empty listing.
    pub fn list(&self, owner: &Owner) -> Listing {
        let mut listing = Listing::default();

        for path in self.record_paths(owner) {
            match load_record(&path) {
                Ok(entry) => listing.entries.push(entry),
                Err(notice) => {
                    warn!("{}", notice);
                    listing.skipped.push(notice);
                }
            }
        }

        listing.entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| id_sequence(&b.id).cmp(&id_sequence(&a.id)))
                .then_with(|| b.id.cmp(&a.id))
        });

        debug!(
            loaded = listing.entries.len(),
            skipped = listing.skipped.len(),
            "Listed entries"
        );
        listing
    }

    /// Looks up a single entry by id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Record` if the record exists but is corrupt.
    pub fn get(&self, owner: &Owner, id: &str) -> AppResult<Option<Entry>> {
        if !is_entry_id(id) {
            return Ok(None);
        }

        let path = self.record_path(&record_key(owner, id));
        if !path.is_file() {
            return Ok(None);
        }

        Ok(Some(load_record(&path)?))
    }

    /// Number of loadable entries of `owner`.
    pub fn count(&self, owner: &Owner) -> usize {
        self.list(owner).entries.len()
    }

    fn record_path(&self, record: &str) -> PathBuf {
        self.entries_dir
            .join(format!("{}.{}", record, RECORD_FILE_EXTENSION))
    }

    /// Paths of all records named `{owner}_{id}.json` in the entries directory.
    fn record_paths(&self, owner: &Owner) -> Vec<PathBuf> {
        let prefix = format!("{}_", owner.as_str());
        let suffix = format!(".{}", RECORD_FILE_EXTENSION);

        WalkDir::new(&self.entries_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| match e {
                Ok(e) => Some(e),
                Err(err) => {
                    warn!("Skipping unreadable directory entry: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .and_then(|name| name.strip_prefix(&prefix))
                    .and_then(|rest| rest.strip_suffix(&suffix))
                    .is_some_and(is_entry_id)
            })
            .map(|e| e.into_path())
            .collect()
    }

    /// Writes `bytes` as record `record`, failing with `AlreadyExists` when
    /// the record is already present.
    fn write_record(&self, record: &str, bytes: &[u8]) -> io::Result<()> {
        let mut temp = NamedTempFile::new_in(&self.entries_dir)?;
        temp.write_all(bytes)?;
        temp.as_file().sync_all()?;

        #[cfg(unix)]
        temp.as_file()
            .set_permissions(Permissions::from_mode(crate::constants::DEFAULT_FILE_PERMISSIONS))?;

        temp.persist_noclobber(self.record_path(record))
            .map_err(|e| e.error)?;
        Ok(())
    }
}

/// Storage key of an entry: `{owner}_{id}`.
fn record_key(owner: &Owner, id: &str) -> String {
    format!("{}_{}", owner.as_str(), id)
}

fn load_record(path: &Path) -> Result<Entry, RecordParseError> {
    let record = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let notice = |fault| RecordParseError {
        record: record.clone(),
        fault,
    };

    let raw = fs::read(path).map_err(|e| notice(RecordFault::Read(e)))?;
    let entry: Entry = serde_json::from_slice(&raw).map_err(|e| notice(RecordFault::Decode(e)))?;
    entry
        .validate()
        .map_err(|e| notice(RecordFault::Invalid(e)))?;
    Ok(entry)
}
