//! Diary export to a PDF document.

use crate::constants::EXPORT_DATE_FORMAT;
use crate::diary_core::Owner;
use crate::diary_io::{ensure_data_directory_exists, EntryStore};
use crate::errors::{AppResult, ExportError};
use crate::export::{layout_document, render_pdf};
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Report of a completed export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Where the document was written
    pub path: PathBuf,
    /// Number of entries rendered
    pub entries: usize,
    /// Number of pages in the document
    pub pages: usize,
    /// Records skipped because they could not be loaded
    pub skipped: usize,
}

/// File name of an export: `DiaryExport_{owner}_{YYYYMMDD}.pdf`.
pub fn export_file_name(owner: &Owner, date: NaiveDate) -> String {
    format!(
        "DiaryExport_{}_{}.pdf",
        owner.as_str(),
        date.format(EXPORT_DATE_FORMAT)
    )
}

/// Exports all of `owner`'s entries into a paginated PDF.
///
/// # Flow
///
/// 1. Load entries from the store (corrupt records are skipped)
/// 2. Re-sort them oldest first
/// 3. Lay them out into pages and serialize the document
/// 4. Write to a temporary file next to the target, sync it
/// 5. Rename it over the final name
///
/// A failure at any step leaves no document under the final name; the
/// temporary file is removed when it is dropped.
///
/// # Arguments
///
/// * `store` - Entry store to read from
/// * `owner` - Owner whose diary is exported
/// * `export_dir` - Directory receiving the document
/// * `date` - Export date used in the file name
///
/// # Errors
///
/// Returns an error if:
/// - The export directory cannot be created (`AppError::Io` / `AppError::Config`)
/// - The document cannot be written or moved into place (`AppError::Export`)
pub fn export_entries(
    store: &EntryStore,
    owner: &Owner,
    export_dir: &Path,
    date: NaiveDate,
) -> AppResult<ExportReport> {
    let listing = store.list(owner);
    let mut entries = listing.entries;
    entries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

    let title = format!("Diary Export - {}", owner);
    let pages = layout_document(owner.as_str(), &entries);
    let document = render_pdf(&title, &pages);
    debug!(
        "Rendered {} entries into {} pages ({} bytes)",
        entries.len(),
        pages.len(),
        document.len()
    );

    ensure_data_directory_exists(export_dir)?;
    let file_name = export_file_name(owner, date);
    let path = export_dir.join(&file_name);
    write_atomically(&path, &file_name, &document)?;

    info!("PDF exported successfully as {}", file_name);
    Ok(ExportReport {
        path,
        entries: entries.len(),
        pages: pages.len(),
        skipped: listing.skipped.len(),
    })
}

fn write_atomically(path: &Path, file_name: &str, bytes: &[u8]) -> Result<(), ExportError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let write_failed = |source| ExportError::WriteFailed {
        file_name: file_name.to_string(),
        source,
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_failed)?;
    temp.write_all(bytes).map_err(write_failed)?;
    temp.as_file().sync_all().map_err(write_failed)?;

    temp.persist(path).map_err(|e| ExportError::Finalize {
        file_name: file_name.to_string(),
        source: e.error,
    })?;
    Ok(())
}
