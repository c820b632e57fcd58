//! High-level diary operations.
//!
//! These functions orchestrate the core pieces (sentiment classification,
//! record storage, layout and rendering) into the actions a user performs:
//! writing an entry, searching, looking at statistics and exporting.

pub mod analytics;
pub mod export;
pub mod save;
pub mod search;

pub use analytics::{bucket_range, histogram, summarize, EmotionSummary};
pub use export::{export_entries, export_file_name, ExportReport};
pub use save::save_entry;
pub use search::search_entries;
