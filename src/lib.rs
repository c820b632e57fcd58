/*!
# DiaryBot

DiaryBot is the core of a single-user journaling application. Each entry is
classified by sentiment when it is written and stored as an immutable record;
the diary can then be searched, summarized and exported as a PDF.

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `constants`: Shared names, formats and thresholds
- `diary_core`: Entry, owner and draft types
- `diary_io`: Durable per-owner record storage
- `errors`: Error handling infrastructure
- `export`: Page layout and PDF serialization
- `ops`: User-facing operations (save, search, statistics, export)
- `sentiment`: Polarity analysis and emotion classification

## Usage Example

```rust,no_run
use chrono::Local;
use diarybot::diary_core::{EntryDraft, Owner};
use diarybot::diary_io::EntryStore;
use diarybot::ops;
use diarybot::sentiment::LexiconAnalyzer;
use diarybot::Config;

fn main() -> diarybot::AppResult<()> {
    let config = Config::load()?;
    let store = EntryStore::open(&config.entries_dir())?;
    let owner = Owner::new("alice")?;

    let draft = EntryDraft::new("Good day", "I am so happy and excited today");
    let entry = ops::save_entry(&store, &LexiconAnalyzer::new(), &owner, &draft, &Local::now())?;
    println!("Saved {} as {}", entry.id, entry.emotion);

    let summary = ops::summarize(&store.list(&owner).entries);
    println!("{} entries so far", summary.total);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Core diary types
pub mod diary_core;
/// Entry record storage
pub mod diary_io;
/// Error types and utilities for error handling
pub mod errors;
/// PDF export rendering
pub mod export;
/// High-level diary operations
pub mod ops;
/// Sentiment analysis
pub mod sentiment;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use diary_core::{Emotion, Entry, EntryDraft, Owner};
pub use diary_io::EntryStore;
pub use errors::{AppError, AppResult};
