/*!
# DiaryBot

Command-line front end for a personal diary. Entries are classified by
sentiment when they are written, stored as one JSON record each, and can be
searched, summarized and exported to PDF.

## Usage

```text
diarybot [OPTIONS] <COMMAND>

Commands:
  new     Write a new entry
  list    List entries, most recent first
  show    Show one entry in full
  search  Find entries whose title or content contains the query
  stats   Emotion counts and score histogram
  export  Export the diary as a PDF document

Options:
  -u, --user <USER>              Diary owner (defaults to DIARYBOT_USER)
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
  -v, --verbose                  Print verbose output
```

## Configuration

- `DIARYBOT_DIR`: data directory (defaults to "~/Documents/diarybot")
- `DIARYBOT_EXPORT_DIR`: export directory (defaults to "$DIARYBOT_DIR/exports")
- `DIARYBOT_USER`: default diary owner
*/

use chrono::Local;
use diarybot::cli::{CliArgs, Command};
use diarybot::config::Config;
use diarybot::constants::{
    DEFAULT_LOG_LEVEL, DISPLAY_DATETIME_SECONDS_FORMAT, DISPLAY_DATE_FORMAT,
    TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME, VERBOSE_LOG_LEVEL,
};
use diarybot::diary_core::{EntryDraft, Owner};
use diarybot::diary_io::EntryStore;
use diarybot::errors::{AppError, AppResult};
use diarybot::ops;
use diarybot::sentiment::LexiconAnalyzer;
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(&args);

    let correlation_id = Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout stays clean
/// for command output.
fn init_tracing(args: &CliArgs) {
    let default_level = if args.verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    if args.json_logs() {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_ansi(io::stderr().is_terminal())
                    .with_target(false),
            )
            .init();
    }
}

fn run(args: CliArgs) -> AppResult<()> {
    info!("Starting diarybot");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let owner = resolve_owner(args.user.as_deref(), &config)?;
    let store = EntryStore::open(&config.entries_dir())?;

    match args.command {
        Command::New {
            title,
            content,
            attachments,
        } => {
            let content = match content {
                Some(text) => text,
                None => read_stdin()?,
            };
            let mut draft = EntryDraft::new(title, content);
            for path in attachments {
                draft.attach(path);
            }

            let analyzer = LexiconAnalyzer::new();
            let entry = ops::save_entry(&store, &analyzer, &owner, &draft, &Local::now())?;
            println!(
                "Entry saved successfully! Emotion detected: {} {}",
                entry.emotion,
                entry.emotion.emoji()
            );
            println!("Id: {}", entry.id);
        }
        Command::List => {
            let entries = store.list(&owner).entries;
            if entries.is_empty() {
                println!("No entries yet.");
            }
            for entry in entries {
                println!(
                    "{} - {} {}",
                    entry.display_date(),
                    entry.title,
                    entry.emotion.emoji()
                );
            }
        }
        Command::Show { id } => {
            let Some(entry) = store.get(&owner, &id)? else {
                println!("No entry found with id {}.", id);
                return Ok(());
            };
            println!("{}", entry.title);
            println!(
                "Date: {}",
                entry.created_at.format(DISPLAY_DATETIME_SECONDS_FORMAT)
            );
            println!(
                "Emotion: {} {} (score {:.2})",
                entry.emotion,
                entry.emotion.emoji(),
                entry.sentiment_score
            );
            if !entry.attachments.is_empty() {
                println!("Attachments:");
                for path in &entry.attachments {
                    println!("  {}", path.display());
                }
            }
            println!();
            println!("{}", entry.content);
        }
        Command::Search { query } => {
            let entries = store.list(&owner).entries;
            let results = ops::search_entries(&entries, &query)?;
            if results.is_empty() {
                println!("No matching entries found.");
            }
            for entry in results {
                println!(
                    "{} - {}",
                    entry.created_at.format(DISPLAY_DATE_FORMAT),
                    entry.title
                );
            }
        }
        Command::Stats { buckets } => {
            let entries = store.list(&owner).entries;
            let summary = ops::summarize(&entries);
            println!("Total entries: {}", summary.total);
            println!("Positive: {}", summary.positive_count);
            println!("Negative: {}", summary.negative_count);
            println!("Neutral: {}", summary.neutral_count);

            let bucket_count = usize::from(buckets);
            let counts = ops::histogram(&entries, bucket_count)?;
            println!("Sentiment distribution:");
            for (index, count) in counts.iter().enumerate() {
                let (lower, upper) = ops::bucket_range(index, bucket_count);
                println!(
                    "{:>5.2} .. {:>5.2} | {:<3} {}",
                    lower,
                    upper,
                    count,
                    "#".repeat(*count)
                );
            }
        }
        Command::Export { output_dir } => {
            let export_dir = output_dir.unwrap_or_else(|| config.export_dir.clone());
            let export_dir = if export_dir.is_absolute() {
                export_dir
            } else {
                std::env::current_dir()?.join(export_dir)
            };
            let report =
                ops::export_entries(&store, &owner, &export_dir, Local::now().date_naive())?;
            let file_name = report
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!(
                "PDF exported successfully as {} ({} entries, {} pages)",
                file_name, report.entries, report.pages
            );
            if report.skipped > 0 {
                println!("Skipped {} unreadable records", report.skipped);
            }
        }
    }

    Ok(())
}

/// Picks the owner from `--user`, falling back to the configured default.
fn resolve_owner(cli_user: Option<&str>, config: &Config) -> AppResult<Owner> {
    let raw = cli_user
        .or(config.default_owner.as_deref())
        .ok_or_else(|| {
            AppError::Config("No diary owner given; pass --user or set DIARYBOT_USER".to_string())
        })?;
    Ok(Owner::new(raw)?)
}

fn read_stdin() -> AppResult<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}
