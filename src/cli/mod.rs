//! Command-line interface definition.

use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DEFAULT_HISTOGRAM_BUCKETS, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
};
use clap::{value_parser, Parser, Subcommand};
use std::path::PathBuf;

/// A personal diary with sentiment tracking and PDF export
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION, version)]
pub struct CliArgs {
    /// Diary owner (defaults to DIARYBOT_USER)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Log output format
    #[arg(
        long,
        global = true,
        default_value = LOG_FORMAT_TEXT,
        value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON]
    )]
    pub log_format: String,

    /// Print verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Write a new entry
    New {
        /// Entry title
        #[arg(short, long)]
        title: String,

        /// Entry text; read from stdin when omitted
        #[arg(short, long)]
        content: Option<String>,

        /// Attach an already stored file
        #[arg(short, long = "attach")]
        attachments: Vec<PathBuf>,
    },
    /// List entries, most recent first
    List,
    /// Show one entry in full
    Show {
        /// Entry id as printed by `new`
        id: String,
    },
    /// Find entries whose title or content contains the query
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },
    /// Emotion counts and score histogram
    Stats {
        /// Number of histogram bins
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_HISTOGRAM_BUCKETS,
            value_parser = value_parser!(u16).range(1..=100)
        )]
        buckets: u16,
    },
    /// Export the diary as a PDF document
    Export {
        /// Directory to write to (defaults to DIARYBOT_EXPORT_DIR)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        <CliArgs as Parser>::parse()
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == LOG_FORMAT_JSON
    }
}
