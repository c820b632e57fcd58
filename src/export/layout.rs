//! Page layout for exported diaries.
//!
//! Turns entries into pages of positioned drawing operations. Coordinates are
//! PDF points with the origin at the bottom-left corner of a US-letter page,
//! so the vertical cursor starts near the top and moves down.

use super::fonts::Font;
use crate::diary_core::Entry;

/// US letter width in points.
pub const PAGE_WIDTH: f64 = 612.0;
/// US letter height in points.
pub const PAGE_HEIGHT: f64 = 792.0;
/// X position of every text line.
pub const LEFT_MARGIN: f64 = 100.0;
/// Distance from the top edge to the first line of a page.
pub const TOP_MARGIN: f64 = 50.0;
/// Distance from the top edge to the first entry of the first page.
pub const FIRST_ENTRY_OFFSET: f64 = 100.0;
/// An entry header is never started below this cursor position.
pub const NEW_ENTRY_THRESHOLD: f64 = 150.0;
/// A content line is never drawn below this cursor position.
pub const LINE_THRESHOLD: f64 = 50.0;
/// Maximum rendered width of a wrapped content line.
pub const CONTENT_MAX_WIDTH: f64 = 400.0;
/// Right end of the separator rule.
pub const RULE_END_X: f64 = 500.0;

const HEADER_SIZE: f64 = 16.0;
const TITLE_SIZE: f64 = 12.0;
const TITLE_ADVANCE: f64 = 25.0;
const META_SIZE: f64 = 9.0;
const META_ADVANCE: f64 = 20.0;
const CONTENT_SIZE: f64 = 10.0;
const LINE_HEIGHT: f64 = 15.0;
const ATTACHMENT_GAP: f64 = 10.0;
const ATTACHMENT_ADVANCE: f64 = 15.0;
const SEPARATOR_GAP: f64 = 10.0;
const SEPARATOR_ADVANCE: f64 = 20.0;

/// One positioned drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        font: Font,
        size: f64,
        x: f64,
        y: f64,
        text: String,
    },
    Rule {
        x1: f64,
        x2: f64,
        y: f64,
    },
}

/// A laid-out page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// The text drawn on this page, in drawing order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }
}

/// Lays out a diary export.
///
/// `entries` are drawn in the order given; callers sort them oldest first.
/// The first page always starts with the `"Diary Export - {owner}"` header,
/// so an empty diary still yields one page.
pub fn layout_document(owner: &str, entries: &[Entry]) -> Vec<Page> {
    let mut writer = PageWriter::new();
    writer.text(
        Font::HelveticaBold,
        HEADER_SIZE,
        format!("Diary Export - {}", owner),
    );
    writer.y = PAGE_HEIGHT - FIRST_ENTRY_OFFSET;

    for entry in entries {
        layout_entry(&mut writer, entry);
    }

    writer.finish()
}

fn layout_entry(writer: &mut PageWriter, entry: &Entry) {
    if writer.y < NEW_ENTRY_THRESHOLD {
        writer.new_page();
    }

    writer.text(
        Font::HelveticaBold,
        TITLE_SIZE,
        format!("{} ({})", entry.title, entry.display_date()),
    );
    writer.y -= TITLE_ADVANCE;

    writer.text(
        Font::Helvetica,
        META_SIZE,
        format!(
            "Emotion: {} | Score: {:.2}",
            entry.emotion, entry.sentiment_score
        ),
    );
    writer.y -= META_ADVANCE;

    for line in wrap_words(&entry.content, Font::Helvetica, CONTENT_SIZE, CONTENT_MAX_WIDTH) {
        if writer.y < LINE_THRESHOLD {
            writer.new_page();
        }
        writer.text(Font::Helvetica, CONTENT_SIZE, line);
        writer.y -= LINE_HEIGHT;
    }

    if !entry.attachments.is_empty() {
        writer.y -= ATTACHMENT_GAP;
        writer.text(
            Font::HelveticaOblique,
            META_SIZE,
            format!("Attachments: {} file(s)", entry.attachments.len()),
        );
        writer.y -= ATTACHMENT_ADVANCE;
    }

    writer.y -= SEPARATOR_GAP;
    if writer.y > LINE_THRESHOLD {
        writer.rule();
        writer.y -= SEPARATOR_ADVANCE;
    }
}

/// Greedy word wrap.
///
/// Words are accumulated into a line while its rendered width stays within
/// `max_width`. A word that is wider than `max_width` on its own is placed
/// alone on its own line, never split or dropped.
pub fn wrap_words(text: &str, font: Font, size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if font.string_width(&candidate, size) <= max_width {
            current = candidate;
        } else if current.is_empty() {
            lines.push(candidate);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Accumulates operations page by page while tracking the vertical cursor.
struct PageWriter {
    pages: Vec<Page>,
    current: Page,
    y: f64,
}

impl PageWriter {
    fn new() -> Self {
        PageWriter {
            pages: Vec::new(),
            current: Page::default(),
            y: PAGE_HEIGHT - TOP_MARGIN,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = PAGE_HEIGHT - TOP_MARGIN;
    }

    fn text(&mut self, font: Font, size: f64, text: String) {
        self.current.ops.push(DrawOp::Text {
            font,
            size,
            x: LEFT_MARGIN,
            y: self.y,
            text,
        });
    }

    fn rule(&mut self) {
        self.current.ops.push(DrawOp::Rule {
            x1: LEFT_MARGIN,
            x2: RULE_END_X,
            y: self.y,
        });
    }

    fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        self.pages
    }
}
