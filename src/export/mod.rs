//! Paginated document export.
//!
//! Exports render a diary, oldest entry first, into US-letter PDF pages.
//!
//! # Module Structure
//!
//! - `fonts`: base-14 Helvetica fonts and their width metrics
//! - `layout`: word wrapping, page breaks and positioned drawing operations
//! - `pdf`: serialization of laid-out pages into a PDF file

pub mod fonts;
pub mod layout;
pub mod pdf;

pub use fonts::Font;
pub use layout::{layout_document, wrap_words, DrawOp, Page};
pub use pdf::render_pdf;
