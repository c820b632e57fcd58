//! Minimal PDF 1.4 serializer for laid-out pages.
//!
//! Writes one content stream per page and references the standard Helvetica
//! fonts by name with WinAnsi encoding, so no font data is embedded. The
//! cross-reference table is computed from the exact byte offsets of the
//! objects as they are written.

use super::fonts::{winansi_code, Font};
use super::layout::{DrawOp, Page, PAGE_HEIGHT, PAGE_WIDTH};
use std::fmt::Write as _;

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const INFO_ID: usize = 3;
const FIRST_FONT_ID: usize = 4;

/// Serializes `pages` into a complete PDF document.
///
/// `title` is stored in the document information dictionary.
pub fn render_pdf(title: &str, pages: &[Page]) -> Vec<u8> {
    let first_page_id = FIRST_FONT_ID + Font::ALL.len();
    // each page takes two objects: the page dictionary and its content stream
    let page_ids: Vec<usize> = (0..pages.len()).map(|i| first_page_id + 2 * i).collect();
    let object_count = first_page_id + 2 * pages.len() - 1;

    let mut out = PdfBuffer::new();
    out.raw(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    out.object(
        CATALOG_ID,
        &format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID),
    );

    let kids = page_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ");
    out.object(
        PAGES_ID,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            pages.len()
        ),
    );

    out.object(
        INFO_ID,
        &format!(
            "<< /Title ({}) /Producer ({}) >>",
            encode_text(title),
            crate::constants::APP_NAME
        ),
    );

    let mut font_resources = String::new();
    for (offset, font) in Font::ALL.iter().enumerate() {
        let id = FIRST_FONT_ID + offset;
        out.object(
            id,
            &format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                font.base_name()
            ),
        );
        let _ = write!(font_resources, "/{} {} 0 R ", font.resource_name(), id);
    }

    for (page, &page_id) in pages.iter().zip(&page_ids) {
        let content_id = page_id + 1;
        out.object(
            page_id,
            &format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << {}>> >> /Contents {} 0 R >>",
                PAGES_ID,
                number(PAGE_WIDTH),
                number(PAGE_HEIGHT),
                font_resources,
                content_id
            ),
        );
        out.stream(content_id, &content_stream(page));
    }

    out.finish(object_count)
}

/// Drawing operators for one page.
fn content_stream(page: &Page) -> String {
    let mut stream = String::new();
    for op in &page.ops {
        match op {
            DrawOp::Text {
                font,
                size,
                x,
                y,
                text,
            } => {
                let _ = writeln!(
                    stream,
                    "BT /{} {} Tf {} {} Td ({}) Tj ET",
                    font.resource_name(),
                    number(*size),
                    number(*x),
                    number(*y),
                    encode_text(text)
                );
            }
            DrawOp::Rule { x1, x2, y } => {
                let _ = writeln!(
                    stream,
                    "{} {} m {} {} l S",
                    number(*x1),
                    number(*y),
                    number(*x2),
                    number(*y)
                );
            }
        }
    }
    stream
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
fn number(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Escapes text for a PDF literal string in WinAnsi encoding.
///
/// Characters beyond ASCII are written as octal escapes of their WinAnsi
/// byte; anything WinAnsi cannot represent becomes `?`.
fn encode_text(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                encoded.push('\\');
                encoded.push(c);
            }
            ' '..='~' => encoded.push(c),
            '\t' => encoded.push(' '),
            _ => match winansi_code(c) {
                Some(code) => {
                    let _ = write!(encoded, "\\{:03o}", code);
                }
                None => encoded.push('?'),
            },
        }
    }
    encoded
}

/// Output buffer that remembers where each object starts.
struct PdfBuffer {
    bytes: Vec<u8>,
    offsets: Vec<(usize, usize)>,
}

impl PdfBuffer {
    fn new() -> Self {
        PdfBuffer {
            bytes: Vec::new(),
            offsets: Vec::new(),
        }
    }

    fn raw(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    fn object(&mut self, id: usize, body: &str) {
        self.offsets.push((id, self.bytes.len()));
        self.raw(format!("{} 0 obj\n{}\nendobj\n", id, body).as_bytes());
    }

    fn stream(&mut self, id: usize, content: &str) {
        self.offsets.push((id, self.bytes.len()));
        self.raw(
            format!(
                "{} 0 obj\n<< /Length {} >>\nstream\n{}endstream\nendobj\n",
                id,
                content.len(),
                content
            )
            .as_bytes(),
        );
    }

    fn finish(mut self, object_count: usize) -> Vec<u8> {
        self.offsets.sort_unstable();
        let xref_offset = self.bytes.len();

        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", object_count + 1);
        for (_, offset) in &self.offsets {
            let _ = write!(xref, "{:010} 00000 n \n", offset);
        }
        let _ = write!(
            xref,
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            object_count + 1,
            CATALOG_ID,
            INFO_ID,
            xref_offset
        );
        self.raw(xref.as_bytes());
        self.bytes
    }
}
