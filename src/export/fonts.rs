//! Standard PDF base fonts and their glyph metrics.
//!
//! Only the Helvetica family is used. Widths are the Adobe AFM advance
//! widths in thousandths of a point per point of font size; the oblique face
//! shares the regular widths.

/// A base-14 font the exporter draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl Font {
    /// All fonts, in the order they are declared as page resources.
    pub const ALL: [Font; 3] = [Font::Helvetica, Font::HelveticaBold, Font::HelveticaOblique];

    /// The PostScript name written into the document.
    pub fn base_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Resource name used inside content streams.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::HelveticaOblique => "F3",
        }
    }

    /// Rendered width of `text` at `size` points.
    pub fn string_width(&self, text: &str, size: f64) -> f64 {
        let units: u32 = text.chars().map(|c| self.glyph_width(c)).sum();
        f64::from(units) * size / 1000.0
    }

    fn glyph_width(&self, c: char) -> u32 {
        let table = match self {
            Font::Helvetica | Font::HelveticaOblique => &HELVETICA_WIDTHS,
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        if matches!(c, ' '..='~') {
            return table[c as usize - 32];
        }
        WINANSI_EXTRAS
            .iter()
            .find(|glyph| glyph.0 == c)
            .map(|&(_, _, regular, bold)| match self {
                Font::HelveticaBold => bold,
                _ => regular,
            })
            .unwrap_or(DEFAULT_WIDTH)
    }
}

/// The WinAnsiEncoding byte for `c`, if the encoding can represent it.
///
/// Printable ASCII and Latin-1 map to themselves; the typographic
/// punctuation, currency and accented letters in 0x80..=0x9F come from
/// `WINANSI_EXTRAS`.
pub fn winansi_code(c: char) -> Option<u8> {
    match c {
        ' '..='~' | '\u{a0}'..='\u{ff}' => u8::try_from(u32::from(c)).ok(),
        _ => WINANSI_EXTRAS
            .iter()
            .find(|glyph| glyph.0 == c)
            .map(|glyph| glyph.1),
    }
}

/// Width assumed for characters outside printable ASCII.
const DEFAULT_WIDTH: u32 = 556;

/// WinAnsi characters outside Latin-1: character, code, Helvetica width,
/// Helvetica-Bold width.
#[rustfmt::skip]
const WINANSI_EXTRAS: [(char, u8, u32, u32); 27] = [
    ('\u{20ac}', 0x80, 556, 556),   // euro
    ('\u{201a}', 0x82, 222, 278),   // quotesinglbase
    ('\u{0192}', 0x83, 556, 556),   // florin
    ('\u{201e}', 0x84, 333, 500),   // quotedblbase
    ('\u{2026}', 0x85, 1000, 1000), // ellipsis
    ('\u{2020}', 0x86, 556, 556),   // dagger
    ('\u{2021}', 0x87, 556, 556),   // daggerdbl
    ('\u{02c6}', 0x88, 333, 333),   // circumflex
    ('\u{2030}', 0x89, 1000, 1000), // perthousand
    ('\u{0160}', 0x8a, 667, 667),   // Scaron
    ('\u{2039}', 0x8b, 333, 333),   // guilsinglleft
    ('\u{0152}', 0x8c, 1000, 1000), // OE
    ('\u{017d}', 0x8e, 611, 611),   // Zcaron
    ('\u{2018}', 0x91, 222, 278),   // quoteleft
    ('\u{2019}', 0x92, 222, 278),   // quoteright
    ('\u{201c}', 0x93, 333, 500),   // quotedblleft
    ('\u{201d}', 0x94, 333, 500),   // quotedblright
    ('\u{2022}', 0x95, 350, 350),   // bullet
    ('\u{2013}', 0x96, 556, 556),   // endash
    ('\u{2014}', 0x97, 1000, 1000), // emdash
    ('\u{02dc}', 0x98, 333, 333),   // tilde
    ('\u{2122}', 0x99, 1000, 1000), // trademark
    ('\u{0161}', 0x9a, 500, 556),   // scaron
    ('\u{203a}', 0x9b, 333, 333),   // guilsinglright
    ('\u{0153}', 0x9c, 944, 944),   // oe
    ('\u{017e}', 0x9e, 500, 500),   // zcaron
    ('\u{0178}', 0x9f, 667, 667),   // Ydieresis
];

/// Helvetica widths for code points 32 (space) through 126 (`~`).
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u32; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' .. '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0' .. '?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@' .. 'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P' .. '_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`' .. 'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p' .. '~'
];

/// Helvetica-Bold widths for code points 32 (space) through 126 (`~`).
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u32; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' .. '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0' .. '?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@' .. 'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P' .. '_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`' .. 'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,      // 'p' .. '~'
];
