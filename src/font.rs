use crate::{
    refs::{ObjectReferences, RefType},
    Pt,
};
use pdf_writer::{Name, Pdf};

/// One of the standard PDF base fonts. These are never embedded: every
/// conforming reader ships them, which keeps a chart a few kilobytes in size.
/// Text is encoded with `WinAnsiEncoding`, so Latin-1 plus a handful of
/// typographic marks (dashes, curly quotes, bullets, µ, ±, °) are available;
/// anything else is rendered as `?`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

// advance widths (1/1000 em) for the printable ASCII range 32..=126, taken
// from the Adobe core font metrics
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

const ASCENDER: f32 = 718.0;
const DESCENDER: f32 = -207.0;

impl Font {
    /// Every font a document may reference; all of them are registered in each page's
    /// resources
    pub const ALL: [Font; 3] = [Font::Helvetica, Font::HelveticaBold, Font::HelveticaOblique];

    /// Position of the font within [Font::ALL], used for resource naming
    pub fn index(self) -> usize {
        match self {
            Font::Helvetica => 0,
            Font::HelveticaBold => 1,
            Font::HelveticaOblique => 2,
        }
    }

    /// The PostScript name of the base font
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Distance from the baseline to the top of the tallest glyphs at the given size
    pub fn ascent(self, size: Pt) -> Pt {
        size * (ASCENDER / 1000.0)
    }

    /// Distance from the baseline to the bottom of descending glyphs (negative)
    pub fn descent(self, size: Pt) -> Pt {
        size * (DESCENDER / 1000.0)
    }

    /// Advance width of a single character in thousandths of an em
    pub fn glyph_width(self, ch: char) -> u16 {
        let bold = self == Font::HelveticaBold;
        match ch {
            ' '..='~' => {
                let i = ch as usize - 32;
                if bold {
                    HELVETICA_BOLD_WIDTHS[i]
                } else {
                    HELVETICA_WIDTHS[i]
                }
            }
            '\u{a0}' => 278,
            '°' => 400,
            '±' | '×' | '÷' | '¬' => 584,
            '²' | '³' | '¹' => 333,
            'µ' => {
                if bold {
                    611
                } else {
                    556
                }
            }
            '‘' | '’' | '‚' => {
                if bold {
                    278
                } else {
                    222
                }
            }
            '“' | '”' | '„' => {
                if bold {
                    500
                } else {
                    333
                }
            }
            '•' => 350,
            '–' => 556,
            '—' | '…' | '‰' => 1000,
            '™' => 1000,
            _ => 556,
        }
    }

    /// Calculate the width of a string of text at the given font size. Newlines are
    /// not interpreted; wrap first and measure each line.
    pub fn width_of(self, text: &str, size: Pt) -> Pt {
        let units: u32 = text.chars().map(|ch| self.glyph_width(ch) as u32).sum();
        size * (units as f32 / 1000.0)
    }

    /// Encode text into the single-byte `WinAnsiEncoding` used by the font dictionary
    pub fn encode(self, text: &str) -> Vec<u8> {
        text.chars().map(win_ansi_byte).collect()
    }

    pub(crate) fn write(self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(self.index()));
        writer
            .type1_font(id)
            .base_font(Name(self.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‰' => 0x89,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => b'?',
    }
}
