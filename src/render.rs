//! Painting a [TextLayout] into a PDF content stream.

use crate::font::Font;
use crate::layout::TextLayout;
use crate::units::Pt;
use pdf_writer::{Content, Name, Str};

/// How word text is turned into the bytes of a PDF string
#[derive(Copy, Clone)]
pub enum TextEncoding<'f> {
    /// One byte per character, for the standard Type1 fonts with WinAnsi
    /// encoding. Characters beyond U+00FF are drawn as `?`.
    Latin1,
    /// Two-byte glyph ids of an embedded CID font with `Identity-H` encoding
    Identity(&'f Font),
}

impl TextEncoding<'_> {
    /// The bytes of `text` in this encoding
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Latin1 => text
                .chars()
                .map(|ch| u8::try_from(u32::from(ch)).unwrap_or(b'?'))
                .collect(),
            TextEncoding::Identity(font) => text
                .chars()
                .flat_map(|ch| font.glyph_id_or_replacement(ch).to_be_bytes())
                .collect(),
        }
    }
}

/// The font a layout is painted with
#[derive(Copy, Clone)]
pub struct PdfFont<'a> {
    /// Name of the font in the page's resource dictionary, e.g. `F1`
    pub resource: Name<'a>,
    /// Font size, in points
    pub size: Pt,
    /// Distance from the top of a row down to its baseline
    pub ascent: Pt,
    pub encoding: TextEncoding<'a>,
}

/// Writes every word of `layout` as a positioned text run.
///
/// Layout coordinates grow downwards from the top-left corner; PDF coordinates
/// grow upwards. `origin` is the PDF position of the layout's top-left corner,
/// typically the top-left of a page's content box.
pub fn write_layout(
    content: &mut Content,
    layout: &TextLayout,
    origin: (Pt, Pt),
    font: &PdfFont,
) {
    if layout.words.is_empty() {
        return;
    }

    content.save_state();
    content.begin_text();
    content.set_font(font.resource, font.size.0);
    for word in layout.words.iter() {
        let x = origin.0 + word.coords.0;
        let y = origin.1 - word.coords.1 - font.ascent;
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x.0, y.0]);
        content.show(Str(&font.encoding.encode(&word.text)));
    }
    content.end_text();
    content.restore_state();
}
