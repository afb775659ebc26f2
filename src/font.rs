use crate::{measure::TextMeasurer, units::Pt, JustifyError};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed TTF or OTF font, used to measure words for layout and to encode
/// them as glyph ids when painting into a PDF with an embedded CID font.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, JustifyError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    /// The glyph the font maps `ch` to, if any
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph of U+FFFD REPLACEMENT CHARACTER, if the font has one
    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// The glyph drawn for `ch`: its own glyph, else the replacement character, else `?`.
    /// Characters the font cannot show at all map to glyph 0 (`.notdef`).
    pub fn glyph_id_or_replacement(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .or_else(|| self.replacement_glyph_id())
            .or_else(|| self.glyph_id('?'))
            .unwrap_or_default()
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        text.chars()
            .map(|ch| self.glyph_id_or_replacement(ch))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }

    /// Bind the font to a size so it can drive a layout pass
    pub fn at_size(&self, size: Pt) -> SizedFont<'_> {
        SizedFont { font: self, size }
    }
}

/// A [Font] at a particular size, measuring text with the horizontal advances
/// of its glyphs
#[derive(Copy, Clone)]
pub struct SizedFont<'f> {
    pub font: &'f Font,
    pub size: Pt,
}

impl TextMeasurer for SizedFont<'_> {
    fn text_width(&self, text: &str) -> Pt {
        self.font.width_of_text(text, self.size)
    }

    fn line_height(&self) -> Pt {
        self.font.line_height(self.size)
    }
}
