use crate::units::Pt;

/// Supplies the font metrics a layout pass needs. The layout engine never
/// talks to a font system directly; anything that can report how wide a
/// string renders can drive it.
///
/// Implementations must be deterministic for the duration of a pass: the same
/// string always measures the same width.
pub trait TextMeasurer {
    /// Rendered width of `text` in the current font
    fn text_width(&self, text: &str) -> Pt;

    /// Width of a regular (unstretched) space. Used both to test whether words
    /// fit on a line and as the floor of a justified gap.
    fn space_width(&self) -> Pt {
        self.text_width(" ")
    }

    /// How far apart two consecutive lines sit before the line spacing factor
    /// is applied
    fn line_height(&self) -> Pt;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn text_width(&self, text: &str) -> Pt {
        (**self).text_width(text)
    }

    fn space_width(&self) -> Pt {
        (**self).space_width()
    }

    fn line_height(&self) -> Pt {
        (**self).line_height()
    }
}

/// A measurer where every character has the same advance, such as terminal
/// cells or the PDF base-14 Courier faces (600 units per 1000 em).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Monospace {
    pub advance: Pt,
    pub line_height: Pt,
}

impl Monospace {
    /// Measure every character as `advance` wide
    pub fn new(advance: Pt, line_height: Pt) -> Monospace {
        Monospace {
            advance,
            line_height,
        }
    }

    /// Metrics of the standard Courier font at the given size
    pub fn courier(size: Pt) -> Monospace {
        Monospace {
            advance: size * 0.6,
            line_height: size * 1.2,
        }
    }
}

impl TextMeasurer for Monospace {
    fn text_width(&self, text: &str) -> Pt {
        self.advance * text.chars().count() as f32
    }

    fn line_height(&self) -> Pt {
        self.line_height
    }
}
