use std::ops::Range;

use crate::units::Pt;

use super::justify::JustifiedLine;

/// A word ready to be drawn. Coordinates are relative to the top-left corner
/// of the drawing area, with `y` growing downwards to the top of the line.
#[derive(Clone, PartialEq, Debug)]
pub struct PlacedWord {
    pub text: String,
    pub coords: (Pt, Pt),
    pub width: Pt,
}

/// One drawn row of the layout
#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    /// Top of the row
    pub y: Pt,
    pub gap: Pt,
    pub justified: bool,
    /// The words of this row, as a range into [TextLayout::words]
    pub words: Range<usize>,
    /// Index of the explicit line of the label this row came from
    pub group: usize,
}

/// The result of a layout pass: every word with its position, plus the rows
/// they were placed on
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TextLayout {
    pub words: Vec<PlacedWord>,
    pub lines: Vec<LineLayout>,
    /// Total height of the content, i.e. the vertical space the text wants
    pub height: Pt,
}

impl TextLayout {
    /// Whether the layout has no rows at all
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The placed words of one row
    pub fn line_words(&self, line: &LineLayout) -> &[PlacedWord] {
        &self.words[line.words.clone()]
    }

    /// Rightmost edge reached by any word. May exceed the available width
    /// when a single word overflows.
    pub fn content_width(&self) -> Pt {
        self.words
            .iter()
            .map(|w| w.coords.0 + w.width)
            .fold(Pt::ZERO, Pt::max)
    }
}

/// Stacks justified lines from the top, advancing by `line_height *
/// line_spacing` after every line (blank ones included), and places each word
/// at its offset within its line.
pub fn assemble<'a, I>(lines: I, line_height: Pt, line_spacing: f32) -> TextLayout
where
    I: IntoIterator<Item = JustifiedLine<'a>>,
{
    let advance = line_height * line_spacing;
    let mut layout = TextLayout::default();
    let mut y = Pt::ZERO;

    for line in lines {
        let first = layout.words.len();
        layout
            .words
            .extend(line.positions().map(|(word, x)| PlacedWord {
                text: word.text.to_string(),
                coords: (x, y),
                width: word.width,
            }));
        layout.lines.push(LineLayout {
            y,
            gap: line.gap,
            justified: line.justified,
            words: first..layout.words.len(),
            group: line.line.group,
        });
        y += advance;
    }

    layout.height = y;
    layout
}
