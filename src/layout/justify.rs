use crate::options::JustifyOptions;
use crate::units::Pt;

use super::breaker::InnerLine;
use super::words::Word;

/// An inner line with its inter-word gap resolved
#[derive(Debug, Clone, PartialEq)]
pub struct JustifiedLine<'a> {
    pub line: InnerLine<'a>,
    /// Distance between the end of one word and the start of the next
    pub gap: Pt,
    /// `true` when the gap was stretched so the last word ends exactly on the
    /// right edge. Lines drawn at regular spacing, and lines whose gap hit the
    /// maximum, are left-aligned and report `false`.
    pub justified: bool,
}

impl<'a> JustifiedLine<'a> {
    /// Each word with its horizontal offset from the left edge
    pub fn positions(&self) -> impl Iterator<Item = (&Word<'a>, Pt)> + '_ {
        let gap = self.gap;
        self.line.words.iter().scan(Pt::ZERO, move |x, word| {
            let at = *x;
            *x += word.width + gap;
            Some((word, at))
        })
    }

    /// Horizontal extent of the drawn words, from the left edge of the first
    /// to the right edge of the last
    pub fn extent(&self) -> Pt {
        self.positions()
            .last()
            .map(|(word, x)| x + word.width)
            .unwrap_or_default()
    }
}

/// The widest gap allowed, or `None` when unbounded
fn max_gap(space_width: Pt, options: &JustifyOptions) -> Option<Pt> {
    options
        .max_gap_multiple
        .is_finite()
        .then_some(space_width * options.max_gap_multiple)
}

/// Resolves the gap for one inner line.
///
/// Lines that are not eligible under the last-line policy (see
/// [InnerLine::is_eligible]) keep the regular space width. Eligible lines
/// get a single gap that spreads the leftover width evenly between words; if
/// that gap exceeds the configured maximum it is clamped and the line stays
/// left-aligned rather than reaching the right edge.
pub fn justify_line<'a>(
    line: InnerLine<'a>,
    space_width: Pt,
    available_width: Pt,
    options: &JustifyOptions,
) -> JustifiedLine<'a> {
    if !line.is_eligible(options.last_line) {
        return JustifiedLine {
            line,
            gap: space_width,
            justified: false,
        };
    }

    // eligible lines have at least two words
    let gaps = (line.words.len() - 1) as f32;
    let needed = (available_width - line.words_width()) / gaps;

    match max_gap(space_width, options) {
        Some(max) if needed > max => {
            log::trace!(
                "line {}: gap {needed} exceeds maximum {max}, clamping",
                line.group
            );
            JustifiedLine {
                line,
                gap: max,
                justified: false,
            }
        }
        _ => JustifiedLine {
            line,
            gap: needed,
            justified: true,
        },
    }
}
