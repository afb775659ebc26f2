use crate::measure::TextMeasurer;
use crate::options::LastLinePolicy;
use crate::units::Pt;

use super::words::{measure_words, natural_width, Word};

/// How an inner line came out of the line breaker, which decides whether it
/// may be stretched
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Wrap {
    /// The whole explicit line fit within the width (or was empty)
    Unwrapped,
    /// Closed by the greedy packer because the next word did not fit
    Broken,
    /// Whatever was left of a wrapped explicit line
    Remainder,
}

/// Words of an explicit line that are drawn on a single row
#[derive(Debug, Clone, PartialEq)]
pub struct InnerLine<'a> {
    pub words: Vec<Word<'a>>,
    pub wrap: Wrap,
    /// Index of the explicit line this row belongs to
    pub group: usize,
}

impl InnerLine<'_> {
    /// Whether the line may be stretched to the full width under `policy`.
    /// Lines with fewer than two words are never eligible.
    pub fn is_eligible(&self, policy: LastLinePolicy) -> bool {
        if self.words.len() < 2 {
            return false;
        }
        match (self.wrap, policy) {
            (Wrap::Broken, _) => true,
            (_, LastLinePolicy::NeverJustify) => false,
            (_, LastLinePolicy::AlwaysJustify) => true,
            (Wrap::Remainder, LastLinePolicy::JustifyIfWrapped) => true,
            (Wrap::Unwrapped, LastLinePolicy::JustifyIfWrapped) => false,
        }
    }

    /// Sum of the word widths, without any spacing
    pub fn words_width(&self) -> Pt {
        self.words.iter().map(|w| w.width).sum()
    }

    /// Whether the line is a lone word wider than `available_width`
    pub fn is_overflowing(&self, available_width: Pt) -> bool {
        self.words.len() == 1 && self.words[0].width > available_width
    }
}

/// The inner lines produced from one explicit line of the label
#[derive(Debug, Clone, PartialEq)]
pub struct LineGroup<'a> {
    /// Index of the explicit line within the label
    pub index: usize,
    pub lines: Vec<InnerLine<'a>>,
}

impl LineGroup<'_> {
    /// Whether the explicit line had to be broken over several rows
    pub fn is_wrapped(&self) -> bool {
        self.lines.len() > 1
    }
}

/// Breaks the label into rows that fit `available_width` at regular spacing.
///
/// Every explicit line (separated by `\n`) becomes one [LineGroup]. A line
/// that fits as a whole stays a single [Wrap::Unwrapped] row; otherwise words
/// are packed greedily left to right. A word is never moved back once its row
/// is closed, and a single word wider than the width gets a row of its own and
/// is left to overflow.
///
/// An empty label produces no groups at all. An empty explicit line produces
/// one row without words.
pub fn break_lines<'a, M: TextMeasurer>(
    label: &'a str,
    measurer: &M,
    available_width: Pt,
) -> Vec<LineGroup<'a>> {
    if label.is_empty() {
        return Vec::default();
    }

    let space_width = measurer.space_width();
    label
        .split('\n')
        .enumerate()
        .map(|(index, line)| LineGroup {
            index,
            lines: break_line(
                measure_words(line, measurer),
                index,
                space_width,
                available_width,
            ),
        })
        .collect()
}

fn break_line<'a>(
    words: Vec<Word<'a>>,
    group: usize,
    space_width: Pt,
    available_width: Pt,
) -> Vec<InnerLine<'a>> {
    if words.is_empty() || natural_width(&words, space_width) <= available_width {
        log::trace!(
            "line {group}: {} words fit without wrapping",
            words.len()
        );
        return vec![InnerLine {
            words,
            wrap: Wrap::Unwrapped,
            group,
        }];
    }

    let mut lines: Vec<InnerLine> = Vec::default();
    let mut current: Vec<Word> = Vec::default();
    let mut current_width = Pt::ZERO;
    for word in words {
        if current.is_empty() {
            current_width = word.width;
            current.push(word);
            continue;
        }

        let extended = current_width + space_width + word.width;
        if extended <= available_width {
            current_width = extended;
            current.push(word);
        } else {
            log::trace!(
                "line {group}: closing row of {} words at {current_width}",
                current.len()
            );
            current_width = word.width;
            lines.push(InnerLine {
                words: std::mem::replace(&mut current, vec![word]),
                wrap: Wrap::Broken,
                group,
            });
        }
    }

    lines.push(InnerLine {
        words: current,
        wrap: Wrap::Remainder,
        group,
    });
    lines
}
