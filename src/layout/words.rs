use std::borrow::Cow;

use crate::measure::TextMeasurer;
use crate::options::JustifyOptions;
use crate::units::Pt;

pub const NON_BREAKING_SPACE: char = '\u{00A0}';

/// Punctuation that keeps the word after it on the same line when
/// non-breaking spaces are enabled
const GLUE_AFTER: [char; 6] = [':', '"', '\'', ';', '«', '»'];

/// A run of non-separator characters, measured once per layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub width: Pt,
    /// Position of the word within its explicit line
    pub index: usize,
}

/// Whitespace that words may be split on. No-break spaces render as spaces but
/// are part of the word they sit in.
pub fn is_breaking_whitespace(ch: char) -> bool {
    ch.is_whitespace() && !matches!(ch, NON_BREAKING_SPACE | '\u{2007}' | '\u{202F}')
}

/// Normalizes newlines and, if enabled, turns the space following any of
/// `: " ' ; « »` into a no-break space. Returns the label untouched when
/// there is nothing to rewrite.
pub fn prepare_label<'a>(label: &'a str, options: &JustifyOptions) -> Cow<'a, str> {
    let glue = options.non_breaking_spaces
        && label
            .chars()
            .zip(label.chars().skip(1))
            .any(|(a, b)| GLUE_AFTER.contains(&a) && b == ' ');
    if !glue && !label.contains('\r') {
        return Cow::Borrowed(label);
    }

    // normalize newlines
    let label = label.replace("\r\n", "\n").replace('\r', "\n");
    if !glue {
        return Cow::Owned(label);
    }

    let mut prepared = String::with_capacity(label.len());
    let mut previous: Option<char> = None;
    for ch in label.chars() {
        if ch == ' ' && previous.is_some_and(|p| GLUE_AFTER.contains(&p)) {
            prepared.push(NON_BREAKING_SPACE);
        } else {
            prepared.push(ch);
        }
        previous = Some(ch);
    }
    Cow::Owned(prepared)
}

/// Splits one explicit line into measured words
pub fn measure_words<'a, M: TextMeasurer>(line: &'a str, measurer: &M) -> Vec<Word<'a>> {
    line.split(is_breaking_whitespace)
        .filter(|w| !w.is_empty())
        .enumerate()
        .map(|(index, text)| Word {
            text,
            width: measurer.text_width(text),
            index,
        })
        .collect()
}

/// Width of the words laid end to end with `gap` between each pair.
///
/// Accumulated left to right, in the same order the line breaker adds words,
/// so a line that fits as a whole also fits when packed word by word.
pub fn natural_width(words: &[Word<'_>], gap: Pt) -> Pt {
    let mut words = words.iter();
    let Some(first) = words.next() else {
        return Pt::ZERO;
    };
    words.fold(first.width, |width, word| width + gap + word.width)
}
