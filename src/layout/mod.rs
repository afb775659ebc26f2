//! Greedy double-justification of a paragraph.
//!
//! A layout pass runs in three steps, each usable on its own:
//!
//! - [`break_lines`] splits the label on explicit newlines and greedily packs
//!   the words of each line into rows that fit the available width at regular
//!   spacing
//! - [`justify_line`] resolves a single inter-word gap per row, stretching it
//!   so the row reaches the right edge (up to the configured maximum)
//! - [`assemble`] stacks the rows vertically and positions every word
//!
//! [`layout_justified`] chains them together.
//!
//! Rows are never revisited: once a row is closed, its words and gap are final
//! even if moving a word would balance the following rows better.
//!
//! # Example
//!
//! ```
//! use justified_text::{JustifyOptions, Monospace, Pt};
//! use justified_text::layout::layout_justified;
//!
//! let measurer = Monospace::new(Pt(5.0), Pt(12.0));
//! let layout = layout_justified("aa bb cc dd", Pt(35.0), &measurer, &JustifyOptions::default())
//!     .expect("valid width");
//!
//! assert_eq!(layout.lines.len(), 2);
//! assert_eq!(layout.lines[0].gap, Pt(15.0));
//! assert_eq!(layout.words[1].coords, (Pt(25.0), Pt(0.0)));
//! ```

mod assemble;
mod breaker;
mod justify;
mod words;

pub use assemble::*;
pub use breaker::*;
pub use justify::*;
pub use words::*;

use crate::measure::TextMeasurer;
use crate::options::JustifyOptions;
use crate::units::Pt;
use crate::JustifyError;

/// Lays out `label` within `available_width`, returning every word with its
/// position and the total height of the text.
///
/// A width of zero or less is accepted and simply puts every word on its own
/// row. Errors are only returned for a non-finite width or invalid options.
pub fn layout_justified<M: TextMeasurer>(
    label: &str,
    available_width: Pt,
    measurer: &M,
    options: &JustifyOptions,
) -> Result<TextLayout, JustifyError> {
    if !available_width.is_finite() {
        return Err(JustifyError::InvalidWidth(available_width.0));
    }
    options.validate()?;

    let label = prepare_label(label, options);
    let space_width = measurer.space_width();

    let groups = break_lines(&label, measurer, available_width);
    let lines = groups
        .into_iter()
        .flat_map(|group| group.lines)
        .map(|line| justify_line(line, space_width, available_width, options));
    let layout = assemble(lines, measurer.line_height(), options.line_spacing);

    log::debug!(
        "laid out {} words on {} rows within {available_width}, height {}",
        layout.words.len(),
        layout.lines.len(),
        layout.height
    );
    Ok(layout)
}
