use crate::layout::{layout_justified, TextLayout};
use crate::measure::TextMeasurer;
use crate::options::JustifyOptions;
use crate::units::Pt;
use crate::JustifyError;

/// Font metrics a cached layout was computed with
#[derive(Copy, Clone, PartialEq, Debug)]
struct MetricsKey {
    space_width: Pt,
    line_height: Pt,
}

/// A paragraph of justified text that remembers its last layout.
///
/// This is the state a text widget keeps between repaints: the label, the
/// options and the current width. Changing any of them drops the cached
/// layout, and the next call to [JustifiedParagraph::layout] recomputes it.
/// A font change is noticed when the measurer reports a different space width
/// or line height; anything subtler must be signalled with
/// [JustifiedParagraph::font_changed].
#[derive(Debug, Clone)]
pub struct JustifiedParagraph {
    label: String,
    width: Pt,
    options: JustifyOptions,
    cached: Option<(MetricsKey, TextLayout)>,
}

impl JustifiedParagraph {
    /// Create a paragraph with nothing cached, rejecting invalid options
    pub fn new<S: ToString>(
        label: S,
        width: Pt,
        options: JustifyOptions,
    ) -> Result<Self, JustifyError> {
        options.validate()?;
        Ok(JustifiedParagraph {
            label: label.to_string(),
            width,
            options,
            cached: None,
        })
    }

    /// The text being laid out
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The width rows are justified to
    pub fn width(&self) -> Pt {
        self.width
    }

    /// The options used for every pass
    pub fn options(&self) -> &JustifyOptions {
        &self.options
    }

    /// Replace the text, dropping the cached layout if it differs
    pub fn set_label<S: ToString>(&mut self, label: S) {
        let label = label.to_string();
        if label != self.label {
            self.label = label;
            self.cached = None;
        }
    }

    /// Change the width, dropping the cached layout if it differs
    pub fn set_width(&mut self, width: Pt) {
        if width != self.width {
            self.width = width;
            self.cached = None;
        }
    }

    /// Replace the options after validating them, dropping the cached layout
    /// if they differ. Invalid options leave the paragraph unchanged.
    pub fn set_options(&mut self, options: JustifyOptions) -> Result<(), JustifyError> {
        options.validate()?;
        if options != self.options {
            self.options = options;
            self.cached = None;
        }
        Ok(())
    }

    /// Drop the cached layout after the font changed in a way the measurer's
    /// space width and line height don't reveal
    pub fn font_changed(&mut self) {
        self.cached = None;
    }

    /// Whether the next call to [JustifiedParagraph::layout] will reuse a cached result
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// The layout for the current label, width and options, computed with
    /// `measurer` if nothing usable is cached
    pub fn layout<M: TextMeasurer>(&mut self, measurer: &M) -> Result<&TextLayout, JustifyError> {
        let key = MetricsKey {
            space_width: measurer.space_width(),
            line_height: measurer.line_height(),
        };
        let layout = match self.cached.take() {
            Some((cached_key, layout)) if cached_key == key => {
                log::trace!("reusing cached layout");
                layout
            }
            _ => layout_justified(&self.label, self.width, measurer, &self.options)?,
        };
        Ok(&self.cached.insert((key, layout)).1)
    }

    /// Height the paragraph needs at its current width, for size negotiation
    pub fn preferred_height<M: TextMeasurer>(&mut self, measurer: &M) -> Result<Pt, JustifyError> {
        Ok(self.layout(measurer)?.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::Monospace;
    use crate::options::LastLinePolicy;
    use std::cell::Cell;

    /// Counts how often words are measured, to tell cached passes apart
    struct Counting {
        inner: Monospace,
        calls: Cell<usize>,
    }

    impl Counting {
        fn new(advance: f32) -> Counting {
            Counting {
                inner: Monospace::new(Pt(advance), Pt(12.0)),
                calls: Cell::new(0),
            }
        }
    }

    impl TextMeasurer for Counting {
        fn text_width(&self, text: &str) -> Pt {
            self.calls.set(self.calls.get() + 1);
            self.inner.text_width(text)
        }

        fn line_height(&self) -> Pt {
            self.inner.line_height()
        }
    }

    fn paragraph() -> JustifiedParagraph {
        JustifiedParagraph::new("aa bb cc dd", Pt(35.0), JustifyOptions::default())
            .expect("valid options")
    }

    #[test]
    fn repeated_layout_is_served_from_cache() {
        let measurer = Counting::new(5.0);
        let mut p = paragraph();
        assert!(!p.is_cached());
        assert_eq!(p.layout(&measurer).expect("layout").lines.len(), 2);
        let calls = measurer.calls.get();
        assert!(p.is_cached());
        p.layout(&measurer).expect("layout");
        // only the metrics key is measured again
        assert_eq!(measurer.calls.get(), calls + 1);
    }

    #[test]
    fn changes_invalidate_the_cache() {
        let measurer = Counting::new(5.0);
        let mut p = paragraph();
        p.layout(&measurer).expect("layout");

        p.set_width(Pt(35.0));
        assert!(p.is_cached());
        p.set_width(Pt(100.0));
        assert!(!p.is_cached());
        assert_eq!(p.layout(&measurer).expect("layout").lines.len(), 1);

        p.set_label("aa bb cc dd");
        assert!(p.is_cached());
        p.set_label("aa");
        assert!(!p.is_cached());
        p.layout(&measurer).expect("layout");

        let mut options = JustifyOptions::default();
        options.last_line(LastLinePolicy::NeverJustify);
        p.set_options(options).expect("valid options");
        assert!(!p.is_cached());
        p.layout(&measurer).expect("layout");

        p.font_changed();
        assert!(!p.is_cached());
    }

    #[test]
    fn different_metrics_trigger_a_new_pass() {
        let mut p = paragraph();
        let narrow = p.layout(&Counting::new(5.0)).expect("layout").clone();
        let wide = p.layout(&Counting::new(10.0)).expect("layout").clone();
        assert_ne!(narrow, wide);
        assert_eq!(wide.lines.len(), 4);
    }

    #[test]
    fn preferred_height_tracks_the_row_count() {
        let measurer = Monospace::new(Pt(5.0), Pt(12.0));
        let mut p = paragraph();
        assert_eq!(p.preferred_height(&measurer).expect("height"), Pt(24.0));
        p.set_width(Pt(200.0));
        assert_eq!(p.preferred_height(&measurer).expect("height"), Pt(12.0));
    }

    #[test]
    fn invalid_options_are_rejected_and_not_applied() {
        let mut p = paragraph();
        let mut options = JustifyOptions::default();
        options.line_spacing = 0.0;
        assert!(p.set_options(options).is_err());
        assert_eq!(p.options().line_spacing, 1.0);
        assert!(JustifiedParagraph::new("x", Pt(1.0), options).is_err());
    }
}
