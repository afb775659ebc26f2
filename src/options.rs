use crate::JustifyError;

/// What to do with the final inner line of each explicit line of the label
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LastLinePolicy {
    /// Always draw the last line at regular spacing
    NeverJustify,
    /// Justify the last line too, even when the explicit line never wrapped
    AlwaysJustify,
    /// Justify the last line only if its explicit line had to be wrapped
    #[default]
    JustifyIfWrapped,
}

/// Settings for a layout pass. The available width and the font metrics are
/// supplied separately with every pass, since they change with the widget.
///
/// Options are built up with chained setters that validate as they go:
///
/// ```
/// use justified_text::{JustifyOptions, LastLinePolicy};
///
/// let mut options = JustifyOptions::new();
/// options
///     .max_gap_multiple(1.6)?
///     .line_spacing(1.25)?
///     .last_line(LastLinePolicy::NeverJustify);
/// assert_eq!(options.max_gap_multiple, 1.6);
/// # Ok::<(), justified_text::JustifyError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JustifyOptions {
    /// Ceiling on a stretched gap, as a multiple of the regular space width. Always >= 1.
    pub max_gap_multiple: f32,
    /// Multiplies the font's line height to give the distance between lines. Always > 0.
    pub line_spacing: f32,
    pub last_line: LastLinePolicy,
    /// Glue a space following `: " ' ; « »` to the preceding token so the two never
    /// end up on different lines
    pub non_breaking_spaces: bool,
}

impl Default for JustifyOptions {
    fn default() -> Self {
        JustifyOptions {
            max_gap_multiple: f32::INFINITY,
            line_spacing: 1.0,
            last_line: LastLinePolicy::default(),
            non_breaking_spaces: true,
        }
    }
}

impl JustifyOptions {
    /// Create options with an unbounded gap, single line spacing, and the
    /// last line justified only when wrapped
    pub fn new() -> JustifyOptions {
        JustifyOptions::default()
    }

    /// Set the maximum stretched gap as a multiple of the regular space width.
    /// Values below 1 would compress rather than justify and are raised to 1.
    pub fn max_gap_multiple(&mut self, multiple: f32) -> Result<&mut Self, JustifyError> {
        if multiple.is_nan() {
            return Err(JustifyError::InvalidMaxGap(multiple));
        }
        if multiple < 1.0 {
            log::warn!("maximum gap multiple {multiple} is below 1, clamping to 1");
        }
        self.max_gap_multiple = multiple.max(1.0);
        Ok(self)
    }

    /// Set the factor applied to the font's line height between consecutive lines
    pub fn line_spacing(&mut self, factor: f32) -> Result<&mut Self, JustifyError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(JustifyError::InvalidLineSpacing(factor));
        }
        self.line_spacing = factor;
        Ok(self)
    }

    /// Set when the last row of an explicit line is stretched
    pub fn last_line(&mut self, policy: LastLinePolicy) -> &mut Self {
        self.last_line = policy;
        self
    }

    /// Enable or disable gluing the space after `: " ' ; « »` to its word
    pub fn non_breaking_spaces(&mut self, enabled: bool) -> &mut Self {
        self.non_breaking_spaces = enabled;
        self
    }

    /// Check options whose fields were assigned directly rather than through
    /// the setters
    pub fn validate(&self) -> Result<(), JustifyError> {
        if self.max_gap_multiple.is_nan() || self.max_gap_multiple < 1.0 {
            return Err(JustifyError::InvalidMaxGap(self.max_gap_multiple));
        }
        if !self.line_spacing.is_finite() || self.line_spacing <= 0.0 {
            return Err(JustifyError::InvalidLineSpacing(self.line_spacing));
        }
        Ok(())
    }
}
