use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum JustifyError {
    #[error("available width must be finite, got {0}")]
    /// The drawing width handed to a layout pass was NaN or infinite
    InvalidWidth(f32),

    #[error("line spacing factor must be finite and greater than zero, got {0}")]
    /// The line spacing factor would collapse or invert the line stack
    InvalidLineSpacing(f32),

    #[error("maximum gap multiple must be a number, got {0}")]
    /// The maximum gap multiple was NaN
    InvalidMaxGap(f32),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),
}
