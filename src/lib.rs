mod error;
pub use error::*;

mod font;
pub use font::*;

/// Greedy line breaking, justification and positioning of words
pub mod layout;

mod measure;
pub use measure::*;

mod options;
pub use options::*;

mod paragraph;
pub use paragraph::*;

/// Output of laid out text into PDF content streams
pub mod render;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
