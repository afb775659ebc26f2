#![allow(dead_code)]

use justified_text::{Pt, TextMeasurer};

/// Widths that vary per character and are not whole numbers, so positions
/// accumulate real floating-point error
pub struct Proportional {
    pub space: Pt,
}

impl TextMeasurer for Proportional {
    fn text_width(&self, text: &str) -> Pt {
        text.chars()
            .map(|ch| {
                if ch == ' ' {
                    self.space
                } else {
                    Pt((u32::from(ch) % 7 + 3) as f32 * 0.37)
                }
            })
            .sum()
    }

    fn line_height(&self) -> Pt {
        Pt(11.5)
    }
}

pub fn close(a: Pt, b: Pt, tolerance: f32) -> bool {
    (a.0 - b.0).abs() <= tolerance * b.0.abs().max(1.0)
}
