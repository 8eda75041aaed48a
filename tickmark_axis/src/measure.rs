// Copyright 2026 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for label margins.
//!
//! Axes reserve space for their labels before anything is rendered. Real glyph
//! metrics are a renderer concern, so margin estimation goes through a
//! [`TextMeasurer`]; the default is a fixed per-character advance.

/// A minimal text measurement interface used when sizing label margins.
pub trait TextMeasurer {
    /// Returns the width of a single line of `text`, in pixels.
    fn width(&self, text: &str) -> f64;

    /// Returns the height of one line of text, in pixels.
    fn line_height(&self) -> f64;
}

/// Measures text as if every character had the same advance width.
///
/// This is how [`Axis::estimate_label_margin`](crate::Axis::estimate_label_margin)
/// sizes labels: a monospaced approximation, not a shaped measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    /// Advance width of one character.
    pub char_width: f64,
    /// Height of one line of text.
    pub line_height: f64,
}

impl FixedAdvanceMeasurer {
    /// Creates a measurer with the given per-character width and line height.
    pub fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn width(&self, text: &str) -> f64 {
        self.char_width * text.chars().count() as f64
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_characters_not_bytes() {
        let m = FixedAdvanceMeasurer::new(8.0, 14.0);
        assert_eq!(m.width("100"), 24.0);
        assert_eq!(m.width("µs"), 16.0);
        assert_eq!(m.width(""), 0.0);
        assert_eq!(m.line_height(), 14.0);
    }
}
