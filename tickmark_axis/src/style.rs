// Copyright 2026 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis styling.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use peniko::Color;

use crate::FixedAdvanceMeasurer;

/// Axis styling and font metrics.
///
/// Every field is plain configuration: rendering never mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Stroke width of tick lines, in pixels.
    ///
    /// Always written as a `px` length; other CSS units are not supported.
    pub tick_width: f64,
    /// Length of the tick mark outside the axis body, in pixels.
    ///
    /// Labels sit at twice this distance from the axis edge.
    pub tick_size: f64,
    /// Stroke color of tick lines.
    pub tick_color: Color,
    /// Stroke color of the tick line whose value is exactly zero.
    pub zero_color: Color,
    /// Fill color of tick labels.
    pub label_color: Color,
    /// Font family of tick labels.
    pub label_font_family: String,
    /// Font size of tick labels, in pixels.
    ///
    /// Always written as a `px` length; other CSS units are not supported.
    pub label_font_size: f64,
    /// Height of one line of label text, used for margin estimation.
    pub label_char_height: f64,
    /// Advance width of one label character, used for margin estimation.
    pub label_char_width: f64,
}

impl Default for AxisStyle {
    /// The default style:
    /// - 1px ticks extending 4px past the axis body
    /// - `#eeeeee` ticks, a `#a8a8a8` zero line and `#9c9c9c` labels
    /// - 14px Monaco labels, estimated at 8px per character and 14px per line
    fn default() -> Self {
        Self {
            tick_width: 1.0,
            tick_size: 4.0,
            tick_color: Color::from_rgb8(0xee, 0xee, 0xee),
            zero_color: Color::from_rgb8(0xa8, 0xa8, 0xa8),
            label_color: Color::from_rgb8(0x9c, 0x9c, 0x9c),
            label_font_family: String::from("Monaco"),
            label_font_size: 14.0,
            label_char_height: 14.0,
            label_char_width: 8.0,
        }
    }
}

impl AxisStyle {
    /// Set the tick stroke width.
    pub fn with_tick_width(mut self, tick_width: f64) -> Self {
        self.tick_width = tick_width;
        self
    }

    /// Set the tick mark length.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Set the tick line color.
    pub fn with_tick_color(mut self, color: Color) -> Self {
        self.tick_color = color;
        self
    }

    /// Set the zero line color.
    pub fn with_zero_color(mut self, color: Color) -> Self {
        self.zero_color = color;
        self
    }

    /// Set the label color.
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    /// Set the label font family and size.
    pub fn with_label_font(mut self, family: impl Into<String>, size: f64) -> Self {
        self.label_font_family = family.into();
        self.label_font_size = size;
        self
    }

    /// Set the per-character metrics used to estimate label margins.
    pub fn with_label_metrics(mut self, char_width: f64, char_height: f64) -> Self {
        self.label_char_width = char_width;
        self.label_char_height = char_height;
        self
    }

    /// Returns the measurer implied by the label character metrics.
    pub fn label_measurer(&self) -> FixedAdvanceMeasurer {
        FixedAdvanceMeasurer::new(self.label_char_width, self.label_char_height)
    }
}

/// Converts a color to an SVG paint value (`#rrggbb`) plus an opacity when not opaque.
pub(crate) fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (paint, opacity)
}

/// Formats a pixel length as a CSS length (`1px`).
pub(crate) fn css_px(v: f64) -> String {
    format!("{v}px")
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn default_paints_are_opaque_hex() {
        let style = AxisStyle::default();
        assert_eq!(svg_paint(style.tick_color), (String::from("#eeeeee"), None));
        assert_eq!(svg_paint(style.zero_color).0, "#a8a8a8");
        assert_eq!(svg_paint(style.label_color).0, "#9c9c9c");
    }

    #[test]
    fn translucent_paint_carries_opacity() {
        let (paint, opacity) = svg_paint(css::BLACK.with_alpha(0.0));
        assert_eq!(paint, "#000000");
        assert_eq!(opacity, Some(0.0));
    }

    #[test]
    fn builders_override_single_fields() {
        let style = AxisStyle::default()
            .with_tick_size(6.0)
            .with_label_metrics(7.0, 12.0);
        assert_eq!(style.tick_size, 6.0);
        assert_eq!(style.label_measurer(), FixedAdvanceMeasurer::new(7.0, 12.0));
        assert_eq!(style.label_font_family, "Monaco");
        assert_eq!(css_px(style.tick_width), "1px");
    }
}
