// Copyright 2026 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis layout and markup generation.
//!
//! An [`Axis`] is measured first ([`Axis::estimate_label_margin`], so the caller
//! can reserve space for labels) and then rendered into the axis body
//! ([`Axis::render`]). Both take the same scale and orientation.
//!
//! The body box excludes the label margin: for a `left` axis, labels and tick
//! marks extend to negative `x`; for a `bottom` axis they extend past `height`.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use kurbo::{Line, Point, Size};
use peniko::Color;
use tickmark_markup::Element;

use crate::style::{css_px, svg_paint};
use crate::{AxisError, AxisStyle, Scale, TextMeasurer, TickValue};

/// Which edge of the chart an axis is drawn along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A vertical axis on the left edge. Values increase upward.
    Left,
    /// A horizontal axis on the bottom edge. Values increase rightward.
    Bottom,
}

impl AxisOrient {
    /// Returns the orientation name (`left` or `bottom`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Bottom => "bottom",
        }
    }

    /// The pixel range ticks are projected into, as `(range_min, range_max)`.
    fn range(self, size: Size) -> (f64, f64) {
        match self {
            Self::Left => (size.height, 0.0),
            Self::Bottom => (0.0, size.width),
        }
    }

    /// The gridline for a tick at `position` along the axis.
    fn tick_line(self, size: Size, position: f64, tick_size: f64) -> Line {
        match self {
            Self::Left => Line::new((-tick_size, position), (size.width, position)),
            Self::Bottom => Line::new((position, 0.0), (position, size.height + tick_size)),
        }
    }

    /// Where the label for a tick at `position` is anchored.
    fn label_placement(self, size: Size, position: f64, tick_size: f64) -> LabelPlacement {
        match self {
            Self::Left => LabelPlacement {
                pos: Point::new(-2.0 * tick_size, position),
                anchor: TextAnchor::End,
                dy: "0.32em",
            },
            Self::Bottom => LabelPlacement {
                pos: Point::new(position, size.height + 2.0 * tick_size),
                anchor: TextAnchor::Middle,
                dy: "1em",
            },
        }
    }
}

impl fmt::Display for AxisOrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisOrient {
    type Err = AxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "bottom" => Ok(Self::Bottom),
            other => {
                log::warn!("rejecting axis orientation `{other}`");
                Err(AxisError::InvalidOrientation(other.to_string()))
            }
        }
    }
}

/// Conversion into an [`AxisOrient`], validated before an axis does any work.
///
/// Implemented for [`AxisOrient`] itself and for orientation names.
pub trait IntoAxisOrient {
    /// Returns the orientation, or [`AxisError::InvalidOrientation`].
    fn into_axis_orient(self) -> Result<AxisOrient, AxisError>;
}

impl IntoAxisOrient for AxisOrient {
    fn into_axis_orient(self) -> Result<AxisOrient, AxisError> {
        Ok(self)
    }
}

impl IntoAxisOrient for &str {
    fn into_axis_orient(self) -> Result<AxisOrient, AxisError> {
        self.parse()
    }
}

impl IntoAxisOrient for String {
    fn into_axis_orient(self) -> Result<AxisOrient, AxisError> {
        self.parse()
    }
}

#[derive(Clone, Copy, Debug)]
enum TextAnchor {
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct LabelPlacement {
    pos: Point,
    anchor: TextAnchor,
    dy: &'static str,
}

/// One tick of a laid-out axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick<V> {
    /// The data value, as produced by the scale.
    pub value: V,
    /// The projected pixel coordinate along the axis.
    pub position: f64,
    /// Whether the value is exactly zero (drawn with the zero line color).
    pub is_zero: bool,
}

/// A horizontal or vertical chart axis.
///
/// An axis holds only configuration; each call is a pure function of its arguments
/// and that configuration, so one axis can be shared across renders and threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Approximate number of ticks requested from the scale.
    pub tick_count: usize,
    /// Styling and font metrics.
    pub style: AxisStyle,
}

impl Default for Axis {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Axis {
    /// Creates an axis requesting roughly `tick_count` ticks, with the default style.
    pub fn new(tick_count: usize) -> Self {
        Self {
            tick_count,
            style: AxisStyle::default(),
        }
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Estimates the pixel margin to reserve beside the axis body for tick labels.
    ///
    /// For `left`, this is the widest label at the style's fixed character width.
    /// For `bottom`, it is one line of label text and the scale is not consulted.
    pub fn estimate_label_margin<S>(
        &self,
        scale: &S,
        orient: impl IntoAxisOrient,
    ) -> Result<f64, AxisError>
    where
        S: Scale + ?Sized,
    {
        self.measure_label_margin(scale, orient, &self.style.label_measurer())
    }

    /// Like [`Axis::estimate_label_margin`], with a caller-supplied text measurer.
    pub fn measure_label_margin<S>(
        &self,
        scale: &S,
        orient: impl IntoAxisOrient,
        measurer: &dyn TextMeasurer,
    ) -> Result<f64, AxisError>
    where
        S: Scale + ?Sized,
    {
        let orient = orient.into_axis_orient()?;
        let margin = match orient {
            AxisOrient::Left => {
                let ticks = scale.ticks(self.tick_count)?;
                let Some(widest) = ticks
                    .iter()
                    .map(|v| measurer.width(&scale.label(v)))
                    .reduce(f64::max)
                else {
                    log::warn!("cannot estimate a {orient} label margin without ticks");
                    return Err(AxisError::EmptyTickSet);
                };
                widest
            }
            AxisOrient::Bottom => measurer.line_height(),
        };
        log::debug!("{orient} axis label margin: {margin}");
        Ok(margin)
    }

    /// Lays out ticks for an axis body of `size`, in the order the scale yields them.
    pub fn layout_ticks<S>(
        &self,
        size: Size,
        scale: &S,
        orient: impl IntoAxisOrient,
    ) -> Result<Vec<Tick<S::Value>>, AxisError>
    where
        S: Scale + ?Sized,
    {
        let orient = orient.into_axis_orient()?;
        self.ticks_for(size, scale, orient)
    }

    /// Renders the axis into a markup tree.
    ///
    /// The root is a `g` with class `axis <orient>`, holding one `g.tick` per tick.
    /// Each tick group holds a `line` (the gridline and tick mark) and a `text` label.
    /// On error no tree is returned.
    pub fn render<S>(
        &self,
        size: Size,
        scale: &S,
        orient: impl IntoAxisOrient,
    ) -> Result<Element, AxisError>
    where
        S: Scale + ?Sized,
    {
        let orient = orient.into_axis_orient()?;
        let ticks = self.ticks_for(size, scale, orient)?;

        let mut root = Element::new("g").with_attr("class", format!("axis {orient}"));
        for tick in &ticks {
            let group = root.sub_element("g");
            group.set_attribute("class", "tick");
            group.append(self.tick_line(size, orient, tick));
            group.append(self.tick_label(size, orient, tick.position, scale.label(&tick.value)));
        }
        log::debug!(
            "rendered {orient} axis ({}x{}) with {} ticks",
            size.width,
            size.height,
            ticks.len()
        );
        Ok(root)
    }

    fn ticks_for<S>(
        &self,
        size: Size,
        scale: &S,
        orient: AxisOrient,
    ) -> Result<Vec<Tick<S::Value>>, AxisError>
    where
        S: Scale + ?Sized,
    {
        let (range_min, range_max) = orient.range(size);
        let ticks = scale
            .ticks(self.tick_count)?
            .into_iter()
            .map(|value| {
                let position = scale.project(&value, range_min, range_max);
                let is_zero = value.is_zero();
                log::trace!("{orient} tick at {position} (zero: {is_zero})");
                Tick {
                    value,
                    position,
                    is_zero,
                }
            })
            .collect();
        Ok(ticks)
    }

    fn tick_line<V>(&self, size: Size, orient: AxisOrient, tick: &Tick<V>) -> Element {
        let line = orient.tick_line(size, tick.position, self.style.tick_size);
        let color = if tick.is_zero {
            self.style.zero_color
        } else {
            self.style.tick_color
        };
        let mut el = Element::new("line")
            .with_attr("x1", num(line.p0.x))
            .with_attr("y1", num(line.p0.y))
            .with_attr("x2", num(line.p1.x))
            .with_attr("y2", num(line.p1.y));
        set_paint(&mut el, "stroke", "stroke-opacity", color);
        el.set_attribute("stroke-width", css_px(self.style.tick_width));
        el
    }

    fn tick_label(&self, size: Size, orient: AxisOrient, position: f64, text: String) -> Element {
        let placement = orient.label_placement(size, position, self.style.tick_size);
        let mut el = Element::new("text")
            .with_attr("x", num(placement.pos.x))
            .with_attr("y", num(placement.pos.y))
            .with_attr("dy", placement.dy);
        set_paint(&mut el, "fill", "fill-opacity", self.style.label_color);
        el.set_attribute("text-anchor", placement.anchor.as_str());
        el.set_attribute("font-family", self.style.label_font_family.clone());
        el.set_attribute("font-size", css_px(self.style.label_font_size));
        el.set_text(text);
        el
    }
}

fn set_paint(el: &mut Element, name: &'static str, opacity_name: &'static str, color: Color) {
    let (paint, opacity) = svg_paint(color);
    el.set_attribute(name, paint);
    if let Some(o) = opacity {
        el.set_attribute(opacity_name, num(o));
    }
}

fn num(v: f64) -> String {
    format!("{v}")
}
