// Copyright 2026 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart axis layout and rendering.
//!
//! This crate turns a [`Scale`] and a pixel box into a labeled axis:
//! - **Scales** pick representative tick values and project values into pixels.
//! - **Axes** estimate the margin their labels need, then emit a markup tree of
//!   tick lines and labels ([`tickmark_markup::Element`]) for either a `left`
//!   or a `bottom` orientation.
//!
//! Label sizes are estimated from fixed per-character metrics rather than
//! measured from a real font; see [`FixedAdvanceMeasurer`].
//!
//! ```
//! use kurbo::Size;
//! use tickmark_axis::{Axis, AxisOrient, LinearScale};
//!
//! let axis = Axis::new(5);
//! let scale = LinearScale::new((0.0, 100.0));
//! let margin = axis.estimate_label_margin(&scale, AxisOrient::Left)?;
//! let tree = axis.render(Size::new(320.0, 200.0), &scale, AxisOrient::Left)?;
//! assert_eq!(margin, 24.0);
//! assert_eq!(tree.children().len(), 6);
//! # Ok::<(), tickmark_axis::AxisError>(())
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod axis;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod measure;
mod scale;
mod style;
#[cfg(test)]
mod svg_tests;

pub use axis::{Axis, AxisOrient, IntoAxisOrient, Tick};
pub use error::{AxisError, ScaleError};
pub use measure::{FixedAdvanceMeasurer, TextMeasurer};
pub use scale::{LinearScale, LogScale, OrdinalScale, Scale, TickFormatter, TickValue};
pub use style::AxisStyle;
