// Copyright 2026 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for scales and axes.

use alloc::string::String;

use thiserror::Error;

/// Errors raised by [`Scale`](crate::Scale) implementations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScaleError {
    /// A tick count of zero was requested.
    #[error("tick count must be positive, got {0}")]
    InvalidTickCount(usize),
    /// The domain has a NaN or infinite endpoint.
    #[error("scale domain [{0}, {1}] is not finite")]
    NonFiniteDomain(f64, f64),
    /// A log scale domain touches or crosses zero.
    #[error("log scale domain [{0}, {1}] must be strictly positive")]
    NonPositiveLogDomain(f64, f64),
}

/// Errors raised by [`Axis`](crate::Axis) operations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AxisError {
    /// The orientation is not one of `left` or `bottom`.
    #[error("invalid axis orientation `{0}`, expected `left` or `bottom`")]
    InvalidOrientation(String),
    /// The scale produced no ticks, so there is no label to size a margin from.
    #[error("scale produced no ticks to estimate a label margin from")]
    EmptyTickSet,
    /// An error raised by the scale, passed through unchanged.
    #[error(transparent)]
    Scale(#[from] ScaleError),
}
