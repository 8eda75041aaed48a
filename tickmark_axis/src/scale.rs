// Copyright 2026 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales: the collaborators an axis asks for tick values and pixel positions.
//!
//! An axis never inspects a scale's domain. It only needs two things:
//! - a finite, ordered list of representative values ([`Scale::ticks`]), and
//! - a projection of any value into a directional pixel range ([`Scale::project`]).
//!
//! Tick labels go through [`Scale::label`], which defaults to the value's own
//! [`TickValue::to_label`] and can be overridden per scale (see
//! [`LinearScale::with_formatter`]).

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::ScaleError;

/// A value an axis can place a tick at.
pub trait TickValue {
    /// Default display string for a tick label.
    fn to_label(&self) -> String;

    /// Whether this value is exactly zero.
    ///
    /// Axes draw the zero gridline in a distinct color. This is an exact comparison,
    /// not a tolerance check.
    fn is_zero(&self) -> bool;
}

impl TickValue for f64 {
    fn to_label(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl TickValue for i64 {
    fn to_label(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl TickValue for String {
    fn to_label(&self) -> String {
        self.clone()
    }

    fn is_zero(&self) -> bool {
        false
    }
}

/// A mapping from data values to representative ticks and pixel coordinates.
pub trait Scale {
    /// The data value type ticks are expressed in.
    type Value: TickValue;

    /// Returns representative tick values, in render order.
    ///
    /// `count` is a hint: implementations may return more or fewer values.
    fn ticks(&self, count: usize) -> Result<Vec<Self::Value>, ScaleError>;

    /// Projects `value` into the range bounded by `range_min` and `range_max`.
    ///
    /// The range is directional: `range_min` may be greater than `range_max`.
    fn project(&self, value: &Self::Value, range_min: f64, range_max: f64) -> f64;

    /// Returns the display string for a tick label.
    fn label(&self, value: &Self::Value) -> String {
        value.to_label()
    }
}

/// A label formatter for numeric ticks.
pub type TickFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// A linear scale over a continuous numeric domain.
#[derive(Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    formatter: Option<TickFormatter>,
}

impl core::fmt::Debug for LinearScale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinearScale")
            .field("domain", &self.domain)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl LinearScale {
    /// Creates a linear scale over `domain` (in data units).
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            formatter: None,
        }
    }

    /// Returns the domain as authored (or as widened by [`LinearScale::niced`]).
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Widens the domain outward to the nice tick values covering it.
    ///
    /// After this, the first and last ticks for `tick_count` sit on the domain
    /// endpoints. Non-finite domains and a zero tick count leave the scale unchanged.
    pub fn niced(mut self, tick_count: usize) -> Self {
        let (d0, d1) = self.domain;
        if tick_count == 0 || !d0.is_finite() || !d1.is_finite() {
            return self;
        }
        let ticks = nice_ticks(d0, d1, tick_count, true);
        if let (Some(&first), Some(&last)) = (ticks.first(), ticks.last()) {
            self.domain = if d0 <= d1 { (first, last) } else { (last, first) };
        }
        self
    }

    /// Sets a custom tick label formatter.
    pub fn with_formatter(mut self, f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.formatter = Some(Arc::new(f));
        self
    }

    /// Maps a value from domain space into the range `(r0, r1)`.
    pub fn map(&self, x: f64, r0: f64, r1: f64) -> f64 {
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }
}

impl Scale for LinearScale {
    type Value = f64;

    fn ticks(&self, count: usize) -> Result<Vec<f64>, ScaleError> {
        let (d0, d1) = self.domain;
        if count == 0 {
            return Err(ScaleError::InvalidTickCount(count));
        }
        if !d0.is_finite() || !d1.is_finite() {
            return Err(ScaleError::NonFiniteDomain(d0, d1));
        }
        Ok(nice_ticks(d0, d1, count, false))
    }

    fn project(&self, value: &f64, range_min: f64, range_max: f64) -> f64 {
        self.map(*value, range_min, range_max)
    }

    fn label(&self, value: &f64) -> String {
        match &self.formatter {
            Some(f) => f(*value),
            None => value.to_label(),
        }
    }
}

/// Returns "nice" tick values (steps of 1, 2 or 5 times a power of ten).
///
/// With `covering`, the ticks extend outward to enclose `[min, max]`; otherwise
/// only ticks inside the interval are returned. Tick values are integer multiples
/// (or integer fractions) of the step, so they print without accumulated error.
fn nice_ticks(mut min: f64, mut max: f64, count: usize, covering: bool) -> Vec<f64> {
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = (max - min) / count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return alloc::vec![min, max];
    }

    let power = clamp_to_i32(step.log10().floor());
    let error = step / 10_f64.powi(power);
    let factor = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };

    if power >= 0 {
        let inc = factor * 10_f64.powi(power);
        if !inc.is_finite() {
            return alloc::vec![min, max];
        }
        let (lo, hi) = index_bounds(min / inc, max / inc, covering);
        (lo..=hi).map(|i| i as f64 * inc).collect()
    } else {
        // Spans near the subnormal range overflow the inverse step.
        let inv = 10_f64.powi(-power) / factor;
        if !inv.is_finite() {
            return alloc::vec![min, max];
        }
        let (lo, hi) = index_bounds(min * inv, max * inv, covering);
        (lo..=hi).map(|i| i as f64 / inv).collect()
    }
}

fn index_bounds(lo: f64, hi: f64, covering: bool) -> (i64, i64) {
    let eps = 1.0e-9;
    let (lo, hi) = if covering {
        ((lo + eps).floor(), (hi - eps).ceil())
    } else {
        ((lo - eps).ceil(), (hi + eps).floor())
    };
    let lo = clamp_to_i64(lo);
    let hi = clamp_to_i64(hi).min(lo.saturating_add(10_000));
    (lo, hi)
}

fn clamp_to_i32(v: f64) -> i32 {
    let v = v.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        v as i32
    }
}

fn clamp_to_i64(v: f64) -> i64 {
    // Tick indices beyond 2^53 are not representable exactly anyway.
    let limit = 9_007_199_254_740_992.0;
    let v = v.clamp(-limit, limit);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to the exactly-representable integer range"
    )]
    {
        v as i64
    }
}

/// A logarithmic scale over a strictly positive domain.
#[derive(Clone, Copy, Debug)]
pub struct LogScale {
    domain: (f64, f64),
    base: f64,
}

impl LogScale {
    /// Creates a base-10 log scale over `domain`.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain, base: 10.0 }
    }

    /// Sets the log base. Invalid bases (non-finite, non-positive, or 1) fall back to 10.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    fn log_base(&self, x: f64) -> f64 {
        let denom = self.base.ln();
        if denom == 0.0 { x.ln() } else { x.ln() / denom }
    }

    fn pow_base(&self, e: i32) -> f64 {
        if e < 0 {
            1.0 / self.base.powi(-e)
        } else {
            self.base.powi(e)
        }
    }
}

impl Scale for LogScale {
    type Value = f64;

    /// Returns integer powers of the base inside the domain, thinned to roughly `count`.
    fn ticks(&self, count: usize) -> Result<Vec<f64>, ScaleError> {
        let (d0, d1) = self.domain;
        if count == 0 {
            return Err(ScaleError::InvalidTickCount(count));
        }
        if !d0.is_finite() || !d1.is_finite() {
            return Err(ScaleError::NonFiniteDomain(d0, d1));
        }
        if d0 <= 0.0 || d1 <= 0.0 {
            return Err(ScaleError::NonPositiveLogDomain(d0, d1));
        }
        let (min, max) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        let eps = 1.0e-9;
        let min_e = clamp_to_i32((self.log_base(min) - eps).ceil());
        let max_e = clamp_to_i32((self.log_base(max) + eps).floor());
        if min_e > max_e {
            return Ok(alloc::vec![min, max]);
        }

        let n = usize::try_from(i64::from(max_e) - i64::from(min_e) + 1).unwrap_or(usize::MAX);
        let stride = n.div_ceil(count).max(1);
        Ok((min_e..=max_e)
            .step_by(stride)
            .map(|e| self.pow_base(e))
            .collect())
    }

    fn project(&self, value: &f64, range_min: f64, range_max: f64) -> f64 {
        let (d0, d1) = self.domain;
        let x = *value;
        if x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return range_min;
        }
        let ld0 = self.log_base(d0);
        let denom = self.log_base(d1) - ld0;
        if denom == 0.0 {
            return range_min;
        }
        let t = (self.log_base(x) - ld0) / denom;
        range_min + t * (range_max - range_min)
    }
}

/// A categorical scale: each category occupies an equal-width band.
#[derive(Clone, Debug, Default)]
pub struct OrdinalScale {
    categories: Vec<String>,
}

impl OrdinalScale {
    /// Creates an ordinal scale over `categories`, in the given order.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the categories in domain order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

impl Scale for OrdinalScale {
    type Value = String;

    /// Returns every category; the count hint only has to be positive.
    fn ticks(&self, count: usize) -> Result<Vec<String>, ScaleError> {
        if count == 0 {
            return Err(ScaleError::InvalidTickCount(count));
        }
        Ok(self.categories.clone())
    }

    /// Projects a category to the centre of its band. Unknown categories map to `range_min`.
    fn project(&self, value: &String, range_min: f64, range_max: f64) -> f64 {
        let Some(index) = self.categories.iter().position(|c| c == value) else {
            return range_min;
        };
        let band = (range_max - range_min) / self.categories.len() as f64;
        range_min + band * (index as f64 + 0.5)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;

    use super::*;

    #[test]
    fn linear_projection_respects_range_direction() {
        let s = LinearScale::new((0.0, 100.0));
        assert_eq!(s.project(&25.0, 0.0, 200.0), 50.0);
        assert_eq!(s.project(&25.0, 200.0, 0.0), 150.0);
        assert_eq!(s.project(&100.0, 80.0, 0.0), 0.0);
    }

    #[test]
    fn linear_zero_width_domain_maps_to_range_start() {
        let s = LinearScale::new((3.0, 3.0));
        assert_eq!(s.project(&3.0, 10.0, 20.0), 10.0);
        assert_eq!(s.ticks(5).unwrap(), [3.0]);
    }

    #[test]
    fn linear_ticks_stay_inside_domain() {
        let s = LinearScale::new((0.0, 100.0));
        assert_eq!(s.ticks(5).unwrap(), [0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);

        let s = LinearScale::new((-3.0, 47.0));
        assert_eq!(s.ticks(5).unwrap(), [0.0, 10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn fractional_ticks_have_clean_labels() {
        let s = LinearScale::new((0.0, 1.0));
        let labels: Vec<String> = s.ticks(10).unwrap().iter().map(|t| s.label(t)).collect();
        assert_eq!(
            labels,
            ["0", "0.1", "0.2", "0.3", "0.4", "0.5", "0.6", "0.7", "0.8", "0.9", "1"]
        );
    }

    #[test]
    fn reversed_domain_yields_ascending_ticks() {
        let s = LinearScale::new((10.0, 0.0));
        assert_eq!(s.ticks(2).unwrap(), [0.0, 5.0, 10.0]);
        assert_eq!(s.project(&10.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn niced_domain_lands_on_ticks() {
        let s = LinearScale::new((0.5, 9.3)).niced(5);
        assert_eq!(s.domain(), (0.0, 10.0));
        let ticks = s.ticks(5).unwrap();
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&10.0));
    }

    #[test]
    fn linear_rejects_zero_count_and_non_finite_domain() {
        assert_eq!(
            LinearScale::new((0.0, 1.0)).ticks(0),
            Err(ScaleError::InvalidTickCount(0))
        );
        assert!(matches!(
            LinearScale::new((0.0, f64::NAN)).ticks(5),
            Err(ScaleError::NonFiniteDomain(..))
        ));
    }

    #[test]
    fn linear_formatter_overrides_labels() {
        let s = LinearScale::new((0.0, 1.0)).with_formatter(|v| format!("{:.0}%", v * 100.0));
        assert_eq!(s.label(&0.25), "25%");
        assert_eq!(0.25_f64.to_label(), "0.25");
    }

    #[test]
    fn zero_detection_is_exact() {
        assert!(0.0_f64.is_zero());
        assert!((-0.0_f64).is_zero());
        assert!(!1.0e-300_f64.is_zero());
        assert!(0_i64.is_zero());
        assert!(!String::from("0").is_zero());
    }

    #[test]
    fn log_scale_ticks_are_powers_of_base() {
        let s = LogScale::new((1.0, 1000.0));
        assert_eq!(s.ticks(10).unwrap(), [1.0, 10.0, 100.0, 1000.0]);
        assert_eq!(s.ticks(2).unwrap(), [1.0, 100.0]);

        let s = LogScale::new((0.01, 1.0));
        assert_eq!(s.ticks(10).unwrap(), [0.01, 0.1, 1.0]);
    }

    #[test]
    fn log_scale_maps_endpoints_to_range() {
        let s = LogScale::new((1.0, 100.0));
        assert!((s.project(&1.0, 0.0, 10.0) - 0.0).abs() < 1e-9);
        assert!((s.project(&10.0, 0.0, 10.0) - 5.0).abs() < 1e-9);
        assert!((s.project(&100.0, 0.0, 10.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn log_scale_rejects_non_positive_domain() {
        assert_eq!(
            LogScale::new((0.0, 10.0)).ticks(5),
            Err(ScaleError::NonPositiveLogDomain(0.0, 10.0))
        );
    }

    #[test]
    fn extreme_spans_fall_back_to_domain_endpoints() {
        let tiny = LinearScale::new((0.0, 1.0e-310));
        assert_eq!(tiny.ticks(5).unwrap(), [0.0, 1.0e-310]);

        let huge = LinearScale::new((0.0, 1.7e308));
        assert_eq!(huge.ticks(1).unwrap(), [0.0, 1.7e308]);
    }

    #[test]
    fn log_scale_honours_custom_base() {
        let s = LogScale::new((1.0, 16.0)).with_base(2.0);
        assert_eq!(s.ticks(10).unwrap(), [1.0, 2.0, 4.0, 8.0, 16.0]);
        assert!((s.project(&4.0, 0.0, 4.0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn log_scale_invalid_base_falls_back_to_ten() {
        for base in [0.0, 1.0, -2.0, f64::NAN, f64::INFINITY] {
            let s = LogScale::new((1.0, 1000.0)).with_base(base);
            assert_eq!(s.ticks(10).unwrap(), [1.0, 10.0, 100.0, 1000.0]);
        }
    }

    #[test]
    fn ordinal_projects_to_band_centres() {
        let s = OrdinalScale::new(["a", "b", "c", "d"]);
        assert_eq!(s.ticks(1).unwrap(), ["a", "b", "c", "d"]);
        assert_eq!(s.project(&String::from("a"), 0.0, 400.0), 50.0);
        assert_eq!(s.project(&String::from("d"), 0.0, 400.0), 350.0);
        assert_eq!(s.project(&String::from("b"), 400.0, 0.0), 250.0);
        assert_eq!(s.project(&String::from("zz"), 7.0, 400.0), 7.0);
    }
}
