//! Scales map a domain (data space) onto a range (visual space).
//!
//! Every scale implements [`Scale`], whose [`apply`](Scale::apply) performs the
//! mapping. Capabilities that only some scales have are separate traits:
//!
//! | Trait | Provided by |
//! |---|---|
//! | [`Ticks`] | [`Linear`], [`Logarithmic`], [`Time`] |
//! | [`Nice`] | [`Linear`], [`Logarithmic`], [`Time`] |
//! | [`Invert`] | numeric [`Linear`], [`Logarithmic`], [`Time`] |
//! | [`Banded`] | [`Band`] |
//! | [`Thresholded`] | [`Threshold`] |
//!
//! Continuous scales are generic over the domain type `D` (any
//! [`num_traits::Float`], `f64` by default), the range endpoint type `R` and
//! the output type `O` produced by their interpolator.

pub mod band;
pub mod canonical;
pub mod identity;
pub mod linear;
pub mod log;
pub mod ordinal;
pub mod threshold;
pub mod tick_iter;
pub mod ticks;
pub mod time;
pub mod util;

pub use band::{Band, BandOptions};
pub use canonical::{CanonicalKey, canonicalize};
pub use identity::Identity;
pub use linear::Linear;
pub use self::log::{DEFAULT_LOG_TICK_COUNT, Logarithmic};
pub use ordinal::Ordinal;
pub use threshold::Threshold;
pub use tick_iter::TickIter;
pub use ticks::DEFAULT_TICK_COUNT;
pub use time::Time;

/// A pure mapping from an input value to an output value.
///
/// Calling [`apply`](Scale::apply) never mutates the scale and never fails;
/// inputs the scale has no answer for fall back to a documented default.
pub trait Scale {
    type Input;
    type Output;

    fn apply(&self, value: &Self::Input) -> Self::Output;
}

/// Scales that can propose round, human-readable tick values.
pub trait Ticks: Scale {
    /// Domain-typed value of a single tick.
    type Tick;

    /// Tick count used by [`default_ticks`](Ticks::default_ticks).
    const DEFAULT_COUNT: usize = DEFAULT_TICK_COUNT;

    /// Roughly `count` ticks over the current domain.
    ///
    /// The result favors round values over the exact count, so it may hold
    /// more or fewer ticks than requested.
    fn ticks(&self, count: usize) -> TickIter<Self::Tick>;

    fn default_ticks(&self) -> TickIter<Self::Tick> {
        self.ticks(Self::DEFAULT_COUNT)
    }
}

/// Scales whose domain can be widened to round boundaries.
///
/// `nice` consumes the scale and returns the widened one, so every later
/// call observes the new domain through the returned value.
pub trait Nice: Sized {
    fn nice(self, count: usize) -> Self;

    fn default_nice(self) -> Self {
        self.nice(DEFAULT_TICK_COUNT)
    }
}

/// Scales that can map an output back to the input that produced it.
pub trait Invert: Scale {
    fn invert(&self, output: &Self::Output) -> Self::Input;
}

/// Discrete scales that lay keys out in evenly spaced bands.
pub trait Banded {
    /// Width of a single band.
    fn band_width(&self) -> f64;

    /// Distance between the starts of two adjacent bands.
    fn step(&self) -> f64;
}

/// Scales that bucket a continuous input by sorted cut points.
pub trait Thresholded {
    fn thresholds(&self) -> &[f64];
}
