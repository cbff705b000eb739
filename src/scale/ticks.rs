//! Nice step sizes, tick sequences and domain rounding.
//!
//! Steps are always one of 1, 2 or 5 times a power of ten, which keeps axis
//! labels short. The algorithm prefers round numbers over hitting the
//! requested tick count exactly.
//!
//! ```rust
//! use skala::scale::ticks::{tick_step, ticks};
//!
//! assert_eq!(tick_step(0.0, 10.0, 5), 2.0);
//! assert_eq!(ticks(0.0, 10.0, 5).collect::<Vec<_>>(), [0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
//! assert_eq!(ticks(0.0, 5.0, 6).collect::<Vec<_>>(), [0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
//! ```

use num_traits::Float;

use super::tick_iter::{SteppedTicks, TickIter};
use super::util::{self, lit};

/// Tick count used when the caller has no preference.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Step size close to `|max - min| / count`, snapped to 1, 2, 5 or 10 × 10^k.
///
/// The raw step is compared against √50, √10 and √2 times its power of ten to
/// decide between 10×, 5× and 2× that power. `count == 0` returns `1`.
pub fn tick_step<D: Float>(min: D, max: D, count: usize) -> D {
    if count == 0 {
        return D::one();
    }
    let Some(count) = D::from(count) else {
        return D::one();
    };

    let raw = (max - min).abs() / count;
    let power = lit::<D>(10.0).powf(raw.log10().floor());
    let error = raw / power;

    let factor = if error >= lit::<D>(50.0).sqrt() {
        10.0
    } else if error >= lit::<D>(10.0).sqrt() {
        5.0
    } else if error >= lit::<D>(2.0).sqrt() {
        2.0
    } else {
        1.0
    };

    power * lit(factor)
}

/// Round values covering `[min, max]`, spaced by [`tick_step`].
///
/// - `count == 0` produces nothing.
/// - `min == max` produces exactly `[min]`.
/// - `min > max` produces the same ticks in descending order.
/// - Non-finite bounds produce nothing.
pub fn ticks<D: Float + 'static>(min: D, max: D, count: usize) -> TickIter<D> {
    TickIter::from_stepped(stepped(min, max, count))
}

fn stepped<D: Float>(min: D, max: D, count: usize) -> SteppedTicks<D> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return SteppedTicks::empty();
    }
    if min == max {
        return SteppedTicks::single(min);
    }

    let (lo, hi) = util::sorted_pair(min, max);
    let step = tick_step(lo, hi, count);
    if !step.is_finite() || step <= D::zero() {
        return SteppedTicks::empty();
    }

    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    SteppedTicks::sweep(step, first, last, min > max)
}

/// Floor/ceil pair used by [`nice`] to widen a domain.
pub trait NiceInterval<D> {
    fn floor(&self, value: D) -> D;
    fn ceil(&self, value: D) -> D;
}

/// Aligns to multiples of a step size.
///
/// Fractional steps (0.1, 0.05, ...) are applied through their integral
/// inverse, `floor(v * 10) / 10` rather than `0.1 * floor(v / 0.1)`, which
/// keeps already-aligned values fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInterval<D>(pub D);

impl<D: Float> StepInterval<D> {
    fn inverse(&self) -> Option<D> {
        (self.0 < D::one()).then(|| self.0.recip().round())
    }
}

impl<D: Float> NiceInterval<D> for StepInterval<D> {
    fn floor(&self, value: D) -> D {
        match self.inverse() {
            Some(inverse) => (value * inverse).floor() / inverse,
            None => util::floor_to(value, self.0),
        }
    }

    fn ceil(&self, value: D) -> D {
        match self.inverse() {
            Some(inverse) => (value * inverse).ceil() / inverse,
            None => util::ceil_to(value, self.0),
        }
    }
}

/// Aligns to whole numbers, e.g. exponents of a log scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntegerInterval;

impl<D: Float> NiceInterval<D> for IntegerInterval {
    fn floor(&self, value: D) -> D {
        value.floor()
    }

    fn ceil(&self, value: D) -> D {
        value.ceil()
    }
}

/// `[floor(d0), ceil(d1)]` under `interval`.
///
/// ```rust
/// use skala::scale::ticks::{StepInterval, nice};
///
/// assert_eq!(nice((0.1, 9.9), &StepInterval(1.0)), (0.0, 10.0));
/// ```
pub fn nice<D, I>(domain: (D, D), interval: &I) -> (D, D)
where
    I: NiceInterval<D>,
{
    let (min, max) = domain;
    (interval.floor(min), interval.ceil(max))
}

// Bound on step re-evaluation; the step settles after one or two rounds in practice.
const MAX_NICE_ITERATIONS: usize = 10;

/// Widen `(d0, d1)` to multiples of the tick step for `count` ticks.
///
/// The step is recomputed over the widened domain until it stops changing,
/// so applying this twice with the same `count` is a no-op the second time.
/// Reversed domains stay reversed. Degenerate domains are returned as is.
pub(crate) fn nice_linear<D: Float>(domain: (D, D), count: usize) -> (D, D) {
    let (d0, d1) = domain;
    if d0 == d1 || !d0.is_finite() || !d1.is_finite() {
        return domain;
    }

    let reversed = d0 > d1;
    let (mut lo, mut hi) = util::sorted_pair(d0, d1);
    let mut previous: Option<D> = None;

    for _ in 0..MAX_NICE_ITERATIONS {
        let step = tick_step(lo, hi, count);
        if previous == Some(step) || !step.is_finite() || step <= D::zero() {
            break;
        }
        (lo, hi) = nice((lo, hi), &StepInterval(step));
        previous = Some(step);
    }

    if reversed { (hi, lo) } else { (lo, hi) }
}
