use std::fmt;

use num_traits::Float;

use super::{Invert, Nice, Scale, TickIter, Ticks, ticks, util};
use crate::interpolate::{Interpolate, interpolate_number};

/// Linear scale: affine mapping from a numeric domain onto a range.
///
/// The input is first normalized to its position `t` within the domain
/// (`0` at `domain.0`, `1` at `domain.1`), then `t` is handed to the
/// interpolator together with the two range endpoints.
///
/// # Type Parameters
///
/// - `D`: Domain type (the data values, typically `f32` or `f64`)
/// - `R`: Range endpoint type (`D` for numbers, [`Rgb`](crate::Rgb) for colors)
/// - `O`: Output type produced by the interpolator
///
/// # Features
///
/// - **Generic output**: numeric ranges by default, colors or anything else via
///   [`Linear::with_interpolator`]
/// - **Tick generation**: round tick values through [`Ticks`]
/// - **Nice domains**: widen the domain to tick boundaries through [`Nice`]
/// - **Reversed axes**: both increasing and decreasing domains are supported
/// - **No clamping**: out-of-domain values extrapolate
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust
/// use skala::{Scale, scale::Linear};
///
/// let scale = Linear::new((0.0, 1.0), (0.0, 10.0));
///
/// assert_eq!(scale.apply(&0.0), 0.0);
/// assert_eq!(scale.apply(&0.5), 5.0);
/// assert_eq!(scale.apply(&1.0), 10.0);
///
/// // Values outside the domain are not clamped
/// assert_eq!(scale.apply(&1.5), 15.0);
/// ```
///
/// ## Color Range
///
/// ```rust
/// use skala::{Rgb, Scale, interpolate::interpolate_color, scale::Linear};
///
/// let scale = Linear::with_interpolator(
///     (0.0, 100.0),
///     (Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)),
///     interpolate_color,
/// );
///
/// assert_eq!(scale.apply(&0.0), "#ff0000");
/// assert_eq!(scale.apply(&50.0), "#7f007f");
/// ```
///
/// ## Ticks and Nice
///
/// ```rust
/// use skala::{Nice, Ticks, scale::Linear};
///
/// let scale = Linear::new((0.13, 9.87), (0.0, 100.0)).nice(10);
/// assert_eq!(scale.domain(), (&0.0, &10.0));
///
/// let ticks: Vec<f64> = scale.ticks(5).collect();
/// assert_eq!(ticks, [0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
/// ```
#[derive(Clone)]
pub struct Linear<D, R = D, O = D>
where
    D: Float,
{
    min: D,
    max: D,
    range: (R, R),
    interpolate: Interpolate<D, R, O>,
}

impl<D: Float> Linear<D> {
    /// Creates a numeric linear scale.
    ///
    /// # Examples
    ///
    /// ```
    /// use skala::scale::Linear;
    ///
    /// let scale = Linear::new((0.0, 100.0), (0.0, 1.0));
    /// assert_eq!(scale.domain(), (&0.0, &100.0));
    /// ```
    pub fn new(domain: (D, D), range: (D, D)) -> Self {
        Self::with_interpolator(domain, range, interpolate_number)
    }
}

impl<D: Float, R, O> Linear<D, R, O> {
    /// Creates a linear scale with a custom interpolator.
    pub fn with_interpolator(domain: (D, D), range: (R, R), interpolate: Interpolate<D, R, O>) -> Self {
        Self {
            min: domain.0,
            max: domain.1,
            range,
            interpolate,
        }
    }

    pub fn domain(&self) -> (&D, &D) {
        (&self.min, &self.max)
    }

    pub fn range(&self) -> (&R, &R) {
        (&self.range.0, &self.range.1)
    }

    pub fn interpolator(&self) -> Interpolate<D, R, O> {
        self.interpolate
    }

    /// Same range and interpolator over a different domain.
    pub fn with_domain(self, domain: (D, D)) -> Self {
        Self {
            min: domain.0,
            max: domain.1,
            ..self
        }
    }

    /// Position of `value` within the domain: `0` at the first endpoint,
    /// `1` at the second. NaN or infinite for a degenerate domain.
    pub fn normalize(&self, value: D) -> D {
        util::normalize(value, self.min, self.max)
    }
}

impl<D: Float, R, O> Scale for Linear<D, R, O> {
    type Input = D;
    type Output = O;

    fn apply(&self, value: &D) -> O {
        let t = self.normalize(*value);
        (self.interpolate)(t, &self.range.0, &self.range.1)
    }
}

impl<D: Float + 'static, R, O> Ticks for Linear<D, R, O> {
    type Tick = D;

    fn ticks(&self, count: usize) -> TickIter<D> {
        ticks::ticks(self.min, self.max, count)
    }
}

impl<D: Float, R, O> Nice for Linear<D, R, O> {
    fn nice(self, count: usize) -> Self {
        if self.min == self.max {
            log::debug!("skipping nice on degenerate linear domain {:?}", self.min.to_f64());
            return self;
        }

        let (min, max) = ticks::nice_linear((self.min, self.max), count);
        log::trace!(
            "linear nice({count}): [{:?}, {:?}] -> [{:?}, {:?}]",
            self.min.to_f64(),
            self.max.to_f64(),
            min.to_f64(),
            max.to_f64()
        );
        self.with_domain((min, max))
    }
}

impl<D: Float> Invert for Linear<D, D, D> {
    /// Maps a range value back into the domain, assuming linear interpolation.
    ///
    /// ```rust
    /// use skala::{Invert, scale::Linear};
    ///
    /// let scale = Linear::new((0.0, 100.0), (0.0, 1.0));
    /// assert_eq!(scale.invert(&0.25), 25.0);
    /// ```
    fn invert(&self, output: &D) -> D {
        let t = util::normalize(*output, self.range.0, self.range.1);
        interpolate_number(t, &self.min, &self.max)
    }
}

impl<D, R, O> fmt::Debug for Linear<D, R, O>
where
    D: Float + fmt::Debug,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linear")
            .field("domain", &(self.min, self.max))
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}
