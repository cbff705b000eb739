use std::fmt;

use num_traits::Float;

use super::ticks::{self, IntegerInterval};
use super::{Invert, Linear, Nice, Scale, TickIter, Ticks, util};
use crate::error::{Result, ScaleError};
use crate::interpolate::{Interpolate, interpolate_number};

/// Tick count used by [`Ticks::default_ticks`] on a logarithmic scale.
pub const DEFAULT_LOG_TICK_COUNT: usize = 5;

/// Logarithmic scale: maps a positive domain onto a range through `ln(x)`.
///
/// Internally this is a [`Linear`] scale over `(ln d0, ln d1)`. Equal
/// distances in the output represent equal *ratios* in the domain, so
/// 1 → 10 covers as much of the range as 10 → 100.
///
/// # Base
///
/// The base does not change the mapping (the ratio of logarithms is the
/// same in any base). It decides where ticks fall and which boundaries
/// [`Nice`] snaps to:
///
/// - base 10: ticks are generated over whole exponents and raised back with
///   `10^e`, nice snaps to the enclosing powers of ten;
/// - any other base: ticks are generated in `log_base` space and raised back
///   with `base^e`, nice snaps to the enclosing integer powers of the base.
///
/// # Domain Constraints
///
/// Only **positive values** have a logarithm. The constructors reject a
/// non-positive domain; mapping a non-positive value through an existing
/// scale yields NaN or an infinity, as `ln` does.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust
/// use skala::{Scale, scale::Logarithmic};
///
/// let scale = Logarithmic::<f64>::new((1.0, 1000.0), (0.0, 10.0)).unwrap();
///
/// assert_eq!(scale.apply(&1.0), 0.0);
/// assert_eq!(scale.apply(&1000.0), 10.0);
///
/// // 10 is a third of the way in log space
/// assert!((scale.apply(&10.0) - 3.333).abs() < 0.01);
/// ```
///
/// ## Base 10 Ticks
///
/// ```rust
/// use skala::{Nice, Ticks, scale::Logarithmic};
///
/// let scale = Logarithmic::with_base(10.0, (1.5, 950.0), (0.0, 1.0))
///     .unwrap()
///     .nice(5);
/// assert_eq!(scale.domain(), (&1.0, &1000.0));
///
/// let ticks: Vec<f64> = scale.ticks(3).collect();
/// assert_eq!(ticks, [1.0, 10.0, 100.0, 1000.0]);
/// ```
///
/// ## Domain Validation
///
/// ```rust
/// use skala::{ScaleError, scale::Logarithmic};
///
/// assert!(matches!(
///     Logarithmic::new((0.0, 100.0), (0.0, 1.0)),
///     Err(ScaleError::InvalidLogDomain { .. })
/// ));
/// assert!(matches!(
///     Logarithmic::with_base(1.0, (1.0, 100.0), (0.0, 1.0)),
///     Err(ScaleError::InvalidLogBase(_))
/// ));
/// ```
#[derive(Clone)]
pub struct Logarithmic<D, R = D, O = D>
where
    D: Float,
{
    base: D,
    min: D,
    max: D,
    linear: Linear<D, R, O>,
}

impl<D: Float> Logarithmic<D> {
    /// Numeric log scale in base `e`.
    pub fn new(domain: (D, D), range: (D, D)) -> Result<Self> {
        Self::with_base(D::one().exp(), domain, range)
    }

    /// Numeric log scale in the given base.
    pub fn with_base(base: D, domain: (D, D), range: (D, D)) -> Result<Self> {
        Self::with_interpolator(base, domain, range, interpolate_number)
    }
}

impl<D: Float, R, O> Logarithmic<D, R, O> {
    /// Log scale with a custom interpolator, e.g. a color ramp.
    pub fn with_interpolator(base: D, domain: (D, D), range: (R, R), interpolate: Interpolate<D, R, O>) -> Result<Self> {
        validate(base, domain)?;

        let (min, max) = domain;
        Ok(Self {
            base,
            min,
            max,
            linear: Linear::with_interpolator((min.ln(), max.ln()), range, interpolate),
        })
    }

    pub fn base(&self) -> D {
        self.base
    }

    pub fn domain(&self) -> (&D, &D) {
        (&self.min, &self.max)
    }

    pub fn range(&self) -> (&R, &R) {
        self.linear.range()
    }

    /// Whether `value` has a logarithm, i.e. is strictly positive.
    pub fn is_valid_domain_value(&self, value: &D) -> bool {
        *value > D::zero()
    }

    fn is_base_10(&self) -> bool {
        self.base == util::lit(10.0)
    }

    fn with_domain(self, domain: (D, D)) -> Self {
        let (min, max) = domain;
        Self {
            min,
            max,
            linear: self.linear.with_domain((min.ln(), max.ln())),
            ..self
        }
    }
}

fn validate<D: Float>(base: D, (min, max): (D, D)) -> Result<()> {
    let as_f64 = |value: D| value.to_f64().unwrap_or(f64::NAN);

    if !(base > D::zero() && base.is_finite() && base != D::one()) {
        log::debug!("rejecting logarithm base {:?}", base.to_f64());
        return Err(ScaleError::InvalidLogBase(as_f64(base)));
    }

    let positive = |value: D| value > D::zero() && value.is_finite();
    if !(positive(min) && positive(max)) {
        log::debug!("rejecting logarithmic domain [{:?}, {:?}]", min.to_f64(), max.to_f64());
        return Err(ScaleError::InvalidLogDomain {
            min: as_f64(min),
            max: as_f64(max),
        });
    }

    Ok(())
}

impl<D: Float, R, O> Scale for Logarithmic<D, R, O> {
    type Input = D;
    type Output = O;

    fn apply(&self, value: &D) -> O {
        self.linear.apply(&value.ln())
    }
}

impl<D: Float + 'static, R, O> Ticks for Logarithmic<D, R, O> {
    type Tick = D;

    const DEFAULT_COUNT: usize = DEFAULT_LOG_TICK_COUNT;

    fn ticks(&self, count: usize) -> TickIter<D> {
        if self.is_base_10() {
            // Whole exponents keep the labels on powers of ten
            let ten = util::lit::<D>(10.0);
            let (lo, hi) = util::sorted_pair(self.min, self.max);
            let lo = util::snap_exponent(lo.log10()).floor();
            let hi = util::snap_exponent(hi.log10()).ceil();
            let (first, last) = if self.min > self.max { (hi, lo) } else { (lo, hi) };
            ticks::ticks(first, last, count).map_ticks(move |exponent| ten.powf(exponent))
        } else {
            let base = self.base;
            let first = util::snap_exponent(util::log_base(self.min, base));
            let last = util::snap_exponent(util::log_base(self.max, base));
            ticks::ticks(first, last, count).map_ticks(move |exponent| base.powf(exponent))
        }
    }
}

impl<D: Float, R, O> Nice for Logarithmic<D, R, O> {
    /// Snaps the domain outward to integer powers of the base. The tick count
    /// is ignored.
    fn nice(self, _count: usize) -> Self {
        if self.min == self.max {
            log::debug!("skipping nice on degenerate log domain {:?}", self.min.to_f64());
            return self;
        }

        let reversed = self.min > self.max;
        let (lo, hi) = util::sorted_pair(self.min, self.max);

        let exponent_of = |value: D| {
            let exponent = if self.is_base_10() { value.log10() } else { util::log_base(value, self.base) };
            util::snap_exponent(exponent)
        };
        let (e_lo, e_hi) = ticks::nice((exponent_of(lo), exponent_of(hi)), &IntegerInterval);
        let base = if self.is_base_10() { util::lit::<D>(10.0) } else { self.base };
        let (lo, hi) = (base.powf(e_lo), base.powf(e_hi));

        let domain = if reversed { (hi, lo) } else { (lo, hi) };
        log::trace!(
            "log nice: [{:?}, {:?}] -> [{:?}, {:?}]",
            self.min.to_f64(),
            self.max.to_f64(),
            domain.0.to_f64(),
            domain.1.to_f64()
        );
        self.with_domain(domain)
    }
}

impl<D: Float> Invert for Logarithmic<D, D, D> {
    fn invert(&self, output: &D) -> D {
        self.linear.invert(output).exp()
    }
}

impl<D, R, O> fmt::Debug for Logarithmic<D, R, O>
where
    D: Float + fmt::Debug,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logarithmic")
            .field("base", &self.base)
            .field("domain", &(self.min, self.max))
            .field("range", &self.linear.range())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::interpolate::interpolate_color;

    #[test]
    fn test_log_apply_base_e() {
        let scale = Logarithmic::new((1.0, 1000.0), (0.0, 10.0)).unwrap();

        assert_eq!(scale.apply(&1.0), 0.0);
        assert_eq!(scale.apply(&1000.0), 10.0);
        assert!((scale.apply(&10.0) - 10.0 / 3.0).abs() < 1e-9);
        assert!((scale.apply(&100.0) - 20.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_log_apply_base_2() {
        let scale = Logarithmic::with_base(2.0, (1.0, 16.0), (0.0, 10.0)).unwrap();

        assert_eq!(scale.apply(&1.0), 0.0);
        assert_eq!(scale.apply(&16.0), 10.0);
        assert!((scale.apply(&2.0) - 2.5).abs() < 1e-9);
        assert!((scale.apply(&4.0) - 5.0).abs() < 1e-9);
        assert!((scale.apply(&8.0) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_log_apply_f32() {
        let scale = Logarithmic::<f32>::with_base(10.0, (1.0, 100.0), (0.0, 1.0)).unwrap();

        assert_eq!(scale.apply(&1.0), 0.0);
        assert_eq!(scale.apply(&100.0), 1.0);
        assert!((scale.apply(&10.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_log_invalid_domain_rejected() {
        assert_eq!(
            Logarithmic::new((0.0, 100.0), (0.0, 1.0)).unwrap_err(),
            ScaleError::InvalidLogDomain { min: 0.0, max: 100.0 }
        );
        assert!(Logarithmic::new((1.0, -5.0), (0.0, 1.0)).is_err());
        assert!(Logarithmic::new((1.0, f64::INFINITY), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_log_invalid_base_rejected() {
        for base in [1.0, 0.0, -2.0, f64::NAN] {
            assert!(
                matches!(
                    Logarithmic::with_base(base, (1.0, 10.0), (0.0, 1.0)),
                    Err(ScaleError::InvalidLogBase(_))
                ),
                "base {base} should be rejected"
            );
        }
    }

    #[test]
    fn test_log_is_valid_domain_value() {
        let scale = Logarithmic::with_base(10.0, (1.0, 100.0), (0.0, 1.0)).unwrap();

        assert!(scale.is_valid_domain_value(&1.0));
        assert!(scale.is_valid_domain_value(&0.001));
        assert!(!scale.is_valid_domain_value(&0.0));
        assert!(!scale.is_valid_domain_value(&-5.0));
    }

    #[test]
    fn test_log_non_positive_input_is_not_finite() {
        let scale = Logarithmic::with_base(10.0, (1.0, 100.0), (0.0, 1.0)).unwrap();

        assert!(!scale.apply(&0.0).is_finite());
        assert!(scale.apply(&-1.0).is_nan());
    }

    #[test]
    fn test_log_ticks_base10_whole_exponents() {
        let scale = Logarithmic::with_base(10.0, (1.0, 1000.0), (0.0, 1.0)).unwrap();
        let ticks: Vec<f64> = scale.ticks(3).collect();

        assert_eq!(ticks, vec![1.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn test_log_ticks_base10_expands_outward() {
        // Exponents floor(log10 2) = 0 .. ceil(log10 500) = 3
        let scale = Logarithmic::with_base(10.0, (2.0, 500.0), (0.0, 1.0)).unwrap();
        let ticks: Vec<f64> = scale.ticks(3).collect();

        assert_eq!(ticks, vec![1.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn test_log_ticks_base_e_are_geometric() {
        let scale = Logarithmic::new((1.0, 1000.0), (0.0, 10.0)).unwrap();
        let ticks: Vec<f64> = scale.default_ticks().collect();

        assert!(ticks.len() >= DEFAULT_LOG_TICK_COUNT);
        assert!((ticks[0] - 1.0).abs() < 1e-9);
        assert!(*ticks.last().unwrap() > 100.0);

        let first_ratio = ticks[1] / ticks[0];
        for pair in ticks.windows(2) {
            assert!((pair[1] / pair[0] - first_ratio).abs() < 1e-9);
        }
    }

    #[test]
    fn test_log_ticks_base_2() {
        let scale = Logarithmic::with_base(2.0, (1.0, 16.0), (0.0, 1.0)).unwrap();
        let ticks: Vec<f64> = scale.ticks(4).collect();

        assert_eq!(ticks, vec![1.0, 2.0, 4.0, 8.0, 16.0]);
    }

    #[test]
    fn test_log_ticks_reversed_domain() {
        let scale = Logarithmic::with_base(10.0, (100.0, 1.0), (0.0, 1.0)).unwrap();
        let ticks: Vec<f64> = scale.ticks(2).collect();

        assert_eq!(ticks, vec![100.0, 10.0, 1.0]);
    }

    #[test]
    fn test_log_nice_base10() {
        let scale = Logarithmic::with_base(10.0, (1.5, 950.0), (0.0, 10.0))
            .unwrap()
            .default_nice();

        assert_eq!(scale.domain(), (&1.0, &1000.0));
        assert_eq!(scale.apply(&1.0), 0.0);
        assert_eq!(scale.apply(&1000.0), 10.0);

        let ticks: Vec<f64> = scale.ticks(5).collect();
        assert!(ticks[0] <= 1.5);
        assert!(*ticks.last().unwrap() >= 100.0);
    }

    #[test]
    fn test_log_nice_base2() {
        let scale = Logarithmic::with_base(2.0, (3.0, 10.0), (0.0, 1.0)).unwrap().nice(10);
        assert_eq!(scale.domain(), (&2.0, &16.0));
    }

    #[test]
    fn test_log_nice_reversed() {
        let scale = Logarithmic::with_base(10.0, (950.0, 1.5), (0.0, 1.0)).unwrap().nice(10);
        assert_eq!(scale.domain(), (&1000.0, &1.0));
    }

    #[test]
    fn test_log_ticks_reversed_domain_widens_outward() {
        let scale = Logarithmic::with_base(10.0, (950.0, 1.5), (0.0, 1.0)).unwrap();
        let ticks: Vec<f64> = scale.ticks(3).collect();

        assert_eq!(ticks, vec![1000.0, 100.0, 10.0, 1.0]);
    }

    #[test]
    fn test_log_ticks_exact_power_endpoints() {
        let scale = Logarithmic::with_base(5.0, (1.0, 125.0), (0.0, 1.0)).unwrap();
        let ticks: Vec<f64> = scale.ticks(3).collect();

        assert_eq!(ticks, vec![1.0, 5.0, 25.0, 125.0]);
    }

    #[test]
    fn test_log_nice_keeps_exact_powers() {
        for base in 2..=7u32 {
            let base_f = f64::from(base);
            let mut power = 1.0;
            for exponent in 1..=12 {
                power *= base_f;
                let scale = Logarithmic::with_base(base_f, (1.0, power), (0.0, 1.0)).unwrap().nice(10);

                assert_eq!(scale.domain(), (&1.0, &power), "base {base} exponent {exponent}");
            }
        }
    }

    #[test]
    fn test_log_nice_degenerate_noop() {
        let scale = Logarithmic::with_base(10.0, (5.0, 5.0), (0.0, 1.0)).unwrap().nice(10);
        assert_eq!(scale.domain(), (&5.0, &5.0));
    }

    #[test]
    fn test_log_nice_idempotent() {
        let once = Logarithmic::with_base(10.0, (0.03, 70.0), (0.0, 1.0)).unwrap().nice(10);
        let domain = (*once.domain().0, *once.domain().1);
        let twice = once.nice(10);

        assert_eq!((*twice.domain().0, *twice.domain().1), domain);
    }

    #[test]
    fn test_log_invert() {
        let scale = Logarithmic::with_base(10.0, (1.0, 100.0), (0.0, 1.0)).unwrap();

        assert!((scale.invert(&0.0) - 1.0).abs() < 1e-10);
        assert!((scale.invert(&0.5) - 10.0).abs() < 1e-10);
        assert!((scale.invert(&1.0) - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_log_color() {
        let scale = Logarithmic::with_interpolator(
            10.0,
            (1.0, 100.0),
            (Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)),
            interpolate_color,
        )
        .unwrap();

        assert_eq!(scale.apply(&1.0), "#000000");
        assert_eq!(scale.apply(&100.0), "#ffffff");
    }
}
