use num_traits::Float;

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Convert an `f64` constant into the scale's numeric type.
pub(crate) fn lit<D: Float>(value: f64) -> D {
    D::from(value).unwrap_or_else(D::nan)
}

/// Position of `value` within `[start, stop]` as a ratio.
///
/// `start == stop` yields NaN or an infinity; callers decide what that means.
///
/// ```rust
/// use skala::scale::util::normalize;
///
/// assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
/// assert_eq!(normalize(-5.0, -10.0, 0.0), 0.5);
/// assert_eq!(normalize(15.0, 0.0, 10.0), 1.5);
/// ```
pub fn normalize<D: Float>(value: D, start: D, stop: D) -> D {
    (value - start) / (stop - start)
}

/// Smallest multiple of `base` that is `>= n`.
pub fn ceil_to<D: Float>(n: D, base: D) -> D {
    base * (n / base).ceil()
}

/// Largest multiple of `base` that is `<= n`.
pub fn floor_to<D: Float>(n: D, base: D) -> D {
    base * (n / base).floor()
}

/// Round to 12 fractional digits, dropping the noise left by `i * step`.
///
/// Values too large to carry 12 fractional digits come back untouched.
pub fn round_ticks<D: Float>(n: D) -> D {
    let scale = lit::<D>(1e12);
    let scaled = n * scale;
    if !scaled.is_finite() || scaled.abs() >= D::epsilon().recip() {
        return n;
    }
    scaled.round() / scale
}

/// Logarithm of `n` in an arbitrary `base`.
pub fn log_base<D: Float>(n: D, base: D) -> D {
    n.ln() / base.ln()
}

// Largest distance from an integer still treated as rounding error
const EXPONENT_TOLERANCE: f64 = 1e-9;

/// Snap a computed exponent to the nearest integer when it is within
/// rounding error of it, e.g. `log_base(125, 5) = 3.0000000000000004 -> 3`.
pub fn snap_exponent<D: Float>(exponent: D) -> D {
    let nearest = exponent.round();
    if (exponent - nearest).abs() <= lit(EXPONENT_TOLERANCE) { nearest } else { exponent }
}
