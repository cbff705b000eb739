//! Interpolators: map a ratio `t` between two range endpoints.
//!
//! Every interpolator returns `start` for `t == 0` and `stop` for `t == 1`.
//! Ratios outside `[0, 1]` extrapolate; nothing here clamps `t`.

use num_traits::Float;

use crate::color::Rgb;

/// Interpolation function used by the continuous scales.
///
/// Non-capturing closures coerce to this type.
pub type Interpolate<D, R, O> = fn(D, &R, &R) -> O;

/// Linear interpolation between two numbers, `start + (stop - start) * t`.
///
/// Evaluated as `start * (1 - t) + stop * t` so both endpoints come back
/// bit-for-bit.
///
/// ```rust
/// use skala::interpolate::interpolate_number;
///
/// assert_eq!(interpolate_number(0.5, &0.0, &10.0), 5.0);
/// assert_eq!(interpolate_number(1.0, &0.1, &0.7), 0.7);
/// assert_eq!(interpolate_number(1.5, &0.0, &10.0), 15.0);
/// ```
pub fn interpolate_number<D: Float>(t: D, start: &D, stop: &D) -> D {
    *start * (D::one() - t) + *stop * t
}

/// Per-channel interpolation between two colors, encoded as `#rrggbb`.
///
/// Channels are truncated toward zero, so the midpoint of 255 and 0 is 127
/// (`7f`).
///
/// For `t` outside `[0, 1]` the channels are saturated into `0..=255`
/// rather than left unclamped, so `#rrggbb` stays well formed: an
/// extrapolated channel of -40 encodes as `00` and one of 300 as `ff`. A NaN
/// channel encodes as `00`.
///
/// ```rust
/// use skala::{Rgb, interpolate::interpolate_color};
///
/// let red = Rgb::new(255, 0, 0);
/// let blue = Rgb::new(0, 0, 255);
/// assert_eq!(interpolate_color(0.5, &red, &blue), "#7f007f");
/// ```
pub fn interpolate_color<D: Float>(t: D, start: &Rgb, stop: &Rgb) -> String {
    Rgb::new(
        channel(t, start.r, stop.r),
        channel(t, start.g, stop.g),
        channel(t, start.b, stop.b),
    )
    .to_hex()
}

fn channel<D: Float>(t: D, start: u8, stop: u8) -> u8 {
    let (Some(a), Some(b)) = (D::from(start), D::from(stop)) else {
        return start;
    };

    // NaN maps to 0
    interpolate_number(t, &a, &b)
        .trunc()
        .to_f64()
        .map_or(0, |value| value.clamp(0.0, 255.0) as u8)
}
