//! Time scale over UTC timestamps.
//!
//! Instants are reduced to epoch milliseconds and mapped linearly, so ticks
//! land on round millisecond counts rather than calendar boundaries.

use std::fmt;

use chrono::{DateTime, Utc};

use super::{Invert, Linear, Nice, Scale, TickIter, Ticks};
use crate::interpolate::{Interpolate, interpolate_number};

/// Linear scale over `DateTime<Utc>`.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use skala::{Scale, scale::Time};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap();
/// let scale = Time::new((start, end), (0.0, 100.0));
///
/// let day_five = Utc.with_ymd_and_hms(2024, 1, 6, 0, 0, 0).unwrap();
/// assert_eq!(scale.apply(&day_five), 50.0);
/// ```
#[derive(Clone)]
pub struct Time<R = f64, O = f64> {
    min: DateTime<Utc>,
    max: DateTime<Utc>,
    linear: Linear<f64, R, O>,
}

impl Time {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        Self::with_interpolator(domain, range, interpolate_number)
    }
}

impl<R, O> Time<R, O> {
    pub fn with_interpolator(domain: (DateTime<Utc>, DateTime<Utc>), range: (R, R), interpolate: Interpolate<f64, R, O>) -> Self {
        let (min, max) = domain;
        Self {
            min,
            max,
            linear: Linear::with_interpolator((epoch_ms(&min), epoch_ms(&max)), range, interpolate),
        }
    }

    pub fn domain(&self) -> (&DateTime<Utc>, &DateTime<Utc>) {
        (&self.min, &self.max)
    }

    pub fn range(&self) -> (&R, &R) {
        self.linear.range()
    }
}

fn epoch_ms(instant: &DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64
}

/// Instant for `ms`, saturating at the limits chrono can represent.
fn from_epoch_ms(ms: f64) -> DateTime<Utc> {
    // `as` saturates and sends NaN to 0
    DateTime::from_timestamp_millis(ms.round() as i64).unwrap_or(if ms < 0.0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

impl<R, O> Scale for Time<R, O> {
    type Input = DateTime<Utc>;
    type Output = O;

    fn apply(&self, value: &DateTime<Utc>) -> O {
        self.linear.apply(&epoch_ms(value))
    }
}

impl<R, O> Ticks for Time<R, O> {
    type Tick = DateTime<Utc>;

    fn ticks(&self, count: usize) -> TickIter<DateTime<Utc>> {
        let ticks = self.linear.ticks(count);
        TickIter::new(ticks.filter_map(|ms| DateTime::from_timestamp_millis(ms as i64)))
    }
}

impl<R, O> Nice for Time<R, O> {
    fn nice(self, count: usize) -> Self {
        let linear = self.linear.nice(count);
        let (min, max) = (*linear.domain().0, *linear.domain().1);
        Self {
            min: from_epoch_ms(min),
            max: from_epoch_ms(max),
            linear,
        }
    }
}

impl Invert for Time {
    fn invert(&self, output: &f64) -> DateTime<Utc> {
        from_epoch_ms(self.linear.invert(output))
    }
}

impl<R: fmt::Debug, O> fmt::Debug for Time<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Time")
            .field("domain", &(self.min, self.max))
            .field("range", &self.linear.range())
            .finish_non_exhaustive()
    }
}
