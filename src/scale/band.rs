use serde::{Deserialize, Serialize};

use super::{Banded, Ordinal, Scale};
use crate::error::{Result, ScaleError};

/// Spacing of a [`Band`] scale, in units of one step.
///
/// ```rust
/// use skala::scale::BandOptions;
///
/// let options: BandOptions = serde_json::from_str(r#"{ "padding": 0.2 }"#).unwrap();
/// assert_eq!(options.margin(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BandOptions {
    /// Gap between adjacent bands; `0` makes them touch, `1` shrinks them to points.
    pub padding: f64,
    /// Gap before the first and after the last band. Defaults to `padding`.
    pub margin: Option<f64>,
}

impl BandOptions {
    pub fn margin(&self) -> f64 {
        self.margin.unwrap_or(self.padding)
    }
}

/// Discrete keys laid out as evenly spaced bands across a numeric range.
///
/// With `n` keys over `(r0, r1)`:
///
/// ```text
/// step       = (r1 - r0) / (2 * margin + n - padding)
/// band_width = step * (1 - padding)
/// key i      = r0 + margin * step + i * step
/// ```
///
/// Keys are matched structurally as in [`Ordinal`]; unknown keys map to the
/// first band.
///
/// # Examples
///
/// ```rust
/// use skala::{Banded, Scale, scale::{Band, BandOptions}};
///
/// let scale = Band::new(vec!["A", "B", "C"], (0.0, 300.0), BandOptions::default()).unwrap();
///
/// assert_eq!(scale.apply(&"B"), 100.0);
/// assert_eq!(scale.step(), 100.0);
/// assert_eq!(scale.band_width(), 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct Band<K> {
    ordinal: Ordinal<K, f64>,
    step: f64,
    band_width: f64,
}

impl<K: Serialize> Band<K> {
    /// Fails with [`ScaleError::EmptyDomain`] when there are no keys.
    ///
    /// Options that make `2 * margin + n - padding` zero, e.g. a single key
    /// with `padding = 1` and `margin = 0`, are not rejected: the step comes
    /// out infinite and every position NaN.
    pub fn new(domain: Vec<K>, range: (f64, f64), options: BandOptions) -> Result<Self> {
        if domain.is_empty() {
            log::debug!("rejecting band scale with an empty domain");
            return Err(ScaleError::EmptyDomain);
        }

        let (r0, r1) = range;
        let padding = options.padding;
        let margin = options.margin();
        let n = domain.len() as f64;

        let step = (r1 - r0) / (margin * 2.0 + n - padding);
        let band_width = step * (1.0 - padding);
        let positions = (0..domain.len()).map(|i| r0 + margin * step + step * i as f64).collect();

        Ok(Self {
            ordinal: Ordinal::new(domain, positions)?,
            step,
            band_width,
        })
    }

    /// Band scale with `padding = 1`: every key is a point, `band_width() == 0`.
    ///
    /// `margin` defaults to the padding, i.e. one step.
    ///
    /// ```rust
    /// use skala::{Banded, Scale, scale::Band};
    ///
    /// let scale = Band::point(vec!["A", "B", "C"], (0.0, 300.0), None).unwrap();
    ///
    /// assert_eq!(scale.apply(&"A"), 75.0);
    /// assert_eq!(scale.apply(&"C"), 225.0);
    /// assert_eq!(scale.band_width(), 0.0);
    /// ```
    pub fn point(domain: Vec<K>, range: (f64, f64), margin: Option<f64>) -> Result<Self> {
        Self::new(domain, range, BandOptions { padding: 1.0, margin })
    }

    pub fn domain(&self) -> &[K] {
        self.ordinal.domain()
    }
}

impl<K: Serialize> Scale for Band<K> {
    type Input = K;
    type Output = f64;

    fn apply(&self, key: &K) -> f64 {
        *self.ordinal.get(key)
    }
}

impl<K> Banded for Band<K> {
    fn band_width(&self) -> f64 {
        self.band_width
    }

    fn step(&self) -> f64 {
        self.step
    }
}
