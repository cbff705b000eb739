//! Scale mappings for charting
//!
//! `skala` provides the mathematical core of a charting library: mapping data
//! values (the domain) onto visual values (the range) and proposing round,
//! human-readable tick values for axes. It does no rendering.
//!
//! # Core Concepts
//!
//! ## Scales
//!
//! Every scale implements [`Scale`], a pure `apply(&input) -> output`.
//! Optional capabilities are separate traits: [`Ticks`], [`Nice`],
//! [`Invert`], [`Banded`] and [`Thresholded`].
//!
//! Continuous scales:
//! - [`scale::Linear`] - affine mapping, generic over any [`Float`]
//! - [`scale::Logarithmic`] - mapping through `ln(x)` for positive data
//! - [`scale::Time`] - linear mapping over `chrono::DateTime<Utc>`
//!
//! Discrete scales:
//! - [`scale::Ordinal`] - keys to range values by position
//! - [`scale::Band`] - keys to evenly spaced bands, or points via [`scale::Band::point`]
//! - [`scale::Threshold`] - cut points to buckets, including quantize and quantile
//! - [`scale::Identity`] - input unchanged
//!
//! ## Interpolators
//!
//! Continuous scales turn the normalized position `t` into an output with an
//! [`interpolate::Interpolate`] function: [`interpolate::interpolate_number`]
//! for numbers and [`interpolate::interpolate_color`] for [`Rgb`] ramps.
//!
//! ## Ticks
//!
//! [`scale::ticks`] snaps steps to 1, 2 or 5 times a power of ten, which
//! keeps labels short. [`Nice`] widens a domain to those steps.
//!
//! # Examples
//!
//! ## Linear Scale
//!
//! ```rust
//! use skala::{Invert, Scale, scale::Linear};
//!
//! let scale = Linear::new((0.0, 100.0), (0.0, 500.0));
//!
//! assert_eq!(scale.apply(&0.0), 0.0);
//! assert_eq!(scale.apply(&50.0), 250.0);
//! assert_eq!(scale.invert(&500.0), 100.0);
//! ```
//!
//! ## Nice Domain and Ticks
//!
//! ```rust
//! use skala::{Nice, Ticks, scale::Linear};
//!
//! let scale = Linear::new((0.13, 9.87), (0.0, 1.0)).nice(10);
//! assert_eq!(scale.domain(), (&0.0, &10.0));
//!
//! let ticks: Vec<f64> = scale.ticks(5).collect();
//! assert_eq!(ticks, [0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
//! ```
//!
//! ## Color Ramp
//!
//! ```rust
//! use skala::{Rgb, Scale, interpolate::interpolate_color, scale::Linear};
//!
//! let scale = Linear::with_interpolator((0.0, 1.0), (Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)), interpolate_color);
//! assert_eq!(scale.apply(&0.0), "#ff0000");
//! assert_eq!(scale.apply(&1.0), "#0000ff");
//! ```
//!
//! ## Discrete Scales
//!
//! ```rust
//! use skala::{Banded, Scale, scale::{Band, BandOptions, Ordinal}};
//!
//! let colors = Ordinal::new(vec!["apple", "banana"], vec!["red", "yellow"]).unwrap();
//! assert_eq!(colors.apply(&"banana"), "yellow");
//!
//! let x = Band::new(vec!["Q1", "Q2", "Q3", "Q4"], (0.0, 400.0), BandOptions::default()).unwrap();
//! assert_eq!(x.apply(&"Q3"), 200.0);
//! assert_eq!(x.band_width(), 100.0);
//! ```

pub mod array;
pub mod color;
pub mod error;
pub mod interpolate;
pub mod scale;

pub use color::Rgb;
pub use error::{Result, ScaleError};
pub use num_traits::Float;
pub use scale::{Banded, Invert, Nice, Scale, Thresholded, TickIter, Ticks};
