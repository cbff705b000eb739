use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaleError};

/// An 8-bit RGB color, the input type of [`interpolate_color`](crate::interpolate::interpolate_color).
///
/// Serializes as a plain `[r, g, b]` array.
///
/// ```rust
/// use skala::Rgb;
///
/// let red = Rgb::from_hex("#ff0000").unwrap();
/// assert_eq!(red, Rgb::new(255, 0, 0));
/// assert_eq!(red.to_hex(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` string. Hex digits may be either case.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || ScaleError::InvalidHexColor(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb` encoding.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}
