//! Textual `#RRGGBB` encoding of sRGB colors.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    color::{HasSpace, Space},
    error::{ConvertError, ParseError},
    models::{Cmyk, Hcl, Hsl, Oklch, Rgb},
};

static HEX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^#?([a-fA-F0-9]{6}|[a-fA-F0-9]{3})$").expect("Failed to compile hex color regex")
});

/// Returns true if `value`, ignoring surrounding whitespace, is an optional
/// `#` followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex(value: &str) -> bool {
    HEX_REGEX.is_match(value.trim())
}

/// A color written as hex digits, such as `#FF5733`, `ff5733` or `#f53`.
///
/// The text is kept as given and only parsed when converted. Use
/// [`str::parse`] to get a validated value normalized to `#RRGGBB`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hex(String);

impl HasSpace for Hex {
    const SPACE: Space = Space::Hex;
}

impl Hex {
    /// Wrap the given text without validating it.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The text as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// See [`is_valid_hex`].
    pub fn is_valid(&self) -> bool {
        is_valid_hex(&self.0)
    }

    /// Parse the digits into sRGB channels. 3 digit shorthand doubles each
    /// digit, so `abc` reads as `aabbcc`.
    pub fn to_rgb(&self) -> Result<Rgb, ConvertError> {
        let [red, green, blue] = parse_channels(&self.0).inspect_err(|err| {
            tracing::debug!(input = %self.0, %err, "rejecting hex color");
        })?;
        Ok(Rgb::new(red.into(), green.into(), blue.into()))
    }

    /// Convert to HSL.
    pub fn to_hsl(&self) -> Result<Hsl, ConvertError> {
        self.to_rgb()?.to_hsl()
    }

    /// Convert to HCL.
    pub fn to_hcl(&self) -> Result<Hcl, ConvertError> {
        self.to_rgb()?.to_hcl()
    }

    /// Convert to Oklch.
    pub fn to_oklch(&self) -> Result<Oklch, ConvertError> {
        self.to_rgb()?.to_oklch()
    }

    /// Convert to CMYK.
    pub fn to_cmyk(&self) -> Result<Cmyk, ConvertError> {
        self.to_rgb()?.to_cmyk()
    }
}

#[cfg(feature = "random")]
impl Hex {
    /// Draw a uniformly random color from the thread local generator.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Draw a uniformly random color from `rng`.
    pub fn random_with<R: rand::Rng>(rng: &mut R) -> Self {
        let red: u8 = rng.random();
        let green: u8 = rng.random();
        let blue: u8 = rng.random();
        tracing::trace!(red, green, blue, "drew random color");
        Self(format!("#{red:02X}{green:02X}{blue:02X}"))
    }

    /// Draw `count` independent random colors from `rng`.
    pub fn random_batch<R: rand::Rng>(rng: &mut R, count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::random_with(rng)).collect()
    }
}

fn parse_channels(value: &str) -> Result<[u8; 3], ParseError> {
    let value = value.trim();
    let digits = value.strip_prefix('#').unwrap_or(value);

    let count = digits.chars().count();
    if count != 3 && count != 6 {
        return Err(ParseError::Length(count));
    }

    let nibbles = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ParseError::Digit(c))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match nibbles[..] {
        [r, g, b] => Ok([r * 17, g * 17, b * 17]),
        [r1, r0, g1, g0, b1, b0] => Ok([r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0]),
        _ => Err(ParseError::Length(nibbles.len())),
    }
}

impl FromStr for Hex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [red, green, blue] = parse_channels(s)?;
        Ok(Self(format!("#{red:02X}{green:02X}{blue:02X}")))
    }
}

impl From<&str> for Hex {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Hex {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Hex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
