//! Scalar types shared by every model and the [`Space`] that names each model.

use std::fmt;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all real valued components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all real valued components are stored as.
pub type Component = f64;

/// Represent the three components that describe most colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// Every color model known to the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// sRGB with integer channels in 0..=255. The hub of every conversion.
    Rgb = 0,
    /// Textual `#RRGGBB` encoding of [`Space::Rgb`].
    Hex = 1,
    /// Hue, saturation and lightness over sRGB.
    Hsl = 2,
    /// CIELCh, the polar form of [`Space::Lab`].
    Hcl = 3,
    /// The polar form of [`Space::Oklab`].
    Oklch = 4,
    /// Subtractive print model with percent channels.
    Cmyk = 5,
    /// sRGB with the transfer function removed.
    SrgbLinear = 6,
    /// CIE-XYZ relative to a D65 white point.
    XyzD65 = 7,
    /// CIE-Lab relative to a D65 white point.
    Lab = 8,
    /// Oklab.
    Oklab = 9,
}

impl Space {
    /// The user facing spaces, in the order they are usually listed.
    pub const PRIMARY: [Space; 6] = [
        Space::Hex,
        Space::Rgb,
        Space::Hsl,
        Space::Hcl,
        Space::Oklch,
        Space::Cmyk,
    ];

    /// Short upper case name of the space.
    pub fn name(&self) -> &'static str {
        match self {
            Space::Rgb => "RGB",
            Space::Hex => "HEX",
            Space::Hsl => "HSL",
            Space::Hcl => "HCL",
            Space::Oklch => "OKLCH",
            Space::Cmyk => "CMYK",
            Space::SrgbLinear => "sRGB-linear",
            Space::XyzD65 => "XYZ-D65",
            Space::Lab => "Lab",
            Space::Oklab => "Oklab",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Implemented by every model to name the space it lives in.
pub trait HasSpace {
    /// The space of the model.
    const SPACE: Space;
}
