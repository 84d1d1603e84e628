//! Each color space/form is modeled with its own type. Conversions are only
//! implemented on relevant models, and [`Color`] ties them together when the
//! source space is only known at runtime.
//!
//! Every conversion between the user facing spaces pivots through [`Rgb`].
//! Lab and HCL share a direct hop, as do Oklab and Oklch. The linear light
//! intermediates convert between each other without quantizing to 8-bit
//! channels.
//!
//! ```rust
//! use tincture::{models::Hex, Color, Space};
//! let color = Color::from(Hex::new("#FF5733"));
//! let hsl = color.to_space(Space::Hsl).unwrap();
//! assert_eq!(hsl.to_string(), "h=10.59°, s=100.00%, l=60.00%");
//! ```

use std::fmt;

use crate::{
    color::{HasSpace, Space},
    error::{ConvertError, ParseError},
    models::{
        Cmyk, Hcl, Hex, Hsl, Lab, Oklab, Oklch, Rgb, SrgbLinear, ToLinearLight, ToXyz, XyzD65,
    },
};

/// A color in any of the supported models.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// See [`Hex`].
    Hex(Hex),
    /// See [`Rgb`].
    Rgb(Rgb),
    /// See [`Hsl`].
    Hsl(Hsl),
    /// See [`Hcl`].
    Hcl(Hcl),
    /// See [`Oklch`].
    Oklch(Oklch),
    /// See [`Cmyk`].
    Cmyk(Cmyk),
    /// See [`SrgbLinear`].
    SrgbLinear(SrgbLinear),
    /// See [`XyzD65`].
    XyzD65(XyzD65),
    /// See [`Lab`].
    Lab(Lab),
    /// See [`Oklab`].
    Oklab(Oklab),
}

macro_rules! impl_from_model {
    ($($model:ident),*) => {
        $(
            impl From<$model> for Color {
                fn from(value: $model) -> Self {
                    Color::$model(value)
                }
            }
        )*
    };
}

impl_from_model!(Hex, Rgb, Hsl, Hcl, Oklch, Cmyk, SrgbLinear, XyzD65, Lab, Oklab);

/// The result of converting one color to every user facing space.
///
/// Each target fails independently, so a failure in one never hides the
/// others.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversions {
    /// The color as `#RRGGBB`.
    pub hex: Result<Hex, ConvertError>,
    /// The color as sRGB channels.
    pub rgb: Result<Rgb, ConvertError>,
    /// The color in HSL notation.
    pub hsl: Result<Hsl, ConvertError>,
    /// The color in HCL (CIELCh).
    pub hcl: Result<Hcl, ConvertError>,
    /// The color in Oklch.
    pub oklch: Result<Oklch, ConvertError>,
    /// The color as print ink coverage.
    pub cmyk: Result<Cmyk, ConvertError>,
}

impl Color {
    /// Parse `input` as a color in the given space. Hex input is normalized
    /// to `#RRGGBB`, other spaces expect their components separated by
    /// commas or whitespace.
    pub fn parse(space: Space, input: &str) -> Result<Self, ParseError> {
        use Space as S;

        Ok(match space {
            S::Hex => input.parse::<Hex>()?.into(),
            S::Rgb => input.parse::<Rgb>()?.into(),
            S::Hsl => input.parse::<Hsl>()?.into(),
            S::Hcl => input.parse::<Hcl>()?.into(),
            S::Oklch => input.parse::<Oklch>()?.into(),
            S::Cmyk => input.parse::<Cmyk>()?.into(),
            S::SrgbLinear => input.parse::<SrgbLinear>()?.into(),
            S::XyzD65 => input.parse::<XyzD65>()?.into(),
            S::Lab => input.parse::<Lab>()?.into(),
            S::Oklab => input.parse::<Oklab>()?.into(),
        })
    }

    /// The space of the wrapped model.
    pub fn space(&self) -> Space {
        match self {
            Color::Hex(_) => Hex::SPACE,
            Color::Rgb(_) => Rgb::SPACE,
            Color::Hsl(_) => Hsl::SPACE,
            Color::Hcl(_) => Hcl::SPACE,
            Color::Oklch(_) => Oklch::SPACE,
            Color::Cmyk(_) => Cmyk::SPACE,
            Color::SrgbLinear(_) => SrgbLinear::SPACE,
            Color::XyzD65(_) => XyzD65::SPACE,
            Color::Lab(_) => Lab::SPACE,
            Color::Oklab(_) => Oklab::SPACE,
        }
    }

    /// Convert to sRGB, the hub every other conversion passes through.
    pub fn to_rgb(&self) -> Result<Rgb, ConvertError> {
        match self {
            Color::Hex(hex) => hex.to_rgb(),
            Color::Rgb(rgb) => {
                rgb.validate()?;
                Ok(*rgb)
            }
            Color::Hsl(hsl) => hsl.to_rgb(),
            Color::Hcl(hcl) => hcl.to_rgb(),
            Color::Oklch(oklch) => oklch.to_rgb(),
            Color::Cmyk(cmyk) => cmyk.to_rgb(),
            Color::SrgbLinear(_) | Color::XyzD65(_) | Color::Lab(_) | Color::Oklab(_) => {
                Ok(self.to_linear_light()?.to_gamma_encoded())
            }
        }
    }

    /// Convert to `#RRGGBB`.
    pub fn to_hex(&self) -> Result<Hex, ConvertError> {
        match self {
            Color::Hex(hex) => Ok(hex.as_str().parse::<Hex>()?),
            _ => self.to_rgb()?.to_hex(),
        }
    }

    /// Convert to HSL.
    pub fn to_hsl(&self) -> Result<Hsl, ConvertError> {
        match self {
            Color::Hsl(hsl) => {
                hsl.validate()?;
                Ok(*hsl)
            }
            _ => self.to_rgb()?.to_hsl(),
        }
    }

    /// Convert to HCL.
    pub fn to_hcl(&self) -> Result<Hcl, ConvertError> {
        match self {
            Color::Hcl(hcl) => {
                hcl.validate()?;
                Ok(*hcl)
            }
            Color::Lab(lab) => {
                let hcl = lab.to_polar();
                hcl.validate()?;
                Ok(hcl)
            }
            _ => self.to_rgb()?.to_hcl(),
        }
    }

    /// Convert to Oklch.
    pub fn to_oklch(&self) -> Result<Oklch, ConvertError> {
        match self {
            Color::Oklch(oklch) => {
                oklch.validate()?;
                Ok(*oklch)
            }
            Color::Oklab(oklab) => {
                let oklch = oklab.to_polar();
                oklch.validate()?;
                Ok(oklch)
            }
            _ => self.to_rgb()?.to_oklch(),
        }
    }

    /// Convert to CMYK.
    pub fn to_cmyk(&self) -> Result<Cmyk, ConvertError> {
        match self {
            Color::Cmyk(cmyk) => {
                cmyk.validate()?;
                Ok(*cmyk)
            }
            _ => self.to_rgb()?.to_cmyk(),
        }
    }

    /// Convert to linear light sRGB. Only the user facing spaces are
    /// quantized to 8-bit channels on the way.
    pub fn to_linear_light(&self) -> Result<SrgbLinear, ConvertError> {
        Ok(match self {
            Color::SrgbLinear(linear) => *linear,
            Color::XyzD65(xyz) => SrgbLinear::from(*xyz),
            Color::Lab(lab) => lab.to_linear_light(),
            Color::Oklab(oklab) => oklab.to_linear_light(),
            _ => self.to_rgb()?.to_linear_light(),
        })
    }

    /// Convert to CIE-XYZ.
    pub fn to_xyz(&self) -> Result<XyzD65, ConvertError> {
        match self {
            Color::XyzD65(xyz) => Ok(*xyz),
            Color::Lab(lab) => Ok(lab.to_xyz()),
            _ => Ok(self.to_linear_light()?.to_xyz()),
        }
    }

    /// Convert to CIE-Lab.
    pub fn to_lab(&self) -> Result<Lab, ConvertError> {
        match self {
            Color::Lab(lab) => Ok(*lab),
            Color::Hcl(hcl) => {
                hcl.validate()?;
                Ok(hcl.to_rectangular())
            }
            _ => Ok(Lab::from(self.to_xyz()?)),
        }
    }

    /// Convert to Oklab.
    pub fn to_oklab(&self) -> Result<Oklab, ConvertError> {
        match self {
            Color::Oklab(oklab) => Ok(*oklab),
            Color::Oklch(oklch) => {
                oklch.validate()?;
                Ok(oklch.to_rectangular())
            }
            _ => Ok(Oklab::from(self.to_linear_light()?)),
        }
    }

    /// Convert this color from its current space to the specified space.
    /// Converting to the same space validates and returns the color
    /// unchanged, except hex which is normalized to `#RRGGBB`.
    pub fn to_space(&self, space: Space) -> Result<Self, ConvertError> {
        use Space as S;

        Ok(match space {
            S::Hex => self.to_hex()?.into(),
            S::Rgb => self.to_rgb()?.into(),
            S::Hsl => self.to_hsl()?.into(),
            S::Hcl => self.to_hcl()?.into(),
            S::Oklch => self.to_oklch()?.into(),
            S::Cmyk => self.to_cmyk()?.into(),
            S::SrgbLinear => self.to_linear_light()?.into(),
            S::XyzD65 => self.to_xyz()?.into(),
            S::Lab => self.to_lab()?.into(),
            S::Oklab => self.to_oklab()?.into(),
        })
    }

    /// Convert to every user facing space at once.
    pub fn fan_out(&self) -> Conversions {
        Conversions {
            hex: self.to_hex(),
            rgb: self.to_rgb(),
            hsl: self.to_hsl(),
            hcl: self.to_hcl(),
            oklch: self.to_oklch(),
            cmyk: self.to_cmyk(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(c) => fmt::Display::fmt(c, f),
            Color::Rgb(c) => fmt::Display::fmt(c, f),
            Color::Hsl(c) => fmt::Display::fmt(c, f),
            Color::Hcl(c) => fmt::Display::fmt(c, f),
            Color::Oklch(c) => fmt::Display::fmt(c, f),
            Color::Cmyk(c) => fmt::Display::fmt(c, f),
            Color::SrgbLinear(c) => fmt::Display::fmt(c, f),
            Color::XyzD65(c) => fmt::Display::fmt(c, f),
            Color::Lab(c) => fmt::Display::fmt(c, f),
            Color::Oklab(c) => fmt::Display::fmt(c, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::Component;

    fn components(color: &Color) -> Vec<Component> {
        match color {
            Color::Hex(hex) => components(&hex.to_rgb().unwrap().into()),
            Color::Rgb(c) => vec![c.red as Component, c.green as Component, c.blue as Component],
            Color::Hsl(c) => vec![c.hue, c.saturation, c.lightness],
            Color::Hcl(c) => vec![c.lightness, c.chroma, c.hue],
            Color::Oklch(c) => vec![c.lightness, c.chroma, c.hue],
            Color::Cmyk(c) => vec![c.cyan, c.magenta, c.yellow, c.key],
            Color::SrgbLinear(c) => vec![c.red, c.green, c.blue],
            Color::XyzD65(c) => vec![c.x, c.y, c.z],
            Color::Lab(c) => vec![c.lightness, c.a, c.b],
            Color::Oklab(c) => vec![c.lightness, c.a, c.b],
        }
    }

    #[test]
    #[allow(clippy::excessive_precision)]
    fn test_conversions() {
        // rgb(210, 105, 30) in every model.
        #[rustfmt::skip]
        let chocolate: [Color; 10] = [
            Hex::new("#D2691E").into(),
            Rgb::new(210, 105, 30).into(),
            Hsl::new(25.000000000, 0.750000000, 0.470588235).into(),
            Hcl::new(55.990059500, 67.767300989, 56.854778136).into(),
            Oklch::new(0.634398417, 0.154992415, 50.266483083).into(),
            Cmyk::new(0.000000000, 50.000000000, 85.714285714, 17.647058824).into(),
            SrgbLinear::new(0.644479682, 0.141263291, 0.012983032).into(),
            XyzD65::new(0.318674772, 0.239025167, 0.041635589).into(),
            Lab::new(55.990059500, 37.052651262, 56.740709528).into(),
            Oklab::new(0.634398417, 0.099073910, 0.119193160).into(),
        ];

        for source in &chocolate {
            for expected in &chocolate {
                println!("{} -> {}", source.space(), expected.space());
                let dest = source.to_space(expected.space()).unwrap();
                assert_eq!(dest.space(), expected.space());
                for (actual, expected) in components(&dest).into_iter().zip(components(expected)) {
                    assert_component_eq!(actual, expected, 1.0e-4);
                }
            }
        }
    }

    #[test]
    fn hex_identity_is_normalized() {
        let hex = Color::from(Hex::new("#d2691e")).to_space(Space::Hex).unwrap();
        assert_eq!(hex, Color::Hex(Hex::new("#D2691E")));
        assert!(Color::from(Hex::new("#12")).to_space(Space::Hex).is_err());
    }

    #[test]
    fn identity_still_validates() {
        let rgb = Color::from(Rgb::new(0, 0, 256));
        assert!(rgb.to_space(Space::Rgb).is_err());
        let hcl = Color::from(Hcl::new(50.0, 10.0, 400.0));
        assert!(hcl.to_space(Space::Hcl).is_err());
        assert!(hcl.to_space(Space::Lab).is_err());
    }

    #[test]
    fn fan_out_failures_are_independent() {
        let conversions = Color::from(Hex::new("#FF5733")).fan_out();
        assert_eq!(conversions.rgb, Ok(Rgb::new(255, 87, 51)));
        assert_eq!(conversions.hex, Ok(Hex::new("#FF5733")));
        assert!(conversions.hsl.is_ok());
        assert!(conversions.hcl.is_ok());
        assert!(conversions.oklch.is_ok());
        assert!(conversions.cmyk.is_ok());

        // Every sibling fails on its own when the input cannot be parsed.
        let conversions = Color::from(Hex::new("#12")).fan_out();
        let expected = ConvertError::Parse(ParseError::Length(2));
        assert_eq!(conversions.hex, Err(expected.clone()));
        assert_eq!(conversions.rgb, Err(expected));
        assert!(conversions.hsl.is_err());
        assert!(conversions.hcl.is_err());
        assert!(conversions.oklch.is_err());
        assert!(conversions.cmyk.is_err());
    }

    #[test]
    fn direct_polar_hops_validate_the_result() {
        let lab = Color::from(Lab::new(150.0, 0.0, 0.0));
        assert!(matches!(
            lab.to_hcl(),
            Err(ConvertError::InvalidValue {
                space: Space::Hcl,
                ..
            })
        ));
        assert!(lab.to_space(Space::Hcl).is_err());

        let oklab = Color::from(Oklab::new(-0.5, 0.0, 0.0));
        assert!(matches!(
            oklab.to_oklch(),
            Err(ConvertError::InvalidValue {
                space: Space::Oklch,
                ..
            })
        ));
        assert!(oklab.to_space(Space::Oklch).is_err());

        let lab = Color::from(Lab::new(50.0, 20.0, -20.0));
        assert!(lab.to_hcl().unwrap().is_valid());
    }

    #[test]
    fn invalid_source_fails_every_target() {
        let color = Color::from(Oklch::new(2.0, 0.1, 10.0));
        for space in Space::PRIMARY {
            let err = color.to_space(space).unwrap_err();
            assert!(
                matches!(
                    err,
                    ConvertError::InvalidValue {
                        space: Space::Oklch,
                        ..
                    }
                ),
                "{space}: {err}"
            );
        }
    }

    #[test]
    fn parse_by_space() {
        let color = Color::parse(Space::Rgb, "255 87 51").unwrap();
        assert_eq!(color, Color::Rgb(Rgb::new(255, 87, 51)));
        let color = Color::parse(Space::Hex, " ff5733").unwrap();
        assert_eq!(color.to_string(), "#FF5733");
        assert_eq!(
            Color::parse(Space::Cmyk, "1 2 3"),
            Err(ParseError::Components {
                expected: 4,
                got: 3
            })
        );
        assert_eq!(
            Color::parse(Space::Hcl, "50, x, 10"),
            Err(ParseError::Number("x".to_string()))
        );
    }

    #[test]
    fn display_matches_the_model() {
        let color = Color::from(Cmyk::new(0.0, 65.882, 80.0, 0.0));
        assert_eq!(color.to_string(), "C=0.000, M=65.882, Y=80.000, K=0.000");
        assert_eq!(Color::from(Rgb::new(1, 2, 3)).to_string(), "rgb(1, 2, 3)");
    }
}
