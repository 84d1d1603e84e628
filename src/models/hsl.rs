//! Model a color with the HSL notation in the sRGB color space.

use std::fmt;

use crate::{
    color::{Component, HasSpace, Space},
    error::ConvertError,
    math::{normalize_hue, to_channel},
    models::{Cmyk, Hcl, Hex, Oklch, Rgb},
};

tincture_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    ///
    /// Saturation and lightness are fractions. Percentages only appear at the
    /// edges, see [`Hsl::from_percent`] and [`Hsl::to_percent`].
    pub struct Hsl {
        /// The hue component of the color, in degrees. Any finite hue is
        /// accepted and wrapped into [0, 360) before use.
        #[range(Component::MIN..=Component::MAX)]
        pub hue: Component,
        /// The saturation component of the color.
        #[range(0.0..=1.0)]
        pub saturation: Component,
        /// The lightness component of the color.
        #[range(0.0..=1.0)]
        pub lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}

impl Hsl {
    /// Create a color from saturation and lightness given as percentages.
    pub fn from_percent(hue: Component, saturation: Component, lightness: Component) -> Self {
        Self::new(hue, saturation / 100.0, lightness / 100.0)
    }

    /// Return the hue in degrees with saturation and lightness as
    /// percentages.
    pub fn to_percent(&self) -> (Component, Component, Component) {
        (self.hue, self.saturation * 100.0, self.lightness * 100.0)
    }

    /// Return the same color with its hue wrapped into [0, 360).
    pub fn normalized(&self) -> Self {
        Self::new(normalize_hue(self.hue), self.saturation, self.lightness)
    }

    /// Convert to sRGB.
    pub fn to_rgb(&self) -> Result<Rgb, ConvertError> {
        self.validate()?;

        let Hsl {
            hue,
            saturation,
            lightness,
        } = self.normalized();

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (r, g, b) = match (hue / 60.0) as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Ok(Rgb::new(
            to_channel(r + m),
            to_channel(g + m),
            to_channel(b + m),
        ))
    }

    /// Convert to `#RRGGBB`.
    pub fn to_hex(&self) -> Result<Hex, ConvertError> {
        self.to_rgb()?.to_hex()
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

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hue, saturation, lightness) = self.to_percent();
        write!(f, "h={hue:.2}°, s={saturation:.2}%, l={lightness:.2}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hue_wraps_before_conversion() {
        let negative = Hsl::from_percent(-30.0, 100.0, 50.0).to_rgb().unwrap();
        let positive = Hsl::from_percent(330.0, 100.0, 50.0).to_rgb().unwrap();
        assert_eq!(negative, positive);
        assert_eq!(positive, Rgb::new(255, 0, 128));

        let over = Hsl::new(480.0, 1.0, 0.5).to_rgb().unwrap();
        assert_eq!(over, Hsl::new(120.0, 1.0, 0.5).to_rgb().unwrap());
    }

    #[test]
    fn every_sector_maps_to_its_primary() {
        let cases = [
            (0.0, Rgb::new(255, 0, 0)),
            (60.0, Rgb::new(255, 255, 0)),
            (120.0, Rgb::new(0, 255, 0)),
            (180.0, Rgb::new(0, 255, 255)),
            (240.0, Rgb::new(0, 0, 255)),
            (300.0, Rgb::new(255, 0, 255)),
        ];
        for (hue, expected) in cases {
            assert_eq!(Hsl::new(hue, 1.0, 0.5).to_rgb().unwrap(), expected, "hue {hue}");
        }
    }

    #[test]
    fn saturation_and_lightness_are_checked() {
        assert!(Hsl::new(0.0, 1.5, 0.5).to_rgb().is_err());
        assert!(Hsl::new(0.0, 0.5, -0.1).to_rgb().is_err());
        assert!(Hsl::new(Component::NAN, 0.5, 0.5).to_rgb().is_err());
        assert!(Hsl::new(Component::INFINITY, 0.5, 0.5).to_rgb().is_err());
        assert!(Hsl::new(-720.0, 0.5, 0.5).is_valid());
    }

    #[test]
    fn gray_and_extremes() {
        assert_eq!(Hsl::new(200.0, 0.0, 0.5).to_rgb().unwrap(), Rgb::new(128, 128, 128));
        assert_eq!(Hsl::new(10.0, 1.0, 0.0).to_hex().unwrap().as_str(), "#000000");
        assert_eq!(Hsl::new(10.0, 1.0, 1.0).to_hex().unwrap().as_str(), "#FFFFFF");
    }

    #[test]
    fn percent_boundary() {
        let hsl = Hsl::from_percent(11.0, 100.0, 60.0);
        assert_eq!(hsl.saturation, 1.0);
        assert_eq!(hsl.to_string(), "h=11.00°, s=100.00%, l=60.00%");
        let (_, s, l) = hsl.to_percent();
        assert_component_eq!(s, 100.0, 1.0e-3);
        assert_component_eq!(l, 60.0, 1.0e-3);
    }

    #[test]
    fn to_oklch_composes_through_rgb() {
        let hsl = Hsl::from_percent(0.0, 100.0, 50.0);
        assert_eq!(hsl.to_oklch().unwrap(), Rgb::new(255, 0, 0).to_oklch().unwrap());
        assert_eq!(hsl.to_cmyk().unwrap(), Cmyk::new(0.0, 100.0, 100.0, 0.0));
    }
}
