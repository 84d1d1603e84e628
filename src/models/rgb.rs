//! Model a color in the sRGB color space.

use std::fmt;

use crate::{
    color::{Component, Components, HasSpace, Space},
    error::ConvertError,
    math::{from_channel, to_channel, transform, transform_3x3, Transform},
    models::{Cmyk, Hcl, Hex, Hsl, Lab, Oklab, Oklch, ToXyz, Xyz, XyzD65, D65},
};

tincture_macros::gen_model! {
    /// A color in the sRGB color space with 8-bit integer channels.
    ///
    /// Channels are stored wide so values read from untrusted input can be
    /// held and rejected by [`Rgb::validate`].
    pub struct Rgb {
        /// The red channel.
        #[range(0..=255)]
        pub red: i32,
        /// The green channel.
        #[range(0..=255)]
        pub green: i32,
        /// The blue channel.
        #[range(0..=255)]
        pub blue: i32,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl Rgb {
    /// The channels scaled into [0, 1].
    fn to_unit(self) -> Components {
        Components(
            from_channel(self.red),
            from_channel(self.green),
            from_channel(self.blue),
        )
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(&self) -> Result<Hex, ConvertError> {
        self.validate()?;
        Ok(Hex::new(format!(
            "#{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue
        )))
    }

    /// Decompose into hue, saturation and lightness.
    pub fn to_hsl(&self) -> Result<Hsl, ConvertError> {
        self.validate()?;

        let Components(r, g, b) = self.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        // Achromatic, the hue is conventionally 0.
        if max == min {
            return Ok(Hsl::new(0.0, 0.0, lightness));
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Ok(Hsl::new(hue * 60.0, saturation, lightness))
    }

    /// Convert to the subtractive print model.
    pub fn to_cmyk(&self) -> Result<Cmyk, ConvertError> {
        self.validate()?;

        let Components(r, g, b) = self.to_unit();
        let key = 1.0 - r.max(g).max(b);

        if key == 1.0 {
            return Ok(Cmyk::new(0.0, 0.0, 0.0, 100.0));
        }

        let ink = |channel: Component| (1.0 - channel - key) / (1.0 - key) * 100.0;
        Ok(Cmyk::new(ink(r), ink(g), ink(b), key * 100.0))
    }

    /// Convert to CIELCh.
    pub fn to_hcl(&self) -> Result<Hcl, ConvertError> {
        self.validate()?;
        let lab = Lab::from(self.to_linear_light().to_xyz());
        Ok(lab.to_polar().with_lightness_in_range())
    }

    /// Convert to Oklch.
    pub fn to_oklch(&self) -> Result<Oklch, ConvertError> {
        self.validate()?;
        let oklab = Oklab::from(self.to_linear_light());
        Ok(oklab.to_polar().with_lightness_in_range())
    }

    /// Remove the sRGB transfer function.
    pub fn to_linear_light(&self) -> SrgbLinear {
        let Components(red, green, blue) = self.to_unit().map(|value| {
            if value <= 0.04045 {
                value / 12.92
            } else {
                ((value + 0.055) / 1.055).powf(2.4)
            }
        });
        SrgbLinear::new(red, green, blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

tincture_macros::gen_model! {
    /// A color in the sRGB color space with no gamma encoding.
    pub struct SrgbLinear {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl HasSpace for SrgbLinear {
    const SPACE: Space = Space::SrgbLinear;
}

impl SrgbLinear {
    /// Apply the sRGB transfer function. Components are clipped to [0, 1]
    /// first, then quantized to integer channels.
    pub fn to_gamma_encoded(&self) -> Rgb {
        let Components(red, green, blue) =
            Components(self.red, self.green, self.blue).map(|value| {
                let value = value.clamp(0.0, 1.0);
                if value <= 0.0031308 {
                    12.92 * value
                } else {
                    1.055 * value.powf(1.0 / 2.4) - 0.055
                }
            });
        Rgb::new(to_channel(red), to_channel(green), to_channel(blue))
    }
}

impl From<XyzD65> for SrgbLinear {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2404542, -0.9692660,  0.0556434,
            -1.5371385,  1.8760108, -0.2040259,
            -0.4985314,  0.0415560,  1.0572252,
        );

        let Components(red, green, blue) =
            transform(&FROM_XYZ, Components(value.x, value.y, value.z));
        Self::new(red, green, blue)
    }
}

impl ToXyz<D65> for SrgbLinear {
    fn to_xyz(&self) -> XyzD65 {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.2126729, 0.0193339,
            0.3575761, 0.7151522, 0.1191920,
            0.1804375, 0.0721750, 0.9503041,
        );

        let Components(x, y, z) = transform(&TO_XYZ, Components(self.red, self.green, self.blue));
        Xyz::new(x, y, z)
    }
}

impl fmt::Display for SrgbLinear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R={:.4}, G={:.4}, B={:.4}", self.red, self.green, self.blue)
    }
}
