//! Model a color in the subtractive CMYK print model.

use std::fmt;

use crate::{
    color::{Component, HasSpace, Space},
    error::ConvertError,
    math::to_channel,
    models::{Hcl, Hex, Hsl, Oklch, Rgb},
};

tincture_macros::gen_model! {
    /// A color specified as cyan, magenta, yellow and key (black) ink
    /// coverage, each a percentage.
    pub struct Cmyk {
        /// The cyan component of the color.
        #[range(0.0..=100.0)]
        pub cyan: Component,
        /// The magenta component of the color.
        #[range(0.0..=100.0)]
        pub magenta: Component,
        /// The yellow component of the color.
        #[range(0.0..=100.0)]
        pub yellow: Component,
        /// The key (black) component of the color.
        #[range(0.0..=100.0)]
        pub key: Component,
    }
}

impl HasSpace for Cmyk {
    const SPACE: Space = Space::Cmyk;
}

impl Cmyk {
    /// Convert to sRGB.
    pub fn to_rgb(&self) -> Result<Rgb, ConvertError> {
        self.validate()?;

        let key = self.key / 100.0;
        let channel = |ink: Component| to_channel(1.0 - (ink / 100.0 * (1.0 - key) + key).min(1.0));

        Ok(Rgb::new(
            channel(self.cyan),
            channel(self.magenta),
            channel(self.yellow),
        ))
    }

    /// Convert to `#RRGGBB`.
    pub fn to_hex(&self) -> Result<Hex, ConvertError> {
        self.to_rgb()?.to_hex()
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
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C={:.3}, M={:.3}, Y={:.3}, K={:.3}",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}
