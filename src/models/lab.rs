//! Models for rectangular and polar coordinate systems used to model CIE-Lab,
//! HCL (CIELCh), Oklab and Oklch.

use std::fmt;

use crate::{
    color::{Component, Components, HasSpace, Space},
    error::ConvertError,
    math::{normalize_hue, transform, transform_3x3, Transform},
    models::{Cmyk, Hex, Hsl, Rgb, SrgbLinear, ToXyz, WhitePoint, Xyz, XyzD65, D65},
};

mod space {
    use std::fmt;

    use crate::color::Component;

    pub trait Space: Clone + Copy + fmt::Debug + PartialEq {
        /// Upper bound of the lightness component.
        const MAX_LIGHTNESS: Component;
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Lab;

    impl Space for Lab {
        const MAX_LIGHTNESS: Component = 100.0;
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Oklab;

    impl Space for Oklab {
        const MAX_LIGHTNESS: Component = 1.0;
    }
}

tincture_macros::gen_model! {
    /// The model for a color specified in the rectangular orthogonal form.
    pub struct Rectangular<S: space::Space> {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

impl<S: space::Space> Rectangular<S> {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_polar(&self) -> Polar<S> {
        let chroma = self.a.hypot(self.b);
        let hue = normalize_hue(self.b.atan2(self.a).to_degrees());

        Polar::new(self.lightness, chroma, hue)
    }
}

tincture_macros::gen_model! {
    /// The model for a color specified in the cylindrical polar form.
    ///
    /// Chroma has no upper bound.
    pub struct Polar<S: space::Space> {
        /// The lightness component.
        #[range(0.0..=S::MAX_LIGHTNESS)]
        pub lightness: Component,
        /// The chroma component.
        #[range(0.0..)]
        pub chroma: Component,
        /// The hue component, in degrees.
        #[range(0.0..=360.0)]
        pub hue: Component,
    }
}

impl<S: space::Space> Polar<S> {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Rectangular<S> {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Rectangular::new(self.lightness, a, b)
    }

    /// Clip lightness into the valid range of the space. Values derived from
    /// in-gamut sRGB only leave the range through rounding noise.
    pub(crate) fn with_lightness_in_range(self) -> Self {
        Self {
            lightness: self.lightness.clamp(0.0, S::MAX_LIGHTNESS),
            ..self
        }
    }
}

/// Rectangular forms that can reach linear-light sRGB.
pub trait ToLinearLight {
    /// Convert to sRGB with no gamma encoding.
    fn to_linear_light(&self) -> SrgbLinear;
}

impl<S: space::Space> Polar<S>
where
    Self: HasSpace,
    Rectangular<S>: ToLinearLight,
{
    /// Convert to sRGB. Components leaving the sRGB gamut are clipped.
    pub fn to_rgb(&self) -> Result<Rgb, ConvertError> {
        self.validate()?;
        Ok(self.to_rectangular().to_linear_light().to_gamma_encoded())
    }

    /// Convert to `#RRGGBB`.
    pub fn to_hex(&self) -> Result<Hex, ConvertError> {
        self.to_rgb()?.to_hex()
    }

    /// Convert to HSL.
    pub fn to_hsl(&self) -> Result<Hsl, ConvertError> {
        self.to_rgb()?.to_hsl()
    }

    /// Convert to CMYK.
    pub fn to_cmyk(&self) -> Result<Cmyk, ConvertError> {
        self.to_rgb()?.to_cmyk()
    }
}

/// The model for a color specified in the CIE-Lab color space with the rectangular orthogonal form.
pub type Lab = Rectangular<space::Lab>;

impl HasSpace for Lab {
    const SPACE: Space = Space::Lab;
}

// Thresholds of the piecewise Lab function.
const EPSILON: Component = 0.008856;
const SLOPE: Component = 7.787;
const OFFSET: Component = 16.0 / 116.0;

impl From<XyzD65> for Lab {
    fn from(value: XyzD65) -> Self {
        let adapted = Components(
            value.x / D65::WHITE_POINT.0,
            value.y / D65::WHITE_POINT.1,
            value.z / D65::WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                SLOPE * v + OFFSET
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

impl ToXyz<D65> for Lab {
    fn to_xyz(&self) -> XyzD65 {
        let f1 = (self.lightness + 16.0) / 116.0;
        let f0 = self.a / 500.0 + f1;
        let f2 = f1 - self.b / 200.0;

        let Components(x, y, z) = Components(f0, f1, f2).map(|f| {
            let cubed = f * f * f;
            if cubed > EPSILON {
                cubed
            } else {
                (f - OFFSET) / SLOPE
            }
        });

        Xyz::new(
            x * D65::WHITE_POINT.0,
            y * D65::WHITE_POINT.1,
            z * D65::WHITE_POINT.2,
        )
    }
}

impl ToLinearLight for Lab {
    fn to_linear_light(&self) -> SrgbLinear {
        SrgbLinear::from(self.to_xyz())
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L={:.2}, a={:.2}, b={:.2}", self.lightness, self.a, self.b)
    }
}

/// The model for a color specified in the CIE-Lab color space with the
/// cylindrical polar form, also known as CIELCh.
pub type Hcl = Polar<space::Lab>;

impl HasSpace for Hcl {
    const SPACE: Space = Space::Hcl;
}

impl Hcl {
    /// Convert to Oklch. The conversion pivots through sRGB.
    pub fn to_oklch(&self) -> Result<Oklch, ConvertError> {
        self.to_rgb()?.to_oklch()
    }
}

impl fmt::Display for Hcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "h={:.2}°, c={:.2}, l={:.2}",
            self.hue, self.chroma, self.lightness
        )
    }
}

/// The model for a color specified in the oklab color space with the rectangular orthogonal form.
pub type Oklab = Rectangular<space::Oklab>;

impl HasSpace for Oklab {
    const SPACE: Space = Space::Oklab;
}

impl From<SrgbLinear> for Oklab {
    fn from(value: SrgbLinear) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const RGB_TO_LMS: Transform = transform_3x3(
            0.4122214708, 0.2119034982, 0.0883024619,
            0.5363325363, 0.6806995451, 0.2817188376,
            0.0514459929, 0.1073969566, 0.6299787005,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_OKLAB: Transform = transform_3x3(
             0.2104542553,  1.9779984951,  0.0259040371,
             0.7936177850, -2.4285922050,  0.7827717662,
            -0.0040720468,  0.4505937099, -0.8086757660,
        );

        let lms = transform(&RGB_TO_LMS, Components(value.red, value.green, value.blue));
        let lms = lms.map(|v| v.cbrt());
        let Components(lightness, a, b) = transform(&LMS_TO_OKLAB, lms);
        Oklab::new(lightness, a, b)
    }
}

impl ToLinearLight for Oklab {
    fn to_linear_light(&self) -> SrgbLinear {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const OKLAB_TO_LMS: Transform = transform_3x3(
            1.0,           1.0,           1.0,
            0.3963377774, -0.1055613458, -0.0894841775,
            0.2158037573, -0.0638541728, -1.2914855480,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_RGB: Transform = transform_3x3(
             4.0767416621, -1.2684380046, -0.0041960863,
            -3.3077115913,  2.6097574011, -0.7034186147,
             0.2309699292, -0.3413193965,  1.7076147010,
        );

        let lms = transform(&OKLAB_TO_LMS, Components(self.lightness, self.a, self.b));
        let lms = lms.map(|v| v * v * v);
        let Components(red, green, blue) = transform(&LMS_TO_RGB, lms);
        SrgbLinear::new(red, green, blue)
    }
}

impl fmt::Display for Oklab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L={:.3}, a={:.3}, b={:.3}", self.lightness, self.a, self.b)
    }
}

/// The model for a color specified in the oklab color space with the cylindrical polar form.
pub type Oklch = Polar<space::Oklab>;

impl HasSpace for Oklch {
    const SPACE: Space = Space::Oklch;
}

impl Oklch {
    /// Convert to HCL. The conversion pivots through sRGB.
    pub fn to_hcl(&self) -> Result<Hcl, ConvertError> {
        self.to_rgb()?.to_hcl()
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "L={:.3}, C={:.3}, H={:.2}°",
            self.lightness, self.chroma, self.hue
        )
    }
}
