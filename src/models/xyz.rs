//! Model a color in the CIE-XYZ color space.

use std::fmt;

use crate::color::{Component, Components, HasSpace, Space};

/// A reference white used to normalize CIE-XYZ values.
pub trait WhitePoint: Clone + Copy + fmt::Debug + PartialEq {
    /// The tristimulus values of the reference white.
    const WHITE_POINT: Components;
}

/// CIE-XYZ color with a D65 white point reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D65;

impl WhitePoint for D65 {
    const WHITE_POINT: Components = Components(0.95047, 1.0, 1.08883);
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz<W: WhitePoint> {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz<W>;
}

tincture_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a specified white point reference.
    pub struct Xyz<W: WhitePoint> {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;

impl HasSpace for XyzD65 {
    const SPACE: Space = Space::XyzD65;
}

impl fmt::Display for XyzD65 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={:.4}, Y={:.4}, Z={:.4}", self.x, self.y, self.z)
    }
}
