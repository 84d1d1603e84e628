//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a transform from a 3x3 matrix given in column order, so each group
/// of three values holds the contributions of one input component.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Wrap a hue in degrees into [0, 360).
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let full = <T as num_traits::NumCast>::from(360.0_f64).unwrap_or_else(T::max_value);
    let wrapped = hue % full;
    let wrapped = if wrapped < T::zero() {
        wrapped + full
    } else {
        wrapped
    };
    // Adding a full turn to a tiny negative value can round up to exactly 360.
    if wrapped >= full {
        T::zero()
    } else {
        wrapped
    }
}

/// Scale a unit value to a 0..=255 channel, clamping first.
pub fn to_channel(value: Component) -> i32 {
    (num_traits::clamp(value, 0.0, 1.0) * 255.0).round() as i32
}

/// Scale a 0..=255 channel to a unit value.
pub fn from_channel(value: i32) -> Component {
    value as Component / 255.0
}
