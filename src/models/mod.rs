//! Models are structs that represent a color in a specified color space or
//! form. They represent a type safe way to convert between different color
//! spaces and forms.
//!
//! Every conversion pivots through [`Rgb`]. The perceptual spaces reach it
//! through typed intermediates:
//!
//! ```rust
//! use tincture::models::{Lab, Rgb, ToXyz};
//! let lab = Lab::from(
//!     Rgb::new(0, 0, 255)
//!         .to_linear_light()      // convert to srgb-linear.
//!         .to_xyz(),              // convert to xyz-d65.
//! );
//! let hcl = lab.to_polar();      // convert to hcl.
//! assert!(hcl.chroma > 100.0);
//! ```

mod cmyk;
mod hex;
mod hsl;
mod lab;
mod rgb;
mod xyz;

pub use cmyk::Cmyk;
pub use hex::{is_valid_hex, Hex};
pub use hsl::Hsl;
pub use lab::{Hcl, Lab, Oklab, Oklch, Polar, Rectangular, ToLinearLight};
pub use rgb::{Rgb, SrgbLinear};
pub use xyz::{ToXyz, WhitePoint, Xyz, XyzD65, D65};
