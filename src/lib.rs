//! tincture converts colors between HEX, RGB, HSL, HCL (CIELCh), Oklch and
//! CMYK, and derives small palettes from a seed color.
//!
//! Every model validates its own components before converting and every
//! conversion between user facing spaces pivots through [`models::Rgb`].

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod math;
pub mod models;
mod palette;


pub use color::{Component, Components, HasSpace, Space};
pub use convert::{Color, Conversions};
pub use error::{ConvertError, ParseError};
pub use models::{Cmyk, Hcl, Hex, Hsl, Oklch, Rgb};
pub use palette::{Palette, PaletteRule, Swatch};
