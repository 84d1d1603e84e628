//! Error types for color parsing and conversion.

use std::fmt::Debug;

use thiserror::Error;

use crate::color::{HasSpace, Space};

/// Malformed textual input.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    /// A hex color did not have 3 or 6 digits after the optional `#`.
    #[error("expected 3 or 6 hex digits, got {0}")]
    Length(usize),

    /// A hex color contained a character that is not a hex digit.
    #[error("invalid hex digit {0:?}")]
    Digit(char),

    /// A component list had the wrong number of values.
    #[error("expected {expected} components, got {got}")]
    Components {
        /// Number of components the model has.
        expected: usize,
        /// Number of components found.
        got: usize,
    },

    /// A component could not be parsed as a number.
    #[error("invalid number {0:?}")]
    Number(String),

    /// A palette rule name was not recognized.
    #[error("unknown palette rule {0:?}")]
    Rule(String),
}

/// Errors produced by conversions between color models.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConvertError {
    /// The input could not be parsed.
    #[error("could not parse color: {0}")]
    Parse(#[from] ParseError),

    /// A parsed value lies outside the valid range of its space.
    #[error("invalid {space} value: {value}")]
    InvalidValue {
        /// Space the value was checked against.
        space: Space,
        /// Debug rendering of the rejected value.
        value: String,
    },
}

impl ConvertError {
    pub(crate) fn out_of_range<M: HasSpace + Debug>(model: &M) -> Self {
        let space = M::SPACE;
        let value = format!("{model:?}");
        tracing::debug!(%space, %value, "rejecting out of range value");
        Self::InvalidValue { space, value }
    }
}
