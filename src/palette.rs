//! Three color palettes derived from a seed by rotating its hue.

use std::{fmt, str::FromStr};

use crate::{
    color::Component,
    error::{ConvertError, ParseError},
    math::normalize_hue,
    models::{Hex, Hsl},
};

/// How the support and accent hues are placed relative to the seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteRule {
    /// Hues spaced evenly around the wheel, +120° and +240°.
    Triadic,
    /// A near neighbour at +30° and the opposite hue at +180°.
    Complementary,
    /// Neighbours on either side, -30° and +30°.
    Analogous,
}

impl PaletteRule {
    /// Every rule, in the order they are usually offered.
    pub const ALL: [PaletteRule; 3] = [
        PaletteRule::Triadic,
        PaletteRule::Complementary,
        PaletteRule::Analogous,
    ];

    /// Hue offsets in degrees of the support and accent swatches.
    pub fn offsets(&self) -> (Component, Component) {
        match self {
            PaletteRule::Triadic => (120.0, 240.0),
            PaletteRule::Complementary => (30.0, 180.0),
            PaletteRule::Analogous => (-30.0, 30.0),
        }
    }

    /// Lower case name, as accepted by [`str::parse`].
    pub fn name(&self) -> &'static str {
        match self {
            PaletteRule::Triadic => "triadic",
            PaletteRule::Complementary => "complementary",
            PaletteRule::Analogous => "analogous",
        }
    }

    /// Human readable label.
    pub fn description(&self) -> &'static str {
        match self {
            PaletteRule::Triadic => "Balanced professional (Triadic)",
            PaletteRule::Complementary => "High-contrast (Complementary)",
            PaletteRule::Analogous => "Soft aesthetic (Analogous)",
        }
    }
}

impl FromStr for PaletteRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        PaletteRule::ALL
            .into_iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseError::Rule(name.to_string()))
    }
}

impl fmt::Display for PaletteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One color of a palette.
#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    /// Hue in degrees, in [0, 360).
    pub hue: Component,
    /// The color as `#RRGGBB`.
    pub hex: Hex,
}

/// A base color with a supporting and an accent color that share its
/// saturation and lightness.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// The rule the palette was derived with.
    pub rule: PaletteRule,
    /// Saturation shared by every swatch, as a fraction.
    pub saturation: Component,
    /// Lightness shared by every swatch, as a fraction.
    pub lightness: Component,
    /// The seed color.
    pub base: Swatch,
    /// The first rotated color.
    pub support: Swatch,
    /// The second rotated color.
    pub accent: Swatch,
}

impl Palette {
    /// Derive a palette from `seed`. Fails if the seed is not a 3 or 6 digit
    /// hex color.
    pub fn derive(seed: &Hex, rule: PaletteRule) -> Result<Self, ConvertError> {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = seed.to_hsl()?;

        let swatch = |offset: Component| -> Result<Swatch, ConvertError> {
            let hue = normalize_hue(hue + offset);
            let hex = Hsl::new(hue, saturation, lightness).to_hex()?;
            Ok(Swatch { hue, hex })
        };

        let (support, accent) = rule.offsets();
        let palette = Self {
            rule,
            saturation,
            lightness,
            base: swatch(0.0)?,
            support: swatch(support)?,
            accent: swatch(accent)?,
        };

        tracing::trace!(
            %seed,
            %rule,
            base = %palette.base.hex,
            support = %palette.support.hex,
            accent = %palette.accent.hex,
            "derived palette"
        );

        Ok(palette)
    }

    /// The swatches in order: base, support, accent.
    pub fn swatches(&self) -> [&Swatch; 3] {
        [&self.base, &self.support, &self.accent]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn hexes(palette: &Palette) -> [&str; 3] {
        palette.swatches().map(|swatch| swatch.hex.as_str())
    }

    #[test]
    fn triadic_from_orange() {
        let palette = Palette::derive(&Hex::new("#ff6600"), PaletteRule::Triadic).unwrap();
        assert_eq!(hexes(&palette), ["#FF6600", "#00FF66", "#6600FF"]);
        assert_component_eq!(palette.base.hue, 24.0);
        assert_component_eq!(palette.support.hue, 144.0);
        assert_component_eq!(palette.accent.hue, 264.0);
        assert_component_eq!(palette.saturation, 1.0);
        assert_component_eq!(palette.lightness, 0.5);
    }

    #[test]
    fn swatches_share_saturation_and_lightness() {
        let palette = Palette::derive(&Hex::new("#ff6600"), PaletteRule::Triadic).unwrap();
        for swatch in palette.swatches() {
            let hsl = swatch.hex.to_hsl().unwrap();
            assert_component_eq!(hsl.saturation, palette.saturation, 1.0e-2);
            assert_component_eq!(hsl.lightness, palette.lightness, 1.0e-2);
            assert_component_eq!(hsl.hue, swatch.hue, 1.0);
        }
    }

    #[test]
    fn complementary_and_analogous() {
        let seed = Hex::new("#ff6600");
        let palette = Palette::derive(&seed, PaletteRule::Complementary).unwrap();
        assert_eq!(hexes(&palette), ["#FF6600", "#FFE600", "#0099FF"]);

        // The support hue wraps from -6 to 354 before conversion.
        let palette = Palette::derive(&seed, PaletteRule::Analogous).unwrap();
        assert_component_eq!(palette.support.hue, 354.0);
        assert_eq!(hexes(&palette), ["#FF6600", "#FF0019", "#FFE600"]);
    }

    #[test]
    fn gray_seed_stays_gray() {
        let palette = Palette::derive(&Hex::new("#808080"), PaletteRule::Triadic).unwrap();
        assert_eq!(hexes(&palette), ["#808080", "#808080", "#808080"]);
    }

    #[test]
    fn invalid_seed_is_rejected() {
        let err = Palette::derive(&Hex::new("#12"), PaletteRule::Analogous).unwrap_err();
        assert_eq!(err, ConvertError::Parse(ParseError::Length(2)));
    }

    #[test]
    fn rules_parse_by_name() {
        assert_eq!("Triadic".parse(), Ok(PaletteRule::Triadic));
        assert_eq!(" analogous ".parse(), Ok(PaletteRule::Analogous));
        assert_eq!(
            "tetradic".parse::<PaletteRule>(),
            Err(ParseError::Rule("tetradic".to_string()))
        );
        for rule in PaletteRule::ALL {
            assert_eq!(rule.to_string().parse(), Ok(rule));
        }
        assert_eq!(
            PaletteRule::Complementary.description(),
            "High-contrast (Complementary)"
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hues_are_normalized(
                red in 0..=255_i32,
                green in 0..=255_i32,
                blue in 0..=255_i32,
                rule in prop::sample::select(PaletteRule::ALL.to_vec()),
            ) {
                let seed = crate::models::Rgb::new(red, green, blue).to_hex().unwrap();
                let palette = Palette::derive(&seed, rule).unwrap();
                for swatch in palette.swatches() {
                    prop_assert!((0.0..360.0).contains(&swatch.hue), "{:?}", swatch);
                    prop_assert!(swatch.hex.is_valid());
                }
                prop_assert_eq!(&palette.base.hex, &seed);
            }
        }
    }
}
