//! Length values and parsing
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// The unit a [`Length`] is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// One pixel is one grid cell.
    Pixels,
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// "Percentages are always relative to another quantity."
    Percent,
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
///
/// A magnitude tagged with its unit. Percentages stay unresolved until layout
/// supplies the containing dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Length {
    /// Numeric magnitude.
    pub size: f32,
    /// Unit of `size`.
    pub unit: LengthUnit,
}

impl Length {
    /// `0px`
    pub const ZERO: Self = Self::px(0.0);

    /// A length in pixels.
    #[must_use]
    pub const fn px(size: f32) -> Self {
        Self {
            size,
            unit: LengthUnit::Pixels,
        }
    }

    /// A percentage of the containing dimension.
    #[must_use]
    pub const fn percent(size: f32) -> Self {
        Self {
            size,
            unit: LengthUnit::Percent,
        }
    }

    /// Resolve to pixels. Percentages resolve against `container_px`.
    #[must_use]
    pub fn to_px(self, container_px: f32) -> f32 {
        match self.unit {
            LengthUnit::Pixels => self.size,
            LengthUnit::Percent => self.size / 100.0 * container_px,
        }
    }

    /// Parse `"12"`, `"12px"` or `"50%"`.
    ///
    /// Returns `None` for anything else, including keywords.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let (number, unit) = if let Some(number) = input.strip_suffix('%') {
            (number, LengthUnit::Percent)
        } else if let Some(number) = input.strip_suffix("px") {
            (number, LengthUnit::Pixels)
        } else {
            (input, LengthUnit::Pixels)
        };
        let size: f32 = number.trim_end().parse().ok()?;
        size.is_finite().then_some(Self { size, unit })
    }
}

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// A length that may also be `auto`, meaning layout computes it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum AutoLength {
    /// "Browser computes this." Carries no value.
    #[default]
    Auto,
    /// A concrete length.
    Length(Length),
}

impl AutoLength {
    /// `0px`
    pub const ZERO: Self = Self::Length(Length::ZERO);

    /// Resolve to pixels; `auto` counts as zero.
    #[must_use]
    pub fn to_px(self, container_px: f32) -> f32 {
        match self {
            Self::Auto => 0.0,
            Self::Length(length) => length.to_px(container_px),
        }
    }
}

impl From<Length> for AutoLength {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(Length::parse("12"), Some(Length::px(12.0)));
        assert_eq!(Length::parse(" 3px "), Some(Length::px(3.0)));
        assert_eq!(Length::parse("50%"), Some(Length::percent(50.0)));
        assert_eq!(Length::parse("-1.5px"), Some(Length::px(-1.5)));
    }

    #[test]
    fn test_parse_rejects_keywords() {
        assert_eq!(Length::parse("auto"), None);
        assert_eq!(Length::parse("px"), None);
        assert_eq!(Length::parse("12em"), None);
        assert_eq!(Length::parse("inf"), None);
    }

    #[test]
    fn test_percent_resolves_against_container() {
        assert_eq!(Length::percent(50.0).to_px(30.0), 15.0);
        assert_eq!(Length::px(7.0).to_px(30.0), 7.0);
        assert_eq!(AutoLength::Auto.to_px(30.0), 0.0);
    }
}
