//! Property names, the side-to-shorthand fallback table, and dynamically
//! typed property values.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use super::error::UnitError;
use super::{Clear, ColorValue, DisplayValue, Float, Length, Overflow, Position};

/// Every property a [`Style`](super::Style) carries.
///
/// Names parse from both the hyphenated (`margin-left`) and underscore
/// (`margin_left`) spellings via [`Property::from_name`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    /// `clear`
    Clear,
    /// `display`
    Display,
    /// `float`
    Float,
    /// `overflow-x`
    OverflowX,
    /// `overflow-y`
    OverflowY,
    /// `position`
    Position,
    /// `white-space` (reserved, never holds a value)
    WhiteSpace,
    /// `flex` (reserved, never holds a value)
    Flex,
    /// `flex-wrap` (reserved, never holds a value)
    FlexWrap,
    /// `height`
    Height,
    /// `max-height`
    MaxHeight,
    /// `max-width`
    MaxWidth,
    /// `min-height`
    MinHeight,
    /// `min-width`
    MinWidth,
    /// `width`
    Width,
    /// `padding` (shorthand for all four sides)
    Padding,
    /// `padding-bottom`
    PaddingBottom,
    /// `padding-left`
    PaddingLeft,
    /// `padding-right`
    PaddingRight,
    /// `padding-top`
    PaddingTop,
    /// `border-bottom-width`
    BorderBottomWidth,
    /// `border-left-width`
    BorderLeftWidth,
    /// `border-right-width`
    BorderRightWidth,
    /// `border-top-width`
    BorderTopWidth,
    /// `border-width` (shorthand for all four sides)
    BorderWidth,
    /// `margin` (shorthand for all four sides)
    Margin,
    /// `margin-bottom`
    MarginBottom,
    /// `margin-left`
    MarginLeft,
    /// `margin-right`
    MarginRight,
    /// `margin-top`
    MarginTop,
    /// `bottom`
    Bottom,
    /// `left`
    Left,
    /// `right`
    Right,
    /// `top`
    Top,
    /// `background-color`
    BackgroundColor,
    /// `color`
    Color,
}

impl Property {
    /// Look up a property by its hyphenated or underscore name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.trim().replace('_', "-").parse().ok()
    }

    /// The shorthand a side-specific property falls back to when unset.
    ///
    /// ```text
    /// margin-{top,right,bottom,left}        -> margin
    /// padding-{top,right,bottom,left}       -> padding
    /// border-{top,right,bottom,left}-width  -> border-width
    /// ```
    #[must_use]
    pub const fn shorthand(self) -> Option<Self> {
        match self {
            Self::MarginTop | Self::MarginRight | Self::MarginBottom | Self::MarginLeft => {
                Some(Self::Margin)
            }
            Self::PaddingTop | Self::PaddingRight | Self::PaddingBottom | Self::PaddingLeft => {
                Some(Self::Padding)
            }
            Self::BorderTopWidth
            | Self::BorderRightWidth
            | Self::BorderBottomWidth
            | Self::BorderLeftWidth => Some(Self::BorderWidth),
            _ => None,
        }
    }
}

/// The value a property holds, tagged by value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum StyleValue {
    /// `auto`
    Auto,
    /// A length.
    Length(Length),
    /// A `display` keyword.
    Display(DisplayValue),
    /// A `position` keyword.
    Position(Position),
    /// A `clear` keyword.
    Clear(Clear),
    /// A `float` keyword.
    Float(Float),
    /// An `overflow-*` keyword.
    Overflow(Overflow),
    /// A color or color marker.
    Color(ColorValue),
}

impl StyleValue {
    /// Resolve to pixels against a containing dimension. `auto` is zero.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError`] for keyword and color values.
    pub fn to_px(&self, container_px: f32) -> Result<f32, UnitError> {
        match self {
            Self::Auto => Ok(0.0),
            Self::Length(length) => Ok(length.to_px(container_px)),
            Self::Display(_)
            | Self::Position(_)
            | Self::Clear(_)
            | Self::Float(_)
            | Self::Overflow(_)
            | Self::Color(_) => Err(UnitError {
                value: format!("{self:?}"),
            }),
        }
    }
}
