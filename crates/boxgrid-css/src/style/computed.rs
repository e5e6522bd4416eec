//! The fully-defaulted style record and raw-value normalization.
//!
//! [§ 6 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//!
//! A [`Style`] is built once from raw declarations and read-only afterwards.
//! Normalization rules:
//!
//! ```text
//! number            -> Length in pixels
//! "auto"            -> AutoLength::Auto for any length (or Overflow::Auto)
//! "12px" / "50%"    -> Length
//! other string      -> the property's enumeration member, else StyleError
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::StyleError;
use super::property::{Property, StyleValue};
use super::values::{AutoLength, ColorValue, Length};
use super::{Clear, DisplayValue, Float, Overflow, Position};

/// A declared value before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A bare number, read as pixels.
    Number(f32),
    /// A keyword, length or color string.
    Keyword(String),
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for RawValue {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: f64) -> Self {
        Self::Number(value as f32)
    }
}

impl From<i32> for RawValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i32) -> Self {
        Self::Number(value as f32)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Keyword(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Keyword(value)
    }
}

/// The visual properties of one node.
///
/// Side-specific box properties are `None` until declared; reads go through
/// [`Style::get`] or the typed side accessors, which fall back to the
/// shorthand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    /// `clear`, unset by default.
    pub clear: Option<Clear>,
    /// `display`
    pub display: DisplayValue,
    /// `float`, unset by default.
    pub float: Option<Float>,
    /// `overflow-x`
    pub overflow_x: Overflow,
    /// `overflow-y`
    pub overflow_y: Overflow,
    /// `position`
    pub position: Position,

    /// `height`
    pub height: AutoLength,
    /// `max-height`, `None` means no maximum.
    pub max_height: Option<AutoLength>,
    /// `max-width`, `None` means no maximum.
    pub max_width: Option<AutoLength>,
    /// `min-height`
    pub min_height: AutoLength,
    /// `min-width`
    pub min_width: AutoLength,
    /// `width`
    pub width: AutoLength,

    /// `padding`
    pub padding: AutoLength,
    /// `padding-bottom`
    pub padding_bottom: Option<AutoLength>,
    /// `padding-left`
    pub padding_left: Option<AutoLength>,
    /// `padding-right`
    pub padding_right: Option<AutoLength>,
    /// `padding-top`
    pub padding_top: Option<AutoLength>,

    /// `border-bottom-width`
    pub border_bottom_width: Option<AutoLength>,
    /// `border-left-width`
    pub border_left_width: Option<AutoLength>,
    /// `border-right-width`
    pub border_right_width: Option<AutoLength>,
    /// `border-top-width`
    pub border_top_width: Option<AutoLength>,
    /// `border-width`
    pub border_width: AutoLength,

    /// `margin`
    pub margin: AutoLength,
    /// `margin-bottom`
    pub margin_bottom: Option<AutoLength>,
    /// `margin-left`
    pub margin_left: Option<AutoLength>,
    /// `margin-right`
    pub margin_right: Option<AutoLength>,
    /// `margin-top`
    pub margin_top: Option<AutoLength>,

    /// `bottom`
    pub bottom: AutoLength,
    /// `left`
    pub left: AutoLength,
    /// `right`
    pub right: AutoLength,
    /// `top`
    pub top: AutoLength,

    /// `background-color`
    pub background_color: ColorValue,
    /// `color`
    pub color: ColorValue,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            clear: None,
            display: DisplayValue::Block,
            float: None,
            overflow_x: Overflow::Auto,
            overflow_y: Overflow::Auto,
            position: Position::Static,
            height: AutoLength::Auto,
            max_height: None,
            max_width: None,
            min_height: AutoLength::ZERO,
            min_width: AutoLength::ZERO,
            width: AutoLength::Auto,
            padding: AutoLength::ZERO,
            padding_bottom: None,
            padding_left: None,
            padding_right: None,
            padding_top: None,
            border_bottom_width: None,
            border_left_width: None,
            border_right_width: None,
            border_top_width: None,
            border_width: AutoLength::ZERO,
            margin: AutoLength::ZERO,
            margin_bottom: None,
            margin_left: None,
            margin_right: None,
            margin_top: None,
            bottom: AutoLength::Auto,
            left: AutoLength::Auto,
            right: AutoLength::Auto,
            top: AutoLength::Auto,
            background_color: ColorValue::Inherit,
            color: ColorValue::Inherit,
        }
    }
}

impl Style {
    /// Build a style from `(name, value)` declarations, applied in order on
    /// top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns the first [`StyleError`] met; no partial style is produced.
    pub fn from_declarations<I, K>(declarations: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = (K, RawValue)>,
        K: AsRef<str>,
    {
        let mut style = Self::default();
        for (name, value) in declarations {
            style.declare(name.as_ref(), value)?;
        }
        Ok(style)
    }

    /// Apply one declaration by property name.
    ///
    /// `overflow` is accepted as a name and sets both axes.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownProperty`] for an unrecognized name, or
    /// the normalization error from [`Style::set`].
    pub fn declare(&mut self, name: &str, value: RawValue) -> Result<(), StyleError> {
        if name.trim().eq_ignore_ascii_case("overflow") {
            self.set(Property::OverflowX, value.clone())?;
            return self.set(Property::OverflowY, value);
        }
        let property = Property::from_name(name)
            .ok_or_else(|| StyleError::UnknownProperty(name.to_owned()))?;
        self.set(property, value)
    }

    /// Normalize `value` and store it as `property`.
    ///
    /// # Errors
    ///
    /// Returns a [`StyleError`] when the value has no typed form for this
    /// property.
    pub fn set(&mut self, property: Property, value: RawValue) -> Result<(), StyleError> {
        let value = &value;
        match property {
            Property::Clear => self.clear = optional_keyword(property, value)?,
            Property::Display => self.display = keyword(property, value)?,
            Property::Float => self.float = optional_keyword(property, value)?,
            Property::OverflowX => self.overflow_x = keyword(property, value)?,
            Property::OverflowY => self.overflow_y = keyword(property, value)?,
            Property::Position => self.position = keyword(property, value)?,
            Property::WhiteSpace | Property::Flex | Property::FlexWrap => {
                return Err(StyleError::Unsupported { property });
            }

            Property::Height => self.height = auto_length(property, value)?,
            Property::MaxHeight => self.max_height = optional_length(property, value)?,
            Property::MaxWidth => self.max_width = optional_length(property, value)?,
            Property::MinHeight => self.min_height = auto_length(property, value)?,
            Property::MinWidth => self.min_width = auto_length(property, value)?,
            Property::Width => self.width = auto_length(property, value)?,

            Property::Padding => self.padding = auto_length(property, value)?,
            Property::PaddingBottom => self.padding_bottom = Some(auto_length(property, value)?),
            Property::PaddingLeft => self.padding_left = Some(auto_length(property, value)?),
            Property::PaddingRight => self.padding_right = Some(auto_length(property, value)?),
            Property::PaddingTop => self.padding_top = Some(auto_length(property, value)?),

            Property::BorderBottomWidth => {
                self.border_bottom_width = Some(auto_length(property, value)?);
            }
            Property::BorderLeftWidth => {
                self.border_left_width = Some(auto_length(property, value)?);
            }
            Property::BorderRightWidth => {
                self.border_right_width = Some(auto_length(property, value)?);
            }
            Property::BorderTopWidth => self.border_top_width = Some(auto_length(property, value)?),
            Property::BorderWidth => self.border_width = auto_length(property, value)?,

            Property::Margin => self.margin = auto_length(property, value)?,
            Property::MarginBottom => self.margin_bottom = Some(auto_length(property, value)?),
            Property::MarginLeft => self.margin_left = Some(auto_length(property, value)?),
            Property::MarginRight => self.margin_right = Some(auto_length(property, value)?),
            Property::MarginTop => self.margin_top = Some(auto_length(property, value)?),

            Property::Bottom => self.bottom = auto_length(property, value)?,
            Property::Left => self.left = auto_length(property, value)?,
            Property::Right => self.right = auto_length(property, value)?,
            Property::Top => self.top = auto_length(property, value)?,

            Property::BackgroundColor => self.background_color = color(property, value, true)?,
            Property::Color => self.color = color(property, value, false)?,
        }
        Ok(())
    }

    /// The value that applies to `property`, falling back from a side
    /// property to its shorthand when the side is unset.
    ///
    /// Returns `None` when neither is set (reserved properties, unset
    /// `float`/`clear`/`max-*`).
    #[must_use]
    pub fn get(&self, property: Property) -> Option<StyleValue> {
        self.declared(property)
            .or_else(|| property.shorthand().and_then(|shorthand| self.declared(shorthand)))
    }

    /// [`Style::get`] by hyphenated or underscore name. Unknown names are
    /// `None`.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<StyleValue> {
        Property::from_name(name).and_then(|property| self.get(property))
    }

    fn declared(&self, property: Property) -> Option<StyleValue> {
        match property {
            Property::Clear => self.clear.map(StyleValue::Clear),
            Property::Display => Some(StyleValue::Display(self.display)),
            Property::Float => self.float.map(StyleValue::Float),
            Property::OverflowX => Some(StyleValue::Overflow(self.overflow_x)),
            Property::OverflowY => Some(StyleValue::Overflow(self.overflow_y)),
            Property::Position => Some(StyleValue::Position(self.position)),
            Property::WhiteSpace | Property::Flex | Property::FlexWrap => None,
            Property::Height => Some(self.height.into()),
            Property::MaxHeight => self.max_height.map(StyleValue::from),
            Property::MaxWidth => self.max_width.map(StyleValue::from),
            Property::MinHeight => Some(self.min_height.into()),
            Property::MinWidth => Some(self.min_width.into()),
            Property::Width => Some(self.width.into()),
            Property::Padding => Some(self.padding.into()),
            Property::PaddingBottom => self.padding_bottom.map(StyleValue::from),
            Property::PaddingLeft => self.padding_left.map(StyleValue::from),
            Property::PaddingRight => self.padding_right.map(StyleValue::from),
            Property::PaddingTop => self.padding_top.map(StyleValue::from),
            Property::BorderBottomWidth => self.border_bottom_width.map(StyleValue::from),
            Property::BorderLeftWidth => self.border_left_width.map(StyleValue::from),
            Property::BorderRightWidth => self.border_right_width.map(StyleValue::from),
            Property::BorderTopWidth => self.border_top_width.map(StyleValue::from),
            Property::BorderWidth => Some(self.border_width.into()),
            Property::Margin => Some(self.margin.into()),
            Property::MarginBottom => self.margin_bottom.map(StyleValue::from),
            Property::MarginLeft => self.margin_left.map(StyleValue::from),
            Property::MarginRight => self.margin_right.map(StyleValue::from),
            Property::MarginTop => self.margin_top.map(StyleValue::from),
            Property::Bottom => Some(self.bottom.into()),
            Property::Left => Some(self.left.into()),
            Property::Right => Some(self.right.into()),
            Property::Top => Some(self.top.into()),
            Property::BackgroundColor => Some(StyleValue::Color(self.background_color)),
            Property::Color => Some(StyleValue::Color(self.color)),
        }
    }

    // Typed side accessors. Same fallback as `get`, without the dynamic
    // value: these are what layout reads.

    /// `margin-top`, else `margin`.
    #[must_use]
    pub fn margin_top(&self) -> AutoLength {
        self.margin_top.unwrap_or(self.margin)
    }

    /// `margin-right`, else `margin`.
    #[must_use]
    pub fn margin_right(&self) -> AutoLength {
        self.margin_right.unwrap_or(self.margin)
    }

    /// `margin-bottom`, else `margin`.
    #[must_use]
    pub fn margin_bottom(&self) -> AutoLength {
        self.margin_bottom.unwrap_or(self.margin)
    }

    /// `margin-left`, else `margin`.
    #[must_use]
    pub fn margin_left(&self) -> AutoLength {
        self.margin_left.unwrap_or(self.margin)
    }

    /// `padding-top`, else `padding`.
    #[must_use]
    pub fn padding_top(&self) -> AutoLength {
        self.padding_top.unwrap_or(self.padding)
    }

    /// `padding-right`, else `padding`.
    #[must_use]
    pub fn padding_right(&self) -> AutoLength {
        self.padding_right.unwrap_or(self.padding)
    }

    /// `padding-bottom`, else `padding`.
    #[must_use]
    pub fn padding_bottom(&self) -> AutoLength {
        self.padding_bottom.unwrap_or(self.padding)
    }

    /// `padding-left`, else `padding`.
    #[must_use]
    pub fn padding_left(&self) -> AutoLength {
        self.padding_left.unwrap_or(self.padding)
    }

    /// `border-top-width`, else `border-width`.
    #[must_use]
    pub fn border_top_width(&self) -> AutoLength {
        self.border_top_width.unwrap_or(self.border_width)
    }

    /// `border-right-width`, else `border-width`.
    #[must_use]
    pub fn border_right_width(&self) -> AutoLength {
        self.border_right_width.unwrap_or(self.border_width)
    }

    /// `border-bottom-width`, else `border-width`.
    #[must_use]
    pub fn border_bottom_width(&self) -> AutoLength {
        self.border_bottom_width.unwrap_or(self.border_width)
    }

    /// `border-left-width`, else `border-width`.
    #[must_use]
    pub fn border_left_width(&self) -> AutoLength {
        self.border_left_width.unwrap_or(self.border_width)
    }
}

impl From<AutoLength> for StyleValue {
    fn from(value: AutoLength) -> Self {
        match value {
            AutoLength::Auto => Self::Auto,
            AutoLength::Length(length) => Self::Length(length),
        }
    }
}

fn is_keyword(input: &str, keyword: &str) -> bool {
    input.trim().eq_ignore_ascii_case(keyword)
}

fn keyword<T: FromStr>(property: Property, value: &RawValue) -> Result<T, StyleError> {
    match value {
        RawValue::Number(_) => Err(StyleError::LengthNotAllowed { property }),
        RawValue::Keyword(input) => input.trim().parse().map_err(|_| {
            if is_keyword(input, "auto") {
                StyleError::AutoNotAllowed { property }
            } else {
                StyleError::InvalidKeyword {
                    property,
                    value: input.clone(),
                }
            }
        }),
    }
}

fn optional_keyword<T: FromStr>(
    property: Property,
    value: &RawValue,
) -> Result<Option<T>, StyleError> {
    match value {
        RawValue::Keyword(input) if is_keyword(input, "none") => Ok(None),
        _ => keyword(property, value).map(Some),
    }
}

fn auto_length(property: Property, value: &RawValue) -> Result<AutoLength, StyleError> {
    match value {
        RawValue::Keyword(input) if is_keyword(input, "auto") => Ok(AutoLength::Auto),
        _ => length(property, value).map(AutoLength::Length),
    }
}

fn length(property: Property, value: &RawValue) -> Result<Length, StyleError> {
    match value {
        RawValue::Number(size) => Ok(Length::px(*size)),
        RawValue::Keyword(input) => {
            Length::parse(input).ok_or_else(|| StyleError::NotEnumerated {
                property,
                value: input.clone(),
            })
        }
    }
}

fn optional_length(
    property: Property,
    value: &RawValue,
) -> Result<Option<AutoLength>, StyleError> {
    match value {
        RawValue::Keyword(input) if is_keyword(input, "none") => Ok(None),
        _ => auto_length(property, value).map(Some),
    }
}

fn color(
    property: Property,
    value: &RawValue,
    allow_transparent: bool,
) -> Result<ColorValue, StyleError> {
    let RawValue::Keyword(input) = value else {
        return Err(StyleError::LengthNotAllowed { property });
    };
    match ColorValue::parse(input) {
        Some(ColorValue::Transparent) if !allow_transparent => Err(StyleError::InvalidColor {
            property,
            value: input.clone(),
        }),
        Some(color) => Ok(color),
        None => Err(StyleError::InvalidColor {
            property,
            value: input.clone(),
        }),
    }
}
