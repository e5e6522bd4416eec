//! Keyword-valued properties: display, position, float, clear and overflow.
//!
//! [§ 2 Box Layout Modes: the display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
//! [§ 9.3.1 Choosing a positioning scheme](https://www.w3.org/TR/CSS2/visuren.html#choose-position)

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// [§ 2 Box Layout Modes](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// Only the flow-layout roles are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayValue {
    /// "The element generates a block-level box when placed in flow layout."
    #[default]
    Block,
    /// "The element generates an inline-level box when placed in flow layout."
    Inline,
    /// "The element and its descendants generate no boxes or text runs."
    None,
}

/// [§ 9.3.1 'position'](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// "The box is a normal box, laid out according to the normal flow."
    #[default]
    Static,
    /// "The box's position is calculated according to the normal flow."
    Relative,
    /// "The box's position is specified with the 'top', 'right', 'bottom',
    /// and 'left' properties."
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but in addition, the box is fixed with respect to some reference."
    Fixed,
}

/// [§ 9.5.2 'clear'](https://www.w3.org/TR/CSS2/visuren.html#flow-control)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Clear {
    /// Clear left floats.
    Left,
    /// Clear right floats.
    Right,
    /// Clear floats on both sides.
    Both,
}

/// [§ 9.5.1 'float'](https://www.w3.org/TR/CSS2/visuren.html#float-position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Float {
    /// Float to the left edge.
    Left,
    /// Float to the right edge.
    Right,
}

/// [§ 3 'overflow-x' and 'overflow-y'](https://www.w3.org/TR/css-overflow-3/#overflow-properties)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    /// Left to the user agent.
    #[default]
    Auto,
    /// "There is no special handling of overflow."
    Visible,
    /// "This value indicates that the box's content is clipped."
    Hidden,
}
