//! Style construction and unit conversion errors.

use thiserror::Error;

use super::Property;

/// A declared value could not be normalized into a [`Style`](super::Style).
///
/// Every variant is fatal: the style is not built. A malformed declaration is
/// a caller bug to be caught before layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The declaration names no known property.
    #[error("unknown property {0:?}")]
    UnknownProperty(String),

    /// A string that is not a member of the property's enumeration.
    #[error("got {value:?} for {property}")]
    InvalidKeyword {
        /// The property being declared.
        property: Property,
        /// The rejected keyword.
        value: String,
    },

    /// A string given to a property that has no enumeration at all.
    #[error("got {value:?} for {property}, which takes no keywords")]
    NotEnumerated {
        /// The property being declared.
        property: Property,
        /// The rejected string.
        value: String,
    },

    /// `auto` given to a keyword property with no `auto` member.
    #[error("{property} cannot be auto")]
    AutoNotAllowed {
        /// The property being declared.
        property: Property,
    },

    /// A number given to a keyword-only property.
    #[error("{property} does not take a length")]
    LengthNotAllowed {
        /// The property being declared.
        property: Property,
    },

    /// A color string that could not be parsed.
    #[error("invalid color {value:?} for {property}")]
    InvalidColor {
        /// The property being declared.
        property: Property,
        /// The rejected color string.
        value: String,
    },

    /// A value declared for a property the style model only reserves.
    #[error("{property} is not supported")]
    Unsupported {
        /// The property being declared.
        property: Property,
    },
}

/// A style value cannot be converted to pixels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {value} to pixels")]
pub struct UnitError {
    /// Debug rendering of the offending value.
    pub value: String,
}
