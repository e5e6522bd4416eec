//! Style representation and value normalization
//!
//! This module implements the value types and the fully-defaulted style
//! record per:
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)
//! - [CSS 2.1 Box Model](https://www.w3.org/TR/CSS2/box.html)

pub mod computed;
mod display;
mod error;
mod property;
mod values;

// Re-export all public types
pub use computed::{RawValue, Style};
pub use display::{Clear, DisplayValue, Float, Overflow, Position};
pub use error::{StyleError, UnitError};
pub use property::{Property, StyleValue};
pub use values::{AutoLength, ColorValue, Length, LengthUnit, Rgb};
