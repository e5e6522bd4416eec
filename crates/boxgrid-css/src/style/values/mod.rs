//! Value types carried by a [`Style`](super::Style)
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

mod color;
mod length;

pub use color::{ColorValue, Rgb};
pub use length::{AutoLength, Length, LengthUnit};
