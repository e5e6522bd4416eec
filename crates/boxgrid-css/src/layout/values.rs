//! Resolved auto-or-length values for layout.
//!
//! [§ 6.1 Used Values](https://www.w3.org/TR/css-cascade-4/#used)

use crate::style::AutoLength;

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// "Some properties can take the keyword 'auto' as a value. This keyword
/// allows the user agent to compute the value based on other properties."
///
/// A length already resolved to pixels, or still `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AutoOr {
    /// The value is 'auto' and must be resolved during layout.
    #[default]
    Auto,
    /// The value is a specific length in pixels.
    Length(f32),
}

impl AutoOr {
    /// Resolve percentages in `value` against `container_px`, keeping `auto`.
    #[must_use]
    pub fn resolve(value: AutoLength, container_px: f32) -> Self {
        match value {
            AutoLength::Auto => Self::Auto,
            AutoLength::Length(length) => Self::Length(length.to_px(container_px)),
        }
    }

    /// Get the length value, or a default if 'auto'.
    #[must_use]
    pub const fn to_px_or(&self, default: f32) -> f32 {
        match self {
            Self::Length(v) => *v,
            Self::Auto => default,
        }
    }
}
