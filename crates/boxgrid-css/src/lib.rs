//! Style model, block layout engine, and character-grid painter for boxgrid.
//!
//! # Scope
//!
//! This crate implements:
//! - **Style** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - A fully-defaulted style record with typed values
//!   - Normalization of raw declarations (numbers, `px`, `%`, keywords, colors)
//!   - Side-property fallback to the `margin`, `padding` and `border-width`
//!     shorthands
//!
//! - **Nodes** - a styled element tree, buildable in code or from JSON via
//!   [`DocumentSpec`]
//!
//! - **Layout** ([CSS 2.1 § 10 Visual formatting model details](https://www.w3.org/TR/CSS2/visudet.html))
//!   - Box tree generation with anonymous block wrappers for inline runs
//!   - Block width, position and height in normal flow
//!   - Auto margins, percentages, and absolute positioning out of the flow
//!
//! - **Painting** ([CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html))
//!   - Display list generation
//!   - Rasterization onto a [`CharGrid`] with rounded border glyphs
//!
//! # Not Implemented
//!
//! - Inline and text layout
//! - Floats, clearance and overflow clipping
//! - Margin collapsing
//! - Colors in the rendered output
//!
//! # Example
//!
//! ```
//! use boxgrid_css::{Node, RawValue, Style, layout_tree, render};
//!
//! let style = Style::from_declarations([
//!     ("border-width", RawValue::from(1)),
//!     ("width", RawValue::from(2)),
//!     ("height", RawValue::from(2)),
//! ])
//! .unwrap();
//! let root = Node::new("box", style);
//! let tree = layout_tree(&root, 6.0, 4.0);
//! let grid = render(&tree, 6, 4, '.');
//! assert_eq!(grid.rows()[0], "╭──╮..");
//! ```

/// The styled node tree and its JSON description.
pub mod dom;
/// Box tree construction and block layout per [CSS 2.1 § 10](https://www.w3.org/TR/CSS2/visudet.html).
pub mod layout;
/// Display list and character-grid painting per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod paint;
/// Style values and normalization per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod style;

// Re-exports for convenience
pub use dom::{Declarations, DocumentSpec, Node};
pub use layout::{
    BoxId, BoxSnapshot, BoxType, Dimensions, EdgeSizes, LayoutBox, LayoutTree, Rect, layout_tree,
};
pub use paint::{CharGrid, DisplayCommand, DisplayList, Painter, render};
pub use style::{
    AutoLength, ColorValue, DisplayValue, Length, Position, Property, RawValue, Style, StyleError,
    StyleValue, UnitError,
};
