//! Block Layout Engine
//!
//! This module turns a styled [`Node`](crate::dom::Node) tree into a tree of
//! boxes with pixel geometry.
//!
//! # Relevant Specifications
//!
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)
//! - [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html)
//! - [CSS 2.1 Visual Formatting Model Details](https://www.w3.org/TR/CSS2/visudet.html)
//!
//! # Module Structure
//!
//! - [`box_model`] - Box dimensions, rectangles, and edge sizes
//! - [`values`] - Auto-or-pixel values used while resolving widths
//! - [`layout_box`] - Box tree construction and the block layout algorithm
//! - [`snapshot`] - Serializable copies of a laid-out tree
//!
//! # Not Implemented
//!
//! Inline layout, margin collapsing, floats and clearance, the `top`/`left`
//! offsets, and min/max constraints.

pub mod box_model;
pub mod layout_box;
pub mod snapshot;
pub mod values;

// Re-exports for convenience
pub use box_model::{Dimensions, EdgeSizes, Rect};
pub use layout_box::{BoxId, BoxType, LayoutBox, LayoutTree, layout_tree};
pub use snapshot::BoxSnapshot;
pub use values::AutoOr;
