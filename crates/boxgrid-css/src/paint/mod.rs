//! Character-grid Painting
//!
//! [CSS 2.1 Appendix E - Elaborate description of Stacking Contexts](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! This module converts a laid-out tree into a display list of drawing
//! commands and executes that list onto a grid of characters.
//!
//! # Architecture
//!
//! ```text
//! Style → Layout → Paint → Raster
//!                    ↓        ↓
//!              DisplayList  CharGrid
//! ```
//!
//! Each box gets its padding area blanked, then rounded box-drawing glyphs
//! one cell outside that area on every side with a non-zero border width.
//! Boxes are visited breadth-first, so descendants paint over ancestors.

mod display_list;
mod grid;
mod painter;

pub use display_list::{BorderSides, CellRect, DisplayCommand, DisplayList};
pub use grid::{CharGrid, glyph, render};
pub use painter::Painter;
