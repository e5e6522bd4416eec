//! Display List - a sequence of drawing commands
//!
//! [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! The display list is the output of the painting phase. Coordinates are
//! already snapped to grid cells, so executing it needs no layout types.

use serde::Serialize;

use crate::layout::EdgeSizes;

/// A half-open rectangle of grid cells: columns `x0..x1`, rows `y0..y1`.
///
/// Bounds may lie outside the grid or be negative; executing a command clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CellRect {
    /// First column.
    pub x0: i64,
    /// First row.
    pub y0: i64,
    /// One past the last column.
    pub x1: i64,
    /// One past the last row.
    pub y1: i64,
}

/// Which sides of a box have a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BorderSides {
    /// Top edge present.
    pub top: bool,
    /// Right edge present.
    pub right: bool,
    /// Bottom edge present.
    pub bottom: bool,
    /// Left edge present.
    pub left: bool,
}

impl BorderSides {
    /// A side is present when its used border width is non-zero.
    #[must_use]
    pub fn from_edges(border: EdgeSizes) -> Self {
        Self {
            top: border.top != 0.0,
            right: border.right != 0.0,
            bottom: border.bottom != 0.0,
            left: border.left != 0.0,
        }
    }

    /// True if at least one side is present.
    #[must_use]
    pub const fn any(self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

/// A single drawing command.
///
/// [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// Commands are added to the display list in painting order (back to front).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DisplayCommand {
    /// Blank out a box's padding area.
    FillBackground {
        /// The padding box in cells.
        area: CellRect,
    },

    /// Draw border glyphs one cell outside `area`.
    ///
    /// Corners are drawn only where both adjoining sides are present.
    DrawBorder {
        /// The padding box in cells.
        area: CellRect,
        /// Which edges to draw.
        sides: BorderSides,
    },
}

/// A list of display commands in painting order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the end of the list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get all commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if there are no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
