//! Character grid rasterizer.
//!
//! Executes a [`DisplayList`] onto a fixed-size grid of characters, one cell
//! per pixel. Writes outside the grid are dropped: a mis-measured box never
//! makes rendering fail.

use std::fmt;

use crate::layout::LayoutTree;

use super::{BorderSides, CellRect, DisplayCommand, DisplayList, Painter};

/// Glyphs used for painting.
pub mod glyph {
    /// Background fill inside a box's padding area.
    pub const BACKGROUND: char = ' ';
    /// Top and bottom border edges.
    pub const HORIZONTAL: char = '\u{2500}';
    /// Left and right border edges.
    pub const VERTICAL: char = '\u{2502}';
    /// Top-left corner.
    pub const TOP_LEFT: char = '\u{256d}';
    /// Top-right corner.
    pub const TOP_RIGHT: char = '\u{256e}';
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: char = '\u{2570}';
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: char = '\u{256f}';
}

/// A `width` x `height` grid of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl CharGrid {
    /// A grid with every cell set to `fill`.
    #[must_use]
    pub fn new(width: usize, height: usize, fill: char) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The glyph at column `x`, row `y`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Each row as a string, top to bottom.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| self.cells[y * self.width..(y + 1) * self.width].iter().collect())
            .collect()
    }

    /// Write one glyph. Coordinates outside the grid are ignored.
    pub fn put(&mut self, x: i64, y: i64, glyph: char) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = glyph;
        }
    }

    /// Execute every command in order.
    pub fn execute(&mut self, display_list: &DisplayList) {
        for command in display_list.commands() {
            match *command {
                DisplayCommand::FillBackground { area } => self.fill_rect(area, glyph::BACKGROUND),
                DisplayCommand::DrawBorder { area, sides } => self.draw_border(area, sides),
            }
        }
    }

    /// Column range of `area` that lies inside the grid.
    fn clip_columns(&self, x0: i64, x1: i64) -> std::ops::Range<i64> {
        x0.max(0)..x1.min(grid_extent(self.width))
    }

    /// Row range of `area` that lies inside the grid.
    fn clip_rows(&self, y0: i64, y1: i64) -> std::ops::Range<i64> {
        y0.max(0)..y1.min(grid_extent(self.height))
    }

    fn fill_rect(&mut self, area: CellRect, fill: char) {
        for y in self.clip_rows(area.y0, area.y1) {
            for x in self.clip_columns(area.x0, area.x1) {
                self.put(x, y, fill);
            }
        }
    }

    /// Edges sit one cell outside `area`. Corners need both neighbours.
    fn draw_border(&mut self, area: CellRect, sides: BorderSides) {
        let CellRect { x0, y0, x1, y1 } = area;
        if sides.top {
            for x in self.clip_columns(x0, x1) {
                self.put(x, y0 - 1, glyph::HORIZONTAL);
            }
            if sides.left {
                self.put(x0 - 1, y0 - 1, glyph::TOP_LEFT);
            }
            if sides.right {
                self.put(x1, y0 - 1, glyph::TOP_RIGHT);
            }
        }
        if sides.bottom {
            for x in self.clip_columns(x0, x1) {
                self.put(x, y1, glyph::HORIZONTAL);
            }
            if sides.left {
                self.put(x0 - 1, y1, glyph::BOTTOM_LEFT);
            }
            if sides.right {
                self.put(x1, y1, glyph::BOTTOM_RIGHT);
            }
        }
        if sides.left {
            for y in self.clip_rows(y0, y1) {
                self.put(x0 - 1, y, glyph::VERTICAL);
            }
        }
        if sides.right {
            for y in self.clip_rows(y0, y1) {
                self.put(x1, y, glyph::VERTICAL);
            }
        }
    }
}

fn grid_extent(cells: usize) -> i64 {
    i64::try_from(cells).unwrap_or(i64::MAX)
}

impl fmt::Display for CharGrid {
    /// Rows joined with newlines, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// Paint a laid-out tree onto a `viewport_width` x `viewport_height` grid
/// whose unpainted cells hold `fill`.
#[must_use]
pub fn render(
    tree: &LayoutTree<'_>,
    viewport_width: usize,
    viewport_height: usize,
    fill: char,
) -> CharGrid {
    let display_list = Painter::new(tree).paint();
    let mut grid = CharGrid::new(viewport_width, viewport_height, fill);
    grid.execute(&display_list);
    grid
}
