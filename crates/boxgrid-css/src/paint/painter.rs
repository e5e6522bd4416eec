//! Painter - generates a display list from a layout tree
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)

use std::collections::VecDeque;

use crate::layout::{LayoutBox, LayoutTree};

use super::{BorderSides, CellRect, DisplayCommand, DisplayList};

/// Walks a layout tree breadth-first from the document root, emitting a
/// background and a border command per box.
///
/// Ancestors are painted before descendants, so deeper boxes overwrite an
/// ancestor's background where they overlap.
pub struct Painter<'t, 'a> {
    tree: &'t LayoutTree<'a>,
}

impl<'t, 'a> Painter<'t, 'a> {
    /// Create a painter over a laid-out tree.
    #[must_use]
    pub const fn new(tree: &'t LayoutTree<'a>) -> Self {
        Self { tree }
    }

    /// Paint the tree and return the display list.
    ///
    /// The viewport box is not painted. An empty tree (root with
    /// `display: none`) yields an empty list.
    #[must_use]
    pub fn paint(&self) -> DisplayList {
        let mut display_list = DisplayList::new();
        let mut queue: VecDeque<_> = self.tree.root().into_iter().collect();
        while let Some(id) = queue.pop_front() {
            let layout_box = &self.tree[id];
            Self::paint_box(layout_box, &mut display_list);
            queue.extend(layout_box.children.iter().copied());
        }
        display_list
    }

    /// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
    /// Background first, then the border.
    fn paint_box(layout_box: &LayoutBox<'_>, display_list: &mut DisplayList) {
        let area = padding_cells(layout_box);
        display_list.push(DisplayCommand::FillBackground { area });

        let sides = BorderSides::from_edges(layout_box.dimensions.border);
        if sides.any() {
            display_list.push(DisplayCommand::DrawBorder { area, sides });
        }
    }
}

/// The padding box snapped to cells. Each edge truncates toward zero on its
/// own, so a fractional box never grows past its far edge.
#[allow(clippy::cast_possible_truncation)]
fn padding_cells(layout_box: &LayoutBox<'_>) -> CellRect {
    let content = layout_box.dimensions.content;
    let padding = layout_box.dimensions.padding;
    CellRect {
        x0: (content.x - padding.left) as i64,
        y0: (content.y - padding.top) as i64,
        x1: (content.x + content.width + padding.right) as i64,
        y1: (content.y + content.height + padding.bottom) as i64,
    }
}
