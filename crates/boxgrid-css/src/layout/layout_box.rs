//! Layout box types, box tree construction, and block layout.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
//! [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
//!
//! Boxes live in an arena owned by [`LayoutTree`] and refer to each other by
//! [`BoxId`]. The parent link is only ever read for upward lookups.

use std::ops::Index;

use boxgrid_common::warning::warn_once;
use serde::Serialize;

use crate::dom::Node;
use crate::style::{AutoLength, DisplayValue, Overflow, Position, Style};

use super::box_model::Dimensions;
use super::values::AutoOr;

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// "A box's type affects, in part, its behavior in the visual formatting
/// model."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoxType {
    /// A block-level box generated by a `display: block` node.
    Block,
    /// An inline-level box generated by a `display: inline` node.
    Inline,
    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// Wraps a run of consecutive inline boxes under a block parent. Never
    /// has a node.
    Anonymous,
}

impl BoxType {
    /// The box a node with `display` generates; `None` for `display: none`.
    #[must_use]
    pub const fn for_display(display: DisplayValue) -> Option<Self> {
        match display {
            DisplayValue::Block => Some(Self::Block),
            DisplayValue::Inline => Some(Self::Inline),
            DisplayValue::None => None,
        }
    }
}

/// Index of a box in its [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BoxId(pub usize);

/// A node in the box tree.
#[derive(Debug, Clone)]
pub struct LayoutBox<'a> {
    /// Block, inline, or anonymous.
    pub box_type: BoxType,
    /// The generating node. `None` for anonymous boxes and the viewport.
    pub node: Option<&'a Node>,
    /// Used geometry, final once [`layout_tree`] returns.
    pub dimensions: Dimensions,
    /// Non-owning link to the parent box.
    pub parent: Option<BoxId>,
    /// Child boxes in document order.
    pub children: Vec<BoxId>,
}

impl<'a> LayoutBox<'a> {
    fn new(box_type: BoxType, node: Option<&'a Node>, parent: Option<BoxId>) -> Self {
        Self {
            box_type,
            node,
            dimensions: Dimensions::default(),
            parent,
            children: Vec::new(),
        }
    }

    /// The generating node's style.
    #[must_use]
    pub fn style(&self) -> Option<&'a Style> {
        self.node.map(|node| &node.style)
    }

    /// The box's positioning scheme. Boxes without a node are static.
    #[must_use]
    pub fn position(&self) -> Position {
        self.style().map_or(Position::Static, |style| style.position)
    }
}

/// A laid-out box tree.
///
/// The arena always holds the synthetic viewport box, the containing block
/// of the document root. The viewport is never painted.
#[derive(Debug, Clone)]
pub struct LayoutTree<'a> {
    boxes: Vec<LayoutBox<'a>>,
    viewport: BoxId,
    root: Option<BoxId>,
}

/// Build the box tree for `root` and lay it out in a viewport of the given
/// size.
///
/// Every call builds a fresh tree; nothing is shared between calls.
#[must_use]
pub fn layout_tree(root: &Node, viewport_width: f32, viewport_height: f32) -> LayoutTree<'_> {
    let mut tree = LayoutTree::build(root, viewport_width, viewport_height);
    if let Some(root) = tree.root {
        let viewport = tree.boxes[tree.viewport.0].dimensions;
        tree.layout(root, viewport, 0.0);
    }
    tree
}

impl<'a> LayoutTree<'a> {
    /// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
    ///
    /// Build the box tree without computing geometry.
    fn build(root: &'a Node, viewport_width: f32, viewport_height: f32) -> Self {
        let mut viewport_box = LayoutBox::new(BoxType::Block, None, None);
        viewport_box.dimensions.content.width = viewport_width;
        viewport_box.dimensions.content.height = viewport_height;

        let viewport = BoxId(0);
        let mut tree = Self {
            boxes: vec![viewport_box],
            viewport,
            root: None,
        };

        // "display: none" on the document root leaves an empty tree.
        let root_box = BoxType::for_display(root.display())
            .map(|box_type| tree.build_box(root, box_type, viewport));
        if let Some(root_box) = root_box {
            tree.boxes[viewport.0].children.push(root_box);
        }
        tree.root = root_box;
        tree
    }

    fn push(&mut self, layout_box: LayoutBox<'a>) -> BoxId {
        let id = BoxId(self.boxes.len());
        self.boxes.push(layout_box);
        id
    }

    /// Create the box for `node` under `parent` and recurse into its
    /// children. The caller appends the returned id to `parent`.
    fn build_box(&mut self, node: &'a Node, box_type: BoxType, parent: BoxId) -> BoxId {
        warn_unsupported(&node.style, box_type);
        let id = self.push(LayoutBox::new(box_type, Some(node), Some(parent)));

        for child in &node.children {
            match BoxType::for_display(child.display()) {
                // [§ 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
                //
                // "This value causes an element to not appear in the formatting
                // structure... Descendant elements do not generate any boxes
                // either."
                None => {}
                Some(BoxType::Inline) => {
                    let container = self.inline_container(id);
                    let child_box = self.build_box(child, BoxType::Inline, container);
                    self.boxes[container.0].children.push(child_box);
                }
                Some(box_type) => {
                    let child_box = self.build_box(child, box_type, id);
                    self.boxes[id.0].children.push(child_box);
                }
            }
        }
        id
    }

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// Where an inline child of `id` goes: `id` itself if it is inline or
    /// anonymous, else its trailing anonymous child, created on demand.
    /// Consecutive inline siblings therefore share one anonymous box.
    fn inline_container(&mut self, id: BoxId) -> BoxId {
        let parent = &self.boxes[id.0];
        if matches!(parent.box_type, BoxType::Inline | BoxType::Anonymous) {
            return id;
        }
        if let Some(&last) = parent.children.last()
            && self.boxes[last.0].box_type == BoxType::Anonymous
        {
            return last;
        }
        let anonymous = self.push(LayoutBox::new(BoxType::Anonymous, None, Some(id)));
        self.boxes[id.0].children.push(anonymous);
        anonymous
    }

    fn ancestors(&self, id: BoxId) -> impl Iterator<Item = BoxId> + '_ {
        std::iter::successors(self.boxes[id.0].parent, |parent| {
            self.boxes[parent.0].parent
        })
    }

    /// Content width of the nearest ancestor that has one, else 0.
    fn find_ancestral_width(&self, id: BoxId) -> f32 {
        self.ancestors(id)
            .map(|ancestor| self.boxes[ancestor.0].dimensions.content.width)
            .find(|width| *width != 0.0)
            .unwrap_or(0.0)
    }

    /// Content height of the nearest ancestor that has one, else 0.
    fn find_ancestral_height(&self, id: BoxId) -> f32 {
        self.ancestors(id)
            .map(|ancestor| self.boxes[ancestor.0].dimensions.content.height)
            .find(|height| *height != 0.0)
            .unwrap_or(0.0)
    }

    /// Nearest ancestor that is not `position: fixed`.
    fn find_positioned_ancestor(&self, id: BoxId) -> Option<BoxId> {
        self.ancestors(id)
            .find(|ancestor| self.boxes[ancestor.0].position() != Position::Fixed)
    }

    /// Lay out a box and its descendants.
    ///
    /// `flow_offset` is the height already taken by earlier in-flow siblings
    /// inside `containing_block`.
    fn layout(&mut self, id: BoxId, containing_block: Dimensions, flow_offset: f32) {
        match self.boxes[id.0].box_type {
            BoxType::Block => self.layout_block(id, containing_block, flow_offset),
            // Inline boxes and their anonymous wrappers keep zero geometry.
            BoxType::Inline | BoxType::Anonymous => {}
        }
    }

    /// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    fn layout_block(&mut self, id: BoxId, containing_block: Dimensions, flow_offset: f32) {
        #[cfg(feature = "layout-trace")]
        self.trace(id, "begin");

        // STEP 1: Child width can depend on parent width, so this box's
        // width is calculated before its children are laid out.
        self.calculate_block_width(id);

        // STEP 2: Determine where the box is located within its container.
        self.calculate_block_position(id, containing_block, flow_offset);

        // STEP 3: Recursively lay out the children of this box.
        let child_height = self.layout_block_children(id);

        // STEP 4: Parent height can depend on child height, so the height
        // must be calculated after the children are laid out.
        self.calculate_block_height(id, child_height);

        #[cfg(feature = "layout-trace")]
        self.trace(id, "end");
    }

    /// [§ 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    ///
    /// "The following constraints must hold among the used values of the
    /// other properties:
    ///
    ///   'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
    ///   'padding-right' + 'border-right-width' + 'margin-right'
    ///   = width of containing block"
    ///
    /// Percentages resolve against the nearest ancestor with a non-zero
    /// content width rather than the strict containing block.
    fn calculate_block_width(&mut self, id: BoxId) {
        let Some(style) = self.boxes[id.0].style() else {
            return;
        };
        let container_width = self.find_ancestral_width(id);

        // STEP 1: Resolve the computed values against the container.
        // Only margins and width distribute underflow; an 'auto' border or
        // padding is zero.
        let width = AutoOr::resolve(style.width, container_width);
        let margin_left = AutoOr::resolve(style.margin_left(), container_width);
        let margin_right = AutoOr::resolve(style.margin_right(), container_width);
        let border_left = style.border_left_width().to_px(container_width);
        let border_right = style.border_right_width().to_px(container_width);
        let padding_left = style.padding_left().to_px(container_width);
        let padding_right = style.padding_right().to_px(container_width);

        // STEP 2: Whatever the seven values leave over (or overshoot by).
        let total = margin_left.to_px_or(0.0)
            + margin_right.to_px_or(0.0)
            + border_left
            + border_right
            + padding_left
            + padding_right
            + width.to_px_or(0.0);
        let underflow = container_width - total;

        // STEP 3: Hand the underflow to 'width' or the margins.
        let (used_width, used_margin_left, used_margin_right) =
            match (width, margin_left, margin_right) {
                // RULE A: "If 'width' is set to 'auto', any other 'auto'
                // values become '0' and 'width' follows from the resulting
                // equality." A negative result clamps to 0 and the right
                // margin takes the overflow.
                (AutoOr::Auto, margin_left, margin_right) => {
                    let margin_left = margin_left.to_px_or(0.0);
                    let margin_right = margin_right.to_px_or(0.0);
                    if underflow >= 0.0 {
                        (underflow, margin_left, margin_right)
                    } else {
                        (0.0, margin_left, margin_right + underflow)
                    }
                }
                // RULE B: "If both 'margin-left' and 'margin-right' are
                // 'auto', their used values are equal."
                (AutoOr::Length(width), AutoOr::Auto, AutoOr::Auto) => {
                    (width, underflow / 2.0, underflow / 2.0)
                }
                // RULE C: "If there is exactly one value specified as 'auto',
                // its used value follows from the equality."
                (AutoOr::Length(width), AutoOr::Auto, AutoOr::Length(margin_right)) => {
                    (width, underflow, margin_right)
                }
                (AutoOr::Length(width), AutoOr::Length(margin_left), AutoOr::Auto) => {
                    (width, margin_left, underflow)
                }
                // RULE D: over-constrained. "The specified value of
                // 'margin-right' is ignored and the value is calculated so as
                // to make the equality true."
                (AutoOr::Length(width), AutoOr::Length(margin_left), AutoOr::Length(margin_right)) => {
                    (width, margin_left, margin_right + underflow)
                }
            };

        // STEP 4: Store the used values.
        let dimensions = &mut self.boxes[id.0].dimensions;
        dimensions.content.width = used_width;
        dimensions.padding.left = padding_left;
        dimensions.padding.right = padding_right;
        dimensions.border.left = border_left;
        dimensions.border.right = border_right;
        dimensions.margin.left = used_margin_left;
        dimensions.margin.right = used_margin_right;
    }

    /// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// "In a block formatting context, boxes are laid out one after the other,
    /// vertically, beginning at the top of a containing block."
    fn calculate_block_position(
        &mut self,
        id: BoxId,
        containing_block: Dimensions,
        flow_offset: f32,
    ) {
        let Some(style) = self.boxes[id.0].style() else {
            return;
        };
        let container_height = self.find_ancestral_height(id);

        // STEP 1: Pick the origin. Absolute boxes anchor to the nearest
        // ancestor that is not fixed; everything else to the containing
        // block's content box.
        let (x_base, y_base) = if style.position == Position::Absolute {
            self.find_positioned_ancestor(id).map_or((0.0, 0.0), |ancestor| {
                let content = self.boxes[ancestor.0].dimensions.content;
                (content.x, content.y)
            })
        } else {
            (containing_block.content.x, containing_block.content.y)
        };

        // STEP 2: Resolve the vertical edges (only the horizontal ones were
        // stored by calculate_block_width).
        let dimensions = &mut self.boxes[id.0].dimensions;
        dimensions.margin.top = style.margin_top().to_px(container_height);
        dimensions.margin.bottom = style.margin_bottom().to_px(container_height);
        dimensions.border.top = style.border_top_width().to_px(container_height);
        dimensions.border.bottom = style.border_bottom_width().to_px(container_height);
        dimensions.padding.top = style.padding_top().to_px(container_height);
        dimensions.padding.bottom = style.padding_bottom().to_px(container_height);

        // STEP 3: The content box sits inside margin, border and padding,
        // below whatever earlier siblings already consumed.
        dimensions.content.x =
            x_base + dimensions.margin.left + dimensions.border.left + dimensions.padding.left;
        dimensions.content.y = flow_offset
            + y_base
            + dimensions.margin.top
            + dimensions.border.top
            + dimensions.padding.top;
    }

    /// Lay out the children of `id` with `id` as their containing block and
    /// return the height consumed by in-flow children.
    ///
    /// [§ 10.6.4 Absolutely positioned, non-replaced elements](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-height)
    /// Absolutely positioned children take no room in the flow.
    fn layout_block_children(&mut self, id: BoxId) -> f32 {
        let mut child_height = 0.0;
        for index in 0..self.boxes[id.0].children.len() {
            let child = self.boxes[id.0].children[index];
            let containing_block = self.boxes[id.0].dimensions;
            self.layout(child, containing_block, child_height);

            let child_box = &self.boxes[child.0];
            if child_box.position() == Position::Absolute {
                continue;
            }
            child_height += child_box.dimensions.margin_box().height;
        }
        child_height
    }

    /// [§ 10.6.3 Block-level non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
    ///
    /// An explicit height resolves against the nearest ancestor with a
    /// non-zero content height; 'auto' takes the children's total.
    fn calculate_block_height(&mut self, id: BoxId, child_height: f32) {
        let Some(style) = self.boxes[id.0].style() else {
            return;
        };
        let height = match style.height {
            AutoLength::Length(height) => height.to_px(self.find_ancestral_height(id)),
            AutoLength::Auto => child_height,
        };
        self.boxes[id.0].dimensions.content.height = height;
    }

    #[cfg(feature = "layout-trace")]
    fn trace(&self, id: BoxId, phase: &str) {
        let depth = self.ancestors(id).count();
        let layout_box = &self.boxes[id.0];
        let name = layout_box.node.map_or("<anonymous>", |node| node.name.as_str());
        eprintln!(
            "[LAYOUT] {:indent$}depth={depth} box={name}#{} {phase} content={:?}",
            "",
            id.0,
            layout_box.dimensions.content,
            indent = depth * 2
        );
    }

    /// The synthetic viewport box.
    #[must_use]
    pub const fn viewport(&self) -> BoxId {
        self.viewport
    }

    /// The document root's box, or `None` if the root is `display: none`.
    #[must_use]
    pub const fn root(&self) -> Option<BoxId> {
        self.root
    }

    /// Look up a box.
    #[must_use]
    pub fn get(&self, id: BoxId) -> Option<&LayoutBox<'a>> {
        self.boxes.get(id.0)
    }

    /// Number of boxes, including the viewport.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Always false: the viewport box is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// All boxes with their ids, viewport first.
    pub fn iter(&self) -> impl Iterator<Item = (BoxId, &LayoutBox<'a>)> + '_ {
        self.boxes
            .iter()
            .enumerate()
            .map(|(index, layout_box)| (BoxId(index), layout_box))
    }
}

impl<'a> Index<BoxId> for LayoutTree<'a> {
    type Output = LayoutBox<'a>;

    fn index(&self, id: BoxId) -> &Self::Output {
        &self.boxes[id.0]
    }
}

/// Report declared features that layout accepts but ignores.
fn warn_unsupported(style: &Style, box_type: BoxType) {
    if box_type == BoxType::Inline {
        warn_once("Layout", "inline boxes are not laid out; their geometry stays zero");
    }
    if style.float.is_some() {
        warn_once("Layout", "'float' is not supported and is ignored");
    }
    if style.clear.is_some() {
        warn_once("Layout", "'clear' is not supported and is ignored");
    }
    if style.overflow_x != Overflow::Auto || style.overflow_y != Overflow::Auto {
        warn_once("Layout", "'overflow' is not supported and is ignored");
    }
}
