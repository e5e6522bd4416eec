//! Owned, serializable view of a laid-out box tree.

use serde::Serialize;

use super::box_model::Dimensions;
use super::layout_box::{BoxId, BoxType, LayoutTree};

/// One box and its subtree, detached from the arena and the node tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSnapshot {
    /// Block, inline, or anonymous.
    pub box_type: BoxType,
    /// Name of the generating node, if any.
    pub node: Option<String>,
    /// Used geometry.
    pub dimensions: Dimensions,
    /// Child snapshots in document order.
    pub children: Vec<BoxSnapshot>,
}

impl LayoutTree<'_> {
    /// Snapshot the document root's subtree. `None` when the root generated
    /// no box.
    #[must_use]
    pub fn snapshot(&self) -> Option<BoxSnapshot> {
        self.root().map(|root| self.snapshot_of(root))
    }

    /// Snapshot the subtree rooted at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn snapshot_of(&self, id: BoxId) -> BoxSnapshot {
        let layout_box = &self[id];
        BoxSnapshot {
            box_type: layout_box.box_type,
            node: layout_box.node.map(|node| node.name.clone()),
            dimensions: layout_box.dimensions,
            children: layout_box
                .children
                .iter()
                .map(|child| self.snapshot_of(*child))
                .collect(),
        }
    }
}
