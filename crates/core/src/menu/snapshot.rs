use std::ops::ControlFlow;

use smol_str::SmolStr;

use super::{MAX_DEPTH, MenuItem, item};

/// A flattened, owned view of one [`MenuItem`] for the sidebar renderer.
///
/// Entries come in pre-order: every item is followed by its children, in
/// child order, before its next sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuEntry {
    /// Text label.
    pub label: String,
    /// Icon identifier, if any.
    pub icon: Option<SmolStr>,
    /// Number of parent hops to the root.
    pub depth: usize,
    /// Child indices leading from the snapshot root list to this item.
    pub path: Vec<usize>,
    /// Whether the item has an activation callback.
    pub selectable: bool,
    /// Whether the item has children.
    pub has_children: bool,
}

impl MenuItem {
    /// Flattens this [`MenuItem`] and its descendants for rendering.
    ///
    /// Depths are absolute; paths start at this item.
    pub fn snapshot(&self) -> Vec<MenuEntry> {
        flatten(std::slice::from_ref(self), self.depth())
    }
}

/// Flattens the given roots in pre-order.
///
/// Items that are their own ancestors and anything more than [`MAX_DEPTH`]
/// levels below the roots are left out.
pub(super) fn flatten(roots: &[MenuItem], base_depth: usize) -> Vec<MenuEntry> {
    let mut flat = Vec::new();

    let _ = item::walk(roots, &mut |node, level, path| {
        flat.push(MenuEntry {
            label: node.label().to_string(),
            icon: node.icon(),
            depth: base_depth + level,
            path: path.to_vec(),
            selectable: node.is_selectable(),
            has_children: !node.children().is_empty(),
        });

        ControlFlow::Continue(())
    });

    flat
}
