use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::iter;
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};

use smol_str::SmolStr;

use super::MAX_DEPTH;
use crate::{Error, Result};

/// A zero-argument callback run when a [`MenuItem`] is activated.
pub type Callback = Rc<dyn Fn()>;

struct Node {
    label: String,
    icon: Option<SmolStr>,
    on_selected: Option<Callback>,
    parent: Weak<RefCell<Node>>,
    children: Rc<Vec<MenuItem>>,
}

/// A node of the tools menu tree.
///
/// A [`MenuItem`] is a handle: cloning it yields another reference to the
/// same node, and two handles compare equal only when they point to the same
/// node. Children are owned by their parent, while the parent link is weak.
///
/// A node with children is rendered as a group; a node without an
/// `on_selected` callback is inert.
#[derive(Clone)]
pub struct MenuItem(Rc<RefCell<Node>>);

impl MenuItem {
    /// Creates a new root [`MenuItem`] with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(Node {
            label: label.into(),
            icon: None,
            on_selected: None,
            parent: Weak::new(),
            children: Rc::default(),
        })))
    }

    /// Sets the icon of the [`MenuItem`].
    #[must_use]
    pub fn with_icon(self, icon: impl Into<SmolStr>) -> Self {
        self.set_icon(icon);
        self
    }

    /// Sets the callback run when the [`MenuItem`] is activated.
    #[must_use]
    pub fn on_selected(self, on_selected: impl Fn() + 'static) -> Self {
        self.set_on_selected(on_selected);
        self
    }

    /// Appends the given children to the [`MenuItem`].
    ///
    /// See [`MenuItem::add_children`].
    #[must_use]
    pub fn with_children(self, children: impl IntoIterator<Item = MenuItem>) -> Self {
        self.add_children(children);
        self
    }

    /// Returns the label of the [`MenuItem`].
    pub fn label(&self) -> Ref<'_, str> {
        Ref::map(self.0.borrow(), |node| node.label.as_str())
    }

    /// Replaces the label of the [`MenuItem`].
    pub fn set_label(&self, label: impl Into<String>) {
        self.0.borrow_mut().label = label.into();
    }

    /// Returns the icon identifier of the [`MenuItem`], if any.
    pub fn icon(&self) -> Option<SmolStr> {
        self.0.borrow().icon.clone()
    }

    /// Replaces the icon identifier of the [`MenuItem`].
    pub fn set_icon(&self, icon: impl Into<SmolStr>) {
        self.0.borrow_mut().icon = Some(icon.into());
    }

    /// Removes the icon of the [`MenuItem`].
    pub fn clear_icon(&self) {
        self.0.borrow_mut().icon = None;
    }

    /// Replaces the callback run when the [`MenuItem`] is activated.
    pub fn set_on_selected(&self, on_selected: impl Fn() + 'static) {
        self.0.borrow_mut().on_selected = Some(Rc::new(on_selected));
    }

    /// Removes the activation callback, making the [`MenuItem`] inert.
    pub fn clear_on_selected(&self) {
        self.0.borrow_mut().on_selected = None;
    }

    /// Returns `true` if the [`MenuItem`] has an activation callback.
    pub fn is_selectable(&self) -> bool {
        self.0.borrow().on_selected.is_some()
    }

    /// Runs the activation callback of the [`MenuItem`].
    ///
    /// Returns `true` if a callback ran. The item is not borrowed while the
    /// callback runs, so the callback may edit it.
    pub fn select(&self) -> bool {
        let on_selected = self.0.borrow().on_selected.clone();

        match on_selected {
            Some(on_selected) => {
                on_selected();
                true
            }
            None => false,
        }
    }

    /// Returns the parent of the [`MenuItem`], or `None` for a root item.
    pub fn parent(&self) -> Option<MenuItem> {
        self.0.borrow().parent.upgrade().map(MenuItem)
    }

    /// Returns the ancestors of the [`MenuItem`], nearest first.
    ///
    /// At most [`MAX_DEPTH`] ancestors are produced.
    pub fn ancestors(&self) -> impl Iterator<Item = MenuItem> {
        iter::successors(self.parent(), MenuItem::parent).take(MAX_DEPTH)
    }

    /// Returns the number of parent hops from the [`MenuItem`] to its root.
    ///
    /// Computed on every call, so it follows reparenting. A walk longer than
    /// [`MAX_DEPTH`] hops is cut short and reports [`MAX_DEPTH`].
    pub fn depth(&self) -> usize {
        let hops = iter::successors(self.parent(), MenuItem::parent)
            .take(MAX_DEPTH + 1)
            .count();

        if hops > MAX_DEPTH {
            log::warn!(
                "Tools menu: parent chain of {:?} exceeds {MAX_DEPTH} levels; is there a cycle?",
                &*self.label()
            );

            return MAX_DEPTH;
        }

        hops
    }

    /// Returns the current children of the [`MenuItem`].
    ///
    /// The list shares its handles with the tree, so edits to a child are
    /// seen everywhere. The node itself is not borrowed while the list is
    /// held; changing the children afterwards leaves the returned list as it
    /// was.
    pub fn children(&self) -> Rc<Vec<MenuItem>> {
        Rc::clone(&self.0.borrow().children)
    }

    /// Returns a mutable view of the children of the [`MenuItem`].
    ///
    /// Edits through this view do not touch parent links; keeping them
    /// consistent is up to the caller.
    pub fn children_mut(&self) -> RefMut<'_, Vec<MenuItem>> {
        RefMut::map(self.0.borrow_mut(), |node| Rc::make_mut(&mut node.children))
    }

    /// Appends the given items to the children of the [`MenuItem`], in order,
    /// and makes it their parent.
    ///
    /// No checks are performed. An item that already has a parent stays in
    /// its old parent's children as well, and adding an ancestor creates a
    /// cycle. Use [`MenuItem::try_add_children`] to reject both.
    pub fn add_children(&self, children: impl IntoIterator<Item = MenuItem>) {
        let children: Vec<MenuItem> = children.into_iter().collect();

        for child in children {
            child.0.borrow_mut().parent = Rc::downgrade(&self.0);
            self.children_mut().push(child);
        }
    }

    /// Appends the given items like [`MenuItem::add_children`], but only if
    /// none of them already has a parent or would become its own ancestor.
    ///
    /// Nothing is appended when an item is rejected.
    pub fn try_add_children(&self, children: impl IntoIterator<Item = MenuItem>) -> Result<()> {
        let children: Vec<MenuItem> = children.into_iter().collect();

        for (i, child) in children.iter().enumerate() {
            if child.contains(self) || self.ancestors().any(|ancestor| ancestor == *child) {
                return Err(Error::Cycle {
                    parent: self.label().to_string(),
                    child: child.label().to_string(),
                });
            }

            if let Some(parent) = child.parent() {
                return Err(Error::AlreadyParented {
                    parent: parent.label().to_string(),
                    child: child.label().to_string(),
                });
            }

            if children[..i].contains(child) {
                return Err(Error::AlreadyParented {
                    parent: self.label().to_string(),
                    child: child.label().to_string(),
                });
            }
        }

        self.add_children(children);

        Ok(())
    }

    /// Removes the first occurrence of `child` from the children of the
    /// [`MenuItem`].
    ///
    /// The parent link of `child` is cleared once it no longer appears here.
    /// Returns `false` if `child` was not a child.
    pub fn remove_child(&self, child: &MenuItem) -> bool {
        let removed = {
            let mut children = self.children_mut();
            let index = children.iter().position(|candidate| candidate == child);

            index.map(|index| children.remove(index))
        };

        let Some(removed) = removed else {
            return false;
        };

        let still_here = self.children().contains(&removed);
        let points_here = removed
            .parent()
            .is_some_and(|parent| Rc::ptr_eq(&parent.0, &self.0));

        if points_here && !still_here {
            removed.0.borrow_mut().parent = Weak::new();
        }

        true
    }

    /// Returns `true` if `item` is this [`MenuItem`] or one of its
    /// descendants.
    ///
    /// The search stops [`MAX_DEPTH`] levels below this item and never
    /// follows a cycle.
    pub fn contains(&self, item: &MenuItem) -> bool {
        walk(std::slice::from_ref(self), &mut |node, _, _| {
            if node == item {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &MenuItem) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for MenuItem {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for MenuItem {}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(node) = self.0.try_borrow() else {
            return f.write_str("MenuItem(<borrowed>)");
        };

        f.debug_struct("MenuItem")
            .field("label", &node.label)
            .field("icon", &node.icon)
            .field("selectable", &node.on_selected.is_some())
            .field("children", &node.children.len())
            .finish()
    }
}

/// Visits the given roots and their descendants in pre-order.
///
/// `visit` receives each item with its level below the roots and its path of
/// child indices. A child already on the current path is skipped, and
/// nothing more than [`MAX_DEPTH`] levels below the roots is visited.
pub(super) fn walk(
    roots: &[MenuItem],
    visit: &mut dyn FnMut(&MenuItem, usize, &[usize]) -> ControlFlow<()>,
) -> ControlFlow<()> {
    #[derive(Default)]
    struct Walk {
        path: Vec<usize>,
        stack: Vec<MenuItem>,
        cycles: bool,
        truncated: bool,
    }

    fn rec(
        item: &MenuItem,
        walk: &mut Walk,
        visit: &mut dyn FnMut(&MenuItem, usize, &[usize]) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let level = walk.stack.len();

        visit(item, level, &walk.path)?;

        let children = item.children();

        if children.is_empty() {
            return ControlFlow::Continue(());
        }

        if level >= MAX_DEPTH {
            walk.truncated = true;
            return ControlFlow::Continue(());
        }

        walk.stack.push(item.clone());

        let mut flow = ControlFlow::Continue(());

        for (index, child) in children.iter().enumerate() {
            if walk.stack.contains(child) {
                walk.cycles = true;
                continue;
            }

            walk.path.push(index);
            flow = rec(child, walk, visit);
            walk.path.truncate(level + 1);

            if flow.is_break() {
                break;
            }
        }

        walk.stack.truncate(level);

        flow
    }

    let mut state = Walk::default();
    let mut flow = ControlFlow::Continue(());

    for (index, root) in roots.iter().enumerate() {
        state.path.push(index);
        flow = rec(root, &mut state, visit);
        state.path.clear();

        if flow.is_break() {
            break;
        }
    }

    if state.cycles {
        log::warn!("Tools menu: skipped items that are their own ancestors");
    }

    if state.truncated {
        log::warn!("Tools menu: items deeper than {MAX_DEPTH} levels were skipped");
    }

    flow
}
