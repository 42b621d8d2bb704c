use std::cell::{RefCell, RefMut};
use std::mem;
use std::ops::ControlFlow;
use std::rc::Rc;

use super::{MenuEntry, MenuItem, item, snapshot};

/// The root items of the tools menu.
///
/// A [`MenuRegistry`] is created once per application session and handed to
/// every module that contributes items. Clones share the same root list, so
/// a registration made through one clone is seen by all of them and by the
/// sidebar that renders them.
///
/// The registry performs no validation: labels, icons and handles may repeat,
/// and an item may be registered while it still has a parent elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MenuRegistry {
    items: Rc<RefCell<Rc<Vec<MenuItem>>>>,
}

impl MenuRegistry {
    /// Creates an empty [`MenuRegistry`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the given items to the root items, in order.
    pub fn register(&self, items: impl IntoIterator<Item = MenuItem>) {
        let items: Vec<MenuItem> = items.into_iter().collect();

        let mut roots = self.items_mut();
        let before = roots.len();

        roots.extend(items);

        log::debug!(
            "Tools menu: registered {} item(s), {} in total",
            roots.len() - before,
            roots.len()
        );
    }

    /// Removes every root item.
    ///
    /// Subtrees go with their roots; children are not visited.
    pub fn clear(&self) {
        let removed = mem::take(&mut *self.items.borrow_mut());

        log::debug!("Tools menu: cleared {} item(s)", removed.len());
    }

    /// Removes every occurrence of `item` from the root items.
    ///
    /// Returns `true` if anything was removed.
    pub fn unregister(&self, item: &MenuItem) -> bool {
        if !self.items().contains(item) {
            return false;
        }

        self.items_mut().retain(|root| root != item);

        true
    }

    /// Returns the current root items.
    ///
    /// The list shares its handles with the registry, so edits to an item
    /// are seen everywhere. The registry is not borrowed while the list is
    /// held; registering or clearing afterwards leaves the returned list as
    /// it was.
    pub fn items(&self) -> Rc<Vec<MenuItem>> {
        Rc::clone(&self.items.borrow())
    }

    /// Returns a mutable view of the root items.
    ///
    /// Entries may be reordered, removed or inserted directly.
    pub fn items_mut(&self) -> RefMut<'_, Vec<MenuItem>> {
        RefMut::map(self.items.borrow_mut(), Rc::make_mut)
    }

    /// Returns the number of root items.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if no item is registered.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Finds the first item with the given label, searching depth-first
    /// from the first root.
    pub fn find(&self, label: &str) -> Option<MenuItem> {
        let mut found = None;

        let _ = item::walk(&self.items(), &mut |candidate, _, _| {
            if &*candidate.label() == label {
                found = Some(candidate.clone());
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        found
    }

    /// Flattens the whole menu for rendering.
    ///
    /// See [`MenuEntry`].
    pub fn snapshot(&self) -> Vec<MenuEntry> {
        snapshot::flatten(&self.items(), 0)
    }

    /// Starts a [`Registration`] scope that clears the registry when dropped.
    pub fn scope(&self) -> Registration {
        Registration {
            registry: self.clone(),
        }
    }
}

/// A registration scope of a [`MenuRegistry`].
///
/// A view that contributes items while it is shown holds a [`Registration`]
/// for as long as it lives. Dropping it clears the registry, so items never
/// outlive the view that added them.
#[derive(Debug)]
#[must_use = "dropping a `Registration` clears the registry immediately"]
pub struct Registration {
    registry: MenuRegistry,
}

impl Registration {
    /// Appends the given items to the registry.
    ///
    /// See [`MenuRegistry::register`].
    pub fn register(&self, items: impl IntoIterator<Item = MenuItem>) {
        self.registry.register(items);
    }

    /// Returns the registry of this scope.
    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        log::debug!("Tools menu: registration scope ended");

        self.registry.clear();
    }
}
