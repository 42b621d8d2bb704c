//! Tools menu model.
//!
//! This module defines the registry that application modules use to
//! contribute entries to the right-hand tools sidebar. Each contribution is a
//! tree of [`MenuItem`] nodes; the roots live in a [`MenuRegistry`] that the
//! sidebar reads and redraws from.
//!
//! ```
//! use poseidon_core::menu::{self, MenuRegistry};
//!
//! let registry = MenuRegistry::new();
//!
//! registry.register([menu::item!("Export", icon = "download", [
//!     menu::item!("As PDF"),
//!     menu::item!("As CSV"),
//! ])]);
//!
//! assert_eq!(registry.items()[0].children().len(), 2);
//! assert_eq!(registry.items()[0].children()[1].depth(), 1);
//! ```
//!
//! Handles are shared, not copied. Editing an item that is already
//! registered is visible to the sidebar on its next read:
//!
//! ```
//! use poseidon_core::menu::{MenuItem, MenuRegistry};
//!
//! let registry = MenuRegistry::new();
//! registry.register([MenuItem::new("Draft")]);
//!
//! registry.items()[0].set_label("Publish");
//!
//! assert_eq!(&*registry.items()[0].label(), "Publish");
//! ```
mod item;
#[cfg(feature = "serde")]
mod layout;
mod registry;
mod snapshot;


pub use item::{Callback, MenuItem};
#[cfg(feature = "serde")]
pub use layout::{MenuLayout, MenuLayoutItem};
pub use registry::{MenuRegistry, Registration};
pub use snapshot::MenuEntry;

/// Maximum number of parent hops any traversal of the menu will follow.
///
/// The permissive tree operations do not reject cycles, so every walk over
/// parents or children stops here instead of looping forever.
pub const MAX_DEPTH: usize = 64;

/// Creates a [`MenuItem`] with optional icon and children.
///
/// # Examples
/// ```
/// use poseidon_core::menu;
///
/// // Label only
/// let refresh = menu::item!("Refresh");
///
/// // With an icon
/// let print = menu::item!("Print", icon = "printer");
///
/// // With children
/// let share = menu::item!("Share", [menu::item!("Link"), menu::item!("Email")]);
///
/// // With both
/// let export = menu::item!("Export", icon = "download", [menu::item!("As PDF")]);
///
/// assert_eq!(share.children().len(), 2);
/// assert_eq!(export.icon().as_deref(), Some("download"));
/// # let _ = (refresh, print);
/// ```
#[macro_export]
macro_rules! menu_item {
    ($label:expr $(,)?) => {
        $crate::menu::MenuItem::new($label)
    };
    ($label:expr, icon = $icon:expr $(,)?) => {
        $crate::menu::MenuItem::new($label).with_icon($icon)
    };
    ($label:expr, [$($child:expr),* $(,)?] $(,)?) => {
        $crate::menu::MenuItem::new($label).with_children([$($child),*])
    };
    ($label:expr, icon = $icon:expr, [$($child:expr),* $(,)?] $(,)?) => {
        $crate::menu::MenuItem::new($label)
            .with_icon($icon)
            .with_children([$($child),*])
    };
}

// Re-export the macro under the menu module for nicer syntax: menu::item!()
#[doc(inline)]
pub use crate::menu_item as item;
