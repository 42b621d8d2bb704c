//! Poseidon is the tools menu service of the Poseidon Next framework.
//!
//! Application modules contribute entries to the right-hand tools sidebar by
//! registering [`MenuItem`] trees in a shared [`MenuRegistry`]. The sidebar
//! reads the registry and redraws; it never gets called back by it.
//!
//! # The Pocket Guide
//! Create one registry for the session and hand a clone to every module:
//!
//! ```
//! use poseidon::tools_menu::MenuRegistry;
//!
//! let registry = MenuRegistry::new();
//! let for_reports = registry.clone();
//! # let _ = for_reports;
//! ```
//!
//! A module builds its items and registers them, usually for as long as its
//! view is shown:
//!
//! ```
//! use poseidon::tools_menu::{self, MenuItem, MenuRegistry};
//!
//! fn open_reports(registry: &MenuRegistry) -> tools_menu::Registration {
//!     let scope = registry.scope();
//!
//!     scope.register([tools_menu::item!("Export", icon = "download", [
//!         MenuItem::new("As PDF").on_selected(|| println!("exporting PDF")),
//!         MenuItem::new("As CSV").on_selected(|| println!("exporting CSV")),
//!     ])]);
//!
//!     scope
//! }
//!
//! let registry = MenuRegistry::new();
//! let reports = open_reports(&registry);
//!
//! assert_eq!(registry.snapshot().len(), 3);
//!
//! // Leaving the view clears the menu.
//! drop(reports);
//! assert!(registry.is_empty());
//! ```
//!
//! The sidebar draws from [`MenuRegistry::snapshot`] and activates an entry
//! with [`MenuItem::select`].
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use poseidon_core as core;

pub mod tools_menu {
    //! Build and register tools menu items.
    pub use crate::core::menu::*;
}

pub use crate::core::{Error, Result};
pub use tools_menu::{MenuItem, MenuRegistry};
