//! The core library of the Poseidon tools menu.
//!
//! This library holds the tools menu model shared by every module of an
//! application: the [`MenuItem`] tree, the [`MenuRegistry`] of root items and
//! the flattened [`MenuEntry`] view a sidebar renderer draws from.
//!
//! It is single-threaded by construction. Handles are reference counted and
//! interior mutable, so edits made through one handle are visible through
//! every other handle to the same node.
//!
//! [`MenuItem`]: menu::MenuItem
//! [`MenuRegistry`]: menu::MenuRegistry
//! [`MenuEntry`]: menu::MenuEntry
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod error;
pub mod menu;

pub use error::Error;
pub use menu::{MenuEntry, MenuItem, MenuRegistry, Registration};

#[cfg(feature = "serde")]
pub use menu::{MenuLayout, MenuLayoutItem};

/// The result of a fallible operation of the tools menu.
pub type Result<T> = std::result::Result<T, Error>;
