//! Declarative tools menu layouts.
//!
//! Supports reading layouts from RON text or `.ron` files:
//!
//! ```ron
//! (
//!     items: [
//!         (
//!             label: "Export",
//!             icon: Some("download"),
//!             children: [(label: "As PDF"), (label: "As CSV")],
//!         ),
//!     ],
//! )
//! ```
//!
//! Layouts carry no callbacks; attach them to the built items afterwards.
use std::path::Path;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::{MAX_DEPTH, MenuItem, MenuRegistry};
use crate::{Error, Result};

/// A serializable description of a list of menu trees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLayout {
    /// Root items, in order.
    #[serde(default)]
    pub items: Vec<MenuLayoutItem>,
}

/// A serializable description of one menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLayoutItem {
    /// Text label.
    pub label: String,
    /// Icon identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<SmolStr>,
    /// Child items, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuLayoutItem>,
}

impl MenuLayout {
    /// Parses a [`MenuLayout`] from RON text.
    pub fn from_ron_str(content: &str) -> Result<Self> {
        ron::from_str(content).map_err(|error| Error::Parse(error.to_string()))
    }

    /// Loads a [`MenuLayout`] from a file.
    ///
    /// Only the RON format (`.ron` extension) is supported.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        if extension != "ron" {
            return Err(Error::UnsupportedFormat(extension.to_string()));
        }

        let content = std::fs::read_to_string(path)?;

        log::debug!("Tools menu: loading layout from {}", path.display());

        Self::from_ron_str(&content)
    }

    /// Serializes the [`MenuLayout`] as pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|error| Error::Serialize(error.to_string()))
    }

    /// Captures the current trees of a [`MenuRegistry`].
    ///
    /// Callbacks are dropped. Items that are their own ancestors and
    /// anything deeper than [`MAX_DEPTH`] levels are left out.
    pub fn from_registry(registry: &MenuRegistry) -> Self {
        Self {
            items: registry
                .items()
                .iter()
                .map(|item| MenuLayoutItem::capture(item, &mut Vec::new()))
                .collect(),
        }
    }

    /// Builds linked [`MenuItem`] trees, ready to be registered.
    pub fn build(&self) -> Vec<MenuItem> {
        self.items.iter().map(MenuLayoutItem::build).collect()
    }
}

impl MenuLayoutItem {
    /// Creates a [`MenuLayoutItem`] with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    /// Builds a linked [`MenuItem`] tree from this description.
    pub fn build(&self) -> MenuItem {
        let item = MenuItem::new(self.label.clone());

        if let Some(icon) = &self.icon {
            item.set_icon(icon.clone());
        }

        item.with_children(self.children.iter().map(MenuLayoutItem::build))
    }

    fn capture(item: &MenuItem, path: &mut Vec<MenuItem>) -> Self {
        let mut children = Vec::new();

        if path.len() < MAX_DEPTH {
            path.push(item.clone());

            for child in item.children().iter() {
                if !path.contains(child) {
                    children.push(Self::capture(child, path));
                }
            }

            path.truncate(path.len() - 1);
        }

        Self {
            label: item.label().to_string(),
            icon: item.icon(),
            children,
        }
    }
}
