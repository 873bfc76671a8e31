//! Mount hosts known to the component tree.
//!
//! A webview document cannot be queried synchronously from Rust, so hosts
//! are declared instead: every [`MountPoint`](crate::components::MountPoint)
//! registers its id here while mounted, and selector lookups resolve
//! against that set. The document root (`body`) always exists.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;
use tessel_core::mount::{HostEnvironment, DEFAULT_HOST_SELECTOR};

/// Identifies a mount host by element id, or the document root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HostId {
    Root,
    Element(String),
}

impl HostId {
    /// The value used for the renderer's `data-attach` attribute.
    pub fn as_attr(&self) -> &str {
        match self {
            Self::Root => DEFAULT_HOST_SELECTOR,
            Self::Element(id) => id,
        }
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str(DEFAULT_HOST_SELECTOR),
            Self::Element(id) => write!(f, "#{id}"),
        }
    }
}

/// Registry of mounted hosts, shared through context.
#[derive(Clone, Default)]
pub struct HostRegistry {
    ids: Rc<RefCell<BTreeSet<String>>>,
}

impl HostRegistry {
    pub fn register(&self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(%id, "mount point registered");
        self.ids.borrow_mut().insert(id);
    }

    pub fn unregister(&self, id: &str) {
        tracing::debug!(%id, "mount point removed");
        self.ids.borrow_mut().remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.borrow().contains(id)
    }
}

/// Give the calling component's subtree its own host registry.
///
/// Optional: without it every component shares one root registry. Use it
/// to keep the mount points of separate subtrees apart.
pub fn provide_host_registry() -> HostRegistry {
    use_context_provider(HostRegistry::default)
}

impl HostEnvironment for HostRegistry {
    type Host = HostId;

    /// Supports `body`/`html` and `#id` selectors.
    fn query_selector(&self, selector: &str) -> Option<HostId> {
        let selector = selector.trim();
        if selector == DEFAULT_HOST_SELECTOR || selector == "html" {
            return Some(HostId::Root);
        }
        let id = selector.strip_prefix('#')?;
        self.contains(id).then(|| HostId::Element(id.to_string()))
    }

    fn root(&self) -> HostId {
        HostId::Root
    }
}

// Registries compare by identity so context consumers are not memoized
// against a different registry.
impl PartialEq for HostRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ids, &other.ids)
    }
}

impl fmt::Debug for HostRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ids.borrow().iter()).finish()
    }
}
