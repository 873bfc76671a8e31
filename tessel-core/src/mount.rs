//! Mount target resolution for overlay widgets.
//!
//! An overlay declares *where* it wants to be mounted; the answer is only
//! computed at mount time because selectors and producers depend on the
//! live document. Resolution never fails: a selector that matches nothing
//! falls back to the default host.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use tracing::{debug, warn};

/// Selector of the conventional default host.
pub const DEFAULT_HOST_SELECTOR: &str = "body";

static GLOBAL_DEFAULT_HOST: Lazy<DefaultHost> = Lazy::new(DefaultHost::default);

/// Install the process-wide default host selector.
///
/// Call once during startup; later calls replace the value for every
/// subsequent resolution.
pub fn init_default_host(selector: impl Into<String>) {
    GLOBAL_DEFAULT_HOST.set(selector);
}

/// The process-wide default host setting.
pub fn global_default_host() -> &'static DefaultHost {
    &GLOBAL_DEFAULT_HOST
}

/// A swappable default host selector.
pub struct DefaultHost {
    selector: ArcSwap<String>,
}

impl DefaultHost {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: ArcSwap::from_pointee(selector.into()),
        }
    }

    pub fn get(&self) -> Arc<String> {
        self.selector.load_full()
    }

    pub fn set(&self, selector: impl Into<String>) {
        let selector = selector.into();
        debug!(%selector, "default mount host changed");
        self.selector.store(Arc::new(selector));
    }
}

impl Default for DefaultHost {
    fn default() -> Self {
        Self::new(DEFAULT_HOST_SELECTOR)
    }
}

impl fmt::Debug for DefaultHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DefaultHost").field(&self.get()).finish()
    }
}

/// The live document an overlay mounts into.
pub trait HostEnvironment {
    type Host: Clone;

    /// Look up a host by selector, `None` when nothing matches.
    fn query_selector(&self, selector: &str) -> Option<Self::Host>;

    /// The document root, used when even the default selector misses.
    fn root(&self) -> Self::Host;
}

/// Where an overlay asks to be mounted.
pub enum MountTarget<H> {
    /// The default host.
    Default,
    /// A selector looked up at mount time.
    Selector(String),
    /// A concrete host.
    Host(H),
    /// Invoked on every mount, never cached.
    Producer(Rc<dyn Fn() -> H>),
    /// Render inline, without a portal.
    Disabled,
}

/// Where an overlay is actually mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedHost<H> {
    Portal(H),
    Inline,
}

impl<H> ResolvedHost<H> {
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline)
    }

    pub fn host(&self) -> Option<&H> {
        match self {
            Self::Portal(host) => Some(host),
            Self::Inline => None,
        }
    }
}

impl<H> MountTarget<H> {
    pub fn producer(f: impl Fn() -> H + 'static) -> Self {
        Self::Producer(Rc::new(f))
    }

    /// Resolve against `env` using the process-wide default host.
    pub fn resolve<E>(&self, env: &E) -> ResolvedHost<H>
    where
        E: HostEnvironment<Host = H>,
        H: Clone,
    {
        MountResolver::new(env).resolve(self)
    }
}

/// Resolves mount targets against one environment.
pub struct MountResolver<'a, E> {
    env: &'a E,
    defaults: &'a DefaultHost,
    default_selector: Option<String>,
}

impl<'a, E: HostEnvironment> MountResolver<'a, E> {
    pub fn new(env: &'a E) -> Self {
        Self {
            env,
            defaults: global_default_host(),
            default_selector: None,
        }
    }

    /// Read the default selector from `defaults` instead of the global.
    #[must_use]
    pub fn with_defaults(mut self, defaults: &'a DefaultHost) -> Self {
        self.defaults = defaults;
        self
    }

    /// Override the default selector for this resolver only.
    #[must_use]
    pub fn with_default_selector(mut self, selector: impl Into<String>) -> Self {
        self.default_selector = Some(selector.into());
        self
    }

    pub fn resolve(&self, target: &MountTarget<E::Host>) -> ResolvedHost<E::Host> {
        match target {
            MountTarget::Disabled => ResolvedHost::Inline,
            MountTarget::Default => ResolvedHost::Portal(self.default_host()),
            MountTarget::Host(host) => ResolvedHost::Portal(host.clone()),
            MountTarget::Producer(f) => ResolvedHost::Portal(f()),
            MountTarget::Selector(selector) => match self.env.query_selector(selector) {
                Some(host) => ResolvedHost::Portal(host),
                None => {
                    if cfg!(debug_assertions) {
                        warn!(%selector, "mount selector matched nothing; using default host");
                    } else {
                        debug!(%selector, "mount selector matched nothing; using default host");
                    }
                    ResolvedHost::Portal(self.default_host())
                }
            },
        }
    }

    /// The default host, or the document root if the default selector misses.
    pub fn default_host(&self) -> E::Host {
        let selector = match &self.default_selector {
            Some(selector) => selector.clone(),
            None => self.defaults.get().as_ref().clone(),
        };
        self.env
            .query_selector(&selector)
            .unwrap_or_else(|| self.env.root())
    }
}

impl<H> Default for MountTarget<H> {
    fn default() -> Self {
        Self::Default
    }
}

impl<H> From<&str> for MountTarget<H> {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

impl<H> From<String> for MountTarget<H> {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

impl<H: Clone> Clone for MountTarget<H> {
    fn clone(&self) -> Self {
        match self {
            Self::Default => Self::Default,
            Self::Selector(selector) => Self::Selector(selector.clone()),
            Self::Host(host) => Self::Host(host.clone()),
            Self::Producer(f) => Self::Producer(Rc::clone(f)),
            Self::Disabled => Self::Disabled,
        }
    }
}

impl<H: PartialEq> PartialEq for MountTarget<H> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Default, Self::Default) | (Self::Disabled, Self::Disabled) => true,
            (Self::Selector(a), Self::Selector(b)) => a == b,
            (Self::Host(a), Self::Host(b)) => a == b,
            (Self::Producer(a), Self::Producer(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<H: fmt::Debug> fmt::Debug for MountTarget<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Selector(selector) => f.debug_tuple("Selector").field(selector).finish(),
            Self::Host(host) => f.debug_tuple("Host").field(host).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
            Self::Disabled => f.write_str("Disabled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::*;

    /// A document of named nodes; node 0 is the root.
    #[derive(Default)]
    struct FakeDocument {
        nodes: RefCell<HashMap<String, u32>>,
        queries: Cell<usize>,
    }

    impl FakeDocument {
        fn with(nodes: &[(&str, u32)]) -> Self {
            let doc = Self::default();
            for (selector, id) in nodes {
                doc.nodes.borrow_mut().insert((*selector).to_string(), *id);
            }
            doc
        }
    }

    impl HostEnvironment for FakeDocument {
        type Host = u32;

        fn query_selector(&self, selector: &str) -> Option<u32> {
            self.queries.set(self.queries.get() + 1);
            self.nodes.borrow().get(selector).copied()
        }

        fn root(&self) -> u32 {
            0
        }
    }

    fn resolver<'a>(doc: &'a FakeDocument, defaults: &'a DefaultHost) -> MountResolver<'a, FakeDocument> {
        MountResolver::new(doc).with_defaults(defaults)
    }

    #[test]
    fn disabled_renders_inline() {
        let doc = FakeDocument::with(&[("body", 1)]);
        let defaults = DefaultHost::default();
        assert!(resolver(&doc, &defaults).resolve(&MountTarget::Disabled).is_inline());
        assert_eq!(doc.queries.get(), 0);
    }

    #[test]
    fn default_uses_default_selector() {
        let doc = FakeDocument::with(&[("body", 1)]);
        let defaults = DefaultHost::default();
        assert_eq!(
            resolver(&doc, &defaults).resolve(&MountTarget::Default),
            ResolvedHost::Portal(1)
        );
    }

    #[test]
    fn missing_selector_falls_back_to_default_host() {
        let doc = FakeDocument::with(&[("body", 1)]);
        let defaults = DefaultHost::default();
        let target = MountTarget::from("#nonexistent-id");
        assert_eq!(resolver(&doc, &defaults).resolve(&target), ResolvedHost::Portal(1));
    }

    #[test]
    fn matching_selector_is_used() {
        let doc = FakeDocument::with(&[("body", 1), ("#modals", 7)]);
        let defaults = DefaultHost::default();
        let target = MountTarget::from("#modals");
        assert_eq!(resolver(&doc, &defaults).resolve(&target), ResolvedHost::Portal(7));
    }

    #[test]
    fn selector_is_looked_up_at_resolve_time() {
        let doc = FakeDocument::with(&[("body", 1)]);
        let defaults = DefaultHost::default();
        let target = MountTarget::from("#late");
        assert_eq!(resolver(&doc, &defaults).resolve(&target), ResolvedHost::Portal(1));

        doc.nodes.borrow_mut().insert("#late".to_string(), 9);
        assert_eq!(resolver(&doc, &defaults).resolve(&target), ResolvedHost::Portal(9));
    }

    #[test]
    fn producer_is_invoked_on_every_resolve() {
        let doc = FakeDocument::with(&[("body", 1)]);
        let defaults = DefaultHost::default();
        let calls = Rc::new(Cell::new(0_u32));
        let target = {
            let calls = Rc::clone(&calls);
            MountTarget::producer(move || {
                calls.set(calls.get() + 1);
                100 + calls.get()
            })
        };
        let resolver = resolver(&doc, &defaults);
        assert_eq!(resolver.resolve(&target), ResolvedHost::Portal(101));
        assert_eq!(resolver.resolve(&target), ResolvedHost::Portal(102));
    }

    #[test]
    fn concrete_host_is_used_directly() {
        let doc = FakeDocument::default();
        let defaults = DefaultHost::default();
        assert_eq!(
            resolver(&doc, &defaults).resolve(&MountTarget::Host(42)),
            ResolvedHost::Portal(42)
        );
        assert_eq!(doc.queries.get(), 0);
    }

    #[test]
    fn missing_default_falls_back_to_root() {
        let doc = FakeDocument::default();
        let defaults = DefaultHost::default();
        assert_eq!(
            resolver(&doc, &defaults).resolve(&MountTarget::Default),
            ResolvedHost::Portal(0)
        );
    }

    #[test]
    fn configured_default_is_honoured_and_overridable() {
        let doc = FakeDocument::with(&[("body", 1), ("#app", 2), ("#layer", 3)]);
        let defaults = DefaultHost::new("#app");
        assert_eq!(
            resolver(&doc, &defaults).resolve(&MountTarget::Default),
            ResolvedHost::Portal(2)
        );

        defaults.set("#layer");
        assert_eq!(
            resolver(&doc, &defaults).resolve(&MountTarget::from("#gone")),
            ResolvedHost::Portal(3)
        );

        let overridden = resolver(&doc, &defaults).with_default_selector("body");
        assert_eq!(overridden.resolve(&MountTarget::Default), ResolvedHost::Portal(1));
    }
}
