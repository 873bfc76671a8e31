//! Slot content resolution.
//!
//! A slot is a named region of a widget (header, footer, close button,
//! action label) whose content may be defaulted, overridden, or suppressed.

use std::fmt;
use std::rc::Rc;

/// Declared content of a slot.
pub enum SlotContent<N> {
    /// Nothing declared; the slot uses its default.
    Absent,
    /// A literal node.
    Node(N),
    /// `true` shows the default, `false` suppresses the slot entirely.
    Flag(bool),
    /// A zero-argument producer, invoked on every resolve.
    Producer(Rc<dyn Fn() -> N>),
}

impl<N> SlotContent<N> {
    pub fn node(node: N) -> Self {
        Self::Node(node)
    }

    pub fn producer(f: impl Fn() -> N + 'static) -> Self {
        Self::Producer(Rc::new(f))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Resolve against `default`, returning `None` when suppressed.
    pub fn resolve(&self, default: N) -> Option<N>
    where
        N: Clone,
    {
        self.resolve_with(|| default)
    }

    /// Like [`resolve`](Self::resolve), building the default only when used.
    pub fn resolve_with(&self, default: impl FnOnce() -> N) -> Option<N>
    where
        N: Clone,
    {
        match self {
            Self::Absent | Self::Flag(true) => Some(default()),
            Self::Flag(false) => None,
            Self::Producer(f) => Some(f()),
            Self::Node(node) => Some(node.clone()),
        }
    }

    /// Resolve a slot whose literal node is a label rather than a
    /// replacement.
    ///
    /// `wrap` receives the literal (or `None` for the default label) and
    /// builds the final node around it. Producer output is still used
    /// verbatim and suppression still yields `None`.
    pub fn resolve_wrapped(&self, wrap: impl FnOnce(Option<&N>) -> N) -> Option<N> {
        match self {
            Self::Absent | Self::Flag(true) => Some(wrap(None)),
            Self::Flag(false) => None,
            Self::Producer(f) => Some(f()),
            Self::Node(label) => Some(wrap(Some(label))),
        }
    }
}

/// Resolve a close affordance.
///
/// Only an explicit node or producer overrides the default; absent and
/// boolean content both fall back to `default`.
pub fn resolve_close<N: Clone>(content: &SlotContent<N>, default: N) -> N {
    match content {
        SlotContent::Node(node) => node.clone(),
        SlotContent::Producer(f) => f(),
        SlotContent::Absent | SlotContent::Flag(_) => default,
    }
}

/// Declared header content.
#[derive(Clone, PartialEq)]
pub enum HeaderContent<N> {
    Absent,
    /// Plain text, wrapped in the default heading presentation.
    Text(String),
    /// An arbitrary node, passed through verbatim.
    Node(N),
}

impl<N: Clone> HeaderContent<N> {
    /// Resolve the header, wrapping text with `heading`.
    pub fn resolve(&self, heading: impl FnOnce(&str) -> N) -> Option<N> {
        match self {
            Self::Absent => None,
            Self::Text(text) => Some(heading(text)),
            Self::Node(node) => Some(node.clone()),
        }
    }
}

impl<N> Default for HeaderContent<N> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<N> From<&str> for HeaderContent<N> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<N> From<String> for HeaderContent<N> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<N> Default for SlotContent<N> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<N> From<bool> for SlotContent<N> {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl<N: Clone> Clone for SlotContent<N> {
    fn clone(&self) -> Self {
        match self {
            Self::Absent => Self::Absent,
            Self::Node(node) => Self::Node(node.clone()),
            Self::Flag(flag) => Self::Flag(*flag),
            Self::Producer(f) => Self::Producer(Rc::clone(f)),
        }
    }
}

// Producers compare by identity so a re-created closure counts as a change.
impl<N: PartialEq> PartialEq for SlotContent<N> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Node(a), Self::Node(b)) => a == b,
            (Self::Flag(a), Self::Flag(b)) => a == b,
            (Self::Producer(a), Self::Producer(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for SlotContent<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Self::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for HeaderContent<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Node(node) => f.debug_tuple("Node").field(node).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    const DEFAULT: &str = "default";

    #[test]
    fn false_flag_suppresses() {
        let content = SlotContent::<&str>::from(false);
        assert_eq!(content.resolve(DEFAULT), None);
    }

    #[test]
    fn true_flag_and_absent_use_default() {
        assert_eq!(SlotContent::from(true).resolve(DEFAULT), Some(DEFAULT));
        assert_eq!(SlotContent::Absent.resolve(DEFAULT), Some(DEFAULT));
    }

    #[test]
    fn producer_takes_precedence_over_default() {
        let content = SlotContent::producer(|| "produced");
        assert_eq!(content.resolve(DEFAULT), Some("produced"));
    }

    #[test]
    fn producer_runs_on_every_resolve() {
        let calls = Rc::new(Cell::new(0));
        let content = {
            let calls = Rc::clone(&calls);
            SlotContent::producer(move || {
                calls.set(calls.get() + 1);
                calls.get()
            })
        };
        assert_eq!(content.resolve(0), Some(1));
        assert_eq!(content.resolve(0), Some(2));
    }

    #[test]
    fn literal_node_is_used_verbatim() {
        assert_eq!(SlotContent::node("literal").resolve(DEFAULT), Some("literal"));
    }

    #[test]
    fn default_is_built_lazily() {
        let built = Cell::new(false);
        let content = SlotContent::node(String::from("x"));
        let resolved = content.resolve_with(|| {
            built.set(true);
            String::from(DEFAULT)
        });
        assert_eq!(resolved.as_deref(), Some("x"));
        assert!(!built.get());
    }

    #[test]
    fn wrapped_resolution_wraps_literals_and_defaults() {
        let wrap = |label: Option<&String>| {
            format!("[{}]", label.map_or("Cancel", String::as_str))
        };
        assert_eq!(
            SlotContent::Absent.resolve_wrapped(wrap).as_deref(),
            Some("[Cancel]")
        );
        assert_eq!(
            SlotContent::node(String::from("Nope")).resolve_wrapped(wrap).as_deref(),
            Some("[Nope]")
        );
        assert_eq!(SlotContent::Flag(false).resolve_wrapped(wrap), None);
        assert_eq!(
            SlotContent::producer(|| String::from("custom"))
                .resolve_wrapped(wrap)
                .as_deref(),
            Some("custom")
        );
    }

    #[test]
    fn close_falls_back_on_non_node_content() {
        assert_eq!(resolve_close(&SlotContent::Absent, "x-icon"), "x-icon");
        assert_eq!(resolve_close(&SlotContent::Flag(false), "x-icon"), "x-icon");
        assert_eq!(resolve_close(&SlotContent::Flag(true), "x-icon"), "x-icon");
        assert_eq!(resolve_close(&SlotContent::node("close"), "x-icon"), "close");
        assert_eq!(
            resolve_close(&SlotContent::producer(|| "made"), "x-icon"),
            "made"
        );
    }

    #[test]
    fn text_header_is_wrapped_and_nodes_pass_through() {
        let heading = |text: &str| format!("<h5>{text}</h5>");
        let text = HeaderContent::<String>::from("Confirm delete");
        assert_eq!(
            text.resolve(heading).as_deref(),
            Some("<h5>Confirm delete</h5>")
        );

        let node = HeaderContent::Node(String::from("<custom/>"));
        assert_eq!(node.resolve(heading).as_deref(), Some("<custom/>"));

        assert_eq!(HeaderContent::<String>::Absent.resolve(heading), None);
    }

    #[test]
    fn producers_compare_by_identity() {
        let a = SlotContent::producer(|| 1);
        let b = SlotContent::producer(|| 1);
        assert!(a == a.clone());
        assert!(a != b);
        assert_eq!(SlotContent::node(1), SlotContent::node(1));
    }
}
