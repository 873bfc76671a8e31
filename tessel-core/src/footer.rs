//! Default footer composition.
//!
//! When the caller leaves the whole-footer slot undeclared, the dialog
//! composes a footer from two actions, cancel then confirm. Each action's
//! content is resolved as a slot; when both are suppressed there is no
//! footer region at all.

use tracing::debug;

use crate::slot::SlotContent;

/// Builds the default action nodes, with their handlers already bound.
pub trait FooterBuilder<N> {
    /// The cancel action. `label` is `None` for the default label.
    fn cancel(&self, label: Option<&N>) -> N;
    /// The confirm action, showing a busy indicator while `loading`.
    fn confirm(&self, label: Option<&N>, loading: bool) -> N;
}

/// A composed footer. At least one side is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Footer<N> {
    pub cancel: Option<N>,
    pub confirm: Option<N>,
}

impl<N> Footer<N> {
    /// Present actions in display order, cancel first.
    pub fn actions(&self) -> impl Iterator<Item = &N> {
        self.cancel.iter().chain(self.confirm.iter())
    }
}

/// Compose the default footer.
///
/// A literal node in either slot is the action's label, so the bound
/// handler stays attached. Producer output replaces the action verbatim.
pub fn compose<N>(
    cancel: &SlotContent<N>,
    confirm: &SlotContent<N>,
    loading: bool,
    builder: &impl FooterBuilder<N>,
) -> Option<Footer<N>> {
    let cancel = cancel.resolve_wrapped(|label| builder.cancel(label));
    let confirm = confirm.resolve_wrapped(|label| builder.confirm(label, loading));

    if cancel.is_none() && confirm.is_none() {
        debug!("both footer actions suppressed; no footer");
        return None;
    }
    Some(Footer { cancel, confirm })
}

/// The footer a dialog hands to its renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum FooterRender<N> {
    /// No footer region.
    Hidden,
    /// The caller's own footer, passed through unchanged.
    Custom(N),
    /// The default cancel/confirm footer.
    Composed(Footer<N>),
}

impl<N> FooterRender<N> {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Resolve the whole-footer slot.
///
/// Only an undeclared footer triggers composition. A declared footer is
/// used as is: a node or producer is the footer, and a bare flag has no
/// node to show, so `true` and `false` both leave the footer region empty.
pub fn resolve_footer<N: Clone>(
    footer: &SlotContent<N>,
    compose: impl FnOnce() -> Option<Footer<N>>,
) -> FooterRender<N> {
    match footer {
        SlotContent::Absent => compose().map_or(FooterRender::Hidden, FooterRender::Composed),
        SlotContent::Flag(_) => FooterRender::Hidden,
        SlotContent::Node(node) => FooterRender::Custom(node.clone()),
        SlotContent::Producer(f) => FooterRender::Custom(f()),
    }
}
