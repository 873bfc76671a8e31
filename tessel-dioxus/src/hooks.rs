//! Custom Dioxus hooks for tessel components.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::{DialogConfig, SwitchConfig};
use crate::host::HostRegistry;
use crate::renderer::RendererHandle;

/// A headless model that survives re-renders.
///
/// The model lives outside the signal system so render passes can
/// reconcile it without writing a signal; [`ModelHandle::changed`] bumps a
/// version signal to request a re-render after an interaction.
pub struct ModelHandle<M: 'static> {
    model: Rc<RefCell<M>>,
    version: Signal<usize>,
}

impl<M: 'static> Clone for ModelHandle<M> {
    fn clone(&self) -> Self {
        Self {
            model: Rc::clone(&self.model),
            version: self.version,
        }
    }
}

impl<M: 'static> ModelHandle<M> {
    /// Run `f` with exclusive access to the model.
    ///
    /// The borrow ends before this returns, so callbacks dispatched
    /// afterwards may read the model again.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut M) -> R) -> R {
        f(&mut self.model.borrow_mut())
    }

    /// The shared cell, for helpers that manage the borrow themselves.
    pub fn cell(&self) -> &RefCell<M> {
        &self.model
    }

    /// Request a re-render of the owning component.
    pub fn changed(&self) {
        let mut version = self.version;
        *version.write() += 1;
    }
}

/// Create (once) and subscribe to a headless model.
///
/// Components that call this re-render whenever [`ModelHandle::changed`]
/// is called.
#[must_use]
pub fn use_model<M: 'static>(init: impl FnOnce() -> M) -> ModelHandle<M> {
    let model = use_hook(|| Rc::new(RefCell::new(init())));
    let version = use_signal(|| 0_usize);

    // Read the signal to subscribe to changes
    let _ = version();

    ModelHandle { model, version }
}

/// Dialog defaults from context, if an ancestor provided them.
#[must_use]
pub fn use_dialog_config() -> Option<DialogConfig> {
    try_use_context::<DialogConfig>()
}

/// Switch defaults from context, or the built-in defaults.
#[must_use]
pub fn use_switch_config() -> SwitchConfig {
    try_use_context::<SwitchConfig>().unwrap_or_default()
}

/// The nearest host registry.
///
/// Without a [`provide_host_registry`](crate::host::provide_host_registry)
/// ancestor, one registry is created at the root and shared by the whole
/// app, so mount points and dialogs always meet.
#[must_use]
pub fn use_host_registry() -> HostRegistry {
    use_root_context(HostRegistry::default)
}

/// The overlay renderer from context, if one was provided.
#[must_use]
pub fn use_dialog_renderer() -> Option<RendererHandle> {
    try_use_context::<RendererHandle>()
}
