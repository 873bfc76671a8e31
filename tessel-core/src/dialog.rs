//! Headless dialog model.
//!
//! [`DialogModel`] turns caller props into a [`DialogRender`]: resolved
//! header, footer, close affordance and mount host, plus the options the
//! overlay renderer needs. It owns only the visibility reconciler; every
//! other field is derived fresh on each render pass.

use std::cell::RefCell;

use serde::Deserialize;

use crate::footer::{self, FooterBuilder, FooterRender};
use crate::mount::{HostEnvironment, MountResolver, MountTarget, ResolvedHost};
use crate::handler;
use crate::slot::{self, HeaderContent, SlotContent};
use crate::value::{ModePolicy, ValueReconciler};

/// Default dialog width.
pub const DEFAULT_WIDTH: &str = "520px";
/// Default stacking order.
pub const DEFAULT_Z_INDEX: i32 = 2500;

/// Whether the dialog blocks the rest of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DialogMode {
    #[default]
    Modal,
    NotModal,
}

/// Vertical placement of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Top,
    #[default]
    Center,
}

/// Explicit position, as CSS lengths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Offset {
    pub top: Option<String>,
    pub left: Option<String>,
}

/// Presentation options passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOptions {
    pub mode: DialogMode,
    pub placement: Placement,
    pub width: String,
    pub offset: Option<Offset>,
    pub z_index: i32,
    pub show_overlay: bool,
    pub prevent_scroll_through: bool,
    pub destroy_on_close: bool,
    pub draggable: bool,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            mode: DialogMode::default(),
            placement: Placement::default(),
            width: DEFAULT_WIDTH.to_string(),
            offset: None,
            z_index: DEFAULT_Z_INDEX,
            show_overlay: true,
            prevent_scroll_through: true,
            destroy_on_close: false,
            draggable: true,
        }
    }
}

/// Caller-facing dialog configuration.
pub struct DialogProps<N, H> {
    /// Controlled visibility.
    pub visible: Option<bool>,
    pub header: HeaderContent<N>,
    pub body: Option<N>,
    /// Whole-footer override; `Absent` composes the default footer.
    pub footer: SlotContent<N>,
    pub cancel_content: SlotContent<N>,
    pub confirm_content: SlotContent<N>,
    pub close_btn: SlotContent<N>,
    pub attach: MountTarget<H>,
    /// Busy indicator on the default confirm action.
    pub loading: bool,
    pub options: DialogOptions,
}

impl<N, H> Default for DialogProps<N, H> {
    fn default() -> Self {
        Self {
            visible: None,
            header: HeaderContent::Absent,
            body: None,
            footer: SlotContent::Absent,
            cancel_content: SlotContent::Absent,
            confirm_content: SlotContent::Absent,
            close_btn: SlotContent::Absent,
            attach: MountTarget::Default,
            loading: false,
            options: DialogOptions::default(),
        }
    }
}

/// Builds the dialog's default nodes.
///
/// Action handlers are bound by the implementation, typically with
/// [`crate::handler::or_close`].
pub trait DialogPresenter<N>: FooterBuilder<N> {
    /// Wrap plain header text in the default heading.
    fn heading(&self, text: &str) -> N;
    /// The default close affordance.
    fn close_icon(&self) -> N;
}

/// Everything the overlay renderer needs for one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogRender<N, H> {
    pub visible: bool,
    pub host: ResolvedHost<H>,
    pub header: Option<N>,
    pub body: Option<N>,
    pub footer: FooterRender<N>,
    pub close_btn: N,
    pub options: DialogOptions,
}

/// Effective handlers of the default footer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionHandlers<H> {
    pub cancel: H,
    pub confirm: H,
}

impl<H: Clone> ActionHandlers<H> {
    /// Cancel and confirm fall back to `close` when not supplied.
    pub fn resolve(cancel: Option<H>, confirm: Option<H>, close: H) -> Self {
        Self {
            cancel: handler::or_close(cancel, close.clone()),
            confirm: handler::or_close(confirm, close),
        }
    }
}

/// Close `model` on the user's behalf, then run `notify` with the reported
/// visibility.
///
/// The borrow of `model` ends before `notify` runs, so a handler that reads
/// the dialog already sees an uncontrolled dialog hidden.
pub fn close(model: &RefCell<DialogModel>, visible: Option<bool>, notify: impl FnOnce(bool)) {
    let reported = model.borrow_mut().request_close(visible);
    notify(reported);
}

/// Persistent dialog state.
#[derive(Debug, Clone, Default)]
pub struct DialogModel {
    visibility: ValueReconciler<bool>,
}

impl DialogModel {
    /// Create a model whose uncontrolled visibility starts at `default_visible`.
    pub fn new(default_visible: Option<bool>) -> Self {
        Self::with_policy(default_visible, ModePolicy::default())
    }

    pub fn with_policy(default_visible: Option<bool>, policy: ModePolicy) -> Self {
        Self {
            visibility: ValueReconciler::with_policy(default_visible, policy),
        }
    }

    pub fn is_visible(&mut self, visible: Option<bool>) -> bool {
        self.visibility.reconcile(visible.as_ref()).current
    }

    /// Record a user request to close.
    ///
    /// Returns the visibility to report to `on_close` (always `false`).
    /// Uncontrolled dialogs hide immediately; controlled ones wait for the
    /// caller.
    pub fn request_close(&mut self, visible: Option<bool>) -> bool {
        self.visibility.commit(visible.as_ref(), false)
    }

    /// Record a request to open an uncontrolled dialog.
    pub fn request_open(&mut self, visible: Option<bool>) -> bool {
        self.visibility.commit(visible.as_ref(), true)
    }

    /// Resolve one render pass.
    ///
    /// The mount host is resolved here, at render time, so selectors and
    /// producers see the current document.
    pub fn render<N, E>(
        &mut self,
        props: &DialogProps<N, E::Host>,
        presenter: &impl DialogPresenter<N>,
        resolver: &MountResolver<'_, E>,
    ) -> DialogRender<N, E::Host>
    where
        N: Clone,
        E: HostEnvironment,
    {
        let visible = self.is_visible(props.visible);
        let footer = footer::resolve_footer(&props.footer, || {
            footer::compose(
                &props.cancel_content,
                &props.confirm_content,
                props.loading,
                presenter,
            )
        });

        DialogRender {
            visible,
            host: resolver.resolve(&props.attach),
            header: props.header.resolve(|text| presenter.heading(text)),
            body: props.body.clone(),
            footer,
            close_btn: slot::resolve_close(&props.close_btn, presenter.close_icon()),
            options: props.options.clone(),
        }
    }
}
