//! Overlay renderer seam.
//!
//! `Dialog` resolves its props into a [`RenderDialog`] and hands it to a
//! [`DialogRenderer`] found in context. The renderer owns presentation:
//! backdrop, stacking, hide-vs-destroy, and the notifications the core
//! never originates (`on_opened`, `on_closed`, `on_click_overlay`,
//! `on_keydown_esc`).

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use tessel_core::dialog::{DialogMode, DialogOptions, Placement};
use tessel_core::{DialogRender, FooterRender, ResolvedHost};

use crate::components::ModalOverlay;
use crate::host::HostId;

/// What asked the dialog to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CancelButton,
    ConfirmButton,
    CloseButton,
    Escape,
    Overlay,
}

/// Payload of dialog action notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogEvent {
    pub trigger: CloseTrigger,
}

impl DialogEvent {
    pub fn new(trigger: CloseTrigger) -> Self {
        Self { trigger }
    }
}

/// One render pass worth of dialog state and callbacks.
#[derive(Clone, PartialEq)]
pub struct RenderDialog {
    pub dialog: DialogRender<Element, HostId>,
    pub class: Option<String>,
    /// Extra inline style appended to the dialog box.
    pub style: Option<String>,
    /// The dialog's generic close: hides an uncontrolled dialog and
    /// notifies `on_close`.
    pub on_close: EventHandler<DialogEvent>,
    pub on_click_close_btn: Option<EventHandler<MouseEvent>>,
    pub on_click_overlay: Option<EventHandler<()>>,
    pub on_keydown_esc: Option<EventHandler<KeyboardEvent>>,
    pub on_opened: Option<EventHandler<()>>,
    pub on_closed: Option<EventHandler<()>>,
}

/// Presents resolved dialogs.
pub trait DialogRenderer {
    fn render(&self, dialog: RenderDialog) -> Element;
}

/// Shared handle to a renderer, provided through context.
#[derive(Clone)]
pub struct RendererHandle(Rc<dyn DialogRenderer>);

impl RendererHandle {
    pub fn new(renderer: impl DialogRenderer + 'static) -> Self {
        Self(Rc::new(renderer))
    }

    pub fn render(&self, dialog: RenderDialog) -> Element {
        self.0.render(dialog)
    }
}

impl PartialEq for RendererHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for RendererHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RendererHandle(..)")
    }
}

/// Provide `renderer` to every `Dialog` below the calling component.
pub fn provide_dialog_renderer(renderer: impl DialogRenderer + 'static) -> RendererHandle {
    use_context_provider(|| RendererHandle::new(renderer))
}

/// The default renderer: a fixed-position overlay with an optional backdrop.
///
/// Content stays in its tree position; the resolved host is exposed as
/// `data-attach` for stylesheets and for renderers that relocate nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayRenderer;

impl DialogRenderer for OverlayRenderer {
    fn render(&self, dialog: RenderDialog) -> Element {
        rsx! { OverlayFrame { dialog } }
    }
}

/// Inline style for the dialog box.
fn dialog_style(options: &DialogOptions, extra: Option<&str>) -> String {
    let mut parts = vec![format!("width: {}", options.width)];
    if let Some(offset) = &options.offset {
        if let Some(top) = &offset.top {
            parts.push(format!("top: {top}"));
        }
        if let Some(left) = &offset.left {
            parts.push(format!("left: {left}"));
        }
    }
    if let Some(extra) = extra {
        parts.push(extra.trim().trim_end_matches(';').to_string());
    }
    parts.join("; ")
}

/// Classes for the positioning wrapper.
fn position_class(options: &DialogOptions, host: &ResolvedHost<HostId>) -> String {
    let placement = match options.placement {
        Placement::Top => "tessel-dialog__position--top",
        Placement::Center => "tessel-dialog__position--center",
    };
    let mut class = format!("tessel-dialog__position {placement}");
    if host.is_inline() {
        class.push_str(" tessel-dialog__position--inline");
    }
    if options.draggable && options.mode == DialogMode::NotModal {
        class.push_str(" tessel-dialog__position--draggable");
    }
    class
}

/// Which visibility notification a transition should fire, if any.
fn visibility_transition(previous: Option<bool>, visible: bool) -> Option<bool> {
    match (previous, visible) {
        (None | Some(false), true) => Some(true),
        (Some(true), false) => Some(false),
        _ => None,
    }
}

#[component]
fn OverlayFrame(dialog: RenderDialog) -> Element {
    let RenderDialog {
        dialog: resolved,
        class,
        style: extra_style,
        on_close,
        on_click_close_btn,
        on_click_overlay,
        on_keydown_esc,
        on_opened,
        on_closed,
    } = dialog;
    let DialogRender {
        visible,
        host,
        header,
        body,
        footer,
        close_btn,
        options,
    } = resolved;

    let last_visible = use_hook(|| Rc::new(Cell::new(None::<bool>)));
    use_effect(use_reactive((&visible,), move |(visible,)| {
        let previous = last_visible.replace(Some(visible));
        match visibility_transition(previous, visible) {
            Some(true) => {
                if let Some(handler) = on_opened {
                    handler.call(());
                }
            }
            Some(false) => {
                if let Some(handler) = on_closed {
                    handler.call(());
                }
            }
            None => {}
        }
    }));

    if !visible && options.destroy_on_close {
        return rsx! {};
    }

    let modal = options.mode == DialogMode::Modal;
    let attach = host.host().map(|host| host.as_attr().to_string());
    let hidden = if visible { "" } else { " tessel-dialog__ctx--hidden" };
    let scroll_lock = if modal && options.prevent_scroll_through && visible {
        " tessel-dialog__ctx--lock-scroll"
    } else {
        ""
    };
    let position = position_class(&options, &host);
    let style = dialog_style(&options, extra_style.as_deref());
    let extra_class = class.unwrap_or_default();

    let content = rsx! {
        div {
            class: "{position}",
            div {
                class: "tessel-dialog {extra_class}",
                style: "{style}",
                div {
                    class: "tessel-dialog__close",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        if let Some(handler) = on_click_close_btn {
                            handler.call(evt);
                        }
                        on_close.call(DialogEvent::new(CloseTrigger::CloseButton));
                    },
                    {close_btn}
                }
                if let Some(header) = header {
                    div { class: "tessel-dialog__header", {header} }
                }
                if let Some(body) = body {
                    div { class: "tessel-dialog__body", {body} }
                }
                match footer {
                    FooterRender::Hidden => rsx! {},
                    FooterRender::Custom(node) => rsx! {
                        div { class: "tessel-dialog__footer", {node} }
                    },
                    FooterRender::Composed(actions) => rsx! {
                        div {
                            class: "tessel-dialog__footer",
                            for action in actions.actions().cloned() {
                                {action}
                            }
                        }
                    },
                }
            }
        }
    };

    rsx! {
        div {
            class: "tessel-dialog__ctx{hidden}{scroll_lock}",
            "data-attach": attach,
            tabindex: "-1",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    if let Some(handler) = on_keydown_esc {
                        handler.call(evt);
                    }
                    on_close.call(DialogEvent::new(CloseTrigger::Escape));
                }
            },
            if modal {
                ModalOverlay {
                    z_index: options.z_index,
                    show_backdrop: options.show_overlay,
                    on_backdrop_click: move |_| {
                        if let Some(handler) = on_click_overlay {
                            handler.call(());
                        }
                        on_close.call(DialogEvent::new(CloseTrigger::Overlay));
                    },
                    {content}
                }
            } else {
                div {
                    class: "tessel-dialog__wrap",
                    style: "z-index: {options.z_index};",
                    {content}
                }
            }
        }
    }
}
