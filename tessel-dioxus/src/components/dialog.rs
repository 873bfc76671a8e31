//! Dialog component.
//!
//! Wires props into the headless [`DialogModel`] and hands the resolved
//! render to the overlay renderer from context.

use dioxus::prelude::*;
use tessel_core::dialog::{
    self as model, ActionHandlers, DialogMode, DialogModel, DialogOptions, Offset, Placement,
};
use tessel_core::error::require_renderer;
use tessel_core::WidgetError;
use tessel_core::{
    DialogPresenter, FooterBuilder, HeaderContent, ModePolicy, MountResolver, MountTarget,
    SlotContent,
};

use crate::components::{CloseIcon, LoadingIcon};
use crate::config::DialogConfig;
use crate::hooks::{use_dialog_config, use_dialog_renderer, use_host_registry, use_model};
use crate::host::HostId;
use crate::renderer::{CloseTrigger, DialogEvent, RenderDialog, RendererHandle};

/// Default footer actions with their handlers bound.
struct DefaultActions {
    on_cancel: EventHandler<DialogEvent>,
    on_confirm: EventHandler<DialogEvent>,
    cancel_label: String,
    confirm_label: String,
}

impl FooterBuilder<Element> for DefaultActions {
    fn cancel(&self, label: Option<&Element>) -> Element {
        let on_cancel = self.on_cancel;
        let default_label = self.cancel_label.clone();
        let label = label.cloned().unwrap_or_else(|| rsx! { "{default_label}" });

        rsx! {
            button {
                class: "tessel-button tessel-button--outline",
                r#type: "button",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_cancel.call(DialogEvent::new(CloseTrigger::CancelButton));
                },
                {label}
            }
        }
    }

    fn confirm(&self, label: Option<&Element>, loading: bool) -> Element {
        let on_confirm = self.on_confirm;
        let default_label = self.confirm_label.clone();
        let label = label.cloned().unwrap_or_else(|| rsx! { "{default_label}" });
        let loading_class = if loading { " tessel-button--loading" } else { "" };

        rsx! {
            button {
                class: "tessel-button tessel-button--primary{loading_class}",
                r#type: "button",
                disabled: loading,
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_confirm.call(DialogEvent::new(CloseTrigger::ConfirmButton));
                },
                if loading {
                    LoadingIcon {}
                }
                {label}
            }
        }
    }
}

impl DialogPresenter<Element> for DefaultActions {
    fn heading(&self, text: &str) -> Element {
        rsx! {
            h5 { class: "tessel-dialog__title", "{text}" }
        }
    }

    fn close_icon(&self) -> Element {
        rsx! { CloseIcon {} }
    }
}

fn options(
    config: &DialogConfig,
    mode: DialogMode,
    placement: Placement,
    width: Option<String>,
    offset: Option<Offset>,
    z_index: Option<i32>,
) -> DialogOptions {
    DialogOptions {
        mode,
        placement,
        width: width.unwrap_or_else(|| config.width.clone()),
        offset,
        z_index: z_index.unwrap_or(config.z_index),
        ..DialogOptions::default()
    }
}

/// The explicit renderer, else the one from context.
fn resolve_renderer(
    explicit: Option<RendererHandle>,
    from_context: Option<RendererHandle>,
) -> Result<RendererHandle, WidgetError> {
    require_renderer(explicit.or(from_context), "Dialog")
}

/// Modal or non-modal dialog.
///
/// Visibility is controlled through `visible`, or owned by the dialog when
/// only `default_visible` is given. Cancel and confirm fall back to the
/// generic close when their own handlers are missing.
///
/// # Example
///
/// ```rust,ignore
/// Dialog {
///     visible: show(),
///     header: "Confirm delete",
///     cancel_content: false,
///     on_close: move |_| show.set(false),
///     "This cannot be undone."
/// }
/// ```
#[component]
pub fn Dialog(
    /// Controlled visibility.
    #[props(default)]
    visible: Option<bool>,
    /// Initial visibility when uncontrolled.
    #[props(default)]
    default_visible: Option<bool>,
    /// How a late `visible` prop is treated.
    #[props(default)]
    policy: ModePolicy,
    /// Plain text is wrapped in the default heading.
    #[props(default, into)]
    header: HeaderContent<Element>,
    /// Whole-footer override. Leave unset for the default footer.
    #[props(default, into)]
    footer: SlotContent<Element>,
    #[props(default, into)]
    cancel_content: SlotContent<Element>,
    #[props(default, into)]
    confirm_content: SlotContent<Element>,
    #[props(default, into)]
    close_btn: SlotContent<Element>,
    /// Mount host. Defaults to the configured default host.
    #[props(default, into)]
    attach: MountTarget<HostId>,
    /// Busy indicator on the default confirm action.
    #[props(default)]
    loading: bool,
    #[props(default)]
    mode: DialogMode,
    #[props(default)]
    placement: Placement,
    #[props(default, into)]
    width: Option<String>,
    #[props(default)]
    offset: Option<Offset>,
    #[props(default)]
    z_index: Option<i32>,
    #[props(default = true)]
    show_overlay: bool,
    #[props(default = true)]
    prevent_scroll_through: bool,
    #[props(default)]
    destroy_on_close: bool,
    #[props(default = true)]
    draggable: bool,
    #[props(default, into)]
    class: Option<String>,
    /// Extra inline style for the dialog box.
    #[props(default, into)]
    style: Option<String>,
    /// Renderer override; otherwise taken from context.
    #[props(default)]
    renderer: Option<RendererHandle>,
    on_close: Option<EventHandler<DialogEvent>>,
    on_click_cancel: Option<EventHandler<DialogEvent>>,
    on_click_confirm: Option<EventHandler<DialogEvent>>,
    on_click_close_btn: Option<EventHandler<MouseEvent>>,
    on_click_overlay: Option<EventHandler<()>>,
    on_keydown_esc: Option<EventHandler<KeyboardEvent>>,
    on_opened: Option<EventHandler<()>>,
    on_closed: Option<EventHandler<()>>,
    /// Dialog body.
    children: Element,
) -> Element {
    let provided_config = use_dialog_config();
    let registry = use_host_registry();
    let from_context = use_dialog_renderer();
    let dialog_model = use_model(|| DialogModel::with_policy(default_visible, policy));

    let renderer = resolve_renderer(renderer, from_context)?;
    let config = provided_config.clone().unwrap_or_default();

    let close = {
        let dialog_model = dialog_model.clone();
        EventHandler::new(move |event: DialogEvent| {
            tracing::debug!(trigger = ?event.trigger, "dialog close requested");
            model::close(dialog_model.cell(), visible, |_| {
                if let Some(handler) = on_close {
                    handler.call(event);
                }
            });
            dialog_model.changed();
        })
    };
    let actions = ActionHandlers::resolve(on_click_cancel, on_click_confirm, close);

    let presenter = DefaultActions {
        on_cancel: actions.cancel,
        on_confirm: actions.confirm,
        cancel_label: config.cancel_label.clone(),
        confirm_label: config.confirm_label.clone(),
    };

    let props = model::DialogProps {
        visible,
        header,
        body: Some(children),
        footer,
        cancel_content,
        confirm_content,
        close_btn,
        attach,
        loading,
        options: DialogOptions {
            show_overlay,
            prevent_scroll_through,
            destroy_on_close,
            draggable,
            ..options(&config, mode, placement, width, offset, z_index)
        },
    };

    // A provided config overrides the process-wide default host.
    let mut resolver = MountResolver::new(&registry);
    if let Some(provided) = provided_config {
        resolver = resolver.with_default_selector(provided.attach);
    }
    let resolved = dialog_model.with_mut(|m| m.render(&props, &presenter, &resolver));

    renderer.render(RenderDialog {
        dialog: resolved,
        class,
        style,
        on_close: close,
        on_click_close_btn,
        on_click_overlay,
        on_keydown_esc,
        on_opened,
        on_closed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::OverlayRenderer;

    #[test]
    fn missing_renderer_is_an_error() {
        let err = resolve_renderer(None, None).expect_err("no renderer anywhere");
        assert_eq!(err, WidgetError::MissingRenderer { widget: "Dialog" });
    }

    #[test]
    fn explicit_renderer_wins_over_context() {
        let explicit = RendererHandle::new(OverlayRenderer);
        let from_context = RendererHandle::new(OverlayRenderer);

        let chosen = resolve_renderer(Some(explicit.clone()), Some(from_context.clone()))
            .expect("explicit renderer");
        assert!(chosen == explicit);

        let chosen = resolve_renderer(None, Some(from_context.clone())).expect("context renderer");
        assert!(chosen == from_context);
    }

    #[test]
    fn options_fall_back_to_config() {
        let config = DialogConfig {
            width: "640px".to_string(),
            z_index: 3000,
            ..DialogConfig::default()
        };
        let resolved = options(&config, DialogMode::NotModal, Placement::Top, None, None, None);
        assert_eq!(resolved.width, "640px");
        assert_eq!(resolved.z_index, 3000);
        assert_eq!(resolved.mode, DialogMode::NotModal);
        assert_eq!(resolved.placement, Placement::Top);
    }

    #[test]
    fn explicit_options_win_over_config() {
        let config = DialogConfig::default();
        let resolved = options(
            &config,
            DialogMode::Modal,
            Placement::Center,
            Some("80%".to_string()),
            Some(Offset::default()),
            Some(10),
        );
        assert_eq!(resolved.width, "80%");
        assert_eq!(resolved.z_index, 10);
        assert_eq!(resolved.offset, Some(Offset::default()));
    }
}
