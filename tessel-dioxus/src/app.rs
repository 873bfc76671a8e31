//! Gallery application component.
//!
//! Shows controlled and uncontrolled switches, and one dialog per footer
//! configuration.

use dioxus::prelude::*;
use tessel_core::dialog::{DialogMode, Placement};
use tessel_core::{HeaderContent, MountTarget, SlotContent};

use crate::components::{Dialog, MountPoint, Switch};
use crate::renderer::{provide_dialog_renderer, OverlayRenderer};

/// Which demo dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Demo {
    Default,
    ConfirmOnly,
    NoFooter,
    CustomFooter,
    Busy,
    Attached,
}

impl Demo {
    const ALL: [Self; 6] = [
        Self::Default,
        Self::ConfirmOnly,
        Self::NoFooter,
        Self::CustomFooter,
        Self::Busy,
        Self::Attached,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Default => "Default footer",
            Self::ConfirmOnly => "Confirm only",
            Self::NoFooter => "No footer",
            Self::CustomFooter => "Custom footer",
            Self::Busy => "Loading confirm",
            Self::Attached => "Attached, non-modal",
        }
    }
}

/// Gallery root.
#[component]
pub fn App() -> Element {
    provide_dialog_renderer(OverlayRenderer);

    rsx! {
        div {
            class: "gallery",
            h1 { "tessel" }
            SwitchGallery {}
            DialogGallery {}
        }
    }
}

#[component]
fn SwitchGallery() -> Element {
    let mut wifi = use_signal(|| true);
    let mut last_uncontrolled = use_signal(|| None::<bool>);
    let uncontrolled_status = match last_uncontrolled() {
        Some(value) => format!("Uncontrolled, last change: {value}"),
        None => "Uncontrolled, untouched".to_string(),
    };

    rsx! {
        section {
            class: "gallery__section",
            h2 { "Switch" }
            div {
                class: "gallery__row",
                Switch {
                    value: wifi(),
                    on_change: move |next| wifi.set(next),
                }
                span { "Controlled: {wifi()}" }
            }
            div {
                class: "gallery__row",
                Switch {
                    default_value: true,
                    on_change: move |next| last_uncontrolled.set(Some(next)),
                }
                span { "{uncontrolled_status}" }
            }
            div {
                class: "gallery__row",
                Switch { value: true }
                span { "Controlled without a handler" }
            }
            div {
                class: "gallery__row",
                Switch { default_value: true, disabled: true }
                Switch { loading: true }
                span { "Disabled and loading" }
            }
            div {
                class: "gallery__row",
                Switch {
                    size: tessel_core::SwitchSize::Large,
                    active_content: rsx! { "ON" },
                    inactive_content: rsx! { "OFF" },
                }
                span { "Labelled track" }
            }
        }
    }
}

#[component]
fn DialogGallery() -> Element {
    let mut open = use_signal(|| None::<Demo>);
    let mut events = use_signal(Vec::<String>::new);
    let mut log_event = move |message: String| {
        log::info!("{message}");
        events.write().push(message);
    };
    let visible = move |demo: Demo| open() == Some(demo);

    rsx! {
        section {
            class: "gallery__section",
            h2 { "Dialog" }
            div {
                class: "gallery__row",
                for demo in Demo::ALL {
                    button {
                        key: "{demo.label()}",
                        class: "tessel-button tessel-button--outline",
                        onclick: move |_| open.set(Some(demo)),
                        "{demo.label()}"
                    }
                }
            }
            MountPoint {
                id: "side-panel",
                class: "gallery__side-panel",
                span { class: "gallery__hint", "Side panel host" }
            }

            Dialog {
                visible: visible(Demo::Default),
                header: "Confirm delete",
                on_close: move |_| open.set(None),
                on_click_confirm: move |_| {
                    log_event("deleted".to_string());
                    open.set(None);
                },
                on_opened: move |()| log_event("default dialog opened".to_string()),
                on_closed: move |()| log_event("default dialog closed".to_string()),
                "This cannot be undone."
            }

            Dialog {
                visible: visible(Demo::ConfirmOnly),
                header: "Heads up",
                cancel_content: false,
                confirm_content: SlotContent::node(rsx! { "Got it" }),
                on_close: move |_| open.set(None),
                "Cancel is suppressed; confirm falls back to close."
            }

            Dialog {
                visible: visible(Demo::NoFooter),
                header: HeaderContent::Node(rsx! { strong { "No footer" } }),
                cancel_content: false,
                confirm_content: false,
                on_close: move |_| open.set(None),
                "Both actions are suppressed, so no footer region is rendered."
            }

            Dialog {
                visible: visible(Demo::CustomFooter),
                header: "Custom footer",
                footer: SlotContent::producer(move || rsx! {
                    button {
                        class: "tessel-button tessel-button--primary",
                        onclick: move |_| open.set(None),
                        "Done"
                    }
                }),
                placement: Placement::Top,
                on_close: move |_| open.set(None),
                "The whole footer is replaced."
            }

            Dialog {
                visible: visible(Demo::Busy),
                header: "Saving",
                loading: true,
                confirm_content: SlotContent::node(rsx! { "Saving..." }),
                on_close: move |_| open.set(None),
                "The confirm action shows a busy state."
            }

            Dialog {
                visible: visible(Demo::Attached),
                header: "Side panel",
                mode: DialogMode::NotModal,
                attach: MountTarget::Selector("#side-panel".to_string()),
                destroy_on_close: true,
                on_close: move |_| open.set(None),
                on_keydown_esc: move |_| log_event("escape pressed".to_string()),
                "Mounted on the side panel host."
            }

            ul {
                class: "gallery__events",
                for (index, event) in events().into_iter().enumerate() {
                    li { key: "{index}", "{event}" }
                }
            }
        }
    }
}
