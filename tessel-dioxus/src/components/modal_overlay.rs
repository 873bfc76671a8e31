//! Reusable modal overlay component.
//!
//! Encapsulates the backdrop+container pattern used by modal dialogs.

use dioxus::prelude::*;

/// Modal overlay that provides a backdrop and a centered container.
///
/// Clicking the backdrop triggers `on_backdrop_click`. Clicks inside the
/// container are stopped from propagating to the backdrop. With
/// `show_backdrop: false` the overlay is transparent but still blocks the
/// page.
#[component]
pub fn ModalOverlay(
    z_index: i32,
    #[props(default = true)] show_backdrop: bool,
    on_backdrop_click: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let overlay_class = if show_backdrop {
        "tessel-overlay tessel-overlay--backdrop"
    } else {
        "tessel-overlay"
    };

    rsx! {
        div {
            class: "{overlay_class}",
            style: "z-index: {z_index};",
            onmousedown: move |evt| on_backdrop_click.call(evt),

            div {
                class: "tessel-overlay__container",
                onmousedown: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}
