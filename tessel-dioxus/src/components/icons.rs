//! Built-in icons.

use dioxus::prelude::*;

/// The default close affordance.
#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            class: "tessel-icon tessel-icon-close",
            xmlns: "http://www.w3.org/2000/svg",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            line { x1: "18", y1: "6", x2: "6", y2: "18" }
            line { x1: "6", y1: "6", x2: "18", y2: "18" }
        }
    }
}

/// Spinner shown by busy buttons and loading switches.
#[component]
pub fn LoadingIcon() -> Element {
    rsx! {
        svg {
            class: "tessel-icon tessel-icon-loading",
            xmlns: "http://www.w3.org/2000/svg",
            width: "12",
            height: "12",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "3",
            stroke_linecap: "round",
            path { d: "M21 12a9 9 0 1 1-6.22-8.56" }
        }
    }
}
