//! Switch component.

use dioxus::prelude::*;
use tessel_core::switch::{self as model, SwitchModel, SwitchSize, SwitchView};
use tessel_core::ModePolicy;

use crate::components::LoadingIcon;
use crate::hooks::{use_model, use_switch_config};

/// Classes for the switch root.
fn switch_class(view: &SwitchView, extra: Option<&str>) -> String {
    let mut class = format!("tessel-switch tessel-switch--{}", view.size.as_str());
    if view.checked {
        class.push_str(" tessel-switch--checked");
    }
    if view.disabled {
        class.push_str(" tessel-switch--disabled");
    }
    if view.loading {
        class.push_str(" tessel-switch--loading");
    }
    if let Some(extra) = extra {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Two-state toggle.
///
/// Pass `value` to control it; otherwise it keeps its own state, starting
/// from `default_value`. `on_change` receives the requested next value
/// either way. Clicks are ignored while disabled or loading.
#[component]
pub fn Switch(
    /// Controlled value.
    #[props(default)]
    value: Option<bool>,
    /// Initial value when uncontrolled.
    #[props(default)]
    default_value: Option<bool>,
    #[props(default)]
    policy: ModePolicy,
    #[props(default)]
    disabled: bool,
    #[props(default)]
    loading: bool,
    /// Track size. Defaults to the configured size.
    #[props(default)]
    size: Option<SwitchSize>,
    /// Content shown inside the track while on.
    #[props(default)]
    active_content: Option<Element>,
    /// Content shown inside the track while off.
    #[props(default)]
    inactive_content: Option<Element>,
    #[props(default, into)]
    class: Option<String>,
    on_change: Option<EventHandler<bool>>,
) -> Element {
    let config = use_switch_config();
    let switch_model = use_model(|| SwitchModel::with_policy(default_value, policy));

    let props = model::SwitchProps {
        value,
        disabled,
        loading,
        size: size.unwrap_or(config.size),
    };
    let view = switch_model.with_mut(|m| m.view(&props));
    let class = switch_class(&view, class.as_deref());
    let content = view.content(&active_content, &inactive_content).clone();
    let checked = if view.checked { "true" } else { "false" };

    let onclick = {
        let switch_model = switch_model.clone();
        move |_: MouseEvent| {
            let Some(next) = switch_model.with_mut(|m| m.click(&props)) else {
                return;
            };
            switch_model.changed();
            if let Some(handler) = on_change {
                handler.call(next);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            role: "switch",
            "aria-checked": checked,
            disabled: !view.interactive(),
            onclick,
            span {
                class: "tessel-switch__handle",
                if view.loading {
                    LoadingIcon {}
                }
            }
            div {
                class: "tessel-switch__content",
                if let Some(content) = content {
                    {content}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(checked: bool) -> SwitchView {
        SwitchView {
            checked,
            disabled: false,
            loading: false,
            size: SwitchSize::Default,
        }
    }

    #[test]
    fn class_reflects_state() {
        assert_eq!(
            switch_class(&view(false), None),
            "tessel-switch tessel-switch--default"
        );
        assert_eq!(
            switch_class(&view(true), Some("wide")),
            "tessel-switch tessel-switch--default tessel-switch--checked wide"
        );
    }

    #[test]
    fn class_marks_inert_states() {
        let view = SwitchView {
            disabled: true,
            loading: true,
            size: SwitchSize::Small,
            ..view(false)
        };
        assert_eq!(
            switch_class(&view, None),
            "tessel-switch tessel-switch--small tessel-switch--disabled tessel-switch--loading"
        );
    }
}
