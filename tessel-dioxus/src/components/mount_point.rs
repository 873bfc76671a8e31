//! Named mount host.

use dioxus::prelude::*;

use crate::hooks::use_host_registry;

/// Declares a mount host that dialogs can target with `attach: "#id"`.
///
/// The id is registered for as long as the component is mounted.
/// Registration does not re-render anything: a dialog that resolved before
/// its mount point existed keeps the default host until it renders again,
/// so place mount points before the dialogs that target them.
#[component]
pub fn MountPoint(
    #[props(into)] id: String,
    #[props(default, into)] class: Option<String>,
    children: Element,
) -> Element {
    let registry = use_host_registry();

    use_hook({
        let registry = registry.clone();
        let id = id.clone();
        move || registry.register(id)
    });
    use_drop({
        let id = id.clone();
        move || registry.unregister(&id)
    });

    let class = class.unwrap_or_default();

    rsx! {
        div {
            id: "{id}",
            class: "tessel-mount-point {class}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    thread_local! {
        static SIDE_VISIBLE: Cell<Option<bool>> = const { Cell::new(None) };
    }

    /// Records whether `#side` is known to the registry it sees.
    #[component]
    fn Lookup() -> Element {
        let registry = use_host_registry();
        SIDE_VISIBLE.with(|seen| seen.set(Some(registry.contains("side"))));
        rsx! {}
    }

    fn sibling_tree() -> Element {
        rsx! {
            MountPoint { id: "side", span {} }
            Lookup {}
        }
    }

    #[test]
    fn siblings_share_the_root_registry_without_a_provider() {
        let mut dom = VirtualDom::new(sibling_tree);
        dom.rebuild_in_place();
        assert_eq!(SIDE_VISIBLE.with(Cell::get), Some(true));
    }
}
