//! Headless switch model.

use serde::Deserialize;

use crate::value::{ModePolicy, ValueReconciler};

/// Switch track size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwitchSize {
    Small,
    #[default]
    Default,
    Large,
}

impl SwitchSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Default => "default",
            Self::Large => "large",
        }
    }
}

/// Per-render switch props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchProps {
    /// Controlled value.
    pub value: Option<bool>,
    pub disabled: bool,
    pub loading: bool,
    pub size: SwitchSize,
}

/// Visual state, derived from the value and props alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchView {
    pub checked: bool,
    pub disabled: bool,
    pub loading: bool,
    pub size: SwitchSize,
}

impl SwitchView {
    /// Whether clicks are accepted. A loading switch is inert as well.
    pub fn interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Pick the track content for the current state.
    pub fn content<'a, T>(&self, active: &'a T, inactive: &'a T) -> &'a T {
        if self.checked {
            active
        } else {
            inactive
        }
    }
}

/// Persistent switch state.
#[derive(Debug, Clone, Default)]
pub struct SwitchModel {
    value: ValueReconciler<bool>,
}

impl SwitchModel {
    pub fn new(default_value: Option<bool>) -> Self {
        Self::with_policy(default_value, ModePolicy::default())
    }

    pub fn with_policy(default_value: Option<bool>, policy: ModePolicy) -> Self {
        Self {
            value: ValueReconciler::with_policy(default_value, policy),
        }
    }

    pub fn view(&mut self, props: &SwitchProps) -> SwitchView {
        SwitchView {
            checked: self.value.reconcile(props.value.as_ref()).current,
            disabled: props.disabled,
            loading: props.loading,
            size: props.size,
        }
    }

    /// Handle a click.
    ///
    /// Returns the value to report to `on_change`, or `None` when the click
    /// is ignored because the switch is disabled or loading.
    pub fn click(&mut self, props: &SwitchProps) -> Option<bool> {
        if !self.view(props).interactive() {
            tracing::trace!("switch click ignored");
            return None;
        }
        Some(self.value.toggle(props.value.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controlled(value: bool) -> SwitchProps {
        SwitchProps {
            value: Some(value),
            ..SwitchProps::default()
        }
    }

    #[test]
    fn uncontrolled_click_flips_and_reports() {
        let mut model = SwitchModel::new(Some(false));
        let props = SwitchProps::default();
        assert!(!model.view(&props).checked);

        assert_eq!(model.click(&props), Some(true));
        assert!(model.view(&props).checked);
    }

    #[test]
    fn controlled_click_reports_without_changing() {
        let mut model = SwitchModel::default();
        let props = controlled(true);

        assert_eq!(model.click(&props), Some(false));
        assert!(model.view(&props).checked);
    }

    #[test]
    fn controlled_value_changes_are_reflected_immediately() {
        let mut model = SwitchModel::new(Some(true));
        assert!(!model.view(&controlled(false)).checked);
        assert!(model.view(&controlled(true)).checked);
    }

    #[test]
    fn disabled_clicks_are_ignored() {
        let mut model = SwitchModel::new(Some(true));
        let props = SwitchProps {
            disabled: true,
            ..SwitchProps::default()
        };
        let notifications = (0..5).filter_map(|_| model.click(&props)).count();
        assert_eq!(notifications, 0);
        assert!(model.view(&props).checked);
    }

    #[test]
    fn loading_clicks_are_ignored() {
        let mut model = SwitchModel::default();
        let props = SwitchProps {
            loading: true,
            ..SwitchProps::default()
        };
        assert_eq!(model.click(&props), None);
        assert!(!model.view(&props).checked);
    }

    #[test]
    fn view_is_derived_from_props() {
        let mut model = SwitchModel::default();
        let props = SwitchProps {
            value: Some(true),
            disabled: true,
            loading: false,
            size: SwitchSize::Large,
        };
        let view = model.view(&props);
        assert_eq!(
            view,
            SwitchView {
                checked: true,
                disabled: true,
                loading: false,
                size: SwitchSize::Large,
            }
        );
        assert!(!view.interactive());
        assert_eq!(*view.content(&"on", &"off"), "on");
    }

    #[test]
    fn upgrade_to_controlled_snaps_to_supplied_value() {
        let mut model = SwitchModel::new(Some(false));
        model.click(&SwitchProps::default());
        assert!(model.view(&SwitchProps::default()).checked);

        assert!(!model.view(&controlled(false)).checked);
    }

    #[test]
    fn locked_switch_ignores_late_control() {
        let mut model = SwitchModel::with_policy(Some(false), ModePolicy::Locked);
        assert!(!model.view(&SwitchProps::default()).checked);
        assert!(!model.view(&controlled(true)).checked);
        assert_eq!(model.click(&controlled(true)), Some(true));
        assert!(model.view(&controlled(true)).checked);
    }

    #[test]
    fn size_names() {
        assert_eq!(SwitchSize::Small.as_str(), "small");
        assert_eq!(SwitchSize::default().as_str(), "default");
        assert_eq!(SwitchSize::Large.as_str(), "large");
    }
}
