//! Controlled/uncontrolled value reconciliation.
//!
//! A widget value is either *controlled* (the caller passes it on every
//! render) or *uncontrolled* (the caller passes an initial value and the
//! widget owns the rest). [`ValueReconciler`] persists across renders and
//! decides, per render, which source is authoritative.
//!
//! Both modes share one notification contract: a user interaction always
//! reports the intended next value, and in uncontrolled mode the internal
//! copy is written *before* the notification fires.

use tracing::{debug, warn};

/// Who owns the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// The caller supplies the value on every render.
    Controlled,
    /// The widget owns a mutable internal copy.
    Uncontrolled,
}

/// How ownership reacts to the controlled prop appearing or disappearing
/// after the first render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModePolicy {
    /// Re-derive ownership every render. A value appearing upgrades to
    /// controlled and snaps the internal copy to it; a value disappearing
    /// again does not downgrade.
    #[default]
    Follow,
    /// Fix ownership at the first render. Later changes in presence are
    /// ignored.
    Locked,
}

/// The outcome of one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciled<T> {
    pub current: T,
    pub is_controlled: bool,
}

/// Persistent reconciliation state for a single value.
#[derive(Debug, Clone)]
pub struct ValueReconciler<T> {
    internal: T,
    ownership: Option<Ownership>,
    policy: ModePolicy,
    warned: bool,
}

impl<T: Clone + Default> ValueReconciler<T> {
    /// Create a reconciler seeded from the caller's default value.
    ///
    /// `None` seeds with `T::default()`.
    pub fn new(default: Option<T>) -> Self {
        Self::with_policy(default, ModePolicy::default())
    }

    /// Create a reconciler with an explicit mode policy.
    pub fn with_policy(default: Option<T>, policy: ModePolicy) -> Self {
        Self {
            internal: default.unwrap_or_default(),
            ownership: None,
            policy,
            warned: false,
        }
    }

    /// The ownership observed so far, `None` before the first reconcile.
    pub fn ownership(&self) -> Option<Ownership> {
        self.ownership
    }

    pub fn policy(&self) -> ModePolicy {
        self.policy
    }

    /// Reconcile against this render's controlled prop.
    pub fn reconcile(&mut self, controlled: Option<&T>) -> Reconciled<T> {
        let ownership = self.observe(controlled);
        match (ownership, controlled) {
            (Ownership::Controlled, Some(value)) => {
                // Mirror the caller so a later missing prop reports the last value.
                self.internal = value.clone();
                Reconciled {
                    current: value.clone(),
                    is_controlled: true,
                }
            }
            (Ownership::Controlled, None) => Reconciled {
                current: self.internal.clone(),
                is_controlled: true,
            },
            (Ownership::Uncontrolled, _) => Reconciled {
                current: self.internal.clone(),
                is_controlled: false,
            },
        }
    }

    /// Apply a user interaction that proposes `next`.
    ///
    /// Uncontrolled: the internal copy is written. Controlled: nothing is
    /// written and the caller is expected to pass the new value on the next
    /// render. Either way `next` is returned for the change notification,
    /// which the caller dispatches once it has released its borrow of `self`.
    pub fn commit(&mut self, controlled: Option<&T>, next: T) -> T {
        let reconciled = self.reconcile(controlled);
        if !reconciled.is_controlled {
            self.internal = next.clone();
        }
        next
    }

    /// Decide ownership for this render according to the policy.
    fn observe(&mut self, controlled: Option<&T>) -> Ownership {
        let present = controlled.is_some();
        let ownership = match (self.ownership, self.policy) {
            (None, _) => {
                let first = if present {
                    Ownership::Controlled
                } else {
                    Ownership::Uncontrolled
                };
                debug!(?first, "value ownership decided");
                first
            }
            (Some(Ownership::Uncontrolled), ModePolicy::Follow) if present => {
                debug!("uncontrolled value upgraded to controlled");
                Ownership::Controlled
            }
            (Some(Ownership::Uncontrolled), ModePolicy::Locked) if present => {
                self.warn_once("controlled value supplied to a widget locked as uncontrolled; ignoring");
                Ownership::Uncontrolled
            }
            (Some(Ownership::Controlled), _) if !present => {
                self.warn_once("controlled value removed; keeping the last supplied value");
                Ownership::Controlled
            }
            (Some(ownership), _) => ownership,
        };
        self.ownership = Some(ownership);
        ownership
    }

    fn warn_once(&mut self, message: &str) {
        if !self.warned {
            warn!("{message}");
            self.warned = true;
        }
    }
}

impl ValueReconciler<bool> {
    /// Flip a boolean value, returning the value to notify with.
    pub fn toggle(&mut self, controlled: Option<&bool>) -> bool {
        let next = !self.reconcile(controlled).current;
        self.commit(controlled, next)
    }
}

impl<T: Clone + Default> Default for ValueReconciler<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn controlled_reports_caller_value_regardless_of_internal_state() {
        for v in [true, false] {
            for seed in [true, false] {
                let mut reconciler = ValueReconciler::new(Some(seed));
                let reconciled = reconciler.reconcile(Some(&v));
                assert_eq!(reconciled.current, v);
                assert!(reconciled.is_controlled);
            }
        }
    }

    #[test]
    fn uncontrolled_starts_at_default_and_flips_once() {
        for d in [true, false] {
            let mut reconciler = ValueReconciler::new(Some(d));
            assert_eq!(reconciler.reconcile(None).current, d);

            let next = reconciler.toggle(None);

            assert_eq!(next, !d);
            assert_eq!(reconciler.reconcile(None).current, !d);
        }
    }

    #[test]
    fn both_missing_yields_default() {
        let mut reconciler = ValueReconciler::<bool>::new(None);
        let reconciled = reconciler.reconcile(None);
        assert!(!reconciled.current);
        assert!(!reconciled.is_controlled);
    }

    #[test]
    fn controlled_interaction_notifies_without_mutating() {
        let mut reconciler = ValueReconciler::new(Some(false));
        let next = reconciler.toggle(Some(&true));

        assert!(!next);
        // Caller did not update the prop, so the widget still shows true.
        assert!(reconciler.reconcile(Some(&true)).current);
    }

    #[test]
    fn notification_observes_updated_state() {
        let reconciler = Rc::new(RefCell::new(ValueReconciler::new(Some(false))));
        let observed = Rc::new(RefCell::new(Vec::new()));

        let notify = {
            let reconciler = Rc::clone(&reconciler);
            let observed = Rc::clone(&observed);
            move |next: bool| {
                let current = reconciler.borrow_mut().reconcile(None).current;
                observed.borrow_mut().push((next, current));
            }
        };

        let next = reconciler.borrow_mut().toggle(None);
        notify(next);

        assert_eq!(*observed.borrow(), vec![(true, true)]);
    }

    #[test]
    fn follow_policy_snaps_on_upgrade() {
        let mut reconciler = ValueReconciler::with_policy(Some(false), ModePolicy::Follow);
        assert_eq!(reconciler.ownership(), None);
        assert!(!reconciler.reconcile(None).is_controlled);

        let reconciled = reconciler.reconcile(Some(&true));
        assert!(reconciled.is_controlled);
        assert!(reconciled.current);
        assert_eq!(reconciler.ownership(), Some(Ownership::Controlled));
    }

    #[test]
    fn follow_policy_does_not_downgrade() {
        let mut reconciler = ValueReconciler::with_policy(None, ModePolicy::Follow);
        reconciler.reconcile(Some(&true));

        let reconciled = reconciler.reconcile(None);
        assert!(reconciled.is_controlled);
        assert!(reconciled.current);

        // Interactions after the prop disappeared still leave state alone.
        assert!(!reconciler.toggle(None));
        assert!(reconciler.reconcile(None).current);
    }

    #[test]
    fn locked_policy_ignores_upgrade() {
        let mut reconciler = ValueReconciler::with_policy(Some(false), ModePolicy::Locked);
        reconciler.reconcile(None);

        let reconciled = reconciler.reconcile(Some(&true));
        assert!(!reconciled.is_controlled);
        assert!(!reconciled.current);
        assert_eq!(reconciler.ownership(), Some(Ownership::Uncontrolled));

        assert!(reconciler.toggle(Some(&true)));
        assert!(reconciler.reconcile(Some(&true)).current);
    }

    #[test]
    fn locked_policy_keeps_controlled_value_when_prop_disappears() {
        let mut reconciler = ValueReconciler::with_policy(Some(false), ModePolicy::Locked);
        reconciler.reconcile(Some(&true));
        let reconciled = reconciler.reconcile(None);
        assert!(reconciled.is_controlled);
        assert!(reconciled.current);
    }

    #[test]
    fn non_boolean_values_commit() {
        let mut reconciler = ValueReconciler::new(Some(String::from("a")));
        let next = reconciler.commit(None, String::from("b"));
        assert_eq!(next, "b");
        assert_eq!(reconciler.reconcile(None).current, "b");
    }
}
