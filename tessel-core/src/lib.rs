//! Tessel Core - headless building blocks for tessel widgets.
//!
//! Nothing in this crate renders. It resolves caller props into render
//! instructions that a frontend (see `tessel-dioxus`) hands to its overlay
//! renderer:
//!
//! - [`value`]: controlled/uncontrolled reconciliation of a single value
//! - [`slot`]: content that may be a node, a flag, or a producer
//! - [`footer`]: the default cancel/confirm footer
//! - [`mount`]: where an overlay is mounted
//! - [`dialog`] and [`switch`]: headless models for the two widgets
//!
//! All of it is single-threaded and synchronous; `Rc` is used for shared
//! producers. Only the process-wide default mount host is thread-safe.
//!
//! ```
//! use tessel_core::slot::SlotContent;
//!
//! let cancel: SlotContent<&str> = false.into();
//! assert_eq!(cancel.resolve("Cancel"), None);
//! assert_eq!(SlotContent::Absent.resolve("Cancel"), Some("Cancel"));
//! ```

pub mod dialog;
pub mod error;
pub mod footer;
pub mod handler;
pub mod mount;
pub mod slot;
pub mod switch;
pub mod value;

pub use dialog::{ActionHandlers, DialogModel, DialogOptions, DialogPresenter, DialogProps, DialogRender};
pub use error::WidgetError;
pub use footer::{Footer, FooterBuilder, FooterRender};
pub use mount::{HostEnvironment, MountResolver, MountTarget, ResolvedHost};
pub use slot::{HeaderContent, SlotContent};
pub use switch::{SwitchModel, SwitchProps, SwitchSize, SwitchView};
pub use value::{ModePolicy, Ownership, Reconciled, ValueReconciler};
