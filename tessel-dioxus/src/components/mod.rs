//! UI components for tessel-dioxus.

mod dialog;
mod icons;
mod modal_overlay;
mod mount_point;
mod switch;

pub use dialog::Dialog;
pub use icons::{CloseIcon, LoadingIcon};
pub use modal_overlay::ModalOverlay;
pub use mount_point::MountPoint;
pub use switch::Switch;
