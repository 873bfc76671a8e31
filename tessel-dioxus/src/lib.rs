//! Tessel Dioxus - dialog and switch widgets for Dioxus desktop apps.
//!
//! The components delegate every decision to the headless models in
//! `tessel-core`; this crate adds the Dioxus glue: hooks that keep a model
//! alive across renders, the overlay renderer seam, the host registry that
//! backs `attach` selectors, and `tessel.toml` configuration.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tessel_dioxus::TesselConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = TesselConfig::load_default()?;
//!     tessel_dioxus::launch(config)
//! }
//! ```
//!
//! ## Rendering
//!
//! A `Dialog` needs a [`DialogRenderer`](renderer::DialogRenderer) in
//! context. Call [`provide_dialog_renderer`](renderer::provide_dialog_renderer)
//! near the root, usually with the stock [`OverlayRenderer`].
//! Named mount hosts are declared with [`MountPoint`](components::MountPoint)
//! and shared through one root registry; call
//! [`provide_host_registry`](host::provide_host_registry) only to give a
//! subtree its own.

use anyhow::Result;
use tessel_core::mount::init_default_host;

// Public library modules
pub mod components;
pub mod config;
pub mod hooks;
pub mod host;
pub mod renderer;

// Internal modules
mod app;

// Convenience re-exports
pub use components::{Dialog, MountPoint, Switch};
pub use config::TesselConfig;
pub use renderer::{DialogEvent, OverlayRenderer};

/// Widget stylesheet, injected into the document head.
pub const STYLESHEET: &str = include_str!("../assets/style.css");

/// Launch the gallery in a Dioxus desktop window.
///
/// Installs the configured default mount host, then hands the widget
/// configuration to the app through context.
pub fn launch(config: TesselConfig) -> Result<()> {
    init_default_host(config.dialog.attach.clone());
    log::info!("Default mount host: {}", config.dialog.attach);

    let custom_head = format!("<style>{STYLESHEET}</style>");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head),
        )
        .with_context(config.dialog)
        .with_context(config.switch)
        .launch(app::App);

    Ok(())
}
