//! Error types for tessel widgets.

use thiserror::Error;

/// Failures that prevent a widget from being constructed.
///
/// Prop ambiguity and unresolvable mount targets are never errors; they are
/// settled by precedence rules and fallbacks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("{widget} requires an overlay renderer but none was provided")]
    MissingRenderer { widget: &'static str },
}

/// Fail fast when a required renderer is missing.
pub fn require_renderer<R>(renderer: Option<R>, widget: &'static str) -> Result<R, WidgetError> {
    renderer.ok_or(WidgetError::MissingRenderer { widget })
}
