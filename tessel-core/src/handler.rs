//! Default-action wiring for widget callbacks.

/// Pick the handler for a specific action, falling back to the generic
/// close handler.
///
/// Dialog cancel and confirm both close by default: a caller that only
/// supplies `on_close` gets it for every action.
pub fn or_close<H>(specific: Option<H>, close: H) -> H {
    specific.unwrap_or(close)
}

/// Invoke an optional handler, doing nothing when it is absent.
pub fn dispatch<H, A>(handler: Option<&H>, arg: A)
where
    H: Fn(A) + ?Sized,
{
    if let Some(handler) = handler {
        handler(arg);
    }
}
