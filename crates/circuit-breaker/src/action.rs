//! The guarded request.

use std::fmt;

/// A request the breaker sends on a tick.
///
/// `Ok(())` counts as a success and `Err` as a failure. Errors are only
/// logged and counted; the breaker never propagates them.
pub trait RequestAction {
    type Error: fmt::Display;

    fn send_request(&mut self) -> Result<(), Self::Error>;
}

/// Closures returning `Result<(), E>` can be guarded directly.
impl<F, E> RequestAction for F
where
    F: FnMut() -> Result<(), E>,
    E: fmt::Display,
{
    type Error = E;

    #[inline]
    fn send_request(&mut self) -> Result<(), E> {
        self()
    }
}
