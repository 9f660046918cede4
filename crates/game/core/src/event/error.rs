use thiserror::Error;

/// Errors raised while manufacturing director events.
///
/// All variants indicate a registration mistake rather than a runtime
/// condition; callers surface them instead of retrying.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("event type `{name}` is not registered with the director")]
    UnknownEventType { name: &'static str },

    #[error("event type `{name}` is an abstract base and cannot be instantiated")]
    AbstractEventType { name: &'static str },

    #[error("constructor registered for `{expected}` produced `{produced}`")]
    InstantiationFailed {
        expected: &'static str,
        produced: &'static str,
    },
}
