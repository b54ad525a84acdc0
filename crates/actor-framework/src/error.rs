//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.
//! Errors raised by the hosted state travel inside [`FrameworkError::StateError`] and
//! can be recovered with [`FrameworkError::downcast_state`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the concrete state error, if this is a `StateError` of type `E`.
    ///
    /// Any other error is handed back unchanged.
    pub fn downcast_state<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::StateError(inner) => match inner.downcast::<E>() {
                Ok(concrete) => Ok(*concrete),
                Err(other) => Err(FrameworkError::StateError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("till is empty")]
    struct TillEmpty;

    #[derive(Debug, thiserror::Error)]
    #[error("other failure")]
    struct Other;

    #[test]
    fn test_downcast_state_recovers_concrete_error() {
        let err = FrameworkError::StateError(Box::new(TillEmpty));
        assert_eq!(err.downcast_state::<TillEmpty>().unwrap(), TillEmpty);
    }

    #[test]
    fn test_downcast_state_keeps_mismatched_error() {
        let err = FrameworkError::StateError(Box::new(Other));
        let back = err.downcast_state::<TillEmpty>().unwrap_err();
        assert!(matches!(back, FrameworkError::StateError(_)));
        assert_eq!(back.to_string(), "State error: other failure");
    }

    #[test]
    fn test_downcast_state_passes_transport_errors_through() {
        let back = FrameworkError::ActorClosed
            .downcast_state::<TillEmpty>()
            .unwrap_err();
        assert!(matches!(back, FrameworkError::ActorClosed));
    }
}
