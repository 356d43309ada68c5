use unthrown_core::Thrown;

/// Why a wrapped async function did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection<X> {
    /// The future resolved to its own error.
    #[error("{0}")]
    Failed(X),
    /// Calling the function or polling its future panicked.
    #[error("panicked: {0}")]
    Panicked(Thrown),
}

impl<X> Rejection<X> {
    pub fn is_panic(&self) -> bool {
        matches!(self, Rejection::Panicked(_))
    }

    /// The future's own error, if that is what happened.
    pub fn into_failed(self) -> Option<X> {
        match self {
            Rejection::Failed(error) => Some(error),
            Rejection::Panicked(_) => None,
        }
    }
}

/// Why a callback-style operation did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallbackError<X> {
    /// The operation reported an error through its callback.
    #[error("{0}")]
    Failed(X),
    /// The callback was dropped without being called.
    #[error("callback dropped without a result")]
    Dropped,
    /// Starting the operation panicked.
    #[error("panicked: {0}")]
    Panicked(Thrown),
}
