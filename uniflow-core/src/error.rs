//! Error types for store operations

use thiserror::Error;

/// Errors raised synchronously by [`Store::dispatch`](crate::Store::dispatch).
///
/// A failed dispatch has no effect: the store's state is exactly what it was
/// before the call. Unknown action types are never an error; every slice
/// reducer returns its input unchanged for types it does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The action's name tag is empty, so it cannot be identified.
    #[error("cannot dispatch an action with an empty name")]
    InvalidAction,

    /// A dispatch was attempted while another dispatch on the same store was
    /// still running, either from inside a reducer or from a subscriber.
    #[error("re-entrant dispatch of `{0}` while another dispatch is in progress")]
    Reentrant(&'static str),
}
