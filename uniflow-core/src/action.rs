//! Action trait for type-safe state transitions

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions are immutable records describing an intent to change state.
/// They should be:
/// - Clone: Actions may be logged, replayed, or returned from dispatch
/// - Debug: For debugging and logging
///
/// Model actions as a closed enum so every kind and its payload is checked
/// at construction; a malformed action is then unrepresentable.
///
/// Use `#[derive(Action)]` from `uniflow-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + 'static {
    /// Get the action name for logging and validation
    ///
    /// The name is the action's type tag. [`Store::dispatch`](crate::Store::dispatch)
    /// rejects actions whose name is empty.
    fn name(&self) -> &'static str;
}
