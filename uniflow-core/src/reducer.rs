//! Reducer trait for pure state transitions

use crate::Action;

/// A pure function from `(state, action)` to the next state
///
/// Reducers must be total and side-effect free: the same `(state, action)`
/// pair always yields the same output, and actions whose type the reducer
/// does not recognize yield the input state unchanged.
///
/// `initial()` supplies the state the store starts from when none is given
/// explicitly; for a composed reducer this seeds every slice with its own
/// default (see [`CombinedReducer`](crate::CombinedReducer)).
///
/// # Example
/// ```
/// use uniflow_core::{Action, Reducer};
///
/// #[derive(Clone, Debug)]
/// enum CounterAction {
///     Increment,
///     Decrement,
/// }
///
/// impl Action for CounterAction {
///     fn name(&self) -> &'static str {
///         match self {
///             CounterAction::Increment => "Increment",
///             CounterAction::Decrement => "Decrement",
///         }
///     }
/// }
///
/// struct Counter;
///
/// impl Reducer<CounterAction> for Counter {
///     type State = i32;
///
///     fn initial(&self) -> i32 {
///         0
///     }
///
///     fn reduce(&self, state: &i32, action: &CounterAction) -> i32 {
///         match action {
///             CounterAction::Increment => state + 1,
///             CounterAction::Decrement => state - 1,
///         }
///     }
/// }
///
/// let counter = Counter;
/// assert_eq!(counter.reduce(&counter.initial(), &CounterAction::Increment), 1);
/// ```
pub trait Reducer<A: Action> {
    /// The state type this reducer owns.
    type State;

    /// The default state, used to seed a store constructed without an
    /// explicit initial state.
    fn initial(&self) -> Self::State;

    /// Compute the next state for an action.
    ///
    /// Must return a state equal to the input for unrecognized actions.
    fn reduce(&self, state: &Self::State, action: &A) -> Self::State;
}
