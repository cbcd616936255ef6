//! Centralized state store with pure reducers and subscriptions
//!
//! The store is the single source of truth: all state transitions go through
//! one reducer call per dispatch, and subscribers are notified synchronously
//! after every completed dispatch. Dispatch runs to completion; the store is
//! single-threaded and the handle is cheap to clone.
//!
//! # Example
//! ```
//! use uniflow_core::{Action, Reducer, Store};
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! impl Action for CounterAction {
//!     fn name(&self) -> &'static str {
//!         "Increment"
//!     }
//! }
//!
//! struct Counter;
//!
//! impl Reducer<CounterAction> for Counter {
//!     type State = i32;
//!
//!     fn initial(&self) -> i32 {
//!         0
//!     }
//!
//!     fn reduce(&self, state: &i32, action: &CounterAction) -> i32 {
//!         match action {
//!             CounterAction::Increment => state + 1,
//!         }
//!     }
//! }
//!
//! let store = Store::new(Counter);
//! store.dispatch(CounterAction::Increment).unwrap();
//! assert_eq!(store.state(), 1);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::{Action, DispatchError, Reducer};

struct Inner<S, A: Action> {
    state: S,
    reducer: Rc<dyn Reducer<A, State = S>>,
    listeners: Vec<(u64, Rc<dyn Fn()>)>,
    next_listener_id: u64,
    dispatching: bool,
}

/// Resets the idle/dispatching flag even if a reducer or subscriber panics.
struct DispatchGuard<S, A: Action> {
    inner: Rc<RefCell<Inner<S, A>>>,
}

impl<S, A: Action> Drop for DispatchGuard<S, A> {
    fn drop(&mut self) {
        self.inner.borrow_mut().dispatching = false;
    }
}

/// Centralized state store applying a pure reducer on each dispatched action
///
/// The store holds the current state snapshot and a FIFO-ordered subscriber
/// list. `Store` is a handle over shared single-threaded state; cloning it
/// yields another handle to the same store, which is how subscribers read
/// state or how a view layer is wired up.
///
/// # Dispatch lifecycle
///
/// A store is either idle or dispatching. [`dispatch`](Store::dispatch)
/// validates the action, applies the reducer, replaces the state wholesale,
/// notifies every subscriber registered at notification start, and returns
/// the action unchanged. A re-entrant dispatch, whether from inside a reducer
/// or a subscriber callback, fails with [`DispatchError::Reentrant`] and has
/// no effect on state.
///
/// # Type Parameters
/// * `S` - The application state type
/// * `A` - The action type (must implement `Action`)
pub struct Store<S, A: Action> {
    inner: Rc<RefCell<Inner<S, A>>>,
}

impl<S, A: Action> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, A> Store<S, A>
where
    S: Clone + 'static,
    A: Action,
{
    /// Create a store seeded from the reducer's initial state.
    ///
    /// Every slice of a [`CombinedReducer`](crate::CombinedReducer) supplies
    /// its own default through this call.
    pub fn new(reducer: impl Reducer<A, State = S> + 'static) -> Self {
        let state = reducer.initial();
        Self::with_state(reducer, state)
    }

    /// Create a store with an explicit initial state.
    pub fn with_state(reducer: impl Reducer<A, State = S> + 'static, state: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                reducer: Rc::new(reducer),
                listeners: Vec::new(),
                next_listener_id: 0,
                dispatching: false,
            })),
        }
    }

    /// Get a clone of the current state snapshot. No side effects.
    pub fn state(&self) -> S {
        self.inner.borrow().state.clone()
    }

    /// Read the current state without cloning it.
    pub fn with_state_ref<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.borrow().state)
    }

    /// Dispatch an action to the store.
    ///
    /// The reducer is called with the current state and the action, the
    /// result replaces the stored state, and every subscriber is then
    /// notified synchronously in registration order. The subscriber list is
    /// snapshotted when notification starts, so a listener that subscribes
    /// or unsubscribes mid-notification never invalidates the pass.
    ///
    /// Returns the dispatched action unchanged.
    ///
    /// # Errors
    ///
    /// * [`DispatchError::InvalidAction`] if the action's name is empty.
    /// * [`DispatchError::Reentrant`] if a dispatch is already in progress
    ///   on this store.
    ///
    /// A failed dispatch leaves the state exactly as it was.
    pub fn dispatch(&self, action: A) -> Result<A, DispatchError> {
        if action.name().is_empty() {
            return Err(DispatchError::InvalidAction);
        }

        let (reducer, prior) = {
            let mut inner = self.inner.borrow_mut();
            if inner.dispatching {
                return Err(DispatchError::Reentrant(action.name()));
            }
            inner.dispatching = true;
            (Rc::clone(&inner.reducer), inner.state.clone())
        };
        let _guard = DispatchGuard {
            inner: Rc::clone(&self.inner),
        };

        // The cell is unborrowed here, so a re-entrant dispatch from inside
        // the reducer surfaces as DispatchError::Reentrant.
        let next = reducer.reduce(&prior, &action);

        let snapshot: Vec<Rc<dyn Fn()>> = {
            let mut inner = self.inner.borrow_mut();
            inner.state = next;
            inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect()
        };

        tracing::debug!(
            action = action.name(),
            listeners = snapshot.len(),
            "dispatched"
        );

        for listener in snapshot {
            listener();
        }

        Ok(action)
    }

    /// Register a callback invoked after every completed dispatch.
    ///
    /// Listeners run in registration order. The returned [`Subscription`]
    /// deregisters the listener; dropping it without calling
    /// [`unsubscribe`](Subscription::unsubscribe) leaves the listener
    /// registered for the lifetime of the store.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };

        let weak: Weak<RefCell<Inner<S, A>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                }
            }),
        }
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Deregistration handle returned by [`Store::subscribe`].
///
/// Holds no reference that keeps the store alive; unsubscribing after the
/// store is gone is a no-op.
pub struct Subscription {
    cancel: Box<dyn FnOnce()>,
}

impl Subscription {
    /// Deregister the listener this handle was returned for.
    pub fn unsubscribe(self) {
        (self.cancel)();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
