//! Test utilities for uniflow stores
//!
//! - [`StateProbe`]: a subscriber that records every post-dispatch state
//! - [`dispatch_all`]: dispatch a sequence of actions, stopping at the first
//!   failure
//!
//! # Example
//!
//! ```ignore
//! use uniflow_core::testing::{dispatch_all, StateProbe};
//!
//! let store = Store::new(todo_app());
//! let probe = StateProbe::new();
//! let _sub = probe.attach(&store);
//!
//! dispatch_all(&store, vec![actions.add_todo("a"), actions.toggle_todo(0)])?;
//! assert_eq!(probe.len(), 2);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Action, DispatchError, Store, Subscription};

/// Records every state snapshot a store notifies about.
///
/// Attach it to a store and inspect the captured snapshots afterwards. Each
/// completed dispatch appends one snapshot, in dispatch order.
pub struct StateProbe<S> {
    states: Rc<RefCell<Vec<S>>>,
}

impl<S: Clone + 'static> Default for StateProbe<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + 'static> StateProbe<S> {
    /// Create an empty probe.
    pub fn new() -> Self {
        Self {
            states: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Subscribe the probe to a store.
    ///
    /// Keep the returned [`Subscription`] alive for as long as the probe
    /// should record.
    #[must_use]
    pub fn attach<A: Action>(&self, store: &Store<S, A>) -> Subscription {
        let states = Rc::clone(&self.states);
        let handle = store.clone();
        store.subscribe(move || states.borrow_mut().push(handle.state()))
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> Vec<S> {
        self.states.borrow().clone()
    }

    /// The most recent snapshot, if any dispatch completed.
    pub fn last(&self) -> Option<S> {
        self.states.borrow().last().cloned()
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.states.borrow().len()
    }

    /// Whether nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.states.borrow().is_empty()
    }
}

/// Dispatch a sequence of actions in order.
///
/// Stops at the first error and returns it; actions dispatched before the
/// failure keep their effect.
pub fn dispatch_all<S, A>(
    store: &Store<S, A>,
    actions: impl IntoIterator<Item = A>,
) -> Result<(), DispatchError>
where
    S: Clone + 'static,
    A: Action,
{
    for action in actions {
        store.dispatch(action)?;
    }
    Ok(())
}
