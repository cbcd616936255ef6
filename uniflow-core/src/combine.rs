//! Reducer composition over named state slices
//!
//! A composite state is split into named slices, each owned by exactly one
//! slice reducer. [`CombinedReducer`] keeps an explicit table of registered
//! `(key, reducer)` entries and offers every dispatched action to every
//! entry; entries whose slice is untouched by the action leave it unchanged.
//!
//! The set of slice keys is fixed at composition time. A slice reducer only
//! ever sees its own slice, so cross-slice reads are ruled out structurally.
//!
//! # Example
//! ```ignore
//! let root = CombinedReducer::new()
//!     .slice(SliceReducer::new(
//!         "todos",
//!         |s: &AppState| &s.todos,
//!         |s, v| s.todos = v,
//!         Vec::new,
//!         todos,
//!     ))
//!     .slice(SliceReducer::new(
//!         "visibility_filter",
//!         |s: &AppState| &s.visibility_filter,
//!         |s, v| s.visibility_filter = v,
//!         VisibilityFilter::default,
//!         visibility_filter,
//!     ));
//! ```

use crate::{Action, Reducer};

/// One named partition of a composite state, owned by a single reducer.
///
/// Implementations write their replacement slice into `next` and must not
/// touch any other part of the state.
pub trait Slice<S, A: Action> {
    /// The slice's name within the composite state.
    fn key(&self) -> &'static str;

    /// Write the slice's default value into `state`.
    fn seed(&self, state: &mut S);

    /// Reduce the owned slice of `state`, writing the result into `next`.
    ///
    /// Returns `true` if the slice changed.
    fn apply(&self, state: &S, next: &mut S, action: &A) -> bool;
}

/// A slice entry built from a field accessor pair and a pure slice function.
///
/// The slice function has the shape `fn(&T, &A) -> T`: same input, same
/// output, and identity for action types it does not recognize.
pub struct SliceReducer<S, T, A: Action> {
    key: &'static str,
    read: fn(&S) -> &T,
    write: fn(&mut S, T),
    default: fn() -> T,
    reduce: fn(&T, &A) -> T,
}

impl<S, T, A: Action> SliceReducer<S, T, A> {
    /// Create a slice entry.
    ///
    /// `read`/`write` address the slice within the composite state,
    /// `default` supplies the slice's initial value, and `reduce` is the
    /// pure slice function.
    pub fn new(
        key: &'static str,
        read: fn(&S) -> &T,
        write: fn(&mut S, T),
        default: fn() -> T,
        reduce: fn(&T, &A) -> T,
    ) -> Self {
        Self {
            key,
            read,
            write,
            default,
            reduce,
        }
    }
}

impl<S, T, A> Slice<S, A> for SliceReducer<S, T, A>
where
    T: PartialEq,
    A: Action,
{
    fn key(&self) -> &'static str {
        self.key
    }

    fn seed(&self, state: &mut S) {
        (self.write)(state, (self.default)());
    }

    fn apply(&self, state: &S, next: &mut S, action: &A) -> bool {
        let current = (self.read)(state);
        let reduced = (self.reduce)(current, action);
        if reduced == *current {
            return false;
        }
        (self.write)(next, reduced);
        true
    }
}

/// A root reducer composed from a table of named slice reducers.
///
/// Every dispatched action is offered to every registered slice, in
/// registration order. The composed `reduce` clones the prior state and lets
/// each changed slice replace its partition, so an action nobody recognizes
/// yields a state equal to the input.
pub struct CombinedReducer<S, A: Action> {
    slices: Vec<Box<dyn Slice<S, A>>>,
}

impl<S, A: Action> Default for CombinedReducer<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A: Action> CombinedReducer<S, A> {
    /// Create an empty composition.
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Register a slice entry.
    ///
    /// # Panics
    ///
    /// Panics if a slice with the same key is already registered; slice keys
    /// are fixed and unique at composition time.
    pub fn slice(mut self, entry: impl Slice<S, A> + 'static) -> Self {
        assert!(
            !self.slices.iter().any(|s| s.key() == entry.key()),
            "duplicate slice key `{}`",
            entry.key()
        );
        self.slices.push(Box::new(entry));
        self
    }

    /// The registered slice keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slices.iter().map(|s| s.key())
    }

    /// Number of registered slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slices are registered.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl<S, A> Reducer<A> for CombinedReducer<S, A>
where
    S: Clone + Default,
    A: Action,
{
    type State = S;

    fn initial(&self) -> S {
        let mut state = S::default();
        for slice in &self.slices {
            slice.seed(&mut state);
        }
        state
    }

    fn reduce(&self, state: &S, action: &A) -> S {
        let mut next = state.clone();
        for slice in &self.slices {
            if slice.apply(state, &mut next, action) {
                tracing::trace!(slice = slice.key(), action = action.name(), "slice changed");
            }
        }
        next
    }
}
