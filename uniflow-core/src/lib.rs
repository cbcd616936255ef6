//! Core traits and types for uniflow
//!
//! This crate provides the foundational abstractions for unidirectional
//! state management, following a Redux-inspired architecture: state lives in
//! a single store, changes are described by dispatched actions, and pure
//! reducers compute the next state.
//!
//! # Core Concepts
//!
//! - **Action**: an immutable record describing an intent to change state
//! - **Reducer**: a pure function from `(state, action)` to the next state
//! - **Slice**: one named partition of the state, owned by one reducer
//! - **Store**: the state container applying reducers and notifying
//!   subscribers after every dispatch
//!
//! # Basic Example
//!
//! ```ignore
//! use uniflow_core::prelude::*;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct AppState {
//!     todos: Vec<TodoItem>,
//!     visibility_filter: VisibilityFilter,
//! }
//!
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
//!
//! let store = Store::new(root);
//! let _sub = store.subscribe(|| println!("state changed"));
//! store.dispatch(TodoAction::AddTodo { id: 0, text: "learn uniflow".into() })?;
//! ```
//!
//! The data flow is strictly one-directional: a view layer dispatches an
//! action, the store applies the composed reducer, the new state replaces
//! the old one wholesale, and subscribers re-read state to re-render.

pub mod action;
pub mod combine;
pub mod error;
pub mod reducer;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::Action;
pub use reducer::Reducer;

// Composition exports
pub use combine::{CombinedReducer, Slice, SliceReducer};

// Store exports
pub use error::DispatchError;
pub use store::{Store, Subscription};

// Testing exports
pub use testing::{dispatch_all, StateProbe};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::combine::{CombinedReducer, Slice, SliceReducer};
    pub use crate::error::DispatchError;
    pub use crate::reducer::Reducer;
    pub use crate::store::{Store, Subscription};
    pub use crate::testing::{dispatch_all, StateProbe};
}
