//! Todo - the canonical uniflow example
//!
//! A todo list with a visibility filter, managed entirely through the store:
//! the UI dispatches actions, slice reducers compute the next state, and the
//! subscription marks the screen dirty.

pub mod action;
pub mod reducer;
pub mod state;

pub use action::{ActionCreators, IdSource, SequentialIds, TodoAction};
pub use reducer::{todo_app, todos, visibility_filter};
pub use state::{visible_todos, AppState, TodoItem, VisibilityFilter};
