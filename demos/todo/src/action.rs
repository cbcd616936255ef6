use serde::{Deserialize, Serialize};

use crate::state::VisibilityFilter;

/// Everything that can happen to the todo list.
///
/// Payloads are fixed per variant, so a malformed action cannot be
/// constructed. Ids are assigned by the creator, not the reducer.
#[derive(uniflow::Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    AddTodo { id: u64, text: String },
    ToggleTodo { id: u64 },
    SetVisibilityFilter { filter: VisibilityFilter },
}

/// Allocates todo ids.
///
/// Every id handed out must be strictly greater than all ids handed out
/// before it.
pub trait IdSource {
    fn next_id(&mut self) -> u64;
}

/// The default id source: 0, 1, 2, ...
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume counting from a known id, e.g. after reloading existing todos.
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Pure factories for [`TodoAction`] values.
///
/// The id source is threaded in explicitly instead of living in a global
/// counter, so tests can inject a deterministic one. Share a single
/// `ActionCreators` instance per store to keep ids monotonic.
#[derive(Clone, Debug, Default)]
pub struct ActionCreators<I = SequentialIds> {
    ids: I,
}

impl ActionCreators<SequentialIds> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: IdSource> ActionCreators<I> {
    /// Use a custom id source.
    pub fn with_ids(ids: I) -> Self {
        Self { ids }
    }

    /// Create an add action carrying a freshly allocated id.
    pub fn add_todo(&mut self, text: impl Into<String>) -> TodoAction {
        TodoAction::AddTodo {
            id: self.ids.next_id(),
            text: text.into(),
        }
    }

    pub fn toggle_todo(&self, id: u64) -> TodoAction {
        TodoAction::ToggleTodo { id }
    }

    pub fn set_visibility_filter(&self, filter: VisibilityFilter) -> TodoAction {
        TodoAction::SetVisibilityFilter { filter }
    }
}
