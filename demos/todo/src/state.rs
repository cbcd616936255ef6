use serde::{Deserialize, Serialize};

/// A single todo entry.
///
/// `id` is unique and immutable once assigned; `completed` is the only field
/// that changes over the item's lifetime, and it changes by structural
/// replacement, never in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    /// A fresh, not-yet-completed item.
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// A copy of this item with the `completed` flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Which subset of todos the list shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisibilityFilter {
    #[default]
    ShowAll,
    ShowActive,
    ShowCompleted,
}

impl VisibilityFilter {
    pub fn label(&self) -> &'static str {
        match self {
            VisibilityFilter::ShowAll => "All",
            VisibilityFilter::ShowActive => "Active",
            VisibilityFilter::ShowCompleted => "Completed",
        }
    }

    pub fn all() -> &'static [VisibilityFilter] {
        &[
            VisibilityFilter::ShowAll,
            VisibilityFilter::ShowActive,
            VisibilityFilter::ShowCompleted,
        ]
    }

    pub fn next(self) -> Self {
        match self {
            VisibilityFilter::ShowAll => VisibilityFilter::ShowActive,
            VisibilityFilter::ShowActive => VisibilityFilter::ShowCompleted,
            VisibilityFilter::ShowCompleted => VisibilityFilter::ShowAll,
        }
    }
}

/// The whole application state: one slice per reducer.
///
/// The slice keys are fixed when the root reducer is composed (see
/// [`todo_app`](crate::reducer::todo_app)); the state is replaced wholesale
/// on every dispatch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub todos: Vec<TodoItem>,
    pub visibility_filter: VisibilityFilter,
}

/// The subset of `todos` the given filter admits, in their original order.
pub fn visible_todos<'a>(todos: &'a [TodoItem], filter: VisibilityFilter) -> Vec<&'a TodoItem> {
    match filter {
        VisibilityFilter::ShowAll => todos.iter().collect(),
        VisibilityFilter::ShowActive => todos.iter().filter(|t| !t.completed).collect(),
        VisibilityFilter::ShowCompleted => todos.iter().filter(|t| t.completed).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<TodoItem> {
        vec![
            TodoItem::new(0, "a"),
            TodoItem::new(1, "b").toggled(),
            TodoItem::new(2, "c"),
        ]
    }

    #[test]
    fn test_toggled_flips_only_completed() {
        let item = TodoItem::new(9, "water plants");
        let toggled = item.toggled();
        assert!(toggled.completed);
        assert_eq!(toggled.id, item.id);
        assert_eq!(toggled.text, item.text);
        assert_eq!(toggled.toggled(), item);
    }

    #[test]
    fn test_show_all_returns_everything() {
        let todos = fixture();
        let visible = visible_todos(&todos, VisibilityFilter::ShowAll);
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_active_and_completed_partition() {
        let todos = fixture();
        let active = visible_todos(&todos, VisibilityFilter::ShowActive);
        let completed = visible_todos(&todos, VisibilityFilter::ShowCompleted);

        assert_eq!(active.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(completed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(active.len() + completed.len(), todos.len());
    }

    #[test]
    fn test_filter_cycle_covers_all() {
        let mut filter = VisibilityFilter::ShowAll;
        for expected in VisibilityFilter::all() {
            assert_eq!(filter, *expected);
            filter = filter.next();
        }
        assert_eq!(filter, VisibilityFilter::ShowAll);
    }
}
