//! Slice reducers for the todo app
//!
//! Each function is pure and total: same `(state, action)` in, same state
//! out, and identity for action types the slice does not recognize.

use uniflow::{CombinedReducer, SliceReducer};

use crate::action::TodoAction;
use crate::state::{AppState, TodoItem, VisibilityFilter};

/// Reduce a single item. Toggles with a non-matching id are identity.
fn todo(item: &TodoItem, action: &TodoAction) -> TodoItem {
    match action {
        TodoAction::ToggleTodo { id } if *id == item.id => item.toggled(),
        _ => item.clone(),
    }
}

/// The `todos` slice: an ordered sequence in creation order.
///
/// Items are never deleted; a toggle replaces the matching item
/// structurally.
pub fn todos(state: &Vec<TodoItem>, action: &TodoAction) -> Vec<TodoItem> {
    match action {
        TodoAction::AddTodo { id, text } => {
            let mut next = state.clone();
            next.push(TodoItem::new(*id, text.clone()));
            next
        }
        TodoAction::ToggleTodo { .. } => state.iter().map(|item| todo(item, action)).collect(),
        _ => state.clone(),
    }
}

/// The `visibility_filter` slice.
pub fn visibility_filter(state: &VisibilityFilter, action: &TodoAction) -> VisibilityFilter {
    match action {
        TodoAction::SetVisibilityFilter { filter } => *filter,
        _ => *state,
    }
}

/// The root reducer: both slices registered under their fixed keys.
pub fn todo_app() -> CombinedReducer<AppState, TodoAction> {
    CombinedReducer::new()
        .slice(SliceReducer::new(
            "todos",
            |s: &AppState| &s.todos,
            |s, v| s.todos = v,
            Vec::new,
            todos,
        ))
        .slice(SliceReducer::new(
            "visibility_filter",
            |s: &AppState| &s.visibility_filter,
            |s, v| s.visibility_filter = v,
            VisibilityFilter::default,
            visibility_filter,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniflow::Reducer;

    #[test]
    fn test_add_appends_a_fresh_item() {
        let before = vec![TodoItem::new(0, "a")];
        let after = todos(
            &before,
            &TodoAction::AddTodo {
                id: 1,
                text: "b".into(),
            },
        );

        assert_eq!(after.len(), 2);
        assert_eq!(after[..1], before[..]);
        assert_eq!(after[1], TodoItem::new(1, "b"));
    }

    #[test]
    fn test_toggle_flips_only_the_matching_item() {
        let before = vec![TodoItem::new(0, "a"), TodoItem::new(1, "b")];
        let after = todos(&before, &TodoAction::ToggleTodo { id: 1 });

        assert!(!after[0].completed);
        assert!(after[1].completed);
    }

    #[test]
    fn test_toggle_missing_id_is_identity() {
        let before = vec![TodoItem::new(0, "a")];
        let after = todos(&before, &TodoAction::ToggleTodo { id: 42 });
        assert_eq!(after, before);
    }

    #[test]
    fn test_filter_slice_ignores_todo_actions() {
        let filter = VisibilityFilter::ShowActive;
        assert_eq!(
            visibility_filter(
                &filter,
                &TodoAction::AddTodo {
                    id: 0,
                    text: "a".into()
                }
            ),
            filter
        );
        assert_eq!(
            visibility_filter(
                &filter,
                &TodoAction::SetVisibilityFilter {
                    filter: VisibilityFilter::ShowAll
                }
            ),
            VisibilityFilter::ShowAll
        );
    }

    #[test]
    fn test_todos_slice_ignores_filter_actions() {
        let before = vec![TodoItem::new(0, "a")];
        let after = todos(
            &before,
            &TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::ShowCompleted,
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn test_root_reducer_seeds_slice_defaults() {
        let state = todo_app().initial();
        assert!(state.todos.is_empty());
        assert_eq!(state.visibility_filter, VisibilityFilter::ShowAll);
    }

    #[test]
    fn test_root_reducer_keys() {
        let root = todo_app();
        assert_eq!(
            root.keys().collect::<Vec<_>>(),
            vec!["todos", "visibility_filter"]
        );
    }

    #[test]
    fn test_unrecognized_update_is_identity_on_root() {
        let root = todo_app();
        let state = root.initial();
        // ShowAll is already set; nothing in the state changes.
        let next = root.reduce(
            &state,
            &TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::ShowAll,
            },
        );
        assert_eq!(next, state);
    }
}
