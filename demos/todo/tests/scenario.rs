//! Store-level scenarios for the todo app.

use proptest::prelude::*;
use uniflow::prelude::*;

use todo::{
    todo_app, todos, visible_todos, ActionCreators, AppState, TodoAction, TodoItem,
    VisibilityFilter,
};

#[test]
fn add_toggle_filter_walkthrough() {
    let store = Store::new(todo_app());
    let mut creators = ActionCreators::new();

    assert_eq!(
        store.state(),
        AppState {
            todos: vec![],
            visibility_filter: VisibilityFilter::ShowAll,
        }
    );

    store.dispatch(creators.add_todo("a")).unwrap();
    assert_eq!(
        store.state(),
        AppState {
            todos: vec![TodoItem::new(0, "a")],
            visibility_filter: VisibilityFilter::ShowAll,
        }
    );

    store.dispatch(creators.toggle_todo(0)).unwrap();
    assert!(store.state().todos[0].completed);

    store
        .dispatch(creators.set_visibility_filter(VisibilityFilter::ShowCompleted))
        .unwrap();
    let state = store.state();
    let visible = visible_todos(&state.todos, state.visibility_filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 0);

    store.dispatch(creators.add_todo("b")).unwrap();
    store
        .dispatch(creators.set_visibility_filter(VisibilityFilter::ShowActive))
        .unwrap();
    let state = store.state();
    let visible = visible_todos(&state.todos, state.visibility_filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text, "b");
    assert_eq!(visible[0].id, 1);
}

#[test]
fn probe_sees_every_intermediate_state() {
    let store = Store::new(todo_app());
    let mut creators = ActionCreators::new();
    let probe = StateProbe::new();
    let _sub = probe.attach(&store);

    dispatch_all(
        &store,
        vec![
            creators.add_todo("one"),
            creators.add_todo("two"),
            creators.toggle_todo(0),
        ],
    )
    .unwrap();

    let lengths: Vec<usize> = probe.snapshots().iter().map(|s| s.todos.len()).collect();
    assert_eq!(lengths, vec![1, 2, 2]);
    assert!(probe.last().unwrap().todos[0].completed);
}

#[test]
fn subscriber_dispatch_is_rejected_and_state_kept() {
    let store = Store::new(todo_app());
    let mut creators = ActionCreators::new();

    let seen = std::rc::Rc::new(std::cell::Cell::new(None));
    let handle = store.clone();
    let slot = std::rc::Rc::clone(&seen);
    let _sub = store.subscribe(move || {
        slot.set(handle.dispatch(TodoAction::ToggleTodo { id: 0 }).err());
    });

    store.dispatch(creators.add_todo("a")).unwrap();
    assert_eq!(seen.get(), Some(DispatchError::Reentrant("ToggleTodo")));

    // The outer dispatch's reduction stands, the inner one never happened.
    let state = store.state();
    assert_eq!(state.todos.len(), 1);
    assert!(!state.todos[0].completed);
}

fn arb_todos() -> impl Strategy<Value = Vec<TodoItem>> {
    prop::collection::vec((0u64..50, "[a-z]{1,8}", any::<bool>()), 0..20).prop_map(|items| {
        items
            .into_iter()
            .map(|(id, text, completed)| TodoItem {
                id,
                text,
                completed,
            })
            .collect()
    })
}

proptest! {
    /// Toggling the same id twice restores every completed flag.
    #[test]
    fn toggle_is_an_involution(before in arb_todos(), id in 0u64..60) {
        let action = TodoAction::ToggleTodo { id };
        let after = todos(&todos(&before, &action), &action);
        prop_assert_eq!(after, before);
    }

    /// Actions the todos slice does not recognize are identity.
    #[test]
    fn filter_actions_never_touch_todos(before in arb_todos()) {
        let action = TodoAction::SetVisibilityFilter { filter: VisibilityFilter::ShowCompleted };
        prop_assert_eq!(todos(&before, &action), before);
    }

    /// Adding always appends exactly one fresh item at the end.
    #[test]
    fn add_appends_one(before in arb_todos(), text in "[a-z]{1,8}") {
        let action = TodoAction::AddTodo { id: 1_000, text: text.clone() };
        let after = todos(&before, &action);
        prop_assert_eq!(after.len(), before.len() + 1);
        prop_assert_eq!(&after[..before.len()], &before[..]);
        prop_assert_eq!(after.last().unwrap(), &TodoItem::new(1_000, text));
    }

    /// Active and completed partition the list; ShowAll preserves it.
    #[test]
    fn filters_partition_the_list(todos_vec in arb_todos()) {
        let all = visible_todos(&todos_vec, VisibilityFilter::ShowAll);
        let active = visible_todos(&todos_vec, VisibilityFilter::ShowActive);
        let completed = visible_todos(&todos_vec, VisibilityFilter::ShowCompleted);

        prop_assert_eq!(all.len(), todos_vec.len());
        prop_assert_eq!(active.len() + completed.len(), todos_vec.len());
        prop_assert!(active.iter().all(|t| !t.completed));
        prop_assert!(completed.iter().all(|t| t.completed));
    }

    /// Ids handed out by the creators are strictly increasing.
    #[test]
    fn creator_ids_strictly_increase(texts in prop::collection::vec("[a-z]{1,5}", 1..10)) {
        let mut creators = ActionCreators::new();
        let mut last: Option<u64> = None;
        for text in texts {
            if let TodoAction::AddTodo { id, .. } = creators.add_todo(text) {
                if let Some(prev) = last {
                    prop_assert!(id > prev);
                }
                last = Some(id);
            }
        }
    }
}
