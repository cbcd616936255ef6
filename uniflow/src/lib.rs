//! uniflow: unidirectional state management for Rust
//!
//! Like Redux: application state lives in a single store, every change is
//! described by a dispatched action, and pure reducers compute the next
//! state. Subscribers are notified after each completed dispatch and re-read
//! the state to react.
//!
//! # Example
//! ```ignore
//! use uniflow::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     AddTodo { id: u64, text: String },
//!     ToggleTodo { id: u64 },
//! }
//! ```

// Re-export everything from core
pub use uniflow_core::*;

// Re-export derive macros
pub use uniflow_macros::Action;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use uniflow_core::{Action, Reducer, Slice};

    // Composition
    pub use uniflow_core::{CombinedReducer, SliceReducer};

    // Store
    pub use uniflow_core::{DispatchError, Store, Subscription};

    // Testing helpers
    pub use uniflow_core::{dispatch_all, StateProbe};

    // Derive macros
    pub use uniflow_macros::Action;
}
