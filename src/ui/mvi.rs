//! Model-View-Intent primitives.
//!
//! ```text
//! scroll signal ─┐
//!                ├─→ Intent ──→ Reducer ──→ State ──→ View
//! fetch outcome ─┘
//! ```
//!
//! Reducers never start work themselves. Whoever dispatches looks at the
//! state before and after and spawns what is needed (see `App::dispatch_feed`).

/// State a view renders from.
///
/// `Default` is the freshly mounted state: dispatch moves the current value
/// out with `std::mem::take` and stores the reducer's result back.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened: user input or background work reporting back.
///
/// Intents travel over channels from fetch tasks, hence `Send + 'static`.
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State` transition.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
