//! Model-View-Intent primitives for the terminal screens.
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Widget state that only matters to the screen (focus, scroll) lives in a
//! [`UiState`] and changes only through a [`Reducer`]. Order data is not UI
//! state; it stays in the session.

/// Marker for screen-local state: cheap to clone, comparable, with a
/// sensible empty value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker for actions fed into a reducer.
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State` transition.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
