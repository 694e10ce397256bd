//! Unidirectional data-flow primitives.
//!
//! State never mutates in place from event handlers: every change goes
//! through a reducer, a pure `(State, Intent) -> State` function. Side
//! effects (submitting to the sink, quitting) stay in the app shell.

/// Marker trait for UI state containers.
///
/// A state is a self-contained value: cloneable, comparable for change
/// detection, and constructible empty.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents, the discrete user-triggered events a reducer
/// consumes (key presses mapped to field mutations, navigation, reset).
pub trait Intent: Send + 'static {}

/// A pure state-transition function over one state/intent pair.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and produce the next one. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
