//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen, and every
/// value derived from the state is recomputed inside the same call.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Process an intent and return the new state. Must not have side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
