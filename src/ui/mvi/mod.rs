//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effect) ──→ View
//!    ↑                                        │
//!    └────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of UI state
//! - **Intent**: User gestures or system events
//! - **Reducer**: Pure function that produces the next state plus an
//!   optional effect value for the caller to act on

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
