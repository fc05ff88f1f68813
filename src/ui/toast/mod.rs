//! Toast notifications feature module.
//!
//! Keeps the short-lived messages shown after a command, each with its own
//! expiry instant.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Queue of visible toasts
//! - `intent.rs` - Push, expire, dismiss
//! - `reducer.rs` - State transitions
//! - `widget.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod widget;

pub use intent::ToastIntent;
pub use reducer::ToastReducer;
pub use state::{Toast, ToastState, MAX_TOASTS};
pub use widget::render_toasts;
