//! Input side of the MVI loop.

/// A command handed to a reducer.
///
/// Joke commands come from key gestures or parsed batch lines. Toast
/// commands come from the app itself (new notification, timer tick).
pub trait Intent: Send + 'static {}
