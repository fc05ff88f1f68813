//! Joke collection feature module.
//!
//! Holds the ordered list of rated jokes and every rule for changing it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `Joke` records and the `JokeList` snapshot
//! - `intent.rs` - Commands (rate, add, edit, delete, unrecognized)
//! - `reducer.rs` - State transitions plus the notification each one yields
//! - `validate.rs` - Text checks the caller runs before issuing a command

mod intent;
mod reducer;
mod state;
mod validate;

pub use intent::JokeIntent;
pub use reducer::{
    apply, JokeReducer, ADDED_MESSAGE, DELETED_MESSAGE, TOO_COLD_MESSAGE, UPDATED_MESSAGE,
};
pub use state::{Joke, JokeList, MAX_JOKE_CHARS, MIN_RATING};
pub use validate::validate_joke_text;
