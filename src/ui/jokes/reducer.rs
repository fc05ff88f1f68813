//! Reducer for the joke collection.

use crate::ui::mvi::Reducer;
use crate::ui::notification::Notification;

use super::intent::JokeIntent;
use super::state::{Joke, JokeList, MIN_RATING};

pub const TOO_COLD_MESSAGE: &str = "Joke deleted for being too cold";
pub const DELETED_MESSAGE: &str = "Joke deleted";
pub const UPDATED_MESSAGE: &str = "Joke updated";
/// Emitted by callers after a successful add, never by the reducer.
pub const ADDED_MESSAGE: &str = "Joke added successfully!";

/// Reducer for joke collection state transitions.
///
/// Pure function: every notification is returned to the caller, which decides
/// how to display it. Commands aimed at an unknown id leave the snapshot
/// untouched and yield nothing.
pub struct JokeReducer;

impl Reducer for JokeReducer {
    type State = JokeList;
    type Intent = JokeIntent;
    type Effect = Notification;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>) {
        match intent {
            JokeIntent::IncreaseRating { id } => (increase_rating(state, id), None),
            JokeIntent::DecreaseRating { id } => decrease_rating(state, id),
            JokeIntent::AddJoke { text } => (add_joke(state, &text), None),
            JokeIntent::DeleteJoke { id } => delete_joke(state, id),
            JokeIntent::EditJoke { id, text } => edit_joke(state, id, &text),
            JokeIntent::Unrecognized { .. } => (state, None),
        }
    }
}

/// Apply one command to a snapshot.
pub fn apply(state: JokeList, intent: JokeIntent) -> (JokeList, Option<Notification>) {
    JokeReducer::reduce(state, intent)
}

fn increase_rating(mut state: JokeList, id: u64) -> JokeList {
    if let Some(joke) = state.jokes.iter_mut().find(|joke| joke.id == id) {
        joke.rating = joke.rating.saturating_add(1);
    }
    state
}

fn decrease_rating(mut state: JokeList, id: u64) -> (JokeList, Option<Notification>) {
    let Some(index) = state.position(id) else {
        return (state, None);
    };

    let rating = state.jokes[index].rating.saturating_sub(1);
    if rating < MIN_RATING {
        state.jokes.remove(index);
        return (state, Some(Notification::info(TOO_COLD_MESSAGE)));
    }

    state.jokes[index].rating = rating;
    (state, None)
}

fn add_joke(mut state: JokeList, text: &str) -> JokeList {
    // Length is the caller's check; emptiness is re-checked so no snapshot
    // ever holds a blank joke.
    let text = text.trim();
    if text.is_empty() {
        return state;
    }
    let Some(id) = state.next_id() else {
        return state;
    };
    state.jokes.push(Joke::new(id, text, 0));
    state
}

fn delete_joke(mut state: JokeList, id: u64) -> (JokeList, Option<Notification>) {
    match state.position(id) {
        Some(index) => {
            state.jokes.remove(index);
            (state, Some(Notification::warning(DELETED_MESSAGE)))
        }
        None => (state, None),
    }
}

fn edit_joke(mut state: JokeList, id: u64, text: &str) -> (JokeList, Option<Notification>) {
    let text = text.trim();
    if text.is_empty() {
        return (state, None);
    }
    match state.jokes.iter_mut().find(|joke| joke.id == id) {
        Some(joke) => {
            joke.text = text.to_string();
            (state, Some(Notification::success(UPDATED_MESSAGE)))
        }
        None => (state, None),
    }
}
