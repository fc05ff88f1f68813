//! Snapshot state for the joke collection.

use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

/// Longest joke text accepted, in characters.
pub const MAX_JOKE_CHARS: usize = 150;

/// Lowest rating a joke can keep. One more downvote removes it.
pub const MIN_RATING: i64 = -5;

/// A rated joke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub id: u64,
    pub text: String,
    pub rating: i64,
}

impl Joke {
    pub fn new(id: u64, text: impl Into<String>, rating: i64) -> Self {
        Self {
            id,
            text: text.into(),
            rating,
        }
    }
}

/// Ordered snapshot of every joke on screen.
///
/// Ids are unique and no rating is below [`MIN_RATING`] in any snapshot the
/// reducer produces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JokeList {
    pub(super) jokes: Vec<Joke>,
}

impl UiState for JokeList {}

impl JokeList {
    /// Build a snapshot from `(text, rating)` pairs, numbering them from 1.
    pub fn from_seeds<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let jokes = seeds
            .into_iter()
            .zip(1u64..)
            .map(|((text, rating), id)| Joke::new(id, text, rating))
            .collect();
        Self { jokes }
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Joke> {
        self.jokes.iter()
    }

    pub fn get(&self, id: u64) -> Option<&Joke> {
        self.jokes.iter().find(|joke| joke.id == id)
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.jokes.iter().position(|joke| joke.id == id)
    }

    pub fn ids(&self) -> Vec<u64> {
        self.jokes.iter().map(|joke| joke.id).collect()
    }

    /// Id for the next added joke: one past the largest id, or 1 when empty.
    ///
    /// `None` only when the largest id is `u64::MAX`.
    pub fn next_id(&self) -> Option<u64> {
        match self.jokes.iter().map(|joke| joke.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }
}

impl From<Vec<Joke>> for JokeList {
    fn from(jokes: Vec<Joke>) -> Self {
        Self { jokes }
    }
}

impl FromIterator<Joke> for JokeList {
    fn from_iter<T: IntoIterator<Item = Joke>>(iter: T) -> Self {
        Self {
            jokes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a JokeList {
    type Item = &'a Joke;
    type IntoIter = std::slice::Iter<'a, Joke>;

    fn into_iter(self) -> Self::IntoIter {
        self.jokes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default() {
        assert!(JokeList::default().is_empty());
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(JokeList::default().next_id(), Some(1));
    }

    #[test]
    fn next_id_follows_largest_not_last() {
        let list = JokeList::from(vec![Joke::new(9, "a", 0), Joke::new(4, "b", 0)]);
        assert_eq!(list.next_id(), Some(10));
    }

    #[test]
    fn next_id_exhausted_at_max() {
        let list = JokeList::from(vec![Joke::new(u64::MAX, "a", 0)]);
        assert_eq!(list.next_id(), None);
    }

    #[test]
    fn from_seeds_numbers_in_order() {
        let list = JokeList::from_seeds([("first", 7), ("second", -2)]);
        assert_eq!(list.ids(), vec![1, 2]);
        assert_eq!(list.get(2).map(|j| j.rating), Some(-2));
    }

    #[test]
    fn serializes_as_plain_array() {
        let list = JokeList::from(vec![Joke::new(1, "hi", 3)]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"id":1,"text":"hi","rating":3}]"#);
    }
}
