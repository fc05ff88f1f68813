//! Commands accepted by the joke collection.

use crate::ui::mvi::Intent;

/// Commands that can be dispatched to the joke reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokeIntent {
    /// Upvote a joke.
    IncreaseRating { id: u64 },

    /// Downvote a joke. Removes it once the rating would drop below the floor.
    DecreaseRating { id: u64 },

    /// Append a new joke with rating 0.
    AddJoke { text: String },

    /// Remove a joke.
    DeleteJoke { id: u64 },

    /// Replace the text of a joke.
    EditJoke { id: u64, text: String },

    /// A gesture or textual command that maps to nothing above.
    Unrecognized { command: String },
}

impl Intent for JokeIntent {}

impl JokeIntent {
    /// Parse a one-line textual command.
    ///
    /// Accepted forms: `up <id>`, `down <id>`, `add <text>`, `delete <id>`,
    /// `edit <id> <text>`. Anything else, including a malformed id, becomes
    /// [`JokeIntent::Unrecognized`].
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (line, ""),
        };

        let parsed = match verb.to_ascii_lowercase().as_str() {
            "up" | "upvote" | "+" => parse_id(rest).map(|id| JokeIntent::IncreaseRating { id }),
            "down" | "downvote" | "-" => {
                parse_id(rest).map(|id| JokeIntent::DecreaseRating { id })
            }
            "delete" | "del" | "rm" => parse_id(rest).map(|id| JokeIntent::DeleteJoke { id }),
            "add" => Some(JokeIntent::AddJoke {
                text: rest.to_string(),
            }),
            "edit" => {
                let (id, text) = match rest.split_once(char::is_whitespace) {
                    Some((id, text)) => (id, text),
                    None => (rest, ""),
                };
                parse_id(id).map(|id| JokeIntent::EditJoke {
                    id,
                    text: text.to_string(),
                })
            }
            _ => None,
        };

        parsed.unwrap_or_else(|| JokeIntent::Unrecognized {
            command: line.to_string(),
        })
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            JokeIntent::IncreaseRating { .. } => "increase_rating",
            JokeIntent::DecreaseRating { .. } => "decrease_rating",
            JokeIntent::AddJoke { .. } => "add_joke",
            JokeIntent::DeleteJoke { .. } => "delete_joke",
            JokeIntent::EditJoke { .. } => "edit_joke",
            JokeIntent::Unrecognized { .. } => "unrecognized",
        }
    }
}

fn parse_id(raw: &str) -> Option<u64> {
    let mut parts = raw.split_whitespace();
    let id = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(id)
}
