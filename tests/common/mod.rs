//! Shared test utilities.

#![allow(dead_code)]

use jokerate::ui::jokes::{Joke, JokeList};
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Build a snapshot from `(id, text, rating)` triples.
pub fn snapshot(jokes: &[(u64, &str, i64)]) -> JokeList {
    jokes
        .iter()
        .map(|(id, text, rating)| Joke::new(*id, *text, *rating))
        .collect()
}
