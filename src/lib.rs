//! Joke rating list: a pure reducer over an ordered joke snapshot, driven by
//! a terminal UI or a headless batch front-end.

pub mod batch;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
