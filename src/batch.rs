//! Headless front-end: applies textual commands and prints the result.
//!
//! One command per line (`up 3`, `down 3`, `add <text>`, `delete 3`,
//! `edit 3 <text>`). Blank lines and `#` comments are skipped. Each command
//! goes through the same validation and reducer as the terminal UI.

use std::io::{BufRead, Write};
use std::time::Instant;

use thiserror::Error;

use crate::ui::app::App;
use crate::ui::jokes::JokeIntent;
use crate::ui::notification::Notification;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to read commands: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write snapshot: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Counts gathered while running a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub commands: usize,
    pub unrecognized: usize,
    pub notifications: usize,
}

/// Apply every command from `input`, then write the final snapshot to
/// `output` as pretty JSON.
///
/// `on_notification` sees each notification in order.
pub fn run<R, W, F>(
    input: R,
    mut output: W,
    app: &mut App,
    mut on_notification: F,
) -> Result<BatchSummary, BatchError>
where
    R: BufRead,
    W: Write,
    F: FnMut(&Notification),
{
    let mut summary = BatchSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(BatchError::Read)?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let intent = JokeIntent::parse(trimmed);
        summary.commands += 1;
        if let JokeIntent::Unrecognized { command } = &intent {
            tracing::warn!(line = index + 1, command = %command, "Unrecognized command");
            summary.unrecognized += 1;
        }

        if let Some(notification) = app.submit(intent, Instant::now()) {
            summary.notifications += 1;
            on_notification(&notification);
        }
    }

    serde_json::to_writer_pretty(&mut output, app.jokes())?;
    writeln!(output).map_err(BatchError::Write)?;
    output.flush().map_err(BatchError::Write)?;

    tracing::info!(
        commands = summary.commands,
        unrecognized = summary.unrecognized,
        jokes = app.jokes().len(),
        "Batch complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn skips_blank_and_comment_lines() {
        let mut app = App::new(&Config {
            jokes: Vec::new(),
            ..Config::default()
        });
        let input = "\n# a comment\n   \nadd hi\n";
        let mut out = Vec::new();
        let summary = run(input.as_bytes(), &mut out, &mut app, |_| {}).unwrap();
        assert_eq!(summary.commands, 1);
        assert_eq!(app.jokes().len(), 1);
    }

    #[test]
    fn counts_unrecognized() {
        let mut app = App::new(&Config::default());
        let mut out = Vec::new();
        let summary = run("jump 1\nup x\n".as_bytes(), &mut out, &mut app, |_| {}).unwrap();
        assert_eq!(summary.unrecognized, 2);
        assert_eq!(summary.notifications, 0);
    }
}
