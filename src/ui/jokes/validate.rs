//! Checks run by callers before they issue add or edit commands.

use crate::error::ValidationError;

use super::state::MAX_JOKE_CHARS;

/// Trim `raw` and check it against the joke text rules.
///
/// Returns the trimmed text on success. Length is counted in characters.
pub fn validate_joke_text(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = trimmed.chars().count();
    if len > MAX_JOKE_CHARS {
        return Err(ValidationError::TooLong {
            len,
            max: MAX_JOKE_CHARS,
        });
    }

    Ok(trimmed.to_string())
}
