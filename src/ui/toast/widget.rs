//! Toast rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::ToastPosition;
use crate::ui::layout::corner_rect;
use crate::ui::theme::{notification_color, HEADER_TEXT};

use super::state::ToastState;

/// Width of a toast box.
const TOAST_WIDTH: u16 = 44;

/// Height of a toast box: one line of text plus borders.
const TOAST_HEIGHT: u16 = 3;

/// Render the toast stack over `area`, newest closest to the corner.
pub fn render_toasts(frame: &mut Frame, state: &ToastState, position: ToastPosition, area: Rect) {
    let (top, right) = match position {
        ToastPosition::TopRight => (true, true),
        ToastPosition::TopLeft => (true, false),
        ToastPosition::BottomRight => (false, true),
        ToastPosition::BottomLeft => (false, false),
    };

    for (index, toast) in state.toasts().iter().rev().enumerate() {
        let Ok(stack_index) = u16::try_from(index) else {
            break;
        };
        let Some(rect) = corner_rect(area, TOAST_WIDTH, TOAST_HEIGHT, top, right, stack_index)
        else {
            break;
        };

        let color = notification_color(toast.notification.kind);
        let inner_width = rect.width.saturating_sub(2) as usize;
        let message = truncate(&toast.notification.message, inner_width);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", toast.notification.kind.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(HEADER_TEXT),
            )))
            .block(block),
            rect,
        );
    }
}

/// Cut `text` to `width` characters, ending with an ellipsis when shortened.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_untouched() {
        assert_eq!(truncate("Joke deleted", 20), "Joke deleted");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate("Joke updated", 6), "Joke …");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(truncate("anything", 0), "");
    }
}
