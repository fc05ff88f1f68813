use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    joke_count: usize,
}

impl Header {
    pub fn new(joke_count: usize) -> Self {
        Self { joke_count }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let count = match self.joke_count {
            1 => "1 joke".to_string(),
            n => format!("{} jokes", n),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Joke Rating", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(count, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
