use crate::ui::app::{App, Mode};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::jokes::MAX_JOKE_CHARS;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    rating_color, ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR,
};
use crate::ui::toast::render_toasts;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Columns taken by the selection marker in front of each joke line.
const MARKER_WIDTH: usize = 3;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area, app.mode().is_input());

    frame.render_widget(Header::new(app.jokes().len()).widget(), regions.header);
    frame.render_widget(Clear, regions.body);
    draw_jokes(frame, app, regions.body);

    if let Some(input) = regions.input {
        draw_input(frame, app, input);
    }

    let footer = Footer::new(app.mode());
    frame.render_widget(footer.widget(regions.footer), regions.footer);

    render_toasts(frame, app.toasts(), app.toast_position(), regions.body);
}

fn draw_jokes(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    if app.jokes().is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "  No jokes yet. Press 'a' to add one.",
            Style::default().fg(MUTED_TEXT),
        )));
        frame.render_widget(hint, area);
        return;
    }

    let text_width = (area.width as usize).saturating_sub(MARKER_WIDTH).max(1);
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_range = (0usize, 0usize);

    for (index, joke) in app.jokes().iter().enumerate() {
        let is_selected = match app.mode() {
            Mode::Browse => index == app.selected(),
            Mode::Edit { id } => id == joke.id,
            Mode::Compose => false,
        };
        let base = if is_selected {
            Style::default().bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default()
        };
        let start = lines.len();

        for (row, chunk) in wrap_words(&joke.text, text_width).into_iter().enumerate() {
            let marker = if is_selected && row == 0 { " ▶ " } else { "   " };
            lines.push(Line::from(vec![
                Span::styled(marker, base.fg(ACCENT)),
                Span::styled(chunk, base.fg(HEADER_TEXT)),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("   ", base),
            Span::styled("Rating: ", base.fg(MUTED_TEXT)),
            Span::styled(
                joke.rating.to_string(),
                base.fg(rating_color(joke.rating)).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  #{}", joke.id), base.fg(MUTED_TEXT)),
        ]));

        if index == app.selected() {
            selected_range = (start, lines.len());
        }
        lines.push(Line::from(""));
    }

    let height = area.height as usize;
    let scroll = selected_range.1.saturating_sub(height).min(selected_range.0);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

fn draw_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = match app.mode() {
        Mode::Edit { id } => format!(" Edit joke #{} ", id),
        _ => " New joke ".to_string(),
    };

    let len = app.draft_len();
    let counter_style = if len >= MAX_JOKE_CHARS {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    let counter = Line::from(Span::styled(
        format!(" {} / {} ", len, MAX_JOKE_CHARS),
        counter_style,
    ))
    .right_aligned();

    let block = Block::default()
        .title(title)
        .title_bottom(counter)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let rows = chunk_chars(app.draft(), inner.width as usize);
    let visible = inner.height as usize;
    let skip = rows.len().saturating_sub(visible);
    let cursor_row = rows.len().saturating_sub(1) - skip;
    let cursor_col = rows.last().map(|row| row.chars().count()).unwrap_or(0);

    let lines: Vec<Line> = rows
        .into_iter()
        .skip(skip)
        .map(|row| Line::from(Span::styled(row, Style::default().fg(HEADER_TEXT))))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    let x = inner.x + (cursor_col as u16).min(inner.width.saturating_sub(1));
    let y = inner.y + cursor_row as u16;
    frame.set_cursor_position((x, y));
}

/// Word-wrap `text` to `width` columns. Words longer than a line are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };
            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.extend(word.iter());
                current_len += word.len();
                break;
            }
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }
            let rest = word.split_off(width);
            lines.push(word.iter().collect());
            word = rest;
        }
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split `text` into rows of exactly `width` characters (last row shorter).
///
/// Always returns at least one row so the cursor has somewhere to go. A
/// draft that exactly fills its last row gets a fresh empty row.
fn chunk_chars(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut rows: Vec<String> = chars.chunks(width).map(|c| c.iter().collect()).collect();
    if chars.len() % width == 0 {
        rows.push(String::new());
    }
    rows
}
