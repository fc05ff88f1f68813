use ratatui::style::Color;

use crate::ui::notification::NotificationKind;

pub const ACCENT: Color = Color::Rgb(0xf5, 0xa6, 0x23);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_INFO: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const STATUS_WARN: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub fn notification_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Info => STATUS_INFO,
        NotificationKind::Success => STATUS_OK,
        NotificationKind::Warning => STATUS_WARN,
        NotificationKind::Error => STATUS_ERROR,
    }
}

/// Colour for a rating value: cold ratings fade towards red.
pub fn rating_color(rating: i64) -> Color {
    match rating {
        r if r <= -3 => STATUS_ERROR,
        r if r < 0 => STATUS_WARN,
        0 => MUTED_TEXT,
        _ => STATUS_OK,
    }
}
