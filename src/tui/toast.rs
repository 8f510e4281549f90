use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::{ERROR_COLOR, POPUP_BG, SUCCESS_COLOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Short-lived message shown over the bottom of the screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn success(message: impl Into<String>, duration: Duration) -> Self {
        Self::new(message, ToastKind::Success, duration)
    }

    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self::new(message, ToastKind::Error, duration)
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Draws the toast centered near the bottom of `area`, above the footer line.
pub fn render(toast: &Toast, area: Rect, buf: &mut Buffer) {
    let color = match toast.kind {
        ToastKind::Success => SUCCESS_COLOR,
        ToastKind::Error => ERROR_COLOR,
    };
    let line = Line::from(toast.message.as_str());

    let width = (line.width() as u16).saturating_add(6).min(area.width);
    let height = 3u16.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.bottom().saturating_sub(height + 2).max(area.y);
    let toast_area = Rect::new(x, y, width, height);

    Clear.render(toast_area, buf);
    Paragraph::new(line)
        .style(Style::new().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::new().fg(color))
                .style(Style::new().bg(POPUP_BG)),
        )
        .render(toast_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_duration() {
        let toast = Toast::success("done", Duration::ZERO);
        assert!(toast.is_expired());

        let toast = Toast::error("nope", Duration::from_secs(60));
        assert!(!toast.is_expired());
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn renders_message_in_kind_color() {
        let toast = Toast::error("Please select a task first.", Duration::from_secs(1));
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 10));
        render(&toast, buf.area, &mut buf);

        let row: String = (0..60u16).map(|x| buf[(x, 6)].symbol()).collect();
        assert!(row.contains("Please select a task first."));
        assert_eq!(buf[(30, 6)].fg, ERROR_COLOR);
    }

    #[test]
    fn fits_in_a_tiny_area() {
        let toast = Toast::success("a rather long message for a tiny area", Duration::from_secs(1));
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        render(&toast, buf.area, &mut buf);
    }
}
