//! Notification toasts

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, Notification, ToastVariant};
use crate::view::theme::colors;

const MIN_WIDTH: u16 = 24;
const MAX_WIDTH: u16 = 48;
const HEIGHT: u16 = 4;

/// Width needed to show a notification without wrapping, within bounds
fn toast_width(notification: &Notification, available: u16) -> u16 {
    let text = notification
        .title
        .width()
        .max(notification.description.width());
    let wanted = u16::try_from(text).unwrap_or(u16::MAX).saturating_add(4);
    wanted.clamp(MIN_WIDTH, MAX_WIDTH).min(available)
}

/// Render visible notifications stacked in the top-right corner of `area`
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut y = area.y;

    for toast in app.toasts.visible() {
        if y + HEIGHT > area.bottom() {
            break;
        }
        let n = &toast.notification;
        let width = toast_width(n, area.width);
        let rect = Rect::new(area.right() - width, y, width, HEIGHT);

        let (border, fg) = match n.variant {
            ToastVariant::Default => (c.success, c.fg),
            ToastVariant::Destructive => (c.error, c.error),
        };

        let block = Block::default()
            .title(Line::styled(
                format!(" {} ", n.title),
                Style::default().fg(border).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(c.bg));

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(n.description.as_str())
                .style(Style::default().fg(fg))
                .wrap(Wrap { trim: true })
                .block(block),
            rect,
        );

        y += HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn notification(description: &str) -> Notification {
        Notification {
            variant: ToastVariant::Default,
            title: "ok".to_string(),
            description: description.to_string(),
            duration: Duration::from_millis(3000),
        }
    }

    #[test]
    fn width_is_bounded() {
        assert_eq!(toast_width(&notification("x"), 100), MIN_WIDTH);
        assert_eq!(toast_width(&notification(&"x".repeat(200)), 100), MAX_WIDTH);
        assert_eq!(toast_width(&notification(&"x".repeat(200)), 30), 30);
    }

    #[test]
    fn wide_glyphs_count_double() {
        // 20 CJK characters occupy 40 columns
        let text = "字".repeat(20);
        assert_eq!(toast_width(&notification(&text), 100), 44);
    }
}
