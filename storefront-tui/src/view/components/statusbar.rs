//! Status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::Styles;

/// Render the status bar
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Key hints for the current state
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints = &t().hints;

    if app.lightbox.is_open() {
        return vec![("Esc", hints.close)];
    }
    match app.modal.active {
        Some(Modal::OpenLocation { .. }) => return vec![("Enter", hints.open), ("Esc", hints.close)],
        Some(Modal::Help) => return vec![("Esc", hints.close)],
        None => {}
    }

    let mut list = Vec::new();
    if app.detail.item().is_some() {
        list.push(("←→", hints.slides));
        list.push(("Space", hints.enlarge));
        list.push(("a", hints.add_to_cart));
    }
    list.push(("o", hints.open));
    list.push(("1-5", hints.links));
    list.push(("?", hints.help));
    list.push(("q", hints.quit));
    list
}
