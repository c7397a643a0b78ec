//! Modal dialogs

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::layout::centered_rect;
use crate::view::theme::Styles;

/// Render the active modal, if any
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::OpenLocation { input } => render_open_location(frame, input),
    }
}

fn render_open_location(frame: &mut Frame, input: &str) {
    let texts = &t().modal;
    let area = centered_rect(60, 7, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", texts.open_location_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let lines = vec![
        Line::styled(texts.open_location_hint, Styles::muted()),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(input.to_string(), Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let area = centered_rect(48, 16, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", texts.modal.help_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let hints = &texts.hints;
    let bindings = [
        ("← / →", hints.slides),
        ("Space / v", hints.enlarge),
        ("a / Enter", hints.add_to_cart),
        ("o", hints.open),
        ("1-5", hints.links),
        ("0", texts.nav.home),
        ("? / Alt+h", hints.help),
        ("Esc", hints.close),
        ("q / Ctrl+C", hints.quit),
    ];

    let mut lines: Vec<Line> = bindings
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {key:<12}"), Styles::hint_key()),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(
        Line::styled(
            texts.modal.help_close,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
