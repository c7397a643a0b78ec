//! Enlarged image overlay

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::layout::{lightbox_regions, LightboxRegions};
use crate::view::theme::{colors, Styles};

/// Render the lightbox when it is open
pub fn render(app: &App, frame: &mut Frame) {
    if !app.lightbox.is_open() {
        return;
    }
    let c = colors();
    let area = frame.area();
    let LightboxRegions {
        frame: image_frame,
        image,
        close,
    } = lightbox_regions(area);

    // Dimmed background
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(c.overlay)), area);

    frame.render_widget(Clear, image_frame);
    frame.render_widget(
        Block::default()
            .title(format!(" {} ", t().lightbox.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.highlight))
            .style(Style::default().bg(c.bg)),
        image_frame,
    );

    frame.render_widget(
        Paragraph::new(image_placeholder(&app.lightbox.image, image))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        image,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            " ✕ ",
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        close,
    );
}

/// Picture frame with the image address, vertically centered
pub fn image_placeholder(url: &str, area: Rect) -> Vec<Line<'static>> {
    let art = ["┌──────────┐", "│  ▲   ☼   │", "│ ▲▲▲  ▲   │", "└──────────┘"];
    let content_height = art.len() as u16 + 2;
    let padding = area.height.saturating_sub(content_height) / 2;

    let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
    lines.extend(art.iter().map(|row| Line::from(*row)));
    lines.push(Line::from(""));
    lines.push(Line::styled(url.to_string(), Styles::muted()));
    lines
}
