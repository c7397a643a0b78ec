//! Navigation links

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::{current_language, t};
use crate::model::links::BOTTOM_LINKS;
use crate::model::{LinkLabel, LinkStyle, NavLink};
use crate::view::layout::link_cells;
use crate::view::theme::Styles;

/// Translated text of a link label
pub fn label_text(label: LinkLabel) -> &'static str {
    let nav = &t().nav;
    match label {
        LinkLabel::Support => nav.support,
        LinkLabel::PostAd => nav.post_ad,
        LinkLabel::Home => nav.home,
        LinkLabel::Products => nav.products,
    }
}

fn style_for(link: &NavLink) -> ratatui::style::Style {
    match link.style {
        Some(LinkStyle::Emphasis) => Styles::accent_button(),
        None => Styles::link(),
    }
}

/// Icon followed by the label, if the link has one
pub fn label(link: &NavLink) -> Span<'static> {
    let text = match link.label {
        Some(label) => format!(" {} {} ", link.icon, label_text(label)),
        None => format!(" {} ", link.icon),
    };
    Span::styled(text, style_for(link))
}

/// Render the bottom navigation bar
pub fn render_bar(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Styles::border()),
        area,
    );

    let cells = link_cells(area, current_language().is_rtl());
    for (link, cell) in BOTTOM_LINKS.iter().zip(cells) {
        let content_row = Rect::new(cell.x, cell.y + 1, cell.width, cell.height.saturating_sub(1));
        if link.style == Some(LinkStyle::Emphasis) {
            // Raised button: fill the whole cell below the border.
            frame.render_widget(Block::default().style(style_for(link)), content_row);
        }
        let paragraph = Paragraph::new(Line::from(label(link))).alignment(Alignment::Center);
        frame.render_widget(paragraph, content_row);
    }
}
