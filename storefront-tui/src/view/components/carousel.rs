//! Image carousel

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::DisplayedItem;
use crate::view::components::lightbox::image_placeholder;
use crate::view::layout::DetailRegions;
use crate::view::theme::{colors, Styles};

/// Render the gallery card with the current slide
pub fn render(item: &DisplayedItem, slide: usize, frame: &mut Frame, regions: &DetailRegions) {
    let c = colors();
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border()),
        regions.gallery,
    );

    let Some(url) = item.media_urls.get(slide) else {
        frame.render_widget(
            Paragraph::new(t().detail.no_image)
                .style(Styles::muted())
                .alignment(Alignment::Center),
            regions.image,
        );
        return;
    };

    frame.render_widget(
        Paragraph::new(image_placeholder(url, regions.image)).alignment(Alignment::Center),
        regions.image,
    );

    let count = item.media_urls.len();
    let arrow = |enabled: bool, glyph: &'static str| {
        let style = if enabled {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Styles::muted()
        };
        Paragraph::new(Span::styled(glyph, style)).alignment(Alignment::Center)
    };

    frame.render_widget(arrow(slide > 0, "◀"), regions.previous);
    frame.render_widget(arrow(slide + 1 < count, "▶"), regions.next);
    frame.render_widget(
        Paragraph::new(slide_caption(slide, count)).alignment(Alignment::Center),
        regions.caption,
    );
}

/// "Image 2/3"
pub fn slide_caption(slide: usize, count: usize) -> String {
    format!("{} {}/{}", t().detail.image, slide + 1, count)
}
