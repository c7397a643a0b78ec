//! Item detail page

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, DetailStatus};
use crate::view::components::{carousel, details_card};
use crate::view::layout::detail_regions;
use crate::view::theme::{colors, Styles};

/// Render the detail page for the current status
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    match &app.detail.status {
        DetailStatus::Loading => {
            let mut lines = vec![Line::from("⏳"), Line::from(""), Line::from(t().common.loading)];
            if app.detail.requested_code.is_none() {
                lines.push(Line::from(""));
                lines.push(Line::styled(t().detail.no_location, Styles::muted()));
            }
            render_centered(frame, area, lines);
        }
        DetailStatus::NotFound { code } => {
            let lines = vec![
                Line::styled("∅", Style::default().fg(colors().error)),
                Line::from(""),
                Line::from(format!("{} {code}", t().detail.not_found)),
            ];
            render_centered(frame, area, lines);
        }
        DetailStatus::Found(item) => {
            let regions = detail_regions(area);
            carousel::render(item, app.detail.slide, frame, &regions);
            details_card::render(&item.record, frame, regions.details);

            let button = Paragraph::new(Line::from(format!("◈ {}", t().detail.add_to_cart)))
                .alignment(Alignment::Center)
                .style(Styles::accent_button())
                .block(Block::default().borders(Borders::ALL).border_style(Styles::accent_button()));
            frame.render_widget(button, regions.add_to_cart);
        }
    }
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16;
    let top = area.height.saturating_sub(height) / 2;
    let rect = Rect::new(area.x, area.y + top, area.width, height.min(area.height));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use storefront_client::ItemRecord;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| render(app, frame, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn loading_page() {
        let app = App::default();
        assert!(screen_text(&app).contains(t().common.loading));
    }

    #[test]
    fn not_found_page_names_code() {
        let mut app = App::default();
        let generation = app.detail.begin_navigation(Some("NOPE")).unwrap();
        let endpoints = app.endpoints.clone();
        app.detail.apply_catalog(generation, &[], &endpoints);

        assert!(screen_text(&app).contains("NOPE"));
    }

    #[test]
    fn found_page_shows_attributes() {
        let mut app = App::default();
        let generation = app.detail.begin_navigation(Some("ABC123")).unwrap();
        let record = ItemRecord {
            tracking_code: "ABC123".to_string(),
            region: "EU".to_string(),
            link_type: "Google".to_string(),
            cp_count: "120".to_string(),
            battle_pass: "Active".to_string(),
            sell_desc: "Clean".to_string(),
            lease: "Yes".to_string(),
            sell_price: "500000".to_string(),
            media: vec!["a.jpg".to_string()],
        };
        let endpoints = app.endpoints.clone();
        app.detail.apply_catalog(generation, &[record], &endpoints);

        let text = screen_text(&app);
        assert!(text.contains("ABC123"));
        assert!(text.contains("500000"));
        assert!(text.contains("@Adm_Site"));
    }
}
