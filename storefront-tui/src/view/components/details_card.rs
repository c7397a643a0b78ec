//! Item details card

use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    widgets::{Block, Borders},
    Frame,
};
use storefront_client::ItemRecord;

use crate::i18n::{current_language, t};
use crate::model::links::{BROKER_CONTACT, SITE_ADMIN_CONTACT};
use crate::view::components::attribute_row::{self, ATTRIBUTE_HEIGHT};
use crate::view::theme::Styles;

/// One label/value row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: String,
    /// Drawn with the accent style (the price)
    pub highlight: bool,
    /// Contact handles render as links
    pub is_contact: bool,
}

/// Rows in display order: the record's attributes, then the fixed contacts.
pub fn rows(record: &ItemRecord) -> Vec<SpecRow> {
    let labels = &t().detail.rows;
    let row = |label, value: &str, highlight, is_contact| SpecRow {
        label,
        value: value.to_string(),
        highlight,
        is_contact,
    };

    vec![
        row(labels.tracking_code, &record.tracking_code, false, false),
        row(labels.region, &record.region, false, false),
        row(labels.link_type, &record.link_type, false, false),
        row(labels.cp_count, &record.cp_count, false, false),
        row(labels.battle_pass, &record.battle_pass, false, false),
        row(labels.sell_desc, &record.sell_desc, false, false),
        row(labels.lease, &record.lease, false, false),
        row(labels.sell_price, &record.sell_price, true, false),
        row(labels.broker, BROKER_CONTACT, false, true),
        row(labels.site_admin, SITE_ADMIN_CONTACT, false, true),
    ]
}

/// Render the details card as a two-column grid of attribute blocks
pub fn render(record: &ItemRecord, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", t().detail.details_title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border());
    frame.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));
    let mut columns = Layout::horizontal([Constraint::Percentage(50); 2])
        .spacing(1)
        .split(inner)
        .to_vec();
    if current_language().is_rtl() {
        columns.reverse();
    }

    let rows = rows(record);
    let per_column = rows.len().div_ceil(2);
    for (index, row) in rows.iter().enumerate() {
        let column = columns[index / per_column];
        let offset = u16::try_from(index % per_column).unwrap_or(u16::MAX);
        let y = column.y.saturating_add(offset.saturating_mul(ATTRIBUTE_HEIGHT));
        if y >= column.bottom() {
            continue;
        }
        let height = ATTRIBUTE_HEIGHT.min(column.bottom() - y);
        let cell = Rect::new(column.x, y, column.width, height);
        attribute_row::render(frame, cell, row.label, &row.value, row.highlight, row.is_contact);
    }
}
