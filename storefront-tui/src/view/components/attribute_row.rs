//! Labeled attribute block

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::view::theme::{colors, Styles};

/// Rows an attribute block occupies.
pub const ATTRIBUTE_HEIGHT: u16 = 3;

/// Label line in bold, value line below.
pub fn lines(label: &str, value: &str, highlight: bool, link: bool) -> Vec<Line<'static>> {
    let c = colors();
    let value_style = if highlight {
        Style::default().fg(c.accent).add_modifier(Modifier::BOLD)
    } else if link {
        Styles::link()
    } else {
        Style::default().fg(c.fg)
    };
    vec![
        Line::styled(
            label.to_string(),
            Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
        ),
        Line::styled(value.to_string(), value_style),
    ]
}

/// Render one attribute; highlighted rows get an accent bar on the leading edge.
pub fn render(frame: &mut Frame, area: Rect, label: &str, value: &str, highlight: bool, link: bool) {
    let mut block = Block::default().borders(Borders::LEFT);
    block = if highlight {
        block.border_style(Style::default().fg(colors().accent))
    } else {
        block.border_style(Styles::border())
    };
    frame.render_widget(
        Paragraph::new(lines(label, value, highlight, link)).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_then_value() {
        let lines = lines("Region", "EU", false, false);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content, "Region");
        assert!(lines[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(lines[1].spans[0].content, "EU");
    }

    #[test]
    fn highlight_uses_accent() {
        let plain = lines("Price", "500000", false, false);
        let highlighted = lines("Price", "500000", true, false);
        assert_ne!(plain[1].style, highlighted[1].style);
        assert_eq!(highlighted[1].style.fg, Some(colors().accent));
    }
}
