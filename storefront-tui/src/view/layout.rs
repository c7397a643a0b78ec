//! Screen layout
//!
//! Region functions are pure so the event layer can hit-test mouse clicks
//! against exactly the rectangles the view draws into.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::{current_language, t};
use crate::model::links::HOME_LINK;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// Bodies at least this wide show gallery and details side by side.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 80;

/// Width of the header home link.
const HOME_LINK_WIDTH: u16 = 12;

/// Width of the carousel arrows and the lightbox close control.
const CONTROL_WIDTH: u16 = 5;

/// Top-level screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegions {
    pub header: Rect,
    pub home_link: Rect,
    pub body: Rect,
    pub nav_bar: Rect,
    pub status: Rect,
}

/// Split the terminal into header, body, bottom navigation and status bar.
pub fn screen_regions(area: Rect) -> ScreenRegions {
    let [header, body, nav_bar, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let width = HOME_LINK_WIDTH.min(header.width);
    let home_link = Rect::new(header.right() - width, header.y, width, header.height);

    ScreenRegions {
        header,
        home_link,
        body,
        nav_bar,
        status,
    }
}

/// Cells of the bottom navigation bar, in link order.
///
/// Right-to-left languages lay the links out from the right edge.
pub fn link_cells(nav_bar: Rect, rtl: bool) -> Vec<Rect> {
    let mut cells = Layout::horizontal([Constraint::Ratio(1, 5); 5])
        .split(nav_bar)
        .to_vec();
    if rtl {
        cells.reverse();
    }
    cells
}

/// Regions of the item detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRegions {
    /// Gallery card, including its border
    pub gallery: Rect,
    /// Current slide
    pub image: Rect,
    pub previous: Rect,
    pub next: Rect,
    /// Slide caption between the arrows
    pub caption: Rect,
    /// Details card, including its border
    pub details: Rect,
    pub add_to_cart: Rect,
}

pub fn detail_regions(body: Rect) -> DetailRegions {
    let [gallery, card] = if body.width >= WIDE_LAYOUT_MIN_WIDTH {
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(body)
    } else {
        Layout::vertical([Constraint::Percentage(40), Constraint::Min(8)]).areas(body)
    };

    let inner = gallery.inner(Margin::new(1, 1));
    let [image, controls] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
    let [previous, caption, next] = Layout::horizontal([
        Constraint::Length(CONTROL_WIDTH),
        Constraint::Min(0),
        Constraint::Length(CONTROL_WIDTH),
    ])
    .areas(controls);

    let [details, add_to_cart] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(card);

    DetailRegions {
        gallery,
        image,
        previous,
        next,
        caption,
        details,
        add_to_cart,
    }
}

/// Regions of the lightbox overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxRegions {
    /// Framed enlarged image; everything outside is background
    pub frame: Rect,
    pub image: Rect,
    /// Close control on the top border
    pub close: Rect,
}

pub fn lightbox_regions(area: Rect) -> LightboxRegions {
    let frame = centered_rect(area.width * 4 / 5, area.height * 4 / 5, area);
    let image = frame.inner(Margin::new(1, 1));
    let width = CONTROL_WIDTH.min(frame.width);
    let close = Rect::new(
        frame.right().saturating_sub(width + 1).max(frame.x),
        frame.y,
        width,
        frame.height.min(1),
    );
    LightboxRegions {
        frame,
        image,
        close,
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Whether the cell at (`column`, `row`) lies inside `rect`.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

/// Render the whole screen
pub fn render(app: &App, frame: &mut Frame) {
    let regions = screen_regions(frame.area());

    render_header(app, frame, &regions);
    pages::detail::render(app, frame, regions.body);
    components::nav_link::render_bar(frame, regions.nav_bar);
    components::statusbar::render(app, frame, regions.status);

    // Overlays, bottom to top
    components::toast::render(app, frame, regions.body);
    components::lightbox::render(app, frame);
    components::modal::render(app, frame);
}

fn render_header(app: &App, frame: &mut Frame, regions: &ScreenRegions) {
    let c = colors();
    // Spinner while a fetch for the current location is outstanding
    let busy = if app.detail.is_loading() && app.detail.requested_code.is_some() {
        " ⏳"
    } else {
        ""
    };
    let title = Paragraph::new(format!(" {}{busy}", t().header.store_name))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, regions.header);

    let home = Line::from(vec![Span::raw(" "), components::nav_link::label(&HOME_LINK)]);
    let alignment = if current_language().is_rtl() {
        Alignment::Left
    } else {
        Alignment::Right
    };
    frame.render_widget(Paragraph::new(home).alignment(alignment), regions.home_link);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_regions_stack_vertically() {
        let regions = screen_regions(Rect::new(0, 0, 100, 30));
        assert_eq!(regions.header.height, 1);
        assert_eq!(regions.nav_bar.height, 3);
        assert_eq!(regions.status.y, 29);
        assert_eq!(regions.body.height, 25);
        assert_eq!(regions.home_link.right(), 100);
    }

    #[test]
    fn link_cells_cover_nav_bar() {
        let nav_bar = Rect::new(0, 26, 100, 3);
        let cells = link_cells(nav_bar, false);
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0].x, 0);
        assert!(cells[0].x < cells[4].x);

        let rtl = link_cells(nav_bar, true);
        assert_eq!(rtl[0], cells[4]);
    }

    #[test]
    fn wide_detail_is_side_by_side() {
        let regions = detail_regions(Rect::new(0, 1, 100, 25));
        assert_eq!(regions.gallery.y, regions.details.y);
        assert!(regions.gallery.x < regions.details.x);
        assert!(hit(regions.gallery, regions.image.x, regions.image.y));
    }

    #[test]
    fn narrow_detail_is_stacked() {
        let regions = detail_regions(Rect::new(0, 1, 60, 30));
        assert!(regions.gallery.y < regions.details.y);
        assert_eq!(regions.add_to_cart.height, 3);
    }

    #[test]
    fn lightbox_close_is_inside_frame() {
        let regions = lightbox_regions(Rect::new(0, 0, 100, 30));
        assert!(hit(regions.frame, regions.close.x, regions.close.y));
        assert!(!hit(regions.image, regions.close.x, regions.close.y));
        assert!(!hit(regions.frame, 0, 0));
    }
}
