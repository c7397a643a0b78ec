use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::event::keymap::DefaultKeymap;
use crate::i18n::current_language;
use crate::message::{AppMessage, DetailMessage, LightboxMessage, ModalMessage};
use crate::model::links::{BOTTOM_LINKS, HOME_LINK};
use crate::model::{App, Modal};
use crate::view::layout::{detail_regions, hit, lightbox_regions, link_cells, screen_regions};

/// Wait up to `timeout` for an input event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an input event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Windows terminals also report Release and Repeat.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if app.lightbox.is_open() {
        return handle_lightbox_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_ALT.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::OPEN_LOCATION.matches(&key) {
        return AppMessage::OpenLocationPrompt;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }
    if DefaultKeymap::HOME.matches(&key) {
        return AppMessage::ActivateLink(HOME_LINK);
    }

    // 1-5: bottom links
    if key.modifiers.is_empty() {
        if let KeyCode::Char(ch @ '1'..='5') = key.code {
            let index = ch as usize - '1' as usize;
            return AppMessage::ActivateLink(BOTTOM_LINKS[index]);
        }
    }

    handle_detail_keys(key)
}

fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ADD_TO_CART.matches(&key) || DefaultKeymap::ADD_TO_CART_ALT.matches(&key) {
        return AppMessage::Detail(DetailMessage::AddToCart);
    }
    if DefaultKeymap::PREVIOUS_SLIDE.matches(&key) || key.code == KeyCode::Char('h') {
        return AppMessage::Detail(DetailMessage::PreviousSlide);
    }
    if DefaultKeymap::NEXT_SLIDE.matches(&key) || key.code == KeyCode::Char('l') {
        return AppMessage::Detail(DetailMessage::NextSlide);
    }
    if DefaultKeymap::ENLARGE.matches(&key) || DefaultKeymap::ENLARGE_ALT.matches(&key) {
        return AppMessage::Detail(DetailMessage::OpenLightbox);
    }
    AppMessage::Noop
}

fn handle_lightbox_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q') => {
            AppMessage::Lightbox(LightboxMessage::Dismiss)
        }
        _ => AppMessage::Noop,
    }
}

fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match app.modal.active {
        Some(Modal::Help) => match key.code {
            KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                AppMessage::Modal(ModalMessage::Close)
            }
            _ => AppMessage::Noop,
        },
        Some(Modal::OpenLocation { .. }) => handle_location_prompt_keys(key),
        None => AppMessage::Noop,
    }
}

fn handle_location_prompt_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Modal(ModalMessage::ClearInput);
    }
    match key.code {
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Submit),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Modal(ModalMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return AppMessage::Noop;
    };
    let (column, row) = (mouse.column, mouse.row);

    if app.lightbox.is_open() {
        let regions = lightbox_regions(app.viewport);
        let msg = if hit(regions.close, column, row) {
            LightboxMessage::CloseClicked
        } else if hit(regions.frame, column, row) {
            LightboxMessage::ImageClicked
        } else {
            LightboxMessage::BackgroundClicked
        };
        return AppMessage::Lightbox(msg);
    }

    if app.modal.is_open() {
        return AppMessage::Noop;
    }

    let screen = screen_regions(app.viewport);

    if hit(screen.home_link, column, row) {
        return AppMessage::ActivateLink(HOME_LINK);
    }

    let cells = link_cells(screen.nav_bar, current_language().is_rtl());
    if let Some(index) = cells.iter().position(|cell| hit(*cell, column, row)) {
        return AppMessage::ActivateLink(BOTTOM_LINKS[index]);
    }

    if app.detail.item().is_some() {
        let detail = detail_regions(screen.body);
        let msg = if hit(detail.add_to_cart, column, row) {
            Some(DetailMessage::AddToCart)
        } else if hit(detail.previous, column, row) {
            Some(DetailMessage::PreviousSlide)
        } else if hit(detail.next, column, row) {
            Some(DetailMessage::NextSlide)
        } else if hit(detail.image, column, row) {
            Some(DetailMessage::OpenLightbox)
        } else {
            None
        };
        if let Some(msg) = msg {
            return AppMessage::Detail(msg);
        }
    }

    AppMessage::Noop
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;
    use storefront_client::ItemRecord;

    use crate::model::state::toast::{Notification, Notifier, ToastVariant};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app_with_item() -> App {
        let mut app = App::default();
        app.viewport = Rect::new(0, 0, 100, 30);
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
            media: vec!["a.jpg".to_string(), "b.jpg".to_string()],
        };
        let endpoints = app.endpoints.clone();
        app.detail.apply_catalog(generation, &[record], &endpoints);
        app
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::default();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        assert!(matches!(
            handle_event(Event::Key(release), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn detail_keys() {
        let app = app_with_item();
        assert!(matches!(
            handle_event(key(KeyCode::Char('a')), &app),
            AppMessage::Detail(DetailMessage::AddToCart)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Right), &app),
            AppMessage::Detail(DetailMessage::NextSlide)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char(' ')), &app),
            AppMessage::Detail(DetailMessage::OpenLightbox)
        ));
    }

    #[test]
    fn digit_keys_activate_links() {
        let app = App::default();
        match handle_event(key(KeyCode::Char('3')), &app) {
            AppMessage::ActivateLink(link) => assert_eq!(link, BOTTOM_LINKS[2]),
            other => panic!("unexpected message: {other:?}"),
        }
        match handle_event(key(KeyCode::Char('0')), &app) {
            AppMessage::ActivateLink(link) => assert_eq!(link, HOME_LINK),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn prompt_captures_typing() {
        let mut app = App::default();
        app.modal.show_open_location("");
        assert!(matches!(
            handle_event(key(KeyCode::Char('q')), &app),
            AppMessage::Modal(ModalMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Submit)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn lightbox_clicks() {
        let mut app = app_with_item();
        app.lightbox.open("https://arianstore.org/image/a.jpg");
        let regions = lightbox_regions(app.viewport);

        assert!(matches!(
            handle_event(click(0, 0), &app),
            AppMessage::Lightbox(LightboxMessage::BackgroundClicked)
        ));
        assert!(matches!(
            handle_event(click(regions.close.x, regions.close.y), &app),
            AppMessage::Lightbox(LightboxMessage::CloseClicked)
        ));
        assert!(matches!(
            handle_event(click(regions.image.x + 2, regions.image.y + 2), &app),
            AppMessage::Lightbox(LightboxMessage::ImageClicked)
        ));
    }

    #[test]
    fn escape_dismisses_lightbox() {
        let mut app = app_with_item();
        app.lightbox.open("https://arianstore.org/image/a.jpg");
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Lightbox(LightboxMessage::Dismiss)
        ));
    }

    #[test]
    fn detail_clicks() {
        let app = app_with_item();
        let screen = screen_regions(app.viewport);
        let detail = detail_regions(screen.body);

        assert!(matches!(
            handle_event(click(detail.add_to_cart.x + 1, detail.add_to_cart.y + 1), &app),
            AppMessage::Detail(DetailMessage::AddToCart)
        ));
        assert!(matches!(
            handle_event(click(detail.next.x, detail.next.y), &app),
            AppMessage::Detail(DetailMessage::NextSlide)
        ));
        assert!(matches!(
            handle_event(click(detail.image.x + 1, detail.image.y + 1), &app),
            AppMessage::Detail(DetailMessage::OpenLightbox)
        ));
    }

    #[test]
    fn nav_bar_and_home_clicks() {
        let app = App {
            viewport: Rect::new(0, 0, 100, 30),
            ..App::default()
        };
        let screen = screen_regions(app.viewport);

        match handle_event(click(screen.nav_bar.x + 1, screen.nav_bar.y + 1), &app) {
            AppMessage::ActivateLink(link) => assert_eq!(link, BOTTOM_LINKS[0]),
            other => panic!("unexpected message: {other:?}"),
        }
        match handle_event(click(screen.home_link.x + 1, screen.home_link.y), &app) {
            AppMessage::ActivateLink(link) => assert_eq!(link, HOME_LINK),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn expired_toast_is_dropped_under_mouse_motion() {
        let mut app = App {
            viewport: Rect::new(0, 0, 100, 30),
            ..App::default()
        };
        app.toasts.notify(Notification {
            variant: ToastVariant::Default,
            title: "ok".to_string(),
            description: String::new(),
            duration: Duration::from_millis(1),
        });
        std::thread::sleep(Duration::from_millis(20));

        for column in 0..50 {
            let moved = Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column,
                row: 10,
                modifiers: KeyModifiers::NONE,
            });
            let msg = handle_event(moved, &app);
            assert!(!matches!(msg, AppMessage::Tick));
            crate::update::update(&mut app, msg);
        }

        assert!(app.toasts.is_empty());
    }

    #[test]
    fn clicks_on_loading_page_body_do_nothing() {
        let app = App {
            viewport: Rect::new(0, 0, 100, 30),
            ..App::default()
        };
        assert!(matches!(handle_event(click(10, 10), &app), AppMessage::Noop));
    }
}
