//! Modal update logic

use crate::message::{Command, DetailMessage, ModalMessage};
use crate::model::{App, Location, Modal};

use super::detail;

/// Handle a modal message
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match app.modal.active {
        Some(Modal::OpenLocation { .. }) => handle_open_location(app, msg),
        Some(Modal::Help) => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Submit) {
                app.modal.close();
            }
            None
        }
        None => None,
    }
}

fn handle_open_location(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
            None
        }
        ModalMessage::Input(ch) => {
            if let Some(input) = app.modal.location_input_mut() {
                input.push(ch);
            }
            None
        }
        ModalMessage::Backspace => {
            if let Some(input) = app.modal.location_input_mut() {
                input.pop();
            }
            None
        }
        ModalMessage::ClearInput => {
            if let Some(input) = app.modal.location_input_mut() {
                input.clear();
            }
            None
        }
        ModalMessage::Submit => {
            let input = app.modal.location_input_mut().map(std::mem::take)?;
            app.modal.close();
            detail::update(app, DetailMessage::Navigate(Location::parse(&input)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_submitting_navigates() {
        let mut app = App::default();
        app.modal.show_open_location("");
        for ch in "?code=ABC123".chars() {
            update(&mut app, ModalMessage::Input(ch));
        }

        let cmd = update(&mut app, ModalMessage::Submit);

        assert!(matches!(cmd, Some(Command::FetchCatalog { .. })));
        assert!(!app.modal.is_open());
        assert_eq!(app.location.tracking_code(), Some("ABC123"));
    }

    #[test]
    fn editing_the_prompt() {
        let mut app = App::default();
        app.modal.show_open_location("?code=AB");
        update(&mut app, ModalMessage::Backspace);
        assert_eq!(app.modal.location_input_mut().unwrap(), "?code=A");

        update(&mut app, ModalMessage::ClearInput);
        assert_eq!(app.modal.location_input_mut().unwrap(), "");
    }

    #[test]
    fn close_discards_input() {
        let mut app = App::default();
        app.modal.show_open_location("?code=ABC123");
        assert!(update(&mut app, ModalMessage::Close).is_none());
        assert!(!app.modal.is_open());
        assert_eq!(app.location.tracking_code(), None);
    }

    #[test]
    fn help_ignores_typing() {
        let mut app = App::default();
        app.modal.show_help();
        update(&mut app, ModalMessage::Input('x'));
        assert!(app.modal.is_open());
        update(&mut app, ModalMessage::Close);
        assert!(!app.modal.is_open());
    }
}
