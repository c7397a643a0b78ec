//! Update layer: state transitions
//!
//! `update` is the only place that mutates the model. It never performs I/O;
//! work that needs the network is returned as a [`Command`] and its result
//! comes back later as another message.
//!
//! ```text
//! update(app, msg)
//!   ├─ Detail(..)    detail::update     navigation, catalog results, cart, carousel
//!   ├─ Lightbox(..)  lightbox::update   overlay dismissal rules
//!   ├─ Modal(..)     modal::update      help / location prompt
//!   └─ the rest      handled inline
//! ```

mod detail;
mod lightbox;
mod modal;

use std::time::Instant;

use url::Url;

use crate::i18n::t;
use crate::message::{AppMessage, Command, DetailMessage};
use crate::model::{App, Location, NavLink};

/// Handle an application message.
///
/// Expired notifications are dropped on every message, so continuous input
/// cannot keep a toast on screen past its duration.
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    app.toasts.expire(Instant::now());

    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::Detail(detail_msg) => detail::update(app, detail_msg),

        AppMessage::Lightbox(lightbox_msg) => {
            lightbox::update(app, lightbox_msg);
            None
        }

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::ActivateLink(link) => activate_link(app, link),

        AppMessage::OpenLocationPrompt => {
            let current = app.location.raw.clone();
            app.modal.show_open_location(&current);
            None
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Resize(width, height) => {
            app.viewport.width = width;
            app.viewport.height = height;
            None
        }

        // Redraw only; expiry already ran above.
        AppMessage::Tick => None,

        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }

        AppMessage::Noop => None,
    }
}

/// Follow a navigation link.
///
/// The destination is always reported in the status bar. Relative
/// destinations and storefront addresses naming an item are opened in-app;
/// everything else belongs to the browser.
fn activate_link(app: &mut App, link: NavLink) -> Option<Command> {
    let location = Location::parse(link.destination);
    let in_app = location.tracking_code().is_some() || Url::parse(link.destination).is_err();
    log::debug!("link activated: {} (in-app: {in_app})", link.destination);

    let status = &t().status;
    if in_app {
        let cmd = detail::update(app, DetailMessage::Navigate(location));
        app.set_status(format!("{} {}", status.navigated, link.destination));
        cmd
    } else {
        app.set_status(format!("{} {}", status.external_link, link.destination));
        None
    }
}
