//! Lightbox update logic

use crate::message::LightboxMessage;
use crate::model::App;

/// Handle a lightbox message
pub fn update(app: &mut App, msg: LightboxMessage) {
    if !app.lightbox.is_open() {
        return;
    }

    match msg {
        LightboxMessage::BackgroundClicked
        | LightboxMessage::CloseClicked
        | LightboxMessage::Dismiss => app.lightbox.close(),
        // Clicks on the image itself must not reach the background.
        LightboxMessage::ImageClicked => {}
    }
}
