//! Main loop

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Input poll timeout; also the notification expiry granularity.
const TICK: Duration = Duration::from_millis(100);

/// Run until the user quits.
///
/// Each iteration draws, drains finished backend work, then waits up to one
/// tick for input.
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    results: &mut UnboundedReceiver<AppMessage>,
    initial: AppMessage,
) -> Result<()> {
    apply(app, backend, initial);

    loop {
        let completed = terminal.draw(|frame| view::render(app, frame))?;
        app.viewport = completed.area;

        if app.should_quit {
            break;
        }

        while let Ok(msg) = results.try_recv() {
            apply(app, backend, msg);
        }

        let msg = match event::poll_event(TICK)? {
            Some(event) => event::handle_event(event, app),
            None => AppMessage::Tick,
        };
        apply(app, backend, msg);
    }

    Ok(())
}

/// Update the model and start whatever command the update asked for.
fn apply(app: &mut App, backend: &Backend, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        log::debug!("dispatching {command:?}");
        backend.dispatch(command);
    }
}
