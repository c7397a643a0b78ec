//! Detail view update logic

use std::time::Duration;

use storefront_client::{CartOutcome, CartRequest, ClientError, ItemRecord};

use crate::i18n::t;
use crate::message::{Command, DetailMessage};
use crate::model::{App, Location, Notification, Notifier, ToastVariant};

/// Handle a detail view message
pub fn update(app: &mut App, msg: DetailMessage) -> Option<Command> {
    match msg {
        // ========== Navigation ==========
        DetailMessage::Navigate(location) => handle_navigate(app, location),
        DetailMessage::CatalogLoaded { generation, result } => {
            handle_catalog_loaded(app, generation, result);
            None
        }

        // ========== Cart ==========
        DetailMessage::AddToCart => handle_add_to_cart(app),
        DetailMessage::CartCompleted(result) => {
            handle_cart_completed(app, result);
            None
        }

        // ========== Carousel ==========
        DetailMessage::PreviousSlide => {
            app.detail.previous_slide();
            None
        }
        DetailMessage::NextSlide => {
            app.detail.next_slide();
            None
        }
        DetailMessage::OpenLightbox => {
            if let Some(url) = app.detail.current_media() {
                let url = url.to_string();
                app.lightbox.open(url);
            }
            None
        }
    }
}

fn handle_navigate(app: &mut App, location: Location) -> Option<Command> {
    let generation = app.detail.begin_navigation(location.tracking_code());
    log::info!("navigating to {:?}", location.raw);

    app.location = location;
    app.lightbox.close();
    app.clear_status();

    generation.map(|generation| Command::FetchCatalog { generation })
}

fn handle_catalog_loaded(
    app: &mut App,
    generation: u64,
    result: Result<Vec<ItemRecord>, ClientError>,
) {
    match result {
        Ok(records) => {
            if app
                .detail
                .apply_catalog(generation, &records, &app.endpoints)
            {
                log::debug!(
                    "catalog applied: {} records, generation {generation}",
                    records.len()
                );
            } else {
                log::debug!("dropping stale catalog for generation {generation}");
            }
        }
        // The view keeps showing the loading indicator.
        Err(e) if e.is_expected() => log::warn!("catalog fetch failed: {e}"),
        Err(e) => log::error!("catalog fetch failed: {e}"),
    }
}

fn handle_add_to_cart(app: &mut App) -> Option<Command> {
    let request = CartRequest::for_item(&app.detail.item()?.record);
    log::info!("adding {} to cart", request.tracking_code);
    app.set_status(t().status.adding_to_cart);
    Some(Command::AddToCart(request))
}

fn handle_cart_completed(app: &mut App, result: Result<CartOutcome, ClientError>) {
    app.clear_status();
    let outcome = result.unwrap_or_else(|e| {
        log::warn!("cart request failed: {e}");
        CartOutcome::Failed
    });
    notify_cart_outcome(&mut app.toasts, outcome, app.toast_duration);
}

/// Show the notification for a cart outcome.
pub fn notify_cart_outcome(notifier: &mut dyn Notifier, outcome: CartOutcome, duration: Duration) {
    let texts = &t().toast;
    let (variant, title, description) = match outcome {
        CartOutcome::Added => (ToastVariant::Default, texts.success_title, texts.added),
        CartOutcome::Duplicate => (ToastVariant::Destructive, texts.error_title, texts.duplicate),
        CartOutcome::Failed => (ToastVariant::Destructive, texts.error_title, texts.failed),
    };
    notifier.notify(Notification {
        variant,
        title: title.to_string(),
        description: description.to_string(),
        duration,
    });
}
