//! Backend layer: side effects
//!
//! Runs the [`Command`]s returned by `update` as tokio tasks and reports the
//! results back to the main loop as messages over an unbounded channel.

mod config_service;

pub use config_service::{ConfigService, LocalConfigService};

use std::sync::Arc;

use storefront_client::{CartService, CatalogSource};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::message::{AppMessage, Command, DetailMessage};

/// Command executor
pub struct Backend {
    handle: Handle,
    catalog: Arc<dyn CatalogSource>,
    cart: Arc<dyn CartService>,
    tx: UnboundedSender<AppMessage>,
}

impl Backend {
    /// Create a backend running on `handle`, together with the receiving end
    /// of its result channel.
    pub fn new(
        handle: Handle,
        catalog: Arc<dyn CatalogSource>,
        cart: Arc<dyn CartService>,
    ) -> (Self, UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                handle,
                catalog,
                cart,
                tx,
            },
            rx,
        )
    }

    /// Start a command; its result arrives later on the channel.
    pub fn dispatch(&self, command: Command) {
        let tx = self.tx.clone();
        match command {
            Command::FetchCatalog { generation } => {
                let catalog = Arc::clone(&self.catalog);
                self.handle.spawn(async move {
                    let result = catalog.fetch_catalog().await;
                    send(&tx, DetailMessage::CatalogLoaded { generation, result });
                });
            }
            Command::AddToCart(request) => {
                let cart = Arc::clone(&self.cart);
                self.handle.spawn(async move {
                    let result = cart.add_to_cart(&request).await;
                    send(&tx, DetailMessage::CartCompleted(result));
                });
            }
        }
    }
}

fn send(tx: &UnboundedSender<AppMessage>, msg: DetailMessage) {
    // The receiver is gone only while the app shuts down.
    if tx.send(AppMessage::Detail(msg)).is_err() {
        log::debug!("main loop gone, dropping backend result");
    }
}
