//! Side effects requested by the update layer
//!
//! `update` never touches the network; it returns a [`Command`] and the main
//! loop hands it to the backend, which answers later with a message.

use storefront_client::CartRequest;

/// Side effect to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the catalog for the current location
    FetchCatalog { generation: u64 },
    /// Call the cart endpoint
    AddToCart(CartRequest),
}
