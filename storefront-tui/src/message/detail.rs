//! Detail view messages

use storefront_client::{CartOutcome, ClientError, ItemRecord};

use crate::model::Location;

/// Detail view message
#[derive(Debug, Clone)]
pub enum DetailMessage {
    // ========== Navigation ==========
    /// Switch to a new location (resets the view, fetches if it names an item)
    Navigate(Location),
    /// Catalog fetch finished
    CatalogLoaded {
        /// Generation the fetch was issued for
        generation: u64,
        result: Result<Vec<ItemRecord>, ClientError>,
    },

    // ========== Cart ==========
    /// User asked to add the displayed item to the cart
    AddToCart,
    /// Cart call finished
    CartCompleted(Result<CartOutcome, ClientError>),

    // ========== Carousel ==========
    PreviousSlide,
    NextSlide,
    /// Enlarge the current slide
    OpenLightbox,
}
