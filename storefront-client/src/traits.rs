use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CartOutcome, CartRequest, ItemRecord};

/// Source of catalog snapshots
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch a fresh snapshot, bypassing every cache.
    async fn fetch_catalog(&self) -> Result<Vec<ItemRecord>>;
}

/// Remote cart
#[async_trait]
pub trait CartService: Send + Sync {
    /// Ask the cart endpoint to add an item.
    ///
    /// A response that arrives but does not report success is an
    /// `Ok(CartOutcome::Duplicate | CartOutcome::Failed)`, not an error.
    async fn add_to_cart(&self, request: &CartRequest) -> Result<CartOutcome>;
}
