//! # storefront-client
//!
//! Catalog and cart client for the storefront item detail view.
//!
//! The storefront is a static host with two collaborators:
//!
//! | Resource | Request | Answer |
//! |----------|---------|--------|
//! | Catalog snapshot | `GET <catalog_url>?cb=<unix millis>` with no-cache headers | JSON array of [`ItemRecord`] |
//! | Cart endpoint | `GET <cart_url>?code=<code>&price=<price>` | JSON object with `success` / `error` |
//!
//! Media filenames in a record are resolved against a fixed media base with
//! [`Endpoints::media_url`].
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* : Use the platform's native TLS implementation.
//! - **`rustls`** : Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use storefront_client::{
//!     CartRequest, CartService, CatalogSource, Endpoints, StorefrontClient, find_item,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StorefrontClient::new(Endpoints::default(), None)?;
//!
//!     let catalog = client.fetch_catalog().await?;
//!     if let Some(item) = find_item(&catalog, "ABC123") {
//!         println!("{} costs {}", item.tracking_code, item.sell_price);
//!         let outcome = client.add_to_cart(&CartRequest::for_item(item)).await?;
//!         println!("cart: {outcome:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError). Nothing is
//! retried. A cart response that arrives is always classified into a
//! [`CartOutcome`]; only transport failures surface as errors.

mod client;
mod endpoints;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::StorefrontClient;
pub use endpoints::{DEFAULT_CART_URL, DEFAULT_CATALOG_URL, DEFAULT_MEDIA_BASE, Endpoints};
pub use error::{ClientError, Endpoint, Result};
pub use traits::{CartService, CatalogSource};
pub use types::{CartOutcome, CartRequest, CartResponse, DUPLICATE_ERROR, ItemRecord, find_item};
