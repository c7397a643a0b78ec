//! Remote resource locations
//!
//! The storefront is a static host: a catalog JSON file, a cart script and a
//! directory of media files. Query strings are assembled here so the HTTP
//! client and the tests agree on the exact wire format.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Endpoint, Result};
use crate::types::CartRequest;

/// Default catalog snapshot location.
pub const DEFAULT_CATALOG_URL: &str = "https://arianstore.org/acc.json";
/// Default add-to-cart script location.
pub const DEFAULT_CART_URL: &str = "https://arianstore.org/addCart.php";
/// Default base that media filenames are resolved against.
pub const DEFAULT_MEDIA_BASE: &str = "https://arianstore.org/image/";

/// Locations of the catalog, cart and media resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub catalog_url: String,
    pub cart_url: String,
    pub media_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            cart_url: DEFAULT_CART_URL.to_string(),
            media_base: DEFAULT_MEDIA_BASE.to_string(),
        }
    }
}

/// Append `query` to `base`, respecting an existing query string.
fn with_query(base: &str, query: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}

impl Endpoints {
    /// Check that the catalog and cart URLs are absolute HTTP(S) URLs.
    pub fn validate(&self) -> Result<()> {
        for (endpoint, url) in [
            (Endpoint::Catalog, &self.catalog_url),
            (Endpoint::Cart, &self.cart_url),
        ] {
            reqwest::Url::parse(url)
                .ok()
                .filter(|u| matches!(u.scheme(), "http" | "https"))
                .ok_or_else(|| ClientError::InvalidUrl {
                    endpoint,
                    url: url.clone(),
                })?;
        }
        Ok(())
    }

    /// Catalog URL with the `cb` cache-busting parameter.
    pub fn catalog_request_url(&self, cache_buster: i64) -> String {
        with_query(&self.catalog_url, &format!("cb={cache_buster}"))
    }

    /// Cart URL carrying the tracking code and price, percent-encoded.
    pub fn cart_request_url(&self, request: &CartRequest) -> String {
        with_query(
            &self.cart_url,
            &format!(
                "code={}&price={}",
                urlencoding::encode(&request.tracking_code),
                urlencoding::encode(&request.price)
            ),
        )
    }

    /// Resolve a media filename against the media base.
    pub fn media_url(&self, filename: &str) -> String {
        format!("{}{filename}", self.media_base)
    }

    /// Resolve every media filename of a record, preserving order.
    pub fn media_urls<'a>(&self, filenames: impl IntoIterator<Item = &'a String>) -> Vec<String> {
        filenames.into_iter().map(|f| self.media_url(f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_storefront() {
        let e = Endpoints::default();
        assert_eq!(e.catalog_url, "https://arianstore.org/acc.json");
        assert_eq!(e.cart_url, "https://arianstore.org/addCart.php");
        assert_eq!(e.media_base, "https://arianstore.org/image/");
        assert!(e.validate().is_ok());
    }

    #[test]
    fn catalog_url_carries_cache_buster() {
        let e = Endpoints::default();
        assert_eq!(
            e.catalog_request_url(1_700_000_000_123),
            "https://arianstore.org/acc.json?cb=1700000000123"
        );
    }

    #[test]
    fn catalog_url_keeps_existing_query() {
        let e = Endpoints {
            catalog_url: "https://cdn.example/acc.json?v=2".to_string(),
            ..Endpoints::default()
        };
        assert_eq!(e.catalog_request_url(5), "https://cdn.example/acc.json?v=2&cb=5");
    }

    #[test]
    fn cart_url_encodes_like_encode_uri_component() {
        let e = Endpoints::default();
        let req = CartRequest::new("A&B =1/ک", "500,000");
        assert_eq!(
            e.cart_request_url(&req),
            "https://arianstore.org/addCart.php?code=A%26B%20%3D1%2F%DA%A9&price=500%2C000"
        );
    }

    #[test]
    fn cart_url_plain_values() {
        let e = Endpoints::default();
        let req = CartRequest::new("ABC123", "500000");
        assert_eq!(
            e.cart_request_url(&req),
            "https://arianstore.org/addCart.php?code=ABC123&price=500000"
        );
    }

    #[test]
    fn media_resolved_against_base() {
        let e = Endpoints::default();
        let media = vec!["a.jpg".to_string(), "b.png".to_string()];
        assert_eq!(
            e.media_urls(&media),
            vec![
                "https://arianstore.org/image/a.jpg",
                "https://arianstore.org/image/b.png"
            ]
        );
    }

    #[test]
    fn validate_rejects_relative_and_non_http() {
        let relative = Endpoints {
            catalog_url: "acc.json".to_string(),
            ..Endpoints::default()
        };
        assert!(matches!(
            relative.validate(),
            Err(ClientError::InvalidUrl {
                endpoint: Endpoint::Catalog,
                ..
            })
        ));

        let ftp = Endpoints {
            cart_url: "ftp://arianstore.org/addCart.php".to_string(),
            ..Endpoints::default()
        };
        assert!(matches!(
            ftp.validate(),
            Err(ClientError::InvalidUrl {
                endpoint: Endpoint::Cart,
                ..
            })
        ));
    }
}
