//! Shared test fixtures

#![allow(dead_code)]

use storefront_client::{Endpoints, StorefrontClient};

/// Catalog snapshot with one fully populated record, a sparse record and a
/// duplicate tracking code.
pub const SAMPLE_CATALOG: &str = r#"[
    {
        "trackingCode": "ABC123",
        "region": "EU",
        "linkType": "Google",
        "cpCount": "120",
        "battlePass": "Active",
        "sellDesc": "Clean account, no bans",
        "lease": "Yes",
        "sellPrice": "500000",
        "media": ["a.jpg"]
    },
    {
        "trackingCode": "XYZ789",
        "sellPrice": 750000
    },
    {
        "trackingCode": "ABC123",
        "sellPrice": "1"
    }
]"#;

/// Endpoints pointing at a mock server.
pub fn mock_endpoints(server_url: &str) -> Endpoints {
    Endpoints {
        catalog_url: format!("{server_url}/acc.json"),
        cart_url: format!("{server_url}/addCart.php"),
        media_base: format!("{server_url}/image/"),
    }
}

/// Client talking to a mock server.
pub fn mock_client(server_url: &str) -> StorefrontClient {
    StorefrontClient::new(mock_endpoints(server_url), None).expect("valid mock endpoints")
}
