use serde::{Deserialize, Serialize};

use crate::utils::lenient;

// ============ Catalog ============

/// One record of the catalog snapshot.
///
/// Attributes are display text and are never reformatted: whatever the
/// catalog file holds is what the detail view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Unique identifier within the snapshot.
    #[serde(deserialize_with = "lenient::deserialize")]
    pub tracking_code: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub region: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub link_type: String,
    /// Count field.
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub cp_count: String,
    /// Pass/subscription status.
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub battle_pass: String,
    /// Free-text seller description.
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub sell_desc: String,
    /// Lease/guarantee flag.
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub lease: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub sell_price: String,
    /// Media filenames, relative to the media base.
    #[serde(default, deserialize_with = "lenient::deserialize_list")]
    pub media: Vec<String>,
}

/// Select the first record whose tracking code equals `code` exactly.
pub fn find_item<'a>(records: &'a [ItemRecord], code: &str) -> Option<&'a ItemRecord> {
    records.iter().find(|r| r.tracking_code == code)
}

// ============ Cart ============

/// Parameters of an add-to-cart call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRequest {
    pub tracking_code: String,
    pub price: String,
}

impl CartRequest {
    pub fn new(tracking_code: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            tracking_code: tracking_code.into(),
            price: price.into(),
        }
    }

    /// Build the request for a displayed record.
    pub fn for_item(item: &ItemRecord) -> Self {
        Self::new(item.tracking_code.clone(), item.sell_price.clone())
    }
}

/// Raw body of the cart endpoint's answer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartResponse {
    #[serde(default)]
    pub success: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Error discriminator the cart endpoint uses for an item already in the cart.
pub const DUPLICATE_ERROR: &str = "duplicate";

/// Interpreted result of an add-to-cart call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartOutcome {
    /// The item was added.
    Added,
    /// The item is already in the cart.
    Duplicate,
    /// Anything else, including transport failures.
    Failed,
}

impl CartResponse {
    /// Map the response to an outcome.
    ///
    /// Only a literal `true` counts as success; truthy stand-ins such as `1`
    /// or `"true"` are failures. The duplicate discriminator is
    /// consulted only when the call did not succeed.
    pub fn outcome(&self) -> CartOutcome {
        if matches!(self.success, Some(serde_json::Value::Bool(true))) {
            return CartOutcome::Added;
        }
        match &self.error {
            Some(serde_json::Value::String(e)) if e == DUPLICATE_ERROR => CartOutcome::Duplicate,
            _ => CartOutcome::Failed,
        }
    }
}

impl CartOutcome {
    /// Classify a raw response body.
    ///
    /// Non-object or non-JSON bodies are failures.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value @ serde_json::Value::Object(_)) => {
                serde_json::from_value::<CartResponse>(value)
                    .map_or(Self::Failed, |r| r.outcome())
            }
            _ => Self::Failed,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<ItemRecord> {
        serde_json::from_str(
            r#"[
                {"trackingCode":"ABC123","region":"EU","linkType":"Google","cpCount":"120",
                 "battlePass":"Active","sellDesc":"Clean account","lease":"Yes",
                 "sellPrice":"500000","media":["a.jpg","b.jpg"]},
                {"trackingCode":"XYZ789","sellPrice":750000},
                {"trackingCode":"ABC123","sellPrice":"1"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn parse_full_record() {
        let catalog = sample_catalog();
        let item = &catalog[0];
        assert_eq!(item.tracking_code, "ABC123");
        assert_eq!(item.region, "EU");
        assert_eq!(item.link_type, "Google");
        assert_eq!(item.cp_count, "120");
        assert_eq!(item.battle_pass, "Active");
        assert_eq!(item.sell_desc, "Clean account");
        assert_eq!(item.lease, "Yes");
        assert_eq!(item.sell_price, "500000");
        assert_eq!(item.media, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn parse_sparse_record() {
        let catalog = sample_catalog();
        let item = &catalog[1];
        assert_eq!(item.sell_price, "750000");
        assert!(item.region.is_empty());
        assert!(item.media.is_empty());
    }

    #[test]
    fn tracking_code_is_required() {
        let result: Result<Vec<ItemRecord>, _> = serde_json::from_str(r#"[{"sellPrice":"1"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn find_item_returns_first_match() {
        let catalog = sample_catalog();
        let item = find_item(&catalog, "ABC123").unwrap();
        assert_eq!(item.sell_price, "500000");
    }

    #[test]
    fn find_item_is_exact() {
        let catalog = sample_catalog();
        assert!(find_item(&catalog, "abc123").is_none());
        assert!(find_item(&catalog, "ABC12").is_none());
        assert!(find_item(&catalog, "").is_none());
    }

    #[test]
    fn cart_request_for_item() {
        let catalog = sample_catalog();
        let req = CartRequest::for_item(&catalog[0]);
        assert_eq!(req, CartRequest::new("ABC123", "500000"));
    }

    #[test]
    fn outcome_success() {
        assert_eq!(CartOutcome::from_body(r#"{"success":true}"#), CartOutcome::Added);
    }

    #[test]
    fn outcome_duplicate() {
        assert_eq!(
            CartOutcome::from_body(r#"{"success":false,"error":"duplicate"}"#),
            CartOutcome::Duplicate
        );
        assert_eq!(
            CartOutcome::from_body(r#"{"error":"duplicate"}"#),
            CartOutcome::Duplicate
        );
    }

    #[test]
    fn outcome_success_wins_over_error() {
        assert_eq!(
            CartOutcome::from_body(r#"{"success":true,"error":"duplicate"}"#),
            CartOutcome::Added
        );
    }

    #[test]
    fn outcome_other_shapes_fail() {
        for body in [
            r#"{"success":false}"#,
            r#"{"success":"true"}"#,
            r#"{"success":1}"#,
            r#"{"error":"out_of_stock"}"#,
            r#"{"error":"DUPLICATE"}"#,
            r"{}",
            r"[]",
            r"true",
            "<html>oops</html>",
            "",
        ] {
            assert_eq!(CartOutcome::from_body(body), CartOutcome::Failed, "body: {body}");
        }
    }
}
