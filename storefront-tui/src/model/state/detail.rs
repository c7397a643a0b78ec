//! Detail view state

use storefront_client::{Endpoints, ItemRecord, find_item};

/// A record selected for display, with its media already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedItem {
    pub record: ItemRecord,
    /// Media URLs in catalog order.
    pub media_urls: Vec<String>,
}

/// What the detail view currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailStatus {
    /// No record yet: waiting for a location, a fetch, or after a failed fetch.
    #[default]
    Loading,
    /// The record matching the requested code.
    Found(DisplayedItem),
    /// The snapshot has no record with this code.
    NotFound { code: String },
}

/// Detail view state
#[derive(Debug, Default)]
pub struct DetailState {
    pub status: DetailStatus,
    /// Bumped on every navigation; catalog results carry the value they were requested with.
    pub generation: u64,
    /// Code requested by the current location.
    pub requested_code: Option<String>,
    /// Current carousel slide.
    pub slide: usize,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new location.
    ///
    /// Returns the generation a catalog fetch must be tagged with, or `None`
    /// when the location names no item and nothing is fetched.
    pub fn begin_navigation(&mut self, code: Option<&str>) -> Option<u64> {
        self.generation = self.generation.wrapping_add(1);
        self.status = DetailStatus::Loading;
        self.slide = 0;
        self.requested_code = code.map(str::to_string);
        self.requested_code.as_ref().map(|_| self.generation)
    }

    /// Whether a result tagged with `generation` belongs to the current location.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation && self.requested_code.is_some()
    }

    /// Apply a catalog snapshot.
    ///
    /// Returns `false` (and changes nothing) for a stale generation.
    pub fn apply_catalog(
        &mut self,
        generation: u64,
        records: &[ItemRecord],
        endpoints: &Endpoints,
    ) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        let Some(code) = self.requested_code.clone() else {
            return false;
        };

        self.status = match find_item(records, &code) {
            Some(record) => DetailStatus::Found(DisplayedItem {
                record: record.clone(),
                media_urls: endpoints.media_urls(&record.media),
            }),
            None => DetailStatus::NotFound { code },
        };
        self.slide = 0;
        true
    }

    /// Displayed record, if any.
    pub fn item(&self) -> Option<&DisplayedItem> {
        match &self.status {
            DetailStatus::Found(item) => Some(item),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, DetailStatus::Loading)
    }

    /// Media URL of the current slide.
    pub fn current_media(&self) -> Option<&str> {
        self.item()
            .and_then(|item| item.media_urls.get(self.slide))
            .map(String::as_str)
    }

    /// Previous carousel slide
    pub fn previous_slide(&mut self) {
        if self.slide > 0 {
            self.slide -= 1;
        }
    }

    /// Next carousel slide
    pub fn next_slide(&mut self) {
        let count = self.item().map_or(0, |item| item.media_urls.len());
        if self.slide + 1 < count {
            self.slide += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, price: &str, media: &[&str]) -> ItemRecord {
        ItemRecord {
            tracking_code: code.to_string(),
            region: "EU".to_string(),
            link_type: "Google".to_string(),
            cp_count: "120".to_string(),
            battle_pass: "Active".to_string(),
            sell_desc: "desc".to_string(),
            lease: "Yes".to_string(),
            sell_price: price.to_string(),
            media: media.iter().map(|m| (*m).to_string()).collect(),
        }
    }

    #[test]
    fn starts_loading() {
        let state = DetailState::new();
        assert!(state.is_loading());
        assert!(state.item().is_none());
    }

    #[test]
    fn navigation_without_code_does_not_fetch() {
        let mut state = DetailState::new();
        assert_eq!(state.begin_navigation(None), None);
        assert!(state.is_loading());
    }

    #[test]
    fn found_record_is_displayed_verbatim() {
        let mut state = DetailState::new();
        let generation = state.begin_navigation(Some("ABC123")).unwrap();
        let snapshot = vec![record("OTHER", "1", &[]), record("ABC123", "500000", &["a.jpg"])];

        assert!(state.apply_catalog(generation, &snapshot, &Endpoints::default()));

        let item = state.item().unwrap();
        assert_eq!(item.record, snapshot[1]);
        assert_eq!(item.media_urls, vec!["https://arianstore.org/image/a.jpg"]);
        assert_eq!(state.current_media(), Some("https://arianstore.org/image/a.jpg"));
    }

    #[test]
    fn missing_record_is_not_found() {
        let mut state = DetailState::new();
        let generation = state.begin_navigation(Some("NOPE")).unwrap();

        assert!(state.apply_catalog(generation, &[record("ABC123", "1", &[])], &Endpoints::default()));

        assert_eq!(
            state.status,
            DetailStatus::NotFound {
                code: "NOPE".to_string()
            }
        );
    }

    #[test]
    fn stale_result_is_ignored() {
        let mut state = DetailState::new();
        let first = state.begin_navigation(Some("OLD")).unwrap();
        let second = state.begin_navigation(Some("NEW")).unwrap();
        let snapshot = vec![record("OLD", "1", &[]), record("NEW", "2", &[])];

        assert!(!state.apply_catalog(first, &snapshot, &Endpoints::default()));
        assert!(state.is_loading());

        assert!(state.apply_catalog(second, &snapshot, &Endpoints::default()));
        assert_eq!(state.item().unwrap().record.tracking_code, "NEW");
    }

    #[test]
    fn result_after_navigating_to_codeless_location_is_ignored() {
        let mut state = DetailState::new();
        let generation = state.begin_navigation(Some("ABC123")).unwrap();
        state.begin_navigation(None);

        assert!(!state.apply_catalog(generation, &[record("ABC123", "1", &[])], &Endpoints::default()));
        assert!(state.is_loading());
    }

    #[test]
    fn navigation_resets_displayed_record() {
        let mut state = DetailState::new();
        let generation = state.begin_navigation(Some("A")).unwrap();
        state.apply_catalog(generation, &[record("A", "1", &["1.jpg", "2.jpg"])], &Endpoints::default());
        state.next_slide();

        state.begin_navigation(Some("B"));

        assert!(state.is_loading());
        assert_eq!(state.slide, 0);
    }

    #[test]
    fn carousel_is_clamped() {
        let mut state = DetailState::new();
        let generation = state.begin_navigation(Some("A")).unwrap();
        state.apply_catalog(generation, &[record("A", "1", &["1.jpg", "2.jpg"])], &Endpoints::default());

        state.previous_slide();
        assert_eq!(state.slide, 0);
        state.next_slide();
        state.next_slide();
        assert_eq!(state.slide, 1);
        assert_eq!(state.current_media(), Some("https://arianstore.org/image/2.jpg"));
    }

    #[test]
    fn carousel_without_media() {
        let mut state = DetailState::new();
        let generation = state.begin_navigation(Some("A")).unwrap();
        state.apply_catalog(generation, &[record("A", "1", &[])], &Endpoints::default());

        state.next_slide();
        assert_eq!(state.slide, 0);
        assert_eq!(state.current_media(), None);
    }
}
