//! Navigation location
//!
//! The detail view is addressed like the storefront page it replaces: a URL
//! (or just its query string) whose `code` parameter names the item.

use url::Url;

/// Query parameter carrying the tracking code.
pub const CODE_PARAM: &str = "code";

/// Base used to resolve bare query strings such as `?code=ABC123`.
const RELATIVE_BASE: &str = "https://storefront.invalid/";

/// Current navigation location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// Text the location was created from.
    pub raw: String,
    /// Value of the first `code` parameter, when non-empty.
    code: Option<String>,
}

impl Location {
    /// Parse a location.
    ///
    /// Accepts an absolute URL, a path with a query string, a bare query
    /// string (with or without the leading `?`) or an empty string. Only the
    /// first `code` parameter is consulted; an empty value counts as absent.
    pub fn parse(input: &str) -> Self {
        let raw = input.trim().to_string();
        let code = Self::resolve(&raw).and_then(|url| {
            url.query_pairs()
                .find(|(key, _)| key == CODE_PARAM)
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
        });
        Self { raw, code }
    }

    fn resolve(raw: &str) -> Option<Url> {
        if let Ok(url) = Url::parse(raw) {
            return Some(url);
        }
        let base = Url::parse(RELATIVE_BASE).ok()?;
        // A path keeps its query after `?`; text before any `?` that already
        // holds `=` is itself the query.
        let is_path = raw.starts_with('/')
            || raw.starts_with('?')
            || raw.split_once('?').is_some_and(|(path, _)| !path.contains('='));
        let relative = if is_path {
            raw.to_string()
        } else {
            format!("?{raw}")
        };
        base.join(&relative).ok()
    }

    /// Tracking code named by the location, if any.
    pub fn tracking_code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}
