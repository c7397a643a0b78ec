//! Translation keys
//!
//! Texts are grouped by the UI component they appear in; texts used in more
//! than one place live in `common`.

/// Root of all translated texts
pub struct Translations {
    pub common: CommonTexts,
    pub header: HeaderTexts,
    pub detail: DetailTexts,
    pub lightbox: LightboxTexts,
    pub nav: NavTexts,
    pub toast: ToastTexts,
    pub modal: ModalTexts,
    pub hints: HintTexts,
    pub status: StatusTexts,
}

// ============================================================================
// Common
// ============================================================================

pub struct CommonTexts {
    pub loading: &'static str,
}

// ============================================================================
// Header
// ============================================================================

pub struct HeaderTexts {
    pub store_name: &'static str,
}

// ============================================================================
// Detail view
// ============================================================================

pub struct DetailTexts {
    /// Caption under the hourglass when no location names an item
    pub no_location: &'static str,
    /// Not-found caption; the tracking code follows it
    pub not_found: &'static str,
    /// Gallery placeholder
    pub no_image: &'static str,
    /// Carousel slide caption; the slide number follows it
    pub image: &'static str,
    /// Details card title
    pub details_title: &'static str,
    pub rows: DetailRowTexts,
    pub add_to_cart: &'static str,
}

/// Details card labels
pub struct DetailRowTexts {
    pub tracking_code: &'static str,
    pub region: &'static str,
    pub link_type: &'static str,
    pub cp_count: &'static str,
    pub battle_pass: &'static str,
    pub sell_desc: &'static str,
    pub lease: &'static str,
    pub sell_price: &'static str,
    pub broker: &'static str,
    pub site_admin: &'static str,
}

// ============================================================================
// Lightbox
// ============================================================================

pub struct LightboxTexts {
    pub title: &'static str,
}

// ============================================================================
// Navigation links
// ============================================================================

pub struct NavTexts {
    pub home: &'static str,
    pub support: &'static str,
    pub post_ad: &'static str,
    pub products: &'static str,
}

// ============================================================================
// Notifications
// ============================================================================

pub struct ToastTexts {
    pub success_title: &'static str,
    pub error_title: &'static str,
    pub added: &'static str,
    pub duplicate: &'static str,
    pub failed: &'static str,
}

// ============================================================================
// Modals
// ============================================================================

pub struct ModalTexts {
    pub open_location_title: &'static str,
    pub open_location_hint: &'static str,
    pub help_title: &'static str,
    pub help_close: &'static str,
}

// ============================================================================
// Key hints
// ============================================================================

pub struct HintTexts {
    pub slides: &'static str,
    pub enlarge: &'static str,
    pub add_to_cart: &'static str,
    pub open: &'static str,
    pub links: &'static str,
    pub help: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// Status bar
// ============================================================================

pub struct StatusTexts {
    /// Prefix of a link opened inside the app
    pub navigated: &'static str,
    /// Prefix of the destination of an external link
    pub external_link: &'static str,
    /// Shown while a cart call is in flight
    pub adding_to_cart: &'static str,
}
