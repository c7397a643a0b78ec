//! Navigation links shown in the header and bottom bar

/// Translated label of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkLabel {
    Support,
    PostAd,
    Home,
    Products,
}

/// Style override for a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Raised accent button (the cart shortcut).
    Emphasis,
}

/// A tappable link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub destination: &'static str,
    pub icon: &'static str,
    /// `None` renders the icon alone.
    pub label: Option<LinkLabel>,
    /// `None` uses the default link style.
    pub style: Option<LinkStyle>,
}

/// Header link back to the storefront root.
pub const HOME_LINK: NavLink = NavLink {
    destination: "/",
    icon: "⌂",
    label: Some(LinkLabel::Home),
    style: Some(LinkStyle::Emphasis),
};

/// Bottom navigation bar, left to right.
pub const BOTTOM_LINKS: [NavLink; 5] = [
    NavLink {
        destination: "https://t.me/Ar_broken",
        icon: "☎",
        label: Some(LinkLabel::Support),
        style: None,
    },
    NavLink {
        destination: "https://arianstore.org/indext.php",
        icon: "▦",
        label: Some(LinkLabel::PostAd),
        style: None,
    },
    NavLink {
        destination: "https://arianstore.org/bos.html",
        icon: "◈",
        label: None,
        style: Some(LinkStyle::Emphasis),
    },
    NavLink {
        destination: "https://arianstore.org",
        icon: "☺",
        label: Some(LinkLabel::Home),
        style: None,
    },
    NavLink {
        destination: "https://arianstore.org/Por.html",
        icon: "▤",
        label: Some(LinkLabel::Products),
        style: None,
    },
];

/// Broker contact shown under the item attributes.
pub const BROKER_CONTACT: &str = "@Ar_broken";
/// Site trade admin shown under the item attributes.
pub const SITE_ADMIN_CONTACT: &str = "@Adm_Site";
