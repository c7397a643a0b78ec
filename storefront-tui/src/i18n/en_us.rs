//! English translations (en-US)

use super::keys::{
    CommonTexts, DetailRowTexts, DetailTexts, HeaderTexts, HintTexts, LightboxTexts, ModalTexts,
    NavTexts, StatusTexts, ToastTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        loading: "Loading...",
    },

    header: HeaderTexts {
        store_name: "Arian Store",
    },

    detail: DetailTexts {
        no_location: "Press o to open a location such as ?code=ABC123",
        not_found: "No account found with tracking code",
        no_image: "No image available",
        image: "Image",
        details_title: "Account Details",
        rows: DetailRowTexts {
            tracking_code: "Listing code",
            region: "Region",
            link_type: "Account link",
            cp_count: "CP count",
            battle_pass: "Battle pass status",
            sell_desc: "Seller description",
            lease: "Guarantee with identity verification",
            sell_price: "Price (Toman)",
            broker: "Broker management",
            site_admin: "Site trade admin",
        },
        add_to_cart: "Add to cart",
    },

    lightbox: LightboxTexts {
        title: "Enlarged image",
    },

    nav: NavTexts {
        home: "Home",
        support: "Support",
        post_ad: "Post ad",
        products: "Products",
    },

    toast: ToastTexts {
        success_title: "Success",
        error_title: "Error",
        added: "The item was added to your cart",
        duplicate: "This item is already in your cart",
        failed: "Something went wrong while adding the item to your cart",
    },

    modal: ModalTexts {
        open_location_title: "Open location",
        open_location_hint: "Enter a URL or query string, e.g. ?code=ABC123",
        help_title: "Help",
        help_close: "Press Esc to close",
    },

    hints: HintTexts {
        slides: "Slides",
        enlarge: "Enlarge",
        add_to_cart: "Add to cart",
        open: "Open location",
        links: "Links",
        help: "Help",
        close: "Close",
        quit: "Quit",
    },

    status: StatusTexts {
        navigated: "Opened:",
        external_link: "Open in browser:",
        adding_to_cart: "Adding to cart...",
    },
};
