//! Reusable UI components

pub mod attribute_row;
pub mod carousel;
pub mod lightbox;
pub mod modal;
pub mod nav_link;
pub mod details_card;
pub mod statusbar;
pub mod toast;
