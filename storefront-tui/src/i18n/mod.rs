//! Internationalisation (i18n)
//!
//! Translation tables are plain Rust structs, checked at compile time. The
//! Persian table carries the storefront's own copy.

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod fa_ir;
pub mod keys;

pub use keys::*;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (United States)
    #[default]
    EnUs,
    /// Persian (Iran)
    FaIr,
}

impl Language {
    /// Language name in its own script
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::FaIr => "فارسی",
        }
    }

    /// BCP 47 code
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::FaIr => "fa-IR",
        }
    }

    /// Parse a language code
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "fa-IR" | "fa" => Some(Language::FaIr),
            _ => None,
        }
    }

    /// Whether text in this language runs right to left
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::FaIr)
    }
}

/// Current language index
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// Translations of the current language
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &fa_ir::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// Set the current language
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::FaIr => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// Current language
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::FaIr,
        _ => Language::EnUs,
    }
}
