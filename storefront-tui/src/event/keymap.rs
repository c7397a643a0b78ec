//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether the key event matches this binding
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key bindings
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const HELP_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const OPEN_LOCATION: KeyBinding = KeyBinding::key(KeyCode::Char('o'));
    pub const HOME: KeyBinding = KeyBinding::key(KeyCode::Char('0'));

    // Detail view
    pub const ADD_TO_CART: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
    pub const ADD_TO_CART_ALT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const PREVIOUS_SLIDE: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const NEXT_SLIDE: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const ENLARGE: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const ENLARGE_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('v'));

    // Location prompt
    pub const CLEAR_INPUT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}
