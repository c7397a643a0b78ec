//! Terminal and process utilities

mod logging;
mod terminal;

pub use logging::{default_log_path, init_logging};
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
