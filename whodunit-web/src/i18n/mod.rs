//! UI strings, looked up by dotted key from bundled JSON tables.

mod bundle;
mod locales;
mod render;

pub use bundle::{current_lang, set_lang};
pub use locales::{DEFAULT_LANG, available};
pub use render::{t, tr};
