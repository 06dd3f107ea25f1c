//! Key-value preferences used as the persistence gateway.
//!
//! The note store and the theme preference only ever see this trait; the
//! backend decides where the strings end up.

mod file;
mod memory;

pub use file::FilePreferences;
pub use memory::MemoryPreferences;

use crate::error::Result;

/// Preferences file holding the serialized note collection.
pub const NOTES_PREFS: &str = "notes_prefs";
/// Key of the serialized note collection.
pub const NOTES_KEY: &str = "notes_list";

/// Preferences file holding the theme mode.
pub const THEME_PREFS: &str = "theme_prefs";
/// Key of the theme mode ordinal.
pub const THEME_KEY: &str = "theme_mode";

/// Trait for string key-value storage operations
pub trait Preferences {
    /// Read a value, `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value. Returns only once the backend has committed it, so a
    /// crash afterwards does not lose the write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
