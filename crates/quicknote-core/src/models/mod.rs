//! Data models for quicknote

mod note;
mod settings;

pub use note::{Note, NoteId};
pub use settings::{ResolvedTheme, ThemeMode};
