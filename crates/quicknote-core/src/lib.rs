//! quicknote-core - Core library for quicknote
//!
//! This crate contains the note model, the note store with its edit session,
//! the preferences gateway used for persistence, and the theme preference
//! shared by every quicknote front end.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod prefs;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use models::{Note, NoteId, ThemeMode};
pub use store::{NoteStore, StoreEvent, SubscriptionId, ThemePreference};
