//! Note store and theme preference
//!
//! Both keep their state in memory and write it through a [`Preferences`]
//! backend as part of every mutating call.
//!
//! [`Preferences`]: crate::prefs::Preferences

mod codec;
mod events;
mod notes;
mod theme;

pub use codec::{decode_notes, encode_notes};
pub use events::{StoreEvent, SubscriptionId};
pub use notes::NoteStore;
pub use theme::ThemePreference;
