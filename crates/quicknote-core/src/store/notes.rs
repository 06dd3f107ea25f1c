//! The note store: authoritative note collection plus the edit session.

use std::collections::HashSet;
use std::fmt;

use super::codec::{decode_notes, encode_notes};
use super::events::{Listeners, StoreEvent, SubscriptionId};
use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::models::{Note, NoteId};
use crate::prefs::{Preferences, NOTES_KEY};
use crate::util::is_blank;

/// Owns the notes in creation order, the next identifier, and the id of the
/// note being edited.
///
/// Every mutating call writes the full collection to the backing
/// [`Preferences`] before returning. A failed write is returned to the
/// caller but the in-memory change is kept. Subscribers only hear about
/// changes that were written.
pub struct NoteStore<P: Preferences> {
    prefs: P,
    clock: Box<dyn Clock>,
    notes: Vec<Note>,
    next_id: Option<NoteId>,
    editing: Option<NoteId>,
    listeners: Listeners,
}

impl<P: Preferences> NoteStore<P> {
    /// Load the collection from `prefs`, stamping notes with the local clock.
    pub fn load(prefs: P) -> Self {
        Self::load_with_clock(prefs, SystemClock::default())
    }

    /// Load the collection from `prefs` with a custom clock.
    ///
    /// Never fails: an unreadable or malformed collection loads as empty.
    pub fn load_with_clock(prefs: P, clock: impl Clock + 'static) -> Self {
        let payload = match prefs.get(NOTES_KEY) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!("Failed to read stored notes, starting empty: {error}");
                None
            }
        };

        let notes = decode_notes(payload.as_deref());
        warn_on_duplicate_ids(&notes);

        let next_id = notes
            .iter()
            .map(|note| note.id)
            .max()
            .map_or(Some(NoteId::new(0)), NoteId::checked_next);
        if next_id.is_none() {
            tracing::warn!("Stored notes use the largest possible id, new notes cannot be created");
        }

        tracing::info!("Loaded {} notes", notes.len());

        Self {
            prefs,
            clock: Box::new(clock),
            notes,
            next_id,
            editing: None,
            listeners: Listeners::default(),
        }
    }

    /// Create a note at the end of the collection.
    pub fn create(&mut self, text: &str) -> Result<Note> {
        validate_text(text)?;

        let id = self.next_id.ok_or(Error::IdsExhausted)?;
        self.next_id = id.checked_next();
        let note = Note::new(id, text, self.clock.timestamp());
        self.notes.push(note.clone());
        tracing::debug!("Created note {id}");

        self.persist()?;
        self.listeners.emit(&StoreEvent::Created(note.clone()));
        Ok(note)
    }

    /// Start editing a note, returning its current text.
    ///
    /// Replaces any edit session already in progress.
    pub fn begin_edit(&mut self, id: NoteId) -> Result<String> {
        let text = self.find(id).ok_or(Error::NotFound(id))?.text.clone();
        self.editing = Some(id);
        self.listeners.emit(&StoreEvent::EditStarted(id));
        Ok(text)
    }

    /// Replace a note's text and timestamp in place and end the edit session.
    pub fn update(&mut self, id: NoteId, text: &str) -> Result<Note> {
        validate_text(text)?;
        let timestamp = self.clock.timestamp();
        let note = self.find_mut(id).ok_or(Error::NotFound(id))?;
        note.text = text.to_string();
        note.timestamp = timestamp;
        let note = note.clone();
        let was_editing = self.editing.take().is_some();
        tracing::debug!("Updated note {id}");

        self.persist()?;
        self.listeners.emit(&StoreEvent::Updated(note.clone()));
        if was_editing {
            self.listeners.emit(&StoreEvent::EditCleared);
        }
        Ok(note)
    }

    /// Save `text` the way the input bar does: into the note under edit if
    /// there is one, otherwise as a new note.
    pub fn submit(&mut self, text: &str) -> Result<Note> {
        match self.editing {
            Some(id) => self.update(id, text),
            None => self.create(text),
        }
    }

    /// End the edit session, if any. Nothing is written.
    pub fn cancel_edit(&mut self) {
        self.clear_edit();
    }

    /// Remove a note. An edit session on that note is dropped.
    pub fn delete(&mut self, id: NoteId) -> Result<()> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(Error::NotFound(id))?;
        self.notes.remove(index);
        let was_editing = self.editing == Some(id);
        if was_editing {
            self.editing = None;
        }
        tracing::debug!("Deleted note {id}");

        self.persist()?;
        self.listeners.emit(&StoreEvent::Deleted(id));
        if was_editing {
            self.listeners.emit(&StoreEvent::EditCleared);
        }
        Ok(())
    }

    /// Notes newest first, for display.
    pub fn list(&self) -> Vec<Note> {
        self.notes.iter().rev().cloned().collect()
    }

    /// Notes in stored (creation) order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.find(id)
    }

    /// Id of the note being edited.
    pub const fn editing(&self) -> Option<NoteId> {
        self.editing
    }

    /// Id the next created note will receive, `None` once ids are used up.
    pub const fn next_id(&self) -> Option<NoteId> {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Write the current collection to the backing preferences.
    pub fn persist(&mut self) -> Result<()> {
        let payload = encode_notes(&self.notes)?;
        let count = self.notes.len();
        self.prefs.set(NOTES_KEY, &payload).map_err(|error| {
            tracing::error!("Failed to persist {count} notes: {error}");
            error
        })
    }

    /// Register a listener called after every committed state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.listeners.add(Box::new(listener))
    }

    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    pub const fn preferences(&self) -> &P {
        &self.prefs
    }

    pub fn into_preferences(self) -> P {
        self.prefs
    }

    fn clear_edit(&mut self) {
        if self.editing.take().is_some() {
            self.listeners.emit(&StoreEvent::EditCleared);
        }
    }

    fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    fn find_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id == id)
    }
}

impl<P: Preferences + fmt::Debug> fmt::Debug for NoteStore<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteStore")
            .field("prefs", &self.prefs)
            .field("notes", &self.notes)
            .field("next_id", &self.next_id)
            .field("editing", &self.editing)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

fn validate_text(text: &str) -> Result<()> {
    if is_blank(text) {
        return Err(Error::InvalidInput("Note text cannot be empty".to_string()));
    }
    Ok(())
}

fn warn_on_duplicate_ids(notes: &[Note]) {
    let mut seen = HashSet::with_capacity(notes.len());
    for note in notes {
        if !seen.insert(note.id) {
            tracing::warn!("Stored notes contain duplicate id {}", note.id);
        }
    }
}
