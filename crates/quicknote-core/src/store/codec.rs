//! JSON encoding of the note collection.

use crate::error::Result;
use crate::models::Note;
use crate::util::compact_text;

/// Serialize the collection in stored (creation) order.
pub fn encode_notes(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string(notes)?)
}

/// Deserialize a stored collection.
///
/// An absent payload, a JSON `null`, and anything that is not an array of
/// well-formed notes all decode to an empty collection.
pub fn decode_notes(payload: Option<&str>) -> Vec<Note> {
    let Some(payload) = payload else {
        return Vec::new();
    };

    match serde_json::from_str::<Option<Vec<Note>>>(payload) {
        Ok(notes) => notes.unwrap_or_default(),
        Err(error) => {
            tracing::warn!(
                "Discarding malformed note collection ({error}): {}",
                compact_text(payload)
            );
            Vec::new()
        }
    }
}
