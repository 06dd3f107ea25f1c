use crate::commands::common::{
    capture_editor_input_with_initial, normalize_content, parse_note_id, AppContext,
};
use crate::error::CliError;

pub fn run_edit(id: &str, text_parts: &[String], ctx: &AppContext) -> Result<(), CliError> {
    let id = parse_note_id(id)?;
    let mut store = ctx.open_store();
    let current = store.begin_edit(id)?;

    let edited = if text_parts.is_empty() {
        capture_editor_input_with_initial(&current)?
    } else {
        normalize_content(&text_parts.join(" "))
    };

    let Some(edited) = edited else {
        store.cancel_edit();
        return Err(CliError::EmptyEditedContent);
    };

    if edited == current {
        store.cancel_edit();
        println!("{id}");
        return Ok(());
    }

    let updated = store.submit(&edited)?;
    println!("{}", updated.id);
    Ok(())
}
