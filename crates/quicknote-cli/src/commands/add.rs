use crate::commands::common::{resolve_note_content, AppContext};
use crate::error::CliError;

pub fn run_add(content_parts: &[String], ctx: &AppContext) -> Result<(), CliError> {
    let content = resolve_note_content(content_parts)?;

    let mut store = ctx.open_store();
    let note = store.create(&content)?;

    println!("{}", note.id);
    Ok(())
}
