use std::io::{self, IsTerminal};

use crate::commands::common::{confirm, parse_note_id, AppContext};
use crate::error::CliError;

pub fn run_delete(id: &str, skip_confirm: bool, ctx: &AppContext) -> Result<(), CliError> {
    let id = parse_note_id(id)?;
    let mut store = ctx.open_store();
    let note = store
        .get(id)
        .ok_or(quicknote_core::Error::NotFound(id))?;

    if !skip_confirm && io::stdin().is_terminal() {
        let prompt = format!("Delete note {id} ({})?", note.title_preview(40));
        if !confirm(&prompt)? {
            println!("Cancelled");
            return Ok(());
        }
    }

    store.delete(id)?;
    println!("{id}");
    Ok(())
}
