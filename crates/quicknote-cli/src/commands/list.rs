use crate::commands::common::{format_note_lines, AppContext};
use crate::error::CliError;

pub const EMPTY_STATE: &str = "No notes yet. Add one with `quicknote add <text>`.";

pub fn run_list(as_json: bool, ctx: &AppContext) -> Result<(), CliError> {
    let notes = ctx.open_store().list();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else if notes.is_empty() {
        println!("{EMPTY_STATE}");
    } else {
        for line in format_note_lines(&notes) {
            println!("{line}");
        }
    }

    Ok(())
}
