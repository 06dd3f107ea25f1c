use quicknote_core::ThemeMode;

use crate::commands::common::AppContext;
use crate::error::CliError;

pub fn run_theme(mode: Option<ThemeMode>, ctx: &AppContext) -> Result<(), CliError> {
    let mut theme = ctx.open_theme();
    if let Some(mode) = mode {
        theme.set(mode)?;
    }

    println!("{}", theme.mode());
    Ok(())
}
