use std::path::Path;

use clap::Parser;
use pretty_assertions::assert_eq;
use quicknote_core::{Note, NoteId, ThemeMode};
use tempfile::tempdir;

use crate::cli::{Cli, Commands, ConfigCommands, ThemeArg};
use crate::commands::add::run_add;
use crate::commands::common::{
    default_editor, format_note_lines, is_affirmative, normalize_content, note_preview,
    parse_note_id, AppContext,
};
use crate::commands::config::{effective_config, run_config};
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::theme::run_theme;
use crate::error::CliError;

fn context_in(dir: &Path) -> AppContext {
    AppContext::resolve(
        Some(dir.join("data")),
        Some(dir.join("config").join("config.json")),
    )
    .unwrap()
}

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}

#[test]
fn normalize_content_trims_and_rejects_empty() {
    assert_eq!(normalize_content("  hello  "), Some("hello".to_string()));
    assert_eq!(normalize_content(" \n\t "), None);
}

#[test]
fn normalize_content_keeps_multiline_text() {
    assert_eq!(
        normalize_content("line 1\nline 2\n"),
        Some("line 1\nline 2".to_string())
    );
}

#[test]
fn default_editor_is_defined() {
    assert!(!default_editor().is_empty());
}

#[test]
fn parse_note_id_accepts_numbers_only() {
    assert_eq!(parse_note_id(" 12 ").unwrap(), NoteId::new(12));
    assert!(matches!(
        parse_note_id("abc"),
        Err(CliError::InvalidNoteId(id)) if id == "abc"
    ));
    assert!(parse_note_id("-3").is_err());
}

#[test]
fn note_preview_collapses_and_truncates() {
    let note = Note::new(NoteId::new(0), "  lots   of\tspace  \nsecond", "t");
    assert_eq!(note_preview(&note, 40), "lots of space");
    assert_eq!(note_preview(&note, 8), "lots ...");
}

#[test]
fn format_note_lines_aligns_ids() {
    let notes = vec![
        Note::new(NoteId::new(10), "Call mom", "Oct 15, 2026, 9:05 AM"),
        Note::new(NoteId::new(2), "Buy milk", "Oct 15, 2026, 9:00 AM"),
    ];
    assert_eq!(
        format_note_lines(&notes),
        vec![
            "10  Oct 15, 2026, 9:05 AM  Call mom".to_string(),
            " 2  Oct 15, 2026, 9:00 AM  Buy milk".to_string(),
        ]
    );
}

#[test]
fn affirmative_answers() {
    assert!(is_affirmative("y\n"));
    assert!(is_affirmative(" YES "));
    assert!(!is_affirmative(""));
    assert!(!is_affirmative("nope"));
}

#[test]
fn theme_arg_maps_to_mode() {
    assert_eq!(ThemeMode::from(ThemeArg::Light), ThemeMode::Light);
    assert_eq!(ThemeMode::from(ThemeArg::Dark), ThemeMode::Dark);
    assert_eq!(ThemeMode::from(ThemeArg::System), ThemeMode::System);
}

#[test]
fn cli_parses_quick_capture_and_subcommands() {
    let cli = Cli::try_parse_from(["quicknote", "remember", "the", "milk"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.note, args(&["remember", "the", "milk"]));

    let cli = Cli::try_parse_from(["quicknote", "edit", "3", "new", "text"]).unwrap();
    match cli.command {
        Some(Commands::Edit { id, text }) => {
            assert_eq!(id, "3");
            assert_eq!(text, args(&["new", "text"]));
        }
        _ => panic!("expected edit command"),
    }

    let cli = Cli::try_parse_from(["quicknote", "theme", "dark"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Theme {
            mode: Some(ThemeArg::Dark)
        })
    ));
}

#[test]
fn log_directive_enables_info_for_quicknote() {
    let directive: tracing_subscriber::filter::Directive = crate::LOG_DIRECTIVE.parse().unwrap();
    assert_eq!(directive.to_string(), "quicknote=info");
}

#[test]
fn context_prefers_explicit_data_dir() {
    let tmp = tempdir().unwrap();
    let ctx = context_in(tmp.path());
    assert_eq!(ctx.data_dir, tmp.path().join("data"));
    assert_eq!(effective_config(&ctx).data_dir, tmp.path().join("data"));
}

#[test]
fn context_reports_malformed_config() {
    let tmp = tempdir().unwrap();
    let config_path = tmp.path().join("config.json");
    std::fs::write(&config_path, "{ nope").unwrap();

    let result = AppContext::resolve(Some(tmp.path().to_path_buf()), Some(config_path));
    assert!(matches!(result, Err(CliError::Config(_))));
}

#[test]
fn add_edit_delete_through_commands() {
    let tmp = tempdir().unwrap();
    let ctx = context_in(tmp.path());

    run_add(&args(&["Buy", "milk"]), &ctx).unwrap();
    run_add(&args(&["Call mom"]), &ctx).unwrap();
    run_edit("0", &args(&["Buy milk and eggs"]), &ctx).unwrap();
    run_delete("1", true, &ctx).unwrap();

    let notes = ctx.open_store().list();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, NoteId::new(0));
    assert_eq!(notes[0].text, "Buy milk and eggs");
}

#[test]
fn edit_and_delete_unknown_note_fail() {
    let tmp = tempdir().unwrap();
    let ctx = context_in(tmp.path());

    assert!(matches!(
        run_edit("5", &args(&["text"]), &ctx),
        Err(CliError::Core(quicknote_core::Error::NotFound(_)))
    ));
    assert!(matches!(
        run_delete("5", true, &ctx),
        Err(CliError::Core(quicknote_core::Error::NotFound(_)))
    ));
}

#[test]
fn theme_command_persists_mode() {
    let tmp = tempdir().unwrap();
    let ctx = context_in(tmp.path());
    assert_eq!(ctx.open_theme().mode(), ThemeMode::System);

    run_theme(Some(ThemeMode::Light), &ctx).unwrap();
    assert_eq!(ctx.open_theme().mode(), ThemeMode::Light);

    run_theme(None, &ctx).unwrap();
    assert_eq!(ctx.open_theme().mode(), ThemeMode::Light);
}

#[test]
fn config_set_writes_file() {
    let tmp = tempdir().unwrap();
    let ctx = context_in(tmp.path());

    run_config(
        ConfigCommands::Set {
            data_dir: None,
            timestamp_format: Some("%Y-%m-%d".to_string()),
        },
        &ctx,
    )
    .unwrap();

    let reloaded = context_in(tmp.path());
    assert_eq!(reloaded.config.timestamp_format(), "%Y-%m-%d");
}

#[test]
fn config_set_requires_a_value() {
    let tmp = tempdir().unwrap();
    let ctx = context_in(tmp.path());
    let result = run_config(
        ConfigCommands::Set {
            data_dir: None,
            timestamp_format: None,
        },
        &ctx,
    );
    assert!(matches!(result, Err(CliError::Config(_))));
}
