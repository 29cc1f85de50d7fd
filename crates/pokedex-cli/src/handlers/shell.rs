//! Interactive shell handler.
//!
//! Keeps one session open and exposes the store operations as line
//! commands. Each `show`/`edit` is its own detail visit, cancelled when the
//! command finishes.

use anyhow::Result;
use pokedex_core::{DetailView, EditForm, LoadOutcome, Record, RecordListView};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use super::show::open_loaded;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{display_record_details, print_record_table};
use crate::utils::input;

const PROMPT: &str = "pokedex> ";

const HELP: &str = "\
Commands:
  list                 Show records matching the current search
  search [term]        Set the search term (no term clears it)
  show <id>            Show details, fetching them if needed
  edit <id>            Edit height, weight, types and abilities
  add                  Add a randomly generated record
  remove <id>          Remove a record from this session
  reload               Fetch the catalog again, dropping local changes
  count                Number of records in the session
  help                 Show this message
  quit                 Leave the shell";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    List,
    Search(String),
    Show(i64),
    Edit(i64),
    Add,
    Remove(i64),
    Reload,
    Count,
    Help,
    Quit,
}

/// Parse one input line.
pub fn parse_line(line: &str) -> Result<ShellCommand, CliError> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let id = |rest: &str| {
        rest.parse::<i64>()
            .map_err(|_| CliError::Arguments(format!("'{verb}' needs a numeric id")))
    };

    let command = match verb.to_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "list" | "ls" => ShellCommand::List,
        "search" | "find" => ShellCommand::Search(rest.to_string()),
        "show" => ShellCommand::Show(id(rest)?),
        "edit" => ShellCommand::Edit(id(rest)?),
        "add" => ShellCommand::Add,
        "remove" | "rm" => ShellCommand::Remove(id(rest)?),
        "reload" => ShellCommand::Reload,
        "count" => ShellCommand::Count,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => {
            return Err(CliError::Arguments(format!(
                "Unknown command '{other}' (try 'help')"
            )));
        }
    };
    Ok(command)
}

/// Execute the shell command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let mut editor = DefaultEditor::new().map_err(CliError::from)?;
    let mut view = ctx.pokedex().list_view();

    if let Some(message) = ctx.store().error() {
        eprintln!("{message}. Use 'reload' to try again.");
    } else {
        println!("{} record(s) loaded. Type 'help' for commands.", ctx.store().count());
    }

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(CliError::from(e).into()),
        };
        if !line.trim().is_empty() {
            // History failures are non-fatal
            if let Err(e) = editor.add_history_entry(line.as_str()) {
                debug!(error = %e, "Could not add shell history entry");
            }
        }

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }
        if let Err(e) = run(ctx, &mut view, command).await {
            eprintln!("Error: {e}");
        }
    }

    Ok(())
}

async fn run(ctx: &CliContext, view: &mut RecordListView, command: ShellCommand) -> Result<()> {
    match command {
        ShellCommand::Empty | ShellCommand::Quit => {}
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::Count => println!("{}", ctx.store().count()),
        ShellCommand::List => print_rows(ctx, view),
        ShellCommand::Search(term) => {
            view.set_search(term);
            print_rows(ctx, view);
        }
        ShellCommand::Show(id) => {
            let visit = open_loaded(ctx, id).await?;
            if let Some(record) = visit.details() {
                display_record_details(&DetailView::from_record(record));
            }
        }
        ShellCommand::Edit(id) => {
            let mut visit = open_loaded(ctx, id).await?;
            let Some(current) = visit.details().cloned() else {
                return Ok(());
            };
            let form = prompt_edit_form(&current)?;
            let edited = visit
                .apply_edit(&form.to_patch(&current))
                .map_err(CliError::from)?;
            display_record_details(&DetailView::from_record(edited));
        }
        ShellCommand::Add => {
            let record = ctx.pokedex().add_synthetic();
            println!("Added #{} {}", record.id, record.name);
        }
        ShellCommand::Remove(id) => {
            let record = ctx.store().get(id).ok_or(CliError::NotFound(id))?;
            if input::prompt_confirmation(&format!("Remove #{} {}?", record.id, record.name))? {
                ctx.store().remove(id);
                println!("Removed #{} {}", record.id, record.name);
            } else {
                println!("Remove cancelled.");
            }
        }
        ShellCommand::Reload => reload(ctx, input::prompt_confirmation).await?,
    }
    Ok(())
}

/// Reload the catalog once `confirm` agrees. Reload drops every record in
/// the session, local additions and edits included.
async fn reload(ctx: &CliContext, confirm: impl FnOnce(&str) -> Result<bool>) -> Result<()> {
    let prompt = format!(
        "Reload drops all {} record(s) and local edits. Continue?",
        ctx.store().count()
    );
    if !confirm(&prompt)? {
        println!("Reload cancelled.");
        return Ok(());
    }

    match ctx.store().reload().await {
        LoadOutcome::Loaded(count) => println!("{count} record(s) loaded."),
        LoadOutcome::Failed(message) => return Err(CliError::Catalog(message).into()),
        LoadOutcome::Superseded => println!("Reload superseded by a newer one."),
    }
    Ok(())
}

fn print_rows(ctx: &CliContext, view: &RecordListView) {
    if ctx.store().is_loading() {
        println!("Loading...");
        return;
    }
    if let Some(message) = ctx.store().error() {
        eprintln!("{message}");
        return;
    }
    let rows = view.rows();
    if rows.is_empty() {
        println!("No records match '{}'.", view.search());
    } else {
        print_record_table(&rows);
    }
}

/// Ask for every editable field, pre-filled with the current values.
fn prompt_edit_form(current: &Record) -> Result<EditForm> {
    let defaults = EditForm::from_record(current);
    let ask = |label: &str, default: Option<&String>| {
        input::prompt_string_with_default(label, default.map(String::as_str))
    };

    Ok(EditForm {
        height: Some(ask("Height (dm)", defaults.height.as_ref())?),
        weight: Some(ask("Weight (hg)", defaults.weight.as_ref())?),
        types: Some(ask("Types (comma-separated)", defaults.types.as_ref())?),
        abilities: Some(ask("Abilities (comma-separated)", defaults.abilities.as_ref())?),
    })
}
