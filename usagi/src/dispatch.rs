//! Command execution against the list, list files and the terminal.
//!
//! Every recoverable failure is reported to the user here and the list is left
//! as it was. Only fatal store errors and terminal write failures are returned.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::core::command::{Command, parse_command, parse_leading_int};
use crate::core::store::{ItemStore, StoreError};
use crate::io::list_file;

/// What the session should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    /// End the session now, without the final listing.
    Quit,
}

const HELP: &str = "\
Commands:
  /view            - show list
  /remove INDEX    - remove item by number
  /save FILE       - save list to file
  /load FILE       - load items from file (appends)
  /clear           - remove all items
  /quit            - quit immediately
";

/// Parse and run `line` if it is a command.
///
/// Returns `Ok(None)` when the line is not a command.
pub fn try_handle_command<W: Write>(
    store: &mut ItemStore,
    line: &str,
    out: &mut W,
) -> Result<Option<Dispatch>> {
    match parse_command(line) {
        Some(command) => dispatch(store, &command, out).map(Some),
        None => Ok(None),
    }
}

/// Run one parsed command.
pub fn dispatch<W: Write>(
    store: &mut ItemStore,
    command: &Command,
    out: &mut W,
) -> Result<Dispatch> {
    debug!(?command, "dispatching command");
    match command {
        Command::Empty => {}
        Command::View => print_list(store, out)?,
        Command::Remove { index } => remove(store, index.as_deref(), out)?,
        Command::Save { path: Some(path) } => save(store, Path::new(path), out)?,
        Command::Save { path: None } => writeln!(out, "Usage: /save filename")?,
        Command::Load { path: Some(path) } => load(store, Path::new(path), out)?,
        Command::Load { path: None } => writeln!(out, "Usage: /load filename")?,
        Command::Clear => {
            let removed = store.clear();
            info!(removed, "list cleared");
            writeln!(out, "Cleared the list")?;
        }
        Command::Help => out.write_all(HELP.as_bytes())?,
        Command::Quit => {
            writeln!(out, "Goodbye!")?;
            return Ok(Dispatch::Quit);
        }
        Command::Unknown { name } => {
            debug!(name = %name, "unknown command");
            writeln!(out, "Unknown command. Type /help for commands.")?;
        }
    }
    Ok(Dispatch::Continue)
}

/// Print the list with 1-based positions, or the empty-list message.
pub fn print_list<W: Write>(store: &ItemStore, out: &mut W) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "(shopping list is empty)")?;
        return Ok(());
    }
    writeln!(out, "Your shopping list:")?;
    for (position, item) in store.entries() {
        writeln!(out, "{position}. {item}")?;
    }
    Ok(())
}

fn remove<W: Write>(store: &mut ItemStore, arg: Option<&str>, out: &mut W) -> Result<()> {
    let Some(arg) = arg else {
        writeln!(out, "Usage: /remove INDEX")?;
        return Ok(());
    };
    let position = parse_leading_int(arg);
    if position <= 0 {
        writeln!(out, "Specify a positive index")?;
        return Ok(());
    }
    let index = usize::try_from(position - 1).unwrap_or(usize::MAX);
    match store.remove(index) {
        Ok(item) => debug!(position, item = %item, "item removed"),
        Err(err) => {
            debug!(error = %err, "remove rejected");
            writeln!(out, "Invalid index")?;
        }
    }
    Ok(())
}

/// Save the list to `path`, reporting the outcome to the user.
pub fn save<W: Write>(store: &ItemStore, path: &Path, out: &mut W) -> Result<()> {
    match list_file::save(store, path) {
        Ok(count) => {
            info!(path = %path.display(), count, "list saved");
            writeln!(out, "Saved {count} items to '{}'", path.display())?;
        }
        Err(err) => {
            let reason = format!("{err:#}");
            warn!(path = %path.display(), error = %reason, "save failed");
            writeln!(out, "Failed to open file: {}", err.root_cause())?;
        }
    }
    Ok(())
}

/// Append items from `path`, reporting the outcome to the user.
///
/// Fatal store errors are returned instead of reported.
pub fn load<W: Write>(store: &mut ItemStore, path: &Path, out: &mut W) -> Result<()> {
    match list_file::load(store, path) {
        Ok(appended) => {
            info!(path = %path.display(), appended, total = store.len(), "list loaded");
            writeln!(
                out,
                "Loaded items from '{}' (now {} items)",
                path.display(),
                store.len()
            )?;
        }
        Err(err) if is_fatal(&err) => return Err(err),
        Err(err) => {
            let reason = format!("{err:#}");
            warn!(path = %path.display(), error = %reason, "load failed");
            writeln!(out, "Failed to open file: {}", err.root_cause())?;
        }
    }
    Ok(())
}

/// Returns true if `err` carries a store error the session cannot recover from.
pub fn is_fatal(err: &anyhow::Error) -> bool {
    err.downcast_ref::<StoreError>()
        .is_some_and(StoreError::is_fatal)
}
