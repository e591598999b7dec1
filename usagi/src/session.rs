//! The interactive read-eval loop.
//!
//! The loop alternates between asking for an item and asking whether the user
//! wants to add anything else. Commands are accepted in both states.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::command::is_command;
use crate::core::store::ItemStore;
use crate::dispatch::{self, Dispatch, print_list, try_handle_command};

/// Where the loop is in the add/confirm conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingItem,
    AwaitingConfirmation,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Input ran out or the user answered `n`. The final list was printed.
    Finished,
    /// `/quit` was issued. No final list was printed.
    Quit,
}

/// Options for a single session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub banner: bool,
    /// List files appended before the first prompt, as if typed with `/load`.
    pub preload: Vec<PathBuf>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            banner: true,
            preload: Vec::new(),
        }
    }
}

/// Drives one conversation over `input` and `output` against a list.
pub struct Session<'a, R, W> {
    store: &'a mut ItemStore,
    input: R,
    output: W,
    state: State,
    line: String,
    raw: Vec<u8>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut ItemStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            state: State::AwaitingItem,
            line: String::new(),
            raw: Vec::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Print the welcome banner.
    pub fn greet(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Usagi's Shopping List!")?;
        writeln!(
            self.output,
            "Type an item to add it. Type /help for commands.\n"
        )?;
        Ok(())
    }

    /// Append items from `path` exactly like a typed `/load`.
    pub fn preload(&mut self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "preloading list file");
        dispatch::load(self.store, path, &mut self.output)
    }

    /// Run until end of input, a `n` answer, or `/quit`.
    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            self.prompt()?;
            if !self.read_line()? {
                debug!(state = ?self.state, "end of input");
                break;
            }
            let step = match self.state {
                State::AwaitingItem => self.on_item_line()?,
                State::AwaitingConfirmation => self.on_confirmation_line()?,
            };
            match step {
                Step::Stay => {}
                Step::Goto(next) => {
                    debug!(from = ?self.state, to = ?next, "state change");
                    self.state = next;
                }
                Step::Finalize => break,
                Step::Quit => {
                    self.output.flush().context("flush output")?;
                    return Ok(SessionEnd::Quit);
                }
            }
        }
        self.finalize()?;
        Ok(SessionEnd::Finished)
    }

    fn prompt(&mut self) -> Result<()> {
        let question = match self.state {
            State::AwaitingItem => "Usagi: What do you want to add? ",
            State::AwaitingConfirmation => "Usagi: Anything else? (y/n) ",
        };
        write!(self.output, "{question}\n> ")?;
        self.output.flush().context("flush prompt")?;
        Ok(())
    }

    /// Read the next line with trailing whitespace removed. Returns false at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> Result<bool> {
        self.raw.clear();
        let read = self
            .input
            .read_until(b'\n', &mut self.raw)
            .context("read input line")?;
        if read == 0 {
            return Ok(false);
        }
        let decoded = String::from_utf8_lossy(&self.raw);
        self.line.clear();
        self.line.push_str(decoded.trim_end());
        Ok(true)
    }

    fn on_item_line(&mut self) -> Result<Step> {
        if self.line.is_empty() {
            writeln!(self.output, "(no input)")?;
            return Ok(Step::Stay);
        }
        if let Some(dispatch) = try_handle_command(self.store, &self.line, &mut self.output)? {
            return Ok(dispatch.into());
        }
        self.store.add(&self.line)?;
        debug!(item = %self.line, count = self.store.len(), "item added");
        writeln!(self.output, "Added: {}", self.line)?;
        Ok(Step::Goto(State::AwaitingConfirmation))
    }

    fn on_confirmation_line(&mut self) -> Result<Step> {
        let Some(first) = self.line.chars().next() else {
            writeln!(self.output, "Please answer y or n.")?;
            return Ok(Step::Stay);
        };
        match first {
            'y' | 'Y' => Ok(Step::Goto(State::AwaitingItem)),
            'n' | 'N' => Ok(Step::Finalize),
            _ if is_command(&self.line) => {
                match try_handle_command(self.store, &self.line, &mut self.output)? {
                    Some(dispatch) => Ok(dispatch.into()),
                    None => {
                        writeln!(
                            self.output,
                            "Please answer y or n or enter a command starting with /."
                        )?;
                        Ok(Step::Stay)
                    }
                }
            }
            _ => {
                writeln!(
                    self.output,
                    "Please answer y or n. You can also use /view, /save, /help, etc."
                )?;
                Ok(Step::Stay)
            }
        }
    }

    fn finalize(&mut self) -> Result<()> {
        writeln!(self.output, "\nFinal list:")?;
        print_list(self.store, &mut self.output)?;
        self.output.flush().context("flush output")?;
        Ok(())
    }
}

/// Transition requested by one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Stay,
    Goto(State),
    Finalize,
    Quit,
}

impl From<Dispatch> for Step {
    fn from(dispatch: Dispatch) -> Self {
        match dispatch {
            Dispatch::Continue => Step::Stay,
            Dispatch::Quit => Step::Quit,
        }
    }
}

/// Run a full session: optional banner, preloaded files, then the loop.
pub fn run_session<R: BufRead, W: Write>(
    store: &mut ItemStore,
    input: R,
    output: W,
    options: &SessionOptions,
) -> Result<SessionEnd> {
    let mut session = Session::new(store, input, output);
    if options.banner {
        session.greet()?;
    }
    for path in &options.preload {
        session.preload(path)?;
    }
    session.run()
}
