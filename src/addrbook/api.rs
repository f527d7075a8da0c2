//! # API Facade
//!
//! [`BookApi`] is the single entry point for a session. It owns the
//! [`AddressBook`], the [`BookStore`] it was loaded from, and the
//! [`BookConfig`], and dispatches input lines to the command layer.
//!
//! ## Error Boundary
//!
//! Commands return `Result<CmdResult>`. [`BookApi::dispatch`] is the only
//! place where a command error becomes text: it is turned into a single
//! error-level [`CmdMessage`] and the session continues. The book is never
//! left half-modified by a failed command because every command validates
//! before mutating.
//!
//! Only persistence failures escape `dispatch` as `Err`.
//!
//! ## Generic Over BookStore
//!
//! - Production: `BookApi<JsonFileStore>`
//! - Testing: `BookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands::parse::{parse_input, Command};
use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::BookConfig;
use crate::error::{BookError, Result};
use crate::model::Record;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// What the session loop should do after a line was dispatched.
#[derive(Debug)]
pub enum Outcome {
    Continue(CmdResult),
    /// The book has been saved; the loop should print and stop.
    Exit(CmdResult),
}

impl Outcome {
    pub fn result(&self) -> &CmdResult {
        match self {
            Outcome::Continue(result) | Outcome::Exit(result) => result,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

pub struct BookApi<S: BookStore> {
    book: AddressBook,
    store: S,
    config: BookConfig,
}

impl<S: BookStore> BookApi<S> {
    /// Loads the book from `store`. A store with nothing saved yields an
    /// empty book.
    pub fn open(store: S, config: BookConfig) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            book,
            store,
            config,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Dispatches one input line, using the local date for `birthdays`.
    pub fn dispatch(&mut self, line: &str) -> Result<Outcome> {
        self.dispatch_at(line, Local::now().date_naive())
    }

    pub fn dispatch_at(&mut self, line: &str, today: NaiveDate) -> Result<Outcome> {
        let (command, args) = match parse_input(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "could not parse command");
                return Ok(Outcome::Continue(failed(e)));
            }
        };
        debug!(%command, args = args.len(), "dispatching");

        let result = match command {
            Command::Close | Command::Exit => {
                self.save()?;
                return Ok(Outcome::Exit(
                    CmdResult::default().with_message(CmdMessage::info("Good bye!")),
                ));
            }
            Command::Hello => {
                Ok(CmdResult::default().with_message(CmdMessage::info("How can I help you?")))
            }
            Command::Add => self.add_contact(&args),
            Command::Change => self.change_phone(&args),
            Command::Phone => self.phones(&args),
            Command::All => self.all(),
            Command::AddBirthday => self.add_birthday(&args),
            Command::ShowBirthday => self.show_birthday(&args),
            Command::Birthdays => self.birthdays(today),
        };

        Ok(Outcome::Continue(result.unwrap_or_else(|e| {
            warn!(%command, error = %e, "command failed");
            failed(e)
        })))
    }

    pub fn add_contact(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::add::run(&mut self.book, args)
    }

    pub fn change_phone(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::change::run(&mut self.book, args)
    }

    pub fn phones(&self, args: &[String]) -> Result<CmdResult> {
        commands::phone::run(&self.book, args)
    }

    pub fn all(&self) -> Result<CmdResult> {
        commands::all::run(&self.book)
    }

    pub fn add_birthday(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::birthday::add(&mut self.book, args)
    }

    pub fn show_birthday(&self, args: &[String]) -> Result<CmdResult> {
        commands::birthday::show(&self.book, args)
    }

    pub fn birthdays(&self, today: NaiveDate) -> Result<CmdResult> {
        commands::upcoming::run(&self.book, today, self.config.scheduler_options())
    }

    /// Removes a contact by name. Not reachable from the command loop.
    pub fn delete_contact(&mut self, name: &str) -> Option<Record> {
        self.book.delete_record(name)
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }
}

fn failed(error: BookError) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::error(error.to_string()))
}
