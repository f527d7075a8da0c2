//! # Command Layer
//!
//! One module per interactive command. Every command takes its raw
//! arguments and the [`AddressBook`](crate::book::AddressBook), and returns
//! `Result<CmdResult>`:
//!
//! - Outcomes the user should read (including lookup misses such as
//!   "No contact found") are [`CmdMessage`]s inside an `Ok` result.
//! - Bad input (wrong argument count, bad date, duplicate birthday) is an
//!   `Err(BookError)`, turned into an error message by
//!   [`BookApi::dispatch`](crate::api::BookApi::dispatch).
//!
//! Commands never print and never touch the store.

use crate::birthdays::UpcomingBirthday;
use crate::error::{BookError, Result};
use crate::model::Record;

pub mod add;
pub mod all;
pub mod birthday;
pub mod change;
pub mod parse;
pub mod phone;
pub mod upcoming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub upcoming: Vec<UpcomingBirthday>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_upcoming(mut self, upcoming: Vec<UpcomingBirthday>) -> Self {
        self.upcoming = upcoming;
        self
    }

    /// Text of every message, in order. Handy for tests.
    pub fn message_texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}

pub(crate) fn contact_not_found(name: &str) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(format!(
        "No contact found for {}.",
        name
    )))
}

/// At least `count` arguments; extra ones are ignored.
pub(crate) fn at_least<'a>(
    args: &'a [String],
    count: usize,
    usage: &'static str,
) -> Result<&'a [String]> {
    if args.len() < count {
        return Err(BookError::MissingArgument { usage });
    }
    Ok(&args[..count])
}

pub(crate) fn exactly<'a>(
    args: &'a [String],
    count: usize,
    usage: &'static str,
) -> Result<&'a [String]> {
    if args.len() != count {
        return Err(BookError::WrongArgumentCount { usage });
    }
    Ok(args)
}

#[cfg(test)]
pub(crate) fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
