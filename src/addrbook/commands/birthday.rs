use crate::book::AddressBook;
use crate::commands::{contact_not_found, exactly, CmdMessage, CmdResult};
use crate::error::Result;

pub const ADD_USAGE: &str = "add-birthday [name] [birthday]";
pub const SHOW_USAGE: &str = "show-birthday [name]";

pub fn add(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = exactly(args, 2, ADD_USAGE)?;
    let (name, birthday) = (&args[0], &args[1]);

    let Some(record) = book.find_record_mut(name) else {
        return Ok(contact_not_found(name));
    };

    record.add_birthday(birthday)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Birthday added for {}.",
        name
    ))))
}

pub fn show(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    let name = &exactly(args, 1, SHOW_USAGE)?[0];

    let Some(record) = book.find_record(name) else {
        return Ok(contact_not_found(name));
    };

    let message = match record.birthday() {
        Some(birthday) => CmdMessage::info(format!("{}'s birthday: {}", name, birthday)),
        None => CmdMessage::warning(format!("No birthday found for {}.", name)),
    };
    Ok(CmdResult::default().with_message(message))
}
