use crate::book::AddressBook;
use crate::commands::{at_least, contact_not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PhoneEdit;

pub const USAGE: &str = "change [name] [old phone] [new phone]";

pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = at_least(args, 3, USAGE)?;
    let (name, old, new) = (&args[0], &args[1], &args[2]);

    let Some(record) = book.find_record_mut(name) else {
        return Ok(contact_not_found(name));
    };

    let message = match record.edit_phone(old, new) {
        PhoneEdit::Updated => CmdMessage::success("Contact changed"),
        PhoneEdit::NotFound => CmdMessage::info(format!("Phone {} not found for {}.", old, name)),
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, args};
    use crate::error::BookError;
    use crate::model::Phone;

    fn book_with_alice() -> AddressBook {
        let mut book = AddressBook::new();
        add::run(&mut book, &args(&["Alice", "111"])).unwrap();
        add::run(&mut book, &args(&["Alice", "222"])).unwrap();
        book
    }

    fn phones(book: &AddressBook, name: &str) -> Vec<String> {
        book.find_record(name)
            .unwrap()
            .phones()
            .iter()
            .map(Phone::to_string)
            .collect()
    }

    #[test]
    fn changes_matching_phone() {
        let mut book = book_with_alice();
        let result = run(&mut book, &args(&["Alice", "222", "333"])).unwrap();

        assert_eq!(result.message_texts(), ["Contact changed"]);
        assert_eq!(phones(&book, "Alice"), ["111", "333"]);
    }

    #[test]
    fn unmatched_phone_changes_nothing() {
        let mut book = book_with_alice();
        let result = run(&mut book, &args(&["Alice", "999", "333"])).unwrap();

        assert_eq!(result.message_texts(), ["Phone 999 not found for Alice."]);
        assert_eq!(phones(&book, "Alice"), ["111", "222"]);
    }

    #[test]
    fn unknown_contact() {
        let mut book = book_with_alice();
        let result = run(&mut book, &args(&["Bob", "111", "333"])).unwrap();

        assert_eq!(result.message_texts(), ["No contact found for Bob."]);
        assert_eq!(phones(&book, "Alice"), ["111", "222"]);
    }

    #[test]
    fn missing_arguments() {
        let mut book = book_with_alice();
        let err = run(&mut book, &args(&["Alice", "111"])).unwrap_err();
        assert!(matches!(err, BookError::MissingArgument { usage: USAGE }));
    }
}
