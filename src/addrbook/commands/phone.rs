use crate::book::AddressBook;
use crate::commands::{at_least, contact_not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Phone;

pub const USAGE: &str = "phone [name]";

pub fn run(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    let name = &at_least(args, 1, USAGE)?[0];

    let Some(record) = book.find_record(name) else {
        return Ok(contact_not_found(name));
    };

    let message = if record.phones().is_empty() {
        CmdMessage::warning(format!("No phone found for {}.", name))
    } else {
        let phones: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
        CmdMessage::info(format!("Phones of {}: {}", name, phones.join(", ")))
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::args;
    use crate::error::BookError;
    use crate::model::Record;

    #[test]
    fn lists_phones() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice");
        record.add_phone("111");
        record.add_phone("222");
        book.add_record(record);

        let result = run(&book, &args(&["Alice"])).unwrap();
        assert_eq!(result.message_texts(), ["Phones of Alice: 111, 222"]);
    }

    #[test]
    fn contact_without_phones() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice"));

        let result = run(&book, &args(&["Alice"])).unwrap();
        assert_eq!(result.message_texts(), ["No phone found for Alice."]);
    }

    #[test]
    fn unknown_contact() {
        let result = run(&AddressBook::new(), &args(&["Bob"])).unwrap();
        assert_eq!(result.message_texts(), ["No contact found for Bob."]);
    }

    #[test]
    fn missing_name() {
        let err = run(&AddressBook::new(), &[]).unwrap_err();
        assert!(matches!(err, BookError::MissingArgument { usage: USAGE }));
    }
}
