use crate::book::AddressBook;
use crate::commands::{at_least, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

pub const USAGE: &str = "add [name] [phone]";

pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = at_least(args, 2, USAGE)?;
    let (name, phone) = (&args[0], &args[1]);

    let message = match book.find_record_mut(name) {
        Some(record) => {
            record.add_phone(phone.as_str());
            "Contact updated."
        }
        None => {
            let mut record = Record::new(name.as_str());
            record.add_phone(phone.as_str());
            book.add_record(record);
            "Contact added"
        }
    };

    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::args;
    use crate::error::BookError;
    use crate::model::Phone;

    #[test]
    fn adds_new_contact() {
        let mut book = AddressBook::new();
        let result = run(&mut book, &args(&["Alice", "0501234567"])).unwrap();

        assert_eq!(result.message_texts(), ["Contact added"]);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn second_add_appends_phone() {
        let mut book = AddressBook::new();
        run(&mut book, &args(&["Alice", "0501234567"])).unwrap();
        let result = run(&mut book, &args(&["Alice", "0509999999"])).unwrap();

        assert_eq!(result.message_texts(), ["Contact updated."]);
        assert_eq!(book.len(), 1);
        let phones: Vec<_> = book
            .find_record("Alice")
            .unwrap()
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect();
        assert_eq!(phones, ["0501234567", "0509999999"]);
    }

    #[test]
    fn missing_phone_is_an_error() {
        let mut book = AddressBook::new();
        let err = run(&mut book, &args(&["Alice"])).unwrap_err();

        assert!(matches!(err, BookError::MissingArgument { usage: USAGE }));
        assert!(book.is_empty());
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let mut book = AddressBook::new();
        run(&mut book, &args(&["Alice", "111", "222"])).unwrap();
        assert_eq!(book.find_record("Alice").unwrap().phones().len(), 1);
    }
}
