use crate::birthdays::{upcoming_birthdays, SchedulerOptions};
use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

pub fn run(book: &AddressBook, today: NaiveDate, options: SchedulerOptions) -> Result<CmdResult> {
    let upcoming = upcoming_birthdays(book, today, options);
    if upcoming.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No upcoming birthdays.")));
    }
    Ok(CmdResult::default().with_upcoming(upcoming))
}
