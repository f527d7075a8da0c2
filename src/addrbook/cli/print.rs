use addrbook::birthdays::UpcomingBirthday;
use addrbook::commands::{CmdMessage, CmdResult, MessageLevel};
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub(super) fn print_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    for record in &result.listed_records {
        writeln!(out, "{}", record)?;
    }
    print_upcoming(out, &result.upcoming)?;
    print_messages(out, &result.messages)
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// One `name: YYYY.MM.DD` line per entry, dates aligned in a column.
fn print_upcoming<W: Write>(out: &mut W, upcoming: &[UpcomingBirthday]) -> io::Result<()> {
    let name_width = upcoming.iter().map(|u| u.name.width()).max().unwrap_or(0);
    for entry in upcoming {
        let padding = name_width.saturating_sub(entry.name.width());
        writeln!(
            out,
            "{}:{} {}",
            entry.name.bold(),
            " ".repeat(padding),
            entry.formatted_day()
        )?;
    }
    Ok(())
}
