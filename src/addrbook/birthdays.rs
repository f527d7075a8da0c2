//! # Birthday Scheduler
//!
//! Computes which contacts should be congratulated soon.
//!
//! Each stored birthday is moved into `today`'s year and kept when it falls
//! `0..=window_days` days from `today`. A birthday landing on a weekend is
//! congratulated on the following Monday; that shift can push the
//! congratulation day past the window and is not re-filtered.
//!
//! By default no rollover happens: a birthday already passed this year is
//! simply out of range, even when its next occurrence is a few days away in
//! January. [`SchedulerOptions::year_rollover`] opts into moving such dates
//! to next year.
//!
//! A 29 February birthday is observed on 28 February in non-leap years.
//!
//! The output follows the book's insertion order, not calendar order.

use crate::book::AddressBook;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerOptions {
    pub window_days: i64,
    pub year_rollover: bool,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            year_rollover: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_day: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation day as `YYYY.MM.DD`.
    pub fn formatted_day(&self) -> String {
        self.congratulation_day
            .format(CONGRATULATION_FORMAT)
            .to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_day())
    }
}

pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    options: SchedulerOptions,
) -> Vec<UpcomingBirthday> {
    let mut upcoming = Vec::new();

    for record in book.records() {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Ok(born) = birthday.date() else {
            continue;
        };

        let mut birthday_date = in_year(born, today.year());
        if options.year_rollover && birthday_date < today {
            birthday_date = in_year(born, today.year() + 1);
        }

        let diff_days = (birthday_date - today).num_days();
        if !(0..=options.window_days).contains(&diff_days) {
            continue;
        }

        upcoming.push(UpcomingBirthday {
            name: record.name().as_str().to_string(),
            congratulation_day: shift_weekend(birthday_date),
        });
    }

    upcoming
}

/// Moves `date` into `year`, mapping 29 February to the 28th when needed.
fn in_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}

/// Saturday and Sunday move forward to Monday.
fn shift_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => {
            let weekday = i64::from(date.weekday().num_days_from_monday());
            date + Duration::days(7 - weekday)
        }
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book_with(entries: &[(&str, Option<&str>)]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, birthday) in entries {
            let mut record = Record::new(*name);
            if let Some(b) = birthday {
                record.add_birthday(b).unwrap();
            }
            book.add_record(record);
        }
        book
    }

    fn run(book: &AddressBook, today: NaiveDate) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(book, today, SchedulerOptions::default())
    }

    #[test]
    fn saturday_moves_to_monday() {
        // 2024-03-08 is a Friday, 2024-03-09 a Saturday.
        let book = book_with(&[("Alice", Some("09.03.1990"))]);
        let result = run(&book, date(2024, 3, 8));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Alice");
        assert_eq!(result[0].congratulation_day, date(2024, 3, 11));
        assert_eq!(result[0].formatted_day(), "2024.03.11");
    }

    #[test]
    fn sunday_moves_to_monday() {
        let book = book_with(&[("Bob", Some("10.03.1985"))]);
        let result = run(&book, date(2024, 3, 8));
        assert_eq!(result[0].congratulation_day, date(2024, 3, 11));
    }

    #[test]
    fn weekday_is_unchanged() {
        let book = book_with(&[("Carol", Some("12.03.2001"))]);
        let result = run(&book, date(2024, 3, 8));
        assert_eq!(result[0].congratulation_day, date(2024, 3, 12));
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let book = book_with(&[
            ("Today", Some("06.03.1990")),
            ("Seven", Some("13.03.1990")),
            ("Eight", Some("14.03.1990")),
            ("Yesterday", Some("05.03.1990")),
        ]);
        // 2024-03-06 is a Wednesday.
        let result = run(&book, date(2024, 3, 6));

        let names: Vec<_> = result.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Today", "Seven"]);
    }

    #[test]
    fn shift_may_leave_the_window() {
        // 2024-03-09 is a Saturday, seven days after 2024-03-02.
        let book = book_with(&[("Late", Some("09.03.2000"))]);
        let result = run(&book, date(2024, 3, 2));
        assert_eq!(result[0].congratulation_day, date(2024, 3, 11));
    }

    #[test]
    fn records_without_birthday_are_skipped() {
        let book = book_with(&[("NoBirthday", None), ("Alice", Some("09.03.1990"))]);
        let result = run(&book, date(2024, 3, 8));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Alice");
    }

    #[test]
    fn output_follows_insertion_order() {
        let book = book_with(&[("Later", Some("14.03.1990")), ("Sooner", Some("12.03.1990"))]);
        let result = run(&book, date(2024, 3, 11));
        let names: Vec<_> = result.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Later", "Sooner"]);
    }

    #[test]
    fn no_rollover_by_default() {
        let book = book_with(&[("NewYear", Some("02.01.1990"))]);
        assert!(run(&book, date(2024, 12, 30)).is_empty());
    }

    #[test]
    fn rollover_reaches_into_next_year() {
        let book = book_with(&[("NewYear", Some("02.01.1990"))]);
        let options = SchedulerOptions {
            year_rollover: true,
            ..SchedulerOptions::default()
        };
        let result = upcoming_birthdays(&book, date(2024, 12, 30), options);
        // 2025-01-02 is a Thursday.
        assert_eq!(result[0].congratulation_day, date(2025, 1, 2));
    }

    #[test]
    fn leap_day_observed_on_feb_28() {
        let book = book_with(&[("Leap", Some("29.02.2000"))]);
        // 2023-02-28 is a Tuesday.
        let result = run(&book, date(2023, 2, 25));
        assert_eq!(result[0].congratulation_day, date(2023, 2, 28));
    }

    #[test]
    fn custom_window() {
        let book = book_with(&[("Alice", Some("12.03.1990"))]);
        let options = SchedulerOptions {
            window_days: 2,
            ..SchedulerOptions::default()
        };
        assert!(upcoming_birthdays(&book, date(2024, 3, 8), options).is_empty());
    }

    #[test]
    fn display_format() {
        let upcoming = UpcomingBirthday {
            name: "Alice".into(),
            congratulation_day: date(2024, 3, 11),
        };
        assert_eq!(upcoming.to_string(), "Alice: 2024.03.11");
    }
}
