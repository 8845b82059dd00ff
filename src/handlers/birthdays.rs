//! Handlers for birthdays.

use super::expect_args;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, DEFAULT_BIRTHDAY_WINDOW};
use chrono::NaiveDate;

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = expect_args::<2>(args)?;

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.add_birthday(birthday)?;

    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args::<1>(args)?;

    match book.find(name).and_then(|record| record.birthday()) {
        Some(birthday) => Ok(birthday.as_str().to_string()),
        None => Ok("No birthday set.".to_string()),
    }
}

/// `birthdays`: contacts to congratulate within the next week of `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> CommandResult<String> {
    let upcoming = book.get_upcoming_birthdays(today, DEFAULT_BIRTHDAY_WINDOW);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }

    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
