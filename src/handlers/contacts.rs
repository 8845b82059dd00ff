//! Handlers for adding, editing and listing contacts.

use super::expect_args;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::debug;

/// `add <name> <phone>`
///
/// Creates the contact if needed, then appends the phone. A new contact is
/// stored before its phone is validated, so an invalid phone on first add
/// still leaves a phone-less contact in the book.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = expect_args::<2>(args)?;

    let message = if book.find(name).is_none() {
        book.add_record(Record::new(name)?);
        "Contact added."
    } else {
        "Contact updated."
    };

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.add_phone(phone)?;
    debug!("Added phone to {}", name);

    Ok(message.to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = expect_args::<3>(args)?;

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.edit_phone(old_phone, new_phone)?;

    Ok("Phone updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args::<1>(args)?;

    match book.find(name) {
        Some(record) if !record.phones().is_empty() => Ok(record.phones_display()),
        _ => Ok("No phones found for this contact.".to_string()),
    }
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    book.to_string()
}
