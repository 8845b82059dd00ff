//! Data models for the contact book.
//!
//! This module contains the contact record and the address book that owns
//! all records for the lifetime of the process.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW};
pub use record::Record;
