//! In-memory address book and the upcoming-birthday query.

use super::record::Record;
use crate::domain::birthday::DATE_FORMAT;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Default look-ahead for upcoming birthdays, in days.
pub const DEFAULT_BIRTHDAY_WINDOW: u32 = 7;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Congratulation date as `DD.MM.YYYY`, moved off weekends
    pub birthday: String,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.birthday)
    }
}

/// All records, keyed by name.
///
/// Iteration follows the order in which each name was first added;
/// overwriting a record keeps its original slot.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, silently replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        debug!("Storing record for {}", key);
        self.records.insert(key, record);
    }

    /// Exact-match lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record if present. Remaining records keep their order.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            debug!("Deleted record for {}", name);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose next birthday is between `today` and
    /// `today + window_days`, both inclusive.
    ///
    /// Window membership is decided on the real occurrence date. Only
    /// afterwards is a Saturday or Sunday occurrence moved to the following
    /// Monday for the reported date. A Feb 29 birthday occurs on Feb 28 in
    /// common years.
    pub fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();
                let occurrence = next_occurrence(birthday, today)?;

                let days_until = (occurrence - today).num_days();
                if !(0..=i64::from(window_days)).contains(&days_until) {
                    return None;
                }

                let congratulation = adjust_for_weekend(occurrence)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    birthday: congratulation.format(DATE_FORMAT).to_string(),
                })
            })
            .collect()
    }
}

/// The birthday's month/day in `year`.
fn occurrence_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        // Only Feb 29 can be missing from a year.
        NaiveDate::from_ymd_opt(year, 2, 28)
    })
}

/// This year's occurrence, or next year's if this year's already passed.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birthday, today.year())?;
    if this_year < today {
        occurrence_in(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move Saturday and Sunday to the following Monday.
pub fn adjust_for_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "Address book is empty");
        }
        let lines: Vec<String> = self.records().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
