//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// Display and parse format for birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile birthday regex")
});

/// A birthday stored as the raw `DD.MM.YYYY` string the user entered,
/// together with the calendar date it denotes.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let bday = Birthday::new("29.02.2020").unwrap();
/// assert_eq!(bday.date(), NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
/// assert!(Birthday::new("29.02.2021").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` unless the value is
    /// exactly two day digits, two month digits and four year digits
    /// separated by dots, and names a real calendar date from year 1 on.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();

        if !BIRTHDAY_REGEX.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            // There is no year 0 in the calendar.
            Ok(date) if date.year() >= 1 => Ok(Self { raw, date }),
            _ => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// The calendar date of this birthday.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The birthday exactly as it was entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let bday = Birthday::new("09.06.1990").unwrap();
        assert_eq!(bday.as_str(), "09.06.1990");
        assert_eq!(bday.date(), NaiveDate::from_ymd_opt(1990, 6, 9).unwrap());
    }

    #[test]
    fn test_birthday_leap_years() {
        assert!(Birthday::new("29.02.2020").is_ok());
        assert!(Birthday::new("29.02.2021").is_err());
        assert!(Birthday::new("29.02.2000").is_ok());
        assert!(Birthday::new("29.02.1900").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("30.02.2020").is_err());
        assert!(Birthday::new("01.13.2020").is_err());
        assert!(Birthday::new("00.01.2020").is_err());
        assert!(Birthday::new("31.04.2020").is_err());
        assert!(Birthday::new("01.01.0000").is_err());
        assert!(Birthday::new("01.01.0001").is_ok());
    }

    #[test]
    fn test_birthday_rejects_wrong_layout() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("9.6.1990").is_err());
        assert!(Birthday::new("1990-06-09").is_err());
        assert!(Birthday::new("09/06/1990").is_err());
        assert!(Birthday::new("09.06.90").is_err());
        assert!(Birthday::new(" 09.06.1990").is_err());
    }

    #[test]
    fn test_birthday_error_message() {
        let err = Birthday::new("31.02.2020").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn test_birthday_serializes_raw_string() {
        let bday = Birthday::new("01.01.2001").unwrap();
        assert_eq!(serde_json::to_string(&bday).unwrap(), "\"01.01.2001\"");
    }
}
