//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{CommandError, CommandResult};
use serde::Serialize;
use std::fmt;

/// A contact: a name, any number of phones and an optional birthday.
///
/// The name is fixed at construction. Phones keep their insertion order
/// and duplicates are allowed. Setting a birthday overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Does nothing if absent.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.position_of(phone) {
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old_phone`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `CommandError::PhoneNotFound` if no phone equals `old_phone`
    /// - `CommandError::Validation` if `new_phone` is invalid; the record is
    ///   left untouched in that case
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> CommandResult<()> {
        let index = self
            .position_of(old_phone)
            .ok_or_else(|| CommandError::PhoneNotFound(old_phone.to_string()))?;
        self.phones[index] = Phone::new(new_phone)?;
        Ok(())
    }

    /// Look up a phone by exact value.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Phones joined by `"; "` in stored order.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
