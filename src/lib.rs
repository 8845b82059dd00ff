//! Contact Assistant - an interactive command-line contact book.
//!
//! Contacts (a name, phone numbers and an optional birthday) live in memory
//! for the lifetime of the process. The assistant answers one command per
//! input line and can list whose birthday is coming up in the next week.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: Contact records and the address book
//! - **clock**: Source of the current date
//! - **error**: Command and configuration error types
//! - **handlers**: Command handlers and dispatch
//! - **parser**: Input line tokenizing
//! - **repl**: The read-eval-print loop
//! - **config**: Configuration from environment variables

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod repl;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError, ErrorKind};
pub use handlers::{dispatch, CommandContext, Reply};
pub use models::{AddressBook, Record, UpcomingBirthday};
