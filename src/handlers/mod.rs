//! Command handlers for the assistant.
//!
//! Each handler takes the command's argument tokens and the shared
//! [`CommandContext`], and returns a `CommandResult<String>`. [`dispatch`]
//! routes a keyword to its handler and passes every result through
//! [`render`], so callers only ever see a display string.

pub mod birthdays;
pub mod contacts;

use crate::clock::{Clock, SystemClock};
use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;
use tracing::{debug, warn};

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// A recognised command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next command.
    Continue(String),
    /// Print the message and stop.
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Reply::Continue(message) | Reply::Exit(message) => message,
        }
    }
}

/// State shared by every command for one session.
pub struct CommandContext {
    book: AddressBook,
    clock: Box<dyn Clock>,
}

impl CommandContext {
    /// Create a context with an empty book and the given clock.
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            book: AddressBook::new(),
            clock: Box::new(clock),
        }
    }

    /// Create a context that reads today's date from the system.
    pub fn with_system_clock() -> Self {
        Self::new(SystemClock)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }
}

/// Run the command named by `keyword` against `ctx`.
///
/// `keyword` is matched case-insensitively. Unknown keywords produce
/// [`INVALID_COMMAND`]. Handler failures are rendered, never propagated.
pub fn dispatch(ctx: &mut CommandContext, keyword: &str, args: &[String]) -> Reply {
    let command = match keyword.parse::<Command>() {
        Ok(command) => command,
        Err(e) => {
            debug!("{}", e);
            return Reply::Continue(INVALID_COMMAND.to_string());
        }
    };

    debug!("Dispatching {:?} with {} argument(s)", command, args.len());

    let CommandContext { book, clock } = ctx;
    let result = match command {
        Command::Exit => return Reply::Exit(FAREWELL.to_string()),
        Command::Hello => Ok(GREETING.to_string()),
        Command::All => Ok(contacts::show_all(book)),
        Command::Add => guarded(|| contacts::add_contact(args, book)),
        Command::Change => guarded(|| contacts::change_contact(args, book)),
        Command::Phone => guarded(|| contacts::show_phone(args, book)),
        Command::AddBirthday => guarded(|| birthdays::add_birthday(args, book)),
        Command::ShowBirthday => guarded(|| birthdays::show_birthday(args, book)),
        Command::Birthdays => guarded(|| birthdays::birthdays(book, clock.today())),
    };

    Reply::Continue(render(result))
}

/// Turn a handler result into the line shown to the user.
pub fn render(result: CommandResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(e) => {
            warn!(kind = ?e.kind(), "Command failed: {}", e);
            e.to_string()
        }
    }
}

/// Run a handler, converting a panic into `CommandError::Unknown`.
///
/// The process panic hook still runs first, so the standard
/// `thread 'main' panicked at ...` message reaches stderr. Only stdout
/// carries the rendered reply.
pub fn guarded<F>(handler: F) -> CommandResult<String>
where
    F: FnOnce() -> CommandResult<String>,
{
    panic::catch_unwind(AssertUnwindSafe(handler))
        .unwrap_or_else(|payload| Err(CommandError::Unknown(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected failure".to_string()
    }
}

/// Destructure `args` into exactly `N` tokens.
pub(crate) fn expect_args<const N: usize>(args: &[String]) -> CommandResult<[&str; N]> {
    if args.len() != N {
        return Err(CommandError::ArgumentCount {
            expected: N,
            got: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}
