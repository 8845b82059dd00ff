use chrono::NaiveDate;
use contact_assistant::Clock;
use std::cell::Cell;
use std::rc::Rc;

/// Mock clock for testing.
///
/// Reports a fixed date that tests can move forward. Clones share the same
/// date, so a test can keep a handle after giving the clock to a context.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockClock {
    today: Rc<Cell<NaiveDate>>,
    calls: Rc<Cell<usize>>,
}

#[allow(dead_code)]
impl MockClock {
    /// Create a clock fixed at the given date.
    pub fn at(year: i32, month: u32, day: u32) -> Self {
        let today = NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date");
        Self {
            today: Rc::new(Cell::new(today)),
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Move the clock to another date.
    pub fn set(&self, year: i32, month: u32, day: u32) {
        let today = NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date");
        self.today.set(today);
    }

    /// Number of times `today()` was read.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl Clock for MockClock {
    fn today(&self) -> NaiveDate {
        self.calls.set(self.calls.get() + 1);
        self.today.get()
    }
}
