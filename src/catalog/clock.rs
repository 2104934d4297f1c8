use chrono::{Days, Local, NaiveDate};
use parking_lot::RwLock;

/// Source of "today" for ingest and modification dates
pub trait Clock: Send + Sync {
  fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate {
    Local::now().date_naive()
  }
}

/// Settable clock for deterministic runs
#[derive(Debug)]
pub struct FixedClock {
  today: RwLock<NaiveDate>,
}

impl FixedClock {
  pub fn new(today: NaiveDate) -> Self {
    Self {
      today: RwLock::new(today),
    }
  }

  pub fn set(&self, today: NaiveDate) {
    *self.today.write() = today;
  }

  pub fn advance_days(&self, days: u64) {
    let mut today = self.today.write();
    if let Some(next) = today.checked_add_days(Days::new(days)) {
      *today = next;
    }
  }
}

impl Clock for FixedClock {
  fn today(&self) -> NaiveDate {
    *self.today.read()
  }
}
