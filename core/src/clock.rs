// orderdesk/src/clock.rs

//! Time sources for stores that stamp records on write.

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use parking_lot::Mutex;

pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
  pub fn new(start: DateTime<Utc>) -> Self {
    ManualClock(Mutex::new(start))
  }

  pub fn set(&self, at: DateTime<Utc>) {
    *self.0.lock() = at;
  }

  pub fn advance(&self, by: TimeDelta) {
    let mut guard = self.0.lock();
    *guard += by;
  }
}

impl Clock for ManualClock {
  fn now(&self) -> DateTime<Utc> {
    *self.0.lock()
  }
}

/// Creation timestamps are kept at whole-second precision, the resolution of
/// the wire format.
pub fn truncate_to_seconds(at: DateTime<Utc>) -> DateTime<Utc> {
  at.trunc_subsecs(0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{TimeZone, Timelike};

  #[test]
  fn manual_clock_moves_only_when_told() {
    let start = Utc.with_ymd_and_hms(2020, 11, 9, 0, 0, 0).unwrap();
    let clock = ManualClock::new(start);
    assert_eq!(clock.now(), start);
    clock.advance(TimeDelta::minutes(30));
    assert_eq!(clock.now(), Utc.with_ymd_and_hms(2020, 11, 9, 0, 30, 0).unwrap());
    clock.set(start);
    assert_eq!(clock.now(), start);
  }

  #[test]
  fn truncation_drops_fractional_seconds() {
    let at = Utc.with_ymd_and_hms(2020, 11, 9, 0, 0, 5).unwrap() + TimeDelta::milliseconds(750);
    let truncated = truncate_to_seconds(at);
    assert_eq!(truncated.second(), 5);
    assert_eq!(truncated.nanosecond(), 0);
  }
}
