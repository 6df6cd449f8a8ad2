// ABOUTME: Day clock abstraction deriving the canonical "today" from wall-clock time
// ABOUTME: SystemClock for production, FixedClock for deterministic tests

use std::sync::RwLock;

use chrono::{DateTime, Days, TimeZone, Utc};

use crate::day::Day;

/// Source of the current instant.
///
/// `today` is the UTC calendar date of `now`. Callers should read it once per
/// request and pass the value along, so a rollover and the query that follows
/// it agree on the day.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> Day {
        Day::of(self.now())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    instant: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: RwLock::new(instant),
        }
    }

    /// Clock pinned to noon UTC on the given day.
    pub fn at_day(day: Day) -> Self {
        Self::new(noon(day))
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self
            .instant
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = instant;
    }

    pub fn set_day(&self, day: Day) {
        self.set(noon(day));
    }

    pub fn advance_days(&self, days: u64) {
        let mut guard = self
            .instant
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(next) = guard.checked_add_days(Days::new(days)) {
            *guard = next;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self
            .instant
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn noon(day: Day) -> DateTime<Utc> {
    let naive = day.date().and_hms_opt(12, 0, 0).unwrap_or_default();
    Utc.from_utc_datetime(&naive)
}
