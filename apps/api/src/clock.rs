use chrono::{NaiveDate, Utc};

/// Source of "today" for the daily rollover. The canonical game day is the
/// UTC calendar date; every request on the same UTC day sees the same player.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock: the day rolls over at midnight UTC.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
