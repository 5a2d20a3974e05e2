//! Delivery cutoff
//!
//! Orders are delivered on the next working day (Monday to Friday, no
//! holiday calendar). Ordering closes at the cutoff time on the calendar day
//! before delivery, in the caller's time zone.

use chrono::{DateTime, Datelike, Days, LocalResult, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Weekday};

use crate::core::{AppError, AppResult};

/// Cutoff used when none is configured
pub fn default_cutoff() -> NaiveTime {
    NaiveTime::from_hms_opt(11, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Next Monday-to-Friday day strictly after `today`
pub fn next_working_day(today: NaiveDate) -> NaiveDate {
    let next = today + Days::new(1);
    match next.weekday() {
        Weekday::Sat => next + Days::new(2),
        Weekday::Sun => next + Days::new(1),
        _ => next,
    }
}

/// Instant ordering closes for `delivery_date`: the day before, at `cutoff`.
///
/// A wall time repeated by a DST fold takes the later instant. One skipped
/// by a DST gap is pushed forward by the length of the gap.
pub fn cutoff_datetime<Tz: TimeZone>(cutoff: NaiveTime, delivery_date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let naive = (delivery_date - Days::new(1)).and_time(cutoff);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(at) => at,
        LocalResult::Ambiguous(_, later) => later,
        LocalResult::None => {
            // offset in force before the gap opened
            let before = tz.offset_from_utc_datetime(&(naive - TimeDelta::days(1))).fix();
            let utc = naive - TimeDelta::seconds(before.local_minus_utc().into());
            tz.from_utc_datetime(&utc)
        }
    }
}

/// Whether an order placed at `now` still makes the next delivery. Inclusive
/// of the cutoff instant.
pub fn can_order<Tz: TimeZone>(now: &DateTime<Tz>, cutoff: NaiveTime) -> bool {
    let delivery = next_working_day(now.date_naive());
    *now <= cutoff_datetime(cutoff, delivery, &now.timezone())
}

/// Parse a 24-hour `HH:MM` or `HH:MM:SS` cutoff
pub fn parse_cutoff_time(raw: &str) -> AppResult<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| AppError::Config(format!("invalid cutoff time {raw:?}, expected HH:MM")))
}

/// `Monday 3 March 2025`
pub fn format_delivery_date(date: NaiveDate) -> String {
    date.format("%A %-d %B %Y").to_string()
}

/// Delivery day and cutoff as seen at a given instant
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryWindow<Tz: TimeZone> {
    pub delivery_date: NaiveDate,
    pub cutoff_at: DateTime<Tz>,
    pub is_open: bool,
}

impl<Tz: TimeZone> DeliveryWindow<Tz> {
    pub fn for_now(now: &DateTime<Tz>, cutoff: NaiveTime) -> Self {
        let delivery_date = next_working_day(now.date_naive());
        let cutoff_at = cutoff_datetime(cutoff, delivery_date, &now.timezone());
        Self {
            delivery_date,
            is_open: *now <= cutoff_at,
            cutoff_at,
        }
    }

    pub fn delivery_label(&self) -> String {
        format_delivery_date(self.delivery_date)
    }

    /// Error describing this window once it has closed
    pub fn closed_error(&self) -> AppError {
        AppError::OrderingClosed {
            delivery_date: self.delivery_date,
            cutoff: self.cutoff_at.naive_local().format("%a %H:%M").to_string(),
        }
    }
}
