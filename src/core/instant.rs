use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::error::{NavError, NavResult};

/// A wall-clock calendar moment in the display zone.
///
/// Months are zero-based (0 = January) to match the textual formats this
/// crate round-trips; chrono's one-based months stay an internal detail.
/// Construction from fields is second-granular, arithmetic is millisecond-
/// granular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(NaiveDateTime);

impl Instant {
    /// Builds an instant from calendar fields.
    ///
    /// Out-of-range fields roll over instead of failing: month 12 is
    /// January of the next year, day 0 the last day of the previous month,
    /// hour 25 the next morning. Decoded legacy date strings rely on this.
    pub fn from_fields(
        year: i32,
        month0: u32,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
    ) -> NavResult<Self> {
        let out_of_range =
            || NavError::DateOutOfRange(format!("{year}-{month0}-{day} {hour}:{minute}:{second}"));

        let date = NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|base| base.checked_add_months(Months::new(month0)))
            .and_then(|with_month| {
                let day_offset = day.checked_sub(1).and_then(Duration::try_days)?;
                with_month.checked_add_signed(day_offset)
            })
            .ok_or_else(out_of_range)?;

        let time_of_day = hour
            .checked_mul(3_600)
            .and_then(|h| minute.checked_mul(60).map(|m| (h, m)))
            .and_then(|(h, m)| h.checked_add(m))
            .and_then(|hm| hm.checked_add(second))
            .and_then(Duration::try_seconds)
            .ok_or_else(out_of_range)?;

        date.and_time(NaiveTime::MIN)
            .checked_add_signed(time_of_day)
            .map(Self)
            .ok_or_else(out_of_range)
    }

    /// Wraps a chrono datetime, truncating to whole seconds.
    #[must_use]
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        Self(datetime.with_nanosecond(0).unwrap_or(datetime))
    }

    pub fn from_epoch_millis(millis: i64) -> NavResult<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|resolved| Self(resolved.naive_utc()))
            .ok_or_else(|| NavError::DateOutOfRange(format!("{millis}ms since epoch")))
    }

    /// Milliseconds since the Unix epoch, reading the wall-clock fields as
    /// if they were UTC. Only differences and shifts of these values are
    /// ever used, so the fixed offset cancels out.
    #[must_use]
    pub fn epoch_millis(self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }

    pub fn shifted_by_millis(self, delta_ms: f64) -> NavResult<Self> {
        if !delta_ms.is_finite() {
            return Err(NavError::InvalidInput(
                "time shift must be finite".to_owned(),
            ));
        }

        self.epoch_millis()
            .checked_add(delta_ms as i64)
            .ok_or_else(|| NavError::DateOutOfRange(format!("shift by {delta_ms}ms")))
            .and_then(Self::from_epoch_millis)
    }

    pub fn minus_seconds(self, seconds: i64) -> NavResult<Self> {
        Duration::try_seconds(seconds)
            .and_then(|delta| self.0.checked_sub_signed(delta))
            .map(Self)
            .ok_or_else(|| NavError::DateOutOfRange(format!("{seconds}s before {}", self.0)))
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Zero-based month, 0 = January.
    #[must_use]
    pub fn month0(self) -> u32 {
        self.0.month0()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    #[must_use]
    pub fn second(self) -> u32 {
        self.0.second()
    }

    /// Zero-based day of week, Sunday first. Derived, never stored.
    #[must_use]
    pub fn weekday0(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }
}
