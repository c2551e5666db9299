// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Whole calendar days in a reference time zone.
//!
//! A [`CalendarDay`] carries no time of day.  It is produced by truncating
//! an instant to its local date in the reference zone, and shifted and
//! compared only in whole-day steps.  The zone is not stored: every
//! conversion back to instants takes it explicitly, and one evaluation uses
//! a single zone throughout.

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use std::fmt;

/// A date with no time-of-day component.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Wrap a naive date.
    pub const fn new(date: NaiveDate) -> Self {
        CalendarDay(date)
    }

    /// Build from year, month and day; `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDay)
    }

    /// Local calendar day of `instant` in `tz`.
    pub fn from_instant<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> Self {
        CalendarDay(instant.with_timezone(tz).date_naive())
    }

    /// The underlying date.
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1 through 12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Whether the day lies in January through June.
    pub fn in_first_half_of_year(&self) -> bool {
        self.month() <= 6
    }

    /// Shift by a signed number of whole days.
    pub fn add_days(&self, days: i64) -> Result<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        shifted.map(CalendarDay).ok_or(Error::DateOutOfRange)
    }

    /// Signed number of whole days from `earlier` to `self`.
    pub fn days_since(&self, earlier: &CalendarDay) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// First instant of this day in `tz`.
    ///
    /// When local midnight is skipped by a DST transition the first hour
    /// that exists is used.
    pub fn start_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        (0..24)
            .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .find_map(|time| tz.from_local_datetime(&self.0.and_time(time)).earliest())
            .map(|local| local.with_timezone(&Utc))
    }

    /// Last millisecond of this day in `tz`.
    pub fn end_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        let next = self.0.checked_add_days(Days::new(1))?;
        let next_start = CalendarDay(next).start_in(tz)?;
        Some(next_start - chrono::Duration::milliseconds(1))
    }

    /// Abbreviated month and day of month, e.g. `Jun 5`.
    pub fn label(&self) -> String {
        self.0.format("%b %-d").to_string()
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%b %-d"))
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        CalendarDay(date)
    }
}
