// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Inclusive day windows around an anchor day.

use crate::calendar::CalendarDay;
use crate::error::Result;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

/// Inclusive range of calendar days.
///
/// The lower bound stands for the start of its day and the upper bound for
/// the end of its day, so every instant on either boundary day is inside.
/// Bounds are stored as given: a window whose start follows its end is
/// empty, and still renders its bounds in the configured order.
///
/// # Examples
///
/// ```
/// use astro_filter::{CalendarDay, Window};
///
/// let anchor = CalendarDay::from_ymd(2025, 6, 20).unwrap();
/// let window = Window::around(anchor, -5, 7).unwrap();
///
/// assert_eq!(window.to_string(), "Jun 15 to Jun 27");
/// assert!(window.contains(&anchor));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Window {
    pub start: CalendarDay,
    pub end: CalendarDay,
}

impl Window {
    /// Creates a window between two days, both included.
    pub fn new(start: CalendarDay, end: CalendarDay) -> Self {
        Window { start, end }
    }

    /// Window `[anchor + start_offset, anchor + end_offset]`.
    pub fn around(anchor: CalendarDay, start_offset: i64, end_offset: i64) -> Result<Self> {
        Ok(Window::new(
            anchor.add_days(start_offset)?,
            anchor.add_days(end_offset)?,
        ))
    }

    /// Whether `day` lies within the window, bounds included.
    pub fn contains(&self, day: &CalendarDay) -> bool {
        self.start <= *day && *day <= self.end
    }

    /// True when the start follows the end, so no day is contained.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days covered; zero for an empty window.
    pub fn len_days(&self) -> i64 {
        (self.end.days_since(&self.start) + 1).max(0)
    }

    /// Start-of-first-day and end-of-last-day instants in `tz`.
    pub fn instants<Tz: TimeZone>(&self, tz: &Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.start.start_in(tz)?, self.end.end_in(tz)?))
    }

    /// Human-readable `MMM D to MMM D` rendering.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
