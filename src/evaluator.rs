// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Range evaluation
//!
//! Decides whether a test instant falls inside the day window around a
//! seasonal event, and how far it is from that event.
//!
//! The anchor is resolved in the test day's own year.  A window anchored to
//! December can run past New Year, so for `december_solstice` and test days
//! in January–June a second window anchored to the previous year's solstice
//! is tried.  It is reported only when it matches; otherwise the
//! current-year window and its day difference stand.
//!
//! ```rust
//! use astro_filter::{EventType, RangeEvaluator};
//! use chrono::{TimeZone, Utc};
//! use chrono_tz::America::New_York;
//!
//! let evaluator = RangeEvaluator::new(New_York);
//! let at = New_York.with_ymd_and_hms(2026, 1, 12, 9, 0, 0).unwrap().with_timezone(&Utc);
//! let result = evaluator
//!     .evaluate(EventType::DecemberSolstice, -5, 37, at)
//!     .unwrap();
//!
//! assert!(result.in_range);
//! assert_eq!(result.days_diff, 22);
//! assert_eq!(result.range_label, "Dec 16 to Jan 27");
//! ```

use crate::calendar::CalendarDay;
use crate::error::Result;
use crate::event::EventType;
use crate::resolver::EventDateResolver;
use crate::seasons::{MeeusSeasons, SeasonalEphemeris};
use crate::window::Window;
use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use serde::Serialize;

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// The test day lies inside the reported window.
    pub in_range: bool,
    /// Test day minus anchor day, in whole days.
    pub days_diff: i64,
    /// `MMM D to MMM D` rendering of the reported window.
    pub range_label: String,
}

/// Window and containment for one anchor year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    window: Window,
    in_range: bool,
    days_diff: i64,
}

impl Candidate {
    fn into_result(self) -> EvaluationResult {
        EvaluationResult {
            in_range: self.in_range,
            days_diff: self.days_diff,
            range_label: self.window.label(),
        }
    }
}

/// Evaluates test instants against seasonal day windows.
#[derive(Debug, Clone)]
pub struct RangeEvaluator<Tz: TimeZone, E = MeeusSeasons> {
    resolver: EventDateResolver<Tz, E>,
}

impl<Tz: TimeZone> RangeEvaluator<Tz, MeeusSeasons> {
    /// Evaluator backed by [`MeeusSeasons`] in reference zone `tz`.
    pub fn new(tz: Tz) -> Self {
        RangeEvaluator {
            resolver: EventDateResolver::new(tz),
        }
    }
}

impl<Tz: TimeZone, E: SeasonalEphemeris> RangeEvaluator<Tz, E> {
    /// Evaluator over an existing resolver.
    pub fn with_resolver(resolver: EventDateResolver<Tz, E>) -> Self {
        RangeEvaluator { resolver }
    }

    pub fn resolver(&self) -> &EventDateResolver<Tz, E> {
        &self.resolver
    }

    /// Evaluate `test_instant` against the window
    /// `[anchor + start_offset, anchor + end_offset]` of `event`.
    ///
    /// Offsets are applied literally; an inverted window never matches.
    pub fn evaluate(
        &self,
        event: EventType,
        start_offset: i64,
        end_offset: i64,
        test_instant: DateTime<Utc>,
    ) -> Result<EvaluationResult> {
        let test_day = CalendarDay::from_instant(test_instant, self.resolver.time_zone());
        self.evaluate_day(event, start_offset, end_offset, test_day)
    }

    /// Same as [`evaluate`](Self::evaluate) for an already-truncated day.
    pub fn evaluate_day(
        &self,
        event: EventType,
        start_offset: i64,
        end_offset: i64,
        test_day: CalendarDay,
    ) -> Result<EvaluationResult> {
        let year = test_day.year();
        let primary = self.candidate(event, year, start_offset, end_offset, &test_day)?;
        if primary.in_range {
            debug!("{test_day} in {event} window {}", primary.window);
            return Ok(primary.into_result());
        }

        if event.can_straddle_year_end() && test_day.in_first_half_of_year() {
            let previous =
                self.candidate(event, year - 1, start_offset, end_offset, &test_day)?;
            if previous.in_range {
                debug!(
                    "{test_day} in {event} window {} anchored to {}",
                    previous.window,
                    year - 1
                );
                return Ok(previous.into_result());
            }
        }

        debug!("{test_day} outside {event} window {}", primary.window);
        Ok(primary.into_result())
    }

    fn candidate(
        &self,
        event: EventType,
        year: i32,
        start_offset: i64,
        end_offset: i64,
        test_day: &CalendarDay,
    ) -> Result<Candidate> {
        let anchor = self.resolver.resolve(event, year)?;
        let window = Window::around(anchor, start_offset, end_offset)?;
        Ok(Candidate {
            window,
            in_range: window.contains(test_day),
            days_diff: test_day.days_since(&anchor),
        })
    }
}
