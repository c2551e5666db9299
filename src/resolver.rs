// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Anchor days: the local calendar day of a seasonal event.

use crate::calendar::CalendarDay;
use crate::error::Result;
use crate::event::EventType;
use crate::seasons::{MeeusSeasons, SeasonalEphemeris};
use chrono::TimeZone;
use log::trace;

/// Resolves `(event, year)` to the calendar day of the event in a pinned
/// reference zone.
#[derive(Debug, Clone)]
pub struct EventDateResolver<Tz: TimeZone, E = MeeusSeasons> {
    ephemeris: E,
    tz: Tz,
}

impl<Tz: TimeZone> EventDateResolver<Tz, MeeusSeasons> {
    /// Resolver backed by [`MeeusSeasons`].
    pub fn new(tz: Tz) -> Self {
        Self::with_ephemeris(MeeusSeasons, tz)
    }
}

impl<Tz: TimeZone, E: SeasonalEphemeris> EventDateResolver<Tz, E> {
    /// Resolver backed by any seasonal ephemeris.
    pub fn with_ephemeris(ephemeris: E, tz: Tz) -> Self {
        EventDateResolver { ephemeris, tz }
    }

    /// Reference zone used for day truncation.
    pub fn time_zone(&self) -> &Tz {
        &self.tz
    }

    /// Calendar day on which `event` happens in `year`.
    ///
    /// Ephemeris failures propagate unchanged.
    pub fn resolve(&self, event: EventType, year: i32) -> Result<CalendarDay> {
        let instant = self.ephemeris.seasons(year)?.instant(event);
        let day = CalendarDay::from_instant(instant, &self.tz);
        trace!("{event} {year} at {instant} -> {}", day.date());
        Ok(day)
    }
}
