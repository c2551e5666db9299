// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the astro filter.

use thiserror::Error;

/// Main error type for event resolution, evaluation and node configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The configured event name is not one of the four seasonal events.
    #[error("unknown event type {0:?} (expected march_equinox, june_solstice, september_equinox or december_solstice)")]
    UnknownEventType(String),

    /// The configured reference zone is not a known IANA name.
    #[error("unknown time zone {0:?}")]
    UnknownTimeZone(String),

    /// The ephemeris cannot compute seasons for this year.
    #[error("year {year} is outside the supported ephemeris range (-1000..=3000)")]
    YearOutOfRange { year: i32 },

    /// A computed event instant cannot be represented as a UTC timestamp.
    #[error("event instant JDE {jde} cannot be represented as a UTC timestamp")]
    InstantOutOfRange { jde: f64 },

    /// Calendar-day arithmetic left chrono's representable range.
    #[error("calendar day arithmetic out of range")]
    DateOutOfRange,
}

/// Result type for astro filter operations.
pub type Result<T> = std::result::Result<T, Error>;
