// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The four seasonal events a filter can be anchored to.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Equinox or solstice selector.
///
/// The string forms (`march_equinox`, `june_solstice`, ...) are the names
/// used in node configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    MarchEquinox,
    #[default]
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl EventType {
    /// All events in calendar order.
    pub const ALL: [EventType; 4] = [
        EventType::MarchEquinox,
        EventType::JuneSolstice,
        EventType::SeptemberEquinox,
        EventType::DecemberSolstice,
    ];

    /// Configuration name of the event.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventType::MarchEquinox => "march_equinox",
            EventType::JuneSolstice => "june_solstice",
            EventType::SeptemberEquinox => "september_equinox",
            EventType::DecemberSolstice => "december_solstice",
        }
    }

    /// Whether a window anchored to this event in year `Y - 1` can still be
    /// open during the first half of year `Y`.
    pub const fn can_straddle_year_end(&self) -> bool {
        matches!(self, EventType::DecemberSolstice)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EventType::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| Error::UnknownEventType(s.to_string()))
    }
}
