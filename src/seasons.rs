// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Equinoxes and solstices
//!
//! The ephemeris side of the filter: given a year, when do the four
//! seasonal events happen?  [`SeasonalEphemeris`] is the seam; any provider
//! returning UTC instants can be plugged into the
//! [`EventDateResolver`](crate::EventDateResolver).
//!
//! [`MeeusSeasons`] implements Chapter 27 of *Jean Meeus, Astronomical
//! Algorithms (2nd ed. 1998)*: a quartic in the year gives the mean event
//! (JDE₀), and a 24-term periodic series corrects it to the true event.
//! The result is in dynamical time and is converted to UTC through the
//! [`UT`](crate::UT) scale.  Errors stay within about a minute for
//! 1951–2050.
//!
//! ## Quick Example
//! ```rust
//! use astro_filter::{EventType, MeeusSeasons, SeasonalEphemeris};
//! use chrono::Datelike;
//!
//! let seasons = MeeusSeasons.seasons(2025).unwrap();
//! let solstice = seasons.instant(EventType::JuneSolstice);
//! assert_eq!((solstice.month(), solstice.day()), (6, 21));
//! ```

use crate::error::{Error, Result};
use crate::event::EventType;
use crate::instant::Time;
use crate::scales::JDE;
use chrono::{DateTime, Utc};
use log::trace;

/// The four seasonal instants of one calendar year.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Seasons {
    pub year: i32,
    pub march_equinox: DateTime<Utc>,
    pub june_solstice: DateTime<Utc>,
    pub september_equinox: DateTime<Utc>,
    pub december_solstice: DateTime<Utc>,
}

impl Seasons {
    /// Instant of `event` in this year.
    pub fn instant(&self, event: EventType) -> DateTime<Utc> {
        match event {
            EventType::MarchEquinox => self.march_equinox,
            EventType::JuneSolstice => self.june_solstice,
            EventType::SeptemberEquinox => self.september_equinox,
            EventType::DecemberSolstice => self.december_solstice,
        }
    }
}

/// A provider of yearly equinox and solstice instants.
pub trait SeasonalEphemeris {
    /// Compute all four seasonal events of `year`.
    fn seasons(&self, year: i32) -> Result<Seasons>;
}

impl<E: SeasonalEphemeris + ?Sized> SeasonalEphemeris for &E {
    fn seasons(&self, year: i32) -> Result<Seasons> {
        (**self).seasons(year)
    }
}

/// Meeus' series for equinoxes and solstices.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MeeusSeasons;

impl MeeusSeasons {
    /// Earliest supported year.
    pub const MIN_YEAR: i32 = -1000;
    /// Latest supported year.
    pub const MAX_YEAR: i32 = 3000;

    /// True (corrected) JDE of `event` in `year`.
    pub fn event_jde(event: EventType, year: i32) -> Result<Time<JDE>> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::YearOutOfRange { year });
        }
        let jde0 = mean_event_jde(event, year);
        let t = (jde0 - J2000).value() / JULIAN_CENTURY_D;
        let w = (35_999.373 * t - 2.47).to_radians();
        let delta_lambda = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();
        let s: f64 = PERIODIC_TERMS
            .iter()
            .map(|&(a, b, c)| a * (b + c * t).to_radians().cos())
            .sum();
        Ok(jde0 + qtty::Days::new(0.000_01 * s / delta_lambda))
    }

    fn event_utc(event: EventType, year: i32) -> Result<DateTime<Utc>> {
        let jde = Self::event_jde(event, year)?;
        jde.to_utc()
            .ok_or(Error::InstantOutOfRange { jde: jde.value() })
    }
}

impl SeasonalEphemeris for MeeusSeasons {
    fn seasons(&self, year: i32) -> Result<Seasons> {
        let seasons = Seasons {
            year,
            march_equinox: Self::event_utc(EventType::MarchEquinox, year)?,
            june_solstice: Self::event_utc(EventType::JuneSolstice, year)?,
            september_equinox: Self::event_utc(EventType::SeptemberEquinox, year)?,
            december_solstice: Self::event_utc(EventType::DecemberSolstice, year)?,
        };
        trace!("seasons {year}: {seasons:?}");
        Ok(seasons)
    }
}

const J2000: Time<JDE> = Time::new(2_451_545.0);
const JULIAN_CENTURY_D: f64 = 36_525.0;

/// Mean-event polynomial coefficients, years −1000..+1000 (table 27.A),
/// in millennia from year 0.
#[rustfmt::skip]
const MEAN_BEFORE_1000: [[f64; 5]; 4] = [
    [1_721_139.291_89, 365_242.137_40,  0.061_34,  0.001_11, -0.000_71],
    [1_721_233.254_01, 365_241.725_62, -0.053_23,  0.009_07,  0.000_25],
    [1_721_325.704_55, 365_242.495_58, -0.116_77, -0.002_97,  0.000_74],
    [1_721_414.399_87, 365_242.882_57, -0.007_69, -0.009_33, -0.000_06],
];

/// Mean-event polynomial coefficients, years +1000..+3000 (table 27.B),
/// in millennia from 2000.
#[rustfmt::skip]
const MEAN_AFTER_1000: [[f64; 5]; 4] = [
    [2_451_623.809_84, 365_242.374_04,  0.051_69, -0.004_11, -0.000_57],
    [2_451_716.567_67, 365_241.626_03,  0.003_25,  0.008_88, -0.000_30],
    [2_451_810.217_15, 365_242.017_67, -0.115_75,  0.003_37,  0.000_78],
    [2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23,  0.000_32],
];

/// Periodic terms `(A, B°, C°/century)` of table 27.C.
#[rustfmt::skip]
const PERIODIC_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96,   1_934.136), (203.0, 337.23,  32_964.467),
    (199.0, 342.08,      20.186), (182.0,  27.85, 445_267.112),
    (156.0,  73.14,  45_036.886), (136.0, 171.52,  22_518.443),
    ( 77.0, 222.54,  65_928.934), ( 74.0, 296.72,   3_034.906),
    ( 70.0, 243.58,   9_037.513), ( 58.0, 119.81,  33_718.147),
    ( 52.0, 297.17,     150.678), ( 50.0,  21.02,   2_281.226),
    ( 45.0, 247.54,  29_929.562), ( 44.0, 325.15,  31_555.956),
    ( 29.0,  60.93,   4_443.417), ( 18.0, 155.12,  67_555.328),
    ( 17.0, 288.79,   4_562.452), ( 16.0, 198.04,  62_894.029),
    ( 14.0, 199.76,  31_436.921), ( 12.0,  95.39,  14_577.848),
    ( 12.0, 287.11,  31_931.756), ( 12.0, 320.81,  34_777.259),
    (  9.0, 227.73,   1_222.114), (  8.0,  15.45,  16_859.074),
];

fn mean_event_jde(event: EventType, year: i32) -> Time<JDE> {
    let row = match event {
        EventType::MarchEquinox => 0,
        EventType::JuneSolstice => 1,
        EventType::SeptemberEquinox => 2,
        EventType::DecemberSolstice => 3,
    };
    let (coefficients, y) = if year < 1000 {
        (&MEAN_BEFORE_1000[row], f64::from(year) / 1000.0)
    } else {
        (&MEAN_AFTER_1000[row], f64::from(year - 2000) / 1000.0)
    };
    // Horner evaluation of c0 + c1·y + c2·y² + c3·y³ + c4·y⁴.
    let jde0 = coefficients.iter().rev().fold(0.0, |acc, c| acc * y + c);
    Time::new(jde0)
}
