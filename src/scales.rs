// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale markers.
//!
//! | Marker | Counts | Axis |
//! |--------|--------|------|
//! | [`JD`] | Julian days | TT |
//! | [`JDE`] | Julian ephemeris days | TT |
//! | [`UT`] | Julian days | UT (ΔT applied on conversion) |

use crate::delta_t::delta_t_seconds_from_ut;
use crate::instant::{Time, TimeScale};
use qtty::{Day, Days};

/// Julian days on the TT axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "JD";

    #[inline]
    fn to_tt(days: Days) -> Days {
        days
    }

    #[inline]
    fn from_tt(tt: Days) -> Days {
        tt
    }
}

/// Julian ephemeris days, the output of the seasonal series.
///
/// Same axis as [`JD`]; the separate marker keeps ephemeris results from
/// being mistaken for civil day counts.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JDE;

impl TimeScale for JDE {
    const LABEL: &'static str = "JDE";

    #[inline]
    fn to_tt(days: Days) -> Days {
        days
    }

    #[inline]
    fn from_tt(tt: Days) -> Days {
        tt
    }
}

/// Universal Time, the civil scale UTC follows to within a second.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "UT";

    fn to_tt(ut: Days) -> Days {
        ut + delta_t_seconds_from_ut(Time::<JD>::from_days(ut)).to::<Day>()
    }

    /// Solves `ut + ΔT(ut) = tt`.  ΔT changes by about a second per year,
    /// so a few fixed-point steps settle far below a millisecond.
    fn from_tt(tt: Days) -> Days {
        (0..3).fold(tt, |ut, _| {
            tt - delta_t_seconds_from_ut(Time::<JD>::from_days(ut)).to::<Day>()
        })
    }
}
