// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day counts tagged with the time scale they are measured on.
//!
//! The seasonal series produce a [`Time<JDE>`](crate::JDE) in dynamical
//! time, while calendar days are cut from civil time.  Keeping the scale in
//! the type means the only road from one to the other is [`Time::to`] or
//! [`Time::to_utc`], both of which apply ΔT through the
//! [`UT`](crate::UT) scale.

use crate::scales::UT;
use chrono::{DateTime, Utc};
use qtty::{Days, Second};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

/// Julian Day of 1970-01-01T00:00 on the UT axis.
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

/// A time scale: a label plus the mapping of its day count onto the
/// Terrestrial Time axis (absolute Julian days, TT).
pub trait TimeScale: Copy + fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix used when displaying a [`Time`] on this scale.
    const LABEL: &'static str;

    /// Day count on this scale to Julian days (TT).
    fn to_tt(days: Days) -> Days;

    /// Julian days (TT) to a day count on this scale.
    fn from_tt(tt: Days) -> Days;
}

/// A point in time, counted in days on scale `S`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    days: Days,
    scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    #[inline]
    pub const fn new(days: f64) -> Self {
        Self::from_days(Days::new(days))
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Time {
            days,
            scale: PhantomData,
        }
    }

    /// Day count on this instant's own scale.
    #[inline]
    pub const fn days(&self) -> Days {
        self.days
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.days.value()
    }

    /// The same instant measured on scale `T`.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::from_days(T::from_tt(S::to_tt(self.days)))
    }

    /// Civil timestamp of this instant, to the millisecond.
    ///
    /// `None` when the value is not finite or falls outside chrono's range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let since_epoch = self.to::<UT>().days() - UNIX_EPOCH_JD;
        let millis = (since_epoch.to::<Second>().value() * 1e3).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }
}

impl<S: TimeScale> fmt::Display for Time<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", S::LABEL, self.days)
    }
}

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;

    fn add(self, rhs: Days) -> Self {
        Time::from_days(self.days + rhs)
    }
}

/// Elapsed days between two instants on the same scale.
impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;

    fn sub(self, rhs: Self) -> Days {
        self.days - rhs.days
    }
}
