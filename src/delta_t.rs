// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T) — UT↔TT correction
//!
//! Piecewise polynomial fits for **ΔT = TT − UT** by Espenak & Meeus
//! (*Five Millennium Canon of Solar Eclipses*, NASA TP-2006-214141).
//! Only the segments from 1900 to 2150 are tabulated; every other epoch
//! falls back to the long-term parabola of Morrison & Stephenson (2004).
//!
//! The seasonal series yield dynamical time, so ΔT only shifts an event by
//! about a minute for modern years. It still matters for events that land
//! close to local midnight.

use crate::instant::Time;
use crate::scales::{JD, UT};
use qtty::Seconds;

/// Decimal year of a Julian Day on the UT axis.
#[inline]
fn decimal_year(jd_ut: Time<JD>) -> f64 {
    const JD_J2000: f64 = 2_451_545.0;
    const JULIAN_YEAR_D: f64 = 365.25;
    2000.0 + (jd_ut.value() - JD_J2000) / JULIAN_YEAR_D
}

/// Morrison & Stephenson long-term parabola.
#[inline]
fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

#[rustfmt::skip]
fn polynomial_fit(y: f64) -> f64 {
    match y {
        y if (1900.0..1920.0).contains(&y) => {
            let t = y - 1900.0;
            -2.79 + 1.494119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
                - 0.000_197 * t.powi(4)
        }
        y if (1920.0..1941.0).contains(&y) => {
            let t = y - 1920.0;
            21.20 + 0.84493 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
        }
        y if (1941.0..1961.0).contains(&y) => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
        }
        y if (1961.0..1986.0).contains(&y) => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
        }
        y if (1986.0..2005.0).contains(&y) => {
            let t = y - 2000.0;
            63.86 + 0.3345 * t - 0.060_374 * t.powi(2) + 0.001_727_5 * t.powi(3)
                + 0.000_651_814 * t.powi(4) + 0.000_023_735_99 * t.powi(5)
        }
        y if (2005.0..2050.0).contains(&y) => {
            let t = y - 2000.0;
            62.92 + 0.32217 * t + 0.005589 * t.powi(2)
        }
        y if (2050.0..2150.0).contains(&y) => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

/// Returns **ΔT** in seconds for a Julian Day on the **UT** axis.
#[inline]
pub(crate) fn delta_t_seconds_from_ut(jd_ut: Time<JD>) -> Seconds {
    Seconds::new(polynomial_fit(decimal_year(jd_ut)))
}

impl Time<UT> {
    /// Returns **ΔT = TT − UT** in seconds for this UT epoch.
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_seconds_from_ut(Time::<JD>::from_days(self.days()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jd_of_year(y: f64) -> Time<JD> {
        Time::<JD>::new(2_451_545.0 + (y - 2000.0) * 365.25)
    }

    #[test]
    fn delta_t_2000() {
        // IERS value near 63.8 s.
        let dt = delta_t_seconds_from_ut(jd_of_year(2000.0));
        assert!((dt - Seconds::new(63.86)).abs() < Seconds::new(1e-6));
    }

    #[test]
    fn delta_t_2025_is_close_to_observed() {
        // Observed ΔT in 2025 is about 69 s; the 2005 fit overshoots by ~5 s.
        let dt = delta_t_seconds_from_ut(jd_of_year(2025.0));
        assert!(dt > Seconds::new(65.0) && dt < Seconds::new(80.0), "ΔT = {dt}");
    }

    #[test]
    fn segments_join_without_large_jumps() {
        for boundary in [1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0, 2150.0] {
            let before = polynomial_fit(boundary - 1e-6);
            let after = polynomial_fit(boundary);
            assert!(
                (before - after).abs() < 2.0,
                "jump of {} s at {boundary}",
                before - after
            );
        }
    }

    #[test]
    fn long_term_parabola_outside_fits() {
        assert!((polynomial_fit(1820.0) - -20.0).abs() < 1e-9);
        assert!((polynomial_fit(1620.0) - 108.0).abs() < 1e-9);
    }

    #[test]
    fn convenience_method_matches_free_function() {
        let ut = Time::<UT>::new(2_451_545.0);
        assert_eq!(ut.delta_t(), delta_t_seconds_from_ut(Time::<JD>::new(2_451_545.0)));
    }
}
