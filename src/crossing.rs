// SPDX-License-Identifier: AGPL-3.0-or-later

//! Next threshold-crossing search.
//!
//! Scans forward in fixed 10-second steps from a starting instant until
//! the solar elevation changes side of a target angle.  No interpolation
//! or refinement is applied, so a found time is accurate to one step and
//! always refers to the last sample still on the starting side of the
//! threshold.
//!
//! The Sun crosses −1.5° twice per day wherever it rises and sets, so the
//! scan normally terminates within a day.  During polar day or polar
//! night it would run forever; [`Scan::max_steps`] bounds the search and
//! turns that case into [`Crossing::NotFound`].

use qtty::{Days, Degrees};

use crate::{solar_elevation, GeoCoordinate, JulianDate};

/// Solar elevation at which daylight on Earth matches noon on Pluto.
pub const PLUTO_TIME_TARGET: Degrees = Degrees::new(-1.5);

/// Scan resolution: ten seconds expressed in days.
pub const SCAN_STEP: Days = Days::new(0.000115741);

/// Samples in one day at [`SCAN_STEP`] resolution.
const STEPS_PER_DAY: usize = 8_640;

/// Outcome of a bounded crossing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
    /// Last sampled instant still on the starting side of the threshold;
    /// the true crossing lies within one scan step after it.
    Found(JulianDate),
    /// The elevation never changed side within the iteration cap.
    NotFound,
}

impl Crossing {
    /// The found instant, if any.
    #[inline]
    pub fn found(self) -> Option<JulianDate> {
        match self {
            Crossing::Found(time) => Some(time),
            Crossing::NotFound => None,
        }
    }

    #[inline]
    pub const fn is_found(&self) -> bool {
        matches!(self, Crossing::Found(_))
    }
}

/// Forward-scan parameters.
///
/// The defaults match the NASA Pluto Time widget — −1.5° target,
/// 10 s step — plus a cap of 366 days of samples so a location where the
/// Sun stays on one side of the threshold reports
/// [`Crossing::NotFound`] instead of looping forever.  Shrink
/// `max_steps` to bound the search window further.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scan {
    /// Elevation angle whose crossing is searched for.
    pub target: Degrees,
    /// Sample spacing; also the precision of a found time.
    pub step: Days,
    /// Samples taken before the search gives up.
    pub max_steps: usize,
}

impl Default for Scan {
    fn default() -> Self {
        Self {
            target: PLUTO_TIME_TARGET,
            step: SCAN_STEP,
            max_steps: 366 * STEPS_PER_DAY,
        }
    }
}

impl Scan {
    /// First instant at or after `start` adjacent to a crossing of
    /// `self.target`.
    ///
    /// If the Sun starts at or below the target (night side), the scan
    /// runs until the elevation first rises above it; otherwise until it
    /// first drops to or below it.  Either way the returned instant is
    /// the final sample before the side change, so
    /// `Crossing::Found(t)` always satisfies `t >= start` and precedes
    /// the true crossing by at most `self.step`.
    pub fn next_crossing(&self, start: JulianDate, coord: GeoCoordinate) -> Crossing {
        let starts_below = solar_elevation(start, coord) <= self.target;
        let mut sample = start;
        for _ in 0..self.max_steps {
            let ahead = sample + self.step;
            let below = solar_elevation(ahead, coord) <= self.target;
            if below != starts_below {
                return Crossing::Found(sample);
            }
            sample = ahead;
        }
        Crossing::NotFound
    }
}

/// [`Scan::next_crossing`] with the default Pluto Time parameters.
pub fn next_crossing(start: JulianDate, coord: GeoCoordinate) -> Crossing {
    Scan::default().next_crossing(start, coord)
}
