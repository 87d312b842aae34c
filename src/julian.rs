// SPDX-License-Identifier: AGPL-3.0-or-later

//! Continuous astronomical time coordinate.
//!
//! [`JulianDate`] is a continuous count of days since the Julian Period,
//! stored as a single [`Days`] quantity.  The fractional part encodes the
//! time of day in UT (Julian days begin at noon, so midnight UT falls on a
//! `.5` boundary).  Values are created from wall-clock UTC through the
//! fixed linear transform `jd = unix_seconds / 86400 + 2440587.5`, never
//! mutated, and only advanced by adding day increments.
//!
//! Calendar semantics stay on the chrono side of the boundary: the rest of
//! the crate consumes a `JulianDate` purely as a real number via
//! [`julian_centuries`](JulianDate::julian_centuries) and
//! [`ut_day_fraction`](JulianDate::ut_day_fraction).

use chrono::{DateTime, Utc};
use qtty::{Centuries, Day, Days, Second, Seconds};
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

/// A moment on the continuous Julian-day axis.
///
/// `Copy` and layout-identical to a single `f64`; all operations read the
/// value, none mutate shared state.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 UT (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Create from a raw Julian-day scalar.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Julian centuries since J2000.0 — the `T` of low-accuracy solar series.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new((*self - Self::J2000).value() / Self::JULIAN_CENTURY.value())
    }

    /// Fraction of the current UT day in `[0, 1)`, with midnight at 0.
    ///
    /// The half-day shift accounts for Julian days starting at noon.
    #[inline]
    pub fn ut_day_fraction(&self) -> f64 {
        let shifted = self.value() - 0.5;
        shifted - shifted.floor()
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    ///
    /// Pure linear transform from the Unix epoch; no ΔT or leap-second
    /// accounting, matching the precision class of the solar formulas
    /// this coordinate feeds.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds_since_epoch = Seconds::new(
            datetime.timestamp() as f64 + datetime.timestamp_subsec_nanos() as f64 / 1e9,
        );
        Self::from_days(UNIX_EPOCH_JD + seconds_since_epoch.to::<Day>())
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds_since_epoch = (self.quantity - UNIX_EPOCH_JD).to::<Second>().value();
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDate {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDate {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl From<Days> for JulianDate {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDate> for Days {
    #[inline]
    fn from(time: JulianDate) -> Self {
        time.quantity
    }
}
