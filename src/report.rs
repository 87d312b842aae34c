// SPDX-License-Identifier: AGPL-3.0-or-later

//! Presentation-contract helpers.
//!
//! A display collaborator calls [`status`] once per refresh tick and
//! renders the result.  The helpers here reproduce the text rules of the
//! NASA Pluto Time widget — the five-minute "now" window, the
//! before-sunrise/after-sunset wording, and the countdown and calendar
//! formats — with the time zone supplied by the caller as a
//! `chrono::TimeZone` (the crate itself carries no timezone data).

use chrono::{DateTime, TimeZone};
use qtty::{Days, Degrees};

use crate::{next_crossing, solar_elevation, Crossing, GeoCoordinate, JulianDate, PLUTO_TIME_TARGET};

/// Crossings closer than this count as happening "now".
///
/// Five minutes, sized for the 10-second scan granularity.
const NOW_WINDOW: Days = Days::new(5.0 / (60.0 * 24.0));

/// Elevation and next crossing for one refresh tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlutoTimeStatus {
    /// The instant the status was computed for.
    pub queried_at: JulianDate,
    /// Apparent solar elevation at `queried_at`.
    pub elevation: Degrees,
    /// Next Pluto Time crossing at or after `queried_at`.
    pub crossing: Crossing,
}

/// Compute the full status for an instant and location.
///
/// One elevation evaluation plus a forward scan; with the default
/// iteration cap the scan is bounded even in polar night.
pub fn status(now: JulianDate, coord: GeoCoordinate) -> PlutoTimeStatus {
    PlutoTimeStatus {
        queried_at: now,
        elevation: solar_elevation(now, coord),
        crossing: next_crossing(now, coord),
    }
}

impl PlutoTimeStatus {
    /// Time left until the crossing, if one was found.
    pub fn countdown(&self) -> Option<Days> {
        self.crossing.found().map(|time| time - self.queried_at)
    }

    /// Whether the crossing falls inside the five-minute display window.
    pub fn is_now(&self) -> bool {
        matches!(self.countdown(), Some(dt) if dt <= NOW_WINDOW)
    }

    /// Status line for the widget: the "now" banner, or which side of the
    /// threshold the Sun is currently on.
    pub fn headline(&self) -> String {
        if self.is_now() {
            return "It's Pluto Time now!".to_string();
        }
        match self.crossing {
            Crossing::Found(_) if self.elevation > PLUTO_TIME_TARGET => "After sunset".to_string(),
            Crossing::Found(_) => "Before sunrise".to_string(),
            Crossing::NotFound => "No Pluto Time in the search window".to_string(),
        }
    }
}

/// `"D days, H hours, M minutes"` with zero leading components omitted.
///
/// Components are floored, and a minute that rounds up to 60 carries into
/// the hour, mirroring the widget's countdown text.
pub fn format_countdown(until: Days) -> String {
    let total = until.value().max(0.0);
    let days = total.floor();
    let day_remainder = (total - days) * 24.0;
    let mut hours = day_remainder.floor();
    let mut minutes = ((day_remainder - hours) * 60.0).floor();
    if minutes > 59.0 {
        minutes = 0.0;
        hours += 1.0;
    }

    let mut out = String::new();
    if days > 0.0 {
        out.push_str(&format!("{} days, ", days as u64));
    }
    if hours > 0.0 {
        out.push_str(&format!("{} hours, ", hours as u64));
    }
    out.push_str(&format!("{} minutes", minutes as u64));
    out
}

/// Crossing instant in the caller's time zone.
///
/// Returns `None` if the instant falls outside chrono's representable
/// range.
pub fn local_crossing<Tz: TimeZone>(crossing: JulianDate, tz: &Tz) -> Option<DateTime<Tz>> {
    crossing.to_utc().map(|utc| utc.with_timezone(tz))
}

/// `"January 1 at 6:58 AM PST"`-style rendering of a crossing instant.
pub fn format_crossing_date<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.format("%B %-d at %-I:%M %p %Z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn countdown_formatting() {
        assert_eq!(format_countdown(Days::new(0.5209)), "12 hours, 30 minutes");
        assert_eq!(
            format_countdown(Days::new(3.267)),
            "3 days, 6 hours, 24 minutes"
        );
        assert_eq!(format_countdown(Days::new(0.0)), "0 minutes");
        // Negative inputs clamp instead of underflowing.
        assert_eq!(format_countdown(Days::new(-1.0)), "0 minutes");
    }

    #[test]
    fn crossing_date_formatting() {
        // 2025-01-01 14:58:30 UTC.
        let dt = DateTime::<Utc>::from_timestamp(1_735_743_510, 0).unwrap();
        assert_eq!(format_crossing_date(&dt), "January 1 at 2:58 PM UTC");
    }

    #[test]
    fn local_crossing_roundtrips_through_utc() {
        let jd = JulianDate::new(2_460_677.123);
        let dt = local_crossing(jd, &Utc).expect("in range");
        let back = JulianDate::from_utc(dt);
        assert!((back - jd).abs() < Days::new(1e-8));
    }

    #[test]
    fn night_status_reads_before_sunrise() {
        // 02:00 local standard time at the default location.
        let night = JulianDate::new(2_460_676.5 + 10.0 / 24.0);
        let report = status(night, GeoCoordinate::DEFAULT);
        assert!(report.elevation < PLUTO_TIME_TARGET);
        assert!(!report.is_now());
        assert_eq!(report.headline(), "Before sunrise");

        let dt = report.countdown().expect("crossing found");
        assert!(dt > Days::new(0.0));
        assert!(dt < Days::new(0.5));
    }

    #[test]
    fn daytime_status_reads_after_sunset() {
        // Local midday at the default location (20:00 UT).
        let midday = JulianDate::new(2_460_676.5 + 20.0 / 24.0);
        let report = status(midday, GeoCoordinate::DEFAULT);
        assert!(report.elevation > PLUTO_TIME_TARGET);
        assert_eq!(report.headline(), "After sunset");
    }

    #[test]
    fn status_just_before_a_crossing_is_now() {
        let night = JulianDate::new(2_460_676.5 + 10.0 / 24.0);
        let crossing = next_crossing(night, GeoCoordinate::DEFAULT)
            .found()
            .expect("crossing found");
        // Re-query two minutes before the crossing.
        let close = crossing - Days::new(2.0 / (60.0 * 24.0));
        let report = status(close, GeoCoordinate::DEFAULT);
        assert!(report.is_now());
        assert_eq!(report.headline(), "It's Pluto Time now!");
    }
}
