// SPDX-License-Identifier: AGPL-3.0-or-later

//! Pluto Time
//!
//! When the Sun sits about 1.5° below the horizon, ambient light on Earth
//! roughly matches noon on Pluto.  This crate computes the Sun's
//! refraction-corrected elevation for a location and instant, and searches
//! forward for the next moment that elevation crosses the Pluto Time
//! threshold.
//!
//! # Core types
//!
//! - [`JulianDate`] — continuous day count, the single time coordinate.
//! - [`GeoCoordinate`] — observer latitude/longitude in degrees.
//! - [`Scan`] — crossing-search parameters (target angle, step, cap).
//! - [`Crossing`] — outcome of the bounded threshold search.
//! - [`PlutoTimeStatus`] — elevation plus next crossing for a refresh tick.
//!
//! # Quick example
//!
//! ```
//! use chrono::Utc;
//! use plutotime::{next_crossing, solar_elevation, Crossing, GeoCoordinate, JulianDate};
//!
//! let now = JulianDate::from_utc(Utc::now());
//! let here = GeoCoordinate::from_degrees(34.2, -118.1);
//!
//! let elevation = solar_elevation(now, here);
//! if let Crossing::Found(next) = next_crossing(now, here) {
//!     assert!(next >= now);
//! }
//! # let _ = elevation;
//! ```
//!
//! Every operation is a pure computation over its inputs: nothing is
//! cached or shared, and the observer location is passed by value through
//! every call, so calls may be interleaved freely across threads.

mod coordinates;
mod crossing;
mod julian;
mod report;
mod solar;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use coordinates::GeoCoordinate;
pub use crossing::{next_crossing, Crossing, Scan, PLUTO_TIME_TARGET, SCAN_STEP};
pub use julian::JulianDate;
pub use report::{format_countdown, format_crossing_date, local_crossing, status, PlutoTimeStatus};
pub use solar::{solar_elevation, ECCENT_EARTH_ORBIT, SIN_OBLIQ_CORR, VAR_Y};
