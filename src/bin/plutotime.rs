// SPDX-License-Identifier: AGPL-3.0-or-later

//! Prints the current Pluto Time status for a location.
//!
//! Usage: `plutotime [latitude longitude]` — decimal degrees, defaulting
//! to the stock observer location.

use chrono::{Local, Utc};
use plutotime::{
    format_countdown, format_crossing_date, local_crossing, status, GeoCoordinate, JulianDate,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let coord = match (args.next(), args.next()) {
        (Some(lat), Some(lon)) => {
            let latitude: f64 = lat.parse().expect("latitude must be a decimal number");
            let longitude: f64 = lon.parse().expect("longitude must be a decimal number");
            GeoCoordinate::from_degrees(latitude, longitude)
        }
        _ => GeoCoordinate::DEFAULT,
    };

    let now = JulianDate::from_utc(Utc::now());
    let report = status(now, coord);

    println!("Observer: {coord}");
    println!(
        "Current solar elevation: {:.1} degrees",
        report.elevation.value()
    );
    println!("{}", report.headline());

    if report.is_now() {
        return;
    }
    if let Some(until) = report.countdown() {
        println!("Next Pluto Time in {}", format_countdown(until));
        if let Some(local) = report
            .crossing
            .found()
            .and_then(|jd| local_crossing(jd, &Local))
        {
            println!("That is {}", format_crossing_date(&local));
        }
    }
}
