// SPDX-License-Identifier: AGPL-3.0-or-later

//! Apparent solar elevation.
//!
//! Low-accuracy NOAA solar position, reduced to the single output this
//! crate needs: the Sun's elevation above the local horizon, corrected for
//! atmospheric refraction.  There is exactly one implementation of the
//! formula and the observer location is an explicit parameter of every
//! call — no process-wide state.
//!
//! The function is total over real inputs.  Accuracy is the usual NOAA
//! spreadsheet level (a few hundredths of a degree across 1900–2100),
//! which is far tighter than the −1.5° threshold work it feeds.

use std::f64::consts::{FRAC_PI_2, PI};

use qtty::Degrees;

use crate::{GeoCoordinate, JulianDate};

/// Eccentricity of Earth's orbit, frozen at the value the NOAA
/// spreadsheet bakes in rather than re-derived per epoch.
pub const ECCENT_EARTH_ORBIT: f64 = 0.0167042317652;

/// Sine of the corrected mean obliquity of the ecliptic.
pub const SIN_OBLIQ_CORR: f64 = 0.397764267077;

/// `tan²(ε/2)` used by the equation-of-time series.
pub const VAR_Y: f64 = 0.0430314896879;

/// Apparent elevation of the Sun above the horizon, refraction included.
///
/// Negative when the Sun is below the horizon.  The result tracks the
/// classic NOAA solar calculator: mean longitude and anomaly of the Sun,
/// a three-term equation of center, declination through the fixed
/// obliquity sine, a five-term equation of time, and the spherical
/// cosine law for the zenith angle.
pub fn solar_elevation(time: JulianDate, coord: GeoCoordinate) -> Degrees {
    let latitude_r = coord.latitude().value().to_radians();
    let longitude = coord.longitude().value();

    let time_ut = time.ut_day_fraction();
    let t = time.julian_centuries().value();

    // Geometric mean longitude and anomaly of the Sun, degrees.
    // Truncated-remainder wrapping keeps the sign of the dividend, which
    // is what the downstream series expect for pre-J2000 dates.
    let mean_long = (280.46646 + t * (36000.76983 + t * 0.0003032)) % 360.0;
    let mean_long_r = mean_long.to_radians();
    let mean_anom_r = (357.52911 + t * (35999.05029 - 0.0001537 * t)).to_radians();

    // Equation of center and the Sun's apparent longitude.
    let eq_of_center_r = (mean_anom_r.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * mean_anom_r).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * mean_anom_r).sin() * 0.000289)
        .to_radians();
    let app_long_r = mean_long_r + eq_of_center_r;

    let declination_r = (SIN_OBLIQ_CORR * app_long_r.sin()).asin();

    // Equation of time in minutes.
    let eq_of_time = 4.0
        * (VAR_Y * (2.0 * mean_long_r).sin() - 2.0 * ECCENT_EARTH_ORBIT * mean_anom_r.sin()
            + 4.0 * ECCENT_EARTH_ORBIT * VAR_Y * mean_anom_r.sin() * (2.0 * mean_long_r).cos()
            - 0.5 * VAR_Y * VAR_Y * (4.0 * mean_long_r).sin()
            - 1.25 * ECCENT_EARTH_ORBIT * ECCENT_EARTH_ORBIT * (2.0 * mean_anom_r).sin())
        .to_degrees();

    // True solar time in minutes, wrapped mod 1440 with the sign of the
    // unwrapped value preserved; the hour-angle branch below depends on
    // that sign to stay on a continuous range.
    let true_solar_time = (time_ut * 1440.0 + eq_of_time + 4.0 * longitude) % 1440.0;
    let tst_scaled = true_solar_time.to_radians();
    let hour_angle = if tst_scaled < 0.0 {
        tst_scaled / 4.0 + PI
    } else {
        tst_scaled / 4.0 - PI
    };

    let zenith = (latitude_r.sin() * declination_r.sin()
        + latitude_r.cos() * declination_r.cos() * hour_angle.cos())
    .acos();
    let elevation_r = FRAC_PI_2 - zenith;

    Degrees::new(elevation_r.to_degrees() + refraction_arcsec(elevation_r) / 3600.0)
}

/// Atmospheric refraction at the given uncorrected elevation, arcseconds.
///
/// Empirical piecewise model over the elevation in degrees: zero above
/// 85°, a tangent series down to 5°, a quartic polynomial through the
/// horizon down to −0.575°, and a single tangent term below.  The branch
/// boundaries keep `tan` away from its singularities; the pieces agree to
/// a few arcseconds at the seams.
fn refraction_arcsec(elevation_r: f64) -> f64 {
    let e = elevation_r.to_degrees();
    let tan_e = elevation_r.tan();
    if e > 85.0 {
        0.0
    } else if e > 5.0 {
        58.1 / tan_e - 0.07 / tan_e.powi(3) + 0.000086 / tan_e.powi(5)
    } else if e > -0.575 {
        1735.0 + e * (-518.2 + e * (103.4 + e * (-12.79 + e * 0.711)))
    } else {
        -20.772 / tan_e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Days;

    const EQUATOR_GREENWICH: GeoCoordinate = GeoCoordinate::from_degrees(0.0, 0.0);

    #[test]
    fn elevation_matches_known_value_at_j2000_noon() {
        // 2000-01-01 12:00 UT at (0°, 0°): declination ≈ −23.03°, equation
        // of time ≈ −3.27 min, apparent elevation ≈ 66.95°.
        let e = solar_elevation(JulianDate::J2000, EQUATOR_GREENWICH);
        assert!(
            (e - Degrees::new(66.95)).abs() < Degrees::new(0.05),
            "elevation at J2000 noon = {}",
            e
        );
    }

    #[test]
    fn elevation_is_continuous_in_time() {
        // Max vertical speed of the Sun is ~0.25°/min, so one second of
        // time moves the elevation by well under a hundredth of a degree.
        let coord = GeoCoordinate::DEFAULT;
        let one_second = Days::new(1.0 / 86_400.0);
        let mut time = JulianDate::new(2_460_676.5);
        for _ in 0..200 {
            let here = solar_elevation(time, coord);
            let next = solar_elevation(time + one_second, coord);
            assert!(
                (next - here).abs() < Degrees::new(0.02),
                "jump at {}: {} -> {}",
                time,
                here,
                next
            );
            // Jump around the day so day and night are both sampled.
            time += Days::new(0.1238);
        }
    }

    #[test]
    fn elevation_stays_in_physical_range() {
        let coord = GeoCoordinate::from_degrees(78.0, 16.0);
        for i in 0..1_000 {
            let time = JulianDate::new(2_460_300.5) + Days::new(i as f64 * 0.3653);
            let e = solar_elevation(time, coord);
            assert!(
                e.value() > -91.0 && e.value() < 91.0,
                "elevation out of range at {}: {}",
                time,
                e
            );
        }
    }

    #[test]
    fn day_to_day_drift_is_bounded() {
        // Same UT time of day on consecutive days: only declination and
        // equation-of-time drift remain, both well under a degree per day
        // at mid latitudes.
        let coord = GeoCoordinate::DEFAULT;
        let noon_ut = JulianDate::new(2_460_677.0);
        for k in 0..30 {
            let a = solar_elevation(noon_ut + Days::new(k as f64), coord);
            let b = solar_elevation(noon_ut + Days::new(k as f64 + 1.0), coord);
            assert!(
                (a - b).abs() < Degrees::new(1.0),
                "day {} -> {}: {} vs {}",
                k,
                k + 1,
                a,
                b
            );
        }
    }

    #[test]
    fn refraction_is_continuous_at_branch_seams() {
        let eps = 1e-9;
        let at = |deg: f64| refraction_arcsec(deg.to_radians()) / 3600.0;

        let low_seam = (at(-0.575 + eps) - at(-0.575 - eps)).abs();
        assert!(low_seam < 1e-3, "seam at -0.575°: {low_seam}°");

        let mid_seam = (at(5.0 + eps) - at(5.0 - eps)).abs();
        assert!(mid_seam < 1e-3, "seam at 5°: {mid_seam}°");

        // The tangent series still contributes ~5 arcsec at 85° where the
        // model snaps to zero; the step stays under two thousandths of a
        // degree.
        let high_seam = (at(85.0 + eps) - at(85.0 - eps)).abs();
        assert!(high_seam < 2e-3, "seam at 85°: {high_seam}°");
    }

    #[test]
    fn refraction_peaks_near_the_horizon() {
        // ~0.48° of lift at the geometric horizon.
        let at_horizon = refraction_arcsec(0.0) / 3600.0;
        assert!(
            (0.4..0.6).contains(&at_horizon),
            "refraction at 0°: {at_horizon}°"
        );
        // And essentially nothing near the zenith.
        assert_eq!(refraction_arcsec(89.0_f64.to_radians()), 0.0);
    }

    #[test]
    fn noon_is_higher_than_evening() {
        let coord = GeoCoordinate::DEFAULT;
        // Solar noon at lon −118.1 is near 19:52 UT.
        let solar_noon = JulianDate::new(2_460_677.0 + 19.87 / 24.0 - 0.5);
        let evening = solar_noon + Days::new(6.0 / 24.0);
        assert!(solar_elevation(solar_noon, coord) > solar_elevation(evening, coord));
    }
}
