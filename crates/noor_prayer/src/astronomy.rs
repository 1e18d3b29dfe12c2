//! Low-precision solar ephemeris.
//!
//! Accurate to well under a minute of prayer time between 1950 and 2050,
//! which is all the display needs. All angles are in degrees.

use chrono::{Datelike, NaiveDate};

/// Julian day of J2000.0 (2000-01-01 12:00 TT).
const J2000: f64 = 2_451_545.0;
/// `NaiveDate::num_days_from_ce` + this = Julian day at 00:00 UT.
const CE_TO_JD_MIDNIGHT: f64 = 1_721_424.5;

/// Declination and equation of time of the sun at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Degrees north of the celestial equator.
    pub declination: f64,
    /// Apparent minus mean solar time, in hours.
    pub equation_of_time: f64,
}

/// Julian day at 00:00 UT of `date`.
pub fn julian_day(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64 + CE_TO_JD_MIDNIGHT
}

/// Position of the sun at Julian day `jd`.
pub fn sun_position(jd: f64) -> SolarPosition {
    let d = jd - J2000;

    let mean_anomaly = fix_angle(357.529 + 0.985_600_28 * d);
    let mean_longitude = fix_angle(280.459 + 0.985_647_36 * d);
    let ecliptic_longitude = fix_angle(
        mean_longitude + 1.915 * dsin(mean_anomaly) + 0.020 * dsin(2.0 * mean_anomaly),
    );
    let obliquity = 23.439 - 0.000_000_36 * d;

    let right_ascension =
        darctan2(dcos(obliquity) * dsin(ecliptic_longitude), dcos(ecliptic_longitude)) / 15.0;

    SolarPosition {
        declination: darcsin(dsin(obliquity) * dsin(ecliptic_longitude)),
        equation_of_time: mean_longitude / 15.0 - fix_hour(right_ascension),
    }
}

pub fn dsin(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

pub fn dcos(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

pub fn dtan(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

pub fn darcsin(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// NaN when `x` is outside [-1, 1], i.e. the sun never reaches the angle.
pub fn darccos(x: f64) -> f64 {
    x.acos().to_degrees()
}

pub fn darctan2(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

pub fn darccot(x: f64) -> f64 {
    (1.0 / x).atan().to_degrees()
}

/// Normalizes to [0, 360).
pub fn fix_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Normalizes to [0, 24).
pub fn fix_hour(hours: f64) -> f64 {
    hours.rem_euclid(24.0)
}
