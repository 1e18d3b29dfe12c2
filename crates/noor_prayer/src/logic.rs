// --- File: crates/noor_prayer/src/logic.rs ---
use crate::astronomy::{
    darccos, darccot, dcos, dsin, dtan, fix_hour, julian_day, sun_position,
};
use crate::params::{CalculationParameters, Coordinates, IshaRule, Prayer};
use chrono::{DateTime, Duration, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Apparent altitude of the sun's upper limb at sunrise and sunset,
/// including refraction.
const RISE_SET_ANGLE: f64 = 0.833;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PrayerError {
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("The sun does not rise or set on {date} at latitude {latitude}")]
    NoSunriseOrSunset { date: NaiveDate, latitude: f64 },

    #[error("{prayer} is undefined on {date}")]
    UndefinedTime { prayer: Prayer, date: NaiveDate },

    #[error("Date out of range: {0}")]
    DateOutOfRange(NaiveDate),

    #[error("Unknown calculation method: {0}")]
    UnknownMethod(String),

    #[error("Unknown madhab: {0}")]
    UnknownMadhab(String),

    #[error("Unknown high latitude rule: {0}")]
    UnknownHighLatitudeRule(String),

    #[error("Unknown prayer: {0}")]
    UnknownPrayer(String),

    #[error("Adjustment of {minutes} minutes for {prayer} is out of range")]
    AdjustmentOutOfRange { prayer: Prayer, minutes: i64 },
}

/// The six daily times as UTC instants, rounded to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimes {
    pub fajr: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub dhuhr: DateTime<Utc>,
    pub asr: DateTime<Utc>,
    pub maghrib: DateTime<Utc>,
    pub isha: DateTime<Utc>,
}

impl PrayerTimes {
    pub fn time(&self, prayer: Prayer) -> DateTime<Utc> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, DateTime<Utc>)> + '_ {
        Prayer::ALL.into_iter().map(|p| (p, self.time(p)))
    }

    /// The latest time that has started at `now`, or `None` before Fajr.
    pub fn current_prayer(&self, now: DateTime<Utc>) -> Option<Prayer> {
        Prayer::ALL
            .into_iter()
            .rev()
            .find(|p| self.time(*p) <= now)
    }

    /// The first time still ahead of `now`, or `None` after Isha.
    pub fn next_prayer(&self, now: DateTime<Utc>) -> Option<Prayer> {
        Prayer::ALL.into_iter().find(|p| self.time(*p) > now)
    }
}

/// Night-prayer times between Maghrib and the following Fajr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunnahTimes {
    pub middle_of_the_night: DateTime<Utc>,
    pub last_third_of_the_night: DateTime<Utc>,
}

impl SunnahTimes {
    pub fn new(maghrib: DateTime<Utc>, next_fajr: DateTime<Utc>) -> Self {
        let night = (next_fajr - maghrib).num_seconds();
        Self {
            middle_of_the_night: round_to_minute(maghrib + Duration::seconds(night / 2)),
            last_third_of_the_night: round_to_minute(
                maghrib + Duration::seconds(night * 2 / 3),
            ),
        }
    }
}

/// Result of one computation: the day's times plus sunnah times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPrayers {
    pub date: NaiveDate,
    pub coordinates: Coordinates,
    pub times: PrayerTimes,
    pub sunnah: SunnahTimes,
}

impl DailyPrayers {
    pub fn current_prayer(&self, now: DateTime<Utc>) -> Option<Prayer> {
        self.times.current_prayer(now)
    }

    pub fn next_prayer(&self, now: DateTime<Utc>) -> Option<Prayer> {
        self.times.next_prayer(now)
    }
}

/// Computes the prayer times of `date` at `coordinates`.
///
/// `date` is the local calendar day at the position; the returned instants
/// are UTC. Tomorrow's Fajr is computed as well to place the sunnah times.
///
/// # Errors
///
/// * [`PrayerError::InvalidCoordinates`] for out-of-range input.
/// * [`PrayerError::NoSunriseOrSunset`] during polar day or polar night.
#[instrument(level = "debug", skip(params), fields(method = %params.method))]
pub fn compute_prayer_times(
    date: NaiveDate,
    coordinates: Coordinates,
    params: &CalculationParameters,
) -> Result<DailyPrayers, PrayerError> {
    coordinates.validate()?;

    let times = solve_day(date, coordinates, params)?;
    let tomorrow = date.succ_opt().ok_or(PrayerError::DateOutOfRange(date))?;
    let next_fajr = solve_day(tomorrow, coordinates, params)?.fajr;

    debug!(%date, fajr = %times.fajr, isha = %times.isha, "Computed prayer times");

    Ok(DailyPrayers {
        date,
        coordinates,
        times,
        sunnah: SunnahTimes::new(times.maghrib, next_fajr),
    })
}

#[derive(Clone, Copy)]
enum Direction {
    /// Before solar noon.
    Ccw,
    /// After solar noon.
    Cw,
}

/// Solar geometry for one day at one latitude; times are local solar hours.
struct SolarDay {
    jdate: f64,
    latitude: f64,
}

impl SolarDay {
    fn new(date: NaiveDate, coordinates: Coordinates) -> Self {
        Self {
            jdate: julian_day(date) - coordinates.longitude / 360.0,
            latitude: coordinates.latitude,
        }
    }

    fn mid_day(&self, guess: f64) -> f64 {
        let eqt = sun_position(self.jdate + guess / 24.0).equation_of_time;
        fix_hour(12.0 - eqt)
    }

    /// Time at which the sun is `angle` degrees below the horizon.
    /// NaN if it never gets there.
    fn sun_angle_time(&self, angle: f64, guess: f64, direction: Direction) -> f64 {
        let declination = sun_position(self.jdate + guess / 24.0).declination;
        let noon = self.mid_day(guess);
        let cos_hour_angle = (-dsin(angle) - dsin(declination) * dsin(self.latitude))
            / (dcos(declination) * dcos(self.latitude));
        let offset = darccos(cos_hour_angle) / 15.0;
        match direction {
            Direction::Ccw => noon - offset,
            Direction::Cw => noon + offset,
        }
    }

    fn asr_time(&self, shadow_factor: f64, guess: f64) -> f64 {
        let declination = sun_position(self.jdate + guess / 24.0).declination;
        let angle = -darccot(shadow_factor + dtan((self.latitude - declination).abs()));
        self.sun_angle_time(angle, guess, Direction::Cw)
    }
}

fn solve_day(
    date: NaiveDate,
    coordinates: Coordinates,
    params: &CalculationParameters,
) -> Result<PrayerTimes, PrayerError> {
    let day = SolarDay::new(date, coordinates);

    let sunrise = day.sun_angle_time(RISE_SET_ANGLE, 6.0, Direction::Ccw);
    let sunset = day.sun_angle_time(RISE_SET_ANGLE, 18.0, Direction::Cw);
    if sunrise.is_nan() || sunset.is_nan() {
        warn!(%date, latitude = coordinates.latitude, "No sunrise or sunset");
        return Err(PrayerError::NoSunriseOrSunset {
            date,
            latitude: coordinates.latitude,
        });
    }

    let fajr = day.sun_angle_time(params.fajr_angle, 5.0, Direction::Ccw);
    let dhuhr = day.mid_day(12.0);
    let asr = day.asr_time(params.madhab.shadow_factor(), 13.0);
    if asr.is_nan() {
        return Err(PrayerError::UndefinedTime {
            prayer: Prayer::Asr,
            date,
        });
    }
    let maghrib = params
        .maghrib_angle
        .map(|angle| day.sun_angle_time(angle, 18.0, Direction::Cw));
    let isha = match params.isha {
        IshaRule::Angle(angle) => Some(day.sun_angle_time(angle, 18.0, Direction::Cw)),
        IshaRule::Interval(_) => None,
    };

    // Local solar hours to UTC hours.
    let shift = -coordinates.longitude / 15.0;
    let (fajr, sunrise, dhuhr, asr, sunset) =
        (fajr + shift, sunrise + shift, dhuhr + shift, asr + shift, sunset + shift);

    let night = fix_hour(sunrise - sunset);
    let bound = |time: f64, base: f64, angle: f64, direction: Direction| {
        let portion = params.high_latitude_rule.night_portion(angle) * night;
        let diff = match direction {
            Direction::Ccw => fix_hour(base - time),
            Direction::Cw => fix_hour(time - base),
        };
        if time.is_nan() || diff > portion {
            match direction {
                Direction::Ccw => base - portion,
                Direction::Cw => base + portion,
            }
        } else {
            time
        }
    };

    let fajr = bound(fajr, sunrise, params.fajr_angle, Direction::Ccw);
    let maghrib = match (maghrib, params.maghrib_angle) {
        (Some(time), Some(angle)) => bound(time + shift, sunset, angle, Direction::Cw),
        _ => sunset,
    };
    let isha = match (isha, params.isha) {
        (Some(time), IshaRule::Angle(angle)) => bound(time + shift, sunset, angle, Direction::Cw),
        (_, IshaRule::Interval(minutes)) => maghrib + minutes as f64 / 60.0,
        (None, IshaRule::Angle(_)) => maghrib,
    };

    let at = |prayer: Prayer, hours: f64| -> Result<DateTime<Utc>, PrayerError> {
        let hours = hours + params.offset_minutes(prayer) as f64 / 60.0;
        hours_to_instant(date, hours).ok_or(PrayerError::DateOutOfRange(date))
    };

    Ok(PrayerTimes {
        fajr: at(Prayer::Fajr, fajr)?,
        sunrise: at(Prayer::Sunrise, sunrise)?,
        dhuhr: at(Prayer::Dhuhr, dhuhr)?,
        asr: at(Prayer::Asr, asr)?,
        maghrib: at(Prayer::Maghrib, maghrib)?,
        isha: at(Prayer::Isha, isha)?,
    })
}

/// UTC midnight of `date` plus `hours`, rounded to the nearest minute.
/// `None` when the result is not a representable instant.
fn hours_to_instant(date: NaiveDate, hours: f64) -> Option<DateTime<Utc>> {
    if !hours.is_finite() {
        return None;
    }
    let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
    // The cast saturates, so a huge offset fails in checked_add.
    let seconds = (hours * 3600.0).round() as i64;
    let minutes = seconds.checked_add(30)?.div_euclid(60);
    midnight.checked_add_signed(TimeDelta::try_minutes(minutes)?)
}

fn round_to_minute(instant: DateTime<Utc>) -> DateTime<Utc> {
    let seconds = instant.timestamp() + 30;
    DateTime::from_timestamp(seconds - seconds.rem_euclid(60), 0).unwrap_or(instant)
}
