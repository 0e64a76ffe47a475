use hifitime::{Duration, Epoch};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{constants::DEFAULT_UTC_OFFSET_HOURS, error::Error, utils::wrap_hours};

/// UTC calendar day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    /// Month in 1..=12
    pub month: u8,
    /// Day of month in 1..=31
    pub day: u8,
}

/// Days elapsed since 1970-01-01 in the proleptic Gregorian calendar.
fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let (month, day) = (month as i64, day as i64);
    let year = if month <= 2 {
        year as i64 - 1
    } else {
        year as i64
    };
    let era = (if year >= 0 { year } else { year - 399 }) / 400;
    let year_of_era = year - era * 400;
    let shifted_month = (month + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146097 + day_of_era - 719468
}

impl CalendarDate {
    /// Builds a validated [CalendarDate].
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        if !(1..=12).contains(&month) || day == 0 {
            return Err(Error::InvalidDate);
        }
        if day as i64 > Self::days_in_month(year, month) {
            return Err(Error::InvalidDate);
        }
        Ok(Self { year, month, day })
    }

    /// Month length, from the distance to the first day of the next month.
    fn days_in_month(year: i32, month: u8) -> i64 {
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        days_from_civil(next_year, next_month, 1) - days_from_civil(year, month, 1)
    }

    /// Day of year, January 1st being day 1.
    /// Leap years are handled by the date difference itself.
    pub fn day_of_year(&self) -> u16 {
        let elapsed = days_from_civil(self.year, self.month, self.day)
            - days_from_civil(self.year, 1, 1);
        (elapsed + 1) as u16
    }
}

impl std::str::FromStr for CalendarDate {
    type Err = Error;

    /// Parses the leading `YYYY-MM-DD` of an UTC date (or date time) string.
    /// Anything following the first 10 characters is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ymd = s.trim().get(..10).ok_or(Error::InvalidDate)?;
        let bytes = ymd.as_bytes();

        if !ymd.is_ascii() || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(Error::InvalidDate);
        }

        let digits = |range: std::ops::Range<usize>| -> Result<u32, Error> {
            let field = &ymd[range];
            if !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::InvalidDate);
            }
            field.parse::<u32>().map_err(|_| Error::InvalidDate)
        };

        let year = digits(0..4)?;
        let month = digits(5..7)?;
        let day = digits(8..10)?;

        Self::new(year as i32, month as u8, day as u8)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<Epoch> for CalendarDate {
    /// UTC calendar day this [Epoch] falls in.
    fn from(epoch: Epoch) -> Self {
        let (year, month, day, _, _, _, _) = epoch.to_gregorian_utc();
        Self { year, month, day }
    }
}

/// Time of day, in fractional hours wrapped into [0, 24).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeOfDay(f64);

impl TimeOfDay {
    pub fn from_hours(hours: f64) -> Self {
        Self(wrap_hours(hours))
    }

    pub fn hours(&self) -> f64 {
        self.0
    }

    /// (hours, minutes, seconds), each field truncated (never rounded up).
    pub fn hms(&self) -> (u8, u8, u8) {
        let hours = self.0.floor();
        let minutes_f = (self.0 - hours) * 60.0;
        let minutes = minutes_f.floor();
        let seconds = ((minutes_f - minutes) * 60.0).floor();
        (hours as u8, minutes as u8, seconds as u8)
    }

    /// Elapsed [Duration] since midnight.
    pub fn since_midnight(&self) -> Duration {
        Duration::from_seconds(self.0 * 3600.0)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{:02}:{:02}:{:02}", h, m, s)
    }
}

/// Fixed offset to UTC, in hours. No daylight saving, no time zone database.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtcOffset(pub f64);

impl Default for UtcOffset {
    fn default() -> Self {
        Self(DEFAULT_UTC_OFFSET_HOURS)
    }
}

impl UtcOffset {
    pub fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Rough nautical time zone estimate: one hour every 15° of longitude.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        if !longitude_deg.is_finite() {
            return Self(0.0);
        }
        Self((longitude_deg / 15.0).round())
    }

    pub fn hours(&self) -> f64 {
        self.0
    }

    /// Shifts an UTC [TimeOfDay] to local time.
    pub fn to_local(&self, utc: TimeOfDay) -> TimeOfDay {
        TimeOfDay::from_hours(utc.hours() + self.0)
    }
}
