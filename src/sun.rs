//! Approximate solar position sunrise / sunset calculator.
use log::{debug, trace};

use crate::{
    constants::SUNRISE_SUNSET_ZENITH_DEG,
    coords::GeoPoint,
    error::Error,
    time::{CalendarDate, TimeOfDay, UtcOffset},
    utils::{normalize_deg, quadrant_deg, wrap_hours},
};

/// Solar event of interest
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SunEvent {
    Sunrise,
    Sunset,
}

impl SunEvent {
    /// Local hour the approximate time is seeded from.
    fn reference_hour(&self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }

    /// Local hour angle (hours) from the hour angle cosine.
    fn hour_angle_hours(&self, cos_h: f64) -> f64 {
        let h_deg = cos_h.acos().to_degrees();
        match self {
            Self::Sunrise => (360.0 - h_deg) / 15.0,
            Self::Sunset => h_deg / 15.0,
        }
    }

    /// UTC time of this event, in fractional hours wrapped into [0, 24).
    ///
    /// ## Input
    /// - date: UTC calendar day
    /// - observer: location on the spherical Earth
    ///
    /// ## Output
    /// - [Error::PolarNight] when the sun never rises that day
    /// - [Error::PolarDay] when the sun never sets that day
    pub fn utc_hours(&self, date: &CalendarDate, observer: &GeoPoint) -> Result<f64, Error> {
        let (lat_deg, lon_deg) = (observer.latitude_deg, observer.longitude_deg);
        if !lat_deg.is_finite() || !lon_deg.is_finite() {
            return Err(Error::MissingInput);
        }

        let n = date.day_of_year() as f64;
        let lng_hour = lon_deg / 15.0;
        let t = n + (self.reference_hour() - lng_hour) / 24.0;

        // mean anomaly
        let m = 0.9856 * t - 3.289;
        let m_rad = m.to_radians();

        // true longitude
        let l = normalize_deg(
            m + 1.916 * m_rad.sin() + 0.020 * (2.0 * m_rad).sin() + 282.634,
        );

        // right ascension, brought back into the quadrant of L
        let ra = normalize_deg((0.91764 * l.to_radians().tan()).atan().to_degrees());
        let ra = ra + (quadrant_deg(l) - quadrant_deg(ra));
        let ra_hours = ra / 15.0;

        let sin_dec = 0.39782 * l.to_radians().sin();
        let cos_dec = sin_dec.asin().cos();

        let lat_rad = lat_deg.to_radians();
        let cos_h = (SUNRISE_SUNSET_ZENITH_DEG.to_radians().cos() - sin_dec * lat_rad.sin())
            / (cos_dec * lat_rad.cos());

        trace!(
            "{} {:?}: N={} t={:.4} M={:.4} L={:.4} RA={:.4}h cosH={:.6}",
            date,
            self,
            n,
            t,
            m,
            l,
            ra_hours,
            cos_h
        );

        if cos_h > 1.0 {
            debug!("{} {:?}: polar night at {}", date, self, observer);
            return Err(Error::PolarNight);
        }
        if cos_h < -1.0 {
            debug!("{} {:?}: polar day at {}", date, self, observer);
            return Err(Error::PolarDay);
        }

        let h = self.hour_angle_hours(cos_h);

        // local mean time
        let local_mean = h + ra_hours - 0.06571 * t - 6.622;

        Ok(wrap_hours(local_mean - lng_hour))
    }

    /// Time of this event expressed at the given fixed UTC offset.
    /// A non-finite offset is reported as [Error::MissingInput].
    pub fn local_time(
        &self,
        date: &CalendarDate,
        observer: &GeoPoint,
        offset: UtcOffset,
    ) -> Result<TimeOfDay, Error> {
        if !offset.hours().is_finite() {
            return Err(Error::MissingInput);
        }
        let utc = self.utc_hours(date, observer)?;
        Ok(offset.to_local(TimeOfDay::from_hours(utc)))
    }
}

/// Sunrise and sunset of a given day, `None` meaning unavailable.
/// Both events are resolved independently.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SunTimes {
    pub sunrise: Option<TimeOfDay>,
    pub sunset: Option<TimeOfDay>,
}

impl SunTimes {
    /// Both events unavailable
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Computes [SunTimes] at the given fixed UTC offset.
    pub fn compute(date: &CalendarDate, observer: &GeoPoint, offset: UtcOffset) -> Self {
        Self {
            sunrise: SunEvent::Sunrise.local_time(date, observer, offset).ok(),
            sunset: SunEvent::Sunset.local_time(date, observer, offset).ok(),
        }
    }

    /// Computes [SunTimes] from raw nullable telemetry: a `YYYY-MM-DD…` UTC
    /// date string and the receiver coordinates. Any missing, invalid or
    /// non-finite field makes both events unavailable.
    pub fn from_telemetry(
        date_utc: Option<&str>,
        latitude_deg: Option<f64>,
        longitude_deg: Option<f64>,
        offset: UtcOffset,
    ) -> Self {
        let date = match date_utc.map(str::parse::<CalendarDate>) {
            Some(Ok(date)) => date,
            _ => return Self::unavailable(),
        };
        match GeoPoint::from_options(latitude_deg, longitude_deg) {
            Ok(observer) => Self::compute(&date, &observer, offset),
            Err(_) => Self::unavailable(),
        }
    }

    /// True when both events are defined
    pub fn is_available(&self) -> bool {
        self.sunrise.is_some() && self.sunset.is_some()
    }
}

impl std::fmt::Display for SunTimes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.sunrise {
            Some(t) => write!(f, "sunrise {}", t)?,
            None => write!(f, "sunrise --")?,
        }
        match self.sunset {
            Some(t) => write!(f, " sunset {}", t),
            None => write!(f, " sunset --"),
        }
    }
}
