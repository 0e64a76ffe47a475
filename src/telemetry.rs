use std::{collections::BTreeMap, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    coords::{GeoPoint, TopocentricDirection},
    error::Error,
    prelude::{Constellation, SV},
    time::CalendarDate,
};

/// Receiver fix as published by the status endpoint.
/// Every field is nullable: receivers report partial fixes.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fix {
    /// Latitude (degrees)
    pub lat: Option<f64>,
    /// Longitude (degrees)
    pub lng: Option<f64>,
    /// UTC date, `YYYY-MM-DD…`
    pub date_utc: Option<String>,
}

impl Fix {
    /// Receiver location
    pub fn observer(&self) -> Result<GeoPoint, Error> {
        GeoPoint::from_options(self.lat, self.lng)
    }

    /// UTC calendar day
    pub fn date(&self) -> Result<CalendarDate, Error> {
        self.date_utc
            .as_deref()
            .ok_or(Error::MissingInput)?
            .parse::<CalendarDate>()
    }
}

/// One satellite in view.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatelliteView {
    /// Constellation name as reported ("GPS", "GLONASS", "Galileo"...)
    #[cfg_attr(feature = "serde", serde(default))]
    pub system: Option<String>,
    /// Elevation (degrees)
    #[cfg_attr(feature = "serde", serde(default))]
    pub elev: Option<f64>,
    /// Azimuth (degrees)
    #[cfg_attr(feature = "serde", serde(default))]
    pub az: Option<f64>,
    /// Signal to noise ratio (dB.Hz)
    #[cfg_attr(feature = "serde", serde(default))]
    pub snr: Option<f64>,
    /// Contributes to the current fix
    #[cfg_attr(feature = "serde", serde(default))]
    pub used: bool,
}

impl SatelliteView {
    /// Direction in the sky, below horizon directions are rejected.
    pub fn direction(&self) -> Result<TopocentricDirection, Error> {
        TopocentricDirection::from_options(self.elev, self.az)
    }

    /// [Constellation] this satellite belongs to, if the reported name is known.
    /// "GNSS" designates a multi constellation receiver channel.
    pub fn constellation(&self) -> Option<Constellation> {
        let system = self.system.as_deref()?.trim();
        if system.eq_ignore_ascii_case("gnss") {
            return Some(Constellation::Mixed);
        }
        Constellation::from_str(system).ok()
    }

    /// Satellite vehicle identity, from the PRN this view is indexed by.
    pub fn sv(&self, prn: &str) -> Option<SV> {
        let prn = prn.trim().parse::<u8>().ok()?;
        Some(SV::new(self.constellation()?, prn))
    }
}

/// Latest status snapshot: receiver fix and satellites in view, indexed by PRN.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Status {
    #[cfg_attr(feature = "serde", serde(default))]
    pub fix: Fix,
    #[cfg_attr(feature = "serde", serde(default))]
    pub satellites: BTreeMap<String, SatelliteView>,
}

impl Status {
    /// Satellite to plot the orbit of: the preferred PRN when in view,
    /// otherwise the first satellite used in the fix, otherwise the first one.
    pub fn select_orbit_satellite(&self, preferred: Option<&str>) -> Option<(&str, &SatelliteView)> {
        if let Some((prn, sat)) = preferred.and_then(|prn| self.satellites.get_key_value(prn)) {
            return Some((prn.as_str(), sat));
        }
        self.satellites
            .iter()
            .find(|(_, sat)| sat.used)
            .or_else(|| self.satellites.iter().next())
            .map(|(prn, sat)| (prn.as_str(), sat))
    }
}

#[cfg(test)]
mod test {
    use super::{Fix, SatelliteView, Status};
    use crate::{
        error::Error,
        prelude::{Constellation, SV},
    };

    fn view(system: &str, elev: Option<f64>, used: bool) -> SatelliteView {
        SatelliteView {
            system: Some(system.to_string()),
            elev,
            az: Some(90.0),
            snr: Some(40.0),
            used,
        }
    }

    #[test]
    fn fix_validation() {
        let fix = Fix {
            lat: Some(25.0),
            lng: None,
            date_utc: Some("2024-06-21".to_string()),
        };
        assert_eq!(fix.observer(), Err(Error::MissingInput));
        assert!(fix.date().is_ok());
        assert_eq!(Fix::default().date(), Err(Error::MissingInput));
    }

    #[test]
    fn constellations() {
        assert_eq!(view("GPS", None, false).constellation(), Some(Constellation::GPS));
        assert_eq!(
            view("BeiDou", None, false).constellation(),
            Some(Constellation::BeiDou)
        );
        assert_eq!(view("IRNSS", None, false).constellation(), Some(Constellation::IRNSS));
        assert_eq!(view("GNSS", None, false).constellation(), Some(Constellation::Mixed));
        assert_eq!(view("unknown", None, false).constellation(), None);
        assert_eq!(
            view("Galileo", None, false).sv("12"),
            Some(SV::new(Constellation::Galileo, 12))
        );
        assert_eq!(view("GPS", None, false).sv("abc"), None);
    }

    #[test]
    fn below_horizon_is_filtered() {
        assert_eq!(
            view("GPS", Some(-3.0), true).direction(),
            Err(Error::BelowHorizon)
        );
        assert!(view("GPS", Some(3.0), true).direction().is_ok());
    }

    #[test]
    fn orbit_satellite_selection() {
        let mut status = Status::default();
        assert!(status.select_orbit_satellite(None).is_none());

        status
            .satellites
            .insert("05".to_string(), view("GPS", Some(10.0), false));
        status
            .satellites
            .insert("12".to_string(), view("GPS", Some(40.0), true));
        status
            .satellites
            .insert("20".to_string(), view("GPS", Some(70.0), false));

        let (prn, _) = status.select_orbit_satellite(None).unwrap();
        assert_eq!(prn, "12");

        let (prn, _) = status.select_orbit_satellite(Some("20")).unwrap();
        assert_eq!(prn, "20");

        let (prn, _) = status.select_orbit_satellite(Some("99")).unwrap();
        assert_eq!(prn, "12");

        status.satellites.get_mut("12").unwrap().used = false;
        let (prn, _) = status.select_orbit_satellite(None).unwrap();
        assert_eq!(prn, "05");
    }
}
