use itertools::Itertools;
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{EARTH_MEAN_RADIUS_KM, FOOTPRINT_SHRINK_FACTOR, MEO_NOMINAL_INCLINATION_DEG},
    coords::{split_at_antimeridian, GeoPoint},
    error::Error,
    subpoint::SubSatellitePoint,
    utils::sweep_steps,
};

fn default_inclination_deg() -> f64 {
    MEO_NOMINAL_INCLINATION_DEG
}

fn default_track_step_deg() -> f64 {
    2.0
}

fn default_footprint_radius_km() -> f64 {
    EARTH_MEAN_RADIUS_KM
}

fn default_shrink_factor() -> f64 {
    FOOTPRINT_SHRINK_FACTOR
}

fn default_footprint_step_deg() -> f64 {
    3.0
}

/// [GroundTrack] synthesis options
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroundTrackOpts {
    /// Orbital inclination (degrees)
    #[cfg_attr(feature = "serde", serde(default = "default_inclination_deg"))]
    pub inclination_deg: f64,
    /// Longitude sweep step (degrees)
    #[cfg_attr(feature = "serde", serde(default = "default_track_step_deg"))]
    pub step_deg: f64,
}

impl Default for GroundTrackOpts {
    fn default() -> Self {
        Self {
            inclination_deg: default_inclination_deg(),
            step_deg: default_track_step_deg(),
        }
    }
}

/// Ground track of an inclined circular orbit: an open polyline
/// sweeping longitudes from -180° to 180°.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GroundTrack {
    inclination_rad: f64,
    phase_rad: f64,
    pub points: Vec<GeoPoint>,
}

impl GroundTrack {
    /// Synthesizes the great circle of given inclination passing through `sub_point`.
    ///
    /// ## Output
    /// - [Error::InclinationExceeded] when |latitude| is larger than the inclination,
    ///   in which case no track can exist.
    /// - [Error::InvalidStep] when the sweep step is not within [0.01, 360] degrees.
    pub fn generate(sub_point: &GeoPoint, opts: &GroundTrackOpts) -> Result<Self, Error> {
        let inclination_rad = opts.inclination_deg.to_radians();
        let ratio = sub_point.latitude_rad().sin() / inclination_rad.sin();

        if !ratio.is_finite() || ratio.abs() > 1.0 {
            debug!(
                "{} - no ground track for inclination {}° (ratio={})",
                sub_point, opts.inclination_deg, ratio
            );
            return Err(Error::InclinationExceeded);
        }

        let phase_rad = ratio.asin() - sub_point.longitude_rad();

        trace!(
            "{} - ground track: inclination={}° phase={:.4}rad",
            sub_point,
            opts.inclination_deg,
            phase_rad
        );

        let mut track = Self {
            inclination_rad,
            phase_rad,
            points: Vec::new(),
        };

        track.points = (0..=sweep_steps(360.0, opts.step_deg)?)
            .map(|i| {
                let lon_deg = -180.0 + i as f64 * opts.step_deg;
                GeoPoint {
                    latitude_deg: track.latitude_at(lon_deg),
                    longitude_deg: lon_deg,
                }
            })
            .collect_vec();

        Ok(track)
    }

    /// Track latitude (degrees) at given longitude (degrees).
    pub fn latitude_at(&self, longitude_deg: f64) -> f64 {
        (self.inclination_rad.sin() * (longitude_deg.to_radians() + self.phase_rad).sin())
            .asin()
            .to_degrees()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Polyline split into pieces that never wrap around the antimeridian.
    pub fn segments(&self) -> Vec<Vec<GeoPoint>> {
        split_at_antimeridian(&self.points)
    }
}

/// [Footprint] synthesis options
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FootprintOpts {
    /// Sphere radius used for the visibility half angle (kilometers)
    #[cfg_attr(feature = "serde", serde(default = "default_footprint_radius_km"))]
    pub earth_radius_km: f64,
    /// Usable signal fraction of the geometric horizon half angle, in (0, 1]
    #[cfg_attr(feature = "serde", serde(default = "default_shrink_factor"))]
    pub shrink_factor: f64,
    /// Bearing sweep step (degrees)
    #[cfg_attr(feature = "serde", serde(default = "default_footprint_step_deg"))]
    pub step_deg: f64,
}

impl Default for FootprintOpts {
    fn default() -> Self {
        Self {
            earth_radius_km: default_footprint_radius_km(),
            shrink_factor: default_shrink_factor(),
            step_deg: default_footprint_step_deg(),
        }
    }
}

impl FootprintOpts {
    /// Coverage half angle (radians) for a satellite at this altitude.
    pub fn half_angle_rad(&self, altitude_km: f64) -> f64 {
        let horizon = (self.earth_radius_km / (self.earth_radius_km + altitude_km)).acos();
        horizon * self.shrink_factor
    }
}

/// Coverage footprint: small circle centered on the sub-satellite point,
/// closed polygon (first and last points coincide).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Footprint {
    pub center: GeoPoint,
    /// Half angle of visibility (radians)
    pub half_angle_rad: f64,
    pub points: Vec<GeoPoint>,
}

impl Footprint {
    /// Sweeps bearings from 0° to 360° around the sub-satellite point.
    /// Fails with [Error::InvalidStep] when the sweep step is not within [0.01, 360] degrees.
    pub fn generate(sub_point: &SubSatellitePoint, opts: &FootprintOpts) -> Result<Self, Error> {
        let center = sub_point.position;
        let half_angle_rad = opts.half_angle_rad(sub_point.altitude_km);

        trace!(
            "{} - footprint: psi={:.4}° (shrink={})",
            center,
            half_angle_rad.to_degrees(),
            opts.shrink_factor
        );

        let points = (0..=sweep_steps(360.0, opts.step_deg)?)
            .map(|i| {
                let bearing_rad = (i as f64 * opts.step_deg).to_radians();
                center.destination(bearing_rad, half_angle_rad)
            })
            .collect_vec();

        Ok(Self {
            center,
            half_angle_rad,
            points,
        })
    }

    /// True if this point lies within the coverage circle.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.center.central_angle_rad(point) <= self.half_angle_rad
    }

    /// Boundary split into pieces that never wrap around the antimeridian.
    pub fn segments(&self) -> Vec<Vec<GeoPoint>> {
        split_at_antimeridian(&self.points)
    }
}
