use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::MIN_SWEEP_STEP_DEG,
    projection::MapProjection,
    subpoint::OrbitShell,
    time::UtcOffset,
    track::{FootprintOpts, GroundTrackOpts},
};

/// Configuration Error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("utc offset must be finite, within [-12h, +14h]")]
    InvalidUtcOffset,
    #[error("earth radius and orbital altitude must be strictly positive")]
    InvalidOrbitShell,
    #[error("gravitational parameter must be strictly positive")]
    InvalidGravitationalParameter,
    #[error("orbital inclination must be within ]0, 180[ degrees")]
    InvalidInclination,
    #[error("sweep step must be within [0.01, 360] degrees")]
    InvalidStep,
    #[error("footprint shrink factor must be within ]0, 1]")]
    InvalidShrinkFactor,
    #[error("degenerate map latitude or longitude band")]
    DegenerateMapBand,
}

fn default_utc_offset() -> UtcOffset {
    UtcOffset::default()
}

/// Geometry engine [Config]uration. [Config::default] reproduces the
/// reference dashboard: UTC+8 local times, 20,200 km MEO shell,
/// 55° inclined ground track, 0.7 shrunk footprint and a 90°N..60°S map.
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Fixed offset sunrise / sunset get expressed at
    #[cfg_attr(feature = "serde", serde(default = "default_utc_offset"))]
    pub utc_offset: UtcOffset,
    /// Orbital shell used by the sub-satellite point solver
    #[cfg_attr(feature = "serde", serde(default))]
    pub orbit: OrbitShell,
    /// Ground track synthesis
    #[cfg_attr(feature = "serde", serde(default))]
    pub ground_track: GroundTrackOpts,
    /// Coverage footprint synthesis
    #[cfg_attr(feature = "serde", serde(default))]
    pub footprint: FootprintOpts,
    /// Planar map mapping
    #[cfg_attr(feature = "serde", serde(default))]
    pub map: MapProjection,
}

impl Config {
    /// Copies and returns [Config] with desired [UtcOffset]
    pub fn with_utc_offset(&self, offset: UtcOffset) -> Self {
        let mut s = self.clone();
        s.utc_offset = offset;
        s
    }

    /// Copies and returns [Config] with desired [OrbitShell]
    pub fn with_orbit_shell(&self, shell: OrbitShell) -> Self {
        let mut s = self.clone();
        s.orbit = shell;
        s
    }

    /// Copies and returns [Config] with desired [GroundTrackOpts]
    pub fn with_ground_track(&self, opts: GroundTrackOpts) -> Self {
        let mut s = self.clone();
        s.ground_track = opts;
        s
    }

    /// Copies and returns [Config] with desired [FootprintOpts]
    pub fn with_footprint(&self, opts: FootprintOpts) -> Self {
        let mut s = self.clone();
        s.footprint = opts;
        s
    }

    /// Copies and returns [Config] with desired [MapProjection]
    pub fn with_map_projection(&self, map: MapProjection) -> Self {
        let mut s = self.clone();
        s.map = map;
        s
    }

    /// Verifies this setup makes physical sense.
    pub fn validate(&self) -> Result<(), Error> {
        let offset = self.utc_offset.hours();
        if !offset.is_finite() || !(-12.0..=14.0).contains(&offset) {
            return Err(Error::InvalidUtcOffset);
        }

        if !(self.orbit.earth_radius_m > 0.0) || !(self.orbit.altitude_m > 0.0) {
            return Err(Error::InvalidOrbitShell);
        }
        if !(self.orbit.mu_m3_s2 > 0.0) {
            return Err(Error::InvalidGravitationalParameter);
        }

        let inclination = self.ground_track.inclination_deg;
        if !(inclination > 0.0 && inclination < 180.0) {
            return Err(Error::InvalidInclination);
        }

        for step in [self.ground_track.step_deg, self.footprint.step_deg] {
            if !(MIN_SWEEP_STEP_DEG..=360.0).contains(&step) {
                return Err(Error::InvalidStep);
            }
        }

        let shrink = self.footprint.shrink_factor;
        if !(shrink > 0.0 && shrink <= 1.0) || !(self.footprint.earth_radius_km > 0.0) {
            return Err(Error::InvalidShrinkFactor);
        }

        let map = &self.map;
        if !(map.lon_max_deg > map.lon_min_deg) || !(map.lat_max_deg > map.lat_min_deg) {
            return Err(Error::DegenerateMapBand);
        }

        Ok(())
    }
}
