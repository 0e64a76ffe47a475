#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod constants;
mod coords;
mod engine;
mod error;
mod projection;
mod subpoint;
mod sun;
mod telemetry;
mod time;
mod track;
mod utils;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, Error as ConfigError};
    pub use crate::constants::{
        EARTH_GRAVITATION_MU_M3_S2, EARTH_MEAN_RADIUS_KM, EARTH_SEMI_MAJOR_AXIS_WGS84,
        MEO_NOMINAL_ALTITUDE_M, MEO_NOMINAL_INCLINATION_DEG, SUNRISE_SUNSET_ZENITH_DEG,
    };
    pub use crate::coords::{GeoPoint, TopocentricDirection};
    pub use crate::engine::{Engine, OrbitOverlay, ProjectedOverlay};
    pub use crate::error::Error;
    pub use crate::projection::{
        meridian, parallel, pick, sky_vector, Camera, MapProjection, MapRect, ProjectedPoint,
    };
    pub use crate::subpoint::{
        compute_sub_satellite_point, OrbitShell, SubPointSolver, SubSatellitePoint,
    };
    pub use crate::sun::{SunEvent, SunTimes};
    pub use crate::telemetry::{Fix, SatelliteView, Status};
    pub use crate::time::{CalendarDate, TimeOfDay, UtcOffset};
    pub use crate::track::{Footprint, FootprintOpts, GroundTrack, GroundTrackOpts};
    pub use crate::utils::{normalize_deg, wrap_hours, wrap_longitude};
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
