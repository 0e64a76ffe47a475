use log::debug;

use crate::{
    cfg::{Config, Error as ConfigError},
    coords::GeoPoint,
    projection::MapRect,
    subpoint::{SubPointSolver, SubSatellitePoint},
    sun::SunTimes,
    telemetry::{Fix, SatelliteView},
    track::{Footprint, GroundTrack},
};

/// Geographic overlay of a satellite on the planar map.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrbitOverlay {
    /// Empty when the sub-satellite latitude exceeds the inclination.
    pub track: GroundTrack,
    pub footprint: Footprint,
}

/// [OrbitOverlay] projected to screen coordinates, one polyline per
/// antimeridian free segment.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProjectedOverlay {
    pub track: Vec<Vec<(f64, f64)>>,
    pub footprint: Vec<Vec<(f64, f64)>>,
}

/// Stateless composition of the geometry components.
/// Holds nothing but immutable configuration: calls are pure.
#[derive(Debug, Clone)]
pub struct Engine {
    cfg: Config,
    solver: SubPointSolver,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            solver: SubPointSolver::new(Config::default().orbit),
            cfg: Config::default(),
        }
    }
}

impl Engine {
    /// Builds a new [Engine] from a validated [Config].
    pub fn new(cfg: Config) -> Result<Self, ConfigError> {
        cfg.validate()?;
        debug!("geometry engine deployed with {:?}", cfg);
        Ok(Self {
            solver: SubPointSolver::new(cfg.orbit),
            cfg,
        })
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Sunrise / sunset at the receiver location, for the fix UTC date.
    pub fn sun_times(&self, fix: &Fix) -> SunTimes {
        SunTimes::from_telemetry(
            fix.date_utc.as_deref(),
            fix.lat,
            fix.lng,
            self.cfg.utc_offset,
        )
    }

    /// Sub-satellite point of a satellite in view. `None` when the fix or the
    /// direction is incomplete, below horizon or geometrically degenerate.
    pub fn sub_satellite_point(&self, fix: &Fix, sat: &SatelliteView) -> Option<SubSatellitePoint> {
        let observer = fix.observer().ok()?;
        let direction = sat.direction().ok()?;
        self.solver.solve(&observer, &direction).ok()
    }

    /// Ground track and coverage footprint around a sub-satellite point.
    /// Either one is left empty when it cannot be synthesized.
    pub fn orbit_overlay(&self, sub_point: &SubSatellitePoint) -> OrbitOverlay {
        OrbitOverlay {
            track: GroundTrack::generate(&sub_point.position, &self.cfg.ground_track)
                .unwrap_or_default(),
            footprint: Footprint::generate(sub_point, &self.cfg.footprint)
                .unwrap_or_default(),
        }
    }

    /// Projects an [OrbitOverlay] onto the map drawn in `rect`.
    pub fn project_overlay(&self, rect: &MapRect, overlay: &OrbitOverlay) -> ProjectedOverlay {
        let project = |segments: Vec<Vec<GeoPoint>>| {
            segments
                .iter()
                .map(|segment| self.cfg.map.project_polyline(rect, segment))
                .collect::<Vec<_>>()
        };
        ProjectedOverlay {
            track: project(overlay.track.segments()),
            footprint: project(overlay.footprint.segments()),
        }
    }
}
