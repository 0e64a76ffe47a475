use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{EARTH_GRAVITATION_MU_M3_S2, EARTH_SEMI_MAJOR_AXIS_WGS84, MEO_NOMINAL_ALTITUDE_M},
    coords::{GeoPoint, TopocentricDirection},
    error::Error,
};

fn default_earth_radius_m() -> f64 {
    EARTH_SEMI_MAJOR_AXIS_WGS84
}

fn default_altitude_m() -> f64 {
    MEO_NOMINAL_ALTITUDE_M
}

fn default_mu() -> f64 {
    EARTH_GRAVITATION_MU_M3_S2
}

/// Concentric circular orbital shell every satellite is assumed to fly on.
/// Constellations are not distinguished.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitShell {
    /// Spherical Earth radius (meters)
    #[cfg_attr(feature = "serde", serde(default = "default_earth_radius_m"))]
    pub earth_radius_m: f64,
    /// Shell altitude above the sphere (meters)
    #[cfg_attr(feature = "serde", serde(default = "default_altitude_m"))]
    pub altitude_m: f64,
    /// Gravitational parameter (m^3 s-2)
    #[cfg_attr(feature = "serde", serde(default = "default_mu"))]
    pub mu_m3_s2: f64,
}

impl Default for OrbitShell {
    fn default() -> Self {
        Self {
            earth_radius_m: default_earth_radius_m(),
            altitude_m: default_altitude_m(),
            mu_m3_s2: default_mu(),
        }
    }
}

impl OrbitShell {
    /// Copies and returns [OrbitShell] at this altitude (meters)
    pub fn with_altitude_m(&self, altitude_m: f64) -> Self {
        let mut s = *self;
        s.altitude_m = altitude_m;
        s
    }

    /// Shell radius from Earth center (meters)
    pub fn radius_m(&self) -> f64 {
        self.earth_radius_m + self.altitude_m
    }

    /// Circular orbit velocity (m/s)
    pub fn circular_velocity_m_s(&self) -> f64 {
        (self.mu_m3_s2 / self.radius_m()).sqrt()
    }
}

/// Point on Earth directly below a satellite.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubSatellitePoint {
    pub position: GeoPoint,
    /// Nominal altitude of the shell (kilometers)
    pub altitude_km: f64,
    /// Circular orbit velocity at that shell (km/h)
    pub ground_speed_kmh: f64,
}

impl SubSatellitePoint {
    /// Circular orbit velocity (m/s)
    pub fn ground_speed_m_s(&self) -> f64 {
        self.ground_speed_kmh / 3.6
    }
}

/// Solves the sub-satellite point from a single topocentric observation,
/// by intersecting the line of sight with the [OrbitShell].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SubPointSolver {
    shell: OrbitShell,
}

impl SubPointSolver {
    pub fn new(shell: OrbitShell) -> Self {
        Self { shell }
    }

    pub fn shell(&self) -> &OrbitShell {
        &self.shell
    }

    /// Resolves the [SubSatellitePoint].
    ///
    /// Negative elevations are not rejected here (that is a caller side filter),
    /// the result remains numerically defined.
    ///
    /// ## Output
    /// - [Error::MissingInput] on non-finite observer or direction
    /// - [Error::NoForwardIntersection] when the line of sight never reaches
    ///   the shell ahead of the observer
    pub fn solve(
        &self,
        observer: &GeoPoint,
        direction: &TopocentricDirection,
    ) -> Result<SubSatellitePoint, Error> {
        if !observer.latitude_deg.is_finite()
            || !observer.longitude_deg.is_finite()
            || !direction.is_finite()
        {
            return Err(Error::MissingInput);
        }

        let re = self.shell.earth_radius_m;
        let rs = self.shell.radius_m();

        let rg = observer.to_cartesian(re);
        let los = observer.enu_basis() * direction.enu_unit_vector();

        // |rg + t.los| = rs
        let a = los.dot(&los);
        let b = 2.0 * rg.dot(&los);
        let c = rg.dot(&rg) - rs * rs;
        let disc = b * b - 4.0 * a * c;

        if !(disc > 0.0) {
            debug!(
                "{} (el={:.2}° az={:.2}°) - degenerate line of sight: disc={}",
                observer, direction.elevation_deg, direction.azimuth_deg, disc
            );
            return Err(Error::NoForwardIntersection);
        }

        let t = (-b + disc.sqrt()) / (2.0 * a);
        if !(t > 0.0) {
            debug!("{} - shell intersection behind observer (t={})", observer, t);
            return Err(Error::NoForwardIntersection);
        }

        let sat = rg + los * t;
        let surface = sat * (re / sat.norm());
        let position = GeoPoint::from_cartesian(&surface);

        let ground_speed_kmh = self.shell.circular_velocity_m_s() * 3.6;

        trace!(
            "{} (el={:.2}° az={:.2}°) - range={:.3}km sub-point={}",
            observer,
            direction.elevation_deg,
            direction.azimuth_deg,
            t / 1.0E3,
            position
        );

        Ok(SubSatellitePoint {
            position,
            altitude_km: self.shell.altitude_m / 1.0E3,
            ground_speed_kmh,
        })
    }
}

/// Sub-satellite point from raw nullable telemetry, on the default [OrbitShell].
/// `None` means unavailable: missing input or degenerate geometry.
/// Below horizon directions are filtered out.
pub fn compute_sub_satellite_point(
    latitude_deg: Option<f64>,
    longitude_deg: Option<f64>,
    elevation_deg: Option<f64>,
    azimuth_deg: Option<f64>,
) -> Option<SubSatellitePoint> {
    let observer = GeoPoint::from_options(latitude_deg, longitude_deg).ok()?;
    let direction = TopocentricDirection::from_options(elevation_deg, azimuth_deg).ok()?;
    SubPointSolver::default().solve(&observer, &direction).ok()
}
