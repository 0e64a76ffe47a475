/// WGS84 Earth Frame Ellipsoid semi-major axis (meters),
/// used as the radius of the spherical Earth model.
pub const EARTH_SEMI_MAJOR_AXIS_WGS84: f64 = 6378137.0_f64;

/// Earth mean radius (kilometers)
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Earth gravitational constant (m^3 s-2)
pub const EARTH_GRAVITATION_MU_M3_S2: f64 = 3.986004418E14;

/// Nominal altitude of the MEO shell (GPS like) above the sphere (meters)
pub const MEO_NOMINAL_ALTITUDE_M: f64 = 20_200_000.0;

/// Nominal MEO orbital inclination (degrees)
pub const MEO_NOMINAL_INCLINATION_DEG: f64 = 55.0;

/// Official sunrise / sunset solar zenith angle (degrees),
/// includes standard refraction and the solar disk radius.
pub const SUNRISE_SUNSET_ZENITH_DEG: f64 = 90.833;

/// Shrinks the geometric horizon down to a usable signal boundary.
pub const FOOTPRINT_SHRINK_FACTOR: f64 = 0.7;

/// Fixed UTC offset of the reference deployment (hours)
pub const DEFAULT_UTC_OFFSET_HOURS: f64 = 8.0;

/// Finest longitude / bearing sweep step accepted (degrees)
pub const MIN_SWEEP_STEP_DEG: f64 = 0.01;
