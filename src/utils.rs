use crate::{constants::MIN_SWEEP_STEP_DEG, error::Error};

/// Wraps an angle into [0, 360) degrees.
pub fn normalize_deg(angle_deg: f64) -> f64 {
    let wrapped = angle_deg.rem_euclid(360.0);
    // rem_euclid may round tiny negative values up to the modulus
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wraps fractional hours into [0, 24).
pub fn wrap_hours(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(24.0);
    if wrapped >= 24.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wraps a longitude into [-180, 180] degrees.
/// Values already in range are returned untouched, so both -180 and 180 survive.
pub fn wrap_longitude(lon_deg: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon_deg) {
        lon_deg
    } else {
        (lon_deg + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Returns the floor-rounded 90° quadrant an angle in degrees belongs to.
pub fn quadrant_deg(angle_deg: f64) -> f64 {
    (angle_deg / 90.0).floor() * 90.0
}

/// Number of fixed steps needed to sweep `span` degrees, bounds included.
pub(crate) fn sweep_steps(span_deg: f64, step_deg: f64) -> Result<usize, Error> {
    if !(MIN_SWEEP_STEP_DEG..=span_deg).contains(&step_deg) {
        return Err(Error::InvalidStep);
    }
    Ok((span_deg / step_deg + 1.0E-9).floor() as usize)
}
