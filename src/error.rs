use thiserror::Error;

/// Expected domain conditions. None of them is fatal: the nullable entry points
/// collapse every [Error] into an "unavailable" result.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// A required numeric field is missing, NaN or infinite.
    #[error("missing or non-finite input")]
    MissingInput,

    /// Date string does not start with a valid `YYYY-MM-DD` UTC calendar day.
    #[error("invalid calendar date")]
    InvalidDate,

    #[error("latitude out of [-90, 90] range")]
    LatitudeOutOfRange,

    /// Satellite direction past the zenith (elevation above 90°).
    #[error("elevation above 90°")]
    ElevationOutOfRange,

    /// Satellite direction below the local horizon.
    /// Filtering these out is a caller concern, the solver itself accepts them.
    #[error("direction below horizon (negative elevation)")]
    BelowHorizon,

    /// Sun stays below the horizon for the whole day (hour angle cosine > 1).
    #[error("polar night: no sunrise / sunset")]
    PolarNight,

    /// Sun stays above the horizon for the whole day (hour angle cosine < -1).
    #[error("polar day: no sunrise / sunset")]
    PolarDay,

    /// Line of sight never reaches the orbital shell in the forward direction.
    #[error("line of sight does not intersect the orbital shell")]
    NoForwardIntersection,

    /// Sub-satellite latitude exceeds the orbital inclination: no great circle
    /// of that inclination passes through this point.
    #[error("sub-satellite latitude exceeds orbital inclination")]
    InclinationExceeded,

    /// Polyline sweep step is not finite or outside [0.01, 360] degrees.
    #[error("invalid sweep step")]
    InvalidStep,
}
