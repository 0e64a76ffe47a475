//! Planar and spherical projections of geographic / topocentric coordinates.
//! Pure transforms: no canvas state is kept here.
pub(crate) mod globe;
pub(crate) mod map;

pub use globe::{meridian, parallel, pick, sky_vector, Camera, ProjectedPoint};
pub use map::{MapProjection, MapRect};
