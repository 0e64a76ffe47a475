use nalgebra::{Matrix3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    utils::{normalize_deg, wrap_longitude},
};

/// Point on the spherical Earth model, in decimal degrees.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    /// Latitude in [-90, 90] degrees
    pub latitude_deg: f64,
    /// Longitude in [-180, 180] degrees
    pub longitude_deg: f64,
}

impl GeoPoint {
    /// Builds a validated [GeoPoint]. Longitude is wrapped into [-180, 180],
    /// latitude is never guessed.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, Error> {
        if !latitude_deg.is_finite() || !longitude_deg.is_finite() {
            return Err(Error::MissingInput);
        }
        if latitude_deg.abs() > 90.0 {
            return Err(Error::LatitudeOutOfRange);
        }
        Ok(Self {
            latitude_deg,
            longitude_deg: wrap_longitude(longitude_deg),
        })
    }

    /// Builds a [GeoPoint] from nullable telemetry fields.
    pub fn from_options(latitude_deg: Option<f64>, longitude_deg: Option<f64>) -> Result<Self, Error> {
        match (latitude_deg, longitude_deg) {
            (Some(lat), Some(lon)) => Self::new(lat, lon),
            _ => Err(Error::MissingInput),
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Earth-centered cartesian coordinates on a sphere of given radius.
    pub fn to_cartesian(&self, radius: f64) -> Vector3<f64> {
        let (sin_lat, cos_lat) = self.latitude_rad().sin_cos();
        let (sin_lon, cos_lon) = self.longitude_rad().sin_cos();
        Vector3::new(
            radius * cos_lat * cos_lon,
            radius * cos_lat * sin_lon,
            radius * sin_lat,
        )
    }

    /// Spherical inverse of [Self::to_cartesian]. The vector norm is irrelevant.
    pub fn from_cartesian(v: &Vector3<f64>) -> Self {
        let lon = v[1].atan2(v[0]);
        let lat = v[2].atan2((v[0] * v[0] + v[1] * v[1]).sqrt());
        Self {
            latitude_deg: lat.to_degrees(),
            longitude_deg: lon.to_degrees(),
        }
    }

    /// Local East-North-Up basis, expressed in the Earth-centered frame.
    /// Columns are respectively East, North and Up unit vectors.
    pub fn enu_basis(&self) -> Matrix3<f64> {
        let (sin_lat, cos_lat) = self.latitude_rad().sin_cos();
        let (sin_lon, cos_lon) = self.longitude_rad().sin_cos();

        let east = Vector3::new(-sin_lon, cos_lon, 0.0);
        let north = Vector3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);
        let up = Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);

        Matrix3::from_columns(&[east, north, up])
    }

    /// Great circle angle to another point (radians).
    pub fn central_angle_rad(&self, rhs: &Self) -> f64 {
        let (lat1, lat2) = (self.latitude_rad(), rhs.latitude_rad());
        let dlon = rhs.longitude_rad() - self.longitude_rad();
        let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
        cos_angle.clamp(-1.0, 1.0).acos()
    }

    /// Spherical direct (forward) problem: point reached after travelling
    /// `distance_rad` along the great circle leaving `self` with `bearing_rad`
    /// (clockwise from true north).
    pub fn destination(&self, bearing_rad: f64, distance_rad: f64) -> Self {
        let (sin_lat0, cos_lat0) = self.latitude_rad().sin_cos();
        let (sin_d, cos_d) = distance_rad.sin_cos();

        let lat = (sin_lat0 * cos_d + cos_lat0 * sin_d * bearing_rad.cos()).asin();
        let lon = self.longitude_rad()
            + (bearing_rad.sin() * sin_d * cos_lat0).atan2(cos_d - sin_lat0 * lat.sin());

        Self {
            latitude_deg: lat.to_degrees(),
            longitude_deg: wrap_longitude(lon.to_degrees()),
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.latitude_deg, self.longitude_deg)
    }
}

/// Satellite direction as seen from the observer local horizon.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TopocentricDirection {
    /// Elevation above the horizon, in [0, 90] degrees
    pub elevation_deg: f64,
    /// Azimuth clockwise from true north, in [0, 360) degrees
    pub azimuth_deg: f64,
}

impl TopocentricDirection {
    /// Builds a validated direction. Azimuth gets wrapped into [0, 360),
    /// elevations outside [0, 90] are rejected.
    pub fn new(elevation_deg: f64, azimuth_deg: f64) -> Result<Self, Error> {
        if !elevation_deg.is_finite() || !azimuth_deg.is_finite() {
            return Err(Error::MissingInput);
        }
        if elevation_deg < 0.0 {
            return Err(Error::BelowHorizon);
        }
        if elevation_deg > 90.0 {
            return Err(Error::ElevationOutOfRange);
        }
        Ok(Self {
            elevation_deg,
            azimuth_deg: normalize_deg(azimuth_deg),
        })
    }

    /// Builds a direction from nullable telemetry fields.
    pub fn from_options(elevation_deg: Option<f64>, azimuth_deg: Option<f64>) -> Result<Self, Error> {
        match (elevation_deg, azimuth_deg) {
            (Some(el), Some(az)) => Self::new(el, az),
            _ => Err(Error::MissingInput),
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.elevation_deg.is_finite() && self.azimuth_deg.is_finite()
    }

    /// Unit line of sight in the local East-North-Up frame.
    pub fn enu_unit_vector(&self) -> Vector3<f64> {
        let (sin_el, cos_el) = self.elevation_deg.to_radians().sin_cos();
        let (sin_az, cos_az) = self.azimuth_deg.to_radians().sin_cos();
        Vector3::new(cos_el * sin_az, cos_el * cos_az, sin_el)
    }
}

/// Splits a polyline wherever two consecutive points jump across the antimeridian,
/// so each returned segment can be drawn on a planar map without wrapping.
pub(crate) fn split_at_antimeridian(points: &[GeoPoint]) -> Vec<Vec<GeoPoint>> {
    let mut segments = Vec::<Vec<GeoPoint>>::new();
    let mut current = Vec::<GeoPoint>::new();

    for point in points {
        if let Some(prev) = current.last() {
            if (point.longitude_deg - prev.longitude_deg).abs() > 180.0 {
                segments.push(std::mem::take(&mut current));
            }
        }
        current.push(*point);
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[cfg(test)]
mod test {
    use super::{split_at_antimeridian, GeoPoint, TopocentricDirection};
    use crate::error::Error;

    #[test]
    fn geo_point_validation() {
        assert_eq!(GeoPoint::new(f64::NAN, 0.0), Err(Error::MissingInput));
        assert_eq!(GeoPoint::new(0.0, f64::INFINITY), Err(Error::MissingInput));
        assert_eq!(GeoPoint::new(90.1, 0.0), Err(Error::LatitudeOutOfRange));
        assert_eq!(
            GeoPoint::from_options(None, Some(121.5)),
            Err(Error::MissingInput)
        );

        let wrapped = GeoPoint::new(10.0, 190.0).unwrap();
        assert_eq!(wrapped.longitude_deg, -170.0);
    }

    #[test]
    fn cartesian_round_trip() {
        let point = GeoPoint::new(25.0, 121.5).unwrap();
        let ecef = point.to_cartesian(6378137.0);
        assert!((ecef.norm() - 6378137.0).abs() < 1.0E-6);

        let back = GeoPoint::from_cartesian(&ecef);
        assert!((back.latitude_deg - 25.0).abs() < 1.0E-9);
        assert!((back.longitude_deg - 121.5).abs() < 1.0E-9);
    }

    #[test]
    fn enu_basis_is_orthonormal() {
        let point = GeoPoint::new(-33.0, 151.0).unwrap();
        let basis = point.enu_basis();
        let identity = basis.transpose() * basis;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((identity[(i, j)] - expected).abs() < 1.0E-12);
            }
        }
        // up is radial
        let up = basis.column(2).clone_owned();
        let radial = point.to_cartesian(1.0);
        assert!((up - radial).norm() < 1.0E-12);
    }

    #[test]
    fn destination_preserves_distance() {
        let start = GeoPoint::new(25.0, 121.5).unwrap();
        let distance = 0.5_f64;
        for bearing_deg in [0.0_f64, 45.0, 90.0, 180.0, 270.0] {
            let dest = start.destination(bearing_deg.to_radians(), distance);
            assert!((start.central_angle_rad(&dest) - distance).abs() < 1.0E-9);
        }
        let north = start.destination(0.0, distance);
        assert!(north.latitude_deg > start.latitude_deg);
        assert!((north.longitude_deg - start.longitude_deg).abs() < 1.0E-9);
    }

    #[test]
    fn direction_validation() {
        assert_eq!(
            TopocentricDirection::new(-1.0, 10.0),
            Err(Error::BelowHorizon)
        );
        assert_eq!(
            TopocentricDirection::new(95.0, 90.0),
            Err(Error::ElevationOutOfRange)
        );
        assert_eq!(
            TopocentricDirection::from_options(Some(90.5), Some(0.0)),
            Err(Error::ElevationOutOfRange)
        );
        let zenith = TopocentricDirection::new(90.0, 370.0).unwrap();
        assert_eq!(zenith.elevation_deg, 90.0);
        assert_eq!(zenith.azimuth_deg, 10.0);
        assert_eq!(
            TopocentricDirection::from_options(Some(10.0), None),
            Err(Error::MissingInput)
        );
        let dir = TopocentricDirection::new(45.0, -90.0).unwrap();
        assert_eq!(dir.azimuth_deg, 270.0);

        let east = TopocentricDirection::new(0.0, 90.0).unwrap().enu_unit_vector();
        assert!((east[0] - 1.0).abs() < 1.0E-12);
        assert!(east[1].abs() < 1.0E-12);
        assert!(east[2].abs() < 1.0E-12);
    }

    #[test]
    fn antimeridian_split() {
        let points = [
            GeoPoint::new(0.0, 170.0).unwrap(),
            GeoPoint::new(0.0, 179.0).unwrap(),
            GeoPoint::new(0.0, -179.0).unwrap(),
            GeoPoint::new(0.0, -170.0).unwrap(),
        ];
        let segments = split_at_antimeridian(&points);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].len(), 2);
        assert_eq!(segments[1].len(), 2);

        assert!(split_at_antimeridian(&[]).is_empty());
    }
}
