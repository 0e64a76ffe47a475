use itertools::Itertools;
use nalgebra::Vector3;
use std::f64::consts::{FRAC_PI_2, PI};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coords::TopocentricDirection;

/// Radians of rotation per dragged pixel.
const DRAG_SENSITIVITY_RAD: f64 = 0.01;

/// Pitch never reaches the poles, so the globe cannot flip over.
const PITCH_LIMIT_RAD: f64 = FRAC_PI_2 - 0.1;

/// Globe camera (projection frame). Owned by the caller and passed
/// explicitly to every projection, so independent views may coexist.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Camera {
    /// Rotation about the vertical axis (radians)
    pub yaw_rad: f64,
    /// Rotation about the horizontal axis (radians)
    pub pitch_rad: f64,
}

/// Orthographic projection result, relative to the globe center.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    /// Rotated depth: positive faces the viewer.
    pub depth: f64,
}

impl ProjectedPoint {
    /// Front hemisphere. Back hemisphere points are still valid,
    /// usually drawn first and dimmed.
    pub fn is_front(&self) -> bool {
        self.depth >= 0.0
    }
}

impl Camera {
    pub fn new(yaw_rad: f64, pitch_rad: f64) -> Self {
        Self { yaw_rad, pitch_rad }
    }

    /// Rotates a point: yaw about the vertical axis first,
    /// then pitch about the resulting horizontal axis.
    pub fn rotate(&self, point: &Vector3<f64>) -> Vector3<f64> {
        let (x, y, z) = (point[0], point[1], point[2]);
        let (sin_yaw, cos_yaw) = self.yaw_rad.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch_rad.sin_cos();

        let x1 = x * cos_yaw - z * sin_yaw;
        let z1 = x * sin_yaw + z * cos_yaw;

        let y1 = y * cos_pitch - z1 * sin_pitch;
        let z2 = y * sin_pitch + z1 * cos_pitch;

        Vector3::new(x1, y1, z2)
    }

    /// Rotates then projects a unit sphere point onto a globe of given radius.
    /// Screen y grows downward.
    pub fn project(&self, point: &Vector3<f64>, radius: f64) -> ProjectedPoint {
        let rotated = self.rotate(point);
        ProjectedPoint {
            x: rotated[0] * radius,
            y: -rotated[1] * radius,
            depth: rotated[2],
        }
    }

    /// Projects a topocentric direction, see [sky_vector].
    pub fn project_direction(&self, direction: &TopocentricDirection, radius: f64) -> ProjectedPoint {
        self.project(&sky_vector(direction), radius)
    }

    /// New [Camera] after a pointer drag of (dx, dy) pixels.
    pub fn drag(&self, dx: f64, dy: f64) -> Self {
        let pitch_rad = (self.pitch_rad + dy * DRAG_SENSITIVITY_RAD)
            .clamp(-PITCH_LIMIT_RAD, PITCH_LIMIT_RAD);
        Self {
            yaw_rad: self.yaw_rad - dx * DRAG_SENSITIVITY_RAD,
            pitch_rad,
        }
    }
}

/// Unit sphere point of a topocentric direction: y is up (zenith),
/// z points north and x east.
pub fn sky_vector(direction: &TopocentricDirection) -> Vector3<f64> {
    let (sin_el, cos_el) = direction.elevation_deg.to_radians().sin_cos();
    let (sin_az, cos_az) = direction.azimuth_deg.to_radians().sin_cos();
    Vector3::new(cos_el * sin_az, sin_el, cos_el * cos_az)
}

/// Circle of constant latitude on the unit sphere, `steps + 1` points (closed).
/// Empty when `steps` is null.
pub fn parallel(latitude_deg: f64, steps: usize) -> Vec<Vector3<f64>> {
    if steps == 0 {
        return Vec::new();
    }
    let (sin_lat, cos_lat) = latitude_deg.to_radians().sin_cos();
    (0..=steps)
        .map(|i| {
            let lon_rad = i as f64 / steps as f64 * 2.0 * PI;
            Vector3::new(cos_lat * lon_rad.sin(), sin_lat, cos_lat * lon_rad.cos())
        })
        .collect_vec()
}

/// Half great circle of constant longitude, pole to pole, `steps + 1` points.
/// Empty when `steps` is null.
pub fn meridian(longitude_deg: f64, steps: usize) -> Vec<Vector3<f64>> {
    if steps == 0 {
        return Vec::new();
    }
    let (sin_lon, cos_lon) = longitude_deg.to_radians().sin_cos();
    (0..=steps)
        .map(|i| {
            let lat_rad = i as f64 / steps as f64 * PI - FRAC_PI_2;
            let (sin_lat, cos_lat) = lat_rad.sin_cos();
            Vector3::new(cos_lat * sin_lon, sin_lat, cos_lat * cos_lon)
        })
        .collect_vec()
}

/// Index of the front hemisphere point nearest to (x, y), strictly within
/// `radius_px`. Back hemisphere points are never picked.
pub fn pick(points: &[ProjectedPoint], x: f64, y: f64, radius_px: f64) -> Option<usize> {
    let max_dist2 = radius_px * radius_px;
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_front())
        .map(|(i, p)| (i, (p.x - x).powi(2) + (p.y - y).powi(2)))
        .filter(|(_, dist2)| *dist2 < max_dist2)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod test {
    use super::{meridian, parallel, pick, sky_vector, Camera, ProjectedPoint, PITCH_LIMIT_RAD};
    use crate::coords::TopocentricDirection;
    use nalgebra::Vector3;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn identity_camera() {
        let camera = Camera::default();
        let p = camera.project(&Vector3::new(0.5, 0.5, 0.70710678), 100.0);
        assert!((p.x - 50.0).abs() < 1.0E-9);
        assert!((p.y + 50.0).abs() < 1.0E-9);
        assert!(p.is_front());
    }

    #[test]
    fn yaw_and_pitch() {
        let camera = Camera::new(FRAC_PI_2, 0.0);
        let p = camera.project(&Vector3::new(0.0, 0.0, 1.0), 100.0);
        assert!((p.x + 100.0).abs() < 1.0E-9);
        assert!(p.depth.abs() < 1.0E-12);

        let camera = Camera::new(0.0, FRAC_PI_2);
        let p = camera.project(&Vector3::new(0.0, 1.0, 0.0), 100.0);
        assert!(p.y.abs() < 1.0E-9);
        assert!((p.depth - 1.0).abs() < 1.0E-12);
    }

    #[test]
    fn rotation_preserves_norm() {
        let camera = Camera::new(0.7, -0.3);
        for point in parallel(30.0, 16).iter().chain(meridian(45.0, 16).iter()) {
            assert!((point.norm() - 1.0).abs() < 1.0E-12);
            assert!((camera.rotate(point).norm() - 1.0).abs() < 1.0E-12);
        }
    }

    #[test]
    fn independent_cameras() {
        let point = Vector3::new(0.0, 0.0, 1.0);
        let front = Camera::default();
        let back = Camera::new(std::f64::consts::PI, 0.0);
        assert!(front.project(&point, 1.0).is_front());
        assert!(!back.project(&point, 1.0).is_front());
        // untouched by the other projection
        assert!(front.project(&point, 1.0).is_front());
    }

    #[test]
    fn drag_clamps_pitch() {
        let camera = Camera::default().drag(10.0, 20.0);
        assert!((camera.yaw_rad + 0.1).abs() < 1.0E-12);
        assert!((camera.pitch_rad - 0.2).abs() < 1.0E-12);

        let camera = camera.drag(0.0, 10_000.0);
        assert_eq!(camera.pitch_rad, PITCH_LIMIT_RAD);
        let camera = camera.drag(0.0, -100_000.0);
        assert_eq!(camera.pitch_rad, -PITCH_LIMIT_RAD);
    }

    #[test]
    fn sky_vectors() {
        let zenith = sky_vector(&TopocentricDirection::new(90.0, 123.0).unwrap());
        assert!((zenith - Vector3::new(0.0, 1.0, 0.0)).norm() < 1.0E-12);

        let north = sky_vector(&TopocentricDirection::new(0.0, 0.0).unwrap());
        assert!((north - Vector3::new(0.0, 0.0, 1.0)).norm() < 1.0E-12);

        let east = Camera::default()
            .project_direction(&TopocentricDirection::new(0.0, 90.0).unwrap(), 50.0);
        assert!((east.x - 50.0).abs() < 1.0E-9);
    }

    #[test]
    fn graticule() {
        let equator = parallel(0.0, 64);
        assert_eq!(equator.len(), 65);
        assert!(equator.iter().all(|p| p[1].abs() < 1.0E-12));

        let greenwich = meridian(0.0, 64);
        assert!((greenwich[0][1] + 1.0).abs() < 1.0E-12);
        assert!((greenwich[64][1] - 1.0).abs() < 1.0E-12);

        assert!(parallel(30.0, 0).is_empty());
        assert!(meridian(30.0, 0).is_empty());
    }

    #[test]
    fn picking() {
        let points = [
            ProjectedPoint {
                x: 10.0,
                y: 10.0,
                depth: 0.5,
            },
            ProjectedPoint {
                x: 12.0,
                y: 10.0,
                depth: 0.5,
            },
            ProjectedPoint {
                x: 11.0,
                y: 10.0,
                depth: -0.5,
            },
        ];
        assert_eq!(pick(&points, 11.5, 10.0, 8.0), Some(1));
        assert_eq!(pick(&points, 9.0, 10.0, 8.0), Some(0));
        assert_eq!(pick(&points, 50.0, 50.0, 8.0), None);
        assert_eq!(pick(&[], 0.0, 0.0, 8.0), None);
    }
}
