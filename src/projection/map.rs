#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{coords::GeoPoint, error::Error};

/// Screen rectangle the map is drawn into (pixels).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct MapRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl MapRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Largest rectangle of `image_aspect` (width / height) ratio that fits
    /// the canvas, centered. A wider canvas gets side bars, a taller canvas
    /// gets top and bottom bars.
    pub fn fit(canvas_width: f64, canvas_height: f64, image_aspect: f64) -> Self {
        let canvas_aspect = canvas_width / canvas_height;
        if canvas_aspect > image_aspect {
            let width = canvas_height * image_aspect;
            Self::new((canvas_width - width) / 2.0, 0.0, width, canvas_height)
        } else {
            let height = canvas_width / image_aspect;
            Self::new(0.0, (canvas_height - height) / 2.0, canvas_width, height)
        }
    }
}

fn default_lon_min() -> f64 {
    -180.0
}

fn default_lon_max() -> f64 {
    180.0
}

fn default_lat_max() -> f64 {
    90.0
}

fn default_lat_min() -> f64 {
    -60.0
}

/// Equirectangular (Plate Carrée) mapping of a visible lon/lat band.
/// The default band stops at 60°S, matching basemaps without Antarctica.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapProjection {
    #[cfg_attr(feature = "serde", serde(default = "default_lon_min"))]
    pub lon_min_deg: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_lon_max"))]
    pub lon_max_deg: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_lat_max"))]
    pub lat_max_deg: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_lat_min"))]
    pub lat_min_deg: f64,
    /// Calibration shift, positive moves points east (degrees)
    #[cfg_attr(feature = "serde", serde(default))]
    pub lon_offset_deg: f64,
    /// Calibration shift, positive moves points north (degrees)
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat_offset_deg: f64,
}

impl Default for MapProjection {
    fn default() -> Self {
        Self {
            lon_min_deg: default_lon_min(),
            lon_max_deg: default_lon_max(),
            lat_max_deg: default_lat_max(),
            lat_min_deg: default_lat_min(),
            lon_offset_deg: 0.0,
            lat_offset_deg: 0.0,
        }
    }
}

impl MapProjection {
    /// Full globe: 180°W..180°E, 90°N..90°S, no calibration.
    pub fn world() -> Self {
        Self::default().with_latitude_band(90.0, -90.0)
    }

    /// Calibrated for the stylized "Simple world map" basemap (90°N..60°S),
    /// which renders slightly west and south of true positions.
    pub fn simple_world_map() -> Self {
        Self::default().with_offsets(1.8, 1.2)
    }

    /// Copies and returns [MapProjection] with visible latitude band
    pub fn with_latitude_band(&self, lat_max_deg: f64, lat_min_deg: f64) -> Self {
        let mut s = *self;
        s.lat_max_deg = lat_max_deg;
        s.lat_min_deg = lat_min_deg;
        s
    }

    /// Copies and returns [MapProjection] with visible longitude band
    pub fn with_longitude_band(&self, lon_min_deg: f64, lon_max_deg: f64) -> Self {
        let mut s = *self;
        s.lon_min_deg = lon_min_deg;
        s.lon_max_deg = lon_max_deg;
        s
    }

    /// Copies and returns [MapProjection] with calibration offsets (degrees)
    pub fn with_offsets(&self, lon_offset_deg: f64, lat_offset_deg: f64) -> Self {
        let mut s = *self;
        s.lon_offset_deg = lon_offset_deg;
        s.lat_offset_deg = lat_offset_deg;
        s
    }

    fn lon_span(&self) -> f64 {
        self.lon_max_deg - self.lon_min_deg
    }

    fn lat_span(&self) -> f64 {
        self.lat_max_deg - self.lat_min_deg
    }

    /// Projects a [GeoPoint] to (x, y) within `rect`. Points outside the
    /// visible band land outside the rectangle, clipping is up to the consumer.
    pub fn project(&self, rect: &MapRect, point: &GeoPoint) -> (f64, f64) {
        let x = rect.left
            + (point.longitude_deg - self.lon_min_deg + self.lon_offset_deg) / self.lon_span()
                * rect.width;
        let y = rect.top
            + (self.lat_max_deg - point.latitude_deg - self.lat_offset_deg) / self.lat_span()
                * rect.height;
        (x, y)
    }

    /// Inverse of [Self::project].
    pub fn unproject(&self, rect: &MapRect, x: f64, y: f64) -> Result<GeoPoint, Error> {
        let lon = (x - rect.left) / rect.width * self.lon_span() + self.lon_min_deg
            - self.lon_offset_deg;
        let lat = self.lat_max_deg
            - self.lat_offset_deg
            - (y - rect.top) / rect.height * self.lat_span();
        GeoPoint::new(lat, lon)
    }

    /// Projects a whole polyline.
    pub fn project_polyline(&self, rect: &MapRect, points: &[GeoPoint]) -> Vec<(f64, f64)> {
        points.iter().map(|p| self.project(rect, p)).collect()
    }
}
