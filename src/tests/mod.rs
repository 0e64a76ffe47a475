
#[cfg(feature = "serde")]
mod deserialization;

use log::LevelFilter;
use std::sync::Once;

use crate::prelude::{Fix, GeoPoint};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Reference receiver site (Taipei)
pub const REFERENCE_COORDS_DEG: (f64, f64) = (25.0, 121.5);

pub fn reference_observer() -> GeoPoint {
    GeoPoint::new(REFERENCE_COORDS_DEG.0, REFERENCE_COORDS_DEG.1)
        .unwrap_or_else(|e| panic!("invalid reference site: {}", e))
}

pub fn reference_fix(date_utc: &str) -> Fix {
    Fix {
        lat: Some(REFERENCE_COORDS_DEG.0),
        lng: Some(REFERENCE_COORDS_DEG.1),
        date_utc: Some(date_utc.to_string()),
    }
}
