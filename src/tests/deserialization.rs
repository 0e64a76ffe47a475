use crate::{
    prelude::{Config, Engine, Status},
    tests::init_logger,
};

#[test]
fn status_snapshot_deserialization() {
    init_logger();

    let content = r#"{
        "fix": {
            "lat": 25.129084,
            "lng": 121.502197,
            "alt": 32.1,
            "date_utc": "2024-06-21"
        },
        "satellites": {
            "05": { "system": "GPS", "elev": 12.0, "az": 310.0, "snr": 18.0, "used": false },
            "12": { "system": "GPS", "elev": 67.0, "az": 45.0, "snr": 44.0, "used": true },
            "77": { "system": "GLONASS", "elev": null, "az": null, "snr": null }
        }
    }"#;

    let status: Status = serde_json::from_str(content).unwrap();
    assert_eq!(status.satellites.len(), 3);
    assert!(!status.satellites["77"].used);

    let (prn, sat) = status.select_orbit_satellite(None).unwrap();
    assert_eq!(prn, "12");

    let engine = Engine::default();
    assert!(engine.sun_times(&status.fix).is_available());
    assert!(engine.sub_satellite_point(&status.fix, sat).is_some());
    assert!(engine
        .sub_satellite_point(&status.fix, &status.satellites["77"])
        .is_none());
}

#[test]
fn partial_config_deserialization() {
    let content = r#"{
        "utc_offset": 9.0,
        "ground_track": { "step_deg": 1.0 },
        "map": { "lat_min_deg": -90.0, "lon_offset_deg": 1.8 }
    }"#;

    let cfg: Config = serde_json::from_str(content).unwrap();
    assert!(cfg.validate().is_ok());

    assert_eq!(cfg.utc_offset.hours(), 9.0);
    assert_eq!(cfg.ground_track.step_deg, 1.0);
    assert_eq!(cfg.ground_track.inclination_deg, 55.0);
    assert_eq!(cfg.orbit.altitude_m, 20_200_000.0);
    assert_eq!(cfg.map.lat_min_deg, -90.0);
    assert_eq!(cfg.map.lat_max_deg, 90.0);
    assert_eq!(cfg.map.lon_offset_deg, 1.8);
    assert_eq!(cfg.footprint.shrink_factor, 0.7);
}
