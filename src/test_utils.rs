use crate::config::SkyMapConfig;
use crate::types::CelestialObject;

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn make_config(patch: impl FnOnce(&mut SkyMapConfig)) -> SkyMapConfig {
    let mut cfg = SkyMapConfig::default();
    patch(&mut cfg);
    cfg
}

pub fn object(name: &str, kind: &str, mag: f64, alt: f64, az: f64) -> CelestialObject {
    CelestialObject {
        name: name.to_string(),
        kind: kind.to_string(),
        magnitude: Some(mag),
        altitude: Some(alt),
        azimuth: Some(az),
        right_ascension: "0h 0m 0s".to_string(),
        declination: "0° 0' 0\"".to_string(),
        distance: None,
    }
}

// Due south, halfway up: lands at (cx, cy + r/2) with the largest glyph
pub fn sirius() -> CelestialObject {
    CelestialObject {
        right_ascension: "6h 45m 8.9s".to_string(),
        declination: "-16° 42' 58\"".to_string(),
        ..object("Sirius", "star", -1.46, 45.0, 180.0)
    }
}
