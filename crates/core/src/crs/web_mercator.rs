//! Web Mercator (EPSG:3857), the spherical Mercator used by web map tiles.
//!
//!   forward: x = R·λ, y = R·ln(tan(π/4 + φ/2))
//!   inverse: λ = x/R, φ = 2·atan(exp(y/R)) - π/2
//!
//! The poles map to infinity and are not clamped.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use super::Projection;

/// Sphere radius used by EPSG:3857 (WGS84 semi-major axis, metres)
pub const EARTH_RADIUS: f64 = 6_378_137.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WebMercator;

impl Projection for WebMercator {
    const NAME: &'static str = "WebMercator";
    const EPSG: Option<u32> = Some(3857);

    fn to_sphere(x: f64, y: f64) -> (f64, f64) {
        let lon = x / EARTH_RADIUS;
        let lat = 2.0 * (y / EARTH_RADIUS).exp().atan() - FRAC_PI_2;
        (lon, lat)
    }

    fn from_sphere(lon: f64, lat: f64) -> (f64, f64) {
        let x = EARTH_RADIUS * lon;
        let y = EARTH_RADIUS * (FRAC_PI_4 + lat / 2.0).tan().ln();
        (x, y)
    }
}
