//! Geographic longitude/latitude in degrees (EPSG:4326, lon/lat axis order).

use super::Projection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LatLng;

impl Projection for LatLng {
    const NAME: &'static str = "LatLng";
    const EPSG: Option<u32> = Some(4326);

    fn to_sphere(x: f64, y: f64) -> (f64, f64) {
        (x.to_radians(), y.to_radians())
    }

    fn from_sphere(lon: f64, lat: f64) -> (f64, f64) {
        (lon.to_degrees(), lat.to_degrees())
    }
}
