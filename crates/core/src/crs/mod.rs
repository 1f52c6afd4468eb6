//! Coordinate reference systems and reprojection.
//!
//! A projection is a zero-sized marker type. Points carry their projection
//! in the type, so mixing coordinate systems is a compile error rather than
//! a runtime check.
//!
//! All conversions go through one canonical frame, [`Sphere`]: longitude and
//! latitude in radians on a perfect sphere. Reprojecting from `A` to `B` is
//! always `B::from_sphere(A::to_sphere(p))`.

mod latlng;
mod web_mercator;

pub use latlng::LatLng;
pub use web_mercator::WebMercator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// A coordinate reference system with conversions to and from the
/// canonical sphere.
pub trait Projection: Send + Sync + 'static {
    /// Human readable name
    const NAME: &'static str;

    /// EPSG code if the projection has one
    const EPSG: Option<u32> = None;

    /// Forward: own (x, y) -> sphere (lon_rad, lat_rad)
    fn to_sphere(x: f64, y: f64) -> (f64, f64);

    /// Inverse: sphere (lon_rad, lat_rad) -> own (x, y)
    fn from_sphere(lon: f64, lat: f64) -> (f64, f64);

    /// Get a string identifier for this projection
    fn identifier() -> String {
        match Self::EPSG {
            Some(code) => format!("EPSG:{}", code),
            None => Self::NAME.to_string(),
        }
    }
}

/// The canonical projection. Both conversions are the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sphere;

impl Projection for Sphere {
    const NAME: &'static str = "Sphere";

    fn to_sphere(x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    fn from_sphere(lon: f64, lat: f64) -> (f64, f64) {
        (lon, lat)
    }
}

/// An (x, y) coordinate in projection `P`.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Point<P> {
    pub x: f64,
    pub y: f64,
    #[serde(skip)]
    crs: PhantomData<fn() -> P>,
}

impl<P> Point<P> {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            crs: PhantomData,
        }
    }

    /// Coordinates as an (x, y) tuple
    pub const fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl<P: Projection> Point<P> {
    /// Convert to canonical sphere coordinates
    pub fn to_sphere(self) -> Point<Sphere> {
        let (lon, lat) = P::to_sphere(self.x, self.y);
        Point::new(lon, lat)
    }

    /// Convert canonical sphere coordinates into this projection
    pub fn from_sphere(point: Point<Sphere>) -> Self {
        let (x, y) = P::from_sphere(point.x, point.y);
        Self::new(x, y)
    }

    /// Convert this point into projection `Q` via the sphere
    pub fn reproject<Q: Projection>(self) -> Point<Q> {
        Point::<Q>::from_sphere(self.to_sphere())
    }
}

/// Reproject a point from `A` to `B` via the canonical sphere.
pub fn reproject<A: Projection, B: Projection>(point: Point<A>) -> Point<B> {
    point.reproject()
}

impl<P> Clone for Point<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Point<P> {}

impl<P> PartialEq for Point<P> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<P: Projection> fmt::Debug for Point<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("crs", &P::NAME)
            .finish()
    }
}

impl<P: Projection> fmt::Display for Point<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) [{}]", self.x, self.y, P::identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_is_identity() {
        let p = Point::<Sphere>::new(0.3, -1.1);
        assert_eq!(p.to_sphere(), p);
        assert_eq!(Point::<Sphere>::from_sphere(p), p);
        assert_eq!(reproject::<Sphere, Sphere>(p), p);
    }

    #[test]
    fn test_identifier() {
        assert_eq!(Sphere::identifier(), "Sphere");
        assert_eq!(LatLng::identifier(), "EPSG:4326");
        assert_eq!(WebMercator::identifier(), "EPSG:3857");
    }

    #[test]
    fn test_latlng_web_mercator_roundtrip() {
        let cases: &[(f64, f64)] = &[
            (0.0, 0.0),
            (10.0, 45.0),
            (-73.9857, 40.7484),
            (139.6917, 35.6895),
            (-179.5, -60.0),
        ];
        for &(lon, lat) in cases {
            let p = Point::<LatLng>::new(lon, lat);
            let there: Point<WebMercator> = reproject(p);
            let back: Point<LatLng> = reproject(there);
            assert_relative_eq!(back.x, lon, epsilon = 1e-9);
            assert_relative_eq!(back.y, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_display() {
        let p = Point::<LatLng>::new(1.5, 2.0);
        assert_eq!(p.to_string(), "(1.5, 2) [EPSG:4326]");
    }

    #[test]
    fn test_point_serde_ignores_tag() {
        let p = Point::<WebMercator>::new(100.0, -250.5);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":100.0,"y":-250.5}"#);
        let back: Point<WebMercator> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
