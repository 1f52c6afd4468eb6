//! Reprojection between the built-in coordinate systems.

use approx::assert_relative_eq;
use mapalgebra_core::{reproject, LatLng, Point, Sphere, WebMercator};

/// Lon/lat samples in degrees, kept clear of the Mercator poles
fn samples() -> Vec<Point<LatLng>> {
    let mut points = Vec::new();
    for lon in (-180..=180).step_by(30) {
        for lat in (-80..=80).step_by(20) {
            points.push(Point::new(lon as f64, lat as f64));
        }
    }
    points
}

#[test]
fn latlng_round_trip_through_sphere() {
    for p in samples() {
        let back: Point<LatLng> = reproject::<Sphere, LatLng>(p.to_sphere());
        assert_relative_eq!(back.x, p.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-9);
    }
}

#[test]
fn latlng_to_web_mercator_and_back() {
    for p in samples() {
        let mercator: Point<WebMercator> = p.reproject();
        let back: Point<LatLng> = mercator.reproject();
        assert_relative_eq!(back.x, p.x, epsilon = 1e-7);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-7);
    }
}

#[test]
fn web_mercator_hemispheres() {
    let antimeridian: Point<WebMercator> = reproject::<LatLng, _>(Point::new(180.0, 0.0));
    assert_relative_eq!(antimeridian.x, 20_037_508.342_789_244, max_relative = 1e-12);
    assert_relative_eq!(antimeridian.y, 0.0, epsilon = 1e-6);

    // Northern hemisphere maps to positive y, symmetric about the equator
    let north: Point<WebMercator> = Point::<LatLng>::new(10.0, 45.0).reproject();
    let south: Point<WebMercator> = Point::<LatLng>::new(10.0, -45.0).reproject();
    assert!(north.y > 0.0);
    assert_relative_eq!(north.y, -south.y, max_relative = 1e-12);
}
