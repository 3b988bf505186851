use super::*;
use crate::LatLng;

fn ll(lat: f64, lng: f64) -> LatLng {
    LatLng::from_degrees(lat, lng).expect("valid latlng")
}

#[test]
fn simple_square_is_not_crossed() {
    let ring = Ring::new(vec![
        ll(0., 0.),
        ll(0., 10.),
        ll(10., 10.),
        ll(10., 0.),
    ]);

    assert!(!is_ring_crossed(&ring));
}

#[test]
fn rectangle_straddling_180_is_crossed() {
    let ring = Ring::new(vec![
        ll(-10., 170.),
        ll(-10., -170.),
        ll(10., -170.),
        ll(10., 170.),
    ]);

    assert!(is_ring_crossed(&ring));
}

#[test]
fn rectangle_straddling_prime_meridian_is_not_crossed() {
    let ring = Ring::new(vec![
        ll(-10., -10.),
        ll(-10., 10.),
        ll(10., 10.),
        ll(10., -10.),
    ]);

    assert!(!is_ring_crossed(&ring));
}

#[test]
fn polygon_crossed_only_checks_outer_ring() {
    let outer = Ring::new(vec![
        ll(-10., 170.),
        ll(-10., -170.),
        ll(10., -170.),
        ll(10., 170.),
    ]);
    let hole = Ring::new(vec![ll(1., 175.), ll(1., 176.), ll(2., 176.)]);
    let polygon = Polygon::new(outer, vec![hole]);

    assert!(is_polygon_crossed(&polygon));
}

#[test]
fn multipolygon_crossed_if_any_member_is() {
    let crossed = Polygon::new(
        Ring::new(vec![
            ll(-10., 170.),
            ll(-10., -170.),
            ll(10., -170.),
            ll(10., 170.),
        ]),
        vec![],
    );
    let plain = Polygon::new(
        Ring::new(vec![ll(0., 0.), ll(0., 1.), ll(1., 1.)]),
        vec![],
    );

    let mp = MultiPolygon::new(vec![plain.clone(), crossed]);
    assert!(is_multipolygon_crossed(&mp));

    let mp = MultiPolygon::new(vec![plain.clone(), plain]);
    assert!(!is_multipolygon_crossed(&mp));
}
