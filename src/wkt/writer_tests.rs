use super::write;
use crate::{LatLng, MultiPolygon, Polygon, Ring};

fn ll(lat: f64, lng: f64) -> LatLng {
    LatLng::from_degrees(lat, lng).expect("valid latlng")
}

#[test]
fn prints_a_single_polygon_as_polygon() {
    let ring = Ring::new(vec![ll(0., 0.), ll(0., 10.), ll(10., 10.)]);
    let mp = MultiPolygon::new(vec![Polygon::new(ring, vec![])]);

    let wkt = write(&mp);

    assert!(wkt.starts_with("POLYGON("));
    assert!(!wkt.starts_with("MULTIPOLYGON"));
}

#[test]
fn prints_several_polygons_as_multipolygon() {
    let ring_a = Ring::new(vec![ll(0., 0.), ll(0., 10.), ll(10., 10.)]);
    let ring_b = Ring::new(vec![ll(20., 20.), ll(20., 30.), ll(30., 30.)]);
    let mp = MultiPolygon::new(vec![
        Polygon::new(ring_a, vec![]),
        Polygon::new(ring_b, vec![]),
    ]);

    let wkt = write(&mp);

    assert!(wkt.starts_with("MULTIPOLYGON("));
}

#[test]
fn closes_every_ring_by_repeating_the_first_point() {
    let ring = Ring::new(vec![ll(0., 0.), ll(0., 10.), ll(10., 10.)]);
    let mp = MultiPolygon::new(vec![Polygon::new(ring, vec![])]);

    let wkt = write(&mp);

    assert_eq!(wkt.matches("0 0").count(), 2);
}

#[test]
fn round_trips_through_the_reader() {
    let ring = Ring::new(vec![ll(1., 2.), ll(3., 4.), ll(5., 6.)]);
    let mp = MultiPolygon::new(vec![Polygon::new(ring, vec![])]);

    let wkt = write(&mp);
    let reparsed = super::super::from_wkt(&wkt).expect("valid WKT produced");

    assert_eq!(reparsed.polygons()[0].outer().len(), 3);
}
