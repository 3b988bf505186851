use super::*;

fn ll(lat: f64, lng: f64) -> LatLng {
    LatLng::from_degrees(lat, lng).expect("valid latlng")
}

#[test]
fn ring_edges_wrap_around() {
    let ring = Ring::new(vec![ll(0., 0.), ll(0., 10.), ll(10., 10.)]);
    let edges: Vec<_> = ring.edges().collect();

    assert_eq!(edges.len(), 3);
    assert_eq!(edges[2], (ll(10., 10.), ll(0., 0.)));
}

#[test]
fn single_vertex_ring_has_no_edges() {
    let ring = Ring::new(vec![ll(0., 0.)]);
    assert_eq!(ring.edges().count(), 0);
}

#[test]
fn multipolygon_from_iter() {
    let p1 = Polygon::new(Ring::new(vec![ll(0., 0.)]), vec![]);
    let p2 = Polygon::new(Ring::new(vec![ll(1., 1.)]), vec![]);
    let mp: MultiPolygon = vec![p1.clone(), p2.clone()].into_iter().collect();

    assert_eq!(mp.polygons(), &[p1, p2]);
}
