use super::*;
use crate::LatLng;

fn v(lat: f64, lng: f64) -> Vec3d {
    Vec3d::from_latlng(LatLng::from_degrees(lat, lng).expect("valid latlng"))
}

#[test]
fn point_between_endpoints_is_zero() {
    let a = v(0., 0.);
    let b = v(10., 10.);

    assert_eq!(point_between(a, b, a), 0);
    assert_eq!(point_between(a, b, b), 0);
}

#[test]
fn point_between_midpoint_is_between() {
    let a = v(0., 0.);
    let b = v(0., 20.);
    let mid = v(0., 10.);

    assert_eq!(point_between(a, b, mid), 1);
}

#[test]
fn point_between_antipode_is_not_between() {
    let a = v(0., 0.);
    let b = v(0., 20.);
    let antipode = Vec3d::new(-a.x, -a.y, -a.z);

    assert_eq!(point_between(a, b, antipode), -1);
}

#[test]
fn point_between_outside_arc_is_not_between() {
    let a = v(0., 0.);
    let b = v(0., 20.);
    let outside = v(0., 30.);

    assert_eq!(point_between(a, b, outside), -1);
}

#[test]
fn segment_intersect_is_symmetric_under_arc_swap() {
    let (a, b) = (v(-5., 0.), v(5., 0.));
    let (c, d) = (v(0., -5.), v(0., 5.));

    assert_eq!(segment_intersect(a, b, c, d), segment_intersect(c, d, a, b));
}

#[test]
fn crossing_arcs_intersect() {
    let (a, b) = (v(-5., 0.), v(5., 0.));
    let (c, d) = (v(0., -5.), v(0., 5.));

    assert_eq!(segment_intersect(a, b, c, d), 1);
}

#[test]
fn parallel_arcs_never_meet() {
    let (a, b) = (v(10., -5.), v(10., 5.));
    let (c, d) = (v(20., -5.), v(20., 5.));

    assert_eq!(segment_intersect(a, b, c, d), -1);
}

#[test]
fn touching_endpoint_is_zero() {
    let (a, b) = (v(-5., 0.), v(5., 0.));
    let (c, d) = (v(0., 0.), v(10., 10.));

    assert_eq!(segment_intersect(a, b, c, d), 0);
}

#[test]
fn disjoint_arcs_win_over_an_incidental_zero_side() {
    // `v` runs from lon 0 to lon 90 at the equator; `u` sits entirely on
    // lon 0 between lat 30 and lat 60. `v1` lies exactly on `u`'s great
    // circle (an incidental zero side), but `u`'s whole arc is strictly on
    // one side of `v`'s plane, so the arcs never cross.
    let (v1, v2) = (v(0., 0.), v(0., 90.));
    let (u1, u2) = (v(30., 0.), v(60., 0.));

    assert_eq!(segment_intersect(v1, v2, u1, u2), -1);
    assert_eq!(segment_intersect(u1, u2, v1, v2), -1);
}

#[test]
fn ring_pos_inside_square() {
    use super::super::{Bbox3, Ring};

    let ring = Ring::new(vec![
        LatLng::from_degrees(-10., -10.).expect("valid"),
        LatLng::from_degrees(-10., 10.).expect("valid"),
        LatLng::from_degrees(10., 10.).expect("valid"),
        LatLng::from_degrees(10., -10.).expect("valid"),
    ]);
    let bbox = Bbox3::from_vertices(
        ring.vertices().iter().copied().map(Vec3d::from_latlng),
    );

    let inside = LatLng::from_degrees(0., 0.).expect("valid");
    let outside = LatLng::from_degrees(0., 50.).expect("valid");

    assert_eq!(latlng_ring_pos(&ring, 0, &bbox, inside), 1);
    assert_eq!(latlng_ring_pos(&ring, 0, &bbox, outside), -1);
}

#[test]
fn ring_pos_on_vertex_is_zero() {
    use super::super::{Bbox3, Ring};

    let a = LatLng::from_degrees(-10., -10.).expect("valid");
    let ring = Ring::new(vec![
        a,
        LatLng::from_degrees(-10., 10.).expect("valid"),
        LatLng::from_degrees(10., 10.).expect("valid"),
        LatLng::from_degrees(10., -10.).expect("valid"),
    ]);
    let bbox = Bbox3::from_vertices(
        ring.vertices().iter().copied().map(Vec3d::from_latlng),
    );

    assert_eq!(latlng_ring_pos(&ring, 0, &bbox, a), 0);
}

#[test]
fn ring_pos_degenerate_single_vertex_ring_is_zero() {
    use super::super::{Bbox3, Ring};

    let a = LatLng::from_degrees(0., 0.).expect("valid");
    let ring = Ring::new(vec![a]);
    let bbox = Bbox3::from_vect3(Vec3d::from_latlng(a));

    assert_eq!(latlng_ring_pos(&ring, 0, &bbox, a), 0);
}
