use super::{MultiPolygon, Polygon, Ring};
use std::f64::consts::PI;

/// Whether the edge `(lng_a, lng_b)` (both in radians) crosses the
/// antimeridian, as opposed to merely crossing the prime meridian.
///
/// The two crossings look identical from the sign of the longitudes alone;
/// what distinguishes them is that an antimeridian-crossing edge has
/// endpoints whose longitude magnitudes sum to more than `π` (the edge is
/// "the long way round"), while a prime-meridian crossing sums to less.
fn is_edge_crossed(lng_a: f64, lng_b: f64) -> bool {
    let sign_a = lng_a.signum();
    let sign_b = lng_b.signum();

    sign_a != sign_b && lng_a.abs() + lng_b.abs() > PI
}

/// Whether any edge of `ring` (cyclic, including the closing edge) crosses
/// the antimeridian.
#[must_use]
pub fn is_ring_crossed(ring: &Ring) -> bool {
    ring.edges()
        .any(|(a, b)| is_edge_crossed(a.lng_radians(), b.lng_radians()))
}

/// Whether `polygon`'s outer ring crosses the antimeridian.
///
/// Holes are not inspected: a hole cannot cross the antimeridian without its
/// enclosing outer ring also crossing it, for any well-formed input.
#[must_use]
pub fn is_polygon_crossed(polygon: &Polygon) -> bool {
    is_ring_crossed(polygon.outer())
}

/// Whether any polygon of `multipolygon` crosses the antimeridian.
#[must_use]
pub fn is_multipolygon_crossed(multipolygon: &MultiPolygon) -> bool {
    multipolygon.polygons().iter().any(is_polygon_crossed)
}

#[cfg(test)]
#[path = "./crossing_tests.rs"]
mod tests;
