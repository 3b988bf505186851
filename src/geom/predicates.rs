use super::Ring;
use crate::Vec3d;

/// Threshold below which a great-circle arc is considered too short (or its
/// endpoints too close to antipodal) for the ordinary betweenness test to be
/// numerically reliable.
const DEGENERATE_ARC_EPSILON: f64 = 1e-10;

/// Threshold below which two arc planes are considered coplanar.
const COPLANAR_EPSILON: f64 = 1e-10;

fn sign(x: f64) -> i8 {
    if x > COPLANAR_EPSILON {
        1
    } else if x < -COPLANAR_EPSILON {
        -1
    } else {
        0
    }
}

/// Is `p` on the minor great-circle arc from `v1` to `v2`?
///
/// Returns `0` if `p` coincides with an endpoint, `1` if it lies strictly
/// between them, `-1` otherwise. `v1`, `v2` and `p` are assumed to already
/// lie on the unit sphere.
#[must_use]
pub fn point_between(v1: Vec3d, v2: Vec3d, p: Vec3d) -> i8 {
    if p == v1 || p == v2 {
        return 0;
    }

    let mid = v1.sum(v2).normalize();
    let s = v1.dot(mid);

    if (1. - s).abs() > DEGENERATE_ARC_EPSILON {
        return if p.dot(mid) > s { 1 } else { -1 };
    }

    // `v1` and `v2` are (near) antipodal: the midpoint direction is
    // ill-conditioned, so fall back to comparing the directions from each
    // endpoint towards `p`. `p` is between `v1` and `v2` iff those two
    // directions point roughly opposite ways.
    let d1 = p.diff(v1).normalize();
    let d2 = p.diff(v2).normalize();

    if d1.dot(d2) < 0. {
        1
    } else {
        -1
    }
}

/// Does the great-circle arc `(v1, v2)` intersect the great-circle arc
/// `(u1, u2)`?
///
/// Returns `1` if they cross in their interiors, `0` if an endpoint of one
/// touches the other arc, `-1` if they are disjoint.
#[must_use]
pub fn segment_intersect(v1: Vec3d, v2: Vec3d, u1: Vec3d, u2: Vec3d) -> i8 {
    let vn = v1.cross(v2).normalize();
    let un = u1.cross(u2).normalize();

    if vn.dot(un).abs() > 1. - COPLANAR_EPSILON {
        return [
            point_between(v1, v2, u1),
            point_between(v1, v2, u2),
            point_between(u1, u2, v1),
            point_between(u1, u2, v2),
        ]
        .into_iter()
        .find(|&r| r != -1)
        .unwrap_or(-1);
    }

    let s1 = sign(un.dot(v1));
    let s2 = sign(un.dot(v2));
    let s3 = sign(vn.dot(u1));
    let s4 = sign(vn.dot(u2));

    if (s1 == s2 && s1 != 0) || (s3 == s4 && s3 != 0) {
        return -1;
    }
    if s1 == 0 || s2 == 0 || s3 == 0 || s4 == 0 {
        return 0;
    }

    let candidate = vn.cross(un).normalize();
    if point_between(v1, v2, candidate) >= 0
        && point_between(u1, u2, candidate) >= 0
    {
        return 1;
    }

    let antipode = candidate.scale(-1.);
    if point_between(v1, v2, antipode) >= 0
        && point_between(u1, u2, antipode) >= 0
    {
        return 1;
    }

    -1
}

/// Spherical point-in-ring test.
///
/// `ring_sign` is the hemisphere sign of the ring being tested (`-1`/`0`/
/// `1`, see [`crate::LatLng::hemisphere_sign`] via the split engine's vertex
/// bookkeeping); `bbox` is the ring's precomputed bounding box. Returns `1`
/// if `p` is strictly inside, `-1` if strictly outside, `0` if `p` lies on
/// the ring itself (a vertex, or on an edge).
///
/// A single-vertex ring is degenerate; by convention this returns `0`.
#[must_use]
pub fn latlng_ring_pos(
    ring: &Ring,
    ring_sign: i8,
    bbox: &super::Bbox3,
    p: crate::LatLng,
) -> i8 {
    if ring.len() <= 1 {
        return 0;
    }

    let p_sign = p.hemisphere_sign();
    if p_sign != 0 && p_sign != ring_sign {
        return -1;
    }

    let pv = Vec3d::from_latlng(p);
    if !bbox.contains(pv) {
        return -1;
    }

    if ring.vertices().iter().any(|&v| v == p) {
        return 0;
    }

    // Anchor point guaranteed to be outside the ring: same latitude, on the
    // meridian opposite `p`'s longitude (or a hair off it, if `p` is itself
    // on a meridian).
    let anchor_lng = if p.lng_radians() == 0. {
        -f64::from(ring_sign) * DEGENERATE_ARC_EPSILON
    } else {
        -p.lng_radians()
    };
    let anchor =
        crate::LatLng::new_unchecked(p.lat_radians(), anchor_lng);
    let qv = Vec3d::from_latlng(anchor);

    let mut crossings = 0u32;
    for (a, b) in ring.edges() {
        let av = Vec3d::from_latlng(a);
        let bv = Vec3d::from_latlng(b);

        match segment_intersect(pv, qv, av, bv) {
            0 => return 0,
            1 => crossings += 1,
            _ => {}
        }
    }

    if crossings % 2 == 1 {
        1
    } else {
        -1
    }
}

#[cfg(test)]
#[path = "./predicates_tests.rs"]
mod tests;
