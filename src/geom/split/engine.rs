use super::intersect::{IntersectDir, SplitIntersect};
use super::vertex::SplitVertex;
use crate::geom::{crossing, predicates, Bbox3, MultiPolygon, Polygon, Ring};
use crate::{LatLng, Vec3d};
use std::f64::consts::PI;

/// Per-polygon scratch state for one call to [`split_polygon`].
struct Split {
    vertices: Vec<SplitVertex>,
    intersects: Vec<SplitIntersect>,
    /// `intersects` indices, ordered by the sort key of phase 4.
    sorted_intersects: Vec<usize>,
    /// Holes whose outer ring never crossed: still need a home among the
    /// output polygons.
    holes: Vec<Ring>,
}

/// Rewrites `multipolygon` so that no output ring crosses the antimeridian.
pub fn split_multipolygon(multipolygon: &MultiPolygon) -> MultiPolygon {
    let mut out = Vec::new();

    for polygon in multipolygon.polygons() {
        if crossing::is_polygon_crossed(polygon) {
            log::debug!(
                "polygon outer ring crosses the antimeridian, splitting"
            );
            out.extend(split_polygon(polygon));
        } else {
            log::debug!("polygon does not cross the antimeridian, copying");
            out.push(polygon.clone());
        }
    }

    MultiPolygon::new(out)
}

/// Splits a single polygon known to cross the antimeridian.
fn split_polygon(polygon: &Polygon) -> Vec<Polygon> {
    let mut split = Split {
        vertices: Vec::new(),
        intersects: Vec::new(),
        sorted_intersects: Vec::new(),
        holes: Vec::new(),
    };

    process_ring(polygon.outer(), &mut split);
    for hole in polygon.holes() {
        if crossing::is_ring_crossed(hole) {
            process_ring(hole, &mut split);
        } else {
            split.holes.push(hole.clone());
        }
    }

    sort_intersects(&mut split);

    let outer_rings = reconstruct(&mut split);
    log::debug!(
        "split into {} outer ring(s), {} hole(s) to reassign",
        outer_rings.len(),
        split.holes.len()
    );

    assign_holes(outer_rings, split.holes)
}

/// Phase 3: walks one ring, appending its vertices and any meridian
/// crossings to the polygon-wide scratch arrays.
fn process_ring(ring: &Ring, split: &mut Split) {
    let n = ring.len();
    if n == 0 {
        return;
    }

    let base = split.vertices.len();
    let signs = vertex_signs(ring);

    for (vertex, &sign) in ring.vertices().iter().zip(&signs) {
        split.vertices.push(SplitVertex::new(*vertex, sign));
    }

    if n == 1 {
        return;
    }

    let last = split.vertices.len() - 1;
    split.vertices[base].wrap_prev = Some(last);
    split.vertices[last].wrap_next = Some(base);

    for i in 0..n {
        let cur_idx = base + i;
        let next_idx = base + (i + 1) % n;
        let cur = ring.vertices()[i];
        let next = ring.vertices()[(i + 1) % n];
        let cur_sign = signs[i];
        let next_sign = signs[(i + 1) % n];

        if cur_sign == 0 || next_sign == 0 || cur_sign == next_sign {
            continue;
        }

        let is_prime =
            cur.lng_radians().abs() + next.lng_radians().abs() < PI;
        let dir = if cur_sign < 0 {
            IntersectDir::WE
        } else {
            IntersectDir::EW
        };
        let lat = split_180_lat(cur, next);

        let idx = split.intersects.len();
        split.intersects.push(SplitIntersect {
            dir,
            is_prime,
            lat,
            vertex_idx: cur_idx,
            sort_order: 0,
        });
        split.vertices[cur_idx].intersect_idx = Some(idx);
    }
}

/// Hemisphere sign of every vertex of `ring`, with leading zero-longitude
/// vertices back-filled from the first non-zero sign encountered.
fn vertex_signs(ring: &Ring) -> Vec<i8> {
    let mut signs: Vec<i8> =
        ring.vertices().iter().map(|v| v.hemisphere_sign()).collect();

    if let Some(first_nonzero) = signs.iter().position(|&s| s != 0) {
        for sign in &mut signs[..first_nonzero] {
            *sign = signs[first_nonzero];
        }
    }

    signs
}

/// Latitude, in radians, at which the great-circle edge `(cur, next)`
/// crosses the 0°/180° meridian plane.
fn split_180_lat(cur: LatLng, next: LatLng) -> f64 {
    let v1 = Vec3d::from_latlng(cur);
    let v2 = Vec3d::from_latlng(next);
    let n = v1.cross(v2);

    let y = if cur.lng_radians() < 0. || next.lng_radians() > 0. {
        -1.
    } else {
        1.
    };

    let s = Vec3d::new(-n.z * y, 0., n.x * y).normalize();

    s.z.asin()
}

/// Phase 4: orders every intersect along the unrolled prime/antimeridian
/// great circle, so that matched entry/exit pairs become adjacent.
fn sort_intersects(split: &mut Split) {
    let mut order: Vec<usize> = (0..split.intersects.len()).collect();
    order.sort_by(|&a, &b| {
        sort_key(&split.intersects[a])
            .partial_cmp(&sort_key(&split.intersects[b]))
            .expect("split intersect latitudes are always finite")
    });

    for (sort_order, &idx) in order.iter().enumerate() {
        split.intersects[idx].sort_order = sort_order;
    }

    split.sorted_intersects = order;
}

fn sort_key(intersect: &SplitIntersect) -> f64 {
    if intersect.is_prime {
        if intersect.lat >= 0. {
            PI - intersect.lat
        } else {
            -PI - intersect.lat
        }
    } else {
        intersect.lat
    }
}

/// Phase 5: emits one output ring per hemisphere-local chunk of the crossed
/// rings.
fn reconstruct(split: &mut Split) -> Vec<Ring> {
    let mut rings = Vec::new();

    while let Some(start) = split.vertices.iter().position(|v| !v.consumed) {
        rings.push(reconstruct_one(split, start));
    }

    rings
}

fn reconstruct_one(split: &mut Split, start: usize) -> Ring {
    let ring_sign = split.vertices[start].sign;
    let mut points: Vec<LatLng> = Vec::new();
    let mut idx = start;
    let mut step: i64 = 1;

    loop {
        let vtx = split.vertices[idx];
        split.vertices[idx].consumed = true;
        push_dedup(&mut points, vtx.latlng);

        match vtx.intersect_idx {
            None => {
                idx = step_index(idx, step, &split.vertices);
            }
            Some(ix_idx) => {
                let intersect = split.intersects[ix_idx];
                push_dedup(
                    &mut points,
                    meridian_point(&intersect, ring_sign),
                );

                let partner_order = if intersect.sort_order % 2 == 0 {
                    intersect.sort_order + 1
                } else {
                    intersect.sort_order - 1
                };
                let partner_idx = split.sorted_intersects[partner_order];
                let partner = split.intersects[partner_idx];

                push_dedup(&mut points, meridian_point(&partner, ring_sign));

                step = if (ring_sign > 0) == (partner.dir == IntersectDir::WE)
                {
                    1
                } else {
                    -1
                };

                idx = if step == 1 {
                    step_index(partner.vertex_idx, 1, &split.vertices)
                } else {
                    partner.vertex_idx
                };
            }
        }

        if split.vertices[idx].consumed {
            break;
        }
    }

    Ring::new(points)
}

fn meridian_point(intersect: &SplitIntersect, ring_sign: i8) -> LatLng {
    let lng = if intersect.is_prime {
        0.
    } else {
        f64::from(ring_sign) * PI
    };

    LatLng::new_unchecked(intersect.lat, lng)
}

fn push_dedup(points: &mut Vec<LatLng>, p: LatLng) {
    if points.last() != Some(&p) {
        points.push(p);
    }
}

fn step_index(idx: usize, step: i64, vertices: &[SplitVertex]) -> usize {
    if step == 1 {
        vertices[idx].wrap_next.unwrap_or(idx + 1)
    } else {
        vertices[idx].wrap_prev.unwrap_or(idx - 1)
    }
}

/// Phase 6: reassigns every uncrossed hole to whichever new outer ring
/// contains it.
fn assign_holes(outer_rings: Vec<Ring>, holes: Vec<Ring>) -> Vec<Polygon> {
    let bboxes: Vec<Bbox3> = outer_rings
        .iter()
        .map(|r| {
            Bbox3::from_vertices(
                r.vertices().iter().copied().map(Vec3d::from_latlng),
            )
        })
        .collect();
    let signs: Vec<i8> = outer_rings
        .iter()
        .map(|r| r.vertices().first().map_or(0, |v| v.hemisphere_sign()))
        .collect();

    let mut bucket: Vec<Vec<Ring>> = outer_rings.iter().map(|_| Vec::new()).collect();

    'hole: for hole in holes {
        for (i, outer) in outer_rings.iter().enumerate() {
            // Ambiguous (on-boundary) vertices don't decide anything: keep
            // testing the hole's vertices against this candidate ring until
            // one falls strictly inside or strictly outside it.
            let mut pos = 0;
            for &vertex in hole.vertices() {
                pos = predicates::latlng_ring_pos(
                    outer, signs[i], &bboxes[i], vertex,
                );
                if pos != 0 {
                    break;
                }
            }

            if pos != -1 {
                bucket[i].push(hole);
                continue 'hole;
            }
        }
        log::debug!("hole could not be assigned to any split outer ring");
    }

    outer_rings
        .into_iter()
        .zip(bucket)
        .map(|(outer, holes)| Polygon::new(outer, holes))
        .collect()
}

#[cfg(test)]
#[path = "./engine_tests.rs"]
mod tests;
