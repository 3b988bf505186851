use crate::geom::{MultiPolygon, Polygon, Ring};
use std::fmt::Write as _;

/// Renders `multipolygon` as WKT text: `POLYGON(...)` when it holds exactly
/// one polygon, `MULTIPOLYGON(...)` otherwise. Every ring is closed by
/// repeating its first vertex, and coordinates are printed in degrees.
pub(crate) fn write(multipolygon: &MultiPolygon) -> String {
    let polygons = multipolygon.polygons();
    let mut out = String::new();

    if let [polygon] = polygons {
        out.push_str("POLYGON");
        write_polygon_body(&mut out, polygon);
    } else {
        out.push_str("MULTIPOLYGON(");
        for (i, polygon) in polygons.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            write_polygon_body(&mut out, polygon);
        }
        out.push(')');
    }

    out
}

fn write_polygon_body(out: &mut String, polygon: &Polygon) {
    out.push('(');
    write_ring(out, polygon.outer());
    for hole in polygon.holes() {
        out.push(',');
        write_ring(out, hole);
    }
    out.push(')');
}

fn write_ring(out: &mut String, ring: &Ring) {
    out.push('(');

    let vertices = ring.vertices();
    for (i, vertex) in vertices.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{} {}", vertex.lng(), vertex.lat());
    }
    if let Some(first) = vertices.first() {
        out.push(',');
        let _ = write!(out, "{} {}", first.lng(), first.lat());
    }

    out.push(')');
}

#[cfg(test)]
#[path = "./writer_tests.rs"]
mod tests;
