use super::predicates::point_between;
use crate::{coord::EPSILON, Vec3d};

/// Axis-aligned bounding box of a set of unit-sphere points, in 3D Cartesian
/// space.
///
/// Used as a cheap pre-filter ahead of the exact predicates of
/// [`super::predicates`]: two geometries whose boxes don't overlap (or don't
/// contain a query point) can never intersect (or contain it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbox3 {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    zmin: f64,
    zmax: f64,
}

/// The six axis-aligned directions a great-circle arc can sweep past.
const AXES: [Vec3d; 6] = [
    Vec3d::new(1., 0., 0.),
    Vec3d::new(-1., 0., 0.),
    Vec3d::new(0., 1., 0.),
    Vec3d::new(0., -1., 0.),
    Vec3d::new(0., 0., 1.),
    Vec3d::new(0., 0., -1.),
];

impl Bbox3 {
    /// The degenerate box containing only `v`.
    #[must_use]
    pub const fn from_vect3(v: Vec3d) -> Self {
        Self {
            xmin: v.x,
            xmax: v.x,
            ymin: v.y,
            ymax: v.y,
            zmin: v.z,
            zmax: v.z,
        }
    }

    /// The smallest box containing both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            xmin: self.xmin.min(other.xmin),
            xmax: self.xmax.max(other.xmax),
            ymin: self.ymin.min(other.ymin),
            ymax: self.ymax.max(other.ymax),
            zmin: self.zmin.min(other.zmin),
            zmax: self.zmax.max(other.zmax),
        }
    }

    /// The bounding box of the great-circle arc from `v1` to `v2` (not the
    /// chord between them).
    ///
    /// Besides the two endpoints, an arc can sweep past an axis-aligned
    /// extremum (e.g. cross over the north pole) without either endpoint
    /// being anywhere near it; this happens exactly when that axis direction
    /// lies in the arc's great-circle plane *and* on the minor arc between
    /// the endpoints, which is exactly what [`point_between`] answers.
    #[must_use]
    pub fn from_segment(v1: Vec3d, v2: Vec3d) -> Self {
        let mut bbox = Self::from_vect3(v1).merge(Self::from_vect3(v2));

        if v1 == v2 {
            return bbox;
        }

        let normal = v1.cross(v2).normalize();
        if normal == Vec3d::zero() {
            return bbox;
        }

        for axis in AXES {
            if normal.dot(axis).abs() > EPSILON {
                continue;
            }
            if point_between(v1, v2, axis) >= 0 {
                bbox = bbox.merge(Self::from_vect3(axis));
            }
        }

        bbox
    }

    /// The bounding box of a closed ring of unit-sphere points.
    ///
    /// Segments between two (near-)equal consecutive vertices contribute
    /// nothing and are skipped.
    #[must_use]
    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Vec3d>,
    {
        let points: Vec<Vec3d> = vertices.into_iter().collect();
        let n = points.len();

        assert!(n > 0, "a ring must have at least one vertex");

        let mut bbox = Self::from_vect3(points[0]);
        if n == 1 {
            return bbox;
        }

        for i in 0..n {
            let a = points[i];
            let b = points[(i + 1) % n];
            if a == b {
                continue;
            }
            bbox = bbox.merge(Self::from_segment(a, b));
        }

        bbox
    }

    /// Whether `v` falls within this box (boundary inclusive).
    #[must_use]
    pub fn contains(&self, v: Vec3d) -> bool {
        v.x >= self.xmin
            && v.x <= self.xmax
            && v.y >= self.ymin
            && v.y <= self.ymax
            && v.z >= self.zmin
            && v.z <= self.zmax
    }
}

#[cfg(test)]
#[path = "./bbox_tests.rs"]
mod tests;
