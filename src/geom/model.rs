use crate::LatLng;

/// A closed loop of vertices.
///
/// The closing vertex is never stored: a triangle is `[a, b, c]`, not
/// `[a, b, c, a]`. Construction is append-only (`Ring::new`/`push`); nothing
/// deduplicates non-adjacent identical points, and a ring of a single vertex
/// is a legal (degenerate) value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ring(Vec<LatLng>);

impl Ring {
    /// Builds a ring from an already-ordered, already-closed-implicitly list
    /// of vertices (the caller must not repeat the first vertex at the end).
    #[must_use]
    pub const fn new(vertices: Vec<LatLng>) -> Self {
        Self(vertices)
    }

    /// Appends a vertex to the ring.
    pub fn push(&mut self, vertex: LatLng) {
        self.0.push(vertex);
    }

    /// The ring's vertices, in order, without the implicit closing vertex.
    #[must_use]
    pub fn vertices(&self) -> &[LatLng] {
        &self.0
    }

    /// Number of vertices (not counting the implicit closure).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the ring has no vertex at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the ring's edges, including the closing edge that wraps
    /// from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (LatLng, LatLng)> + '_ {
        let n = self.0.len();
        (0..n).filter_map(move |i| {
            (n > 1).then(|| (self.0[i], self.0[(i + 1) % n]))
        })
    }
}

/// A polygon: one outer ring plus zero or more holes, all contained in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    outer: Ring,
    holes: Vec<Ring>,
}

impl Polygon {
    /// Builds a polygon from its outer ring and its holes.
    #[must_use]
    pub const fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        Self { outer, holes }
    }

    /// The outer boundary.
    #[must_use]
    pub const fn outer(&self) -> &Ring {
        &self.outer
    }

    /// The holes, if any.
    #[must_use]
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }
}

/// An ordered sequence of polygons.
///
/// A single polygon is represented as a `MultiPolygon` of length one: the
/// WKT writer (see [`crate::wkt`]) decides between `POLYGON` and
/// `MULTIPOLYGON` based on this length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    /// Builds a multipolygon from an ordered list of polygons.
    #[must_use]
    pub const fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    /// The polygons, in order.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }

    /// Appends a polygon.
    pub fn push(&mut self, polygon: Polygon) {
        self.0.push(polygon);
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<T: IntoIterator<Item = Polygon>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "./model_tests.rs"]
mod tests;
