/// Which hemisphere a crossing leaves as the ring is walked forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum IntersectDir {
    /// Leaving the western (negative-longitude) hemisphere.
    WE,
    /// Leaving the eastern (positive-longitude) hemisphere.
    EW,
}

/// A record of where a ring edge crosses the 0° or 180° meridian.
///
/// Both meridians are tracked together: a ring that winds through both the
/// prime and the antimeridian needs every crossing to correctly sort into
/// one linear order (see [`super::engine`]'s sort key), even though only the
/// antimeridian crossings end up cutting the output into separate polygons.
#[derive(Debug, Clone, Copy)]
pub(super) struct SplitIntersect {
    pub(super) dir: IntersectDir,
    /// `true` for a prime-meridian crossing, `false` for an antimeridian one.
    pub(super) is_prime: bool,
    /// Latitude, in radians, at which the crossing occurs.
    pub(super) lat: f64,
    /// Index of the vertex this crossing is attached to (the one preceding
    /// the crossing edge).
    pub(super) vertex_idx: usize,
    /// Position of this intersect in the polygon-wide sorted order, filled
    /// in once sorting (phase 4) has run.
    pub(super) sort_order: usize,
}
