use crate::LatLng;

/// One vertex of a ring being split, plus the scratch bookkeeping the
/// reconstruction phase needs to walk it.
#[derive(Debug, Clone, Copy)]
pub(super) struct SplitVertex {
    pub(super) latlng: LatLng,
    /// Hemisphere sign of this vertex's longitude (leading zero-longitude
    /// vertices inherit the ring's first non-zero sign).
    pub(super) sign: i8,
    /// Index, in the polygon-wide intersect array, of the crossing that
    /// immediately follows this vertex (if the edge to the next vertex
    /// crosses a meridian).
    pub(super) intersect_idx: Option<usize>,
    /// Set on the *last* vertex of a ring: the index of that ring's first
    /// vertex, so a forward walk can wrap around.
    pub(super) wrap_next: Option<usize>,
    /// Set on the *first* vertex of a ring: the index of that ring's last
    /// vertex, so a backward walk can wrap around.
    pub(super) wrap_prev: Option<usize>,
    /// Whether this vertex has already been emitted by the reconstruction
    /// phase.
    pub(super) consumed: bool,
}

impl SplitVertex {
    pub(super) const fn new(latlng: LatLng, sign: i8) -> Self {
        Self {
            latlng,
            sign,
            intersect_idx: None,
            wrap_next: None,
            wrap_prev: None,
            consumed: false,
        }
    }
}
