//! The antimeridian split engine: builds the vertex/intersection graph for a
//! crossed polygon, sorts the crossings, and reconstructs hemisphere-local
//! output polygons with their holes reassigned.

mod engine;
mod intersect;
mod vertex;

pub(super) use engine::split_multipolygon;
