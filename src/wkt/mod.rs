//! Reading and writing the WKT (well-known text) representation of
//! [`MultiPolygon`]s.
//!
//! Only `POLYGON` and `MULTIPOLYGON` geometries are recognized; coordinates
//! are always degrees on the wire and radians once parsed.

mod reader;
mod writer;

use crate::error::WktError;
use crate::geom::MultiPolygon;

/// Parses a WKT `POLYGON` or `MULTIPOLYGON` document.
///
/// # Errors
///
/// Returns a [`WktError`] describing the first grammar violation or
/// out-of-range coordinate encountered, annotated with its byte offset in
/// `input`. The splitting engine is never reached on a parse failure.
///
/// # Example
///
/// ```
/// use antimeridian_split::wkt::from_wkt;
///
/// let mp = from_wkt("POLYGON((0 0, 0 10, 10 10, 10 0))")?;
/// assert_eq!(mp.polygons().len(), 1);
/// # Ok::<(), antimeridian_split::error::WktError>(())
/// ```
pub fn from_wkt(input: &str) -> Result<MultiPolygon, WktError> {
    reader::parse(input)
}

/// Renders `multipolygon` as WKT text, in degrees.
///
/// # Example
///
/// ```
/// use antimeridian_split::wkt::{from_wkt, to_wkt};
///
/// let mp = from_wkt("POLYGON((0 0, 0 10, 10 10, 10 0))")?;
/// assert!(to_wkt(&mp).starts_with("POLYGON"));
/// # Ok::<(), antimeridian_split::error::WktError>(())
/// ```
#[must_use]
pub fn to_wkt(multipolygon: &MultiPolygon) -> String {
    writer::write(multipolygon)
}
