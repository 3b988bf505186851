//! Error types returned by this crate.

mod invalid_value;
mod wkt;

pub use invalid_value::InvalidLatLng;
pub use wkt::{WktError, WktErrorKind};
