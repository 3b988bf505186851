use crate::error::InvalidLatLng;
use std::fmt;

/// Latitude/longitude, in radians.
///
/// `lat` is expected in `[-π/2, π/2]` and `lng` in `[-π, π]`; the
/// constructors only reject non-finite values, not out-of-range ones —
/// range validation is the WKT reader's job (see [`crate::wkt`]), since by
/// the time a `LatLng` reaches the splitting engine it is assumed already
/// in range.
///
/// Note that the `Display` impl prints the values as degrees (10 decimals at
/// most), while the `Debug` impl prints both degrees and radians.
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    /// Latitude, in radians.
    lat: f64,
    /// Longitude, in radians.
    lng: f64,
}

impl LatLng {
    /// Initializes a new coordinate from degrees.
    ///
    /// # Errors
    ///
    /// [`InvalidLatLng`] when one (or both) components is not a finite
    /// number.
    ///
    /// # Example
    ///
    /// ```
    /// let ll = antimeridian_split::LatLng::from_degrees(48.864716, 2.349014)?;
    ///
    /// assert!(antimeridian_split::LatLng::from_degrees(f64::NAN, 10.).is_err());
    /// # Ok::<(), antimeridian_split::error::InvalidLatLng>(())
    /// ```
    pub fn from_degrees(lat: f64, lng: f64) -> Result<Self, InvalidLatLng> {
        Self::from_radians(lat.to_radians(), lng.to_radians())
    }

    /// Initializes a new coordinate from radians.
    ///
    /// # Errors
    ///
    /// [`InvalidLatLng`] when one (or both) components is not a finite
    /// number.
    ///
    /// # Example
    ///
    /// ```
    /// let ll = antimeridian_split::LatLng::from_radians(0.852850182, 0.0409980285)?;
    /// # Ok::<(), antimeridian_split::error::InvalidLatLng>(())
    /// ```
    pub fn from_radians(lat: f64, lng: f64) -> Result<Self, InvalidLatLng> {
        if !lat.is_finite() {
            return Err(InvalidLatLng::new(lat, "infinite latitude"));
        }
        if !lng.is_finite() {
            return Err(InvalidLatLng::new(lng, "infinite longitude"));
        }

        Ok(Self { lat, lng })
    }

    /// Initializes a new coordinate with the specified, possibly invalid,
    /// values.
    ///
    /// Used internally by the geometry kernel, which only ever produces
    /// finite values from finite inputs; public callers should go through
    /// [`Self::from_radians`] instead.
    #[must_use]
    pub(crate) const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude, in degrees.
    ///
    /// # Example
    ///
    /// ```
    /// let ll = antimeridian_split::LatLng::from_degrees(48.864716, 2.349014)?;
    ///
    /// assert_eq!(ll.lat(), 48.864716);
    /// # Ok::<(), antimeridian_split::error::InvalidLatLng>(())
    /// ```
    #[must_use]
    pub fn lat(self) -> f64 {
        self.lat.to_degrees()
    }

    /// Longitude, in degrees.
    ///
    /// # Example
    ///
    /// ```
    /// let ll = antimeridian_split::LatLng::from_degrees(48.864716, 2.349014)?;
    ///
    /// assert_eq!(ll.lng(), 2.349014);
    /// # Ok::<(), antimeridian_split::error::InvalidLatLng>(())
    /// ```
    #[must_use]
    pub fn lng(self) -> f64 {
        self.lng.to_degrees()
    }

    /// Latitude, in radians.
    #[must_use]
    pub const fn lat_radians(self) -> f64 {
        self.lat
    }

    /// Longitude, in radians.
    #[must_use]
    pub const fn lng_radians(self) -> f64 {
        self.lng
    }

    /// The hemisphere sign of this coordinate's longitude: `-1` for the
    /// western hemisphere, `+1` for the eastern one, `0` exactly on a
    /// meridian.
    #[must_use]
    pub(crate) fn hemisphere_sign(self) -> i8 {
        if self.lng > 0. {
            1
        } else if self.lng < 0. {
            -1
        } else {
            0
        }
    }
}

/// Bit-exact equality: the engine never re-quantizes a coordinate once it
/// holds it in radians, so duplicate-vertex detection can rely on exact
/// comparison rather than an epsilon.
impl PartialEq for LatLng {
    fn eq(&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits()
            && self.lng.to_bits() == other.lng.to_bits()
    }
}

impl Eq for LatLng {}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // For display purpose, 10 decimals be more than enough.
        // See https://gis.stackexchange.com/a/8674
        write!(f, "({:.10}, {:.10})", self.lat(), self.lng())
    }
}

impl fmt::Debug for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatLng")
            .field("lat_rad", &self.lat)
            .field("lat_deg", &self.lat())
            .field("lng_rad", &self.lng)
            .field("lng_deg", &self.lng())
            .finish()
    }
}

#[cfg(test)]
#[path = "./latlng_tests.rs"]
mod tests;
