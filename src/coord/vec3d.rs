use super::EPSILON;
use crate::LatLng;
use float_eq::float_eq;

/// A point on (or near) the unit sphere, expressed as a 3D Cartesian vector.
///
/// This is the working representation for the great-circle geometry used by
/// the crossing detector and the split engine: latitude/longitude trig is
/// paid once on the way in (`from_latlng`) and the hot paths (dot products,
/// cross products, plane-side tests) stay in plain vector arithmetic.
///
/// Equality tolerates a per-component difference of up to `f64::EPSILON`,
/// since every vector here is the result of trigonometric functions.
#[derive(Debug, Clone, Copy)]
pub struct Vec3d {
    /// `x` component.
    pub x: f64,
    /// `y` component.
    pub y: f64,
    /// `z` component.
    pub z: f64,
}

impl Vec3d {
    /// Initializes a new 3D vector with the specified component values.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0., 0., 0.)
    }

    /// Projects a spherical coordinate onto the unit sphere.
    #[must_use]
    pub fn from_latlng(ll: LatLng) -> Self {
        let r = ll.lat_radians().cos();

        Self::new(
            ll.lng_radians().cos() * r,
            ll.lng_radians().sin() * r,
            ll.lat_radians().sin(),
        )
    }

    /// Recovers the spherical coordinate of a unit-sphere vector.
    ///
    /// The vector is expected to already lie on (or very near) the unit
    /// sphere; this function does not renormalize it.
    #[must_use]
    pub fn to_latlng(self) -> LatLng {
        LatLng::new_unchecked(self.z.asin(), self.y.atan2(self.x))
    }

    /// Componentwise sum.
    #[must_use]
    pub fn sum(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Componentwise difference (`self - other`).
    #[must_use]
    pub fn diff(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scales every component by `factor`.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y.mul_add(other.y, self.z * other.z))
    }

    /// Cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y.mul_add(other.z, -(self.z * other.y)),
            self.z.mul_add(other.x, -(self.x * other.z)),
            self.x.mul_add(other.y, -(self.y * other.x)),
        )
    }

    /// The Euclidean length of the vector.
    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns a unit vector in the same direction, or the zero vector if
    /// `self` has (near-)zero length.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();

        if len < EPSILON {
            return Self::zero();
        }

        self.scale(1. / len)
    }
}

impl PartialEq for Vec3d {
    fn eq(&self, other: &Self) -> bool {
        float_eq!(self.x, other.x, abs <= EPSILON)
            && float_eq!(self.y, other.y, abs <= EPSILON)
            && float_eq!(self.z, other.z, abs <= EPSILON)
    }
}

#[cfg(test)]
#[path = "./vec3d_tests.rs"]
mod tests;
