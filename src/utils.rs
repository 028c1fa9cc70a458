use geo::{Coordinate, GeoFloat};

/// Z-component of the 2d cross product `u x v`.
///
/// Positive when `v` is counter-clockwise from `u`, negative when
/// clockwise and zero when the two vectors are parallel.
#[inline]
pub fn cross<T: GeoFloat>(u: Coordinate<T>, v: Coordinate<T>) -> T {
    u.x * v.y - v.x * u.y
}
