use geo::GeoFloat;

use crate::{utils::cross, Segment};

/// Checks whether the end points of `b` lie strictly on opposite sides
/// of the line through `a`.
///
/// With `v_b` the direction of `a`, and `v_a`, `v_c` the vectors from
/// the start of `a` to the end points of `b`, `cross(v_a, v_b)` and
/// `cross(v_b, v_c)` have the same sign exactly when `v_a` and `v_c`
/// fall on opposite sides of `v_b`. A zero term (an end point of `b`
/// on the line, or a degenerate `a`) gives `false`.
#[inline]
pub(crate) fn straddle_single<T: GeoFloat>(a: &Segment<T>, b: &Segment<T>) -> bool {
    let v_a = b.begin - a.begin;
    let v_b = a.end - a.begin;
    let v_c = b.end - a.begin;

    cross(v_a, v_b) * cross(v_b, v_c) > T::zero()
}

/// Strict crossing test.
///
/// Returns `true` iff each segment has its end points on strictly
/// opposite sides of the line through the other. Segments that touch
/// (at an end point or in a T-junction), overlap collinearly, or are
/// parallel never straddle.
///
/// ```rust
/// use segment_predicates::{straddle, Segment};
/// let a = Segment::from([(0., 0.), (10., 10.)]);
/// let b = Segment::from([(0., 10.), (10., 0.)]);
/// assert!(straddle(&a, &b));
/// ```
#[inline]
pub fn straddle<T: GeoFloat>(a: &Segment<T>, b: &Segment<T>) -> bool {
    straddle_single(a, b) && straddle_single(b, a)
}
