use geo::GeoFloat;

use crate::Segment;

/// Quick rejection test on the bounding rectangles of two segments.
///
/// Returns `true` if the axis-aligned bounding rectangles of `a` and
/// `b` are disjoint, which is sufficient for the segments to not
/// intersect. A `false` result does not imply an intersection.
///
/// Rectangles that merely touch along an edge or at a corner are not
/// excluded: all comparisons are strict.
///
/// ```rust
/// use segment_predicates::{exclude, Segment};
/// let a = Segment::from([(0., 0.), (10., 0.)]);
/// let b = Segment::from([(0., 1.), (10., 1.)]);
/// assert!(exclude(&a, &b));
/// ```
#[inline]
pub fn exclude<T: GeoFloat>(a: &Segment<T>, b: &Segment<T>) -> bool {
    let ra = a.bounding_rect();
    let rb = b.bounding_rect();

    ra.min().x > rb.max().x
        || ra.max().x < rb.min().x
        || ra.min().y > rb.max().y
        || ra.max().y < rb.min().y
}
