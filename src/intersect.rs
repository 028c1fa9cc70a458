use geo::{Coordinate, GeoFloat};

use crate::{exclude, Segment};

/// Parametric positions `(rt, st)` of the crossing of `a` and `b`
/// along `a` and `b` respectively.
///
/// Solves `a.begin + rt * dir(a) == b.begin + st * dir(b)` by Cramer's
/// rule. Returns `None` if the determinant is exactly zero (parallel,
/// collinear or degenerate input), or if either parameter falls
/// outside `[0, 1]`.
///
/// No tolerance is applied to the determinant: nearly parallel lines
/// are solved as-is and may yield parameters with large rounding
/// error.
pub fn intersection_params<T: GeoFloat>(a: &Segment<T>, b: &Segment<T>) -> Option<(T, T)> {
    let r_p = a.begin;
    let r_d = a.direction();
    let s_p = b.begin;
    let s_d = b.direction();

    let h = s_d.x * r_d.y - r_d.x * s_d.y;
    if h == T::zero() {
        return None;
    }

    let offset = s_p - r_p;
    let h_rt = s_d.x * offset.y - s_d.y * offset.x;
    let h_st = r_d.x * offset.y - r_d.y * offset.x;

    let rt = h_rt / h;
    let st = h_st / h;

    let unit = |t: T| t >= T::zero() && t <= T::one();
    if !unit(rt) || !unit(st) {
        return None;
    }
    Some((rt, st))
}

/// Intersection point of two segments.
///
/// Returns the point where `a` and `b` cross, including crossings at
/// an end point of either segment. Parallel and collinear segments
/// (even overlapping ones) and degenerate segments yield `None`.
///
/// ```rust
/// use geo::Coordinate;
/// use segment_predicates::{intersect, Segment};
/// let a = Segment::from([(0., 0.), (10., 10.)]);
/// let b = Segment::from([(0., 10.), (10., 0.)]);
/// assert_eq!(intersect(&a, &b), Some(Coordinate { x: 5., y: 5. }));
/// ```
#[inline]
pub fn intersect<T: GeoFloat>(a: &Segment<T>, b: &Segment<T>) -> Option<Coordinate<T>> {
    let (rt, _) = intersection_params(a, b)?;
    let r_d = a.direction();
    Some(Coordinate {
        x: a.begin.x + r_d.x * rt,
        y: a.begin.y + r_d.y * rt,
    })
}

/// Same as [`intersect`] but first rejects pairs whose bounding
/// rectangles are disjoint (see [`exclude`]).
#[inline]
pub fn intersect_prefiltered<T: GeoFloat>(
    a: &Segment<T>,
    b: &Segment<T>,
) -> Option<Coordinate<T>> {
    if exclude(a, b) {
        None
    } else {
        intersect(a, b)
    }
}
