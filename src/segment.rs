use geo::{Coordinate, GeoFloat, Line, Rect};

/// A closed line segment from `begin` to `end`.
///
/// The end points are kept in the order they were given; none of the
/// predicates re-orders them. A segment with `begin == end` is
/// degenerate but still valid input to every predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: GeoFloat> {
    pub begin: Coordinate<T>,
    pub end: Coordinate<T>,
}

impl<T: GeoFloat> Segment<T> {
    pub fn new<C: Into<Coordinate<T>>>(begin: C, end: C) -> Self {
        Segment {
            begin: begin.into(),
            end: end.into(),
        }
    }

    /// The vector `end - begin`.
    #[inline]
    pub fn direction(&self) -> Coordinate<T> {
        self.end - self.begin
    }

    /// Checks if both end points coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.begin == self.end
    }

    /// The smallest axis-aligned rectangle containing both end points.
    #[inline]
    pub fn bounding_rect(&self) -> Rect<T> {
        Rect::new(self.begin, self.end)
    }

    /// Swap the end points.
    pub fn reversed(self) -> Self {
        Segment {
            begin: self.end,
            end: self.begin,
        }
    }

    #[inline]
    pub fn line(&self) -> Line<T> {
        Line::new(self.begin, self.end)
    }
}

impl<T: GeoFloat> From<Line<T>> for Segment<T> {
    fn from(l: Line<T>) -> Self {
        Segment::new(l.start, l.end)
    }
}

impl<T: GeoFloat> From<Segment<T>> for Line<T> {
    fn from(s: Segment<T>) -> Self {
        s.line()
    }
}

/// Convert from `[(begin_x, begin_y), (end_x, end_y)]`.
impl<T: GeoFloat> From<[(T, T); 2]> for Segment<T> {
    fn from([begin, end]: [(T, T); 2]) -> Self {
        Segment::new(begin, end)
    }
}
