//! Uniform random segment generation.
use geo::{Coordinate, Rect};

use rand::Rng;
use rand_distr::Standard;

use crate::Segment;

/// The square `[0, side) x [0, side)`.
#[inline]
pub fn square(side: f64) -> Rect<f64> {
    Rect::new([0., 0.], [side, side])
}

/// Sample a segment with both end points drawn independently and
/// uniformly from `bounds`, upper edges excluded.
#[inline]
pub fn uniform_segment<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Segment<f64> {
    let [bx, by, ex, ey]: [f64; 4] = rng.sample(Standard);
    let origin = bounds.min();
    let extent = bounds.max() - origin;
    let scale = |u: f64, v: f64| Coordinate {
        x: origin.x + extent.x * u,
        y: origin.y + extent.y * v,
    };
    Segment::new(scale(bx, by), scale(ex, ey))
}

pub fn uniform_segments<R: Rng>(rng: &mut R, count: usize, bounds: Rect<f64>) -> Vec<Segment<f64>> {
    (0..count).map(|_| uniform_segment(rng, bounds)).collect()
}
