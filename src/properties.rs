//! Relations between the predicates, checked on random input and
//! against the `geo` implementations.
use approx::assert_relative_eq;
use geo::{
    algorithm::line_intersection::{line_intersection, LineIntersection},
    intersects::Intersects,
    Coordinate,
};
use log::info;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    exclude, intersect, intersection_params,
    random::{square, uniform_segments},
    straddle,
    utils::cross,
    Segment,
};

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sine of the angle between the two directions, or zero if either
/// segment is degenerate.
fn sin_angle(a: &Segment<f64>, b: &Segment<f64>) -> f64 {
    let (r, s) = (a.direction(), b.direction());
    let norms = r.x.hypot(r.y) * s.x.hypot(s.y);
    if norms == 0. {
        0.
    } else {
        (cross(r, s) / norms).abs()
    }
}

/// Checks if an end point of either segment lies exactly on the line
/// through the other.
fn touches(a: &Segment<f64>, b: &Segment<f64>) -> bool {
    let on_line = |s: &Segment<f64>, p: Coordinate<f64>| cross(s.direction(), p - s.begin) == 0.;
    on_line(a, b.begin) || on_line(a, b.end) || on_line(b, a.begin) || on_line(b, a.end)
}

fn is_proper(isec: &Option<LineIntersection<f64>>) -> bool {
    matches!(
        isec,
        Some(LineIntersection::SinglePoint {
            is_proper: true,
            ..
        })
    )
}

#[test]
fn reference_scenarios() {
    // Crossing diagonals.
    let a = Segment::from([(0., 0.), (10., 10.)]);
    let b = Segment::from([(0., 10.), (10., 0.)]);
    assert_eq!(intersect(&a, &b), Some(Coordinate { x: 5., y: 5. }));
    assert!(straddle(&a, &b));
    assert!(!exclude(&a, &b));

    // Parallel, disjoint boxes.
    let a = Segment::from([(0., 0.), (10., 0.)]);
    let b = Segment::from([(0., 1.), (10., 1.)]);
    assert_eq!(intersect(&a, &b), None);
    assert!(exclude(&a, &b));
    assert!(!straddle(&a, &b));

    // T-junction: crossing at the start of `b`.
    let b = Segment::from([(5., 0.), (5., 10.)]);
    assert_eq!(intersect(&a, &b), Some(Coordinate { x: 5., y: 0. }));
    assert!(!straddle(&a, &b));
    assert!(touches(&a, &b));

    // Degenerate input.
    let a = Segment::from([(5., 5.), (5., 5.)]);
    let b = Segment::from([(0., 0.), (10., 10.)]);
    assert_eq!(intersect(&a, &b), None);
}

#[test]
fn agrees_with_geo_on_uniform_lines() {
    init_log();
    const NUM_LINES: usize = 256;
    let mut rng = StdRng::seed_from_u64(2022);
    let segments = uniform_segments(&mut rng, NUM_LINES, square(50.));

    let mut crossings = 0;
    for (i, a) in segments.iter().enumerate() {
        for b in segments[i + 1..].iter() {
            let rect_overlap = a.bounding_rect().intersects(&b.bounding_rect());
            assert_eq!(exclude(a, b), !rect_overlap, "{:?} {:?}", a, b);

            let geo_isec = line_intersection(a.line(), b.line());
            assert_eq!(straddle(a, b), is_proper(&geo_isec), "{:?} {:?}", a, b);

            match (intersect(a, b), geo_isec) {
                (None, None) => {}
                (Some(p), Some(LineIntersection::SinglePoint { intersection, .. })) => {
                    crossings += 1;
                    assert_relative_eq!(p.x, intersection.x, epsilon = 1e-6);
                    assert_relative_eq!(p.y, intersection.y, epsilon = 1e-6);
                }
                (ours, theirs) => panic!("{:?} vs {:?} for {:?} {:?}", ours, theirs, a, b),
            }
        }
    }
    info!("{} crossings among {} lines", crossings, NUM_LINES);
    assert!(crossings > 0);
}

fn coord() -> impl Strategy<Value = (f64, f64)> {
    (0.0..50.0f64, 0.0..50.0f64)
}

/// Coordinates on a small integer grid; all the arithmetic the
/// predicates do on these is exact.
fn grid_coord() -> impl Strategy<Value = (f64, f64)> {
    (0..=10i32, 0..=10i32).prop_map(|(x, y)| (x as f64, y as f64))
}

prop_compose! {
    fn uniform_segment()(begin in coord(), end in coord()) -> Segment<f64> {
        Segment::new(begin, end)
    }
}

prop_compose! {
    fn grid_segment()(begin in grid_coord(), end in grid_coord()) -> Segment<f64> {
        Segment::new(begin, end)
    }
}

fn any_segment() -> impl Strategy<Value = Segment<f64>> {
    prop_oneof![
        4 => uniform_segment(),
        1 => coord().prop_map(|c| Segment::new(c, c)),
    ]
}

proptest! {
    #[test]
    fn symmetry(a in any_segment(), b in any_segment()) {
        prop_assert_eq!(straddle(&a, &b), straddle(&b, &a));
        prop_assert_eq!(exclude(&a, &b), exclude(&b, &a));

        let ab = intersect(&a, &b);
        let ba = intersect(&b, &a);
        prop_assert_eq!(ab.is_some(), ba.is_some());
        if let (Some(p), Some(q)) = (ab, ba) {
            if sin_angle(&a, &b) > 1e-6 {
                prop_assert!((p.x - q.x).abs() < 1e-6, "{:?} vs {:?}", p, q);
                prop_assert!((p.y - q.y).abs() < 1e-6, "{:?} vs {:?}", p, q);
            }
        }
    }

    #[test]
    fn self_pairing(a in any_segment()) {
        prop_assert_eq!(intersect(&a, &a), None);
        prop_assert!(!straddle(&a, &a));
        prop_assert!(!exclude(&a, &a));
    }

    #[test]
    fn exclusion_is_sound(a in any_segment(), b in any_segment()) {
        if exclude(&a, &b) {
            prop_assert_eq!(intersect(&a, &b), None);
            prop_assert!(!straddle(&a, &b));
        }
    }

    #[test]
    fn intersection_lies_in_both_boxes(a in uniform_segment(), b in uniform_segment()) {
        if let Some(p) = intersect(&a, &b) {
            prop_assume!(sin_angle(&a, &b) > 1e-6);
            let slack = 1e-6;
            for rect in [a.bounding_rect(), b.bounding_rect()].iter() {
                prop_assert!(p.x >= rect.min().x - slack && p.x <= rect.max().x + slack);
                prop_assert!(p.y >= rect.min().y - slack && p.y <= rect.max().y + slack);
            }
        }
    }

    #[test]
    fn degenerate_never_intersects(c in coord(), b in any_segment()) {
        let p = Segment::new(c, c);
        prop_assert_eq!(intersect(&p, &b), None);
        prop_assert_eq!(intersect(&b, &p), None);
        prop_assert!(!straddle(&p, &b));
    }

    #[test]
    fn straddle_and_intersect_on_grid(a in grid_segment(), b in grid_segment()) {
        match intersection_params(&a, &b) {
            Some((rt, st)) => {
                // Either a proper crossing, or the segments touch.
                if straddle(&a, &b) {
                    prop_assert!(rt > 0. && rt < 1. && st > 0. && st < 1.);
                } else {
                    prop_assert!(touches(&a, &b), "{:?} {:?}", a, b);
                }
            }
            None => prop_assert!(!straddle(&a, &b)),
        }
        if exclude(&a, &b) {
            prop_assert_eq!(intersect(&a, &b), None);
        }
    }

    #[test]
    fn agrees_with_geo_on_grid(a in grid_segment(), b in grid_segment()) {
        prop_assume!(!a.is_degenerate() && !b.is_degenerate());

        let geo_isec = line_intersection(a.line(), b.line());
        prop_assert_eq!(straddle(&a, &b), is_proper(&geo_isec));
        prop_assert_eq!(
            exclude(&a, &b),
            !a.bounding_rect().intersects(&b.bounding_rect())
        );

        let parallel = cross(a.direction(), b.direction()) == 0.;
        match (intersect(&a, &b), geo_isec) {
            (Some(p), Some(LineIntersection::SinglePoint { intersection, .. })) => {
                prop_assert!((p.x - intersection.x).abs() < 1e-9);
                prop_assert!((p.y - intersection.y).abs() < 1e-9);
            }
            (Some(p), other) => prop_assert!(false, "{:?} vs {:?}", p, other),
            (None, Some(_)) => prop_assert!(parallel),
            (None, None) => {}
        }
    }
}
