//! Pairwise predicates on 2d line segments, and a harness to compare
//! their cost.
//!
//! 1. [Bounding-box exclusion](#bounding-box-exclusion)
//! 1. [Straddle](#straddle)
//! 1. [Intersection](#intersection)
//! 1. [Benchmark harness](#benchmark-harness)
//!
//! All predicates are free functions over [`Segment`], generic over
//! any [`GeoFloat`] scalar. They are total: degenerate (zero length)
//! segments are accepted and never cause a panic. Arithmetic is plain
//! floating point; no robust predicates are used. Non-finite
//! coordinates are out of contract: the predicates still do not panic,
//! a NaN anywhere makes [`straddle`] false and [`intersect`] `None`,
//! and other results are whatever the IEEE comparisons give.
//!
//! # Bounding-box exclusion
//!
//! [`exclude`] is a fast negative filter: it returns `true` when the
//! bounding rectangles of the two segments are disjoint, in which case
//! the segments cannot intersect.
//!
//! # Straddle
//!
//! [`straddle`] tests for a proper crossing: each segment must have
//! its end points strictly on opposite sides of the line through the
//! other. Touching and collinear segments do not straddle.
//!
//! # Intersection
//!
//! [`intersect`] solves for the crossing point by Cramer's rule and
//! returns it if it lies on both segments. Parallel and collinear
//! segments yield `None`.
//!
//! ```rust
//! use geo::Coordinate;
//! use segment_predicates::{exclude, intersect, straddle, Segment};
//! let a = Segment::from([(0., 0.), (10., 10.)]);
//! let b = Segment::from([(0., 10.), (10., 0.)]);
//! assert!(!exclude(&a, &b));
//! assert!(straddle(&a, &b));
//! assert_eq!(intersect(&a, &b), Some(Coordinate { x: 5., y: 5. }));
//! ```
//!
//! # Benchmark harness
//!
//! [`harness::sweep`] evaluates a [`Predicate`] over every ordered pair
//! of a segment set and times it; [`random`] generates uniform random
//! segment sets. The `segment-predicates` binary runs all three sweeps
//! over a [`HarnessConfig`] parsed from the command line.
//!
//! [`GeoFloat`]: geo::GeoFloat
mod segment;
pub use segment::Segment;

mod exclude;
pub use exclude::exclude;

mod straddle;
pub use straddle::straddle;

mod intersect;
pub use intersect::{intersect, intersect_prefiltered, intersection_params};

pub mod random;

pub mod harness;
pub use harness::{LogSink, Predicate, ReportSink, SweepReport};

pub mod config;
pub use config::HarnessConfig;

pub(crate) mod utils;

#[cfg(test)]
mod properties;
