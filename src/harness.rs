//! Brute-force timing of the predicates over all ordered pairs of a
//! segment set.
use std::{
    fmt::{self, Display},
    time::{Duration, Instant},
};

use geo::GeoFloat;
use itertools::iproduct;
use log::info;

use crate::{exclude, intersect, straddle, Segment};

/// The pairwise predicates that can be swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Exclude,
    Straddle,
    Intersect,
}

impl Predicate {
    /// All predicates, in the order [`run_all`] sweeps them.
    pub const ALL: [Predicate; 3] = [Predicate::Exclude, Predicate::Straddle, Predicate::Intersect];

    pub fn name(&self) -> &'static str {
        match self {
            Predicate::Exclude => "exclude",
            Predicate::Straddle => "straddle",
            Predicate::Intersect => "intersect",
        }
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    pub predicate: Predicate,
    /// Number of ordered pairs evaluated (`n * n`).
    pub pairs: usize,
    /// Number of pairs the predicate fired on.
    pub hits: usize,
    pub elapsed: Duration,
}

/// Formats as `Tested <name>: <ms>ms (<hits> of <pairs> pairs)`, with
/// sub-millisecond precision.
impl Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tested {name}: {ms:.3}ms ({hits} of {pairs} pairs)",
            name = self.predicate,
            ms = self.elapsed.as_secs_f64() * 1e3,
            hits = self.hits,
            pairs = self.pairs,
        )
    }
}

/// Receives the outcome of each sweep.
pub trait ReportSink {
    /// Called before a sweep starts.
    fn start(&mut self, _predicate: Predicate) {}

    fn record(&mut self, report: &SweepReport);
}

/// Writes timings to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn start(&mut self, predicate: Predicate) {
        info!("Testing {}...", predicate);
    }

    fn record(&mut self, report: &SweepReport) {
        info!("{}", report);
    }
}

impl ReportSink for Vec<SweepReport> {
    fn record(&mut self, report: &SweepReport) {
        self.push(report.clone());
    }
}

/// Count the ordered pairs (self pairs included) accepted by `pred`.
#[inline]
fn count_pairs<T, F>(segments: &[Segment<T>], pred: F) -> usize
where
    T: GeoFloat,
    F: Fn(&Segment<T>, &Segment<T>) -> bool,
{
    iproduct!(segments.iter(), segments.iter())
        .filter(|&(a, b)| pred(a, b))
        .count()
}

/// Evaluate `predicate` on every ordered pair of `segments` and time it.
pub fn sweep<T: GeoFloat>(predicate: Predicate, segments: &[Segment<T>]) -> SweepReport {
    let start = Instant::now();
    // Dispatch once so the inner loop is monomorphic.
    let hits = match predicate {
        Predicate::Exclude => count_pairs(segments, exclude),
        Predicate::Straddle => count_pairs(segments, straddle),
        Predicate::Intersect => count_pairs(segments, |a, b| intersect(a, b).is_some()),
    };
    let elapsed = start.elapsed();

    SweepReport {
        predicate,
        pairs: segments.len() * segments.len(),
        hits,
        elapsed,
    }
}

/// Sweep every predicate in [`Predicate::ALL`] order, reporting each to `sink`.
pub fn run_all<T: GeoFloat, S: ReportSink>(segments: &[Segment<T>], sink: &mut S) {
    for &predicate in Predicate::ALL.iter() {
        sink.start(predicate);
        let report = sweep(predicate, segments);
        sink.record(&report);
    }
}
