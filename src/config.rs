use clap::Parser;
use geo::Rect;
use rand::{rngs::StdRng, SeedableRng};

use crate::random::square;

/// Number of random segments in a run, unless overridden.
pub const DEFAULT_NUM_SEGMENTS: usize = 5000;

/// Side of the square domain segments are sampled from.
pub const DEFAULT_DOMAIN: f64 = 50.;

/// Settings of a benchmark run.
///
/// Running without arguments gives the defaults: 5000 segments in
/// `[0, 50)^2` from a fresh random seed.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(about = "Time the pairwise segment predicates over a random segment set")]
pub struct HarnessConfig {
    /// Number of random segments
    #[arg(short = 'n', long = "segments", default_value_t = DEFAULT_NUM_SEGMENTS)]
    pub num_segments: usize,
    /// Segments are sampled from `[0, domain) x [0, domain)`
    #[arg(short, long, default_value_t = DEFAULT_DOMAIN, value_parser = positive_finite)]
    pub domain: f64,
    /// Fixed seed for reproducible segment sets; fresh entropy if absent
    #[arg(short, long, env = "SEGMENT_SEED")]
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            num_segments: DEFAULT_NUM_SEGMENTS,
            domain: DEFAULT_DOMAIN,
            seed: None,
        }
    }
}

impl HarnessConfig {
    #[inline]
    pub fn bounds(&self) -> Rect<f64> {
        square(self.domain)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn positive_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.trim().parse().map_err(|e| format!("{}", e))?;
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        Err(format!("must be a positive finite number, got {}", value))
    }
}
