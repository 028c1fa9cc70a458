use clap::Parser;
use env_logger::Env;
use log::info;

use segment_predicates::{harness, random::uniform_segments, HarnessConfig, LogSink};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = HarnessConfig::parse();
    let mut rng = config.rng();
    let segments = uniform_segments(&mut rng, config.num_segments, config.bounds());
    info!(
        "Generated {n} segments in [0, {d})^2",
        n = segments.len(),
        d = config.domain
    );

    harness::run_all(&segments, &mut LogSink);
}
