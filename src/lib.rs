mod utils;
pub mod common;
pub mod data;
pub mod reporting;
pub mod scoring;

use std::time::Instant;

use anyhow::Result;
use rayon::prelude::*;
use serde_json::Value;

use crate::common::SampleMetadata;
use crate::data::PredictionBuffer;
use crate::reporting::{ScoreStats, StatSink};
use crate::scoring::ScoringPolicy;

pub use utils::class_weights_from_file;

/// Builds the scoring policy named in the experiment configuration. Grid
/// policies validate `config` here, before any scoring call.
pub fn init_policy(policy_name: &str, config: &Value, seed: u64) -> Result<Box<dyn ScoringPolicy>> {
    log::info!("Initializing active learning policy \"{policy_name}\"");
    scoring::create_with_name(policy_name, config, seed)
}

/// Scores every sample in the buffer, in parallel. Returns one score per
/// sample, in sample order.
pub fn score_dataset(
    policy: &dyn ScoringPolicy,
    output: &PredictionBuffer,
    metadata: &[SampleMetadata],
    class_weights: &[f32],
) -> Result<Vec<f32>> {
    output.ensure_host();
    (0..output.samples())
        .into_par_iter()
        .map(|index| policy.score_weighted(output, metadata, index, class_weights))
        .collect()
}

/// Scores every sample and returns `(sample, score)` pairs sorted highest
/// score first, the labeling order for the next annotation round. The
/// result is also handed to `sink` when one is given.
pub fn rank_dataset(
    policy: &dyn ScoringPolicy,
    output: &PredictionBuffer,
    metadata: &[SampleMetadata],
    class_weights: &[f32],
    sink: Option<&dyn StatSink>,
) -> Result<Vec<(usize, f32)>> {
    let now = Instant::now();
    let scores = score_dataset(policy, output, metadata, class_weights)?;

    let mut ranked: Vec<(usize, f32)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    log::trace!("Ranked {} samples in {:.2?}", ranked.len(), now.elapsed());
    if let Some(sink) = sink {
        sink.process(&ScoreStats::from_scores(&scores, now.elapsed()), &ranked);
    }

    Ok(ranked)
}
