use anyhow::Result;
use parking_lot::Mutex;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::SampleMetadata;
use crate::data::PredictionBuffer;

/// Scores how informative labeling one sample would be, given the
/// detector's prediction for it. Higher scores are labeled first.
///
/// Calls are stateless with respect to their inputs; implementations are
/// safe to invoke concurrently on disjoint samples.
pub trait ScoringPolicy: Send + Sync {
    fn score(
        &self,
        output: &PredictionBuffer,
        metadata: &[SampleMetadata],
        index: usize,
    ) -> Result<f32>;

    /// Class-weighted scoring. Policies without weighting support forward
    /// to [`score`](Self::score), so passing weights to them is harmless.
    fn score_weighted(
        &self,
        output: &PredictionBuffer,
        metadata: &[SampleMetadata],
        index: usize,
        class_weights: &[f32],
    ) -> Result<f32> {
        let _ = class_weights;
        log::debug!("Ignoring class weights");
        self.score(output, metadata, index)
    }
}

/// Uniform priority. Every sample scores 1, used when no active-learning
/// signal is wanted.
#[derive(Default, Debug, Clone, Copy)]
pub struct DefaultPolicy;

impl ScoringPolicy for DefaultPolicy {
    fn score(
        &self,
        _output: &PredictionBuffer,
        _metadata: &[SampleMetadata],
        _index: usize,
    ) -> Result<f32> {
        Ok(1.)
    }
}

/// Uniform random priority over `[1, 10]`, seeded once at construction.
///
/// The generator is stateful: two instances only produce the same scores
/// when their call histories match. That makes runs with different sample
/// schedules non-reproducible, which is intended.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: Mutex<StdRng>,
    dist: Uniform<f32>,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            dist: Uniform::new_inclusive(1., 10.),
        }
    }
}

impl ScoringPolicy for RandomPolicy {
    fn score(
        &self,
        _output: &PredictionBuffer,
        _metadata: &[SampleMetadata],
        _index: usize,
    ) -> Result<f32> {
        Ok(self.dist.sample(&mut *self.rng.lock()))
    }
}
