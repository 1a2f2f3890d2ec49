use std::time::Duration;

/// Summary of one scoring pass over a dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreStats {
    pub samples: usize,
    pub seconds_elapsed: f64,
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

impl ScoreStats {
    pub fn from_scores(scores: &[f32], elapsed: Duration) -> Self {
        let mut stats = ScoreStats {
            samples: scores.len(),
            seconds_elapsed: elapsed.as_secs_f64(),
            ..Default::default()
        };
        if scores.is_empty() {
            return stats;
        }

        stats.min = f32::INFINITY;
        stats.max = f32::NEG_INFINITY;
        let mut sum = 0.;
        for &score in scores {
            if score < stats.min {
                stats.min = score;
            }
            if score > stats.max {
                stats.max = score;
            }
            sum += score;
        }
        stats.mean = sum / scores.len() as f32;
        stats
    }
}

/// Receives scoring results for presentation or persistence.
pub trait StatSink {
    fn set_current_experiment(&self, experiment: &str);

    /// Called once per scoring pass with the summary and the ranked
    /// `(sample, score)` pairs, highest score first.
    fn process(&self, stats: &ScoreStats, ranked: &[(usize, f32)]);
}

/// Renders scoring results through the log facade.
#[derive(Default, Debug, Clone, Copy)]
pub struct ConsoleStatSink;

impl StatSink for ConsoleStatSink {
    fn set_current_experiment(&self, experiment: &str) {
        log::info!("Beginning experiment: {experiment}");
    }

    fn process(&self, stats: &ScoreStats, ranked: &[(usize, f32)]) {
        log::info!(
            "Scored {} samples in {:.3}s:",
            stats.samples,
            stats.seconds_elapsed
        );
        log::info!("{:>24}: {}", "min score", stats.min);
        log::info!("{:>24}: {}", "max score", stats.max);
        log::info!("{:>24}: {}", "mean score", stats.mean);
        for (sample, score) in ranked {
            log::debug!("  sample {sample:>8}: {score}");
        }
    }
}
