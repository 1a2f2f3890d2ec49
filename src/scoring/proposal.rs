use anyhow::{anyhow, Result};

use crate::common::{PolicyConfig, SampleMetadata};
use crate::data::{GridLayout, PredictionBuffer};
use crate::scoring::grid_scan::{scan_classes, ClassScan};
use crate::scoring::ScoringPolicy;

/// Per-cell contribution of the proposal-gated 1-vs-2 policies. Class
/// weights only apply when the weight vector length matches the decoded
/// class count exactly; any other length means unweighted.
fn cell_contribution(scan: &ClassScan, class_weights: &[f32], use_class_weights: bool) -> f32 {
    let box_score = scan.margin();
    if use_class_weights {
        class_weights[scan.max_class] * (box_score * box_score)
    } else {
        box_score * box_score
    }
}

fn metadata_entry<'a>(
    metadata: &'a [SampleMetadata],
    index: usize,
) -> Result<&'a SampleMetadata> {
    metadata
        .get(index)
        .ok_or_else(|| anyhow!("no metadata entry for sample {index}"))
}

/// Sum of 1-vs-2 margin scores over all cells with at least one proposal.
#[derive(Debug, Clone)]
pub struct ProposalSum1vs2Policy {
    config: PolicyConfig,
}

impl ProposalSum1vs2Policy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }
}

impl ScoringPolicy for ProposalSum1vs2Policy {
    fn score(
        &self,
        output: &PredictionBuffer,
        metadata: &[SampleMetadata],
        index: usize,
    ) -> Result<f32> {
        self.score_weighted(output, metadata, index, &[])
    }

    fn score_weighted(
        &self,
        output: &PredictionBuffer,
        metadata: &[SampleMetadata],
        index: usize,
        class_weights: &[f32],
    ) -> Result<f32> {
        output.ensure_host();
        let layout = GridLayout::for_sample(&self.config, index, output.maps())?;
        let sample = metadata_entry(metadata, index)?;
        let use_class_weights = class_weights.len() == layout.classes;

        let mut total_score = 0.;
        for cell_id in layout.cell_ids() {
            if !sample.has_proposal_for(cell_id) {
                continue;
            }

            let scan = scan_classes(output, &layout, cell_id);
            total_score += cell_contribution(&scan, class_weights, use_class_weights);
        }

        Ok(total_score)
    }
}

/// Largest 1-vs-2 margin score over all cells with at least one proposal,
/// 0 when no cell matches.
#[derive(Debug, Clone)]
pub struct ProposalMax1vs2Policy {
    config: PolicyConfig,
}

impl ProposalMax1vs2Policy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }
}

impl ScoringPolicy for ProposalMax1vs2Policy {
    fn score(
        &self,
        output: &PredictionBuffer,
        metadata: &[SampleMetadata],
        index: usize,
    ) -> Result<f32> {
        self.score_weighted(output, metadata, index, &[])
    }

    fn score_weighted(
        &self,
        output: &PredictionBuffer,
        metadata: &[SampleMetadata],
        index: usize,
        class_weights: &[f32],
    ) -> Result<f32> {
        output.ensure_host();
        let layout = GridLayout::for_sample(&self.config, index, output.maps())?;
        let sample = metadata_entry(metadata, index)?;
        let use_class_weights = class_weights.len() == layout.classes;

        let mut total_score = 0.;
        for cell_id in layout.cell_ids() {
            if !sample.has_proposal_for(cell_id) {
                continue;
            }

            let scan = scan_classes(output, &layout, cell_id);
            let cell_score = cell_contribution(&scan, class_weights, use_class_weights);
            if cell_score > total_score {
                total_score = cell_score;
            }
        }

        Ok(total_score)
    }
}

/// Mean 1-vs-2 margin score over all cells with at least one proposal,
/// 0 when no cell matches.
#[derive(Debug, Clone)]
pub struct ProposalAvg1vs2Policy {
    config: PolicyConfig,
}

impl ProposalAvg1vs2Policy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }
}

impl ScoringPolicy for ProposalAvg1vs2Policy {
    fn score(
        &self,
        output: &PredictionBuffer,
        metadata: &[SampleMetadata],
        index: usize,
    ) -> Result<f32> {
        self.score_weighted(output, metadata, index, &[])
    }

    fn score_weighted(
        &self,
        output: &PredictionBuffer,
        metadata: &[SampleMetadata],
        index: usize,
        class_weights: &[f32],
    ) -> Result<f32> {
        output.ensure_host();
        let layout = GridLayout::for_sample(&self.config, index, output.maps())?;
        let sample = metadata_entry(metadata, index)?;
        let use_class_weights = class_weights.len() == layout.classes;

        let mut total_score = 0.;
        let mut total_score_components = 0usize;
        for cell_id in layout.cell_ids() {
            if !sample.has_proposal_for(cell_id) {
                continue;
            }

            let scan = scan_classes(output, &layout, cell_id);
            total_score += cell_contribution(&scan, class_weights, use_class_weights);
            total_score_components += 1;
        }

        if total_score_components > 0 {
            Ok(total_score / total_score_components as f32)
        } else {
            Ok(0.)
        }
    }
}
