use anyhow::Result;

use crate::common::{PolicyConfig, SampleMetadata};
use crate::data::{GridLayout, PredictionBuffer};
use crate::scoring::grid_scan::{max_box_confidence, scan_classes};
use crate::scoring::ScoringPolicy;

/// Sums, over every grid cell, the squared gap between the cell's best box
/// confidence and its best class probability. Cells where the detector is
/// confident about a box but unsure of its class score high.
#[derive(Debug, Clone)]
pub struct WholeImageDiffPolicy {
    config: PolicyConfig,
}

impl WholeImageDiffPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }
}

impl ScoringPolicy for WholeImageDiffPolicy {
    fn score(
        &self,
        output: &PredictionBuffer,
        _metadata: &[SampleMetadata],
        index: usize,
    ) -> Result<f32> {
        output.ensure_host();
        let layout = GridLayout::for_sample(&self.config, index, output.maps())?;

        let mut total_score = 0.;
        for cell_id in layout.cell_ids() {
            let scan = scan_classes(output, &layout, cell_id);
            let max_iou = max_box_confidence(output, &layout, cell_id);

            let box_score = max_iou - scan.max_class_score;
            total_score += box_score * box_score;
        }

        Ok(total_score)
    }
}

/// Sums, over every grid cell, the squared product of the cell's best box
/// confidence and its 1-vs-2 class margin. Class-ambiguous cells with a
/// confident detection score high.
#[derive(Debug, Clone)]
pub struct WholeImage1vs2Policy {
    config: PolicyConfig,
}

impl WholeImage1vs2Policy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }
}

impl ScoringPolicy for WholeImage1vs2Policy {
    fn score(
        &self,
        output: &PredictionBuffer,
        _metadata: &[SampleMetadata],
        index: usize,
    ) -> Result<f32> {
        output.ensure_host();
        let layout = GridLayout::for_sample(&self.config, index, output.maps())?;

        let mut total_score = 0.;
        for cell_id in layout.cell_ids() {
            let scan = scan_classes(output, &layout, cell_id);
            let max_iou = max_box_confidence(output, &layout, cell_id);

            let box_score = max_iou * scan.margin();
            total_score += box_score * box_score;
        }

        Ok(total_score)
    }
}
