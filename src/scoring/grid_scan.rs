use crate::data::{GridLayout, PredictionBuffer};

/// Top-2 class probabilities for one cell. Maxima advance on strict `>`
/// only, so the first-seen class wins ties.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ClassScan {
    pub max_class_score: f32,
    pub second_max_class_score: f32,
    pub max_class: usize,
}

impl ClassScan {
    /// 1-vs-2 margin: large when the model is torn between its two best
    /// class guesses.
    pub fn margin(&self) -> f32 {
        1. - (self.max_class_score - self.second_max_class_score)
    }
}

pub(crate) fn scan_classes(
    output: &PredictionBuffer,
    layout: &GridLayout,
    cell_id: usize,
) -> ClassScan {
    let mut scan = ClassScan::default();
    for c in 0..layout.classes {
        let class_prob = output.get(layout.class_offset(c, cell_id));
        if class_prob > scan.max_class_score {
            scan.second_max_class_score = scan.max_class_score;
            scan.max_class_score = class_prob;
            scan.max_class = c;
        }
    }
    scan
}

/// Best confidence/IoU estimate over the cell's box records.
pub(crate) fn max_box_confidence(
    output: &PredictionBuffer,
    layout: &GridLayout,
    cell_id: usize,
) -> f32 {
    let mut max_iou = 0.;
    for b in 0..layout.boxes_per_cell {
        let iou = output.get(layout.box_offset(cell_id, b, GridLayout::CONFIDENCE));
        if iou > max_iou {
            max_iou = iou;
        }
    }
    max_iou
}
