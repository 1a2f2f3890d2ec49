use serde::{Deserialize, Serialize};
use crate::common::BvrBox;

/// Ordered proposal list for one sample. May be empty.
pub type ProposalSet = Vec<BvrBox>;

/// Per-sample metadata as handed over by the dataset store. Detection
/// datasets carry a proposal list; other task types carry nothing the
/// scoring engine can use.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub enum SampleMetadata {
    #[default]
    None,
    Detection(ProposalSet),
}

impl SampleMetadata {
    /// The sample's proposals, empty for non-detection metadata.
    pub fn proposals(&self) -> &[BvrBox] {
        match self {
            SampleMetadata::Detection(proposals) => proposals,
            SampleMetadata::None => &[],
        }
    }

    /// Whether at least one proposal originated in the given grid cell.
    pub fn has_proposal_for(&self, cell_id: usize) -> bool {
        self.proposals().iter().any(|p| p.cell_id == cell_id)
    }
}
