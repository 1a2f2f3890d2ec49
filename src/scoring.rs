mod factory;
mod grid_scan;
mod policy;
mod proposal;
mod whole_image;

pub use factory::create_with_name;
pub use policy::{DefaultPolicy, RandomPolicy, ScoringPolicy};
pub use proposal::{ProposalAvg1vs2Policy, ProposalMax1vs2Policy, ProposalSum1vs2Policy};
pub use whole_image::{WholeImage1vs2Policy, WholeImageDiffPolicy};
