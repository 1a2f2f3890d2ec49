use anyhow::Result;
use serde_json::Value;

use crate::common::PolicyConfig;
use crate::scoring::{
    DefaultPolicy, ProposalAvg1vs2Policy, ProposalMax1vs2Policy, ProposalSum1vs2Policy,
    RandomPolicy, ScoringPolicy, WholeImage1vs2Policy, WholeImageDiffPolicy,
};

/// Resolves a scoring policy by its experiment-config name.
///
/// Grid policies validate `config` here and fail construction on a bad
/// geometry. An unrecognized name is logged and resolves to
/// [`DefaultPolicy`], never an error.
pub fn create_with_name(name: &str, config: &Value, seed: u64) -> Result<Box<dyn ScoringPolicy>> {
    Ok(match name {
        "wholeimagediff" => Box::new(WholeImageDiffPolicy::new(PolicyConfig::from_json(config)?)),
        "wholeimage1vs2" => Box::new(WholeImage1vs2Policy::new(PolicyConfig::from_json(config)?)),
        "proposalsum1vs2" => {
            Box::new(ProposalSum1vs2Policy::new(PolicyConfig::from_json(config)?))
        }
        "proposalmax1vs2" => {
            Box::new(ProposalMax1vs2Policy::new(PolicyConfig::from_json(config)?))
        }
        "proposalavg1vs2" => {
            Box::new(ProposalAvg1vs2Policy::new(PolicyConfig::from_json(config)?))
        }
        "random" => Box::new(RandomPolicy::new(seed)),
        _ => {
            log::error!("Unknown active learning policy: {name}");
            Box::new(DefaultPolicy)
        }
    })
}
