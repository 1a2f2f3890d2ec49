
mod bvr_box;
mod policy_config;
mod sample_metadata;

pub use bvr_box::*;
pub use policy_config::*;
pub use sample_metadata::*;
