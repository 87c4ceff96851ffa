use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use self::{
    contract::ContractDescriptor,
    options::{
        BundleOptions, ClientOptions, GenerationOptions, MessageComposerOptions, ReactQueryOptions,
        RecoilOptions, TypesOptions,
    },
};

mod contract;
mod options;

/// One generation run: which contracts to process, where the generator
/// writes the emitted sources, and which artifacts it emits.
///
/// Serializes to the configuration object the generator's native API
/// accepts, with camelCase wire keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerationRequest {
    pub contracts: Vec<ContractDescriptor>,
    pub out_path: PathBuf,
    pub options: GenerationOptions,
}
