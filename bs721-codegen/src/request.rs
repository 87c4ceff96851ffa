use std::path::PathBuf;

use codegen_config::{
    BundleOptions, ClientOptions, ContractDescriptor, GenerationOptions, GenerationRequest,
    MessageComposerOptions, ReactQueryOptions, RecoilOptions, TypesOptions,
};

#[cfg(test)]
mod tests;

const DEFAULT_OUT_PATH: &str = "./src/";

/// The hand-authored request covering the bs721 contract suite. Contracts
/// are handed to the generator in the order declared here.
pub(crate) fn bs721_bindings(out_path: Option<PathBuf>) -> GenerationRequest {
    GenerationRequest {
        contracts: vec![
            ContractDescriptor::new("Bs721Base", "../contracts/bs721-base/schema"),
            ContractDescriptor::new("Bs721Launchpad", "../contracts/bs721-launchpad/schema"),
            /*
            ContractDescriptor::new("Bs721Royalty", "../contracts/bs721-royalty/schema"),
            */
        ],
        out_path: out_path.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_PATH)),
        options: GenerationOptions {
            bundle: Some(BundleOptions {
                bundle_file: "index.ts".into(),
                scope: "contracts".into(),
            }),
            types: TypesOptions { enabled: true },
            client: ClientOptions { enabled: true },
            react_query: ReactQueryOptions {
                enabled: false,
                optional_client: true,
                version: "v4".into(),
                mutations: true,
                query_keys: true,
                query_factory: true,
            },
            recoil: RecoilOptions { enabled: false },
            message_composer: MessageComposerOptions { enabled: true },
        },
    }
}
