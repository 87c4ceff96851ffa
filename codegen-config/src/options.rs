use serde::{Deserialize, Serialize};

/// Artifact switches for one generation run.
///
/// Bundling is enabled by presence: an absent [`BundleOptions`] serializes
/// to an absent `bundle` key and the generator skips the aggregate
/// re-export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<BundleOptions>,
    pub types: TypesOptions,
    pub client: ClientOptions,
    pub react_query: ReactQueryOptions,
    pub recoil: RecoilOptions,
    pub message_composer: MessageComposerOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BundleOptions {
    /// Name of the aggregate file re-exporting all generated modules.
    pub bundle_file: Box<str>,
    /// Namespace the per-contract modules are re-exported under.
    pub scope: Box<str>,
}

/// Plain type definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypesOptions {
    pub enabled: bool,
}

/// Request/response client wrapper, one per contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientOptions {
    pub enabled: bool,
}

/// Data-fetching-hook layer. The remaining switches only take effect once
/// `enabled` is set; they are carried either way so the wire document stays
/// complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReactQueryOptions {
    pub enabled: bool,
    pub optional_client: bool,
    pub version: Box<str>,
    pub mutations: bool,
    pub query_keys: bool,
    pub query_factory: bool,
}

/// State-management binding layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecoilOptions {
    pub enabled: bool,
}

/// Helper builders for constructing contract invocation messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageComposerOptions {
    pub enabled: bool,
}
