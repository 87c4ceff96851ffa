use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One smart contract to generate bindings for.
///
/// The schema directory has to exist and contain the contract's JSON schema
/// files at invocation time. The generator validates that, not this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractDescriptor {
    /// PascalCase identifier the generator derives type and class names from.
    pub name: Box<str>,
    #[serde(rename = "dir")]
    pub schema_dir: PathBuf,
}

impl ContractDescriptor {
    pub fn new<Name, SchemaDir>(name: Name, schema_dir: SchemaDir) -> Self
    where
        Name: Into<Box<str>>,
        SchemaDir: Into<PathBuf>,
    {
        Self {
            name: name.into(),
            schema_dir: schema_dir.into(),
        }
    }
}
