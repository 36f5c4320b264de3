use std::collections::BTreeMap;
use std::path::Path;

use dmap_types::Address;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{SdkError, SdkResult};

/// Name of the registry object inside a deployment pack.
pub const REGISTRY_OBJECT: &str = "dmap";

/// Where the registry lives and what it looks like.
///
/// Deployment metadata is produced by whatever deployed the contract; the SDK
/// only reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct Deployment {
    /// Address of the registry contract.
    pub address: Address,
    /// Contract artifact (ABI, bytecode), kept opaque.
    pub artifact: Option<Value>,
}

#[derive(Deserialize)]
struct PackFile {
    objects: BTreeMap<String, PackObject>,
}

#[derive(Deserialize)]
struct PackObject {
    address: Address,
}

impl Deployment {
    /// A deployment known only by its address.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            artifact: None,
        }
    }

    /// Read the registry address from a deployment pack.
    ///
    /// The pack is a JSON document whose `objects.dmap.address` holds the
    /// registry address; all other content is ignored.
    pub fn from_pack_json(json: &str) -> SdkResult<Self> {
        let pack: PackFile =
            serde_json::from_str(json).map_err(|e| SdkError::Deployment(e.to_string()))?;
        let object = pack.objects.get(REGISTRY_OBJECT).ok_or_else(|| {
            SdkError::Deployment(format!("pack has no `{REGISTRY_OBJECT}` object"))
        })?;
        Ok(Self::new(object.address))
    }

    /// Load a deployment pack and, optionally, the contract artifact.
    pub fn load(pack: &Path, artifact: Option<&Path>) -> SdkResult<Self> {
        let mut deployment = Self::from_pack_json(&std::fs::read_to_string(pack)?)?;
        if let Some(path) = artifact {
            deployment = deployment.with_artifact(load_artifact(path)?);
        }
        Ok(deployment)
    }

    pub fn with_artifact(mut self, artifact: Value) -> Self {
        self.artifact = Some(artifact);
        self
    }
}

pub(crate) fn load_artifact(path: &Path) -> SdkResult<Value> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| SdkError::Deployment(format!("artifact {}: {e}", path.display())))
}
