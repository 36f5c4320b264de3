use std::path::{Path, PathBuf};

use dmap_types::Address;
use serde::{Deserialize, Serialize};

use crate::deployment::{load_artifact, Deployment};
use crate::error::{SdkError, SdkResult};

/// Where to find the registry.
///
/// ```toml
/// address = "0x90949c9937a11ba943c7a72c3fa073a37e3fdd96"
/// # or
/// deployment = "pack/dmap.json"
/// artifact = "pack/ipfs/Dmap.json"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DmapConfig {
    /// Registry address. Takes precedence over the deployment pack.
    pub address: Option<Address>,
    /// Deployment pack JSON to read the address from.
    pub deployment: Option<PathBuf>,
    /// Contract artifact JSON.
    pub artifact: Option<PathBuf>,
}

impl DmapConfig {
    /// A configuration naming the registry address directly.
    pub fn with_address(address: Address) -> Self {
        Self {
            address: Some(address),
            ..Default::default()
        }
    }

    pub fn from_toml_str(s: &str) -> SdkResult<Self> {
        toml::from_str(s).map_err(|e| SdkError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> SdkResult<String> {
        toml::to_string(self).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Read a TOML configuration file.
    pub fn load(path: &Path) -> SdkResult<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Resolve the deployment this configuration points at.
    pub fn deployment(&self) -> SdkResult<Deployment> {
        let deployment = match (&self.address, &self.deployment) {
            (Some(address), _) => Deployment::new(*address),
            (None, Some(pack)) => Deployment::load(pack, None)?,
            (None, None) => {
                return Err(SdkError::Config(
                    "either `address` or `deployment` must be set".into(),
                ))
            }
        };
        match &self.artifact {
            Some(path) => Ok(deployment.with_artifact(load_artifact(path)?)),
            None => Ok(deployment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x90949c9937a11ba943c7a72c3fa073a37e3fdd96";

    #[test]
    fn default_config_is_empty() {
        let c = DmapConfig::default();
        assert!(c.address.is_none());
        assert!(c.deployment.is_none());
        assert!(c.artifact.is_none());
        assert!(matches!(c.deployment(), Err(SdkError::Config(_))));
    }

    #[test]
    fn address_from_toml() {
        let c = DmapConfig::from_toml_str(&format!("address = \"{ADDRESS}\"")).unwrap();
        let deployment = c.deployment().unwrap();
        assert_eq!(deployment.address.to_hex(), ADDRESS);
    }

    #[test]
    fn toml_roundtrip() {
        let c = DmapConfig {
            address: Some(ADDRESS.parse().unwrap()),
            deployment: Some("pack/dmap.json".into()),
            artifact: None,
        };
        let text = c.to_toml_string().unwrap();
        assert_eq!(DmapConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            DmapConfig::from_toml_str("adress = \"0x00\""),
            Err(SdkError::Config(_))
        ));
    }

    #[test]
    fn bad_address_is_a_config_error() {
        assert!(matches!(
            DmapConfig::from_toml_str("address = \"0x12\""),
            Err(SdkError::Config(_))
        ));
    }

    #[test]
    fn deployment_pack_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let pack = dir.path().join("dmap.json");
        std::fs::write(
            &pack,
            format!(r#"{{"objects": {{"dmap": {{"address": "{ADDRESS}"}}}}}}"#),
        )
        .unwrap();
        let config_path = dir.path().join("dmap.toml");
        std::fs::write(
            &config_path,
            format!("deployment = {:?}\n", pack.display().to_string()),
        )
        .unwrap();

        let config = DmapConfig::load(&config_path).unwrap();
        assert_eq!(config.deployment().unwrap().address.to_hex(), ADDRESS);
    }

    #[test]
    fn explicit_address_wins_over_pack() {
        let c = DmapConfig {
            address: Some(Address::new([1; 20])),
            deployment: Some("does/not/exist.json".into()),
            artifact: None,
        };
        assert_eq!(c.deployment().unwrap().address, Address::new([1; 20]));
    }
}
