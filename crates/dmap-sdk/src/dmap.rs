use dmap_registry::{
    fetch_by_zone_and_name, fetch_record, fetch_word, name_word, submit_set, Walker,
};
use dmap_store::{StorageProvider, TransactionSigner, TxHandle};
use dmap_types::{Address, Record, Slot, Word, Zone};

use crate::config::DmapConfig;
use crate::deployment::Deployment;
use crate::error::{SdkError, SdkResult};

/// Handle on one deployed registry.
///
/// Bundles the storage provider, the deployment metadata and, for writes, a
/// signer. Reads never need the signer.
pub struct Dmap<P> {
    provider: P,
    deployment: Deployment,
    signer: Option<Box<dyn TransactionSigner>>,
}

impl<P: StorageProvider> Dmap<P> {
    /// Read-only handle on the registry described by `deployment`.
    pub fn new(provider: P, deployment: Deployment) -> Self {
        Self {
            provider,
            deployment,
            signer: None,
        }
    }

    /// Build a handle from configuration.
    pub fn from_config(provider: P, config: &DmapConfig) -> SdkResult<Self> {
        let deployment = config.deployment()?;
        tracing::debug!(registry = %deployment.address, "opened registry");
        Ok(Self::new(provider, deployment))
    }

    /// Enable writes through `signer`.
    pub fn with_signer(mut self, signer: impl TransactionSigner + 'static) -> Self {
        self.signer = Some(Box::new(signer));
        self
    }

    pub fn address(&self) -> &Address {
        &self.deployment.address
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// A walker over this registry, for callers that want [`Resolution`](dmap_registry::Resolution)s.
    pub fn walker(&self) -> Walker<'_, P> {
        Walker::new(&self.provider, self.deployment.address)
    }

    // ---- Resolution ----

    /// Resolve a dpath to its final record.
    pub async fn walk(&self, path: &str) -> SdkResult<Record> {
        Ok(self.walker().resolve(path, false).await?.record)
    }

    /// Resolve a dpath and return every record visited, root first.
    pub async fn walk_traced(&self, path: &str) -> SdkResult<Vec<Record>> {
        Ok(self.walker().resolve(path, true).await?.trace)
    }

    // ---- Raw reads ----

    /// The record whose meta word is at `slot`.
    pub async fn get(&self, slot: &Slot) -> SdkResult<Record> {
        Ok(fetch_record(&self.provider, self.address(), slot).await?)
    }

    /// The record `name` in `zone`.
    pub async fn get_by_zone_and_name(&self, zone: &Zone, name: &str) -> SdkResult<Record> {
        Ok(fetch_by_zone_and_name(&self.provider, self.address(), zone, name).await?)
    }

    /// The single word at `slot`.
    pub async fn slot(&self, slot: &Slot) -> SdkResult<Word> {
        Ok(fetch_word(&self.provider, self.address(), slot).await?)
    }

    // ---- Writes ----

    /// Submit `set(name, meta, data)` through the configured signer.
    pub async fn set(&self, name: &str, meta: Word, data: Word) -> SdkResult<TxHandle> {
        let signer = self.signer.as_deref().ok_or(SdkError::NoSigner)?;
        let name = name_word(name)?;
        Ok(submit_set(signer, self.address(), &name, &meta, &data).await?)
    }
}

impl<P> std::fmt::Debug for Dmap<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dmap")
            .field("address", &self.deployment.address)
            .field("writable", &self.signer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dmap_registry::RegistryError;
    use dmap_store::{InMemoryStorage, RecordingSigner, StoreError};
    use dmap_types::FLAG_LOCK;

    use super::*;

    const REGISTRY: Address = Address::new([0xd1; 20]);
    const ROOT_ZONE: Zone = Zone::new([0x11; 20]);

    fn populated() -> Arc<InMemoryStorage> {
        let store = InMemoryStorage::new();
        store
            .put_root(REGISTRY, Record::new(Word::ZERO, ROOT_ZONE.to_word_prefix()))
            .unwrap();
        store
            .put_entry(
                REGISTRY,
                &ROOT_ZONE,
                "free",
                Record::new(Word::from_u64(FLAG_LOCK as u64), Word::from_u64(99)),
            )
            .unwrap();
        Arc::new(store)
    }

    #[tokio::test]
    async fn walks_through_the_facade() {
        let dmap = Dmap::new(populated(), Deployment::new(REGISTRY));
        let record = dmap.walk(":free").await.unwrap();
        assert_eq!(record.data, Word::from_u64(99));
        let trace = dmap.walk_traced("free").await.unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[1], record);
    }

    #[tokio::test]
    async fn raw_reads_agree_with_walk() {
        let dmap = Dmap::new(populated(), Deployment::new(REGISTRY));
        let root = dmap.get(&Slot::ROOT).await.unwrap();
        assert_eq!(root.zone(), ROOT_ZONE);
        assert_eq!(dmap.slot(&Slot::ROOT).await.unwrap(), root.meta);
        let free = dmap.get_by_zone_and_name(&ROOT_ZONE, "free").await.unwrap();
        assert_eq!(free, dmap.walk(":free").await.unwrap());
    }

    #[tokio::test]
    async fn walk_errors_are_wrapped() {
        let dmap = Dmap::new(populated(), Deployment::new(REGISTRY));
        let err = dmap.walk(":free:x").await.unwrap_err();
        assert!(matches!(
            err,
            SdkError::Registry(RegistryError::ZeroRegister { index: 1, .. })
        ));
    }

    #[tokio::test]
    async fn set_requires_a_signer() {
        let dmap = Dmap::new(populated(), Deployment::new(REGISTRY));
        let err = dmap.set("free", Word::ZERO, Word::ZERO).await.unwrap_err();
        assert!(matches!(err, SdkError::NoSigner));
    }

    #[tokio::test]
    async fn set_goes_to_the_registry_address() {
        let signer = Arc::new(RecordingSigner::new());
        let dmap = Dmap::from_config(populated(), &DmapConfig::with_address(REGISTRY))
            .unwrap()
            .with_signer(signer.clone());

        let handle = dmap
            .set("mine", Word::from_u64(FLAG_LOCK as u64), Word::from_u64(5))
            .await
            .unwrap();

        let subs = signer.submissions();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].to, REGISTRY);
        assert_eq!(subs[0].handle, handle);
        assert_eq!(&subs[0].calldata[4..8], b"mine");
    }

    #[tokio::test]
    async fn set_rejects_long_names_before_signing() {
        let signer = Arc::new(RecordingSigner::new());
        let dmap = Dmap::new(populated(), Deployment::new(REGISTRY)).with_signer(signer.clone());
        let err = dmap
            .set(&"n".repeat(40), Word::ZERO, Word::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Registry(RegistryError::NameOverflow { len: 40, .. })
        ));
        assert!(signer.submissions().is_empty());
    }

    #[tokio::test]
    async fn signer_failures_surface() {
        let dmap = Dmap::new(populated(), Deployment::new(REGISTRY))
            .with_signer(RecordingSigner::rejecting("out of gas"));
        let err = dmap.set("a", Word::ZERO, Word::ZERO).await.unwrap_err();
        assert!(matches!(
            err,
            SdkError::Registry(RegistryError::Store(StoreError::Rejected(_)))
        ));
    }

    #[test]
    fn from_config_needs_a_location() {
        let err = Dmap::from_config(populated(), &DmapConfig::default()).unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }
}
