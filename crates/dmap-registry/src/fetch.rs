use dmap_crypto::slot_of;
use dmap_store::StorageProvider;
use dmap_types::{encode_name, Address, Record, Slot, Word, Zone, NAME_LEN};
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};

/// Encode a step name into its 32-byte field.
///
/// Names longer than 32 bytes are rejected with
/// [`RegistryError::NameOverflow`]; they are never truncated.
pub fn encode_step_name(name: &str) -> RegistryResult<[u8; NAME_LEN]> {
    encode_name(name).map_err(|_| RegistryError::NameOverflow {
        name: name.to_string(),
        len: name.len(),
    })
}

/// Encode a name as the `bytes32` word passed to `set`.
pub fn name_word(name: &str) -> RegistryResult<Word> {
    encode_step_name(name).map(Word::new)
}

/// Read a single raw word.
pub async fn fetch_word<P>(provider: &P, address: &Address, slot: &Slot) -> RegistryResult<Word>
where
    P: StorageProvider + ?Sized,
{
    Ok(provider.fetch_word(address, slot).await?)
}

/// Read the record whose meta word is at `slot`.
///
/// The meta and data words are independent reads and are issued together;
/// this returns once both have completed, or on the first failure.
pub async fn fetch_record<P>(provider: &P, address: &Address, slot: &Slot) -> RegistryResult<Record>
where
    P: StorageProvider + ?Sized,
{
    let data_slot = slot.successor()?;
    let (meta, data) = tokio::try_join!(
        provider.fetch_word(address, slot),
        provider.fetch_word(address, &data_slot),
    )?;
    debug!(%slot, %meta, %data, "fetched record");
    Ok(Record::new(meta, data))
}

/// Read the record `name` inside `zone`.
pub async fn fetch_by_zone_and_name<P>(
    provider: &P,
    address: &Address,
    zone: &Zone,
    name: &str,
) -> RegistryResult<Record>
where
    P: StorageProvider + ?Sized,
{
    let slot = slot_of(zone, &encode_step_name(name)?);
    fetch_record(provider, address, &slot).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use dmap_store::{InMemoryStorage, StoreError, StoreResult};
    use tokio::sync::Barrier;

    use super::*;

    const REGISTRY: Address = Address::new([0xd1; 20]);

    /// Every read waits until a second read arrives.
    struct PairedReads {
        barrier: Barrier,
        reads: AtomicUsize,
    }

    #[async_trait]
    impl StorageProvider for PairedReads {
        async fn fetch_word(&self, _address: &Address, _slot: &Slot) -> StoreResult<Word> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.barrier.wait().await;
            Ok(Word::ZERO)
        }
    }

    struct Unreachable;

    #[async_trait]
    impl StorageProvider for Unreachable {
        async fn fetch_word(&self, _address: &Address, _slot: &Slot) -> StoreResult<Word> {
            Err(StoreError::Network("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn record_reads_meta_and_successor() {
        let store = InMemoryStorage::new();
        let slot = Slot::new([7; 32]);
        let record = Record::new(Word::from_u64(1), Word::from_u64(2));
        store.put_record(REGISTRY, slot, record).unwrap();

        assert_eq!(fetch_record(&store, &REGISTRY, &slot).await.unwrap(), record);
        assert_eq!(fetch_word(&store, &REGISTRY, &slot).await.unwrap(), record.meta);
        let data_slot = slot.successor().unwrap();
        assert_eq!(fetch_word(&store, &REGISTRY, &data_slot).await.unwrap(), record.data);
    }

    #[tokio::test]
    async fn record_halves_are_fetched_concurrently() {
        let provider = PairedReads {
            barrier: Barrier::new(2),
            reads: AtomicUsize::new(0),
        };
        let fetch = fetch_record(&provider, &REGISTRY, &Slot::ROOT);
        let record = tokio::time::timeout(Duration::from_secs(5), fetch)
            .await
            .expect("meta and data reads must overlap")
            .unwrap();
        assert_eq!(record, Record::default());
        assert_eq!(provider.reads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn network_errors_pass_through() {
        let err = fetch_record(&Unreachable, &REGISTRY, &Slot::ROOT).await.unwrap_err();
        assert_eq!(
            err,
            RegistryError::Store(StoreError::Network("connection refused".into()))
        );
    }

    #[tokio::test]
    async fn last_slot_has_no_data_word() {
        let store = InMemoryStorage::new();
        let err = fetch_record(&store, &REGISTRY, &Slot::new([0xff; 32])).await.unwrap_err();
        assert!(matches!(err, RegistryError::Codec(_)));
    }

    #[tokio::test]
    async fn by_zone_and_name_matches_derived_slot() {
        let store = InMemoryStorage::new();
        let zone = Zone::new([0x11; 20]);
        let record = Record::new(Word::from_u64(1), Word::from_u64(3));
        store.put_entry(REGISTRY, &zone, "a", record).unwrap();

        let found = fetch_by_zone_and_name(&store, &REGISTRY, &zone, "a").await.unwrap();
        assert_eq!(found, record);
        let missing = fetch_by_zone_and_name(&store, &REGISTRY, &zone, "b").await.unwrap();
        assert_eq!(missing, Record::default());
    }

    #[test]
    fn long_names_overflow() {
        let name = "z".repeat(33);
        assert_eq!(
            encode_step_name(&name).unwrap_err(),
            RegistryError::NameOverflow { name, len: 33 }
        );
    }

    #[test]
    fn name_word_is_right_padded() {
        let word = name_word("ab").unwrap();
        assert_eq!(&word.as_bytes()[..2], b"ab");
        assert!(word.as_bytes()[2..].iter().all(|b| *b == 0));
    }
}
