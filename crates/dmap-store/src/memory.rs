use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use dmap_crypto::slot_of_name;
use dmap_types::{Address, Record, Slot, Word, Zone};

use crate::error::StoreResult;
use crate::traits::StorageProvider;

/// In-memory contract storage, keyed by `(contract, slot)`.
///
/// Intended for tests and embedding. Unset slots read as zero words, like
/// real contract storage. Words are held behind a `RwLock` so concurrent
/// reads from a walk's paired fetches never contend.
pub struct InMemoryStorage {
    words: RwLock<HashMap<(Address, Slot), Word>>,
}

impl InMemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            words: RwLock::new(HashMap::new()),
        }
    }

    /// Number of non-default words stored.
    pub fn len(&self) -> usize {
        self.words.read().expect("lock poisoned").len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.words.read().expect("lock poisoned").is_empty()
    }

    /// Remove every word.
    pub fn clear(&self) {
        self.words.write().expect("lock poisoned").clear();
    }

    /// Read a word without going through the async provider interface.
    pub fn word(&self, address: &Address, slot: &Slot) -> Word {
        self.words
            .read()
            .expect("lock poisoned")
            .get(&(*address, *slot))
            .copied()
            .unwrap_or(Word::ZERO)
    }

    /// Store one word. Writing [`Word::ZERO`] clears the slot.
    pub fn put_word(&self, address: Address, slot: Slot, word: Word) {
        let mut map = self.words.write().expect("lock poisoned");
        if word.is_zero() {
            map.remove(&(address, slot));
        } else {
            map.insert((address, slot), word);
        }
    }

    /// Store a record: `meta` at `slot`, `data` at its successor.
    pub fn put_record(&self, address: Address, slot: Slot, record: Record) -> StoreResult<()> {
        let data_slot = slot.successor()?;
        self.put_word(address, slot, record.meta);
        self.put_word(address, data_slot, record.data);
        Ok(())
    }

    /// Store the root record at [`Slot::ROOT`].
    pub fn put_root(&self, address: Address, record: Record) -> StoreResult<()> {
        self.put_record(address, Slot::ROOT, record)
    }

    /// Store the record `name` inside `zone` and return its meta slot.
    pub fn put_entry(
        &self,
        address: Address,
        zone: &Zone,
        name: &str,
        record: Record,
    ) -> StoreResult<Slot> {
        let slot = slot_of_name(zone, name)?;
        self.put_record(address, slot, record)?;
        Ok(slot)
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageProvider for InMemoryStorage {
    async fn fetch_word(&self, address: &Address, slot: &Slot) -> StoreResult<Word> {
        Ok(self.word(address, slot))
    }
}

impl std::fmt::Debug for InMemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStorage")
            .field("word_count", &self.len())
            .finish()
    }
}
