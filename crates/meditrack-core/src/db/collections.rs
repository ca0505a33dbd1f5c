//! Whole-collection load and save on top of a [`KeyValueStore`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{seed_hospitals, seed_records, DbResult, KeyValueStore};
use crate::models::{Hospital, PatientRecord};

/// The two persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Hospitals,
    Records,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 2] = [Self::Hospitals, Self::Records];

    /// Storage key of the collection.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Hospitals => "meditrack_hospitals",
            Self::Records => "meditrack_records",
        }
    }
}

/// Load a collection, falling back to `seed` when the key is absent or the
/// stored value does not parse.
pub fn load_collection<S, T, F>(store: &S, key: CollectionKey, seed: F) -> DbResult<Vec<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    let Some(stored) = store.get(key.storage_key())? else {
        tracing::debug!(key = key.storage_key(), "no stored collection, using seed data");
        return Ok(seed());
    };

    match serde_json::from_str(&stored) {
        Ok(items) => Ok(items),
        Err(e) => {
            tracing::warn!(
                key = key.storage_key(),
                error = %e,
                "stored collection is unreadable, using seed data"
            );
            Ok(seed())
        }
    }
}

/// Write the whole collection under its key.
pub fn save_collection<S, T>(store: &S, key: CollectionKey, items: &[T]) -> DbResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(items)?;
    store.set(key.storage_key(), &json)?;
    tracing::debug!(key = key.storage_key(), count = items.len(), "collection written");
    Ok(())
}

/// Load hospitals or the seed set.
pub fn load_hospitals<S: KeyValueStore + ?Sized>(store: &S) -> DbResult<Vec<Hospital>> {
    load_collection(store, CollectionKey::Hospitals, seed_hospitals)
}

/// Load records or the seed set.
pub fn load_records<S: KeyValueStore + ?Sized>(store: &S) -> DbResult<Vec<PatientRecord>> {
    load_collection(store, CollectionKey::Records, seed_records)
}

pub fn save_hospitals<S: KeyValueStore + ?Sized>(store: &S, hospitals: &[Hospital]) -> DbResult<()> {
    save_collection(store, CollectionKey::Hospitals, hospitals)
}

pub fn save_records<S: KeyValueStore + ?Sized>(store: &S, records: &[PatientRecord]) -> DbResult<()> {
    save_collection(store, CollectionKey::Records, records)
}

/// Forget both stored collections so the next load returns seed data.
pub fn reset_collections<S: KeyValueStore + ?Sized>(store: &S) -> DbResult<()> {
    for key in CollectionKey::ALL {
        store.remove(key.storage_key())?;
    }
    Ok(())
}
