//! Fixed-capacity result store with least-recently-inserted eviction.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::StoreError;
use crate::keys::{KeyStrategy, UuidKeys};

pub const DEFAULT_CAPACITY: usize = 50;

/// Bounded store of results in their wire form.
///
/// Values are kept as `serde_json::Value`, so every read decodes through the
/// same contract used for transport. When full, inserting evicts the entry
/// that was inserted earliest; reads do not refresh an entry's position.
pub struct ResultCache {
    capacity: usize,
    entries: HashMap<String, Value>,
    order: VecDeque<String>,
    keys: Box<dyn KeyStrategy>,
}

impl ResultCache {
    /// Store with random UUID keys.
    pub fn new(capacity: usize) -> Result<Self, StoreError> {
        Self::with_key_strategy(capacity, Box::new(UuidKeys))
    }

    pub fn with_key_strategy(
        capacity: usize,
        keys: Box<dyn KeyStrategy>,
    ) -> Result<Self, StoreError> {
        if capacity == 0 {
            return Err(StoreError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            keys,
        })
    }

    /// Encode and store `value`, returning its new key.
    pub fn put<T: Serialize>(&mut self, value: &T) -> Result<String, StoreError> {
        let encoded = serde_json::to_value(value)?;
        Ok(self.put_value(encoded))
    }

    /// Store an already-encoded value, returning its new key.
    pub fn put_value(&mut self, value: Value) -> String {
        let key = self.keys.next_key();
        if self.entries.contains_key(&key) {
            self.order.retain(|k| k != &key);
        }
        while self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                debug!(key = %oldest, "evicted stored result");
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key.clone(), value);
        key
    }

    /// Decode the value stored under `key`; `Ok(None)` when absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        self.entries
            .get(key)
            .map(|v| T::deserialize(v).map_err(StoreError::Codec))
            .transpose()
    }

    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Replace the value under an existing key without changing its age.
    ///
    /// Returns `Ok(false)` when the key is not present.
    pub fn update<T: Serialize>(&mut self, key: &str, value: &T) -> Result<bool, StoreError> {
        match self.entries.get_mut(key) {
            Some(slot) => {
                *slot = serde_json::to_value(value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let value = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys from oldest to newest.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use clausewise_core::{DocumentType, KeyPoint, ReadabilityScore};
    use serde::Deserialize;

    use super::*;
    use crate::SequentialKeys;

    fn sequential(capacity: usize) -> ResultCache {
        ResultCache::with_key_strategy(capacity, Box::new(SequentialKeys::new("k"))).unwrap()
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(ResultCache::new(0), Err(StoreError::ZeroCapacity)));
    }

    #[test]
    fn put_then_get_typed() {
        let mut store = sequential(4);
        let kp = KeyPoint {
            category: "Refunds".into(),
            icon: "💰".into(),
            title: "Refund Policy".into(),
            detail: "Refund terms are addressed.".into(),
            watch_out: false,
            evidence: vec![],
        };
        let key = store.put(&kp).unwrap();
        assert_eq!(key, "k-1");
        let back: KeyPoint = store.get(&key).unwrap().unwrap();
        assert_eq!(back, kp);
        assert_eq!(store.get_value(&key).unwrap()["category"], "Refunds");
    }

    #[test]
    fn missing_key_is_none() {
        let store = sequential(2);
        assert!(store.get::<KeyPoint>("nope").unwrap().is_none());
    }

    #[test]
    fn evicts_least_recently_inserted() {
        let mut store = sequential(2);
        let a = store.put(&DocumentType::Travel).unwrap();
        let b = store.put(&DocumentType::Telecom).unwrap();
        // Reading does not refresh age.
        let _: Option<DocumentType> = store.get(&a).unwrap();
        let c = store.put(&DocumentType::Mortgage).unwrap();

        assert!(!store.contains(&a));
        assert!(store.contains(&b));
        assert!(store.contains(&c));
        assert_eq!(store.len(), 2);
        assert_eq!(store.keys().collect::<Vec<_>>(), vec![b.as_str(), c.as_str()]);
    }

    #[test]
    fn wrong_shape_is_codec_error() {
        let mut store = sequential(2);
        let key = store.put(&"just a string").unwrap();
        let err = store.get::<ReadabilityScore>(&key).unwrap_err();
        assert!(matches!(err, StoreError::Codec(_)));
    }

    #[test]
    fn update_keeps_position() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Note {
            text: String,
        }

        let mut store = sequential(2);
        let a = store.put(&Note { text: "first".into() }).unwrap();
        let b = store.put(&Note { text: "second".into() }).unwrap();
        assert!(store.update(&a, &Note { text: "edited".into() }).unwrap());
        assert!(!store.update("missing", &Note { text: "x".into() }).unwrap());

        let c = store.put(&Note { text: "third".into() }).unwrap();
        assert!(!store.contains(&a));
        assert!(store.contains(&b) && store.contains(&c));
    }

    #[test]
    fn remove_frees_a_slot() {
        let mut store = sequential(1);
        let a = store.put(&1u32).unwrap();
        assert!(store.remove(&a).is_some());
        assert!(store.is_empty());
        assert!(store.remove(&a).is_none());
    }

    #[test]
    fn default_strategy_issues_uuids() {
        let mut store = ResultCache::new(DEFAULT_CAPACITY).unwrap();
        let key = store.put(&true).unwrap();
        assert_eq!(key.len(), 36);
        assert_eq!(store.capacity(), 50);
    }
}
