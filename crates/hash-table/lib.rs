//! A hash table using separate chaining.
//!
//! Each bucket is a doubly-linked list of entries. The table doubles its
//! bucket count whenever an insertion would push the load factor past the
//! configured maximum.

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;

use doubly_linked_list::DoublyLinkedList;
use log::debug;

mod config;

pub use config::{HashTableConfig, HashTableError};

type Bucket<K, V> = DoublyLinkedList<(K, V)>;

pub struct HashTable<K, V, S = RandomState> {
    buckets: Vec<Bucket<K, V>>,
    len: usize,
    config: HashTableConfig,
    hasher: S,
}

impl<K, V> HashTable<K, V, RandomState> {
    /// Creates an empty table with the default configuration.
    pub fn new() -> Self {
        let config = HashTableConfig::default();
        HashTable {
            buckets: empty_buckets(config.initial_capacity),
            len: 0,
            config,
            hasher: RandomState::new(),
        }
    }

    pub fn with_config(config: HashTableConfig) -> Result<Self, HashTableError> {
        Self::with_config_and_hasher(config, RandomState::new())
    }
}

impl<K, V, S> HashTable<K, V, S> {
    pub fn with_config_and_hasher(
        config: HashTableConfig,
        hasher: S,
    ) -> Result<Self, HashTableError> {
        config.validate()?;
        Ok(HashTable {
            buckets: empty_buckets(config.initial_capacity),
            len: 0,
            config,
            hasher,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    pub fn config(&self) -> &HashTableConfig {
        &self.config
    }

    /// Removes every entry, keeping the buckets.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter())
            .map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        if let Some((_, slot)) = self.buckets[index]
            .iter_mut()
            .find(|(existing, _)| *existing == key)
        {
            return Some(mem::replace(slot, value));
        }

        let mut wanted = self.buckets.len();
        while (self.len + 1) as f64 > wanted as f64 * self.config.max_load_factor {
            wanted *= 2;
        }
        if wanted > self.buckets.len() {
            self.grow(wanted);
        }
        let index = self.bucket_index(&key);
        self.buckets[index].push_back((key, value));
        self.len += 1;
        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(existing, _)| Q::eq(existing.borrow(), key))
            .map(|(_, value)| value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(existing, _)| Q::eq(existing.borrow(), key))
            .map(|(_, value)| value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let mut cursor = self.buckets[index].cursor_front_mut();
        while let Some((existing, _)) = cursor.current() {
            if Q::eq((*existing).borrow(), key) {
                let (_, value) = cursor.remove_current()?;
                self.len -= 1;
                return Some(value);
            }
            cursor.move_next();
        }
        None
    }

    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Rehashes every entry into `new_count` buckets.
    fn grow(&mut self, new_count: usize) {
        debug!(
            "hash table: growing from {} to {} buckets at {} entries",
            self.buckets.len(),
            new_count,
            self.len
        );

        let old = mem::replace(&mut self.buckets, empty_buckets(new_count));
        for mut bucket in old {
            while let Some((key, value)) = bucket.pop_front() {
                let index = self.bucket_index(&key);
                self.buckets[index].push_back((key, value));
            }
        }
    }
}

fn empty_buckets<K, V>(count: usize) -> Vec<Bucket<K, V>> {
    let mut buckets = Vec::with_capacity(count);
    buckets.resize_with(count, DoublyLinkedList::new);
    buckets
}

impl<K, V> Default for HashTable<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Extend<(K, V)> for HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for HashTable<K, V, RandomState> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = HashTable::new();
        table.extend(iter);
        table
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_land_in_their_hashed_bucket() {
        let table: HashTable<u32, u32> = (0..100).map(|i| (i, i * i)).collect();
        for (index, bucket) in table.buckets.iter().enumerate() {
            for (key, _) in bucket {
                assert_eq!(table.bucket_index(key), index);
            }
        }
    }

    #[test]
    fn growth_keeps_load_under_the_maximum() {
        let mut table = HashTable::new();
        for i in 0..1000 {
            table.insert(i, ());
            assert!(table.load_factor() <= table.config.max_load_factor);
        }
        assert!(table.capacity().is_power_of_two());
    }
}
