//! Hash map with a fail-fast getter.
//!
//! Lookups the algorithm guarantees to succeed go through [`StrictMap::get_strict`], which turns a
//! miss into [`Error::InvariantViolation`]. Counters that legitimately start out absent use
//! [`StrictMap::get_or`] instead.

use crate::error::{Error, Result};
use rustc_hash::FxHashMap as HashMap;
use std::fmt::Display;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct StrictMap<K, V> {
    what: &'static str,
    entries: HashMap<K, V>,
}

impl<K, V> StrictMap<K, V>
where
    K: Eq + Hash + Copy + Display,
    V: Copy,
{
    /// `what` names the stored quantity in invariant messages, e.g. `"priority"`.
    pub fn new(what: &'static str) -> Self {
        Self {
            what,
            entries: HashMap::default(),
        }
    }

    pub fn with_capacity(what: &'static str, capacity: usize) -> Self {
        let mut entries = HashMap::default();
        entries.reserve(capacity);
        Self { what, entries }
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn get_strict(&self, key: K) -> Result<V> {
        self.entries
            .get(&key)
            .copied()
            .ok_or_else(|| Error::missing(self.what, key))
    }

    pub fn get_or(&self, key: K, default: V) -> V {
        self.entries.get(&key).copied().unwrap_or(default)
    }

    /// Mutable access for in-place updates of an entry that must already exist.
    pub fn get_strict_mut(&mut self, key: K) -> Result<&mut V> {
        let what = self.what;
        self.entries
            .get_mut(&key)
            .ok_or_else(|| Error::missing(what, key))
    }

    pub fn contains_key(&self, key: K) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = V> + '_ {
        self.entries.values().copied()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.values_mut()
    }
}
