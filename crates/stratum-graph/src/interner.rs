//! Insertion-ordered key interner.

use rustc_hash::FxBuildHasher;
use std::borrow::Borrow;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Maps caller keys to dense indices `0..len` in first-insertion order.
///
/// This is the only hashed structure the layout pipeline needs: once a key is interned,
/// everything downstream works on the dense index.
#[derive(Debug, Clone)]
pub struct Interner<K> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
}

impl<K> Default for Interner<K> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::default(),
        }
    }
}

impl<K> Interner<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Returns the index of `key`, inserting it if new. The flag is `true` on first insertion.
    pub fn intern(&mut self, key: K) -> (usize, bool) {
        if let Some(&ix) = self.index.get(&key) {
            return (ix, false);
        }
        let ix = self.keys.len();
        self.keys.push(key.clone());
        self.index.insert(key, ix);
        (ix, true)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn key(&self, ix: usize) -> Option<&K> {
        self.keys.get(ix)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}
