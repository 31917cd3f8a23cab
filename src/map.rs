use core::cmp::Ordering;

use crate::RbTree;

/// An ordered map based on an arena-backed [red-black tree].
///
/// [red-black tree]: RbTree
pub struct RbMap<K: Ord, V> {
    tree: RbTree<MapEntry<K, V>>,
}

struct MapEntry<K, V> {
    key: K,
    value: V,
}

// Entries order (and compare equal) by key alone, so they inherit the tree's
// duplicate handling: inserting an existing key keeps both entries, and
// lookups return the earliest-inserted one.
impl<K: Ord, V> PartialEq for MapEntry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord, V> Eq for MapEntry<K, V> {}

impl<K: Ord, V> PartialOrd for MapEntry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for MapEntry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: Ord, V> RbMap<K, V> {
    /// Creates a new, empty `RbMap`.
    pub const fn new() -> Self {
        Self {
            tree: RbTree::new(),
        }
    }

    /// Returns `true` if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Inserts a key-value pair into the map.
    pub fn insert(&mut self, key: K, value: V) {
        self.tree.insert(MapEntry { key, value });
    }

    /// Returns `true` if the map contains a value associated with `key`.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns a reference to the value associated with `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree
            .get_by(|entry| key.cmp(&entry.key))
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with `key`.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree
            .get_by_mut(|entry| key.cmp(&entry.key))
            .map(|entry| &mut entry.value)
    }

    /// Returns the first key-value pair in the map.
    ///
    /// The returned key is the minimum key in the map.
    #[inline]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.tree.first().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the last key-value pair in the map.
    ///
    /// The returned key is the maximum key in the map.
    #[inline]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.tree.last().map(|entry| (&entry.key, &entry.value))
    }

    /// Clears the map, removing all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.tree.clear();
    }
}

impl<K: Ord, V> Default for RbMap<K, V> {
    fn default() -> Self {
        RbMap::new()
    }
}
