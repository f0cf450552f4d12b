//! Key-value map over [`RbTree`], ordered and looked up by key alone.

mod entry;

use std::{
    fmt::{self, Debug},
    ops::Index,
};

use compare::{Compare, Natural};
use container_error::ContainerError;
use rb_tree::{
    Handle, IntoIter, Iter, IterMut, Keys, RbTree, Values, ValuesMut,
};

pub use entry::{Entry, OccupiedEntry, VacantEntry};

#[derive(Clone)]
pub struct OrderedMap<K, V, C = Natural> {
    tree: RbTree<K, V, C>,
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self { Self { tree: RbTree::new() } }
}

impl<K, V, C: Default> Default for OrderedMap<K, V, C> {
    fn default() -> Self { Self::with_comparator(C::default()) }
}

impl<K, V, C> OrderedMap<K, V, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self { tree: RbTree::with_comparator(cmp) }
    }

    pub fn len(&self) -> usize { self.tree.len() }
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }
    pub fn max_size(&self) -> usize { self.tree.max_size() }

    pub fn clear(&mut self) { self.tree.clear() }
    pub fn swap(&mut self, other: &mut Self) { self.tree.swap(&mut other.tree) }

    /// The entry at `h`, if `h` names a live element.
    pub fn key_value(&self, h: Handle) -> Option<(&K, &V)> {
        self.tree.entry(h)
    }
    pub fn erase(&mut self, h: Handle) -> Option<(K, V)> { self.tree.erase(h) }

    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.tree.entry(self.tree.first()?)
    }
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.tree.entry(self.tree.last()?)
    }

    pub fn iter(&self) -> Iter<'_, K, V> { self.tree.iter() }
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> { self.tree.iter_mut() }
    pub fn keys(&self) -> Keys<'_, K, V> { self.tree.keys() }
    pub fn values(&self) -> Values<'_, K, V> { self.tree.values() }
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        self.tree.values_mut()
    }
}

impl<K, V, C: Compare<K>> OrderedMap<K, V, C> {
    pub fn get(&self, key: &K) -> Option<&V> { self.tree.get(key) }
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key)
    }

    /// Bounds-checked lookup.
    ///
    /// ```
    /// use container_error::ContainerError;
    /// use ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("one", 1);
    /// assert_eq!(map.at(&"one"), Ok(&1));
    /// assert_eq!(map.at(&"two"), Err(ContainerError::KeyNotFound));
    /// ```
    pub fn at(&self, key: &K) -> Result<&V, ContainerError> {
        self.get(key).ok_or(ContainerError::KeyNotFound)
    }
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, ContainerError> {
        self.get_mut(key).ok_or(ContainerError::KeyNotFound)
    }

    /// The value for `key`, inserting `V::default()` first if it is absent.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_default()
    }

    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, C> {
        Entry::new(key, &mut self.tree)
    }

    /// Inserts unless `key` is present, in which case nothing changes.
    pub fn insert(&mut self, key: K, value: V) -> (Handle, bool) {
        self.tree.insert(key, value)
    }

    /// Inserts, or overwrites the value of an existing `key`. The flag is
    /// `true` when a new element was created.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> (Handle, bool) {
        match self.tree.find(&key) {
            Some(h) => {
                let slot = self.tree.value_mut(h).expect("found key is live");
                *slot = value;
                (h, false)
            }
            None => self.tree.insert(key, value),
        }
    }

    pub fn emplace<I: IntoIterator<Item = (K, V)>>(
        &mut self,
        iter: I,
    ) -> Vec<(Handle, bool)> {
        self.tree.emplace(iter)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.remove(key).map(|(_, v)| v)
    }
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.tree.remove(key)
    }

    pub fn contains(&self, key: &K) -> bool { self.tree.contains(key) }
    pub fn find(&self, key: &K) -> Option<Handle> { self.tree.find(key) }
    pub fn lower_bound(&self, key: &K) -> Option<Handle> {
        self.tree.lower_bound(key)
    }
    pub fn upper_bound(&self, key: &K) -> Option<Handle> {
        self.tree.upper_bound(key)
    }

    /// Moves in the entries of `other` whose keys `self` lacks; the rest stay
    /// in `other`.
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge(&mut other.tree)
    }
}

impl<K, V, C: Compare<K>> Index<&K> for OrderedMap<K, V, C> {
    type Output = V;
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("key not found")
    }
}

impl<K: Debug, V: Debug, C> Debug for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tree.fmt(f)
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for OrderedMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool { self.tree == other.tree }
}

impl<K: Eq, V: Eq, C> Eq for OrderedMap<K, V, C> {}

impl<K, V, C: Compare<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    /// Keeps the first value seen for each key.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.tree.extend(iter)
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)>
    for OrderedMap<K, V, C>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut res = Self::default();
        res.extend(iter);
        res
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self { arr.into_iter().collect() }
}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { self.tree.into_iter() }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut OrderedMap<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}
