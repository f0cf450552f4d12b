//! Red-black tree over an index arena.
//!
//! Elements are `(K, V)` pairs ordered by a [`Compare`] capability on `K`.
//! Every element is named by a [`Handle`], which stays valid until that element
//! is erased. The end of the sequence is the position `None`.

mod cursor;
mod debug;
mod insert;
mod iter;
mod merge;
mod node;
mod raw;
mod remove;

#[cfg(test)]
mod tests;

use std::{
    fmt::{self, Debug},
    mem::size_of,
};

pub use compare::{Compare, Natural};
use log::trace;

pub use cursor::{Cursor, CursorMut};
pub use debug::InvariantViolation;
pub use iter::{
    IntoIter, IntoKeys, IntoValues, Iter, IterMut, Keys, Range, Values,
    ValuesMut,
};
pub use node::Handle;

use node::{Dir, Node};
use raw::RawTree;

#[derive(Clone)]
pub struct RbTree<K, V = (), C = Natural> {
    raw: RawTree<K, V>,
    cmp: C,
}

impl<K, V> RbTree<K, V> {
    pub fn new() -> Self { Self::with_comparator(Natural) }
}

impl<K, V, C: Default> Default for RbTree<K, V, C> {
    fn default() -> Self { Self::with_comparator(C::default()) }
}

impl<K, V, C> RbTree<K, V, C> {
    pub fn with_comparator(cmp: C) -> Self { Self { raw: RawTree::new(), cmp } }
    pub fn comparator(&self) -> &C { &self.cmp }

    pub fn len(&self) -> usize { self.raw.len }
    pub fn is_empty(&self) -> bool { self.raw.len == 0 }

    /// Upper bound on the number of elements the arena can address.
    pub fn max_size(&self) -> usize {
        let per_elem = size_of::<Node>() + size_of::<Option<(K, V)>>();
        isize::MAX as usize / per_elem.max(1)
    }

    pub fn clear(&mut self) {
        trace!("clearing {} elements", self.raw.len);
        self.raw.clear();
    }

    pub fn swap(&mut self, other: &mut Self) { std::mem::swap(self, other) }

    pub fn first(&self) -> Option<Handle> { self.raw.min }
    pub fn last(&self) -> Option<Handle> { self.raw.max }

    /// The position after `pos`. From the end, this is the first element.
    pub fn successor(&self, pos: Option<Handle>) -> Option<Handle> {
        self.raw.successor(pos.filter(|&h| self.raw.is_live(h)))
    }
    /// The position before `pos`. From the end, this is the last element.
    pub fn predecessor(&self, pos: Option<Handle>) -> Option<Handle> {
        self.raw.predecessor(pos.filter(|&h| self.raw.is_live(h)))
    }

    pub fn entry(&self, h: Handle) -> Option<(&K, &V)> {
        let (k, v) = self.raw.get(h)?;
        Some((k, v))
    }
    pub fn key(&self, h: Handle) -> Option<&K> { Some(&self.raw.get(h)?.0) }
    pub fn value(&self, h: Handle) -> Option<&V> { Some(&self.raw.get(h)?.1) }
    pub fn value_mut(&mut self, h: Handle) -> Option<&mut V> {
        Some(&mut self.raw.get_mut(h)?.1)
    }

    pub fn iter(&self) -> Iter<'_, K, V> { Iter::new(&self.raw) }
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.raw)
    }
    pub fn keys(&self) -> Keys<'_, K, V> { Keys(self.iter()) }
    pub fn values(&self) -> Values<'_, K, V> { Values(self.iter()) }
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }
    pub fn into_keys(self) -> IntoKeys<K, V> { IntoKeys(self.into_iter()) }
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Elements from `from` up to, but excluding, `to`.
    ///
    /// `to` must not come before `from`.
    pub fn range_between(
        &self,
        from: Option<Handle>,
        to: Option<Handle>,
    ) -> Range<'_, K, V> {
        Range::half_open(&self.raw, from, to)
    }

    pub fn cursor(&self, pos: Option<Handle>) -> Cursor<'_, K, V> {
        Cursor::new(&self.raw, pos)
    }
    pub fn cursor_mut(&mut self, pos: Option<Handle>) -> CursorMut<'_, K, V> {
        CursorMut::new(&mut self.raw, pos)
    }
}

impl<K, V, C: Compare<K>> RbTree<K, V, C> {
    /// The first element not ordered before `key`.
    pub fn lower_bound(&self, key: &K) -> Option<Handle> {
        let mut res = None;
        let mut cur = self.raw.root;
        while let Some(h) = cur {
            if self.cmp.less(self.raw.key(h), key) {
                cur = self.raw[h][Dir::Right];
            } else {
                res = Some(h);
                cur = self.raw[h][Dir::Left];
            }
        }
        res
    }

    /// The first element ordered after `key`.
    pub fn upper_bound(&self, key: &K) -> Option<Handle> {
        let mut res = None;
        let mut cur = self.raw.root;
        while let Some(h) = cur {
            if self.cmp.less(key, self.raw.key(h)) {
                res = Some(h);
                cur = self.raw[h][Dir::Left];
            } else {
                cur = self.raw[h][Dir::Right];
            }
        }
        res
    }

    /// The leftmost element equivalent to `key`.
    pub fn find(&self, key: &K) -> Option<Handle> {
        self.lower_bound(key)
            .filter(|&h| self.cmp.equiv(self.raw.key(h), key))
    }

    pub fn contains(&self, key: &K) -> bool { self.find(key).is_some() }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|h| &self.raw.entry(h).1)
    }
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let h = self.find(key)?;
        self.value_mut(h)
    }

    /// All elements equivalent to `key`, in insertion order.
    ///
    /// ```
    /// use rb_tree::RbTree;
    ///
    /// let mut tree = RbTree::<i32, char>::new();
    /// tree.emplace_duplicate([(1, 'a'), (2, 'b'), (1, 'c'), (0, 'd')]);
    /// let ones: Vec<_> = tree.equal_range(&1).map(|(_, &v)| v).collect();
    /// assert_eq!(ones, ['a', 'c']);
    /// assert_eq!(tree.count(&1), 2);
    /// ```
    pub fn equal_range(&self, key: &K) -> Range<'_, K, V> {
        let (lo, hi) = (self.lower_bound(key), self.upper_bound(key));
        Range::half_open(&self.raw, lo, hi)
    }

    pub fn count(&self, key: &K) -> usize { self.equal_range(key).count() }
}

impl<K: Debug, V: Debug, C> Debug for RbTree<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for RbTree<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for RbTree<K, V, C> {}

impl<K, V, C: Compare<K>> Extend<(K, V)> for RbTree<K, V, C> {
    /// Unique insertion; items with a key already present are dropped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for RbTree<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut res = Self::default();
        res.extend(iter);
        res
    }
}

impl<K, V, C> IntoIterator for RbTree<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { IntoIter::new(self.raw) }
}

impl<'a, K, V, C> IntoIterator for &'a RbTree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut RbTree<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}
