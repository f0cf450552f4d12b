use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
};

use compare::{Compare, Natural};
use rb_tree::{Handle, IntoKeys, Keys, RbTree};

/// Distinct elements in ascending order.
///
/// ```
/// use ordered_set::OrderedSet;
///
/// let mut set: OrderedSet<_> = [3, 1, 4, 1, 5].into_iter().collect();
/// assert_eq!(set.len(), 4);
/// assert!(!set.insert(4).1);
/// assert!(set.iter().copied().eq([1, 3, 4, 5]));
/// ```
#[derive(Clone)]
pub struct OrderedSet<T, C = Natural> {
    tree: RbTree<T, (), C>,
}

impl<T> OrderedSet<T> {
    pub fn new() -> Self { Self { tree: RbTree::new() } }
}

impl<T, C: Default> Default for OrderedSet<T, C> {
    fn default() -> Self { Self::with_comparator(C::default()) }
}

impl<T, C> OrderedSet<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self { tree: RbTree::with_comparator(cmp) }
    }

    pub fn len(&self) -> usize { self.tree.len() }
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }
    pub fn max_size(&self) -> usize { self.tree.max_size() }

    pub fn clear(&mut self) { self.tree.clear() }
    pub fn swap(&mut self, other: &mut Self) { self.tree.swap(&mut other.tree) }

    pub fn get(&self, h: Handle) -> Option<&T> { self.tree.key(h) }
    pub fn erase(&mut self, h: Handle) -> Option<T> {
        self.tree.erase(h).map(|(x, ())| x)
    }

    pub fn first(&self) -> Option<&T> {
        self.tree.first().and_then(|h| self.get(h))
    }
    pub fn last(&self) -> Option<&T> {
        self.tree.last().and_then(|h| self.get(h))
    }

    pub fn iter(&self) -> Iter<'_, T> { Iter(self.tree.keys()) }
}

impl<T, C: Compare<T>> OrderedSet<T, C> {
    /// Inserts `x` unless an equivalent element is present; see
    /// [`RbTree::insert`].
    pub fn insert(&mut self, x: T) -> (Handle, bool) { self.tree.insert(x, ()) }

    pub fn emplace<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) -> Vec<(Handle, bool)> {
        self.tree.emplace(iter.into_iter().map(|x| (x, ())))
    }

    pub fn find(&self, x: &T) -> Option<Handle> { self.tree.find(x) }
    pub fn contains(&self, x: &T) -> bool { self.tree.contains(x) }
    pub fn remove(&mut self, x: &T) -> Option<T> {
        self.tree.remove(x).map(|(x, ())| x)
    }

    /// Moves in the elements of `other` that `self` lacks; the rest stay in
    /// `other`.
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge(&mut other.tree)
    }
}

impl<T: Debug, C> Debug for OrderedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, C> PartialEq for OrderedSet<T, C> {
    fn eq(&self, other: &Self) -> bool { self.tree == other.tree }
}

impl<T: Eq, C> Eq for OrderedSet<T, C> {}

impl<T, C: Compare<T>> Extend<T> for OrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.emplace(iter);
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for OrderedSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = Self::default();
        res.extend(iter);
        res
    }
}

pub struct Iter<'a, T>(Keys<'a, T, ()>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

pub struct IntoIter<T>(IntoKeys<T, ()>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for OrderedSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.tree.into_keys()) }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use randgen::{Gen, Values};
    use sorted_bag::SortedBag;

    use super::*;

    #[test]
    fn against_naive() {
        let mut rng = ChaCha20Rng::from_seed([7; 32]);
        let xs = Values { bound: 0..50, len: 300 }.generate(&mut rng);
        let ys = Values { bound: 0..50, len: 300 }.generate(&mut rng);

        let mut actual = OrderedSet::new();
        let mut expected = SortedBag::new();
        for &x in &xs {
            assert_eq!(actual.insert(x).1, expected.insert_unique(x));
        }
        for y in &ys {
            assert_eq!(actual.remove(y), expected.remove(y));
            assert_eq!(actual.contains(y), expected.contains(y));
        }
        assert_eq!(actual.len(), expected.len());
        assert!(actual.iter().eq(expected.iter()));
        assert_eq!(actual.first(), expected.first());
        assert_eq!(actual.last(), expected.last());
    }

    #[test]
    fn handles() {
        let mut set = OrderedSet::new();
        let res = set.emplace(["b", "a", "b", "c"]);
        assert_eq!(res.iter().map(|&(_, ok)| ok).collect::<Vec<_>>(), [
            true, true, false, true
        ]);
        assert_eq!(res[0].0, res[2].0);
        let h = set.find(&"b").unwrap();
        assert_eq!(set.get(h), Some(&"b"));
        assert_eq!(set.erase(h), Some("b"));
        assert_eq!(set.erase(h), None);
        assert_eq!(set.find(&"b"), None);
        assert_eq!(format!("{set:?}"), r#"{"a", "c"}"#);
    }

    #[test]
    fn merge() {
        let mut a: OrderedSet<_> = [1, 2, 3].into_iter().collect();
        let mut b: OrderedSet<_> = [3, 4].into_iter().collect();
        a.merge(&mut b);
        assert!(a.iter().copied().eq(1..=4));
        assert!(b.into_iter().eq([3]));

        let mut c = OrderedSet::new();
        c.swap(&mut a);
        assert!(a.is_empty());
        assert_eq!(c.len(), 4);
        let d = c.clone();
        c.clear();
        assert_eq!(d.len(), 4);
        assert_ne!(c, d);
        assert!(d.max_size() > 0);
    }

    #[test]
    fn descending() {
        let mut set =
            OrderedSet::with_comparator(compare::FnCompare(|a: &i32, b: &i32| {
                b.cmp(a)
            }));
        set.extend([2, 9, 4]);
        assert!(set.iter().copied().eq([9, 4, 2]));
        assert!(set.iter().rev().copied().eq([2, 4, 9]));
        assert_eq!((&set).into_iter().len(), 3);
    }

    #[test]
    fn iterators_resume_and_stay_done() {
        let set: OrderedSet<_> = [3, 1, 2].into_iter().collect();
        let mut it = set.iter();
        assert_eq!(it.next_back(), Some(&3));
        assert!(it.clone().eq([&1, &2]));
        assert_eq!(it.len(), 2);
        assert_eq!(it.by_ref().count(), 2);
        assert_eq!((it.next(), it.next_back()), (None, None));

        let mut owned = set.into_iter();
        assert_eq!(owned.by_ref().sum::<i32>(), 6);
        assert_eq!(owned.next(), None);
    }
}
