use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
};

use compare::{Compare, Natural};
use rb_tree::{Handle, IntoKeys, Keys, Range, RbTree};

/// Elements in ascending order, equivalent ones kept in insertion order.
#[derive(Clone)]
pub struct OrderedMultiset<T, C = Natural> {
    tree: RbTree<T, (), C>,
}

impl<T> OrderedMultiset<T> {
    pub fn new() -> Self { Self { tree: RbTree::new() } }
}

impl<T, C: Default> Default for OrderedMultiset<T, C> {
    fn default() -> Self { Self::with_comparator(C::default()) }
}

impl<T, C> OrderedMultiset<T, C> {
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

impl<T, C: Compare<T>> OrderedMultiset<T, C> {
    /// Inserts `x` after every element equivalent to it.
    pub fn insert(&mut self, x: T) -> Handle {
        self.tree.insert_duplicate(x, ())
    }

    pub fn emplace<I>(&mut self, iter: I) -> Vec<Handle>
    where
        I: IntoIterator<Item = T>,
    {
        self.tree.emplace_duplicate(iter.into_iter().map(|x| (x, ())))
    }

    pub fn find(&self, x: &T) -> Option<Handle> { self.tree.find(x) }
    pub fn contains(&self, x: &T) -> bool { self.tree.contains(x) }
    pub fn count(&self, x: &T) -> usize { self.tree.count(x) }

    /// Removes one element equivalent to `x`, the earliest inserted.
    pub fn remove(&mut self, x: &T) -> Option<T> {
        self.tree.remove(x).map(|(x, ())| x)
    }

    /// Removes every element equivalent to `x`, returning how many there were.
    pub fn remove_all(&mut self, x: &T) -> usize {
        let mut res = 0;
        while self.remove(x).is_some() {
            res += 1;
        }
        res
    }

    pub fn lower_bound(&self, x: &T) -> Option<Handle> {
        self.tree.lower_bound(x)
    }
    pub fn upper_bound(&self, x: &T) -> Option<Handle> {
        self.tree.upper_bound(x)
    }

    /// ```
    /// use ordered_multiset::OrderedMultiset;
    ///
    /// let ms: OrderedMultiset<_> = [1, 1, 2, 2, 3].into_iter().collect();
    /// assert_eq!(ms.count(&1), 2);
    /// assert!(ms.equal_range(&2).eq([&2, &2]));
    /// ```
    pub fn equal_range(&self, x: &T) -> EqualRange<'_, T> {
        EqualRange(self.tree.equal_range(x))
    }

    /// Moves every element of `other` into `self`, leaving `other` empty.
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge_duplicates(&mut other.tree)
    }
}

impl<T: Debug, C> Debug for OrderedMultiset<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, C> PartialEq for OrderedMultiset<T, C> {
    fn eq(&self, other: &Self) -> bool { self.tree == other.tree }
}

impl<T: Eq, C> Eq for OrderedMultiset<T, C> {}

impl<T, C: Compare<T>> Extend<T> for OrderedMultiset<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.emplace(iter);
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for OrderedMultiset<T, C> {
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

/// The elements equivalent to one key.
pub struct EqualRange<'a, T>(Range<'a, T, ()>);

impl<'a, T> Iterator for EqualRange<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next().map(|(x, _)| x) }
}

impl<T> DoubleEndedIterator for EqualRange<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(x, _)| x)
    }
}

impl<T> FusedIterator for EqualRange<'_, T> {}

impl<T> Clone for EqualRange<'_, T> {
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

impl<'a, T, C> IntoIterator for &'a OrderedMultiset<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for OrderedMultiset<T, C> {
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
        let mut rng = ChaCha20Rng::from_seed([11; 32]);
        let xs = Values { bound: 0..20, len: 500 }.generate(&mut rng);
        let ys = Values { bound: 0..20, len: 200 }.generate(&mut rng);

        let mut actual = OrderedMultiset::new();
        let mut expected = SortedBag::new();
        for &x in &xs {
            actual.insert(x);
            expected.insert(x);
        }
        for y in &ys {
            assert_eq!(actual.remove(y), expected.remove(y));
        }
        assert_eq!(actual.len(), expected.len());
        assert!(actual.iter().eq(expected.iter()));
        for k in -1..=20 {
            assert_eq!(actual.count(&k), expected.count(&k));
            assert_eq!(actual.equal_range(&k).count(), expected.count(&k));
            let lb = actual.lower_bound(&k).and_then(|h| actual.get(h));
            assert_eq!(lb, expected.get(expected.lower_bound(&k)));
            let ub = actual.upper_bound(&k).and_then(|h| actual.get(h));
            assert_eq!(ub, expected.get(expected.upper_bound(&k)));
        }
    }

    #[test]
    fn merge_takes_everything() {
        let mut a: OrderedMultiset<_> = [1, 2, 2].into_iter().collect();
        let mut b: OrderedMultiset<_> = [2, 3, 1].into_iter().collect();
        a.merge(&mut b);
        assert!(b.is_empty());
        assert_eq!(format!("{a:?}"), "[1, 1, 2, 2, 2, 3]");
        assert_eq!(a.remove_all(&2), 3);
        assert!(a.into_iter().eq([1, 1, 3]));
    }

    #[test]
    fn stable_duplicates() {
        let by_first = compare::FnCompare(|a: &(i32, char), b: &(i32, char)| {
            a.0.cmp(&b.0)
        });
        let mut ms = OrderedMultiset::with_comparator(by_first);
        let hs = ms.emplace([(1, 'a'), (0, 'b'), (1, 'c'), (1, 'd')]);
        let ones: Vec<_> = ms.equal_range(&(1, '?')).map(|p| p.1).collect();
        assert_eq!(ones, ['a', 'c', 'd']);
        assert_eq!(ms.find(&(1, '?')), Some(hs[0]));
        assert_eq!(ms.erase(hs[2]), Some((1, 'c')));
        assert_eq!(ms.first(), Some(&(0, 'b')));
        assert_eq!(ms.last(), Some(&(1, 'd')));
        assert!(ms.contains(&(0, 'z')));
    }

    #[test]
    fn iterators_resume_and_stay_done() {
        let ms: OrderedMultiset<_> = [2, 1, 2, 3].into_iter().collect();
        let mut it = ms.iter();
        assert_eq!(it.next(), Some(&1));
        let rest = it.clone();
        assert!(rest.eq([&2, &2, &3]));
        assert_eq!(it.by_ref().count(), 3);
        assert_eq!(it.next(), None);

        let mut twos = ms.equal_range(&2);
        assert!(twos.clone().eq([&2, &2]));
        assert_eq!((twos.next(), twos.next_back()), (Some(&2), Some(&2)));
        assert_eq!((twos.next(), twos.next()), (None, None));

        let mut owned = ms.into_iter();
        assert_eq!(owned.next_back(), Some(3));
        assert_eq!(owned.by_ref().count(), 3);
        assert_eq!(owned.next(), None);
    }
}
