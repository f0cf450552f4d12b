/// A multiset kept as a sorted `Vec`; every operation is a linear scan or a
/// binary search.
#[derive(Clone, Debug, Default)]
pub struct SortedBag<T>(Vec<T>);

impl<T: Ord> SortedBag<T> {
    pub fn new() -> Self { Self(vec![]) }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn len(&self) -> usize { self.0.len() }

    /// Inserts after every equal element.
    pub fn insert(&mut self, x: T) {
        let i = self.0.partition_point(|y| y <= &x);
        self.0.insert(i, x);
    }

    /// Inserts only if no equal element is present.
    pub fn insert_unique(&mut self, x: T) -> bool {
        if self.contains(&x) {
            return false;
        }
        self.insert(x);
        true
    }

    /// Removes the first element equal to `x`.
    pub fn remove(&mut self, x: &T) -> Option<T> {
        let i = self.0.partition_point(|y| y < x);
        (self.0.get(i) == Some(x)).then(|| self.0.remove(i))
    }

    pub fn contains(&self, x: &T) -> bool { self.count(x) > 0 }

    pub fn count(&self, x: &T) -> usize {
        self.0.iter().filter(|&y| y == x).count()
    }

    /// Index of the first element not less than `x`.
    pub fn lower_bound(&self, x: &T) -> usize {
        self.0.partition_point(|y| y < x)
    }
    /// Index of the first element greater than `x`.
    pub fn upper_bound(&self, x: &T) -> usize {
        self.0.partition_point(|y| y <= x)
    }

    pub fn get(&self, i: usize) -> Option<&T> { self.0.get(i) }
    pub fn first(&self) -> Option<&T> { self.0.first() }
    pub fn last(&self) -> Option<&T> { self.0.last() }

    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }
    pub fn into_vec(self) -> Vec<T> { self.0 }
}

impl<T: Ord> FromIterator<T> for SortedBag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res: Vec<_> = iter.into_iter().collect();
        res.sort();
        Self(res)
    }
}

#[test]
fn sanity_check() {
    let mut bag: SortedBag<_> = [3, 1, 2, 1].into_iter().collect();
    assert_eq!(bag.iter().copied().collect::<Vec<_>>(), [1, 1, 2, 3]);
    assert_eq!(bag.count(&1), 2);
    assert!(!bag.insert_unique(2));
    assert!(bag.insert_unique(5));
    assert_eq!(bag.remove(&1), Some(1));
    assert_eq!(bag.remove(&4), None);
    assert_eq!((bag.lower_bound(&2), bag.upper_bound(&2)), (1, 2));
    assert!(!bag.is_empty());
    assert_eq!(bag.into_vec(), [1, 2, 3, 5]);
    assert!(SortedBag::<i32>::new().is_empty());
}
