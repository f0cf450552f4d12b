use std::fmt::{self, Debug};

use container_error::ContainerError;
use linked_list::List;

/// First in, first out over a [`List`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Queue<T>(List<T>);

impl<T> Queue<T> {
    pub fn new() -> Self { Self(List::new()) }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn front(&self) -> Result<&T, ContainerError> { self.0.front() }
    pub fn back(&self) -> Result<&T, ContainerError> { self.0.back() }
    pub fn front_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.0.front_mut()
    }
    pub fn back_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.0.back_mut()
    }

    pub fn push(&mut self, x: T) { self.0.push_back(x) }
    pub fn pop(&mut self) -> Option<T> { self.0.pop_front() }

    pub fn emplace_back<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.emplace_back(iter)
    }

    pub fn swap(&mut self, other: &mut Self) { self.0.swap(&mut other.0) }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.emplace_back(iter)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[test]
fn sanity_check() {
    let mut qu = Queue::new();
    assert_eq!(qu.front(), Err(ContainerError::Empty("front")));
    assert_eq!(qu.back(), Err(ContainerError::Empty("back")));
    qu.push(1);
    qu.emplace_back([2, 3]);
    assert_eq!((qu.front(), qu.back()), (Ok(&1), Ok(&3)));
    *qu.back_mut().unwrap() += 10;
    *qu.front_mut().unwrap() += 10;
    assert_eq!(format!("{qu:?}"), "[11, 2, 13]");
    assert_eq!(qu.pop(), Some(11));

    let mut other: Queue<_> = [7].into_iter().collect();
    qu.swap(&mut other);
    assert_eq!(qu.len(), 1);
    assert_eq!(other.clone(), other);
    assert!(std::iter::from_fn(|| other.pop()).eq([2, 13]));
    assert!(other.is_empty());
}
