use std::ops::{Deref, DerefMut};

use container_error::ContainerError;

/// `N` elements stored inline.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Array<T, const N: usize>([T; N]);

impl<T, const N: usize> Array<T, N> {
    pub fn new(data: [T; N]) -> Self { Self(data) }

    /// Fills from `iter`, padding with `T::default()`. More than `N` items is
    /// an error.
    ///
    /// ```
    /// use fixed_array::Array;
    ///
    /// let a = Array::<i32, 4>::from_items([1, 2]).unwrap();
    /// assert_eq!(a.data(), &[1, 2, 0, 0]);
    /// assert!(Array::<i32, 1>::from_items([1, 2]).is_err());
    /// ```
    pub fn from_items<I>(iter: I) -> Result<Self, ContainerError>
    where
        T: Default,
        I: IntoIterator<Item = T>,
    {
        let mut res = Self(std::array::from_fn(|_| T::default()));
        let mut count = 0;
        for x in iter {
            if count == N {
                let (requested, max) = (N + 1, N);
                return Err(ContainerError::CapacityOverflow { requested, max });
            }
            res.0[count] = x;
            count += 1;
        }
        Ok(res)
    }

    pub fn len(&self) -> usize { N }
    pub fn is_empty(&self) -> bool { N == 0 }
    pub fn max_size(&self) -> usize { N }

    pub fn at(&self, i: usize) -> Result<&T, ContainerError> {
        ContainerError::check_index(i, N)?;
        Ok(&self.0[i])
    }
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, ContainerError> {
        ContainerError::check_index(i, N)?;
        Ok(&mut self.0[i])
    }

    pub fn front(&self) -> Result<&T, ContainerError> {
        self.0.first().ok_or(ContainerError::Empty("front"))
    }
    pub fn back(&self) -> Result<&T, ContainerError> {
        self.0.last().ok_or(ContainerError::Empty("back"))
    }

    pub fn data(&self) -> &[T; N] { &self.0 }
    pub fn data_mut(&mut self) -> &mut [T; N] { &mut self.0 }
    pub fn into_inner(self) -> [T; N] { self.0 }

    pub fn fill(&mut self, x: T)
    where
        T: Clone,
    {
        self.0.fill(x)
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.0, &mut other.0)
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self { Self(std::array::from_fn(|_| T::default())) }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(data: [T; N]) -> Self { Self(data) }
}

impl<T, const N: usize> Deref for Array<T, N> {
    type Target = [T];
    fn deref(&self) -> &[T] { &self.0 }
}

impl<T, const N: usize> DerefMut for Array<T, N> {
    fn deref_mut(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter_mut() }
}

#[test]
fn sanity_check() {
    let mut a = Array::new([3, 1, 2]);
    assert_eq!((a.len(), a.max_size()), (3, 3));
    assert_eq!(a.at(1), Ok(&1));
    assert_eq!(
        a.at(3),
        Err(ContainerError::IndexOutOfRange { index: 3, len: 3 })
    );
    *a.at_mut(0).unwrap() = 4;
    assert_eq!((a.front(), a.back()), (Ok(&4), Ok(&2)));
    a.sort();
    assert_eq!(a.data(), &[1, 2, 4]);

    let mut b = Array::from([0; 3]);
    a.swap(&mut b);
    assert_eq!(b.into_inner(), [1, 2, 4]);
    a.fill(7);
    assert!(a.iter().all(|&x| x == 7));
    for x in &mut a {
        *x += 1;
    }
    assert_eq!(a.into_iter().sum::<i32>(), 24);
}

#[test]
fn zero_length() {
    let e = Array::<String, 0>::default();
    assert!(e.is_empty());
    assert_eq!(e.front(), Err(ContainerError::Empty("front")));
    assert_eq!(e.back(), Err(ContainerError::Empty("back")));
    assert!(Array::<String, 0>::from_items([]).is_ok());
    assert_eq!(
        Array::<String, 0>::from_items([String::new()]),
        Err(ContainerError::CapacityOverflow { requested: 1, max: 0 })
    );
}
