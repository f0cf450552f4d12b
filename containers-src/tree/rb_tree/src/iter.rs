use std::{iter::FusedIterator, marker::PhantomData};

use crate::{
    node::{self, Dir, Handle, Node},
    raw::RawTree,
};

/// Elements between two positions, both ends inclusive.
pub struct Range<'a, K, V> {
    raw: &'a RawTree<K, V>,
    front: Option<Handle>,
    back: Option<Handle>,
}

impl<'a, K, V> Range<'a, K, V> {
    pub(crate) fn new(
        raw: &'a RawTree<K, V>,
        front: Option<Handle>,
        back: Option<Handle>,
    ) -> Self {
        if front.is_none() || back.is_none() {
            return Self::empty(raw);
        }
        Self { raw, front, back }
    }

    pub(crate) fn empty(raw: &'a RawTree<K, V>) -> Self {
        Self { raw, front: None, back: None }
    }

    /// Range over the elements in `[from, to)`, where `None` is the end.
    pub(crate) fn half_open(
        raw: &'a RawTree<K, V>,
        from: Option<Handle>,
        to: Option<Handle>,
    ) -> Self {
        if from == to {
            return Self::empty(raw);
        }
        Self::new(raw, from, raw.predecessor(to))
    }
}

impl<K, V> Clone for Range<'_, K, V> {
    fn clone(&self) -> Self {
        Self { raw: self.raw, front: self.front, back: self.back }
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let h = self.front?;
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.front = self.raw.step(h, Dir::Right);
        }
        let (k, v) = self.raw.entry(h);
        Some((k, v))
    }
}

impl<'a, K, V> DoubleEndedIterator for Range<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let h = self.back?;
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.back = self.raw.step(h, Dir::Left);
        }
        let (k, v) = self.raw.entry(h);
        Some((k, v))
    }
}

impl<K, V> FusedIterator for Range<'_, K, V> {}

/// In-order iterator over `(&K, &V)`.
pub struct Iter<'a, K, V> {
    range: Range<'a, K, V>,
    len: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(raw: &'a RawTree<K, V>) -> Self {
        Self { range: Range::new(raw, raw.min, raw.max), len: raw.len }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self { range: self.range.clone(), len: self.len }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.range.next()?;
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.range.next_back()?;
        self.len -= 1;
        Some(item)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// In-order iterator over `(&K, &mut V)`.
pub struct IterMut<'a, K, V> {
    nodes: &'a [Node],
    entries: *mut Option<(K, V)>,
    front: Option<Handle>,
    back: Option<Handle>,
    len: usize,
    _marker: PhantomData<&'a mut (K, V)>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(raw: &'a mut RawTree<K, V>) -> Self {
        Self {
            nodes: &raw.nodes,
            entries: raw.entries.as_mut_ptr(),
            front: raw.min,
            back: raw.max,
            len: raw.len,
            _marker: PhantomData,
        }
    }

    fn take(&mut self, h: Handle) -> (&'a K, &'a mut V) {
        self.len -= 1;
        if self.len == 0 {
            self.front = None;
            self.back = None;
        }
        // SAFETY: `h` is a live slot of the borrowed arena, and each slot is
        // yielded at most once because `len` bounds the walk from both ends.
        let entry = unsafe { &mut *self.entries.add(h.0) };
        let (k, v) = entry.as_mut().expect("linked node has no entry");
        (k, v)
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let h = self.front?;
        self.front = node::step(self.nodes, h, Dir::Right);
        Some(self.take(h))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let h = self.back?;
        self.back = node::step(self.nodes, h, Dir::Left);
        Some(self.take(h))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning in-order iterator.
pub struct IntoIter<K, V> {
    raw: RawTree<K, V>,
    front: Option<Handle>,
    back: Option<Handle>,
    len: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(raw: RawTree<K, V>) -> Self {
        let (front, back, len) = (raw.min, raw.max, raw.len);
        Self { raw, front, back, len }
    }

    fn take(&mut self, h: Handle) -> (K, V) {
        self.len -= 1;
        if self.len == 0 {
            self.front = None;
            self.back = None;
        }
        self.raw.entries[h.0].take().expect("linked node has no entry")
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let h = self.front?;
        self.front = self.raw.step(h, Dir::Right);
        Some(self.take(h))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        let h = self.back?;
        self.back = self.raw.step(h, Dir::Left);
        Some(self.take(h))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

macro_rules! project {
    ( $(
        $name:ident[$($g:tt)*]($inner:ty) -> $item:ty,
        |$x:pat_param| $e:expr;
    )* ) => { $(
        pub struct $name<$($g)*>(pub(crate) $inner);

        impl<$($g)*> Iterator for $name<$($g)*> {
            type Item = $item;
            fn next(&mut self) -> Option<$item> { self.0.next().map(|$x| $e) }
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.0.size_hint()
            }
        }

        impl<$($g)*> DoubleEndedIterator for $name<$($g)*> {
            fn next_back(&mut self) -> Option<$item> {
                self.0.next_back().map(|$x| $e)
            }
        }

        impl<$($g)*> ExactSizeIterator for $name<$($g)*> {}
        impl<$($g)*> FusedIterator for $name<$($g)*> {}
    )* };
}

project! {
    Keys['a, K, V](Iter<'a, K, V>) -> &'a K, |(k, _)| k;
    Values['a, K, V](Iter<'a, K, V>) -> &'a V, |(_, v)| v;
    ValuesMut['a, K, V](IterMut<'a, K, V>) -> &'a mut V, |(_, v)| v;
    IntoKeys[K, V](IntoIter<K, V>) -> K, |(k, _)| k;
    IntoValues[K, V](IntoIter<K, V>) -> V, |(_, v)| v;
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}
