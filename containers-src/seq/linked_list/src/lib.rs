use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    marker::PhantomData,
    ptr::NonNull,
};

use container_error::ContainerError;
use log::trace;

struct Node<T> {
    val: T,
    prev: Link<T>,
    next: Link<T>,
}

type Link<T> = Option<NonNull<Node<T>>>;

impl<T> Node<T> {
    fn new(val: T) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { val, prev: None, next: None })))
    }
}

/// A doubly linked list.
pub struct List<T> {
    first: Link<T>,
    last: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self { first: None, last: None, len: 0, _marker: PhantomData }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn front(&self) -> Result<&T, ContainerError> {
        let node = self.first.ok_or(ContainerError::Empty("front"))?;
        Ok(unsafe { &(*node.as_ptr()).val })
    }
    pub fn back(&self) -> Result<&T, ContainerError> {
        let node = self.last.ok_or(ContainerError::Empty("back"))?;
        Ok(unsafe { &(*node.as_ptr()).val })
    }
    pub fn front_mut(&mut self) -> Result<&mut T, ContainerError> {
        let node = self.first.ok_or(ContainerError::Empty("front"))?;
        Ok(unsafe { &mut (*node.as_ptr()).val })
    }
    pub fn back_mut(&mut self) -> Result<&mut T, ContainerError> {
        let node = self.last.ok_or(ContainerError::Empty("back"))?;
        Ok(unsafe { &mut (*node.as_ptr()).val })
    }

    /// Links the chain `first..=last` of `count` detached nodes before `at`
    /// (`None` is the end).
    unsafe fn link_before(
        &mut self,
        first: NonNull<Node<T>>,
        last: NonNull<Node<T>>,
        count: usize,
        at: Link<T>,
    ) {
        let prev = match at {
            Some(a) => (*a.as_ptr()).prev,
            None => self.last,
        };
        (*first.as_ptr()).prev = prev;
        (*last.as_ptr()).next = at;
        match prev {
            Some(p) => (*p.as_ptr()).next = Some(first),
            None => self.first = Some(first),
        }
        match at {
            Some(a) => (*a.as_ptr()).prev = Some(last),
            None => self.last = Some(last),
        }
        self.len += count;
    }

    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        let Node { val, prev, next } = *Box::from_raw(node.as_ptr());
        match prev {
            Some(p) => (*p.as_ptr()).next = next,
            None => self.first = next,
        }
        match next {
            Some(n) => (*n.as_ptr()).prev = prev,
            None => self.last = prev,
        }
        self.len -= 1;
        val
    }

    fn insert_before(&mut self, x: T, at: Link<T>) {
        let node = Node::new(x);
        unsafe { self.link_before(node, node, 1, at) }
    }

    /// Moves every node of `other` before `at`, leaving `other` empty.
    fn splice(&mut self, other: &mut Self, at: Link<T>) {
        if let (Some(first), Some(last)) = (other.first, other.last) {
            let count = std::mem::take(&mut other.len);
            other.first = None;
            other.last = None;
            unsafe { self.link_before(first, last, count, at) }
        }
    }

    pub fn push_front(&mut self, x: T) { self.insert_before(x, self.first) }
    pub fn push_back(&mut self, x: T) { self.insert_before(x, None) }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.first?;
        Some(unsafe { self.unlink(node) })
    }
    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.last?;
        Some(unsafe { self.unlink(node) })
    }

    /// Inserts the items, in order, before the current first element.
    pub fn emplace_front<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let at = self.first;
        for x in iter {
            self.insert_before(x, at);
        }
    }
    pub fn emplace_back<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push_back(x);
        }
    }

    pub fn clear(&mut self) { while self.pop_front().is_some() {} }

    pub fn swap(&mut self, other: &mut Self) { std::mem::swap(self, other) }

    /// Moves every element of `other` to the end of `self`.
    pub fn append(&mut self, other: &mut Self) { self.splice(other, None) }

    pub fn reverse(&mut self) {
        let mut cur = self.first;
        while let Some(node) = cur {
            let node = unsafe { &mut *node.as_ptr() };
            std::mem::swap(&mut node.prev, &mut node.next);
            cur = node.prev;
        }
        std::mem::swap(&mut self.first, &mut self.last);
    }

    /// Drops every element equal to its predecessor.
    pub fn unique(&mut self)
    where
        T: PartialEq,
    {
        let Some(mut prev) = self.first else { return };
        while let Some(cur) = unsafe { (*prev.as_ptr()).next } {
            if unsafe { (*cur.as_ptr()).val == (*prev.as_ptr()).val } {
                unsafe { self.unlink(cur) };
            } else {
                prev = cur;
            }
        }
    }

    /// Merges the sorted `other` into the sorted `self`; `other` ends up empty.
    /// Among equal elements, those of `self` come first.
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        let mut cur = self.first;
        while let Some(node) = other.first {
            unsafe {
                other.first = (*node.as_ptr()).next;
                match other.first {
                    Some(n) => (*n.as_ptr()).prev = None,
                    None => other.last = None,
                }
                other.len -= 1;

                while let Some(c) = cur {
                    if (*c.as_ptr()).val > (*node.as_ptr()).val {
                        break;
                    }
                    cur = (*c.as_ptr()).next;
                }
                self.link_before(node, node, 1, cur);
            }
        }
    }

    /// Quicksort over the nodes, exchanging values between them.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        trace!("sorting a list of {} elements", self.len);
        if let Some(first) = self.first {
            unsafe { quicksort(first, self.len) }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.first,
            back: self.last,
            len: self.len,
            _marker: PhantomData,
        }
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            front: self.first,
            back: self.last,
            len: self.len,
            _marker: PhantomData,
        }
    }

    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut { cur: self.first, list: self }
    }
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut { cur: self.last, list: self }
    }
}

unsafe fn advance<T>(mut node: NonNull<Node<T>>, n: usize) -> NonNull<Node<T>> {
    for _ in 0..n {
        node = (*node.as_ptr()).next.expect("list is shorter than expected");
    }
    node
}

unsafe fn val<'a, T>(node: NonNull<Node<T>>) -> &'a T { &(*node.as_ptr()).val }

unsafe fn swap_vals<T>(a: NonNull<Node<T>>, b: NonNull<Node<T>>) {
    if a != b {
        std::mem::swap(&mut (*a.as_ptr()).val, &mut (*b.as_ptr()).val);
    }
}

/// Sorts the `len` values starting at `lo`. The middle value is the pivot;
/// the partition stops on equal values so runs of duplicates split evenly.
unsafe fn quicksort<T: Ord>(mut lo: NonNull<Node<T>>, mut len: usize) {
    while len > 1 {
        let hi = advance(lo, len - 1);
        swap_vals(lo, advance(lo, len / 2));
        let (mut i, mut ip) = (0, lo);
        let (mut j, mut jp) = (len, hi);
        loop {
            loop {
                i += 1;
                ip = advance(ip, 1);
                if val(ip) >= val(lo) || i == len - 1 {
                    break;
                }
            }
            loop {
                j -= 1;
                if j < len - 1 {
                    jp = (*jp.as_ptr()).prev.expect("partition ran off");
                }
                if val(lo) >= val(jp) || j == 0 {
                    break;
                }
            }
            if i >= j {
                break;
            }
            swap_vals(ip, jp);
        }
        swap_vals(lo, jp);

        // pivot now at index j; recurse into the shorter side
        let (left, right) = (j, len - j - 1);
        let rest = (*jp.as_ptr()).next;
        match rest {
            Some(r) if left >= right => {
                quicksort(r, right);
                len = left;
            }
            Some(r) => {
                quicksort(lo, left);
                lo = r;
                len = right;
            }
            None => len = left,
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) { self.clear() }
}

impl<T> Default for List<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self { self.iter().cloned().collect() }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.emplace_back(iter)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(arr: [T; N]) -> Self { arr.into_iter().collect() }
}

/// A position in a [`List`], or the end ("ghost") position between the last
/// and the first element.
pub struct CursorMut<'a, T> {
    cur: Link<T>,
    list: &'a mut List<T>,
}

impl<T> CursorMut<'_, T> {
    pub fn is_end(&self) -> bool { self.cur.is_none() }

    pub fn current(&mut self) -> Option<&mut T> {
        self.cur.map(|node| unsafe { &mut (*node.as_ptr()).val })
    }

    pub fn move_next(&mut self) {
        self.cur = match self.cur {
            Some(node) => unsafe { (*node.as_ptr()).next },
            None => self.list.first,
        };
    }
    pub fn move_prev(&mut self) {
        self.cur = match self.cur {
            Some(node) => unsafe { (*node.as_ptr()).prev },
            None => self.list.last,
        };
    }

    /// Inserts `x` before the current position; at the end this appends.
    pub fn insert_before(&mut self, x: T) {
        self.list.insert_before(x, self.cur)
    }

    /// Removes the current element and moves to the one after it.
    pub fn remove_current(&mut self) -> Option<T> {
        let node = self.cur?;
        unsafe {
            self.cur = (*node.as_ptr()).next;
            Some(self.list.unlink(node))
        }
    }

    /// Moves every element of `other` before the current position.
    pub fn splice_before(&mut self, other: &mut List<T>) {
        self.list.splice(other, self.cur)
    }
}

pub struct Iter<'a, T> {
    front: Link<T>,
    back: Link<T>,
    len: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let node = unsafe { &*self.front?.as_ptr() };
        self.front = node.next;
        Some(&node.val)
    }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let node = unsafe { &*self.back?.as_ptr() };
        self.back = node.prev;
        Some(&node.val)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    front: Link<T>,
    back: Link<T>,
    len: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let node = unsafe { &mut *self.front?.as_ptr() };
        self.front = node.next;
        Some(&mut node.val)
    }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let node = unsafe { &mut *self.back?.as_ptr() };
        self.back = node.prev;
        Some(&mut node.val)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.pop_front() }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.pop_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self) }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> IterMut<'a, T> { self.iter_mut() }
}
