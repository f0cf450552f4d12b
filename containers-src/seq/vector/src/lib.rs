use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    mem::{size_of, MaybeUninit},
    ops::{Deref, DerefMut},
    ptr, slice,
};

use container_error::ContainerError;
use log::trace;

/// A growable contiguous buffer.
///
/// `buf[..len]` is initialized. The capacity doubles when a push finds the
/// buffer full, starting from one element.
pub struct Vector<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
}

fn uninit_buf<T>(cap: usize) -> Box<[MaybeUninit<T>]> {
    let mut buf = Vec::with_capacity(cap);
    // SAFETY: `MaybeUninit<T>` is valid uninitialized.
    unsafe { buf.set_len(cap) };
    buf.into_boxed_slice()
}

impl<T> Vector<T> {
    pub fn new() -> Self { Self { buf: uninit_buf(0), len: 0 } }

    pub fn with_capacity(cap: usize) -> Self {
        Self { buf: uninit_buf(cap), len: 0 }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }
    pub fn capacity(&self) -> usize { self.buf.len() }
    pub fn max_size(&self) -> usize {
        isize::MAX as usize / size_of::<T>().max(1)
    }

    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast(), self.len) }
    }
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast(), self.len)
        }
    }

    fn realloc(&mut self, cap: usize) {
        debug_assert!(cap >= self.len);
        trace!("reallocating vector: capacity {} -> {cap}", self.capacity());
        let mut buf = uninit_buf(cap);
        unsafe {
            ptr::copy_nonoverlapping(
                self.buf.as_ptr(),
                buf.as_mut_ptr(),
                self.len,
            );
        }
        self.buf = buf;
    }

    fn grow_for_one(&mut self) {
        if self.len == self.capacity() {
            let cap = (2 * self.capacity()).max(1);
            self.realloc(cap);
        }
    }

    /// Makes the capacity at least `cap`. Never shrinks.
    pub fn reserve(&mut self, cap: usize) -> Result<(), ContainerError> {
        let max = self.max_size();
        if cap > max {
            let requested = cap;
            return Err(ContainerError::CapacityOverflow { requested, max });
        }
        if cap > self.capacity() {
            self.realloc(cap);
        }
        Ok(())
    }

    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            self.realloc(self.len);
        }
    }

    pub fn at(&self, i: usize) -> Result<&T, ContainerError> {
        ContainerError::check_index(i, self.len)?;
        Ok(&self.as_slice()[i])
    }
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, ContainerError> {
        ContainerError::check_index(i, self.len)?;
        Ok(&mut self.as_mut_slice()[i])
    }

    pub fn front(&self) -> Result<&T, ContainerError> {
        self.first().ok_or(ContainerError::Empty("front"))
    }
    pub fn back(&self) -> Result<&T, ContainerError> {
        self.last().ok_or(ContainerError::Empty("back"))
    }

    pub fn push_back(&mut self, x: T) {
        self.grow_for_one();
        self.buf[self.len].write(x);
        self.len += 1;
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Inserts `x` before position `i` (`i == len` appends) and returns `i`.
    pub fn insert(&mut self, i: usize, x: T) -> Result<usize, ContainerError> {
        ContainerError::check_index(i, self.len + 1)?;
        self.grow_for_one();
        unsafe {
            let p = self.buf.as_mut_ptr().add(i);
            ptr::copy(p, p.add(1), self.len - i);
        }
        self.buf[i].write(x);
        self.len += 1;
        Ok(i)
    }

    /// Removes and returns the element at `i`, shifting the tail left.
    pub fn erase(&mut self, i: usize) -> Result<T, ContainerError> {
        ContainerError::check_index(i, self.len)?;
        let res = unsafe { self.buf[i].assume_init_read() };
        unsafe {
            let p = self.buf.as_mut_ptr().add(i);
            ptr::copy(p.add(1), p, self.len - i - 1);
        }
        self.len -= 1;
        Ok(res)
    }

    /// Inserts the items, in order, starting before position `i`. Returns
    /// the position just past the inserted run.
    pub fn emplace<I>(
        &mut self,
        i: usize,
        iter: I,
    ) -> Result<usize, ContainerError>
    where
        I: IntoIterator<Item = T>,
    {
        ContainerError::check_index(i, self.len + 1)?;
        let mut pos = i;
        for x in iter {
            pos = self.insert(pos, x)? + 1;
        }
        Ok(pos)
    }

    pub fn emplace_back<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push_back(x);
        }
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        unsafe {
            let elems = ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().cast::<T>(),
                len,
            );
            ptr::drop_in_place(elems);
        }
    }

    pub fn swap(&mut self, other: &mut Self) { std::mem::swap(self, other) }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) { self.clear() }
}

impl<T> Default for Vector<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Deref for Vector<T> {
    type Target = [T];
    fn deref(&self) -> &[T] { self.as_slice() }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut res = Self::with_capacity(self.capacity());
        res.emplace_back(self.iter().cloned());
        res
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool { self.as_slice() == other.as_slice() }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.emplace_back(iter)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(arr: [T; N]) -> Self {
        let mut res = Self::with_capacity(N);
        res.extend(arr);
        res
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> slice::Iter<'a, T> { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> slice::IterMut<'a, T> { self.iter_mut() }
}

/// Owning iterator; `buf[front..back]` is still initialized.
pub struct IntoIter<T> {
    buf: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> IntoIter<T> {
        let back = std::mem::take(&mut self.len);
        let buf = std::mem::replace(&mut self.buf, uninit_buf(0));
        IntoIter { buf, front: 0, back }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.front += 1;
        Some(unsafe { self.buf[self.front - 1].assume_init_read() })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(unsafe { self.buf[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for x in &mut self.buf[self.front..self.back] {
            unsafe { x.assume_init_drop() }
        }
    }
}
