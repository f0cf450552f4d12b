use crate::{node::Handle, raw::RawTree};

/// A read-only position in a tree, possibly the end (the "ghost" position).
///
/// Moving forward from the last element reaches the ghost, and moving forward
/// from the ghost wraps around to the first element; backward is symmetric.
///
/// ```
/// use rb_tree::RbTree;
///
/// let tree: RbTree<_> = [1, 2].into_iter().map(|k| (k, ())).collect();
/// let mut cur = tree.cursor(tree.first());
/// assert_eq!(cur.key(), Some(&1));
/// cur.move_next();
/// cur.move_next();
/// assert!(cur.is_end());
/// cur.move_next();
/// assert_eq!(cur.key(), Some(&1));
/// ```
pub struct Cursor<'a, K, V> {
    raw: &'a RawTree<K, V>,
    pos: Option<Handle>,
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self { *self }
}
impl<K, V> Copy for Cursor<'_, K, V> {}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(raw: &'a RawTree<K, V>, pos: Option<Handle>) -> Self {
        Self { raw, pos: pos.filter(|&h| raw.is_live(h)) }
    }

    pub fn handle(&self) -> Option<Handle> { self.pos }
    pub fn is_end(&self) -> bool { self.pos.is_none() }

    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        let (k, v) = self.raw.get(self.pos?)?;
        Some((k, v))
    }
    pub fn key(&self) -> Option<&'a K> { self.get().map(|(k, _)| k) }
    pub fn value(&self) -> Option<&'a V> { self.get().map(|(_, v)| v) }

    pub fn move_next(&mut self) { self.pos = self.raw.successor(self.pos) }
    pub fn move_prev(&mut self) { self.pos = self.raw.predecessor(self.pos) }

    /// The element `move_next` would reach, without moving.
    pub fn peek_next(&self) -> Option<(&'a K, &'a V)> {
        let mut next = *self;
        next.move_next();
        next.get()
    }
    pub fn peek_prev(&self) -> Option<(&'a K, &'a V)> {
        let mut prev = *self;
        prev.move_prev();
        prev.get()
    }
}

/// A position that can also modify values and remove the element under it.
pub struct CursorMut<'a, K, V> {
    raw: &'a mut RawTree<K, V>,
    pos: Option<Handle>,
}

impl<'a, K, V> CursorMut<'a, K, V> {
    pub(crate) fn new(raw: &'a mut RawTree<K, V>, pos: Option<Handle>) -> Self {
        let pos = pos.filter(|&h| raw.is_live(h));
        Self { raw, pos }
    }

    pub fn handle(&self) -> Option<Handle> { self.pos }
    pub fn is_end(&self) -> bool { self.pos.is_none() }

    pub fn get(&self) -> Option<(&K, &V)> {
        let (k, v) = self.raw.get(self.pos?)?;
        Some((k, v))
    }
    pub fn key(&self) -> Option<&K> { self.get().map(|(k, _)| k) }
    pub fn value(&self) -> Option<&V> { self.get().map(|(_, v)| v) }
    pub fn value_mut(&mut self) -> Option<&mut V> {
        Some(&mut self.raw.get_mut(self.pos?)?.1)
    }

    pub fn move_next(&mut self) { self.pos = self.raw.successor(self.pos) }
    pub fn move_prev(&mut self) { self.pos = self.raw.predecessor(self.pos) }

    /// Read-only view at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, K, V> {
        Cursor { raw: self.raw, pos: self.pos }
    }

    /// Removes the element under the cursor and moves to its successor.
    ///
    /// At the end this does nothing and returns `None`.
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        let h = self.pos?;
        self.pos = self.raw.successor(Some(h));
        Some(self.raw.extract(h))
    }
}
