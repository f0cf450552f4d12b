use std::cmp::Ordering::{Equal, Greater, Less};

use compare::Compare;

use crate::{
    node::{Color, Dir, Handle},
    raw::RawTree,
    RbTree,
};

/// Where a new node hangs: under `Some((parent, side))`, or as the root.
pub(crate) type Slot = Option<(Handle, Dir)>;

impl<K, V> RawTree<K, V> {
    /// Allocates a red node at `slot` and restores the invariants.
    pub fn attach(&mut self, key: K, val: V, slot: Slot) -> Handle {
        let h = self.alloc(key, val);
        match slot {
            None => {
                debug_assert!(self.root.is_none());
                self.root = Some(h);
                self.min = Some(h);
                self.max = Some(h);
            }
            Some((parent, dir)) => {
                debug_assert!(self[parent][dir].is_none());
                self[h].parent = Some(parent);
                self[parent][dir] = Some(h);
                if dir == Dir::Left && self.min == Some(parent) {
                    self.min = Some(h);
                }
                if dir == Dir::Right && self.max == Some(parent) {
                    self.max = Some(h);
                }
            }
        }
        self.len += 1;
        self.insert_fixup(h);
        h
    }

    fn insert_fixup(&mut self, mut x: Handle) {
        // Only a red parent can break the rules; `x` is always red here.
        while let Some(p) = self[x].parent {
            if self[p].color == Color::Black {
                break;
            }
            // A red parent without a parent is the root; recolored below.
            let Some(g) = self[p].parent else { break };
            let side = self.side(g, p);
            let uncle = self[g][side.opposite()];

            if let Some(u) = uncle.filter(|&u| self[u].color == Color::Red) {
                self[p].color = Color::Black;
                self[u].color = Color::Black;
                self[g].color = Color::Red;
                x = g;
                continue;
            }

            let mut p = p;
            if self[p][side.opposite()] == Some(x) {
                // inner grandchild: turn it into the outer case
                self.rotate(p, side);
                p = x;
            }
            self[p].color = Color::Black;
            self[g].color = Color::Red;
            self.rotate(g, side.opposite());
            break;
        }
        if let Some(r) = self.root {
            self[r].color = Color::Black;
        }
    }
}

impl<K, V, C: Compare<K>> RbTree<K, V, C> {
    /// Finds the slot for `key`. With `unique`, an equivalent node stops the
    /// descent and is returned as `Err`; otherwise equivalent keys descend to
    /// the right so duplicates stay consecutive in insertion order.
    pub(crate) fn locate(&self, key: &K, unique: bool) -> Result<Slot, Handle> {
        let mut slot = None;
        let mut cur = self.raw.root;
        while let Some(h) = cur {
            let dir = match self.cmp.compare(key, self.raw.key(h)) {
                Less => Dir::Left,
                Greater => Dir::Right,
                Equal if unique => return Err(h),
                Equal => Dir::Right,
            };
            slot = Some((h, dir));
            cur = self.raw[h][dir];
        }
        Ok(slot)
    }

    /// Inserts unless an equivalent key is present.
    ///
    /// Returns the handle of the new element, or of the element that blocked
    /// the insertion, and whether the insertion took place. A rejected
    /// `(key, val)` is dropped.
    ///
    /// ```
    /// use rb_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// let (h, inserted) = tree.insert(5, "five");
    /// assert!(inserted);
    /// assert_eq!(tree.insert(5, "cinq"), (h, false));
    /// assert_eq!(tree.get(&5), Some(&"five"));
    /// ```
    pub fn insert(&mut self, key: K, val: V) -> (Handle, bool) {
        match self.locate(&key, true) {
            Ok(slot) => (self.raw.attach(key, val, slot), true),
            Err(h) => (h, false),
        }
    }

    /// Inserts even if equivalent keys are present; the new element is placed
    /// after all of them.
    pub fn insert_duplicate(&mut self, key: K, val: V) -> Handle {
        match self.locate(&key, false) {
            Ok(slot) => self.raw.attach(key, val, slot),
            Err(_) => unreachable!(),
        }
    }

    /// Unique insertion of every item, in order.
    pub fn emplace<I>(&mut self, iter: I) -> Vec<(Handle, bool)>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        iter.into_iter().map(|(k, v)| self.insert(k, v)).collect()
    }

    /// Duplicate-permitting insertion of every item, in order.
    pub fn emplace_duplicate<I>(&mut self, iter: I) -> Vec<Handle>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        iter.into_iter().map(|(k, v)| self.insert_duplicate(k, v)).collect()
    }
}
