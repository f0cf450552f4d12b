use compare::Compare;

use crate::{
    node::{Color, Dir, Handle},
    raw::RawTree,
    RbTree,
};

impl<K, V> RawTree<K, V> {
    /// Detaches the live node `h` from the tree without freeing its slot.
    pub fn unlink(&mut self, h: Handle) {
        if let (Some(l), Some(_)) = (self[h][Dir::Left], self[h][Dir::Right]) {
            let pred = self.extreme(l, Dir::Right);
            self.swap_positions(h, pred);
        }
        // A lone child is a red leaf under a black `h`.
        if let Some(c) = self[h].child.into_iter().flatten().next() {
            self.swap_positions(h, c);
        }
        debug_assert!(self[h].child.iter().all(Option::is_none));

        if self[h].color == Color::Black && self.root != Some(h) {
            self.remove_fixup(h);
        }

        let parent = self[h].parent;
        match parent {
            None => self.root = None,
            Some(p) => {
                let dir = self.side(p, h);
                self[p][dir] = None;
            }
        }
        self[h].parent = None;

        if self.min == Some(h) {
            self.min = self.root.map(|r| self.extreme(r, Dir::Left));
        }
        if self.max == Some(h) {
            self.max = self.root.map(|r| self.extreme(r, Dir::Right));
        }
        self.len -= 1;
    }

    /// Restores the black height around `x`, a black leaf about to be cut.
    fn remove_fixup(&mut self, mut x: Handle) {
        while self.root != Some(x) && self[x].color == Color::Black {
            let Some(p) = self[x].parent else { break };
            let dir = self.side(p, x);
            let far = dir.opposite();
            let mut s = self[p][far].expect("black node has no sibling");

            if self[s].color == Color::Red {
                self[s].color = Color::Black;
                self[p].color = Color::Red;
                self.rotate(p, dir);
                s = self[p][far].expect("black node has no sibling");
            }

            if !self.is_red(self[s][dir]) && !self.is_red(self[s][far]) {
                self[s].color = Color::Red;
                if self[p].color == Color::Red {
                    self[p].color = Color::Black;
                    break;
                }
                x = p;
                continue;
            }

            if !self.is_red(self[s][far]) {
                if let Some(near) = self[s][dir] {
                    self[near].color = Color::Black;
                }
                self[s].color = Color::Red;
                self.rotate(s, far);
                s = self[p][far].expect("black node has no sibling");
            }

            self[s].color = self[p].color;
            if let Some(f) = self[s][far] {
                self[f].color = Color::Black;
            }
            self[p].color = Color::Black;
            self.rotate(p, dir);
            break;
        }
        if let Some(r) = self.root {
            self[r].color = Color::Black;
        }
    }

    /// Unlinks and frees `h`, handing back its payload.
    pub fn extract(&mut self, h: Handle) -> (K, V) {
        self.unlink(h);
        self.free(h)
    }
}

impl<K, V, C> RbTree<K, V, C> {
    /// Removes the element at `h` and returns it, or `None` if `h` does not
    /// name a live element.
    ///
    /// The handles of the other elements keep pointing at the same elements.
    pub fn erase(&mut self, h: Handle) -> Option<(K, V)> {
        self.raw.is_live(h).then(|| self.raw.extract(h))
    }
}

impl<K, V, C: Compare<K>> RbTree<K, V, C> {
    /// Removes the first element equivalent to `key`.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let h = self.find(key)?;
        Some(self.raw.extract(h))
    }
}
