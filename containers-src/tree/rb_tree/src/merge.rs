use compare::Compare;
use log::{debug, trace};

use crate::{node::Dir, RbTree};

impl<K, V, C: Compare<K>> RbTree<K, V, C> {
    fn merge_with(&mut self, other: &mut Self, unique: bool) {
        let incoming = other.len();
        let mut kept = 0;
        let mut cur = other.raw.min;
        while let Some(h) = cur {
            cur = other.raw.step(h, Dir::Right);
            match self.locate(other.raw.key(h), unique) {
                Ok(slot) => {
                    let (key, val) = other.raw.extract(h);
                    self.raw.attach(key, val, slot);
                }
                Err(_) => kept += 1,
            }
        }
        trace!("merged {} of {} elements", incoming - kept, incoming);
        if kept > 0 {
            debug!("{kept} equivalent keys left in the source tree");
        } else {
            other.raw.clear();
        }
    }

    /// Moves every element of `other` whose key is not in `self`.
    ///
    /// Elements with keys already present stay in `other`.
    ///
    /// ```
    /// use rb_tree::RbTree;
    ///
    /// let mut a: RbTree<_> = [1, 3].into_iter().map(|k| (k, ())).collect();
    /// let mut b: RbTree<_> = [2, 3].into_iter().map(|k| (k, ())).collect();
    /// a.merge(&mut b);
    /// assert!(a.keys().copied().eq([1, 2, 3]));
    /// assert!(b.keys().copied().eq([3]));
    /// ```
    pub fn merge(&mut self, other: &mut Self) { self.merge_with(other, true) }

    /// Moves every element of `other`, after the equivalent ones of `self`.
    pub fn merge_duplicates(&mut self, other: &mut Self) {
        self.merge_with(other, false)
    }
}
