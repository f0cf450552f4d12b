use std::{cmp::Ordering, fmt::Debug, fmt::Write};

use compare::Compare;
use thiserror::Error;

use crate::{
    node::{Color, Dir, Handle},
    RbTree,
};

/// A broken structural property found by [`RbTree::check_invariants`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("the root is red")]
    RedRoot,
    #[error("red node {0:?} has a red child")]
    RedRed(Handle),
    #[error("subtrees of {0:?} differ in black height")]
    BlackHeight(Handle),
    #[error("node {0:?} is out of order")]
    Order(Handle),
    #[error("node {0:?} disagrees with its parent link")]
    ParentLink(Handle),
    #[error("cached first or last node is stale")]
    StaleExtreme,
    #[error("length is {found} but {expected} nodes are linked")]
    Len { expected: usize, found: usize },
}

impl<K, V, C: Compare<K>> RbTree<K, V, C> {
    /// Verifies the red-black and ordering properties, returning the black
    /// height of the tree (0 when empty).
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        let raw = &self.raw;
        let Some(root) = raw.root else {
            if raw.min.is_some() || raw.max.is_some() {
                return Err(InvariantViolation::StaleExtreme);
            }
            return match raw.len {
                0 => Ok(0),
                found => Err(InvariantViolation::Len { expected: 0, found }),
            };
        };
        if raw[root].parent.is_some() {
            return Err(InvariantViolation::ParentLink(root));
        }
        if raw[root].color == Color::Red {
            return Err(InvariantViolation::RedRoot);
        }

        let mut count = 0;
        let height = self.black_height(root, &mut count)?;
        if count != raw.len {
            let found = raw.len;
            return Err(InvariantViolation::Len { expected: count, found });
        }
        if raw.min != Some(raw.extreme(root, Dir::Left))
            || raw.max != Some(raw.extreme(root, Dir::Right))
        {
            return Err(InvariantViolation::StaleExtreme);
        }

        let mut cur = raw.min;
        while let Some(h) = cur {
            cur = raw.step(h, Dir::Right);
            if let Some(next) = cur {
                let ord = self.cmp.compare(raw.key(h), raw.key(next));
                if ord == Ordering::Greater {
                    return Err(InvariantViolation::Order(next));
                }
            }
        }
        Ok(height)
    }

    fn black_height(
        &self,
        h: Handle,
        count: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        let raw = &self.raw;
        *count += 1;
        let mut heights = [0; 2];
        for (i, c) in raw[h].child.into_iter().enumerate() {
            let Some(c) = c else { continue };
            if raw[c].parent != Some(h) {
                return Err(InvariantViolation::ParentLink(c));
            }
            if raw[h].color == Color::Red && raw[c].color == Color::Red {
                return Err(InvariantViolation::RedRed(h));
            }
            heights[i] = self.black_height(c, count)?;
        }
        if heights[0] != heights[1] {
            return Err(InvariantViolation::BlackHeight(h));
        }
        Ok(heights[0] + (raw[h].color == Color::Black) as usize)
    }
}

impl<K: Debug, V, C> RbTree<K, V, C> {
    /// Draws the tree sideways, one node per line, with its side and color.
    ///
    /// ```
    /// use rb_tree::RbTree;
    ///
    /// let tree: RbTree<_> = [2, 1, 3].into_iter().map(|k| (k, ())).collect();
    /// assert_eq!(
    ///     tree.render(),
    ///     "2 (BLACK)\n     L----1 (RED)\n     R----3 (RED)\n"
    /// );
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.raw.root {
            self.render_node(&mut out, root, "", None);
        }
        out
    }

    fn render_node(
        &self,
        out: &mut String,
        h: Handle,
        indent: &str,
        side: Option<Dir>,
    ) {
        let label = match side {
            None => "",
            Some(Dir::Left) => "L----",
            Some(Dir::Right) => "R----",
        };
        let color = match self.raw[h].color {
            Color::Red => "RED",
            Color::Black => "BLACK",
        };
        let _ = writeln!(out, "{indent}{label}{:?} ({color})", self.raw.key(h));

        let indent = format!("{indent}     ");
        for dir in [Dir::Left, Dir::Right] {
            if let Some(c) = self.raw[h][dir] {
                self.render_node(out, c, &indent, Some(dir));
            }
        }
    }
}
