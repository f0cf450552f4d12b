use std::ops::{Index, IndexMut};

/// A position in an [`RbTree`](crate::RbTree): the arena slot of one element.
///
/// A handle stays attached to its element until that element is erased,
/// even while other elements are inserted or erased around it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Handle(pub(crate) usize);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Dir {
    Left,
    Right,
}

impl Dir {
    pub fn opposite(self) -> Self {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// Links and color of one arena slot; the payload is stored apart.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub color: Color,
    // None iff the node is the root (or detached).
    pub parent: Option<Handle>,
    pub child: [Option<Handle>; 2],
}

impl Node {
    pub fn new() -> Self {
        Self { color: Color::Red, parent: None, child: [None, None] }
    }
}

impl Index<Dir> for Node {
    type Output = Option<Handle>;
    fn index(&self, dir: Dir) -> &Self::Output {
        match dir {
            Dir::Left => &self.child[0],
            Dir::Right => &self.child[1],
        }
    }
}

impl IndexMut<Dir> for Node {
    fn index_mut(&mut self, dir: Dir) -> &mut Self::Output {
        match dir {
            Dir::Left => &mut self.child[0],
            Dir::Right => &mut self.child[1],
        }
    }
}

/// The last node reached by following `dir` links from `h`.
pub(crate) fn extreme(nodes: &[Node], mut h: Handle, dir: Dir) -> Handle {
    while let Some(next) = nodes[h.0][dir] {
        h = next;
    }
    h
}

/// The in-order neighbor of `h` on the `dir` side, `None` past the end.
pub(crate) fn step(nodes: &[Node], h: Handle, dir: Dir) -> Option<Handle> {
    if let Some(c) = nodes[h.0][dir] {
        return Some(extreme(nodes, c, dir.opposite()));
    }
    let mut cur = h;
    while let Some(p) = nodes[cur.0].parent {
        if nodes[p.0][dir] != Some(cur) {
            return Some(p);
        }
        cur = p;
    }
    None
}
