use std::ops::{Index, IndexMut};

use crate::node::{self, Color, Dir, Handle, Node};

/// The comparator-free part of the tree: arena, shape and the header that
/// replaces a sentinel node (`root`, cached `min`/`max`, `len`).
#[derive(Clone)]
pub(crate) struct RawTree<K, V> {
    pub nodes: Vec<Node>,
    // `None` marks a vacant slot, listed in `vacant`.
    pub entries: Vec<Option<(K, V)>>,
    vacant: Vec<usize>,
    pub root: Option<Handle>,
    pub min: Option<Handle>,
    pub max: Option<Handle>,
    pub len: usize,
}

impl<K, V> RawTree<K, V> {
    pub fn new() -> Self {
        Self {
            nodes: vec![],
            entries: vec![],
            vacant: vec![],
            root: None,
            min: None,
            max: None,
            len: 0,
        }
    }

    pub fn alloc(&mut self, key: K, val: V) -> Handle {
        if let Some(i) = self.vacant.pop() {
            self.nodes[i] = Node::new();
            self.entries[i] = Some((key, val));
            Handle(i)
        } else {
            self.nodes.push(Node::new());
            self.entries.push(Some((key, val)));
            Handle(self.nodes.len() - 1)
        }
    }

    /// Releases the slot of a node that is already unlinked.
    pub fn free(&mut self, h: Handle) -> (K, V) {
        let entry = self.entries[h.0].take().expect("slot is already vacant");
        self.vacant.push(h.0);
        entry
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.entries.clear();
        self.vacant.clear();
        self.root = None;
        self.min = None;
        self.max = None;
        self.len = 0;
    }

    pub fn is_live(&self, h: Handle) -> bool {
        matches!(self.entries.get(h.0), Some(Some(_)))
    }

    pub fn get(&self, h: Handle) -> Option<&(K, V)> {
        self.entries.get(h.0)?.as_ref()
    }
    pub fn get_mut(&mut self, h: Handle) -> Option<&mut (K, V)> {
        self.entries.get_mut(h.0)?.as_mut()
    }

    /// Payload of a node known to be live.
    pub fn entry(&self, h: Handle) -> &(K, V) {
        self.entries[h.0].as_ref().expect("linked node has no entry")
    }
    pub fn key(&self, h: Handle) -> &K { &self.entry(h).0 }

    pub fn is_red(&self, h: Option<Handle>) -> bool {
        h.is_some_and(|h| self[h].color == Color::Red)
    }

    /// Which child of `parent` the node `child` is.
    pub fn side(&self, parent: Handle, child: Handle) -> Dir {
        if self[parent][Dir::Left] == Some(child) {
            Dir::Left
        } else {
            Dir::Right
        }
    }

    pub fn extreme(&self, h: Handle, dir: Dir) -> Handle {
        node::extreme(&self.nodes, h, dir)
    }
    pub fn step(&self, h: Handle, dir: Dir) -> Option<Handle> {
        node::step(&self.nodes, h, dir)
    }

    /// In-order next of `pos`; from the end (`None`) this wraps to `min`.
    pub fn successor(&self, pos: Option<Handle>) -> Option<Handle> {
        match pos {
            Some(h) => self.step(h, Dir::Right),
            None => self.min,
        }
    }
    /// In-order previous of `pos`; from the end (`None`) this wraps to `max`.
    pub fn predecessor(&self, pos: Option<Handle>) -> Option<Handle> {
        match pos {
            Some(h) => self.step(h, Dir::Left),
            None => self.max,
        }
    }

    fn replace_child(
        &mut self,
        parent: Option<Handle>,
        old: Handle,
        new: Option<Handle>,
    ) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let dir = self.side(p, old);
                self[p][dir] = new;
            }
        }
    }

    /// Moves `h` one level down on the `dir` side; the child on the other
    /// side takes its place. Returns that child.
    pub fn rotate(&mut self, h: Handle, dir: Dir) -> Handle {
        let up = self[h][dir.opposite()].expect("nothing to lift");
        let middle = self[up][dir];
        let parent = self[h].parent;

        self[h][dir.opposite()] = middle;
        if let Some(m) = middle {
            self[m].parent = Some(h);
        }
        self.replace_child(parent, h, Some(up));
        self[up].parent = parent;
        self[up][dir] = Some(h);
        self[h].parent = Some(up);
        up
    }

    /// Exchanges the tree positions (links and colors) of `a` and `b`,
    /// leaving both payloads where they are.
    pub fn swap_positions(&mut self, a: Handle, b: Handle) {
        let (pa, pb) = (self[a].parent, self[b].parent);
        let sa = pa.map(|p| self.side(p, a));
        let sb = pb.map(|p| self.side(p, b));
        let (ca, cb) = (self[a].child, self[b].child);
        let relabel = move |h: Option<Handle>| match h {
            Some(h) if h == a => Some(b),
            Some(h) if h == b => Some(a),
            h => h,
        };

        match (pa, sa) {
            (Some(p), Some(dir)) if p != b => self[p][dir] = Some(b),
            (None, _) => self.root = Some(b),
            _ => {}
        }
        match (pb, sb) {
            (Some(p), Some(dir)) if p != a => self[p][dir] = Some(a),
            (None, _) => self.root = Some(a),
            _ => {}
        }
        self[a].parent = relabel(pb);
        self[b].parent = relabel(pa);
        self[a].child = cb.map(relabel);
        self[b].child = ca.map(relabel);
        for h in [a, b] {
            for c in self[h].child.into_iter().flatten() {
                self[c].parent = Some(h);
            }
        }

        let color = self[a].color;
        self[a].color = self[b].color;
        self[b].color = color;
    }
}

impl<K, V> Index<Handle> for RawTree<K, V> {
    type Output = Node;
    fn index(&self, h: Handle) -> &Node { &self.nodes[h.0] }
}

impl<K, V> IndexMut<Handle> for RawTree<K, V> {
    fn index_mut(&mut self, h: Handle) -> &mut Node { &mut self.nodes[h.0] }
}
