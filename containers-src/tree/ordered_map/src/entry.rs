use compare::Compare;
use rb_tree::{Handle, RbTree};

pub enum Entry<'a, K, V, C> {
    Vacant(VacantEntry<'a, K, V, C>),
    Occupied(OccupiedEntry<'a, K, V, C>),
}
pub struct VacantEntry<'a, K, V, C> {
    key: K,
    tree: &'a mut RbTree<K, V, C>,
}
pub struct OccupiedEntry<'a, K, V, C> {
    handle: Handle,
    tree: &'a mut RbTree<K, V, C>,
}

impl<'a, K, V, C: Compare<K>> Entry<'a, K, V, C> {
    pub(crate) fn new(key: K, tree: &'a mut RbTree<K, V, C>) -> Self {
        match tree.find(&key) {
            Some(handle) => Self::Occupied(OccupiedEntry { handle, tree }),
            None => Self::Vacant(VacantEntry { key, tree }),
        }
    }

    pub fn and_modify<F: FnOnce(&mut V)>(self, f: F) -> Self {
        match self {
            Self::Occupied(mut entry) => {
                f(entry.get_mut());
                Self::Occupied(entry)
            }
            Self::Vacant(entry) => Self::Vacant(entry),
        }
    }

    pub fn key(&self) -> &K {
        match *self {
            Self::Occupied(ref entry) => entry.key(),
            Self::Vacant(ref entry) => entry.key(),
        }
    }
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }
    pub fn or_insert(self, default: V) -> &'a mut V {
        self.or_insert_with(|| default)
    }
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Self::Occupied(entry) => entry.into_mut(),
            Self::Vacant(entry) => entry.insert(default()),
        }
    }
    pub fn or_insert_with_key<F: FnOnce(&K) -> V>(
        self,
        default: F,
    ) -> &'a mut V {
        match self {
            Self::Occupied(entry) => entry.into_mut(),
            Self::Vacant(entry) => {
                let value = default(entry.key());
                entry.insert(value)
            }
        }
    }
}

impl<'a, K, V, C: Compare<K>> VacantEntry<'a, K, V, C> {
    pub fn into_key(self) -> K { self.key }
    pub fn key(&self) -> &K { &self.key }
    pub fn insert(self, value: V) -> &'a mut V {
        let Self { key, tree } = self;
        let (h, inserted) = tree.insert(key, value);
        debug_assert!(inserted);
        tree.value_mut(h).expect("inserted element is live")
    }
}

impl<'a, K, V, C> OccupiedEntry<'a, K, V, C> {
    pub fn handle(&self) -> Handle { self.handle }
    pub fn key(&self) -> &K { self.entry().0 }
    pub fn get(&self) -> &V { self.entry().1 }
    pub fn get_mut(&mut self) -> &mut V {
        self.tree.value_mut(self.handle).expect("occupied entry is live")
    }
    pub fn into_mut(self) -> &'a mut V {
        let Self { handle, tree } = self;
        tree.value_mut(handle).expect("occupied entry is live")
    }
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(self.get_mut(), value)
    }
    pub fn remove(self) -> V { self.remove_entry().1 }
    pub fn remove_entry(self) -> (K, V) {
        self.tree.erase(self.handle).expect("occupied entry is live")
    }

    fn entry(&self) -> (&K, &V) {
        self.tree.entry(self.handle).expect("occupied entry is live")
    }
}
