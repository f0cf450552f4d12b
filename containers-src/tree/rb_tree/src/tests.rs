use compare::{FnCompare, StrictLess};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randgen::{Gen, Op, Ops, Permutation, StrictAsc, Values};
use sorted_bag::SortedBag;

use crate::{Handle, InvariantViolation, RbTree};

fn set_of(keys: impl IntoIterator<Item = i32>) -> RbTree<i32> {
    keys.into_iter().map(|k| (k, ())).collect()
}

fn multiset_of(keys: impl IntoIterator<Item = i32>) -> RbTree<i32> {
    let mut res = RbTree::new();
    res.emplace_duplicate(keys.into_iter().map(|k| (k, ())));
    res
}

fn keys(tree: &RbTree<i32>) -> Vec<i32> { tree.keys().copied().collect() }

#[test]
fn insert_sequence() {
    let mut tree = RbTree::new();
    for k in [10, 5, 15, 4, 18, 13, 16] {
        assert!(tree.insert(k, ()).1);
        assert!(tree.check_invariants().is_ok());
    }
    assert_eq!(keys(&tree), [4, 5, 10, 13, 15, 16, 18]);
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.check_invariants(), Ok(2));
}

#[test]
fn erase_fourth() {
    let mut tree = set_of([10, 5, 15, 4, 18, 13, 16]);
    let mut pos = tree.first();
    for _ in 0..3 {
        pos = tree.successor(pos);
    }
    let h = pos.unwrap();
    assert_eq!(tree.key(h), Some(&13));
    assert_eq!(tree.erase(h), Some((13, ())));
    assert_eq!(keys(&tree), [4, 5, 10, 15, 16, 18]);
    assert!(tree.check_invariants().is_ok());
    assert_eq!(tree.erase(h), None);
    assert_eq!(tree.len(), 6);
}

#[test]
fn duplicates() {
    let tree = multiset_of([1, 1, 2, 2, 3]);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.count(&1), 2);
    assert_eq!(tree.count(&4), 0);
    assert_eq!(tree.equal_range(&2).map(|(&k, _)| k).collect::<Vec<_>>(), [
        2, 2
    ]);
    assert_eq!(tree.equal_range(&0).count(), 0);
    assert!(tree.check_invariants().is_ok());

    let lo = tree.lower_bound(&2).unwrap();
    let hi = tree.upper_bound(&2).unwrap();
    assert_eq!(tree.key(lo), Some(&2));
    assert_eq!(tree.key(hi), Some(&3));
    let before = tree.predecessor(Some(lo)).and_then(|h| tree.key(h));
    assert_eq!(before, Some(&1));
    assert_eq!(tree.upper_bound(&3), None);
}

#[test]
fn duplicates_keep_insertion_order() {
    let mut tree = RbTree::<i32, usize>::new();
    for i in 0..20 {
        tree.insert_duplicate(i as i32 % 3, i);
    }
    assert!(tree.check_invariants().is_ok());
    for k in 0..3 {
        let got: Vec<_> = tree.equal_range(&k).map(|(_, &v)| v).collect();
        let expected: Vec<_> =
            (0..20_usize).filter(|&i| i as i32 % 3 == k).collect();
        assert_eq!(got, expected);
        assert_eq!(tree.get(&k), Some(&(k as usize)));
    }
}

#[test]
fn merge_disjoint() {
    let mut a = set_of([1, 2, 3]);
    let mut b = set_of([4, 5, 6]);
    a.merge(&mut b);
    assert_eq!(a.len(), 6);
    assert_eq!(keys(&a), [1, 2, 3, 4, 5, 6]);
    assert!(b.is_empty());
    assert_eq!(b.first(), None);
    assert!(a.check_invariants().is_ok());
    assert!(b.check_invariants().is_ok());
}

#[test]
fn merge_keeps_duplicates_in_source() {
    let mut a = set_of([1, 3, 5, 7]);
    let mut b = set_of([0, 3, 4, 7, 8]);
    a.merge(&mut b);
    assert_eq!(keys(&a), [0, 1, 3, 4, 5, 7, 8]);
    assert_eq!(keys(&b), [3, 7]);
    assert_eq!(b.len(), 2);
    assert!(a.check_invariants().is_ok());
    assert!(b.check_invariants().is_ok());

    let mut c = multiset_of([3, 7]);
    c.merge_duplicates(&mut b);
    assert_eq!(keys(&c), [3, 3, 7, 7]);
    assert!(b.is_empty());
    assert!(c.check_invariants().is_ok());
}

#[test]
fn merge_duplicates_after_equals() {
    let mut a = RbTree::<i32, char>::new();
    a.emplace_duplicate([(1, 'a'), (2, 'b')]);
    let mut b = RbTree::new();
    b.emplace_duplicate([(1, 'x'), (1, 'y')]);
    a.merge_duplicates(&mut b);
    let ones: Vec<_> = a.equal_range(&1).map(|(_, &v)| v).collect();
    assert_eq!(ones, ['a', 'x', 'y']);
}

#[test]
fn insert_erase_random_order() {
    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    for _ in 0..50 {
        let keys = StrictAsc { bound: -100..100, len: 20 }.generate(&mut rng);
        let mut tree = RbTree::new();
        let mut handles = vec![];
        let order = Permutation { len: 20 }.generate(&mut rng);
        for i in order {
            let (h, inserted) = tree.insert(keys[i], i);
            assert!(inserted);
            handles.push((h, keys[i], i));
            assert!(tree.check_invariants().is_ok());
        }
        assert_eq!(tree.len(), 20);

        let mut live = 20;
        let order = Permutation { len: 20 }.generate(&mut rng);
        for j in order {
            let (h, key, val) = handles[j];
            assert_eq!(tree.erase(h), Some((key, val)));
            live -= 1;
            assert_eq!(tree.len(), live);
            assert!(tree.check_invariants().is_ok());
            // the other handles still name their own elements
            for &(h, key, val) in &handles {
                if tree.entry(h).is_some() {
                    assert_eq!(tree.entry(h), Some((&key, &val)));
                }
            }
        }
        assert!(tree.is_empty());
        assert_eq!((tree.first(), tree.last()), (None, None));
    }
}

#[test]
fn against_naive() {
    let mut rng = ChaCha20Rng::from_seed([
        0x3A, 0x1F, 0x90, 0x4C, 0xD2, 0x77, 0x08, 0xBE, 0x6E, 0x15, 0xA9, 0x42,
        0xF0, 0x2D, 0x83, 0x5B, 0xC7, 0x19, 0x64, 0xE1, 0x0B, 0x9D, 0x38, 0x7A,
        0x26, 0xFB, 0x50, 0x8E, 0x13, 0xCA, 0x6F, 0xA4,
    ]);

    for (unique, weight) in [(true, 2), (true, 3), (false, 2), (false, 3)] {
        let ops = Ops { keys: -30..30, len: 2000, insert_weight: weight }
            .generate(&mut rng);
        let mut actual = RbTree::new();
        let mut expected = SortedBag::new();

        for op in ops {
            match op {
                Op::Insert(k) if unique => {
                    let inserted = actual.insert(k, ()).1;
                    assert_eq!(inserted, expected.insert_unique(k));
                }
                Op::Insert(k) => {
                    actual.insert_duplicate(k, ());
                    expected.insert(k);
                }
                Op::Remove(k) => {
                    let removed = actual.remove(&k).map(|(k, _)| k);
                    assert_eq!(removed, expected.remove(&k));
                }
            }
            assert_eq!(actual.len(), expected.len());
            let first = actual.first().and_then(|h| actual.key(h));
            let last = actual.last().and_then(|h| actual.key(h));
            assert_eq!((first, last), (expected.first(), expected.last()));
            assert!(actual.check_invariants().is_ok());
        }
        assert!(actual.keys().eq(expected.iter()));
        assert!(actual.keys().rev().eq(expected.iter().rev()));

        for k in -31..=31 {
            assert_eq!(actual.count(&k), expected.count(&k));
            assert_eq!(actual.contains(&k), expected.contains(&k));
            let lb = actual.lower_bound(&k).and_then(|h| actual.key(h));
            assert_eq!(lb, expected.get(expected.lower_bound(&k)));
            let ub = actual.upper_bound(&k).and_then(|h| actual.key(h));
            assert_eq!(ub, expected.get(expected.upper_bound(&k)));
        }
    }
}

#[test]
fn erase_inside_equal_runs() {
    let mut rng = ChaCha20Rng::from_seed([5; 32]);
    for bound in [1, 4, 15] {
        let keys = Values { bound: 0..bound, len: 300 }.generate(&mut rng);
        let mut tree = RbTree::new();
        let handles: Vec<_> = keys
            .iter()
            .enumerate()
            .map(|(i, &k)| tree.insert_duplicate(k, i))
            .collect();
        assert!(tree.check_invariants().is_ok());

        let order = Permutation { len: keys.len() }.generate(&mut rng);
        for (erased, i) in order.into_iter().enumerate() {
            assert_eq!(tree.erase(handles[i]), Some((keys[i], i)));
            assert_eq!(tree.len(), keys.len() - erased - 1);
            assert!(tree.check_invariants().is_ok());
            // equal keys keep their insertion order
            let pairs: Vec<_> = tree.iter().map(|(&k, &v)| (k, v)).collect();
            assert!(pairs.windows(2).all(|w| w[0] < w[1]));
            if erased % 30 == 0 {
                for (j, &h) in handles.iter().enumerate() {
                    if let Some(entry) = tree.entry(h) {
                        assert_eq!(entry, (&keys[j], &j));
                    }
                }
            }
        }
        assert!(tree.is_empty());
    }
}

#[test]
fn ghost_wraparound() {
    let tree = set_of([1, 2, 3]);
    let first = tree.first();
    let last = tree.last();
    assert_eq!(tree.successor(None), first);
    assert_eq!(tree.predecessor(None), last);
    assert_eq!(tree.successor(last), None);
    assert_eq!(tree.predecessor(first), None);

    let mut cur = tree.cursor(last);
    cur.move_next();
    assert!(cur.is_end());
    assert_eq!(cur.key(), None);
    assert_eq!(cur.peek_next().map(|(&k, _)| k), Some(1));
    cur.move_prev();
    assert_eq!(cur.key(), Some(&3));

    let empty = RbTree::<i32>::new();
    assert_eq!(empty.successor(None), None);
    assert_eq!(empty.predecessor(None), None);
}

#[test]
fn cursor_remove() {
    let mut tree = set_of(0..10);
    let start = tree.find(&0);
    let mut cur = tree.cursor_mut(start);
    while let Some(&k) = cur.key() {
        if k % 3 == 0 {
            assert_eq!(cur.remove_current(), Some((k, ())));
        } else {
            cur.move_next();
        }
    }
    assert_eq!(cur.remove_current(), None);
    assert_eq!(keys(&tree), [1, 2, 4, 5, 7, 8]);
    assert!(tree.check_invariants().is_ok());
}

#[test]
fn iterators() {
    let mut tree = RbTree::<i32, i32>::new();
    tree.emplace((0..8).map(|k| (k, k * 10)));

    let mut it = tree.iter();
    assert_eq!(it.len(), 8);
    assert_eq!(it.next(), Some((&0, &0)));
    assert_eq!(it.next_back(), Some((&7, &70)));
    assert_eq!(it.len(), 6);
    assert_eq!(it.map(|(&k, _)| k).collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);

    for (k, v) in tree.iter_mut().rev() {
        *v += k;
    }
    assert!(tree.values().copied().eq((0..8).map(|k| k * 11)));

    let from = tree.find(&2);
    let to = tree.find(&5);
    let mid: Vec<_> = tree.range_between(from, to).map(|(&k, _)| k).collect();
    assert_eq!(mid, [2, 3, 4]);
    assert_eq!(tree.range_between(from, from).count(), 0);
    assert_eq!(tree.range_between(to, None).count(), 3);

    let mut values_mut = tree.values_mut();
    *values_mut.next().unwrap() = -1;
    assert_eq!(tree.get(&0), Some(&-1));

    let owned: Vec<_> = tree.clone().into_iter().rev().collect();
    assert_eq!(owned[0], (7, 77));
    assert!(tree.clone().into_keys().eq(0..8));
    assert_eq!(tree.into_values().len(), 8);
}

#[test]
fn clone_is_deep() {
    let mut a = RbTree::<i32, String>::new();
    a.emplace((0..5).map(|k| (k, k.to_string())));
    let mut b = a.clone();
    assert_eq!(a, b);
    b.get_mut(&3).unwrap().push('!');
    b.remove(&0);
    assert_eq!(a.get(&3).map(String::as_str), Some("3"));
    assert_eq!(a.len(), 5);
    assert_ne!(a, b);
    assert!(b.check_invariants().is_ok());
}

#[test]
fn take_leaves_empty() {
    let mut a = set_of([3, 1, 2]);
    let b = std::mem::take(&mut a);
    assert!(a.is_empty());
    assert_eq!(keys(&b), [1, 2, 3]);
    a.insert(9, ());
    assert_eq!(keys(&a), [9]);
    assert!(a.check_invariants().is_ok());

    let mut c = set_of([5]);
    a.swap(&mut c);
    assert_eq!((keys(&a), keys(&c)), (vec![5], vec![9]));
    c.clear();
    assert!(c.is_empty());
    assert_eq!(c.check_invariants(), Ok(0));
}

#[test]
fn slots_are_reused() {
    let mut tree = set_of(0..4);
    let h = tree.find(&2).unwrap();
    tree.erase(h);
    let (h2, _) = tree.insert(10, ());
    assert_eq!(h, h2);
    assert_eq!(tree.key(h2), Some(&10));
    assert_eq!(tree.len(), 4);
    assert!(tree.check_invariants().is_ok());
}

#[test]
fn custom_comparators() {
    let mut desc =
        RbTree::with_comparator(StrictLess(|a: &i32, b: &i32| a > b));
    desc.emplace([(1, ()), (3, ()), (2, ())]);
    assert!(desc.keys().copied().eq([3, 2, 1]));
    assert!(desc.check_invariants().is_ok());

    let by_len = FnCompare(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    let mut words = RbTree::with_comparator(by_len);
    assert!(words.insert("aa", 1).1);
    assert!(!words.insert("bb", 2).1);
    words.insert_duplicate("cc", 3);
    words.insert("a", 4);
    assert_eq!(words.count(&"zz"), 2);
    assert!(words.keys().copied().eq(["a", "aa", "cc"]));
}

#[test]
fn find_returns_leftmost() {
    let mut tree = RbTree::<i32, usize>::new();
    let handles = tree.emplace_duplicate((0..6).map(|i| (1, i)));
    assert_eq!(tree.find(&1), Some(handles[0]));
    assert_eq!(tree.remove(&1), Some((1, 0)));
    assert_eq!(tree.find(&1), Some(handles[1]));
    assert_eq!(tree.find(&2), None);
}

#[test]
fn render_and_debug() {
    let tree = set_of([1, 2, 3, 4]);
    let expected = "\
2 (BLACK)
     L----1 (BLACK)
     R----3 (BLACK)
          R----4 (RED)
";
    assert_eq!(tree.render(), expected);
    assert_eq!(format!("{tree:?}"), "{1: (), 2: (), 3: (), 4: ()}");
    assert_eq!(RbTree::<i32>::new().render(), "");
}

#[test]
fn violations_are_reported() {
    let mut tree = set_of([1, 2, 3]);
    let root = tree.raw.root.unwrap();
    tree.raw[root].color = crate::node::Color::Red;
    assert_eq!(tree.check_invariants(), Err(InvariantViolation::RedRoot));

    let mut tree = set_of([1, 2, 3]);
    tree.raw.len = 4;
    assert_eq!(
        tree.check_invariants(),
        Err(InvariantViolation::Len { expected: 3, found: 4 })
    );

    let mut tree = set_of([1, 2, 3]);
    let h = tree.find(&3).unwrap();
    tree.raw.entries[h.0] = Some((0, ()));
    assert_eq!(tree.check_invariants(), Err(InvariantViolation::Order(h)));

    let mut tree = set_of([1, 2]);
    tree.raw.min = tree.raw.max;
    assert_eq!(tree.check_invariants(), Err(InvariantViolation::StaleExtreme));
}

#[test]
fn stale_handles() {
    let mut tree = set_of([1]);
    let bogus = Handle(42);
    assert_eq!(tree.erase(bogus), None);
    assert_eq!(tree.key(bogus), None);
    assert_eq!(tree.successor(Some(bogus)), tree.first());
    assert!(tree.cursor(Some(bogus)).is_end());
}

#[test]
fn max_size_is_positive() {
    let tree = RbTree::<u64, [u8; 64]>::new();
    assert!(tree.max_size() > 0);
    assert!(tree.max_size() < isize::MAX as usize / 64);
}
