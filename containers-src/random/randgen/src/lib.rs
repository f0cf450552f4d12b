//! Seeded random inputs for container tests.

use std::{collections::BTreeSet, ops::Range};

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `len` distinct values from `bound`, ascending.
pub struct StrictAsc<B> {
    pub bound: B,
    pub len: usize,
}

/// `len` values from `bound`, each drawn independently.
pub struct Values<B> {
    pub bound: B,
    pub len: usize,
}

/// A uniformly shuffled `0..len`.
pub struct Permutation {
    pub len: usize,
}

/// A mutation of an ordered container.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    Insert(i32),
    Remove(i32),
}

/// `len` operations on keys from `keys`; inserts are drawn with weight
/// `insert_weight` out of 4.
pub struct Ops {
    pub keys: Range<i32>,
    pub len: usize,
    pub insert_weight: u32,
}

impl Gen for Range<i32> {
    type Output = i32;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl Gen for StrictAsc<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { bound: Range { start, end }, len } = self;
        assert!(*len <= (end - start) as usize);

        // sample the complement when it is smaller
        let dense = (2 * len) as i32 > end - start;
        let count = if dense { (end - start) as usize - len } else { *len };

        let mut seen = BTreeSet::new();
        while seen.len() < count {
            seen.insert((*start..*end).generate(rng));
        }

        if dense {
            (*start..*end).filter(|x| !seen.contains(x)).collect()
        } else {
            seen.into_iter().collect()
        }
    }
}

impl Gen for Values<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        (0..self.len).map(|_| self.bound.generate(rng)).collect()
    }
}

impl Gen for Permutation {
    type Output = Vec<usize>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let mut res: Vec<_> = (0..self.len).collect();
        res.shuffle(rng);
        res
    }
}

impl Gen for Ops {
    type Output = Vec<Op>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        (0..self.len)
            .map(|_| {
                let key = self.keys.generate(rng);
                if rng.gen_range(0..4) < self.insert_weight {
                    Op::Insert(key)
                } else {
                    Op::Remove(key)
                }
            })
            .collect()
    }
}
