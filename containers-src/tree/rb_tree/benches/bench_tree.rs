use std::collections::BTreeSet;

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rb_tree::RbTree;

fn rand_seq<T, I, R>(iter: I, rng: &mut R) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let mut res: Vec<_> = iter.into_iter().collect();
    res.shuffle(rng);
    res
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("rb_tree");

    let mut rng = ChaCha20Rng::from_seed([
        0x9B, 0x41, 0xD7, 0x0E, 0x68, 0xF3, 0x2A, 0xC5, 0x17, 0x8D, 0x5E, 0xB0,
        0x73, 0x04, 0xEA, 0x39, 0xA6, 0x1C, 0x95, 0x4F, 0xD8, 0x62, 0x0B, 0xF7,
        0x3E, 0xC9, 0x50, 0x8A, 0x21, 0xBD, 0x76, 0xE4,
    ]);

    for len in [1_000, 100_000] {
        let keys = rand_seq(0..len, &mut rng);
        let order = rand_seq(0..len, &mut rng);

        let id = BenchmarkId::new("insert", len);
        group.bench_with_input(id, &keys, |b, keys| {
            b.iter(|| {
                let mut tree = RbTree::new();
                for &k in keys {
                    tree.insert(k, ());
                }
                tree
            })
        });
        let id = BenchmarkId::new("btreeset_insert", len);
        group.bench_with_input(id, &keys, |b, keys| {
            b.iter(|| keys.iter().copied().collect::<BTreeSet<_>>())
        });

        let tree: RbTree<_> = keys.iter().map(|&k| (k, ())).collect();
        let id = BenchmarkId::new("find", len);
        group.bench_with_input(id, &order, |b, order| {
            b.iter(|| {
                order.iter().filter(|&k| tree.contains(black_box(k))).count()
            })
        });
        let id = BenchmarkId::new("erase", len);
        group.bench_with_input(id, &order, |b, order| {
            b.iter(|| {
                let mut tree = tree.clone();
                for k in order {
                    tree.remove(k);
                }
                tree
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tree);
criterion_main!(benches);
