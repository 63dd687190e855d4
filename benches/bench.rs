use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ordered_tree::boxed::Tree;

/// Emits `lo..=hi` midpoint-first so that inserting in the returned order
/// yields a balanced tree. The tree under test never rebalances itself, so
/// inserting sequentially would degenerate it into a list and the benchmarks
/// would measure the pathological shape instead of the typical one.
fn balanced_order(lo: i64, hi: i64, out: &mut Vec<i64>) {
    if lo > hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    out.push(mid);
    balanced_order(lo, mid - 1, out);
    balanced_order(mid + 1, hi, out);
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for
/// various tree sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree, i64)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3u32, 7, 11, 15] {
        let num_nodes = 2i64.pow(num_levels) - 1;
        let largest_element_in_tree = num_nodes - 1;

        let mut order = Vec::with_capacity(num_nodes as usize);
        balanced_order(0, num_nodes - 1, &mut order);
        let tree: Tree = order.into_iter().collect();

        let id = BenchmarkId::new("boxed", largest_element_in_tree);
        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _present = black_box(tree.contains(i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.remove(i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.add(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _present = black_box(tree.contains(i + 1));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.remove(i + 1);
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
